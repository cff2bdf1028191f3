//! Circuit description and the bounded element list.
//!
//! This module provides the typed form of everything a user enters: the
//! elements ([`CircuitElement`]), the [`ElementList`] that holds at most
//! [`MAX_ELEMENTS`](crate::MAX_ELEMENTS) of them, and the [`SourceSpec`] that
//! selects the supply and topology.

mod list;
mod types;
mod units;
mod validate;

pub use list::ElementList;
pub use types::*;
pub use units::{parse_value, unit_scale};
pub use validate::validate_element;
