//! # Kairo Designer
//!
//! Impedance calculator and session state for an educational circuit
//! designer.
//!
//! This library provides:
//! - A bounded element list of up to two resistors, inductors or capacitors
//! - Closed-form series/parallel impedance, current and voltage calculation
//!   for DC and single-frequency AC sources
//! - The designer session state (draft, source fields, errors, show flag)
//! - A delegated sign-in capability that builds identity-service redirects
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`circuit`] - Element, source and topology types, and the element list
//! - [`components`] - Impedance models for R, L and C
//! - [`solver`] - Series/parallel combination and the computed result
//! - [`designer`] - Session state driven by the form
//! - [`auth`] - Sign-in redirect construction
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! kairo --element r:10 --element c:1uF --source ac --voltage 5
//! ```
//!
//! ### Library
//!
//! ```
//! use kairo_designer::{CircuitElement, DesignerState, ElementKind, SourceKind};
//!
//! let mut designer = DesignerState::new();
//! designer.add_element(CircuitElement::new(ElementKind::Resistor, 10.0))?;
//! designer.set_source_kind(SourceKind::Dc);
//!
//! let result = designer.generate()?;
//! assert_eq!(result.total_current.value(), Some(0.5));
//! # Ok::<(), kairo_designer::DesignerError>(())
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { WasmCircuitDesigner } from 'kairo_designer';
//!
//! const designer = new WasmCircuitDesigner();
//! designer.add_element('resistor', '10', '');
//! const result = JSON.parse(designer.generate());
//! ```

pub mod auth;
pub mod circuit;
pub mod components;
pub mod designer;
pub mod error;
pub mod solver;

// Re-export main types for convenience
pub use circuit::{CircuitElement, ElementKind, ElementList, SourceKind, SourceSpec, Topology};
pub use components::Magnitude;
pub use designer::{DesignerPhase, DesignerState};
pub use error::{DesignerError, Result};
pub use solver::{generate, solve, CircuitResult, ElementReading, SolverConfig};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmCircuitDesigner;

/// Maximum number of elements in a circuit
pub const MAX_ELEMENTS: usize = 2;

/// Frequency used for AC reactance when none is configured (Hz)
pub const REFERENCE_FREQUENCY_HZ: f64 = 50.0;
