//! The bounded, ordered element list.

use serde::Serialize;
use tracing::{debug, trace};

use super::{validate_element, CircuitElement};
use crate::error::{DesignerError, Result};
use crate::MAX_ELEMENTS;

/// An ordered list of at most [`MAX_ELEMENTS`] elements.
///
/// Insertion order is preserved. Failed operations never mutate the list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ElementList {
    elements: Vec<CircuitElement>,
}

impl ElementList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element.
    ///
    /// Capacity is checked before the value, so a full list reports
    /// [`DesignerError::CapacityExceeded`] even for an invalid draft.
    pub fn add(&mut self, element: CircuitElement) -> Result<()> {
        if self.is_full() {
            debug!(len = self.len(), "rejecting element, list is full");
            return Err(DesignerError::CapacityExceeded { max: MAX_ELEMENTS });
        }

        validate_element(&element)?;

        trace!(%element, index = self.len(), "element added");
        self.elements.push(element);
        Ok(())
    }

    /// Remove the element at `index`, shifting later elements down.
    pub fn remove(&mut self, index: usize) -> Result<CircuitElement> {
        if index >= self.len() {
            debug!(index, len = self.len(), "rejecting removal");
            return Err(DesignerError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }

        let element = self.elements.remove(index);
        trace!(%element, index, "element removed");
        Ok(element)
    }

    /// Remove all elements.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True when no elements are present.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// True when no further element can be added.
    pub fn is_full(&self) -> bool {
        self.elements.len() >= MAX_ELEMENTS
    }

    /// Get an element by position.
    pub fn get(&self, index: usize) -> Option<&CircuitElement> {
        self.elements.get(index)
    }

    /// Iterate over the elements in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, CircuitElement> {
        self.elements.iter()
    }

    /// The elements as a slice.
    pub fn as_slice(&self) -> &[CircuitElement] {
        &self.elements
    }
}

impl<'a> IntoIterator for &'a ElementList {
    type Item = &'a CircuitElement;
    type IntoIter = std::slice::Iter<'a, CircuitElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
