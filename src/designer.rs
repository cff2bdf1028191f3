//! Designer session state.
//!
//! [`DesignerState`] holds everything the circuit designer form edits: the
//! element list, the pending draft, the raw source fields, the "show circuit"
//! flag and the current error message. Every action runs to completion and
//! either succeeds (clearing the error) or stores a message and leaves the
//! state as it was.
//!
//! Once a circuit has been generated the flag stays set. Edits made
//! afterwards are reflected the next time [`DesignerState::circuit`] is read,
//! so the displayed result always describes the current elements.

use serde::Serialize;
use tracing::{debug, trace};

use crate::circuit::{parse_value, CircuitElement, ElementKind, ElementList, SourceKind, SourceSpec};
use crate::error::{DesignerError, Result};
use crate::solver::{self, CircuitResult, SolverConfig};

/// Coarse lifecycle of a designer session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DesignerPhase {
    /// No elements, nothing generated
    Empty,
    /// Some elements, but the source fields do not parse
    Accumulating,
    /// At least one element and a valid source
    Ready,
    /// Generated, and the list has not changed since
    Generated,
}

/// The element being composed before it is added.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Draft {
    pub kind: ElementKind,
    /// `None` while the value field is empty or unparseable
    pub value: Option<f64>,
    pub unit: String,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            kind: ElementKind::Resistor,
            value: None,
            unit: ElementKind::Resistor.default_unit().to_string(),
        }
    }
}

/// Raw source form fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceFields {
    pub kind: SourceKind,
    pub voltage: String,
    pub branch_count: String,
}

impl Default for SourceFields {
    fn default() -> Self {
        Self {
            kind: SourceKind::Ac,
            voltage: "5".to_string(),
            branch_count: "1".to_string(),
        }
    }
}

impl SourceFields {
    /// Parse into a typed source.
    pub fn parse(&self) -> Result<SourceSpec> {
        SourceSpec::parse(self.kind, &self.voltage, &self.branch_count)
    }
}

/// Circuit designer state for one session.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DesignerState {
    elements: ElementList,
    draft: Draft,
    source: SourceFields,
    show_circuit: bool,
    /// Set by a successful generate, cleared by any list edit
    #[serde(skip)]
    generated: bool,
    error: Option<String>,
    #[serde(skip)]
    config: SolverConfig,
}

impl DesignerState {
    /// Create a fresh session with the default solver configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fresh session with a custom solver configuration.
    pub fn with_config(config: SolverConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    // ============ Element List ============

    /// Add an element to the list.
    pub fn add_element(&mut self, element: CircuitElement) -> Result<()> {
        let outcome = self.elements.add(element);
        self.record(outcome)?;
        self.generated = false;
        Ok(())
    }

    /// Add the pending draft. On success the draft value is cleared; its kind
    /// and unit are kept for the next entry.
    pub fn add_draft(&mut self) -> Result<()> {
        let element = CircuitElement::with_unit(
            self.draft.kind,
            // Unset draft values fail validation the same way as zero.
            self.draft.value.unwrap_or(f64::NAN),
            self.draft.unit.clone(),
        );
        self.add_element(element)?;
        self.draft.value = None;
        Ok(())
    }

    /// Remove the element at `index`.
    pub fn remove_element(&mut self, index: usize) -> Result<CircuitElement> {
        let outcome = self.elements.remove(index);
        let removed = self.record(outcome)?;
        self.generated = false;
        Ok(removed)
    }

    /// The current element list.
    pub fn elements(&self) -> &ElementList {
        &self.elements
    }

    /// False once the list is full.
    pub fn can_add(&self) -> bool {
        !self.elements.is_full()
    }

    // ============ Draft ============

    /// Select the draft kind; the unit resets to the kind's default.
    pub fn set_draft_kind(&mut self, kind: ElementKind) {
        self.draft.kind = kind;
        self.draft.unit = kind.default_unit().to_string();
    }

    /// Set the draft value from the form field. Unparseable text unsets it.
    pub fn set_draft_value(&mut self, text: &str) {
        self.draft.value = parse_value(text);
        trace!(text, value = ?self.draft.value, "draft value");
    }

    /// Override the draft unit.
    pub fn set_draft_unit(&mut self, unit: impl Into<String>) {
        self.draft.unit = unit.into();
    }

    /// The pending draft.
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    // ============ Source ============

    /// Select DC or AC.
    pub fn set_source_kind(&mut self, kind: SourceKind) {
        self.source.kind = kind;
    }

    /// Set the voltage field text.
    pub fn set_voltage(&mut self, text: impl Into<String>) {
        self.source.voltage = text.into();
    }

    /// Set the branch count field text.
    pub fn set_branch_count(&mut self, text: impl Into<String>) {
        self.source.branch_count = text.into();
    }

    /// The raw source fields.
    pub fn source(&self) -> &SourceFields {
        &self.source
    }

    // ============ Generation ============

    /// Generate the circuit from the current state.
    ///
    /// On success the circuit is shown and the error cleared. On failure the
    /// error message is stored and the show flag is left as it was.
    pub fn generate(&mut self) -> Result<CircuitResult> {
        let outcome = self.compute();
        let result = self.record(outcome)?;
        self.show_circuit = true;
        self.generated = true;
        Ok(result)
    }

    /// The result to display, recomputed from the live state.
    ///
    /// `None` until a circuit has been generated.
    pub fn circuit(&self) -> Option<Result<CircuitResult>> {
        self.show_circuit.then(|| self.compute())
    }

    /// True once a circuit has been generated.
    pub fn show_circuit(&self) -> bool {
        self.show_circuit
    }

    /// The current error message, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The session phase.
    ///
    /// An edit after generation drops back to `Ready` or `Empty` while the
    /// show flag stays set.
    pub fn phase(&self) -> DesignerPhase {
        if self.elements.is_empty() {
            DesignerPhase::Empty
        } else if self.generated {
            DesignerPhase::Generated
        } else if self.source.parse().is_ok() {
            DesignerPhase::Ready
        } else {
            DesignerPhase::Accumulating
        }
    }

    fn compute(&self) -> Result<CircuitResult> {
        if self.elements.is_empty() {
            return Err(DesignerError::EmptyCircuit);
        }
        let source = self.source.parse()?;
        solver::solve(self.elements.as_slice(), &source, &self.config)
    }

    /// Store or clear the error message according to `outcome`.
    fn record<T>(&mut self, outcome: Result<T>) -> Result<T> {
        match &outcome {
            Ok(_) => self.error = None,
            Err(e) => {
                debug!(error = %e, "designer action rejected");
                self.error = Some(e.to_string());
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_form() {
        let state = DesignerState::new();
        assert_eq!(state.source().kind, SourceKind::Ac);
        assert_eq!(state.source().voltage, "5");
        assert_eq!(state.source().branch_count, "1");
        assert_eq!(state.draft().unit, "Ω");
        assert_eq!(state.phase(), DesignerPhase::Empty);
        assert!(state.circuit().is_none());
    }

    #[test]
    fn test_draft_kind_resets_unit() {
        let mut state = DesignerState::new();
        state.set_draft_unit("kΩ");
        state.set_draft_kind(ElementKind::Capacitor);
        assert_eq!(state.draft().unit, "μF");
    }

    #[test]
    fn test_add_draft_clears_value() {
        let mut state = DesignerState::new();
        state.set_draft_kind(ElementKind::Inductor);
        state.set_draft_value("10");
        state.add_draft().unwrap();

        assert_eq!(state.draft().value, None);
        assert_eq!(state.draft().kind, ElementKind::Inductor);
        assert_eq!(state.elements().len(), 1);
        assert_eq!(state.phase(), DesignerPhase::Ready);
    }

    #[test]
    fn test_unset_draft_rejected() {
        let mut state = DesignerState::new();
        state.set_draft_value("NaN");
        assert!(matches!(
            state.add_draft(),
            Err(DesignerError::InvalidValue { .. })
        ));
        assert!(state.elements().is_empty());
        assert!(state.error().is_some());
    }

    #[test]
    fn test_success_clears_error() {
        let mut state = DesignerState::new();
        assert!(state.generate().is_err());
        assert!(state.error().is_some());

        state
            .add_element(CircuitElement::new(ElementKind::Resistor, 1.0))
            .unwrap();
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_bad_voltage_does_not_show() {
        let mut state = DesignerState::new();
        state
            .add_element(CircuitElement::new(ElementKind::Resistor, 1.0))
            .unwrap();
        state.set_voltage("volts");

        assert!(state.generate().is_err());
        assert!(!state.show_circuit());
        assert!(state.error().unwrap().contains("voltage"));
        assert_eq!(state.phase(), DesignerPhase::Accumulating);
    }

    #[test]
    fn test_list_edit_leaves_generated_phase() {
        let mut state = DesignerState::new();
        state
            .add_element(CircuitElement::new(ElementKind::Resistor, 1.0))
            .unwrap();
        state.generate().unwrap();
        assert_eq!(state.phase(), DesignerPhase::Generated);

        state
            .add_element(CircuitElement::new(ElementKind::Resistor, 2.0))
            .unwrap();
        assert_eq!(state.phase(), DesignerPhase::Ready);
        assert!(state.show_circuit());

        state.generate().unwrap();
        assert!(state.remove_element(5).is_err());
        assert_eq!(state.phase(), DesignerPhase::Generated);

        state.remove_element(0).unwrap();
        assert_eq!(state.phase(), DesignerPhase::Ready);
        assert!(state.show_circuit());
    }
}
