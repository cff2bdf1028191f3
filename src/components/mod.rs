//! Component models for impedance calculation.
//!
//! This module provides models for the supported passive elements:
//! - Linear: Resistor, Capacitor, Inductor
//!
//! Each model evaluates its complex impedance at one angular frequency.

mod impedance;
mod linear;

pub use impedance::{reciprocal, Impedance, Magnitude};
pub use linear::{Capacitor, Inductor, Resistor};

use crate::circuit::{validate_element, CircuitElement, ElementKind};
use crate::error::Result;

/// A circuit component with its value in SI units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Component {
    Resistor(Resistor),
    Capacitor(Capacitor),
    Inductor(Inductor),
}

impl Component {
    /// Create a component from a user-entered element.
    ///
    /// The element is validated and its unit prefix applied.
    pub fn from_element(element: &CircuitElement) -> Result<Self> {
        let si_value = validate_element(element)?;
        Ok(match element.kind {
            ElementKind::Resistor => Component::Resistor(Resistor::new(si_value)),
            ElementKind::Capacitor => Component::Capacitor(Capacitor::new(si_value)),
            ElementKind::Inductor => Component::Inductor(Inductor::new(si_value)),
        })
    }

    /// Get the component kind.
    pub fn kind(&self) -> ElementKind {
        match self {
            Component::Resistor(_) => ElementKind::Resistor,
            Component::Capacitor(_) => ElementKind::Capacitor,
            Component::Inductor(_) => ElementKind::Inductor,
        }
    }

    /// Get the SI value (ohms, farads or henries).
    pub fn si_value(&self) -> f64 {
        match self {
            Component::Resistor(r) => r.resistance,
            Component::Capacitor(c) => c.capacitance,
            Component::Inductor(l) => l.inductance,
        }
    }

    /// Impedance at angular frequency `omega` (rad/s).
    pub fn impedance(&self, omega: f64) -> Impedance {
        match self {
            Component::Resistor(r) => r.impedance(omega),
            Component::Capacitor(c) => c.impedance(omega),
            Component::Inductor(l) => l.impedance(omega),
        }
    }
}
