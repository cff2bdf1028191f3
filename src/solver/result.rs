//! Computed circuit quantities handed to presentation.

use std::fmt;

use serde::Serialize;

use crate::circuit::{ElementKind, SourceSpec, Topology};
use crate::components::Magnitude;

/// Per-element reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementReading {
    pub kind: ElementKind,
    /// Value as entered, in `unit`
    pub value: f64,
    pub unit: String,
    /// |Z| in ohms
    pub impedance: Magnitude,
    /// Im(Z) in ohms; `None` for an open circuit
    pub reactance: Option<f64>,
    /// Voltage across the element
    pub voltage: Magnitude,
    /// Current through the element
    pub current: Magnitude,
    /// Element presents zero impedance
    pub short: bool,
}

/// Result of solving a circuit.
///
/// All voltages and currents are magnitudes; the source polarity does not
/// change them. Unbounded quantities are [`Magnitude::Infinite`], never a
/// floating point infinity or NaN.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircuitResult {
    pub topology: Topology,
    pub source: SourceSpec,
    /// ω in rad/s (0 for DC)
    pub angular_frequency: f64,
    /// |Z_total| in ohms
    pub total_impedance: Magnitude,
    /// arg(Z_total) in radians; 0 for open or short totals
    pub total_impedance_phase: f64,
    pub total_current: Magnitude,
    /// One reading per element, in list order
    pub elements: Vec<ElementReading>,
    /// At least one element (or the whole network) has zero impedance
    pub short_circuit: bool,
    /// No current can flow from the source
    pub open_circuit: bool,
}

impl CircuitResult {
    /// Phase of the total impedance in degrees.
    pub fn phase_degrees(&self) -> f64 {
        self.total_impedance_phase.to_degrees()
    }

    /// Voltage drop per element for series circuits, branch current per
    /// element for parallel circuits.
    pub fn per_element_values(&self) -> Vec<Magnitude> {
        self.elements
            .iter()
            .map(|e| match self.topology {
                Topology::Series => e.voltage,
                Topology::Parallel => e.current,
            })
            .collect()
    }
}

impl fmt::Display for CircuitResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {} V, {} circuit ({} element{})",
            self.source.kind,
            self.source.amplitude,
            self.topology,
            self.elements.len(),
            if self.elements.len() == 1 { "" } else { "s" }
        )?;
        if self.angular_frequency > 0.0 {
            writeln!(f, "ω = {:.3} rad/s", self.angular_frequency)?;
        }
        writeln!(f, "Total impedance: {:.4} Ω", self.total_impedance)?;
        writeln!(f, "Phase: {:.2}°", self.phase_degrees())?;
        writeln!(f, "Total current: {:.4} A", self.total_current)?;

        for (i, e) in self.elements.iter().enumerate() {
            write!(
                f,
                "  {}{} {} {}: |Z| = {:.4} Ω, V = {:.4} V, I = {:.4} A",
                e.kind.symbol(),
                i + 1,
                e.value,
                e.unit,
                e.impedance,
                e.voltage,
                e.current
            )?;
            if e.short {
                write!(f, " (short)")?;
            }
            writeln!(f)?;
        }

        if self.short_circuit {
            writeln!(f, "Short circuit: zero-impedance path present")?;
        }
        if self.open_circuit {
            writeln!(f, "Open circuit: no current flows")?;
        }
        Ok(())
    }
}
