//! Closed-form impedance solver.
//!
//! This module turns an element list and a source into a [`CircuitResult`].
//!
//! ## Method
//!
//! Each element is evaluated at one angular frequency ω (0 for DC,
//! 2π·f for AC):
//!
//! ```text
//! R: Z = R        L: Z = jωL        C: Z = 1 / (jωC)
//! ```
//!
//! - Series (branch count 1): Z = Σ Z_k, I = V / |Z|, V_k = I·|Z_k|
//! - Parallel (branch count > 1): Y = Σ 1/Z_k, Z = 1/Y, I_k = V / |Z_k|
//!
//! On DC an inductor is a short and a capacitor is open. Both are carried as
//! explicit states so the result never contains NaN or a float infinity.

mod config;
mod network;
mod result;

pub use config::SolverConfig;
pub use network::{parallel, series, Combined, Share};
pub use result::{CircuitResult, ElementReading};

use tracing::debug;

use crate::circuit::{CircuitElement, SourceSpec, Topology};
use crate::components::{Component, Impedance};
use crate::error::{DesignerError, Result};

/// Solve a circuit with the default configuration.
pub fn generate(elements: &[CircuitElement], source: &SourceSpec) -> Result<CircuitResult> {
    solve(elements, source, &SolverConfig::default())
}

/// Solve a circuit.
///
/// Fails with [`DesignerError::EmptyCircuit`] when `elements` is empty.
/// Elements are re-validated, so a list built outside
/// [`ElementList`](crate::circuit::ElementList) is checked too.
pub fn solve(
    elements: &[CircuitElement],
    source: &SourceSpec,
    config: &SolverConfig,
) -> Result<CircuitResult> {
    if elements.is_empty() {
        return Err(DesignerError::EmptyCircuit);
    }
    config.validate()?;

    let components = elements
        .iter()
        .map(Component::from_element)
        .collect::<Result<Vec<_>>>()?;

    let omega = config.angular_frequency(source.kind);
    let impedances: Vec<Impedance> = components.iter().map(|c| c.impedance(omega)).collect();
    let voltage = source.amplitude.abs();
    let topology = source.topology();

    let combined = match topology {
        Topology::Series => {
            // Only capacitors can be open; their DC share goes by elastance.
            let weights: Vec<f64> = components.iter().map(|c| 1.0 / c.si_value()).collect();
            series(&impedances, &weights, voltage)
        }
        Topology::Parallel => parallel(&impedances, voltage),
    };

    let readings: Vec<ElementReading> = elements
        .iter()
        .zip(&impedances)
        .zip(&combined.shares)
        .map(|((element, z), share)| ElementReading {
            kind: element.kind,
            value: element.value,
            unit: element.unit.clone(),
            impedance: z.magnitude(),
            reactance: z.reactance(),
            voltage: share.voltage,
            current: share.current,
            short: z.is_short(),
        })
        .collect();

    let short_circuit = combined.total.is_short() || impedances.iter().any(Impedance::is_short);

    let result = CircuitResult {
        topology,
        source: *source,
        angular_frequency: omega,
        total_impedance: combined.total.magnitude(),
        total_impedance_phase: combined.total.phase(),
        total_current: combined.total_current,
        elements: readings,
        short_circuit,
        open_circuit: combined.total.is_open(),
    };

    debug!(
        %topology,
        omega,
        total_impedance = %result.total_impedance,
        total_current = %result.total_current,
        short_circuit,
        open_circuit = result.open_circuit,
        "circuit solved"
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::circuit::{ElementKind, SourceKind};
    use crate::components::Magnitude;

    fn dc(volts: f64, branches: u32) -> SourceSpec {
        SourceSpec::new(SourceKind::Dc, volts, branches).unwrap()
    }

    #[test]
    fn test_empty_circuit() {
        assert_eq!(generate(&[], &dc(5.0, 1)), Err(DesignerError::EmptyCircuit));
    }

    #[test]
    fn test_series_dc_resistor() {
        let elements = [CircuitElement::new(ElementKind::Resistor, 10.0)];
        let result = generate(&elements, &dc(5.0, 1)).unwrap();

        assert_eq!(result.topology, Topology::Series);
        assert_eq!(result.total_impedance, Magnitude::Finite(10.0));
        assert_eq!(result.total_current, Magnitude::Finite(0.5));
        assert_eq!(result.total_impedance_phase, 0.0);
        assert_eq!(result.elements[0].voltage, Magnitude::Finite(5.0));
        assert!(!result.short_circuit);
        assert!(!result.open_circuit);
    }

    #[test]
    fn test_series_dc_capacitor_is_open() {
        let elements = [
            CircuitElement::new(ElementKind::Resistor, 10.0),
            CircuitElement::new(ElementKind::Capacitor, 1.0),
        ];
        let result = generate(&elements, &dc(5.0, 1)).unwrap();

        assert!(result.open_circuit);
        assert_eq!(result.total_impedance, Magnitude::Infinite);
        assert_eq!(result.total_current, Magnitude::Finite(0.0));
        assert_eq!(result.elements[1].reactance, None);
        assert_relative_eq!(result.elements[1].voltage.value().unwrap(), 5.0);
    }

    #[test]
    fn test_negative_source_reports_magnitudes() {
        let elements = [CircuitElement::new(ElementKind::Resistor, 10.0)];
        let result = generate(&elements, &dc(-5.0, 1)).unwrap();
        assert_eq!(result.total_current, Magnitude::Finite(0.5));
    }

    #[test]
    fn test_custom_frequency_changes_reactance() {
        let elements = [CircuitElement::new(ElementKind::Inductor, 100.0)];
        let source = SourceSpec::new(SourceKind::Ac, 1.0, 1).unwrap();

        let at_50 = solve(&elements, &source, &SolverConfig::default()).unwrap();
        let at_60 = solve(
            &elements,
            &source,
            &SolverConfig::new().with_frequency_hz(60.0),
        )
        .unwrap();

        let x50 = at_50.elements[0].reactance.unwrap();
        let x60 = at_60.elements[0].reactance.unwrap();
        assert_relative_eq!(x60 / x50, 1.2, max_relative = 1e-12);
    }

    #[test]
    fn test_invalid_frequency_rejected() {
        let elements = [CircuitElement::new(ElementKind::Resistor, 1.0)];
        let config = SolverConfig::new().with_frequency_hz(-1.0);
        assert!(matches!(
            solve(&elements, &dc(1.0, 1), &config),
            Err(DesignerError::InvalidValue { .. })
        ));
    }
}
