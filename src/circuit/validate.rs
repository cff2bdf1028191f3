//! Element validation.

use crate::error::{DesignerError, Result};

use super::{unit_scale, CircuitElement};

/// Validate an element for insertion or solving.
///
/// Checks:
/// - The value is a positive, finite number
/// - The unit belongs to the element kind
/// - The value in SI units neither overflows nor underflows
///
/// Returns the element's value converted to SI base units.
pub fn validate_element(element: &CircuitElement) -> Result<f64> {
    if !(element.value.is_finite() && element.value > 0.0) {
        return Err(DesignerError::invalid_value(
            element.kind.name(),
            element.value.to_string(),
        ));
    }

    let scale = unit_scale(element.kind, &element.unit)
        .ok_or_else(|| DesignerError::invalid_unit(element.kind.name(), element.unit.as_str()))?;

    let si_value = element.value * scale;
    if !si_value.is_normal() {
        return Err(DesignerError::invalid_value(
            element.kind.name(),
            format!("{}{}", element.value, element.unit),
        ));
    }

    Ok(si_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::ElementKind;

    #[test]
    fn test_rejects_non_positive_values() {
        for value in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let element = CircuitElement::new(ElementKind::Resistor, value);
            assert!(matches!(
                validate_element(&element),
                Err(DesignerError::InvalidValue { .. })
            ));
        }
    }

    #[test]
    fn test_converts_to_si() {
        let element = CircuitElement::new(ElementKind::Capacitor, 2.0);
        let si = validate_element(&element).unwrap();
        assert!((si - 2e-6).abs() < 1e-18);
    }

    #[test]
    fn test_rejects_values_out_of_si_range() {
        let cases = [
            CircuitElement::with_unit(ElementKind::Resistor, 1e300, "GΩ"),
            CircuitElement::with_unit(ElementKind::Capacitor, 1e-300, "pF"),
            CircuitElement::with_unit(ElementKind::Inductor, f64::MIN_POSITIVE, "mH"),
        ];
        for element in &cases {
            assert!(
                matches!(validate_element(element), Err(DesignerError::InvalidValue { .. })),
                "{element} accepted"
            );
        }
    }

    #[test]
    fn test_rejects_mismatched_unit() {
        let element = CircuitElement::with_unit(ElementKind::Resistor, 10.0, "F");
        assert_eq!(
            validate_element(&element),
            Err(DesignerError::invalid_unit("resistor", "F"))
        );
    }
}
