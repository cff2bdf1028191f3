//! Numeric field parsing and SI unit prefixes.

use super::ElementKind;

/// Multiplier for a single SI prefix character.
fn prefix_multiplier(ch: char) -> Option<f64> {
    match ch {
        'p' => Some(1e-12),
        'n' => Some(1e-9),
        // ASCII u, micro sign, greek mu
        'u' | 'µ' | 'μ' => Some(1e-6),
        'm' => Some(1e-3),
        'k' | 'K' => Some(1e3),
        'M' => Some(1e6),
        'G' => Some(1e9),
        _ => None,
    }
}

/// Parse a numeric form field with an optional SI suffix (`"4.7k"`).
///
/// Empty, unparseable and non-finite input (including `"NaN"`) all count as
/// unset and return `None`.
pub fn parse_value(text: &str) -> Option<f64> {
    let text = text.trim();
    let last = text.chars().last()?;

    let (num_str, multiplier) = match prefix_multiplier(last) {
        Some(mult) => (&text[..text.len() - last.len_utf8()], mult),
        None => (text, 1.0),
    };

    num_str
        .parse::<f64>()
        .ok()
        .map(|v| v * multiplier)
        .filter(|v| v.is_finite())
}

/// Scale factor that converts a value in `unit` to SI base units for `kind`.
///
/// The unit is an optional prefix followed by one of the kind's base
/// spellings; an empty unit means the base unit. Returns `None` when the unit
/// does not belong to the kind.
pub fn unit_scale(kind: ElementKind, unit: &str) -> Option<f64> {
    let unit = unit.trim();
    if unit.is_empty() {
        return Some(1.0);
    }

    for base in kind.base_units() {
        let Some(split) = unit.len().checked_sub(base.len()) else {
            continue;
        };
        let (Some(prefix), Some(tail)) = (unit.get(..split), unit.get(split..)) else {
            continue;
        };
        if !tail.eq_ignore_ascii_case(base) {
            continue;
        }

        let mut chars = prefix.chars();
        return match (chars.next(), chars.next()) {
            (None, _) => Some(1.0),
            (Some(ch), None) => prefix_multiplier(ch),
            _ => None,
        };
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: Option<f64>, b: Option<f64>) -> bool {
        match (a, b) {
            (Some(x), Some(y)) => (x - y).abs() < x.abs() * 1e-10 + 1e-15,
            (None, None) => true,
            _ => false,
        }
    }

    #[test]
    fn test_parse_value() {
        assert!(approx_eq(parse_value("10k"), Some(10_000.0)));
        assert!(approx_eq(parse_value("4.7u"), Some(4.7e-6)));
        assert!(approx_eq(parse_value(" 5 "), Some(5.0)));
        assert!(approx_eq(parse_value("-3"), Some(-3.0)));
        assert!(approx_eq(parse_value("1e-9"), Some(1e-9)));
    }

    #[test]
    fn test_parse_value_unset() {
        assert_eq!(parse_value(""), None);
        assert_eq!(parse_value("   "), None);
        assert_eq!(parse_value("NaN"), None);
        assert_eq!(parse_value("inf"), None);
        assert_eq!(parse_value("abc"), None);
        assert_eq!(parse_value("k"), None);
    }

    #[test]
    fn test_unit_scale() {
        assert!(approx_eq(unit_scale(ElementKind::Resistor, "Ω"), Some(1.0)));
        assert!(approx_eq(unit_scale(ElementKind::Resistor, "kΩ"), Some(1e3)));
        assert!(approx_eq(unit_scale(ElementKind::Resistor, "kohm"), Some(1e3)));
        assert!(approx_eq(unit_scale(ElementKind::Inductor, "mH"), Some(1e-3)));
        assert!(approx_eq(unit_scale(ElementKind::Capacitor, "μF"), Some(1e-6)));
        assert!(approx_eq(unit_scale(ElementKind::Capacitor, "uF"), Some(1e-6)));
        assert!(approx_eq(unit_scale(ElementKind::Capacitor, "nF"), Some(1e-9)));
        assert!(approx_eq(unit_scale(ElementKind::Capacitor, ""), Some(1.0)));
    }

    #[test]
    fn test_unit_scale_rejects_foreign_units() {
        assert_eq!(unit_scale(ElementKind::Resistor, "mH"), None);
        assert_eq!(unit_scale(ElementKind::Inductor, "μF"), None);
        assert_eq!(unit_scale(ElementKind::Capacitor, "xF"), None);
        assert_eq!(unit_scale(ElementKind::Capacitor, "mmF"), None);
    }
}
