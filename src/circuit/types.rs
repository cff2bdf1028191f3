//! Core types for circuit description.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DesignerError, Result};

/// The kind of a passive circuit element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Resistor,
    Inductor,
    Capacitor,
}

impl ElementKind {
    /// All element kinds, in form order.
    pub const ALL: [ElementKind; 3] = [
        ElementKind::Resistor,
        ElementKind::Inductor,
        ElementKind::Capacitor,
    ];

    /// The unit a freshly selected element of this kind is entered in.
    pub fn default_unit(&self) -> &'static str {
        match self {
            ElementKind::Resistor => "Ω",
            ElementKind::Inductor => "mH",
            ElementKind::Capacitor => "μF",
        }
    }

    /// Accepted spellings of the SI base unit (without prefix).
    pub fn base_units(&self) -> &'static [&'static str] {
        match self {
            ElementKind::Resistor => &["\u{3a9}", "\u{2126}", "ohm"],
            ElementKind::Inductor => &["H"],
            ElementKind::Capacitor => &["F"],
        }
    }

    /// Schematic letter (R, L, C).
    pub fn symbol(&self) -> char {
        match self {
            ElementKind::Resistor => 'R',
            ElementKind::Inductor => 'L',
            ElementKind::Capacitor => 'C',
        }
    }

    /// Lowercase name, as used in messages.
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Resistor => "resistor",
            ElementKind::Inductor => "inductor",
            ElementKind::Capacitor => "capacitor",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElementKind {
    type Err = DesignerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "r" | "resistor" => Ok(ElementKind::Resistor),
            "l" | "inductor" => Ok(ElementKind::Inductor),
            "c" | "capacitor" => Ok(ElementKind::Capacitor),
            _ => Err(DesignerError::invalid_value("element kind", s)),
        }
    }
}

/// A single resistor, inductor or capacitor.
///
/// `value` is expressed in `unit`; the unit's SI prefix is applied only when
/// the element is solved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitElement {
    pub kind: ElementKind,
    pub value: f64,
    pub unit: String,
}

impl CircuitElement {
    /// Create an element in its kind's default unit.
    pub fn new(kind: ElementKind, value: f64) -> Self {
        Self {
            kind,
            value,
            unit: kind.default_unit().to_string(),
        }
    }

    /// Create an element with an explicit unit.
    pub fn with_unit(kind: ElementKind, value: f64, unit: impl Into<String>) -> Self {
        Self {
            kind,
            value,
            unit: unit.into(),
        }
    }
}

impl fmt::Display for CircuitElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}{}", self.kind, self.value, self.unit)
    }
}

/// Supply type of the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceKind {
    #[serde(rename = "DC")]
    Dc,
    #[serde(rename = "AC")]
    Ac,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Dc => f.write_str("DC"),
            SourceKind::Ac => f.write_str("AC"),
        }
    }
}

impl FromStr for SourceKind {
    type Err = DesignerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DC" => Ok(SourceKind::Dc),
            "AC" => Ok(SourceKind::Ac),
            _ => Err(DesignerError::invalid_value("source type", s)),
        }
    }
}

/// How the elements are wired to the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topology {
    /// Impedances add
    Series,
    /// Admittances add
    Parallel,
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Topology::Series => f.write_str("series"),
            Topology::Parallel => f.write_str("parallel"),
        }
    }
}

/// A parsed source configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SourceSpec {
    pub kind: SourceKind,
    /// Source voltage in volts (amplitude for AC)
    pub amplitude: f64,
    /// 1 for series, more than 1 for parallel
    pub branch_count: u32,
}

impl SourceSpec {
    /// Create a source specification from typed values.
    pub fn new(kind: SourceKind, amplitude: f64, branch_count: u32) -> Result<Self> {
        if !amplitude.is_finite() {
            return Err(DesignerError::invalid_value("voltage", amplitude.to_string()));
        }
        if branch_count == 0 {
            return Err(DesignerError::invalid_value("branch count", "0"));
        }
        Ok(Self {
            kind,
            amplitude,
            branch_count,
        })
    }

    /// Parse the voltage and branch count form fields.
    pub fn parse(kind: SourceKind, voltage: &str, branch_count: &str) -> Result<Self> {
        let amplitude = super::parse_value(voltage)
            .ok_or_else(|| DesignerError::invalid_value("voltage", voltage))?;
        let branches = branch_count
            .trim()
            .parse::<u32>()
            .map_err(|_| DesignerError::invalid_value("branch count", branch_count))?;
        Self::new(kind, amplitude, branches)
    }

    /// The topology selected by the branch count.
    pub fn topology(&self) -> Topology {
        if self.branch_count == 1 {
            Topology::Series
        } else {
            Topology::Parallel
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_default_units() {
        assert_eq!(ElementKind::Resistor.default_unit(), "Ω");
        assert_eq!(ElementKind::Inductor.default_unit(), "mH");
        assert_eq!(ElementKind::Capacitor.default_unit(), "μF");
        assert_eq!(CircuitElement::new(ElementKind::Inductor, 2.0).unit, "mH");
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("R".parse::<ElementKind>().unwrap(), ElementKind::Resistor);
        assert_eq!("inductor".parse::<ElementKind>().unwrap(), ElementKind::Inductor);
        assert_eq!(" c ".parse::<ElementKind>().unwrap(), ElementKind::Capacitor);
        assert!("diode".parse::<ElementKind>().is_err());
    }

    #[test]
    fn test_source_parse() {
        let spec = SourceSpec::parse(SourceKind::Ac, "5", "1").unwrap();
        assert_eq!(spec.amplitude, 5.0);
        assert_eq!(spec.topology(), Topology::Series);

        let spec = SourceSpec::parse(SourceKind::Dc, "12", "3").unwrap();
        assert_eq!(spec.topology(), Topology::Parallel);
    }

    #[test]
    fn test_source_parse_rejects_garbage() {
        assert!(matches!(
            SourceSpec::parse(SourceKind::Dc, "NaN", "1"),
            Err(DesignerError::InvalidValue { .. })
        ));
        assert!(SourceSpec::parse(SourceKind::Dc, "5", "0").is_err());
        assert!(SourceSpec::parse(SourceKind::Dc, "5", "-2").is_err());
        assert!(SourceSpec::parse(SourceKind::Dc, "5", "two").is_err());
    }
}
