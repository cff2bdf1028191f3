//! Solver configuration.

use std::f64::consts::PI;

use crate::circuit::SourceKind;
use crate::error::{DesignerError, Result};
use crate::REFERENCE_FREQUENCY_HZ;

/// Configuration for the impedance solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Frequency used for AC reactance, in Hz.
    pub frequency_hz: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            frequency_hz: REFERENCE_FREQUENCY_HZ,
        }
    }
}

impl SolverConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the AC source frequency (in Hz).
    pub fn with_frequency_hz(mut self, frequency_hz: f64) -> Self {
        self.frequency_hz = frequency_hz;
        self
    }

    /// Check that the frequency is usable.
    pub fn validate(&self) -> Result<()> {
        if self.frequency_hz.is_finite() && self.frequency_hz > 0.0 {
            Ok(())
        } else {
            Err(DesignerError::invalid_value(
                "frequency",
                self.frequency_hz.to_string(),
            ))
        }
    }

    /// Angular frequency ω for a source kind. DC is always 0.
    pub fn angular_frequency(&self, kind: SourceKind) -> f64 {
        match kind {
            SourceKind::Dc => 0.0,
            SourceKind::Ac => 2.0 * PI * self.frequency_hz,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_default_is_50hz() {
        let config = SolverConfig::default();
        assert_relative_eq!(config.angular_frequency(SourceKind::Ac), 100.0 * PI);
        assert_eq!(config.angular_frequency(SourceKind::Dc), 0.0);
    }

    #[test]
    fn test_validate() {
        assert!(SolverConfig::new().with_frequency_hz(60.0).validate().is_ok());
        assert!(SolverConfig::new().with_frequency_hz(0.0).validate().is_err());
        assert!(SolverConfig::new().with_frequency_hz(f64::NAN).validate().is_err());
    }
}
