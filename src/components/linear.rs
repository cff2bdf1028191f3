//! Linear passive components: Resistor, Capacitor, Inductor.
//!
//! Values are held in SI base units (ohms, henries, farads). Impedances are
//! evaluated at a single angular frequency; `omega == 0` is DC.

use num_complex::Complex64;

use super::Impedance;

/// An ideal resistor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resistor {
    pub resistance: f64,
}

impl Resistor {
    /// Create a new resistor.
    pub fn new(resistance: f64) -> Self {
        Self { resistance }
    }

    /// Z = R at every frequency.
    pub fn impedance(&self, _omega: f64) -> Impedance {
        Impedance::from_complex(Complex64::new(self.resistance, 0.0))
    }
}

/// An ideal capacitor.
///
/// On DC the capacitor blocks current and is reported as an open circuit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Capacitor {
    pub capacitance: f64,
}

impl Capacitor {
    /// Create a new capacitor.
    pub fn new(capacitance: f64) -> Self {
        Self { capacitance }
    }

    /// Z = 1 / (jωC)
    pub fn impedance(&self, omega: f64) -> Impedance {
        if omega == 0.0 {
            Impedance::Open
        } else {
            Impedance::from_complex(Complex64::new(0.0, -1.0 / (omega * self.capacitance)))
        }
    }
}

/// An ideal inductor.
///
/// On DC the inductor is a short circuit (zero impedance).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inductor {
    pub inductance: f64,
}

impl Inductor {
    /// Create a new inductor.
    pub fn new(inductance: f64) -> Self {
        Self { inductance }
    }

    /// Z = jωL
    pub fn impedance(&self, omega: f64) -> Impedance {
        Impedance::from_complex(Complex64::new(0.0, omega * self.inductance))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_resistor_impedance_is_real() {
        let z = Resistor::new(100.0).impedance(314.0);
        assert_eq!(z, Impedance::Finite(Complex64::new(100.0, 0.0)));
    }

    #[test]
    fn test_capacitor_reactance() {
        let c = Capacitor::new(1e-6);
        let Impedance::Finite(z) = c.impedance(1.0e3) else {
            panic!("capacitor on AC must be finite");
        };
        assert_relative_eq!(z.re, 0.0);
        assert_relative_eq!(z.im, -1000.0, max_relative = 1e-12);
        assert!(c.impedance(0.0).is_open());
    }

    #[test]
    fn test_inductor_reactance() {
        let l = Inductor::new(10e-3);
        let Impedance::Finite(z) = l.impedance(100.0) else {
            panic!("inductor impedance is always finite");
        };
        assert_relative_eq!(z.im, 1.0, max_relative = 1e-12);
        assert!(l.impedance(0.0).is_short());
    }
}
