//! Impedance and magnitude values that stay finite-safe.
//!
//! Ideal elements reach both ends of the scale: an inductor on DC is a short
//! (zero impedance) and a capacitor on DC is an open circuit. Neither is
//! represented with floating point infinities; [`Impedance::Open`] and
//! [`Magnitude::Infinite`] carry those states explicitly.

use std::fmt;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// A non-negative magnitude that may be unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Magnitude {
    Finite(f64),
    Infinite,
}

impl Magnitude {
    /// The finite value, if any.
    pub fn value(&self) -> Option<f64> {
        match self {
            Magnitude::Finite(v) => Some(*v),
            Magnitude::Infinite => None,
        }
    }

    /// Wrap a computed value; anything that overflowed is unbounded.
    pub fn from_value(value: f64) -> Magnitude {
        if value.is_finite() {
            Magnitude::Finite(value)
        } else {
            Magnitude::Infinite
        }
    }

    /// Check if the magnitude is unbounded.
    pub fn is_infinite(&self) -> bool {
        matches!(self, Magnitude::Infinite)
    }

    /// Quotient `numerator / self`, where dividing by zero yields `Infinite`
    /// (or zero when the numerator is zero) and dividing by `Infinite` yields
    /// zero.
    pub fn divide_into(&self, numerator: f64) -> Magnitude {
        match self {
            Magnitude::Infinite => Magnitude::Finite(0.0),
            Magnitude::Finite(d) if *d == 0.0 => {
                if numerator == 0.0 {
                    Magnitude::Finite(0.0)
                } else {
                    Magnitude::Infinite
                }
            }
            Magnitude::Finite(d) => Magnitude::from_value(numerator / d),
        }
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Magnitude::Finite(v) => match f.precision() {
                Some(p) => write!(f, "{:.*}", p, v),
                None => write!(f, "{}", v),
            },
            Magnitude::Infinite => f.write_str("∞"),
        }
    }
}

/// Complex impedance of an element or network at one frequency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Impedance {
    /// Finite complex impedance (zero for a short)
    Finite(Complex64),
    /// Infinite impedance, no current can flow
    Open,
}

impl Impedance {
    /// Zero impedance.
    pub const SHORT: Impedance = Impedance::Finite(Complex64::new(0.0, 0.0));

    /// Wrap a computed complex impedance. A component that overflowed is
    /// treated as an open circuit.
    pub fn from_complex(z: Complex64) -> Impedance {
        if z.re.is_finite() && z.im.is_finite() {
            Impedance::Finite(z)
        } else {
            Impedance::Open
        }
    }

    /// |Z|
    pub fn magnitude(&self) -> Magnitude {
        match self {
            Impedance::Finite(z) => Magnitude::from_value(z.norm()),
            Impedance::Open => Magnitude::Infinite,
        }
    }

    /// arg(Z) in radians. Open and short circuits report 0.
    pub fn phase(&self) -> f64 {
        match self {
            Impedance::Finite(z) if !self.is_short() => z.arg(),
            _ => 0.0,
        }
    }

    /// Im(Z), or `None` for an open circuit.
    pub fn reactance(&self) -> Option<f64> {
        match self {
            Impedance::Finite(z) => Some(z.im),
            Impedance::Open => None,
        }
    }

    /// Check if this is a zero impedance.
    pub fn is_short(&self) -> bool {
        match self {
            Impedance::Finite(z) => z.norm() == 0.0,
            Impedance::Open => false,
        }
    }

    /// Check if this is an open circuit.
    pub fn is_open(&self) -> bool {
        matches!(self, Impedance::Open)
    }

    /// Admittance 1/Z, or `None` for a short (unbounded admittance).
    pub fn admittance(&self) -> Option<Complex64> {
        match self {
            Impedance::Open => Some(Complex64::new(0.0, 0.0)),
            _ if self.is_short() => None,
            Impedance::Finite(z) => Some(reciprocal(*z)).filter(|y| y.re.is_finite() && y.im.is_finite()),
        }
    }

    /// Series combination: impedances add, any open makes the sum open.
    pub fn series(self, other: Impedance) -> Impedance {
        match (self, other) {
            (Impedance::Finite(a), Impedance::Finite(b)) => Impedance::from_complex(a + b),
            _ => Impedance::Open,
        }
    }
}

/// 1/z scaled by |z| twice, so |z|² never overflows.
pub fn reciprocal(z: Complex64) -> Complex64 {
    let n = z.norm();
    z.conj().unscale(n).unscale(n)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_divide_into() {
        assert_eq!(Magnitude::Finite(10.0).divide_into(5.0), Magnitude::Finite(0.5));
        assert_eq!(Magnitude::Finite(0.0).divide_into(5.0), Magnitude::Infinite);
        assert_eq!(Magnitude::Finite(0.0).divide_into(0.0), Magnitude::Finite(0.0));
        assert_eq!(Magnitude::Infinite.divide_into(5.0), Magnitude::Finite(0.0));
    }

    #[test]
    fn test_short_and_open_phase_are_zero() {
        assert_eq!(Impedance::SHORT.phase(), 0.0);
        assert_eq!(Impedance::Open.phase(), 0.0);
        assert!(Impedance::SHORT.is_short());
        assert!(!Impedance::Open.is_short());
    }

    #[test]
    fn test_admittance() {
        let y = Impedance::Finite(Complex64::new(4.0, 0.0)).admittance().unwrap();
        assert_relative_eq!(y.re, 0.25);
        assert_eq!(Impedance::SHORT.admittance(), None);
        assert_eq!(Impedance::Open.admittance(), Some(Complex64::new(0.0, 0.0)));
    }

    #[test]
    fn test_series_with_open() {
        let z = Impedance::Finite(Complex64::new(10.0, 0.0));
        assert!(z.series(Impedance::Open).is_open());
        assert_eq!(z.series(Impedance::SHORT), z);
    }

    #[test]
    fn test_overflow_is_unbounded() {
        assert_eq!(Magnitude::from_value(f64::INFINITY), Magnitude::Infinite);
        assert_eq!(Magnitude::Finite(1e-300).divide_into(1e300), Magnitude::Infinite);

        let huge = Impedance::Finite(Complex64::new(1e308, 0.0));
        assert!(huge.series(huge).is_open());
        assert!(Impedance::from_complex(Complex64::new(0.0, f64::NEG_INFINITY)).is_open());

        let wide = Impedance::Finite(Complex64::new(1e308, 1e308));
        assert_eq!(wide.magnitude(), Magnitude::Infinite);

        let y = huge.admittance().unwrap();
        assert_relative_eq!(y.re, 1e-308, max_relative = 1e-12);
        assert_relative_eq!(reciprocal(Complex64::new(2e-308, 0.0)).re, 5e307, max_relative = 1e-12);

        let tiny = Impedance::Finite(Complex64::new(1e-320, 0.0));
        assert_eq!(tiny.admittance(), None);
    }

    #[test]
    fn test_magnitude_display() {
        assert_eq!(format!("{:.2}", Magnitude::Finite(1.23456)), "1.23");
        assert_eq!(Magnitude::Infinite.to_string(), "∞");
    }
}
