//! Series and parallel combination of element impedances.

use num_complex::Complex64;

use crate::components::{reciprocal, Impedance, Magnitude};

/// Voltage and current for one element after combination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Share {
    pub voltage: Magnitude,
    pub current: Magnitude,
}

/// Aggregate impedance and per-element shares of a network.
#[derive(Debug, Clone, PartialEq)]
pub struct Combined {
    pub total: Impedance,
    pub total_current: Magnitude,
    pub shares: Vec<Share>,
}

/// Combine elements in series across a source of `voltage` volts.
///
/// Every element carries the loop current. An open element breaks the loop,
/// so the whole source voltage appears across the open elements, split by
/// `open_weights` (elastance 1/C for capacitors on DC).
pub fn series(impedances: &[Impedance], open_weights: &[f64], voltage: f64) -> Combined {
    let total = impedances
        .iter()
        .fold(Impedance::SHORT, |acc, z| acc.series(*z));
    let total_current = total.magnitude().divide_into(voltage);

    let shares = if total.is_open() {
        // Open elements take the source voltage. When only the sum
        // overflowed, every element shares it by |Z_k|.
        let mut weights: Vec<f64> = impedances
            .iter()
            .zip(open_weights)
            .map(|(z, w)| if z.is_open() { *w } else { 0.0 })
            .collect();
        if !weights.iter().any(|w| *w > 0.0) {
            weights = impedances
                .iter()
                .map(|z| z.magnitude().value().unwrap_or(0.0))
                .collect();
        }
        split_by_weight(&weights, voltage)
            .into_iter()
            .map(|voltage| Share {
                voltage,
                current: Magnitude::Finite(0.0),
            })
            .collect()
    } else {
        impedances
            .iter()
            .map(|z| Share {
                voltage: drop_across(*z, total_current),
                current: total_current,
            })
            .collect()
    };

    Combined {
        total,
        total_current,
        shares,
    }
}

/// Combine elements in parallel across a source of `voltage` volts.
///
/// Every branch sees the full source voltage. A shorted branch shorts the
/// whole network.
pub fn parallel(impedances: &[Impedance], voltage: f64) -> Combined {
    let admittance: Option<Complex64> = impedances.iter().map(Impedance::admittance).sum();

    let total = match admittance {
        None => Impedance::SHORT,
        Some(y) if y.norm() == 0.0 => Impedance::Open,
        Some(y) => Impedance::from_complex(reciprocal(y)),
    };
    let total_current = total.magnitude().divide_into(voltage);

    let shares = impedances
        .iter()
        .map(|z| Share {
            voltage: Magnitude::Finite(voltage),
            current: z.magnitude().divide_into(voltage),
        })
        .collect();

    Combined {
        total,
        total_current,
        shares,
    }
}

/// Divide `voltage` in proportion to `weights` without overflowing.
fn split_by_weight(weights: &[f64], voltage: f64) -> Vec<Magnitude> {
    let clamped: Vec<f64> = weights
        .iter()
        .map(|w| if w.is_finite() { w.max(0.0) } else { f64::MAX })
        .collect();
    let max = clamped.iter().copied().fold(0.0, f64::max);
    if max == 0.0 {
        return vec![Magnitude::Finite(0.0); weights.len()];
    }

    let sum: f64 = clamped.iter().map(|w| w / max).sum();
    clamped
        .iter()
        .map(|w| Magnitude::from_value(voltage * (w / max) / sum))
        .collect()
}

/// V = I × |Z| where a zero impedance drops nothing even at unbounded current.
fn drop_across(z: Impedance, current: Magnitude) -> Magnitude {
    match (z.magnitude(), current) {
        (Magnitude::Finite(m), _) if m == 0.0 => Magnitude::Finite(0.0),
        (Magnitude::Finite(m), Magnitude::Finite(i)) => Magnitude::from_value(m * i),
        _ => Magnitude::Infinite,
    }
}
