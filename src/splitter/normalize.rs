//! Partition normalization
//!
//! Every path that sets the partition funnels through these helpers so the
//! pair always sums to 100 and respects both minimums.

use serde::{Deserialize, Serialize};

/// Fallback partition for absent or invalid input
pub const DEFAULT_SIZES: [f64; 2] = [50.0, 50.0];

/// Two percentages summing to 100
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Partition([f64; 2]);

impl Partition {
    /// Build from a first-pane percentage already clamped into range
    fn from_first(first: f64) -> Self {
        let a = round3(first);
        Partition([a, round3(100.0 - a)])
    }

    pub fn first(&self) -> f64 {
        self.0[0]
    }

    pub fn second(&self) -> f64 {
        self.0[1]
    }

    pub fn sizes(&self) -> [f64; 2] {
        self.0
    }
}

impl Default for Partition {
    fn default() -> Self {
        Partition(DEFAULT_SIZES)
    }
}

/// Round to three decimal places
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
    value.max(lo).min(hi)
}

/// Minimums as actually enforced: the first in `[0, 100]`, the second in
/// `[0, 100 - first]`, so they never jointly exceed 100.
pub fn effective_mins(mins: [f64; 2]) -> [f64; 2] {
    let finite = |v: f64| if v.is_finite() { v } else { 0.0 };
    let m0 = clamp(finite(mins[0]), 0.0, 100.0);
    let m1 = clamp(finite(mins[1]), 0.0, 100.0 - m0);
    [m0, m1]
}

/// Clamp a first-pane percentage against effective minimums
pub fn clamp_first(first: f64, mins: [f64; 2]) -> Partition {
    Partition::from_first(clamp(first, mins[0], 100.0 - mins[1]))
}

/// Normalize arbitrary sizes into a valid partition
///
/// Absent, non-finite or negative input falls back to 50/50. Otherwise the
/// pair is rescaled to sum to 100, the first pane is clamped against the
/// minimums, and both are rounded to three decimals.
pub fn normalize(sizes: Option<[f64; 2]>, mins: [f64; 2]) -> Partition {
    let mins = effective_mins(mins);
    let [a, b] = match sizes {
        Some([a, b]) if a.is_finite() && b.is_finite() && a >= 0.0 && b >= 0.0 => [a, b],
        _ => DEFAULT_SIZES,
    };

    let sum = a + b;
    let [a, _] = if sum <= 0.0 {
        DEFAULT_SIZES
    } else if sum != 100.0 {
        [a / sum * 100.0, b / sum * 100.0]
    } else {
        [a, b]
    };

    clamp_first(a, mins)
}
