//! Limiting-factor selection
//!
//! At each reference temperature the factor with the lowest no-bleed ceiling
//! governs. The bleed deduction is the same for every factor, so it cannot
//! change the choice. On a tie the factor listed first in
//! [`LimitingFactor::ALL`] is kept.

use super::{LimitWeight, LimitingFactor, PerFactor};

/// Governing factor at each reference temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LimitingFactors {
    /// At OAT
    pub oat: LimitingFactor,
    /// At Tref
    pub tref: LimitingFactor,
    /// At Tmax
    pub tmax: LimitingFactor,
    /// At Tflexmax
    pub tflexmax: LimitingFactor,
}

impl LimitingFactors {
    /// Select the governing factors from a complete breakdown
    pub fn select(limits: &PerFactor<LimitWeight>) -> Self {
        let factors = Self {
            oat: most_limiting(limits, |l| l.oat.no_bleed),
            tref: most_limiting(limits, |l| l.tref.no_bleed),
            tmax: most_limiting(limits, |l| l.tmax.no_bleed),
            tflexmax: most_limiting(limits, |l| l.tflexmax.no_bleed),
        };
        log_trace!(
            "Limiting factors: OAT {:?}, Tref {:?}, Tmax {:?}, Tflexmax {:?}",
            factors.oat,
            factors.tref,
            factors.tmax,
            factors.tflexmax
        );
        factors
    }
}

/// Factor with the lowest `ceiling`, first factor on a tie
pub fn most_limiting<T>(limits: &PerFactor<T>, ceiling: impl Fn(&T) -> f64) -> LimitingFactor {
    let mut best = LimitingFactor::Runway;
    let mut lowest = ceiling(limits.get(best));
    for factor in &LimitingFactor::ALL[1..] {
        let weight = ceiling(limits.get(*factor));
        if weight < lowest {
            best = *factor;
            lowest = weight;
        }
    }
    best
}
