//! Wet runway speed corrections
//!
//! Each delta is `min(a1 x + b1, a2 x + b2, 0)` over the wet reference
//! length, with the four coefficients interpolated on the capped headwind.
//! V1 is always corrected; VR and V2 only below T-VMCG.

use super::RawSpeeds;
use crate::configuration::Configuration;
use crate::lookup::VectorLookupTable;
use crate::mtow::WetConditions;
use crate::tables::coefficients::{TwoLineMinimum, VmcgRegime};
use crate::tables::wet::WET_SPEEDS;

fn delta(table: &VectorLookupTable<4>, headwind: f64, reference_length: f64) -> f64 {
    TwoLineMinimum::from_components(table.get(headwind)).at(reference_length)
}

/// Speed deltas for a wet runway, never positive (kt)
pub fn wet_speed_deltas(conf: Configuration, wet: &WetConditions, headwind: f64) -> RawSpeeds {
    let coefficients = WET_SPEEDS.get(conf);
    let x = wet.reference_length;

    let v1 = delta(coefficients.v1.get(wet.regime), headwind, x);
    let (vr, v2) = match wet.regime {
        VmcgRegime::Below => (
            delta(&coefficients.vr_below, headwind, x),
            delta(&coefficients.v2_below, headwind, x),
        ),
        VmcgRegime::Above => (0.0, 0.0),
    };

    RawSpeeds { v1, vr, v2 }
}
