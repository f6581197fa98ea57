//! Centre of gravity checks
//!
//! The takeoff CG envelope narrows with weight:
//!
//! ```text
//! weight (t)   40     53     63     73     79
//! forward %    17     17     18     20     24
//! aft %        40     40.5   39     37.5   36
//! ```
//!
//! Between the published weights both limits are interpolated. A CG on a
//! limit is inside the envelope.

use crate::tables::cg::{CG_ENVELOPE, THS_TRIM};

/// Whether `cg` (%MAC) is inside the takeoff envelope at `weight` (kg)
pub fn is_cg_within_limits(cg: f64, weight: f64) -> bool {
    let [forward, aft] = CG_ENVELOPE.get(weight);
    (forward..=aft).contains(&cg)
}

/// THS takeoff trim for `cg` (%MAC), degrees nose up
pub fn stabilizer_trim(cg: f64) -> f64 {
    THS_TRIM.get(cg)
}
