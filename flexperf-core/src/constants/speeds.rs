//! Speed Limits

/// Maximum tire ground speed (kt).
///
/// V2 above this value cannot be certified for the installed tires.
pub const MAX_TIRE_SPEED_KT: f64 = 195.0;

/// Maximum V2 - V1 spread of the climb-limited regression (kt).
///
/// A wider spread selects the table 1 V1 coefficients instead of table 2.
pub const MAX_CLIMB_V1_V2_SPREAD_KT: f64 = 8.0;

/// VR reduction for a forward CG on runway or VMCG limited takeoffs (kt).
pub const FORWARD_CG_VR_CORRECTION_KT: f64 = 1.0;

/// Tailwind used for the maximum thrust speed cross-check (kt).
pub const MAX_THRUST_CHECK_TAILWIND_KT: f64 = 15.0;
