//! Airframe Limits
//!
//! Structural and certified limits of the airframe/engine combination the
//! performance data was produced for. Outside these limits the charts have no
//! data and a calculation is refused.

// ===== WEIGHTS =====

/// Maximum structural takeoff weight (kg).
///
/// Source: AFM limitations, weight variant 000
pub const STRUCTURAL_MTOW_KG: f64 = 79_000.0;

/// Operating empty weight (kg).
///
/// No aircraft can be lighter, so lower takeoff weights are input errors.
pub const OPERATING_EMPTY_WEIGHT_KG: f64 = 44_000.0;

// ===== ENVIRONMENT ENVELOPE =====

/// Maximum pressure altitude for takeoff (ft).
///
/// Source: AFM limitations, takeoff and landing envelope
pub const MAX_PRESSURE_ALT_FT: f64 = 9_200.0;

/// Maximum tailwind component for takeoff (kt).
pub const MAX_TAILWIND_KT: f64 = 15.0;

/// Maximum headwind component credited by the charts (kt).
///
/// Stronger headwinds are accepted but treated as this value.
pub const MAX_HEADWIND_KT: f64 = 45.0;

/// Maximum runway slope magnitude (%).
pub const MAX_RUNWAY_SLOPE_PCT: f64 = 2.0;

// ===== THRUST =====

/// Maximum flex temperature above ISA (°C).
pub const FLEX_TEMP_MAX_ISA_DELTA_C: f64 = 59.0;

/// Width of the extrapolated window above the maximum flex temperature (°C).
///
/// Only used to absorb the bleed penalties before the final clamp.
pub const FLEX_EXTRAPOLATION_WINDOW_C: f64 = 8.0;

/// Flex temperature penalty with engine anti-ice on (°C).
pub const FLEX_PENALTY_ENGINE_ANTI_ICE_C: f64 = 2.0;

/// Flex temperature penalty with engine and wing anti-ice on (°C).
pub const FLEX_PENALTY_ENGINE_WING_ANTI_ICE_C: f64 = 6.0;

/// Flex temperature penalty with packs on (°C).
pub const FLEX_PENALTY_PACKS_C: f64 = 2.0;

// ===== BLEED =====

/// Weight penalty with wing anti-ice on (kg).
pub const WING_ANTI_ICE_WEIGHT_PENALTY_KG: f64 = 1_600.0;

/// Weight penalty with packs on (kg).
pub const PACKS_WEIGHT_PENALTY_KG: f64 = 1_500.0;

// ===== RUNWAY =====

/// Runway distance lost lining up after a 90 degree turn (m).
pub const LINEUP_DISTANCE_90_M: f64 = 10.9;

/// Runway distance lost lining up after a 180 degree turnaround (m).
pub const LINEUP_DISTANCE_180_M: f64 = 20.5;

/// Pressure altitude divisor of the wet runway reference length (ft/m).
///
/// Wet corrections are read against `TORA - PA / 20`.
pub const WET_LENGTH_ALTITUDE_DIVISOR: f64 = 20.0;
