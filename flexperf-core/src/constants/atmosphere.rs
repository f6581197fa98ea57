//! International Standard Atmosphere
//!
//! Only the troposphere model is needed: takeoff is limited to 9 200 ft.

/// ISA temperature at mean sea level (°C).
///
/// Source: ICAO Doc 7488
pub const ISA_SEA_LEVEL_TEMP_C: f64 = 15.0;

/// ISA temperature lapse rate (°C/ft).
///
/// 1.9812 °C per 1000 ft, i.e. 6.5 °C per km.
pub const ISA_LAPSE_RATE_C_PER_FT: f64 = 0.0019812;

/// Standard altimeter setting (hPa).
pub const STANDARD_QNH_HPA: f64 = 1013.25;

/// Pressure altitude scale height (ft).
///
/// `T0 / L` of the barometric formula expressed in feet.
pub const PRESSURE_ALT_SCALE_FT: f64 = 145_442.15;

/// Barometric exponent `R * L / (g * M)`.
pub const BAROMETRIC_EXPONENT: f64 = 0.190263;
