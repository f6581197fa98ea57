//! Flat rating and maximum takeoff temperatures

use crate::lookup::LookupTable;

/// Flat rating (reference) temperature by field elevation (ft -> °C)
pub const TREF_BY_ELEVATION: LookupTable = LookupTable::new(&[
    (-2_000.0, 48.0),
    (0.0, 44.0),
    (2_000.0, 40.0),
    (4_000.0, 36.0),
    (6_000.0, 32.0),
    (8_000.0, 28.5),
    (10_000.0, 25.0),
]);

/// Maximum takeoff temperature by pressure altitude (ft -> °C)
pub const TMAX_BY_PRESSURE_ALT: LookupTable = LookupTable::new(&[
    (-2_000.0, 59.0),
    (0.0, 55.0),
    (2_000.0, 51.0),
    (4_000.0, 47.0),
    (6_000.0, 43.0),
    (8_000.0, 39.0),
    (10_000.0, 35.5),
]);
