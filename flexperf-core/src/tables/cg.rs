//! Centre of gravity data

use crate::configuration::ByConfiguration;
use crate::lookup::{LookupTable, VectorLookupTable};
use crate::tables::coefficients::Line;

/// Takeoff CG envelope, weight (kg) -> `[forward, aft]` limits (%MAC)
pub const CG_ENVELOPE: VectorLookupTable<2> = VectorLookupTable::new(&[
    (40_000.0, [17.0, 40.0]),
    (53_000.0, [17.0, 40.5]),
    (63_000.0, [18.0, 39.0]),
    (73_000.0, [20.0, 37.5]),
    (79_000.0, [24.0, 36.0]),
]);

/// THS takeoff trim, CG (%MAC) -> trim (degrees, positive nose up)
pub const THS_TRIM: LookupTable = LookupTable::new(&[
    (15.0, 4.0),
    (20.0, 2.8),
    (25.0, 1.6),
    (30.0, 0.5),
    (35.0, -0.6),
    (40.0, -1.6),
]);

/// Forward CG MTOW increase over MTOW (kg/kg, kg)
pub const FORWARD_CG_BONUS: ByConfiguration<Line> = ByConfiguration {
    conf1: Line::new(0.04, -2_500.0),
    conf2: Line::new(0.035, -2_000.0),
    conf3: Line::new(0.03, -1_500.0),
};
