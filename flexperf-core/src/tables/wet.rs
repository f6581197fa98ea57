//! Wet runway corrections
//!
//! All corrections are read against the wet reference length
//! `TORA - PA / 20` (m) and selected by the T-VMCG regime.

use crate::configuration::ByConfiguration;
use crate::lookup::VectorLookupTable;
use crate::tables::coefficients::{ByRegime, Line, TwoLineMinimum};

/// Wet runway speed deltas of one configuration
///
/// Rows are keyed by the capped headwind (kt) and hold `[a1, b1, a2, b2]`
/// of a [`TwoLineMinimum`]. VR and V2 are only corrected below T-VMCG.
#[derive(Debug, Clone, Copy)]
pub struct WetSpeedCoefficients {
    /// V1 deltas per regime
    pub v1: ByRegime<VectorLookupTable<4>>,
    /// VR deltas below T-VMCG
    pub vr_below: VectorLookupTable<4>,
    /// V2 deltas below T-VMCG
    pub v2_below: VectorLookupTable<4>,
}

/// T-VMCG over the wet reference length (°C)
pub const T_VMCG: ByConfiguration<Line> = ByConfiguration {
    conf1: Line::new(0.006, 19.0),
    conf2: Line::new(0.006, 20.0),
    conf3: Line::new(0.006, 21.0),
};

/// Wet MTOW adjustment (kg)
pub const WET_MTOW: ByConfiguration<ByRegime<TwoLineMinimum>> = ByConfiguration {
    conf1: ByRegime {
        below: TwoLineMinimum::new(Line::new(1.2, -6_800.0), Line::new(0.2, -3_600.0)),
        above: TwoLineMinimum::new(Line::new(1.0, -7_300.0), Line::new(0.3, -4_400.0)),
    },
    conf2: ByRegime {
        below: TwoLineMinimum::new(Line::new(1.2, -6_500.0), Line::new(0.2, -3_400.0)),
        above: TwoLineMinimum::new(Line::new(1.0, -7_000.0), Line::new(0.3, -4_200.0)),
    },
    conf3: ByRegime {
        below: TwoLineMinimum::new(Line::new(1.15, -6_300.0), Line::new(0.2, -3_300.0)),
        above: TwoLineMinimum::new(Line::new(0.95, -6_800.0), Line::new(0.3, -4_100.0)),
    },
};

/// Wet flex temperature adjustment (°C)
pub const WET_FLEX: ByConfiguration<ByRegime<TwoLineMinimum>> = ByConfiguration {
    conf1: ByRegime {
        below: TwoLineMinimum::new(Line::new(0.002, -10.5), Line::new(0.0005, -4.2)),
        above: TwoLineMinimum::new(Line::new(0.002, -12.5), Line::new(0.0005, -5.2)),
    },
    conf2: ByRegime {
        below: TwoLineMinimum::new(Line::new(0.002, -10.0), Line::new(0.0005, -4.0)),
        above: TwoLineMinimum::new(Line::new(0.002, -12.0), Line::new(0.0005, -5.0)),
    },
    conf3: ByRegime {
        below: TwoLineMinimum::new(Line::new(0.0019, -9.6), Line::new(0.0005, -3.9)),
        above: TwoLineMinimum::new(Line::new(0.0019, -11.6), Line::new(0.0005, -4.9)),
    },
};

/// Wet speed deltas (kt)
pub static WET_SPEEDS: ByConfiguration<WetSpeedCoefficients> = ByConfiguration {
    conf1: WetSpeedCoefficients {
        v1: ByRegime {
            below: VectorLookupTable::new(&[
                (-15.0, [0.002, -17.5, 0.0005, -10.1]),
                (0.0, [0.002, -14.5, 0.0005, -8.3]),
                (20.0, [0.002, -13.0, 0.0005, -7.4]),
                (45.0, [0.002, -11.5, 0.0005, -6.5]),
            ]),
            above: VectorLookupTable::new(&[
                (-15.0, [0.001, -10.3, 0.0003, -6.4]),
                (0.0, [0.001, -8.3, 0.0003, -5.2]),
                (20.0, [0.001, -7.3, 0.0003, -4.6]),
                (45.0, [0.001, -6.3, 0.0003, -4.0]),
            ]),
        },
        vr_below: VectorLookupTable::new(&[
            (-15.0, [0.001, -6.2, 0.0002, -3.7]),
            (0.0, [0.001, -5.2, 0.0002, -3.1]),
            (20.0, [0.001, -4.7, 0.0002, -2.8]),
            (45.0, [0.001, -4.2, 0.0002, -2.5]),
        ]),
        v2_below: VectorLookupTable::new(&[
            (-15.0, [0.0005, -3.6, 0.0001, -2.4]),
            (0.0, [0.0005, -3.1, 0.0001, -2.1]),
            (20.0, [0.0005, -2.85, 0.0001, -1.95]),
            (45.0, [0.0005, -2.6, 0.0001, -1.8]),
        ]),
    },
    conf2: WetSpeedCoefficients {
        v1: ByRegime {
            below: VectorLookupTable::new(&[
                (-15.0, [0.002, -17.0, 0.0005, -9.8]),
                (0.0, [0.002, -14.0, 0.0005, -8.0]),
                (20.0, [0.002, -12.5, 0.0005, -7.1]),
                (45.0, [0.002, -11.0, 0.0005, -6.2]),
            ]),
            above: VectorLookupTable::new(&[
                (-15.0, [0.001, -10.0, 0.0003, -6.2]),
                (0.0, [0.001, -8.0, 0.0003, -5.0]),
                (20.0, [0.001, -7.0, 0.0003, -4.4]),
                (45.0, [0.001, -6.0, 0.0003, -3.8]),
            ]),
        },
        vr_below: VectorLookupTable::new(&[
            (-15.0, [0.001, -6.0, 0.0002, -3.6]),
            (0.0, [0.001, -5.0, 0.0002, -3.0]),
            (20.0, [0.001, -4.5, 0.0002, -2.7]),
            (45.0, [0.001, -4.0, 0.0002, -2.4]),
        ]),
        v2_below: VectorLookupTable::new(&[
            (-15.0, [0.0005, -3.5, 0.0001, -2.3]),
            (0.0, [0.0005, -3.0, 0.0001, -2.0]),
            (20.0, [0.0005, -2.75, 0.0001, -1.85]),
            (45.0, [0.0005, -2.5, 0.0001, -1.7]),
        ]),
    },
    conf3: WetSpeedCoefficients {
        v1: ByRegime {
            below: VectorLookupTable::new(&[
                (-15.0, [0.0019, -16.5, 0.0005, -9.6]),
                (0.0, [0.0019, -13.5, 0.0005, -7.8]),
                (20.0, [0.0019, -12.0, 0.0005, -6.9]),
                (45.0, [0.0019, -10.5, 0.0005, -6.0]),
            ]),
            above: VectorLookupTable::new(&[
                (-15.0, [0.001, -9.8, 0.0003, -6.0]),
                (0.0, [0.001, -7.8, 0.0003, -4.8]),
                (20.0, [0.001, -6.8, 0.0003, -4.2]),
                (45.0, [0.001, -5.8, 0.0003, -3.6]),
            ]),
        },
        vr_below: VectorLookupTable::new(&[
            (-15.0, [0.001, -5.8, 0.0002, -3.5]),
            (0.0, [0.001, -4.8, 0.0002, -2.9]),
            (20.0, [0.001, -4.3, 0.0002, -2.6]),
            (45.0, [0.001, -3.8, 0.0002, -2.3]),
        ]),
        v2_below: VectorLookupTable::new(&[
            (-15.0, [0.0005, -3.4, 0.0001, -2.2]),
            (0.0, [0.0005, -2.9, 0.0001, -1.9]),
            (20.0, [0.0005, -2.65, 0.0001, -1.75]),
            (45.0, [0.0005, -2.4, 0.0001, -1.6]),
        ]),
    },
};
