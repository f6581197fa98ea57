//! Weight limit coefficients
//!
//! One [`LimitCoefficients`] record per limiting factor and configuration.
//! Base weights are in kg; all other corrections produce tonnes and are
//! scaled by 1000 where they are applied.

use crate::configuration::ByConfiguration;
use crate::limits::PerFactor;
use crate::lookup::LookupTable;
use crate::tables::coefficients::{
    AltitudeCoefficients, BaseWeight, Line, LimitCoefficients, TemperatureCoefficients,
    TemperatureGradient, WindCoefficients, WindSegments,
};

/// Weight limit coefficients of every factor in every configuration
pub static LIMIT_COEFFICIENTS: PerFactor<ByConfiguration<LimitCoefficients>> = PerFactor {
    runway: RUNWAY,
    second_segment: SECOND_SEGMENT,
    brake_energy: BRAKE_ENERGY,
    vmcg: VMCG,
};

// ===== RUNWAY =====

const RUNWAY_WIND: WindCoefficients = WindCoefficients {
    headwind: WindSegments {
        below_tref: Line::new(-4.0e-5, -0.05),
        above_tref: Line::new(0.0, 0.002),
        above_tmax: Line::new(0.0, 0.003),
    },
    tailwind: WindSegments {
        below_tref: Line::new(-0.00012, -0.2),
        above_tref: Line::new(0.0, -0.002),
        above_tmax: Line::new(0.0, -0.003),
    },
};

/// Runway length (accelerate-stop / accelerate-go distance) limit
const RUNWAY: ByConfiguration<LimitCoefficients> = ByConfiguration {
    conf1: LimitCoefficients {
        base: BaseWeight::Table(LookupTable::new(&[
            (1_200.0, 45_400.0),
            (1_500.0, 52_000.0),
            (2_000.0, 63_000.0),
            (2_500.0, 72_000.0),
            (3_000.0, 80_000.0),
            (3_500.0, 87_000.0),
            (4_000.0, 93_000.0),
            (4_500.0, 98_000.0),
            (5_000.0, 102_500.0),
        ])),
        slope: 0.00032,
        altitude: AltitudeCoefficients { linear: 0.00115, quadratic: 5.2e-8 },
        temperature: TemperatureCoefficients {
            below_tref: 0.05,
            above_tref: TemperatureGradient::new(0.000175, 4.0e-6, 0.09),
            above_tmax: TemperatureGradient::new(0.000205, 5.0e-6, 0.15),
        },
        wind: RUNWAY_WIND,
    },
    conf2: LimitCoefficients {
        base: BaseWeight::Table(LookupTable::new(&[
            (1_200.0, 48_800.0),
            (1_500.0, 55_000.0),
            (2_000.0, 66_000.0),
            (2_500.0, 75_000.0),
            (3_000.0, 83_000.0),
            (3_500.0, 89_500.0),
            (4_000.0, 95_000.0),
            (4_500.0, 100_000.0),
            (5_000.0, 104_000.0),
        ])),
        slope: 0.0003,
        altitude: AltitudeCoefficients { linear: 0.0011, quadratic: 5.0e-8 },
        temperature: TemperatureCoefficients {
            below_tref: 0.05,
            above_tref: TemperatureGradient::new(0.00017, 4.0e-6, 0.09),
            above_tmax: TemperatureGradient::new(0.0002, 5.0e-6, 0.15),
        },
        wind: RUNWAY_WIND,
    },
    conf3: LimitCoefficients {
        base: BaseWeight::Table(LookupTable::new(&[
            (1_200.0, 51_000.0),
            (1_500.0, 57_000.0),
            (2_000.0, 67_500.0),
            (2_500.0, 76_000.0),
            (3_000.0, 83_500.0),
            (3_500.0, 89_500.0),
            (4_000.0, 94_500.0),
            (4_500.0, 99_000.0),
            (5_000.0, 102_800.0),
        ])),
        slope: 0.00029,
        altitude: AltitudeCoefficients { linear: 0.00108, quadratic: 4.9e-8 },
        temperature: TemperatureCoefficients {
            below_tref: 0.048,
            above_tref: TemperatureGradient::new(0.000168, 4.0e-6, 0.092),
            above_tmax: TemperatureGradient::new(0.000198, 5.0e-6, 0.152),
        },
        wind: RUNWAY_WIND,
    },
};

// ===== SECOND SEGMENT =====

const SECOND_SEGMENT_WIND: WindCoefficients = WindCoefficients {
    headwind: WindSegments {
        below_tref: Line::new(0.0, -0.01),
        above_tref: Line::new(0.0, 0.002),
        above_tmax: Line::new(0.0, 0.003),
    },
    tailwind: WindSegments {
        below_tref: Line::new(-1.0e-5, -0.02),
        above_tref: Line::new(0.0, -0.001),
        above_tmax: Line::new(0.0, -0.0015),
    },
};

/// Second segment climb gradient limit
const SECOND_SEGMENT: ByConfiguration<LimitCoefficients> = ByConfiguration {
    conf1: LimitCoefficients {
        base: BaseWeight::Linear(Line::new(0.5, 84_500.0)),
        slope: 2.0e-5,
        altitude: AltitudeCoefficients { linear: 0.00118, quadratic: 6.0e-8 },
        temperature: TemperatureCoefficients {
            below_tref: 0.08,
            above_tref: TemperatureGradient::new(2.0e-5, 5.0e-6, 0.56),
            above_tmax: TemperatureGradient::new(3.0e-5, 6.0e-6, 0.72),
        },
        wind: SECOND_SEGMENT_WIND,
    },
    conf2: LimitCoefficients {
        base: BaseWeight::Linear(Line::new(0.5, 82_500.0)),
        slope: 2.0e-5,
        altitude: AltitudeCoefficients { linear: 0.0012, quadratic: 6.0e-8 },
        temperature: TemperatureCoefficients {
            below_tref: 0.08,
            above_tref: TemperatureGradient::new(2.0e-5, 5.0e-6, 0.58),
            above_tmax: TemperatureGradient::new(3.0e-5, 6.0e-6, 0.74),
        },
        wind: SECOND_SEGMENT_WIND,
    },
    conf3: LimitCoefficients {
        base: BaseWeight::Linear(Line::new(0.45, 80_000.0)),
        slope: 2.0e-5,
        altitude: AltitudeCoefficients { linear: 0.00124, quadratic: 6.2e-8 },
        temperature: TemperatureCoefficients {
            below_tref: 0.082,
            above_tref: TemperatureGradient::new(2.0e-5, 5.0e-6, 0.6),
            above_tmax: TemperatureGradient::new(3.0e-5, 6.0e-6, 0.76),
        },
        wind: SECOND_SEGMENT_WIND,
    },
};

// ===== BRAKE ENERGY =====

const BRAKE_ENERGY_WIND: WindCoefficients = WindCoefficients {
    headwind: WindSegments {
        below_tref: Line::new(-3.0e-5, -0.06),
        above_tref: Line::new(0.0, 0.0015),
        above_tmax: Line::new(0.0, 0.0025),
    },
    tailwind: WindSegments {
        below_tref: Line::new(-0.0001, -0.25),
        above_tref: Line::new(0.0, -0.002),
        above_tmax: Line::new(0.0, -0.003),
    },
};

/// Brake energy limit
const BRAKE_ENERGY: ByConfiguration<LimitCoefficients> = ByConfiguration {
    conf1: LimitCoefficients {
        base: BaseWeight::Linear(Line::new(2.0, 80_000.0)),
        slope: 0.00031,
        altitude: AltitudeCoefficients { linear: 0.0014, quadratic: 4.0e-8 },
        temperature: TemperatureCoefficients {
            below_tref: 0.03,
            above_tref: TemperatureGradient::new(0.00014, 4.0e-6, 0.17),
            above_tmax: TemperatureGradient::new(0.00017, 5.0e-6, 0.2),
        },
        wind: BRAKE_ENERGY_WIND,
    },
    conf2: LimitCoefficients {
        base: BaseWeight::Linear(Line::new(2.0, 79_000.0)),
        slope: 0.0003,
        altitude: AltitudeCoefficients { linear: 0.00138, quadratic: 4.0e-8 },
        temperature: TemperatureCoefficients {
            below_tref: 0.03,
            above_tref: TemperatureGradient::new(0.00014, 4.0e-6, 0.17),
            above_tmax: TemperatureGradient::new(0.00017, 5.0e-6, 0.2),
        },
        wind: BRAKE_ENERGY_WIND,
    },
    conf3: LimitCoefficients {
        base: BaseWeight::Linear(Line::new(2.1, 78_300.0)),
        slope: 0.0003,
        altitude: AltitudeCoefficients { linear: 0.00136, quadratic: 3.9e-8 },
        temperature: TemperatureCoefficients {
            below_tref: 0.031,
            above_tref: TemperatureGradient::new(0.000138, 4.0e-6, 0.172),
            above_tmax: TemperatureGradient::new(0.000168, 5.0e-6, 0.202),
        },
        wind: BRAKE_ENERGY_WIND,
    },
};

// ===== VMCG =====

const VMCG_WIND: WindCoefficients = WindCoefficients {
    headwind: WindSegments {
        below_tref: Line::new(-5.0e-5, -0.08),
        above_tref: Line::new(0.0, 0.002),
        above_tmax: Line::new(0.0, 0.003),
    },
    tailwind: WindSegments {
        below_tref: Line::new(-6.0e-5, -0.1),
        above_tref: Line::new(0.0, -0.0015),
        above_tmax: Line::new(0.0, -0.002),
    },
};

/// Minimum control speed on ground limit
const VMCG: ByConfiguration<LimitCoefficients> = ByConfiguration {
    conf1: LimitCoefficients {
        base: BaseWeight::Linear(Line::new(9.0, 57_000.0)),
        slope: 0.00026,
        altitude: AltitudeCoefficients { linear: 0.00082, quadratic: 3.0e-8 },
        temperature: TemperatureCoefficients {
            below_tref: 0.06,
            above_tref: TemperatureGradient::new(0.00012, 3.0e-6, 0.2),
            above_tmax: TemperatureGradient::new(0.00015, 4.0e-6, 0.22),
        },
        wind: VMCG_WIND,
    },
    conf2: LimitCoefficients {
        base: BaseWeight::Linear(Line::new(9.5, 56_500.0)),
        slope: 0.00025,
        altitude: AltitudeCoefficients { linear: 0.0008, quadratic: 3.0e-8 },
        temperature: TemperatureCoefficients {
            below_tref: 0.06,
            above_tref: TemperatureGradient::new(0.00012, 3.0e-6, 0.2),
            above_tmax: TemperatureGradient::new(0.00015, 4.0e-6, 0.22),
        },
        wind: VMCG_WIND,
    },
    conf3: LimitCoefficients {
        base: BaseWeight::Linear(Line::new(10.0, 56_000.0)),
        slope: 0.00024,
        altitude: AltitudeCoefficients { linear: 0.00078, quadratic: 2.9e-8 },
        temperature: TemperatureCoefficients {
            below_tref: 0.058,
            above_tref: TemperatureGradient::new(0.000118, 3.0e-6, 0.198),
            above_tmax: TemperatureGradient::new(0.000148, 4.0e-6, 0.218),
        },
        wind: VMCG_WIND,
    },
};
