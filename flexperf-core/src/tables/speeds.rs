//! V-speed regressions
//!
//! Weight enters the regressions in tonnes; adjusted TORA in m, pressure
//! altitude in ft, slope in % and wind in kt.

use crate::configuration::ByConfiguration;
use crate::tables::coefficients::{
    ByTable, ClimbSpeeds, Line, RunwayVmcgSpeeds, SpeedCoefficients, SpeedRegression, SpeedTerm,
};

/// Speed regressions per configuration
pub static SPEED_COEFFICIENTS: ByConfiguration<SpeedCoefficients> = ByConfiguration {
    conf1: SpeedCoefficients {
        runway_vmcg: RunwayVmcgSpeeds {
            v1: SpeedRegression {
                base: Line::new(1.0, 61.0),
                runway: SpeedTerm::new(0.003, 0.0, -3.0e-7),
                altitude: SpeedTerm::new(0.0006, 0.0, 0.0),
                slope: SpeedTerm::new(1.0, 0.0, 0.0),
                headwind: SpeedTerm::new(0.15, 0.0, 0.0),
                tailwind: SpeedTerm::new(0.4, 0.0, 0.0),
            },
            vr: SpeedRegression {
                base: Line::new(1.0, 71.0),
                runway: SpeedTerm::new(0.001, 0.0, -1.0e-7),
                altitude: SpeedTerm::new(0.0007, 0.0, 0.0),
                slope: SpeedTerm::new(0.3, 0.0, 0.0),
                headwind: SpeedTerm::new(0.05, 0.0, 0.0),
                tailwind: SpeedTerm::new(0.1, 0.0, 0.0),
            },
            v2: SpeedRegression {
                base: Line::new(0.95, 79.0),
                runway: SpeedTerm::new(0.0008, 0.0, -1.0e-7),
                altitude: SpeedTerm::new(0.0005, 0.0, 0.0),
                slope: SpeedTerm::new(0.2, 0.0, 0.0),
                headwind: SpeedTerm::new(0.03, 0.0, 0.0),
                tailwind: SpeedTerm::new(0.05, 0.0, 0.0),
            },
        },
        climb: ClimbSpeeds {
            v1: ByTable {
                table1: SpeedRegression {
                    base: Line::new(1.0, 65.0),
                    runway: SpeedTerm::new(0.002, 0.0, -2.0e-7),
                    altitude: SpeedTerm::new(0.0006, 0.0, 0.0),
                    slope: SpeedTerm::new(0.8, 0.0, 0.0),
                    headwind: SpeedTerm::new(0.12, 0.0, 0.0),
                    tailwind: SpeedTerm::new(0.35, 0.0, 0.0),
                },
                table2: SpeedRegression {
                    base: Line::new(0.95, 74.0),
                    runway: SpeedTerm::new(0.0012, 0.0, -1.5e-7),
                    altitude: SpeedTerm::new(0.00055, 0.0, 0.0),
                    slope: SpeedTerm::new(0.8, 0.0, 0.0),
                    headwind: SpeedTerm::new(0.08, 0.0, 0.0),
                    tailwind: SpeedTerm::new(0.25, 0.0, 0.0),
                },
            },
            vr: ByTable {
                table1: SpeedRegression {
                    base: Line::new(1.0, 72.0),
                    runway: SpeedTerm::new(0.0008, 0.0, -1.0e-7),
                    altitude: SpeedTerm::new(0.0007, 0.0, 0.0),
                    slope: SpeedTerm::new(0.3, 0.0, 0.0),
                    headwind: SpeedTerm::new(0.05, 0.0, 0.0),
                    tailwind: SpeedTerm::new(0.1, 0.0, 0.0),
                },
                table2: SpeedRegression {
                    base: Line::new(0.98, 76.0),
                    runway: SpeedTerm::new(0.0008, 0.0, -1.0e-7),
                    altitude: SpeedTerm::new(0.00072, 0.0, 0.0),
                    slope: SpeedTerm::new(0.3, 0.0, 0.0),
                    headwind: SpeedTerm::new(0.05, 0.0, 0.0),
                    tailwind: SpeedTerm::new(0.1, 0.0, 0.0),
                },
            },
            v2: ByTable {
                table1: SpeedRegression {
                    base: Line::new(0.95, 80.0),
                    runway: SpeedTerm::new(0.0006, 0.0, -1.0e-7),
                    altitude: SpeedTerm::new(0.0005, 0.0, 0.0),
                    slope: SpeedTerm::new(0.2, 0.0, 0.0),
                    headwind: SpeedTerm::new(0.03, 0.0, 0.0),
                    tailwind: SpeedTerm::new(0.05, 0.0, 0.0),
                },
                table2: SpeedRegression {
                    base: Line::new(0.92, 85.0),
                    runway: SpeedTerm::new(0.0006, 0.0, -1.0e-7),
                    altitude: SpeedTerm::new(0.00052, 0.0, 0.0),
                    slope: SpeedTerm::new(0.2, 0.0, 0.0),
                    headwind: SpeedTerm::new(0.03, 0.0, 0.0),
                    tailwind: SpeedTerm::new(0.05, 0.0, 0.0),
                },
            },
            table2_threshold: Line::new(0.004, 131.0),
        },
    },
    conf2: SpeedCoefficients {
        runway_vmcg: RunwayVmcgSpeeds {
            v1: SpeedRegression {
                base: Line::new(1.0, 58.0),
                runway: SpeedTerm::new(0.003, 0.0, -3.0e-7),
                altitude: SpeedTerm::new(0.0006, 0.0, 0.0),
                slope: SpeedTerm::new(1.0, 0.0, 0.0),
                headwind: SpeedTerm::new(0.15, 0.0, 0.0),
                tailwind: SpeedTerm::new(0.4, 0.0, 0.0),
            },
            vr: SpeedRegression {
                base: Line::new(1.0, 68.0),
                runway: SpeedTerm::new(0.001, 0.0, -1.0e-7),
                altitude: SpeedTerm::new(0.0007, 0.0, 0.0),
                slope: SpeedTerm::new(0.3, 0.0, 0.0),
                headwind: SpeedTerm::new(0.05, 0.0, 0.0),
                tailwind: SpeedTerm::new(0.1, 0.0, 0.0),
            },
            v2: SpeedRegression {
                base: Line::new(0.95, 76.0),
                runway: SpeedTerm::new(0.0008, 0.0, -1.0e-7),
                altitude: SpeedTerm::new(0.0005, 0.0, 0.0),
                slope: SpeedTerm::new(0.2, 0.0, 0.0),
                headwind: SpeedTerm::new(0.03, 0.0, 0.0),
                tailwind: SpeedTerm::new(0.05, 0.0, 0.0),
            },
        },
        climb: ClimbSpeeds {
            v1: ByTable {
                table1: SpeedRegression {
                    base: Line::new(1.0, 62.0),
                    runway: SpeedTerm::new(0.002, 0.0, -2.0e-7),
                    altitude: SpeedTerm::new(0.0006, 0.0, 0.0),
                    slope: SpeedTerm::new(0.8, 0.0, 0.0),
                    headwind: SpeedTerm::new(0.12, 0.0, 0.0),
                    tailwind: SpeedTerm::new(0.35, 0.0, 0.0),
                },
                table2: SpeedRegression {
                    base: Line::new(0.95, 71.0),
                    runway: SpeedTerm::new(0.0012, 0.0, -1.5e-7),
                    altitude: SpeedTerm::new(0.00055, 0.0, 0.0),
                    slope: SpeedTerm::new(0.8, 0.0, 0.0),
                    headwind: SpeedTerm::new(0.08, 0.0, 0.0),
                    tailwind: SpeedTerm::new(0.25, 0.0, 0.0),
                },
            },
            vr: ByTable {
                table1: SpeedRegression {
                    base: Line::new(1.0, 69.0),
                    runway: SpeedTerm::new(0.0008, 0.0, -1.0e-7),
                    altitude: SpeedTerm::new(0.0007, 0.0, 0.0),
                    slope: SpeedTerm::new(0.3, 0.0, 0.0),
                    headwind: SpeedTerm::new(0.05, 0.0, 0.0),
                    tailwind: SpeedTerm::new(0.1, 0.0, 0.0),
                },
                table2: SpeedRegression {
                    base: Line::new(0.98, 73.0),
                    runway: SpeedTerm::new(0.0008, 0.0, -1.0e-7),
                    altitude: SpeedTerm::new(0.00072, 0.0, 0.0),
                    slope: SpeedTerm::new(0.3, 0.0, 0.0),
                    headwind: SpeedTerm::new(0.05, 0.0, 0.0),
                    tailwind: SpeedTerm::new(0.1, 0.0, 0.0),
                },
            },
            v2: ByTable {
                table1: SpeedRegression {
                    base: Line::new(0.95, 77.0),
                    runway: SpeedTerm::new(0.0006, 0.0, -1.0e-7),
                    altitude: SpeedTerm::new(0.0005, 0.0, 0.0),
                    slope: SpeedTerm::new(0.2, 0.0, 0.0),
                    headwind: SpeedTerm::new(0.03, 0.0, 0.0),
                    tailwind: SpeedTerm::new(0.05, 0.0, 0.0),
                },
                table2: SpeedRegression {
                    base: Line::new(0.92, 82.0),
                    runway: SpeedTerm::new(0.0006, 0.0, -1.0e-7),
                    altitude: SpeedTerm::new(0.00052, 0.0, 0.0),
                    slope: SpeedTerm::new(0.2, 0.0, 0.0),
                    headwind: SpeedTerm::new(0.03, 0.0, 0.0),
                    tailwind: SpeedTerm::new(0.05, 0.0, 0.0),
                },
            },
            table2_threshold: Line::new(0.004, 128.0),
        },
    },
    conf3: SpeedCoefficients {
        runway_vmcg: RunwayVmcgSpeeds {
            v1: SpeedRegression {
                base: Line::new(1.0, 55.0),
                runway: SpeedTerm::new(0.003, 0.0, -3.0e-7),
                altitude: SpeedTerm::new(0.0006, 0.0, 0.0),
                slope: SpeedTerm::new(1.0, 0.0, 0.0),
                headwind: SpeedTerm::new(0.15, 0.0, 0.0),
                tailwind: SpeedTerm::new(0.4, 0.0, 0.0),
            },
            vr: SpeedRegression {
                base: Line::new(1.0, 65.0),
                runway: SpeedTerm::new(0.001, 0.0, -1.0e-7),
                altitude: SpeedTerm::new(0.0007, 0.0, 0.0),
                slope: SpeedTerm::new(0.3, 0.0, 0.0),
                headwind: SpeedTerm::new(0.05, 0.0, 0.0),
                tailwind: SpeedTerm::new(0.1, 0.0, 0.0),
            },
            v2: SpeedRegression {
                base: Line::new(0.95, 73.0),
                runway: SpeedTerm::new(0.0008, 0.0, -1.0e-7),
                altitude: SpeedTerm::new(0.0005, 0.0, 0.0),
                slope: SpeedTerm::new(0.2, 0.0, 0.0),
                headwind: SpeedTerm::new(0.03, 0.0, 0.0),
                tailwind: SpeedTerm::new(0.05, 0.0, 0.0),
            },
        },
        climb: ClimbSpeeds {
            v1: ByTable {
                table1: SpeedRegression {
                    base: Line::new(1.0, 59.0),
                    runway: SpeedTerm::new(0.002, 0.0, -2.0e-7),
                    altitude: SpeedTerm::new(0.0006, 0.0, 0.0),
                    slope: SpeedTerm::new(0.8, 0.0, 0.0),
                    headwind: SpeedTerm::new(0.12, 0.0, 0.0),
                    tailwind: SpeedTerm::new(0.35, 0.0, 0.0),
                },
                table2: SpeedRegression {
                    base: Line::new(0.95, 68.0),
                    runway: SpeedTerm::new(0.0012, 0.0, -1.5e-7),
                    altitude: SpeedTerm::new(0.00055, 0.0, 0.0),
                    slope: SpeedTerm::new(0.8, 0.0, 0.0),
                    headwind: SpeedTerm::new(0.08, 0.0, 0.0),
                    tailwind: SpeedTerm::new(0.25, 0.0, 0.0),
                },
            },
            vr: ByTable {
                table1: SpeedRegression {
                    base: Line::new(1.0, 66.0),
                    runway: SpeedTerm::new(0.0008, 0.0, -1.0e-7),
                    altitude: SpeedTerm::new(0.0007, 0.0, 0.0),
                    slope: SpeedTerm::new(0.3, 0.0, 0.0),
                    headwind: SpeedTerm::new(0.05, 0.0, 0.0),
                    tailwind: SpeedTerm::new(0.1, 0.0, 0.0),
                },
                table2: SpeedRegression {
                    base: Line::new(0.98, 70.0),
                    runway: SpeedTerm::new(0.0008, 0.0, -1.0e-7),
                    altitude: SpeedTerm::new(0.00072, 0.0, 0.0),
                    slope: SpeedTerm::new(0.3, 0.0, 0.0),
                    headwind: SpeedTerm::new(0.05, 0.0, 0.0),
                    tailwind: SpeedTerm::new(0.1, 0.0, 0.0),
                },
            },
            v2: ByTable {
                table1: SpeedRegression {
                    base: Line::new(0.95, 74.0),
                    runway: SpeedTerm::new(0.0006, 0.0, -1.0e-7),
                    altitude: SpeedTerm::new(0.0005, 0.0, 0.0),
                    slope: SpeedTerm::new(0.2, 0.0, 0.0),
                    headwind: SpeedTerm::new(0.03, 0.0, 0.0),
                    tailwind: SpeedTerm::new(0.05, 0.0, 0.0),
                },
                table2: SpeedRegression {
                    base: Line::new(0.92, 79.0),
                    runway: SpeedTerm::new(0.0006, 0.0, -1.0e-7),
                    altitude: SpeedTerm::new(0.00052, 0.0, 0.0),
                    slope: SpeedTerm::new(0.2, 0.0, 0.0),
                    headwind: SpeedTerm::new(0.03, 0.0, 0.0),
                    tailwind: SpeedTerm::new(0.05, 0.0, 0.0),
                },
            },
            table2_threshold: Line::new(0.004, 125.0),
        },
    },
};
