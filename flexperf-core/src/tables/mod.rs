//! Compiled-in Performance Data
//!
//! ## Organization
//!
//! The flight manual charts are reduced to coefficient records, one per
//! configuration (via [`ByConfiguration`](crate::ByConfiguration)) and, for
//! weight limits, one per limiting factor (via
//! [`PerFactor`](crate::PerFactor)). Both are plain structs with one named
//! field per case, so a chart missing a configuration or factor is a compile
//! error rather than a runtime lookup failure.
//!
//! ```text
//! environment      Tref(elevation), Tmax(PA)
//! limits           base / slope / altitude / temperature / wind per factor
//! wet              T-VMCG, wet MTOW, flex and speed corrections
//! speeds           V1/VR/V2 regressions, runway/VMCG and climb families
//! minimum_speeds   VMCG, VMCA and VMU floors
//! contamination    nine contaminated runway profiles
//! cg               CG envelope, THS trim, forward CG bonus
//! ```
//!
//! All data is immutable and lives in read-only memory.

pub mod cg;
pub mod coefficients;
pub mod contamination;
pub mod environment;
pub mod limits;
pub mod minimum_speeds;
pub mod speeds;
pub mod wet;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::Configuration;
    use crate::inputs::Contamination;

    #[test]
    fn tables_strictly_ascending() {
        fn ascending(keys: impl Iterator<Item = f64>) -> bool {
            let keys: heapless::Vec<f64, 16> = keys.collect();
            keys.windows(2).all(|w| w[0] < w[1])
        }

        assert!(ascending(environment::TREF_BY_ELEVATION.samples().iter().map(|s| s.0)));
        assert!(ascending(environment::TMAX_BY_PRESSURE_ALT.samples().iter().map(|s| s.0)));
        assert!(ascending(cg::CG_ENVELOPE.samples().iter().map(|s| s.0)));
        assert!(ascending(cg::THS_TRIM.samples().iter().map(|s| s.0)));

        for conf in Configuration::ALL {
            for contamination in Contamination::ALL {
                let tables = contamination.profile().tables.get(conf);
                assert!(ascending(tables.weight_correction.samples().iter().map(|s| s.0)));
                assert!(ascending(tables.mtow.samples().iter().map(|s| s.0)));
                assert!(ascending(tables.speeds.samples().iter().map(|s| s.0)));
            }
        }
    }

    #[test]
    fn wet_adjustments_are_penalties() {
        for conf in Configuration::ALL {
            for x in [0.0, 1_500.0, 3_000.0, 6_000.0] {
                assert!(wet::WET_MTOW.get(conf).below.at(x) <= 0.0);
                assert!(wet::WET_FLEX.get(conf).above.at(x) <= 0.0);
            }
        }
    }

    #[test]
    fn contaminated_speeds_ordered() {
        for conf in Configuration::ALL {
            for contamination in Contamination::ALL {
                for (_, [v1, vr, v2]) in contamination.profile().tables.get(conf).speeds.samples() {
                    assert!(v1 <= vr && vr <= v2);
                }
            }
        }
    }
}
