//! Contaminated Runway Profiles
//!
//! ## Motivation
//!
//! The flight manual publishes the same three charts for every contaminant:
//!
//! 1. a weight correction read against the runway length,
//! 2. an MTOW chart read against the corrected dry weight,
//! 3. a V1/VR/V2 chart read against the takeoff weight.
//!
//! [`ContaminationProfile`] holds those charts for all configurations, and
//! each [`Contamination`] state maps to exactly one static profile. The MTOW
//! and speed logic is written once against the profile.
//!
//! ## Chart Domain
//!
//! The MTOW chart starts at the lightest corrected weight the data covers.
//! A corrected weight below that first key is outside the data, and the
//! takeoff is reported as too light rather than clamped.
//!
//! ```text
//! corrected = dry MTOW - correction(TORA')
//! corrected <  first chart key  ->  TooLight
//! corrected >= first chart key  ->  MTOW = chart(corrected)
//! ```

use crate::configuration::{ByConfiguration, Configuration};
use crate::errors::{TakeoffPerformanceError, ValidationResult};
use crate::inputs::{Contamination, RunwayCondition};
use crate::lookup::{LookupTable, VectorLookupTable};
use crate::tables::contamination as data;

/// Crosswind limit on dry and wet runways (kt)
pub const CROSSWIND_DRY_WET_KT: f64 = 35.0;

/// Crosswind limit on compacted snow at or below the cold threshold (kt)
pub const CROSSWIND_COLD_COMPACTED_SNOW_KT: f64 = 29.0;

/// OAT at or below which compacted snow gives the better braking (°C)
pub const COMPACTED_SNOW_COLD_OAT_C: f64 = -15.0;

/// Crosswind limit on snow covered runways (kt)
pub const CROSSWIND_SNOW_KT: f64 = 25.0;

/// Crosswind limit on water or slush covered runways (kt)
pub const CROSSWIND_WATER_SLUSH_KT: f64 = 20.0;

/// The three charts of one contaminant in one configuration
#[derive(Debug, Clone, Copy)]
pub struct ContaminationTables {
    /// Adjusted TORA (m) -> weight correction (kg)
    pub weight_correction: LookupTable,
    /// Corrected weight (kg) -> MTOW (kg)
    pub mtow: LookupTable,
    /// Takeoff weight (kg) -> `[V1, VR, V2]` (kt)
    pub speeds: VectorLookupTable<3>,
}

impl ContaminationTables {
    /// MTOW for a dry MTOW of `dry_mtow` on a runway of `adjusted_tora`
    pub fn mtow(&self, dry_mtow: f64, adjusted_tora: f64) -> ValidationResult<f64> {
        let corrected = dry_mtow - self.weight_correction.get(adjusted_tora);
        if corrected < self.mtow.first_key() {
            log_debug!(
                "Contaminated MTOW: corrected weight {} below chart minimum {}",
                corrected,
                self.mtow.first_key()
            );
            return Err(TakeoffPerformanceError::TooLight);
        }
        Ok(self.mtow.get(corrected))
    }

    /// Chart minimum of the corrected weight (kg)
    pub fn minimum_corrected_weight(&self) -> f64 {
        self.mtow.first_key()
    }

    /// Unrounded `[V1, VR, V2]` at `tow` (kt)
    pub fn speeds(&self, tow: f64) -> [f64; 3] {
        self.speeds.get(tow)
    }
}

/// Performance charts of one contaminant
#[derive(Debug, Clone, Copy)]
pub struct ContaminationProfile {
    /// Human readable contaminant description
    pub description: &'static str,
    /// Charts per configuration
    pub tables: ByConfiguration<ContaminationTables>,
}

impl ContaminationProfile {
    /// Charts for `conf`
    pub fn for_configuration(&self, conf: Configuration) -> &ContaminationTables {
        self.tables.get(conf)
    }
}

impl Contamination {
    /// Performance charts of this contaminant
    pub fn profile(self) -> &'static ContaminationProfile {
        match self {
            Self::Water6mm => &data::WATER_6MM,
            Self::Water13mm => &data::WATER_13MM,
            Self::Slush6mm => &data::SLUSH_6MM,
            Self::Slush13mm => &data::SLUSH_13MM,
            Self::CompactedSnow => &data::COMPACTED_SNOW,
            Self::DrySnow10mm => &data::DRY_SNOW_10MM,
            Self::DrySnow100mm => &data::DRY_SNOW_100MM,
            Self::WetSnow5mm => &data::WET_SNOW_5MM,
            Self::WetSnow15mm => &data::WET_SNOW_15MM,
        }
    }
}

impl RunwayCondition {
    /// Surface description for display
    pub fn description(self) -> &'static str {
        match self {
            Self::Dry => "dry",
            Self::Wet => "wet",
            Self::Contaminated(contamination) => contamination.profile().description,
        }
    }
}

/// Maximum demonstrated crosswind for `condition` at `oat` (kt)
pub fn crosswind_limit(condition: RunwayCondition, oat: f64) -> f64 {
    match condition {
        RunwayCondition::Dry | RunwayCondition::Wet => CROSSWIND_DRY_WET_KT,
        RunwayCondition::Contaminated(Contamination::CompactedSnow) => {
            if oat <= COMPACTED_SNOW_COLD_OAT_C {
                CROSSWIND_COLD_COMPACTED_SNOW_KT
            } else {
                CROSSWIND_SNOW_KT
            }
        }
        RunwayCondition::Contaminated(
            Contamination::DrySnow10mm
            | Contamination::DrySnow100mm
            | Contamination::WetSnow5mm
            | Contamination::WetSnow15mm,
        ) => CROSSWIND_SNOW_KT,
        RunwayCondition::Contaminated(
            Contamination::Water6mm
            | Contamination::Water13mm
            | Contamination::Slush6mm
            | Contamination::Slush13mm,
        ) => CROSSWIND_WATER_SLUSH_KT,
    }
}
