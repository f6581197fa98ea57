//! Derived parameters
//!
//! Converts the raw inputs into the working quantities the charts are read
//! with. All formulas are closed form or single table reads.
//!
//! ```text
//! ISA       = 15 - elevation x 0.0019812
//! PA        = elevation + 145442.15 x (1 - (QNH / 1013.25)^0.190263)
//! Tref      = table(elevation)          flat rating temperature
//! Tmax      = table(PA)                 maximum takeoff temperature
//! Tflexmax  = ISA + 59
//! TORA'     = TORA - line-up distance
//! headwind  = min(wind, 45)             negative for a tailwind
//! ```

use crate::constants::aircraft::{FLEX_TEMP_MAX_ISA_DELTA_C, MAX_HEADWIND_KT, WET_LENGTH_ALTITUDE_DIVISOR};
use crate::constants::atmosphere::{
    BAROMETRIC_EXPONENT, ISA_LAPSE_RATE_C_PER_FT, ISA_SEA_LEVEL_TEMP_C, PRESSURE_ALT_SCALE_FT,
    STANDARD_QNH_HPA,
};
use crate::inputs::TakeoffPerformanceInputs;
use crate::tables::environment::{TMAX_BY_PRESSURE_ALT, TREF_BY_ELEVATION};

/// Working parameters derived from the inputs
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TakeoffPerformanceParameters {
    /// TORA less the line-up distance (m)
    pub adjusted_tora: f64,
    /// Pressure altitude (ft)
    pub pressure_alt: f64,
    /// ISA temperature at the field (°C)
    pub isa: f64,
    /// Flat rating (reference) temperature (°C)
    pub tref: f64,
    /// Maximum takeoff temperature (°C)
    pub tmax: f64,
    /// Maximum flex temperature (°C)
    pub tflexmax: f64,
    /// Headwind component capped at the credited maximum (kt), negative for tailwind
    pub headwind: f64,
}

impl TakeoffPerformanceParameters {
    /// Derive the working parameters from `inputs`
    pub fn calculate(inputs: &TakeoffPerformanceInputs) -> Self {
        let isa = isa_temperature(inputs.elevation);
        let pressure_alt = pressure_altitude(inputs.elevation, inputs.qnh);

        Self {
            adjusted_tora: inputs.tora - inputs.lineup_angle.distance_m(),
            pressure_alt,
            isa,
            tref: TREF_BY_ELEVATION.get(inputs.elevation),
            tmax: TMAX_BY_PRESSURE_ALT.get(pressure_alt),
            tflexmax: isa + FLEX_TEMP_MAX_ISA_DELTA_C,
            headwind: inputs.wind.min(MAX_HEADWIND_KT),
        }
    }

    /// Reference length of the wet runway corrections (m)
    pub fn wet_reference_length(&self) -> f64 {
        self.adjusted_tora - self.pressure_alt / WET_LENGTH_ALTITUDE_DIVISOR
    }
}

/// ISA temperature at `elevation_ft` (°C)
pub fn isa_temperature(elevation_ft: f64) -> f64 {
    ISA_SEA_LEVEL_TEMP_C - elevation_ft * ISA_LAPSE_RATE_C_PER_FT
}

/// Pressure altitude of a field at `elevation_ft` with altimeter setting `qnh_hpa` (ft)
pub fn pressure_altitude(elevation_ft: f64, qnh_hpa: f64) -> f64 {
    elevation_ft
        + PRESSURE_ALT_SCALE_FT * (1.0 - libm::pow(qnh_hpa / STANDARD_QNH_HPA, BAROMETRIC_EXPONENT))
}
