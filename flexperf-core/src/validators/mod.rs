//! Input Preconditions
//!
//! ## Overview
//!
//! The charts only cover the certified envelope of the airframe. Before any
//! chart is read the inputs are checked against that envelope, and the first
//! violated limit is returned as the calculation's error.
//!
//! ## Check Order
//!
//! The order is part of the contract: an input that violates several limits
//! always reports the same one.
//!
//! ```text
//! 1. configuration selector in {1, 2, 3}        InvalidData
//! 2. TOW <= structural MTOW                      StructuralMtow
//! 3. pressure altitude <= certified maximum      MaximumPressureAlt
//! 4. OAT <= Tmax                                 MaximumTemperature
//! 5. TOW >= operating empty weight               OperatingEmptyWeight
//! 6. CG (when given) inside the envelope         CgOutOfLimits
//! 7. tailwind <= certified maximum               MaximumTailwind
//! 8. |slope| <= 2 %                              MaximumRunwaySlope
//! ```
//!
//! ## Customization
//!
//! [`PerformanceLimits::default`] is the certified envelope. Operators with
//! a more restrictive approval can tighten it:
//!
//! ```rust
//! use flexperf_core::{PerformanceLimits, TakeoffPerformanceCalculator};
//!
//! let limits = PerformanceLimits {
//!     max_tailwind: 10.0,
//!     ..PerformanceLimits::default()
//! };
//! let calculator = TakeoffPerformanceCalculator::with_limits(limits);
//! # let _ = calculator;
//! ```

mod cg;
mod utils;

pub use cg::{is_cg_within_limits, stabilizer_trim};
pub use utils::{check_max, check_min, check_range};

use crate::configuration::Configuration;
use crate::constants::aircraft::{
    MAX_PRESSURE_ALT_FT, MAX_RUNWAY_SLOPE_PCT, MAX_TAILWIND_KT, OPERATING_EMPTY_WEIGHT_KG,
    STRUCTURAL_MTOW_KG,
};
use crate::errors::{TakeoffPerformanceError, ValidationResult};
use crate::inputs::TakeoffPerformanceInputs;
use crate::params::TakeoffPerformanceParameters;

/// Operating envelope the inputs are checked against
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerformanceLimits {
    /// Maximum takeoff weight (kg)
    pub structural_mtow: f64,
    /// Minimum takeoff weight (kg)
    pub operating_empty_weight: f64,
    /// Maximum pressure altitude (ft)
    pub max_pressure_alt: f64,
    /// Maximum tailwind component (kt)
    pub max_tailwind: f64,
    /// Maximum runway slope magnitude (%)
    pub max_runway_slope: f64,
}

impl Default for PerformanceLimits {
    fn default() -> Self {
        Self {
            structural_mtow: STRUCTURAL_MTOW_KG,
            operating_empty_weight: OPERATING_EMPTY_WEIGHT_KG,
            max_pressure_alt: MAX_PRESSURE_ALT_FT,
            max_tailwind: MAX_TAILWIND_KT,
            max_runway_slope: MAX_RUNWAY_SLOPE_PCT,
        }
    }
}

impl PerformanceLimits {
    /// Envelope with custom weight limits and the certified environment limits
    pub fn new_with_weights(structural_mtow: f64, operating_empty_weight: f64) -> Self {
        Self {
            structural_mtow,
            operating_empty_weight,
            ..Self::default()
        }
    }
}

/// Checks inputs against a [`PerformanceLimits`] envelope
#[derive(Debug, Clone, Copy, Default)]
pub struct InputValidator {
    limits: PerformanceLimits,
}

impl InputValidator {
    /// Validator for `limits`
    pub fn new(limits: PerformanceLimits) -> Self {
        Self { limits }
    }

    /// Envelope in use
    pub fn limits(&self) -> &PerformanceLimits {
        &self.limits
    }

    /// First violated precondition, or the parsed configuration
    pub fn validate(
        &self,
        inputs: &TakeoffPerformanceInputs,
        params: &TakeoffPerformanceParameters,
    ) -> ValidationResult<Configuration> {
        use TakeoffPerformanceError::*;

        let conf = Configuration::try_from(inputs.conf)?;
        check_max(inputs.tow, self.limits.structural_mtow, StructuralMtow)?;
        check_max(params.pressure_alt, self.limits.max_pressure_alt, MaximumPressureAlt)?;
        check_max(inputs.oat, params.tmax, MaximumTemperature)?;
        check_min(inputs.tow, self.limits.operating_empty_weight, OperatingEmptyWeight)?;
        if let Some(cg) = inputs.cg {
            if !is_cg_within_limits(cg, inputs.tow) {
                return Err(CgOutOfLimits);
            }
        }
        check_min(inputs.wind, -self.limits.max_tailwind, MaximumTailwind)?;
        check_range(
            inputs.slope,
            -self.limits.max_runway_slope,
            self.limits.max_runway_slope,
            MaximumRunwaySlope,
        )?;

        Ok(conf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(inputs: TakeoffPerformanceInputs) -> ValidationResult<Configuration> {
        let params = TakeoffPerformanceParameters::calculate(&inputs);
        InputValidator::default().validate(&inputs, &params)
    }

    #[test]
    fn nominal_inputs_pass() {
        assert_eq!(validate(TakeoffPerformanceInputs::default()), Ok(Configuration::Conf2));
    }

    #[test]
    fn each_limit_reports_its_error() {
        use TakeoffPerformanceError::*;
        let base = TakeoffPerformanceInputs::default();

        assert_eq!(validate(base.with_conf(0)), Err(InvalidData));
        assert_eq!(validate(TakeoffPerformanceInputs { tow: 79_001.0, ..base }), Err(StructuralMtow));
        assert_eq!(validate(TakeoffPerformanceInputs { elevation: 9_500.0, ..base }), Err(MaximumPressureAlt));
        assert_eq!(validate(TakeoffPerformanceInputs { oat: 56.0, ..base }), Err(MaximumTemperature));
        assert_eq!(validate(TakeoffPerformanceInputs { tow: 43_000.0, ..base }), Err(OperatingEmptyWeight));
        assert_eq!(validate(TakeoffPerformanceInputs { cg: Some(10.0), ..base }), Err(CgOutOfLimits));
        assert_eq!(validate(TakeoffPerformanceInputs { wind: -16.0, ..base }), Err(MaximumTailwind));
        assert_eq!(validate(TakeoffPerformanceInputs { slope: 2.5, ..base }), Err(MaximumRunwaySlope));
        assert_eq!(validate(TakeoffPerformanceInputs { slope: -2.5, ..base }), Err(MaximumRunwaySlope));
    }

    #[test]
    fn limits_themselves_pass() {
        let base = TakeoffPerformanceInputs::default();
        assert!(validate(TakeoffPerformanceInputs { tow: 79_000.0, ..base }).is_ok());
        assert!(validate(TakeoffPerformanceInputs { tow: 44_000.0, ..base }).is_ok());
        assert!(validate(TakeoffPerformanceInputs { wind: -15.0, ..base }).is_ok());
        assert!(validate(TakeoffPerformanceInputs { slope: -2.0, ..base }).is_ok());
        assert!(validate(TakeoffPerformanceInputs { oat: 55.0, ..base }).is_ok());
    }

    #[test]
    fn first_violation_wins() {
        let inputs = TakeoffPerformanceInputs {
            conf: 7,
            tow: 90_000.0,
            wind: -30.0,
            ..Default::default()
        };
        assert_eq!(validate(inputs), Err(TakeoffPerformanceError::InvalidData));

        let inputs = TakeoffPerformanceInputs { tow: 90_000.0, wind: -30.0, slope: 3.0, ..Default::default() };
        assert_eq!(validate(inputs), Err(TakeoffPerformanceError::StructuralMtow));
    }

    #[test]
    fn custom_limits() {
        let limits = PerformanceLimits { max_tailwind: 10.0, ..Default::default() };
        let inputs = TakeoffPerformanceInputs { wind: -12.0, ..Default::default() };
        let params = TakeoffPerformanceParameters::calculate(&inputs);
        assert_eq!(
            InputValidator::new(limits).validate(&inputs, &params),
            Err(TakeoffPerformanceError::MaximumTailwind)
        );

        let heavy = PerformanceLimits::new_with_weights(70_000.0, 44_000.0);
        let inputs = TakeoffPerformanceInputs { tow: 72_000.0, ..Default::default() };
        let params = TakeoffPerformanceParameters::calculate(&inputs);
        assert_eq!(
            InputValidator::new(heavy).validate(&inputs, &params),
            Err(TakeoffPerformanceError::StructuralMtow)
        );
    }
}
