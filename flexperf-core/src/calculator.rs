//! Takeoff Performance Calculator
//!
//! ## Pipeline
//!
//! ```text
//! inputs ─▶ parameters ─▶ validation ─▶ limit weights (x4 factors)
//!                                              │
//!        ┌─────────────────────────────────────┘
//!        ▼
//!   limiting factors ─▶ MTOW ─▶ flex search ─▶ speeds ─▶ floors/ordering
//! ```
//!
//! Each stage either fills its fields of the result or sets the result's
//! error and stops. The calculator holds no mutable state; identical inputs
//! always produce identical results and calls may run concurrently.
//!
//! ## Maximum Thrust Cross-Check
//!
//! When the crew forces maximum thrust on a dry or wet runway, the speeds
//! are recomputed at full thrust with a 15 kt tailwind. If that side
//! calculation is valid its speeds are used, since they cover the worst
//! certified wind; otherwise the speeds of the actual wind are kept.

use crate::constants::speeds::MAX_THRUST_CHECK_TAILWIND_KT;
use crate::contamination;
use crate::errors::TakeoffPerformanceError;
use crate::flex;
use crate::inputs::{RunwayCondition, TakeoffPerformanceInputs};
use crate::limits::{bleed_weight_penalty, LimitingFactors, WeightLimitPipeline};
use crate::mtow::{self, WetConditions};
use crate::optimizer;
use crate::params::TakeoffPerformanceParameters;
use crate::result::TakeoffPerformanceResult;
use crate::speeds::{self, RawSpeeds, SpeedFloors};
use crate::validators::{self, InputValidator, PerformanceLimits};

/// Whether a run is the maximum thrust cross-check of another run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Run {
    Main,
    MaxThrustCheck,
}

/// Entry point of the engine
#[derive(Debug, Clone, Copy, Default)]
pub struct TakeoffPerformanceCalculator {
    validator: InputValidator,
}

impl TakeoffPerformanceCalculator {
    /// Calculator for the certified envelope
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculator checking inputs against `limits`
    pub fn with_limits(limits: PerformanceLimits) -> Self {
        Self {
            validator: InputValidator::new(limits),
        }
    }

    /// Envelope the inputs are checked against
    pub fn limits(&self) -> &PerformanceLimits {
        self.validator.limits()
    }

    /// Evaluate `inputs` in the configuration they select
    pub fn calculate(&self, inputs: &TakeoffPerformanceInputs) -> TakeoffPerformanceResult {
        let result = self.run(inputs, Run::Main);
        log_debug!("Takeoff calculation: {}", result.summary());
        result
    }

    /// Evaluate `inputs` in every configuration and return the best result
    ///
    /// See [`optimizer`] for the ranking.
    pub fn calculate_optimal_configuration(&self, inputs: &TakeoffPerformanceInputs) -> TakeoffPerformanceResult {
        optimizer::optimize(self, inputs)
    }

    /// Whether `cg` (%MAC) is inside the takeoff envelope at `weight` (kg)
    pub fn is_cg_within_limits(&self, cg: f64, weight: f64) -> bool {
        validators::is_cg_within_limits(cg, weight)
    }

    /// Maximum demonstrated crosswind (kt) for `condition` at `oat` (°C)
    pub fn crosswind_limit(&self, condition: RunwayCondition, oat: f64) -> f64 {
        contamination::crosswind_limit(condition, oat)
    }

    fn run(&self, inputs: &TakeoffPerformanceInputs, run: Run) -> TakeoffPerformanceResult {
        let params = TakeoffPerformanceParameters::calculate(inputs);
        let mut result = TakeoffPerformanceResult::new(*inputs, params);
        result.stabilizer_trim = inputs.cg.map(validators::stabilizer_trim);

        let conf = match self.validator.validate(inputs, &params) {
            Ok(conf) => conf,
            Err(error) => {
                result.error = Some(error);
                return result;
            }
        };
        result.configuration = Some(conf);

        let pipelines = WeightLimitPipeline::all(conf, inputs, &params);
        let bleed_penalty = bleed_weight_penalty(inputs);
        let limits = pipelines.map(|pipeline| pipeline.breakdown(inputs.oat, bleed_penalty));
        let factors = LimitingFactors::select(&limits);
        result.limits = Some(limits);
        result.limiting_factors = Some(factors);

        let dry_mtow = mtow::dry_mtow(&limits, &factors);
        result.dry_mtow = Some(dry_mtow);
        let wet = matches!(inputs.runway_condition, RunwayCondition::Wet)
            .then(|| WetConditions::new(conf, inputs, &params));
        result.wet = wet;

        let mtow = match mtow::resolve(conf, inputs, &params, dry_mtow, wet.as_ref(), &factors) {
            Ok(mtow) => mtow,
            Err(error) => {
                result.error = Some(error);
                return result;
            }
        };
        result.mtow = Some(mtow);
        if inputs.tow > mtow {
            result.error = Some(TakeoffPerformanceError::TooHeavy);
            return result;
        }

        let contaminated = inputs.runway_condition.contamination();
        let full_thrust = inputs.force_max_thrust || run == Run::MaxThrustCheck;
        if contaminated.is_none() && !full_thrust {
            result.flex = flex::search(conf, inputs, &params, &pipelines, &limits, &factors, wet.as_ref());
        }

        let mut raw: RawSpeeds = match contaminated {
            Some(contaminant) => contaminant
                .profile()
                .for_configuration(conf)
                .speeds(inputs.tow)
                .into(),
            None => {
                let governing = result.flex.map_or(factors.oat, |flex| flex.limiting_factor);
                let dry = speeds::dry_speeds(conf, governing, inputs, &params);
                result.dry_speeds = Some(dry);
                match &wet {
                    Some(wet) => dry + speeds::wet_speed_deltas(conf, wet, params.headwind),
                    None => dry,
                }
            }
        };

        if inputs.force_max_thrust && contaminated.is_none() && run == Run::Main {
            if let Some(check) = self.max_thrust_speeds(inputs) {
                raw = check;
                result.max_thrust_speeds_applied = true;
            }
        }
        result.raw_speeds = Some(raw);

        let floors = SpeedFloors::new(conf, params.pressure_alt, inputs.tow);
        let (speeds, error) = speeds::reconcile(&raw, &floors);
        result.speeds = Some(speeds);
        result.error = error;
        result
    }

    /// Unrounded speeds of the 15 kt tailwind full thrust cross-check, if valid
    fn max_thrust_speeds(&self, inputs: &TakeoffPerformanceInputs) -> Option<RawSpeeds> {
        let check = TakeoffPerformanceInputs {
            wind: -MAX_THRUST_CHECK_TAILWIND_KT,
            ..*inputs
        };
        let result = self.run(&check, Run::MaxThrustCheck);
        if result.error.is_some() {
            log_warn!("Maximum thrust tailwind check failed ({:?}), keeping actual wind speeds", result.error);
            return None;
        }
        result.raw_speeds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::Configuration;
    use crate::inputs::Contamination;
    use crate::limits::LimitingFactor;
    use crate::result::VSpeeds;

    fn calculate(inputs: TakeoffPerformanceInputs) -> TakeoffPerformanceResult {
        TakeoffPerformanceCalculator::default().calculate(&inputs)
    }

    #[test]
    fn nominal_dry_takeoff() {
        let result = calculate(TakeoffPerformanceInputs::default());
        assert_eq!(result.error, None);
        assert_eq!(result.configuration, Some(Configuration::Conf2));
        assert!(matches!(result.mtow, Some(m) if (m - 83_000.0).abs() < 0.5), "{:?}", result.mtow);
        assert_eq!(result.flex_temperature(), Some(69));
        assert_eq!(result.flex.map(|f| f.limiting_factor), Some(LimitingFactor::SecondSegment));
        assert_eq!(result.speeds, Some(VSpeeds { v1: 135, vr: 136, v2: 140 }));
    }

    #[test]
    fn precondition_stops_early() {
        let result = calculate(TakeoffPerformanceInputs { conf: 4, ..Default::default() });
        assert_eq!(result.error, Some(TakeoffPerformanceError::InvalidData));
        assert_eq!(result.configuration, None);
        assert_eq!(result.limits, None);
        assert_eq!(result.speeds, None);
    }

    #[test]
    fn too_heavy_keeps_mtow() {
        let result = calculate(TakeoffPerformanceInputs { tow: 70_000.0, tora: 1_800.0, ..Default::default() });
        assert_eq!(result.error, Some(TakeoffPerformanceError::TooHeavy));
        assert!(matches!(result.mtow, Some(m) if m < 70_000.0));
        assert_eq!(result.speeds, None);
    }

    #[test]
    fn contaminated_runway_uses_full_thrust() {
        let result = calculate(TakeoffPerformanceInputs {
            runway_condition: RunwayCondition::Contaminated(Contamination::Water6mm),
            ..Default::default()
        });
        assert_eq!(result.error, None);
        assert_eq!(result.flex, None);
        assert_eq!(result.dry_speeds, None);
        assert_eq!(result.speeds, Some(VSpeeds { v1: 121, vr: 134, v2: 140 }));
    }

    #[test]
    fn forced_max_thrust_uses_tailwind_speeds() {
        let result = calculate(TakeoffPerformanceInputs { force_max_thrust: true, ..Default::default() });
        assert_eq!(result.error, None);
        assert_eq!(result.flex, None);
        assert!(result.max_thrust_speeds_applied);
        assert_eq!(result.speeds, Some(VSpeeds { v1: 124, vr: 134, v2: 139 }));
    }

    #[test]
    fn forced_max_thrust_check_outside_envelope() {
        let limits = PerformanceLimits { max_tailwind: 10.0, ..Default::default() };
        let calculator = TakeoffPerformanceCalculator::with_limits(limits);
        let result = calculator.calculate(&TakeoffPerformanceInputs { force_max_thrust: true, ..Default::default() });
        assert_eq!(result.error, None);
        assert_eq!(result.flex, None);
        assert!(!result.max_thrust_speeds_applied);
        assert_eq!(result.raw_speeds, result.dry_speeds);
    }

    #[test]
    fn trim_reported_with_cg() {
        let result = calculate(TakeoffPerformanceInputs { cg: Some(28.0), ..Default::default() });
        assert!(result.stabilizer_trim.is_some());
        assert_eq!(calculate(TakeoffPerformanceInputs::default()).stabilizer_trim, None);
    }

    #[test]
    fn auxiliary_queries() {
        let calculator = TakeoffPerformanceCalculator::new();
        assert_eq!(calculator.crosswind_limit(RunwayCondition::Dry, 15.0), 35.0);
        assert!(!calculator.is_cg_within_limits(10.0, 65_000.0));
        assert_eq!(calculator.limits(), &PerformanceLimits::default());
    }

    #[test]
    fn identical_inputs_identical_results() {
        let inputs = TakeoffPerformanceInputs { runway_condition: RunwayCondition::Wet, ..Default::default() };
        assert_eq!(calculate(inputs), calculate(inputs));
    }
}
