//! Configuration Optimizer
//!
//! Evaluates every takeoff configuration and keeps the best usable one:
//!
//! 1. highest flex temperature (full thrust ranks below any flex)
//! 2. on a tie, lowest V1
//! 3. on a full tie, the less extended configuration
//!
//! When no configuration is usable the CONF 3 result is returned, so the
//! caller still sees the limitation of the most capable setting.

use crate::calculator::TakeoffPerformanceCalculator;
use crate::configuration::Configuration;
use crate::inputs::TakeoffPerformanceInputs;
use crate::result::TakeoffPerformanceResult;

/// Whether `candidate` beats `best`
fn is_better(candidate: &TakeoffPerformanceResult, best: &TakeoffPerformanceResult) -> bool {
    let (flex, best_flex) = (candidate.flex_temperature(), best.flex_temperature());
    if flex != best_flex {
        // None orders below every Some
        return flex > best_flex;
    }
    let v1 = |result: &TakeoffPerformanceResult| result.speeds.map(|speeds| speeds.v1);
    match (v1(candidate), v1(best)) {
        (Some(v1), Some(best_v1)) => v1 < best_v1,
        _ => false,
    }
}

/// Best successful result of `results`, earlier results winning ties
pub fn select_best(results: &[TakeoffPerformanceResult]) -> Option<&TakeoffPerformanceResult> {
    results
        .iter()
        .filter(|result| result.is_success())
        .fold(None, |best, candidate| match best {
            Some(best) if !is_better(candidate, best) => Some(best),
            _ => Some(candidate),
        })
}

/// Run `calculator` for every configuration and keep the best result
///
/// The configuration selector of `inputs` is ignored.
pub fn optimize(
    calculator: &TakeoffPerformanceCalculator,
    inputs: &TakeoffPerformanceInputs,
) -> TakeoffPerformanceResult {
    let results = Configuration::ALL.map(|conf| calculator.calculate(&inputs.with_conf(conf.number())));

    if let Some(best) = select_best(&results) {
        log_debug!("Optimal configuration: {}", best.summary());
        return best.clone();
    }

    let [_, _, last] = results;
    log_debug!("No usable configuration: {}", last.summary());
    last
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TakeoffPerformanceError;
    use crate::flex::FlexTemperature;
    use crate::limits::LimitingFactor;
    use crate::params::TakeoffPerformanceParameters;
    use crate::result::VSpeeds;

    fn outcome(conf: Configuration, flex: Option<i32>, v1: u16) -> TakeoffPerformanceResult {
        let inputs = TakeoffPerformanceInputs::default().with_conf(conf.number());
        let mut result = TakeoffPerformanceResult::new(inputs, TakeoffPerformanceParameters::calculate(&inputs));
        result.configuration = Some(conf);
        result.flex = flex.map(|temperature| FlexTemperature {
            temperature,
            limiting_factor: LimitingFactor::Runway,
        });
        result.speeds = Some(VSpeeds { v1, vr: v1 + 4, v2: v1 + 8 });
        result
    }

    fn failed(conf: Configuration) -> TakeoffPerformanceResult {
        let mut result = outcome(conf, Some(70), 120);
        result.error = Some(TakeoffPerformanceError::TooHeavy);
        result
    }

    fn chosen(results: &[TakeoffPerformanceResult]) -> Option<Configuration> {
        select_best(results).and_then(|result| result.configuration)
    }

    #[test]
    fn highest_flex_wins() {
        let results = [
            outcome(Configuration::Conf1PlusF, Some(55), 130),
            outcome(Configuration::Conf2, Some(60), 135),
            outcome(Configuration::Conf3, None, 120),
        ];
        assert_eq!(chosen(&results), Some(Configuration::Conf2));
    }

    #[test]
    fn lower_v1_breaks_flex_tie() {
        let results = [
            outcome(Configuration::Conf1PlusF, Some(60), 130),
            outcome(Configuration::Conf2, Some(60), 128),
            outcome(Configuration::Conf3, Some(60), 129),
        ];
        assert_eq!(chosen(&results), Some(Configuration::Conf2));
    }

    #[test]
    fn full_tie_keeps_first() {
        let results = [
            outcome(Configuration::Conf1PlusF, None, 130),
            outcome(Configuration::Conf2, None, 130),
        ];
        assert_eq!(chosen(&results), Some(Configuration::Conf1PlusF));
    }

    #[test]
    fn failures_are_skipped() {
        let results = [
            failed(Configuration::Conf1PlusF),
            outcome(Configuration::Conf2, None, 140),
            failed(Configuration::Conf3),
        ];
        assert_eq!(select_best(&results), Some(&results[1]));
    }

    #[test]
    fn nothing_usable() {
        let results = [failed(Configuration::Conf1PlusF), failed(Configuration::Conf2)];
        assert_eq!(select_best(&results), None);
    }

    #[test]
    fn optimize_falls_back_to_conf3() {
        let inputs = TakeoffPerformanceInputs { tow: 79_000.0, tora: 1_200.0, ..Default::default() };
        let result = optimize(&TakeoffPerformanceCalculator::default(), &inputs);
        assert_eq!(result.configuration, Some(Configuration::Conf3));
        assert_eq!(result.error, Some(TakeoffPerformanceError::TooHeavy));
    }

    #[test]
    fn optimize_ignores_the_selector() {
        let inputs = TakeoffPerformanceInputs { conf: 9, ..Default::default() };
        let result = optimize(&TakeoffPerformanceCalculator::default(), &inputs);
        assert!(result.is_success(), "{:?}", result.error);
    }
}
