//! Integration tests for complete takeoff calculations
//!
//! Runs the reference scenarios end to end and checks the cross-stage
//! behaviour: wet and contaminated runways, forced maximum thrust, early
//! termination and configuration overrides.

mod common;

use flexperf_core::{
    Contamination, LimitingFactor, PerformanceLimits, RunwayCondition, TakeoffPerformanceCalculator,
    TakeoffPerformanceError,
};

use common::{assert_success, scenarios, speeds, InputsBuilder};

#[test]
fn test_reference_scenarios() {
    let calculator = TakeoffPerformanceCalculator::default();

    for scenario in scenarios::successful() {
        let result = calculator.calculate(&scenario.inputs);
        let expected = scenario.expected;

        assert_eq!(result.error, expected.error, "{}: {}", scenario.name, result.summary());
        if let (Some(mtow), Some(expected_mtow)) = (result.mtow, expected.mtow) {
            assert!(
                (mtow - expected_mtow).abs() < 0.5,
                "{}: MTOW {} expected {}",
                scenario.name,
                mtow,
                expected_mtow
            );
        }
        assert_eq!(result.flex_temperature(), expected.flex, "{}: flex", scenario.name);
        assert_eq!(speeds(&result), expected.speeds, "{}: speeds", scenario.name);
        assert_speeds_ordered!(result);
    }
}

#[test]
fn test_rejections() {
    let calculator = TakeoffPerformanceCalculator::default();

    for (name, inputs, error) in scenarios::rejected() {
        let result = calculator.calculate(&inputs);
        assert_eq!(result.error, Some(error), "{name}: {}", result.summary());
        assert_eq!(result.speeds, None, "{name}: speeds after a rejection");
        assert_eq!(result.flex, None, "{name}: flex after a rejection");
    }
}

#[test]
fn test_preconditions_leave_tables_unread() {
    let result = InputsBuilder::new().wind(-16.0).calculate();
    assert!(result.error.is_some_and(|e| e.is_precondition()));
    assert_eq!(result.configuration, None);
    assert_eq!(result.limits, None);
    assert_eq!(result.mtow, None);
}

#[test]
fn test_too_heavy_reports_the_exceeded_mtow() {
    let result = InputsBuilder::new().tow(70_000.0).tora(1_800.0).calculate();
    assert_eq!(result.error, Some(TakeoffPerformanceError::TooHeavy));
    assert_within_tolerance!(result.mtow.unwrap_or_default(), 61_600.0, 0.5);
}

#[test]
fn test_breakdown_is_consistent() {
    let result = InputsBuilder::new().packs().calculate();
    assert_success(&result);

    let limits = result.limits.expect("breakdown");
    let factors = result.limiting_factors.expect("factors");
    for factor in LimitingFactor::ALL {
        let limit = limits.get(factor);
        assert!(limit.tref.with_bleed < limit.tref.no_bleed, "{factor:?}");
        assert_within_tolerance!(limit.tref.no_bleed - limit.tref.with_bleed, 1_500.0, 1e-6);
        assert!(limits.get(factors.tref).tref.no_bleed <= limit.tref.no_bleed);
    }
    assert_eq!(result.dry_mtow, Some(limits.get(factors.tref).tref.with_bleed));
}

#[test]
fn test_wet_runway_details() {
    let dry = InputsBuilder::new().calculate();
    let wet = InputsBuilder::new().wet().calculate();
    assert_success(&wet);

    assert_eq!(wet.t_vmcg(), Some(38.0));
    assert_eq!(wet.dry_mtow, dry.dry_mtow);
    assert!(wet.mtow < dry.mtow);

    let dry_speeds = wet.dry_speeds.expect("dry speeds kept for wet runways");
    let raw = wet.raw_speeds.expect("raw speeds");
    assert!(raw.v1 < dry_speeds.v1);
    assert!(raw.vr <= dry_speeds.vr && raw.v2 <= dry_speeds.v2);
}

#[test]
fn test_contaminated_runways_never_flex() {
    for contamination in Contamination::ALL {
        let result = InputsBuilder::new().tow(55_000.0).contaminated(contamination).oat(-5.0).calculate();
        assert_success(&result);
        assert_eq!(result.flex, None, "{contamination:?}");
        assert_eq!(result.dry_speeds, None, "{contamination:?}");
        assert!(result.mtow < result.dry_mtow, "{contamination:?}");
        assert_speeds_ordered!(result);
    }
}

#[test]
fn test_max_thrust_on_contaminated_runway_keeps_chart_speeds() {
    let plain = InputsBuilder::new().contaminated(Contamination::Water6mm).calculate();
    let forced = InputsBuilder::new().contaminated(Contamination::Water6mm).max_thrust().calculate();
    assert_eq!(forced.speeds, plain.speeds);
    assert!(!forced.max_thrust_speeds_applied);
}

#[test]
fn test_max_thrust_speeds_come_from_tailwind_check() {
    let forced = InputsBuilder::new().max_thrust().calculate();
    let tailwind = InputsBuilder::new().max_thrust().wind(-15.0).calculate();
    assert!(forced.max_thrust_speeds_applied);
    assert_eq!(forced.flex, None);
    assert_eq!(forced.raw_speeds, tailwind.raw_speeds);
}

#[test]
fn test_custom_limits() {
    let limits = PerformanceLimits::new_with_weights(70_000.0, 44_000.0);
    let calculator = TakeoffPerformanceCalculator::with_limits(limits);

    let result = calculator.calculate(&InputsBuilder::new().tow(72_000.0).build());
    assert_eq!(result.error, Some(TakeoffPerformanceError::StructuralMtow));

    let result = calculator.calculate(&InputsBuilder::new().tow(69_000.0).build());
    assert_success(&result);
}

#[test]
fn test_auxiliary_queries() {
    let calculator = TakeoffPerformanceCalculator::default();

    assert_eq!(calculator.crosswind_limit(RunwayCondition::Dry, 20.0), 35.0);
    assert_eq!(calculator.crosswind_limit(RunwayCondition::Wet, 20.0), 35.0);
    let compacted = RunwayCondition::Contaminated(Contamination::CompactedSnow);
    assert_eq!(calculator.crosswind_limit(compacted, -15.0), 29.0);
    assert_eq!(calculator.crosswind_limit(compacted, -14.0), 25.0);
    let slush = RunwayCondition::Contaminated(Contamination::Slush6mm);
    assert_eq!(calculator.crosswind_limit(slush, 0.0), 20.0);

    assert!(calculator.is_cg_within_limits(28.0, 65_000.0));
    assert!(!calculator.is_cg_within_limits(19.0, 79_000.0));
}

#[test]
fn test_trim_follows_cg() {
    let forward = InputsBuilder::new().cg(20.0).calculate();
    let aft = InputsBuilder::new().cg(35.0).calculate();
    assert_success(&forward);
    assert_success(&aft);
    assert_within_tolerance!(forward.stabilizer_trim.unwrap_or_default(), 2.8, 1e-9);
    assert!(aft.stabilizer_trim < forward.stabilizer_trim);
}

#[test]
fn test_lighter_flexes_higher_until_tflexmax() {
    let mut last = i32::MIN;
    for tow in [78_000.0, 74_000.0, 70_000.0, 66_000.0, 62_000.0, 58_000.0] {
        let result = InputsBuilder::new().tow(tow).calculate();
        assert_success(&result);
        let flex = result.flex_temperature().expect("flex on a long runway");
        assert!(flex >= last, "flex {flex} at {tow} kg below {last}");
        assert!(f64::from(flex) <= result.params.tflexmax);
        last = flex;
    }
}

#[cfg(feature = "serde")]
#[test]
fn test_result_serialises() {
    let result = InputsBuilder::new().wet().cg(25.0).calculate();
    let json = serde_json::to_string(&result).expect("serialise");
    let back: flexperf_core::TakeoffPerformanceResult = serde_json::from_str(&json).expect("deserialise");
    assert_eq!(back.speeds, result.speeds);
    assert_eq!(back.flex, result.flex);
    assert_eq!(back.error, result.error);
}
