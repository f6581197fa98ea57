//! Dry runway V-speed regressions
//!
//! Every speed is a base line over weight plus one term per environmental
//! quantity:
//!
//! ```text
//! V = a x w + b
//!   + term(TORA') + term(PA) + term(slope)
//!   + term(headwind)              headwind or tailwind coefficients
//!
//! term(q) = q x (k0 + k1 x w) + k2 x q²        w in tonnes
//! ```
//!
//! ## Families
//!
//! - Runway or VMCG limited: one regression per speed. A forward CG takes
//!   1 kt off VR.
//! - Second segment or brake energy limited: two tables per speed. Table 2
//!   applies to VR and V2 when the no-wind table 1 V2 is above a runway
//!   length threshold. V1 comes from table 2 unless that leaves more than
//!   8 kt between V1 and V2, in which case table 1 is used.

use super::RawSpeeds;
use crate::configuration::Configuration;
use crate::constants::speeds::{FORWARD_CG_VR_CORRECTION_KT, MAX_CLIMB_V1_V2_SPREAD_KT};
use crate::inputs::TakeoffPerformanceInputs;
use crate::limits::LimitingFactor;
use crate::params::TakeoffPerformanceParameters;
use crate::tables::coefficients::{ClimbSpeeds, RunwayVmcgSpeeds, SpeedRegression, SpeedTable};
use crate::tables::speeds::SPEED_COEFFICIENTS;

/// Quantities the regressions are evaluated at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedEnvironment {
    /// Takeoff weight (t)
    pub weight_t: f64,
    /// Adjusted TORA (m)
    pub adjusted_tora: f64,
    /// Pressure altitude (ft)
    pub pressure_alt: f64,
    /// Runway slope (%)
    pub slope: f64,
    /// Capped headwind (kt), negative for tailwind
    pub headwind: f64,
}

impl SpeedEnvironment {
    /// Environment of `inputs`
    pub fn new(inputs: &TakeoffPerformanceInputs, params: &TakeoffPerformanceParameters) -> Self {
        Self {
            weight_t: inputs.tow / 1000.0,
            adjusted_tora: params.adjusted_tora,
            pressure_alt: params.pressure_alt,
            slope: inputs.slope,
            headwind: params.headwind,
        }
    }
}

/// Whether the wind term is included
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wind {
    /// Include the headwind or tailwind term
    Included,
    /// Still air
    Excluded,
}

impl SpeedRegression {
    /// Speed at `env` (kt)
    pub fn evaluate(&self, env: &SpeedEnvironment, wind: Wind) -> f64 {
        let w = env.weight_t;
        let mut speed = self.base.at(w);
        speed += self.runway.at(w, env.adjusted_tora)
            + self.altitude.at(w, env.pressure_alt)
            + self.slope.at(w, env.slope);
        if wind == Wind::Included {
            let term = if env.headwind >= 0.0 { &self.headwind } else { &self.tailwind };
            speed += term.at(w, env.headwind);
        }
        speed
    }
}

fn runway_vmcg_speeds(
    coefficients: &RunwayVmcgSpeeds,
    env: &SpeedEnvironment,
    forward_cg: bool,
) -> RawSpeeds {
    let mut vr = coefficients.vr.evaluate(env, Wind::Included);
    if forward_cg {
        vr -= FORWARD_CG_VR_CORRECTION_KT;
    }
    RawSpeeds {
        v1: coefficients.v1.evaluate(env, Wind::Included),
        vr,
        v2: coefficients.v2.evaluate(env, Wind::Included),
    }
}

/// Table of the climb limited VR and V2 at `env`
pub fn climb_speed_table(coefficients: &ClimbSpeeds, env: &SpeedEnvironment) -> SpeedTable {
    let still_air_v2 = coefficients.v2.table1.evaluate(env, Wind::Excluded);
    if still_air_v2 > coefficients.table2_threshold.at(env.adjusted_tora) {
        SpeedTable::Table2
    } else {
        SpeedTable::Table1
    }
}

fn climb_speeds(coefficients: &ClimbSpeeds, env: &SpeedEnvironment) -> RawSpeeds {
    let table = climb_speed_table(coefficients, env);
    let v2 = coefficients.v2.get(table).evaluate(env, Wind::Included);
    let vr = coefficients.vr.get(table).evaluate(env, Wind::Included);

    let mut v1 = coefficients.v1.table2.evaluate(env, Wind::Included);
    if v2 - v1 > MAX_CLIMB_V1_V2_SPREAD_KT {
        v1 = coefficients.v1.table1.evaluate(env, Wind::Included);
    }

    RawSpeeds { v1, vr, v2 }
}

/// Unrounded dry runway speeds for a takeoff limited by `factor`
pub fn dry_speeds(
    conf: Configuration,
    factor: LimitingFactor,
    inputs: &TakeoffPerformanceInputs,
    params: &TakeoffPerformanceParameters,
) -> RawSpeeds {
    let coefficients = SPEED_COEFFICIENTS.get(conf);
    let env = SpeedEnvironment::new(inputs, params);
    if factor.is_runway_or_vmcg() {
        runway_vmcg_speeds(&coefficients.runway_vmcg, &env, inputs.forward_cg)
    } else {
        climb_speeds(&coefficients.climb, &env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(inputs: &TakeoffPerformanceInputs) -> SpeedEnvironment {
        SpeedEnvironment::new(inputs, &TakeoffPerformanceParameters::calculate(inputs))
    }

    #[test]
    fn heavier_is_faster() {
        let light = TakeoffPerformanceInputs { tow: 55_000.0, ..Default::default() };
        let heavy = TakeoffPerformanceInputs { tow: 75_000.0, ..Default::default() };
        for factor in LimitingFactor::ALL {
            let a = dry_speeds(Configuration::Conf2, factor, &light, &TakeoffPerformanceParameters::calculate(&light));
            let b = dry_speeds(Configuration::Conf2, factor, &heavy, &TakeoffPerformanceParameters::calculate(&heavy));
            assert!(b.v1 > a.v1 && b.vr > a.vr && b.v2 > a.v2, "{factor:?}");
        }
    }

    #[test]
    fn forward_cg_lowers_vr_on_runway_limited_takeoffs() {
        let aft = TakeoffPerformanceInputs::default();
        let forward = TakeoffPerformanceInputs { forward_cg: true, ..aft };
        let params = TakeoffPerformanceParameters::calculate(&aft);

        let a = dry_speeds(Configuration::Conf2, LimitingFactor::Runway, &aft, &params);
        let b = dry_speeds(Configuration::Conf2, LimitingFactor::Runway, &forward, &params);
        assert!((a.vr - b.vr - 1.0).abs() < 1e-9);
        assert_eq!(a.v1, b.v1);

        let a = dry_speeds(Configuration::Conf2, LimitingFactor::SecondSegment, &aft, &params);
        let b = dry_speeds(Configuration::Conf2, LimitingFactor::SecondSegment, &forward, &params);
        assert_eq!(a, b);
    }

    #[test]
    fn wind_term_follows_sign() {
        let coefficients = &SPEED_COEFFICIENTS.get(Configuration::Conf2).runway_vmcg.v1;
        let calm = env(&TakeoffPerformanceInputs::default());
        let head = env(&TakeoffPerformanceInputs { wind: 10.0, ..Default::default() });
        let tail = env(&TakeoffPerformanceInputs { wind: -10.0, ..Default::default() });

        let still = coefficients.evaluate(&calm, Wind::Included);
        assert!(coefficients.evaluate(&head, Wind::Included) > still);
        assert!(coefficients.evaluate(&tail, Wind::Included) < still);
        assert_eq!(coefficients.evaluate(&tail, Wind::Excluded), still);
    }

    #[test]
    fn climb_table_switches_with_weight() {
        let climb = &SPEED_COEFFICIENTS.get(Configuration::Conf2).climb;
        let light = env(&TakeoffPerformanceInputs { tow: 50_000.0, ..Default::default() });
        let heavy = env(&TakeoffPerformanceInputs { tow: 79_000.0, ..Default::default() });
        assert_eq!(climb_speed_table(climb, &light), SpeedTable::Table1);
        assert_eq!(climb_speed_table(climb, &heavy), SpeedTable::Table2);
    }

    fn climb(inputs: &TakeoffPerformanceInputs) -> (RawSpeeds, f64, f64) {
        let params = TakeoffPerformanceParameters::calculate(inputs);
        let env = SpeedEnvironment::new(inputs, &params);
        let v1 = &SPEED_COEFFICIENTS.get(Configuration::Conf2).climb.v1;
        (
            dry_speeds(Configuration::Conf2, LimitingFactor::BrakeEnergy, inputs, &params),
            v1.table2.evaluate(&env, Wind::Included),
            v1.table1.evaluate(&env, Wind::Included),
        )
    }

    #[test]
    fn climb_v1_from_table2_within_spread() {
        let (speeds, table2_v1, _) = climb(&TakeoffPerformanceInputs::default());
        assert!((table2_v1 - 135.0).abs() < 1e-9, "{table2_v1}");
        assert!((speeds.v2 - 139.65).abs() < 1e-9, "{speeds:?}");
        assert!(speeds.v2 - table2_v1 <= MAX_CLIMB_V1_V2_SPREAD_KT);
        assert_eq!(speeds.v1, table2_v1);
    }

    #[test]
    fn climb_v1_falls_back_to_table1_on_wide_spread() {
        let inputs = TakeoffPerformanceInputs { tora: 1_500.0, ..Default::default() };
        let (speeds, table2_v1, table1_v1) = climb(&inputs);
        assert!((speeds.v2 - 142.475).abs() < 1e-9, "{speeds:?}");
        assert!((table2_v1 - 134.2125).abs() < 1e-9, "{table2_v1}");
        assert!(speeds.v2 - table2_v1 > MAX_CLIMB_V1_V2_SPREAD_KT);
        assert_eq!(speeds.v1, table1_v1);
        assert!((speeds.v1 - 129.55).abs() < 1e-9, "{speeds:?}");
    }
}
