//! MTOW Resolver
//!
//! ## Dry Runway
//!
//! The dry MTOW is the with-bleed ceiling at Tref of the factor governing at
//! Tref.
//!
//! ## Wet Runway
//!
//! A wet runway deducts `min(a1 x + b1, a2 x + b2, 0)` from the dry MTOW,
//! with `x = TORA' - PA / 20`. The coefficient pair depends on the T-VMCG
//! regime: above T-VMCG the wet takeoff is VMCG limited and uses the second
//! set.
//!
//! ```text
//! T-VMCG = a x x + b          per configuration
//! regime = Above if OAT > T-VMCG else Below
//! ```
//!
//! ## Contaminated Runway
//!
//! Resolved through the contaminant's charts, see
//! [`ContaminationTables::mtow`](crate::contamination::ContaminationTables::mtow).
//!
//! ## Forward CG
//!
//! With a forward CG a runway or VMCG limited takeoff gains
//! `max(0, a x MTOW + b)`. The bonus is applied last, after the runway
//! condition.

use crate::configuration::Configuration;
use crate::errors::ValidationResult;
use crate::inputs::{RunwayCondition, TakeoffPerformanceInputs};
use crate::limits::{LimitWeight, LimitingFactors, PerFactor};
use crate::params::TakeoffPerformanceParameters;
use crate::tables::cg::FORWARD_CG_BONUS;
use crate::tables::coefficients::VmcgRegime;
use crate::tables::wet::{T_VMCG, WET_MTOW};

/// T-VMCG regime of a wet runway takeoff
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WetConditions {
    /// Wet reference length `TORA' - PA / 20` (m)
    pub reference_length: f64,
    /// Regime switch temperature (°C)
    pub t_vmcg: f64,
    /// Regime of the actual OAT
    pub regime: VmcgRegime,
}

impl WetConditions {
    /// Regime for `inputs` in `conf`
    pub fn new(
        conf: Configuration,
        inputs: &TakeoffPerformanceInputs,
        params: &TakeoffPerformanceParameters,
    ) -> Self {
        let reference_length = params.wet_reference_length();
        let t_vmcg = T_VMCG.get(conf).at(reference_length);
        Self {
            reference_length,
            t_vmcg,
            regime: VmcgRegime::of(inputs.oat, t_vmcg),
        }
    }
}

/// Dry MTOW: with-bleed Tref ceiling of the Tref governing factor (kg)
pub fn dry_mtow(limits: &PerFactor<LimitWeight>, factors: &LimitingFactors) -> f64 {
    limits.get(factors.tref).tref.with_bleed
}

/// Wet MTOW deduction, never positive (kg)
pub fn wet_adjustment(conf: Configuration, wet: &WetConditions) -> f64 {
    WET_MTOW.get(conf).get(wet.regime).at(wet.reference_length)
}

/// Forward CG bonus for an MTOW of `mtow`, never negative (kg)
pub fn forward_cg_bonus(conf: Configuration, mtow: f64) -> f64 {
    FORWARD_CG_BONUS.get(conf).at(mtow).max(0.0)
}

/// MTOW for the runway condition and CG (kg)
///
/// `wet` is the regime already derived for a wet runway; it is derived here
/// when absent.
pub fn resolve(
    conf: Configuration,
    inputs: &TakeoffPerformanceInputs,
    params: &TakeoffPerformanceParameters,
    dry_mtow: f64,
    wet: Option<&WetConditions>,
    factors: &LimitingFactors,
) -> ValidationResult<f64> {
    let mtow = match (inputs.runway_condition, wet) {
        (RunwayCondition::Dry, _) => dry_mtow,
        (RunwayCondition::Wet, Some(wet)) => dry_mtow + wet_adjustment(conf, wet),
        (RunwayCondition::Wet, None) => {
            dry_mtow + wet_adjustment(conf, &WetConditions::new(conf, inputs, params))
        }
        (RunwayCondition::Contaminated(contamination), _) => contamination
            .profile()
            .for_configuration(conf)
            .mtow(dry_mtow, params.adjusted_tora)?,
    };

    if inputs.forward_cg && factors.oat.is_runway_or_vmcg() {
        let bonus = forward_cg_bonus(conf, mtow);
        log_trace!("Forward CG bonus {} kg on MTOW {}", bonus, mtow);
        return Ok(mtow + bonus);
    }
    Ok(mtow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TakeoffPerformanceError;
    use crate::inputs::Contamination;
    use crate::limits::LimitingFactor;

    const RUNWAY_LIMITED: LimitingFactors = LimitingFactors {
        oat: LimitingFactor::Runway,
        tref: LimitingFactor::Runway,
        tmax: LimitingFactor::Runway,
        tflexmax: LimitingFactor::Runway,
    };

    const CLIMB_LIMITED: LimitingFactors = LimitingFactors {
        oat: LimitingFactor::SecondSegment,
        ..RUNWAY_LIMITED
    };

    fn resolve_for(inputs: TakeoffPerformanceInputs, dry: f64, factors: &LimitingFactors) -> ValidationResult<f64> {
        let params = TakeoffPerformanceParameters::calculate(&inputs);
        let conf = Configuration::Conf2;
        let wet = WetConditions::new(conf, &inputs, &params);
        resolve(conf, &inputs, &params, dry, Some(&wet), factors)
    }

    #[test]
    fn dry_is_unchanged() {
        assert_eq!(resolve_for(TakeoffPerformanceInputs::default(), 80_000.0, &RUNWAY_LIMITED), Ok(80_000.0));
    }

    #[test]
    fn wet_never_exceeds_dry() {
        for tora in [1_500.0, 2_000.0, 3_000.0, 4_000.0] {
            let inputs = TakeoffPerformanceInputs {
                tora,
                runway_condition: RunwayCondition::Wet,
                ..Default::default()
            };
            let wet = resolve_for(inputs, 75_000.0, &RUNWAY_LIMITED);
            assert!(matches!(wet, Ok(mtow) if mtow <= 75_000.0), "tora {tora}: {wet:?}");
        }
    }

    #[test]
    fn wet_regime_follows_oat() {
        let inputs = TakeoffPerformanceInputs::default();
        let params = TakeoffPerformanceParameters::calculate(&inputs);
        let wet = WetConditions::new(Configuration::Conf2, &inputs, &params);
        // 0.006 x 3000 + 20
        assert!((wet.t_vmcg - 38.0).abs() < 1e-9);
        assert_eq!(wet.regime, VmcgRegime::Below);

        let hot = TakeoffPerformanceInputs { oat: 40.0, ..inputs };
        assert_eq!(WetConditions::new(Configuration::Conf2, &hot, &params).regime, VmcgRegime::Above);
    }

    #[test]
    fn contaminated_too_light() {
        let inputs = TakeoffPerformanceInputs {
            tora: 1_500.0,
            runway_condition: RunwayCondition::Contaminated(Contamination::Water6mm),
            ..Default::default()
        };
        assert_eq!(resolve_for(inputs, 50_000.0, &RUNWAY_LIMITED), Err(TakeoffPerformanceError::TooLight));
    }

    #[test]
    fn contaminated_reduces_mtow() {
        let inputs = TakeoffPerformanceInputs {
            runway_condition: RunwayCondition::Contaminated(Contamination::Slush13mm),
            ..Default::default()
        };
        let mtow = resolve_for(inputs, 80_000.0, &RUNWAY_LIMITED);
        assert!(matches!(mtow, Ok(m) if m < 80_000.0), "{mtow:?}");
    }

    #[test]
    fn forward_cg_bonus_only_for_runway_or_vmcg() {
        let inputs = TakeoffPerformanceInputs { forward_cg: true, ..Default::default() };
        // 0.035 x 80000 - 2000
        let bumped = resolve_for(inputs, 80_000.0, &RUNWAY_LIMITED);
        assert!(matches!(bumped, Ok(m) if (m - 80_800.0).abs() < 1e-6), "{bumped:?}");
        assert_eq!(resolve_for(inputs, 80_000.0, &CLIMB_LIMITED), Ok(80_000.0));
    }

    #[test]
    fn forward_cg_bonus_never_negative() {
        assert_eq!(forward_cg_bonus(Configuration::Conf2, 50_000.0), 0.0);
        assert!(forward_cg_bonus(Configuration::Conf1PlusF, 79_000.0) > 0.0);
    }
}
