//! Flex-Temperature Search
//!
//! ## Motivation
//!
//! A takeoff lighter than the limit weight does not need full thrust. The
//! engines are told to assume an outside temperature higher than the actual
//! one (the flex temperature), and produce the thrust they would at that
//! temperature. The highest usable flex temperature is the hottest day on
//! which the actual weight still meets every limit.
//!
//! ## Search Window
//!
//! The window is chosen by comparing the takeoff weight with the no-bleed
//! ceilings of the governing factors:
//!
//! ```text
//! TOW > ceiling(Tmax)       scan [Tref, Tmax]           factors (Tref, Tmax)
//! TOW > ceiling(Tflexmax)   scan [Tmax, Tflexmax]       factors (Tmax, Tflexmax)
//! otherwise                 scan [Tflexmax, +8 °C]      factor Tflexmax
//! ```
//!
//! The last window lies beyond the chart, where ceilings are undefined and
//! count as met. It only exists so the bleed penalties below have room to
//! be absorbed before the final clamp.
//!
//! ## After the Scan
//!
//! 1. subtract 2 °C engine anti-ice, 6 °C engine and wing anti-ice, 2 °C packs
//! 2. clamp to Tflexmax and truncate
//! 3. wet runway: add `min(a1 x + b1, a2 x + b2, 0)` and truncate again
//! 4. a flex temperature not above OAT is discarded

use crate::configuration::Configuration;
use crate::constants::aircraft::{
    FLEX_EXTRAPOLATION_WINDOW_C, FLEX_PENALTY_ENGINE_ANTI_ICE_C,
    FLEX_PENALTY_ENGINE_WING_ANTI_ICE_C, FLEX_PENALTY_PACKS_C,
};
use crate::inputs::{AntiIce, TakeoffPerformanceInputs};
use crate::limits::{LimitWeight, LimitingFactor, LimitingFactors, PerFactor, WeightLimitPipeline};
use crate::mtow::WetConditions;
use crate::params::TakeoffPerformanceParameters;
use crate::tables::wet::WET_FLEX;

/// Usable flex temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlexTemperature {
    /// Assumed temperature (°C)
    pub temperature: i32,
    /// Factor that stopped the search
    pub limiting_factor: LimitingFactor,
}

/// Temperature interval scanned in one-degree steps
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlexWindow {
    /// First temperature scanned (°C)
    pub low: f64,
    /// Last temperature that may be scanned (°C)
    pub high: f64,
    /// Governing factor at the low end
    pub low_factor: LimitingFactor,
    /// Governing factor at the high end
    pub high_factor: LimitingFactor,
}

impl FlexWindow {
    /// Window for `tow` given the breakdown at the reference temperatures
    pub fn select(
        tow: f64,
        params: &TakeoffPerformanceParameters,
        limits: &PerFactor<LimitWeight>,
        factors: &LimitingFactors,
    ) -> Self {
        if tow > limits.get(factors.tmax).tmax.no_bleed {
            Self {
                low: params.tref,
                high: params.tmax,
                low_factor: factors.tref,
                high_factor: factors.tmax,
            }
        } else if tow > limits.get(factors.tflexmax).tflexmax.no_bleed {
            Self {
                low: params.tmax,
                high: params.tflexmax,
                low_factor: factors.tmax,
                high_factor: factors.tflexmax,
            }
        } else {
            Self {
                low: params.tflexmax,
                high: params.tflexmax + FLEX_EXTRAPOLATION_WINDOW_C,
                low_factor: factors.tflexmax,
                high_factor: factors.tflexmax,
            }
        }
    }

    /// Number of one-degree steps after `low` that stay within the window,
    /// `None` for an empty window
    fn steps(&self) -> Option<u32> {
        let span = self.high - self.low + 1e-9;
        (span >= 0.0).then(|| libm::floor(span) as u32)
    }
}

/// Flex temperature reduction for the bleed selection (°C)
pub fn bleed_temperature_penalty(inputs: &TakeoffPerformanceInputs) -> f64 {
    let anti_ice = match inputs.anti_ice {
        AntiIce::Off => 0.0,
        AntiIce::Engine => FLEX_PENALTY_ENGINE_ANTI_ICE_C,
        AntiIce::EngineWing => FLEX_PENALTY_ENGINE_WING_ANTI_ICE_C,
    };
    let packs = if inputs.packs { FLEX_PENALTY_PACKS_C } else { 0.0 };
    anti_ice + packs
}

/// Highest temperature of `window` at which `tow` meets both end factors
///
/// Returns the temperature and the tighter of the two factors there.
pub fn scan(
    tow: f64,
    window: &FlexWindow,
    pipelines: &PerFactor<WeightLimitPipeline<'_>>,
) -> Option<(f64, LimitingFactor)> {
    let low_limit = pipelines.get(window.low_factor);
    let high_limit = pipelines.get(window.high_factor);

    let mut found = None;
    let mut factor = window.low_factor;
    for step in 0..=window.steps()? {
        let temperature = window.low + f64::from(step);
        let low_weight = low_limit.weight_at_temperature(temperature);
        let high_weight = high_limit.weight_at_temperature(temperature);

        let meets = |weight: Option<f64>| weight.map_or(true, |w| tow <= w);
        if !(meets(low_weight) && meets(high_weight)) {
            continue;
        }

        found = Some(temperature);
        factor = match (low_weight, high_weight) {
            (Some(low), Some(high)) if low <= high => window.low_factor,
            (Some(_), Some(_)) => window.high_factor,
            (Some(_), None) => window.low_factor,
            (None, Some(_)) => window.high_factor,
            (None, None) => factor,
        };
    }

    found.map(|temperature| (temperature, factor))
}

/// Flex temperature for `inputs`, if one is usable
///
/// The caller has already excluded contaminated runways and maximum thrust
/// requests.
pub fn search(
    conf: Configuration,
    inputs: &TakeoffPerformanceInputs,
    params: &TakeoffPerformanceParameters,
    pipelines: &PerFactor<WeightLimitPipeline<'_>>,
    limits: &PerFactor<LimitWeight>,
    factors: &LimitingFactors,
    wet: Option<&WetConditions>,
) -> Option<FlexTemperature> {
    if inputs.tow >= limits.get(factors.tref).tref.with_bleed {
        log_trace!("Flex: TOW {} at or above the Tref limit, full thrust", inputs.tow);
        return None;
    }

    let window = FlexWindow::select(inputs.tow, params, limits, factors);
    log_trace!(
        "Flex: scanning {}..{} ({:?}/{:?})",
        window.low,
        window.high,
        window.low_factor,
        window.high_factor
    );
    let (found, limiting_factor) = scan(inputs.tow, &window, pipelines)?;

    let clamped = (found - bleed_temperature_penalty(inputs)).min(params.tflexmax);
    let mut temperature = libm::trunc(clamped);
    if let Some(wet) = wet {
        let adjustment = WET_FLEX.get(conf).get(wet.regime).at(wet.reference_length);
        temperature = libm::trunc(temperature + adjustment);
    }

    if temperature <= inputs.oat {
        log_debug!("Flex: {} not above OAT {}, full thrust", temperature, inputs.oat);
        return None;
    }

    Some(FlexTemperature {
        temperature: temperature as i32,
        limiting_factor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::RunwayCondition;

    struct Setup {
        inputs: TakeoffPerformanceInputs,
        params: TakeoffPerformanceParameters,
    }

    impl Setup {
        fn new(inputs: TakeoffPerformanceInputs) -> Self {
            Self { params: TakeoffPerformanceParameters::calculate(&inputs), inputs }
        }

        fn flex(&self) -> Option<FlexTemperature> {
            let conf = Configuration::Conf2;
            let pipelines = WeightLimitPipeline::all(conf, &self.inputs, &self.params);
            let penalty = crate::limits::bleed_weight_penalty(&self.inputs);
            let limits = pipelines.map(|p| p.breakdown(self.inputs.oat, penalty));
            let factors = LimitingFactors::select(&limits);
            let wet = matches!(self.inputs.runway_condition, RunwayCondition::Wet)
                .then(|| WetConditions::new(conf, &self.inputs, &self.params));
            search(conf, &self.inputs, &self.params, &pipelines, &limits, &factors, wet.as_ref())
        }
    }

    #[test]
    fn light_aircraft_flexes_above_oat() {
        let flex = Setup::new(TakeoffPerformanceInputs::default()).flex();
        assert!(matches!(flex, Some(f) if f.temperature > 15));
    }

    #[test]
    fn flex_never_exceeds_tflexmax() {
        let setup = Setup::new(TakeoffPerformanceInputs { tow: 50_000.0, ..Default::default() });
        let flex = setup.flex();
        assert!(matches!(flex, Some(f) if f64::from(f.temperature) <= setup.params.tflexmax));
    }

    #[test]
    fn heavier_means_lower_flex() {
        let light = Setup::new(TakeoffPerformanceInputs { tow: 60_000.0, ..Default::default() }).flex();
        let heavy = Setup::new(TakeoffPerformanceInputs { tow: 74_000.0, ..Default::default() }).flex();
        match (light, heavy) {
            (Some(light), Some(heavy)) => assert!(light.temperature >= heavy.temperature),
            other => panic!("expected two flex temperatures, got {other:?}"),
        }
    }

    #[test]
    fn bleed_lowers_flex() {
        let base = TakeoffPerformanceInputs { tow: 70_000.0, ..Default::default() };
        let plain = Setup::new(base).flex();
        let packs = Setup::new(TakeoffPerformanceInputs { packs: true, ..base }).flex();
        match (plain, packs) {
            (Some(plain), Some(packs)) => assert!(packs.temperature < plain.temperature),
            other => panic!("expected two flex temperatures, got {other:?}"),
        }
    }

    #[test]
    fn wet_flex_not_above_dry() {
        let dry = Setup::new(TakeoffPerformanceInputs::default()).flex();
        let wet = Setup::new(TakeoffPerformanceInputs {
            runway_condition: RunwayCondition::Wet,
            ..Default::default()
        })
        .flex();
        match (dry, wet) {
            (Some(dry), Some(wet)) => assert!(wet.temperature <= dry.temperature),
            other => panic!("expected two flex temperatures, got {other:?}"),
        }
    }

    #[test]
    fn bleed_penalties() {
        let base = TakeoffPerformanceInputs::default();
        assert_eq!(bleed_temperature_penalty(&base), 0.0);
        assert_eq!(bleed_temperature_penalty(&TakeoffPerformanceInputs { anti_ice: AntiIce::Engine, ..base }), 2.0);
        assert_eq!(
            bleed_temperature_penalty(&TakeoffPerformanceInputs { anti_ice: AntiIce::EngineWing, packs: true, ..base }),
            8.0
        );
    }

    #[test]
    fn window_steps_cover_the_end() {
        let window = FlexWindow {
            low: 44.0,
            high: 55.0,
            low_factor: LimitingFactor::Runway,
            high_factor: LimitingFactor::Runway,
        };
        assert_eq!(window.steps(), Some(11));
        let narrow = FlexWindow { high: 44.5, ..window };
        assert_eq!(narrow.steps(), Some(0));
        let inverted = FlexWindow { high: 40.0, ..window };
        assert_eq!(inverted.steps(), None);
    }
}
