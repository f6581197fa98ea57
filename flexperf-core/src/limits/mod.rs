//! Weight-Limit Pipeline
//!
//! ## Overview
//!
//! Four phenomena limit the takeoff weight. For each of them the charts give
//! a base weight for the runway length and then a fixed chain of
//! corrections:
//!
//! ```text
//! base(TORA')                       runway: chart, others: a x TORA' + b
//!   - 1000 x k x TORA' x slope      slope, downhill raises the limit
//!   - 1000 x (c1 x PA + c2 x PA²)   altitude
//!   = altitude corrected weight
//!   - temperature deduction(T)      three segments: <= Tref, <= Tmax, <= Tflexmax
//!   - wind deduction(T)             headwind or tailwind set, same segments
//!   = no-bleed ceiling at T
//!   - 1600 kg wing anti-ice, - 1500 kg packs
//!   = with-bleed ceiling at T
//! ```
//!
//! The ceilings are evaluated at four reference temperatures: OAT, Tref,
//! Tmax and Tflexmax. The flex search evaluates further temperatures through
//! [`WeightLimitPipeline::weight_at_temperature`].
//!
//! ## Temperature Segments
//!
//! Below Tref the engines are flat rated and a colder day only gains weight
//! slowly. Above Tref thrust decays and each degree costs more; above Tmax
//! the charts continue with a steeper gradient up to Tflexmax. Beyond
//! Tflexmax the charts are undefined and the ceiling is `None`.
//!
//! ## Wind Sign Guard
//!
//! A headwind must not reduce the limit and a tailwind must not raise it.
//! Near the chart edges the regression can produce such a deduction; it is
//! discarded.

mod selector;

pub use selector::{most_limiting, LimitingFactors};

use crate::configuration::Configuration;
use crate::constants::aircraft::{PACKS_WEIGHT_PENALTY_KG, WING_ANTI_ICE_WEIGHT_PENALTY_KG};
use crate::inputs::TakeoffPerformanceInputs;
use crate::params::TakeoffPerformanceParameters;
use crate::tables::coefficients::LimitCoefficients;
use crate::tables::limits::LIMIT_COEFFICIENTS;

/// Phenomenon limiting the takeoff weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LimitingFactor {
    /// Runway length
    Runway,
    /// Second segment climb gradient
    SecondSegment,
    /// Brake energy
    BrakeEnergy,
    /// Minimum control speed on ground
    Vmcg,
}

impl LimitingFactor {
    /// All factors in selection order
    pub const ALL: [LimitingFactor; 4] = [
        Self::Runway,
        Self::SecondSegment,
        Self::BrakeEnergy,
        Self::Vmcg,
    ];

    /// Whether the runway/VMCG speed regressions apply
    pub const fn is_runway_or_vmcg(self) -> bool {
        matches!(self, Self::Runway | Self::Vmcg)
    }
}

/// One value per limiting factor
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerFactor<T> {
    /// Runway length
    pub runway: T,
    /// Second segment
    pub second_segment: T,
    /// Brake energy
    pub brake_energy: T,
    /// VMCG
    pub vmcg: T,
}

impl<T> PerFactor<T> {
    /// Build by calling `f` once per factor, in selection order
    pub fn from_fn(mut f: impl FnMut(LimitingFactor) -> T) -> Self {
        Self {
            runway: f(LimitingFactor::Runway),
            second_segment: f(LimitingFactor::SecondSegment),
            brake_energy: f(LimitingFactor::BrakeEnergy),
            vmcg: f(LimitingFactor::Vmcg),
        }
    }

    /// Value for `factor`
    pub const fn get(&self, factor: LimitingFactor) -> &T {
        match factor {
            LimitingFactor::Runway => &self.runway,
            LimitingFactor::SecondSegment => &self.second_segment,
            LimitingFactor::BrakeEnergy => &self.brake_energy,
            LimitingFactor::Vmcg => &self.vmcg,
        }
    }

    /// Apply `f` to every value
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> PerFactor<U> {
        PerFactor {
            runway: f(&self.runway),
            second_segment: f(&self.second_segment),
            brake_energy: f(&self.brake_energy),
            vmcg: f(&self.vmcg),
        }
    }
}

/// Weight ceiling at one temperature (kg)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ceiling {
    /// Temperature deduction, negative below Tref
    pub temperature_delta: f64,
    /// Wind deduction, negative for a credited headwind
    pub wind_delta: f64,
    /// Ceiling without bleed deductions
    pub no_bleed: f64,
    /// Ceiling with wing anti-ice and packs deducted
    pub with_bleed: f64,
}

/// Correction chain of one limiting factor (kg)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LimitWeight {
    /// Base weight for the runway length
    pub base: f64,
    /// After the slope correction
    pub slope_corrected: f64,
    /// After the altitude correction
    pub altitude_corrected: f64,
    /// Ceiling at OAT
    pub oat: Ceiling,
    /// Ceiling at Tref
    pub tref: Ceiling,
    /// Ceiling at Tmax
    pub tmax: Ceiling,
    /// Ceiling at Tflexmax
    pub tflexmax: Ceiling,
}

/// Flat weight deduction for the bleed selection (kg)
pub fn bleed_weight_penalty(inputs: &TakeoffPerformanceInputs) -> f64 {
    let mut penalty = 0.0;
    if inputs.anti_ice.wing() {
        penalty += WING_ANTI_ICE_WEIGHT_PENALTY_KG;
    }
    if inputs.packs {
        penalty += PACKS_WEIGHT_PENALTY_KG;
    }
    penalty
}

/// Evaluates the correction chain of one factor for one set of inputs
#[derive(Debug, Clone, Copy)]
pub struct WeightLimitPipeline<'a> {
    coefficients: &'a LimitCoefficients,
    params: &'a TakeoffPerformanceParameters,
    base: f64,
    slope_corrected: f64,
    altitude_corrected: f64,
}

impl<'a> WeightLimitPipeline<'a> {
    /// Pipeline with explicit coefficients
    pub fn new(
        coefficients: &'a LimitCoefficients,
        slope: f64,
        params: &'a TakeoffPerformanceParameters,
    ) -> Self {
        let tora = params.adjusted_tora;
        let base = coefficients.base.at(tora);
        let slope_corrected = base - 1000.0 * coefficients.slope * tora * slope;
        let altitude_corrected = slope_corrected - 1000.0 * coefficients.altitude.at(params.pressure_alt);

        Self {
            coefficients,
            params,
            base,
            slope_corrected,
            altitude_corrected,
        }
    }

    /// Pipeline of `factor` in `conf` from the certified data
    pub fn for_factor(
        factor: LimitingFactor,
        conf: Configuration,
        inputs: &TakeoffPerformanceInputs,
        params: &'a TakeoffPerformanceParameters,
    ) -> Self {
        Self::new(LIMIT_COEFFICIENTS.get(factor).get(conf), inputs.slope, params)
    }

    /// Pipelines of all four factors
    pub fn all(
        conf: Configuration,
        inputs: &TakeoffPerformanceInputs,
        params: &'a TakeoffPerformanceParameters,
    ) -> PerFactor<Self> {
        PerFactor::from_fn(|factor| Self::for_factor(factor, conf, inputs, params))
    }

    /// Altitude corrected weight (kg)
    pub fn altitude_corrected(&self) -> f64 {
        self.altitude_corrected
    }

    /// No-bleed ceiling at `temperature`, `None` above Tflexmax
    pub fn weight_at_temperature(&self, temperature: f64) -> Option<f64> {
        if temperature > self.params.tflexmax {
            return None;
        }
        Some(self.ceiling(temperature, 0.0).no_bleed)
    }

    /// Full breakdown at the four reference temperatures
    pub fn breakdown(&self, oat: f64, bleed_penalty: f64) -> LimitWeight {
        let p = self.params;
        LimitWeight {
            base: self.base,
            slope_corrected: self.slope_corrected,
            altitude_corrected: self.altitude_corrected,
            oat: self.ceiling(oat, bleed_penalty),
            tref: self.ceiling(p.tref, bleed_penalty),
            tmax: self.ceiling(p.tmax, bleed_penalty),
            tflexmax: self.ceiling(p.tflexmax, bleed_penalty),
        }
    }

    // Callers keep `temperature` at or below Tflexmax.
    fn ceiling(&self, temperature: f64, bleed_penalty: f64) -> Ceiling {
        let temperature_delta = self.temperature_deduction(temperature);
        let wind_delta = self.wind_deduction(temperature);
        let no_bleed = self.altitude_corrected - temperature_delta - wind_delta;
        Ceiling {
            temperature_delta,
            wind_delta,
            no_bleed,
            with_bleed: no_bleed - bleed_penalty,
        }
    }

    fn temperature_deduction(&self, temperature: f64) -> f64 {
        let c = &self.coefficients.temperature;
        let p = self.params;

        if temperature <= p.tref {
            return 1000.0 * c.below_tref * (temperature - p.tref);
        }
        let above_tref = 1000.0 * c.above_tref.at(p.adjusted_tora, p.pressure_alt);
        if temperature <= p.tmax {
            return above_tref * (temperature - p.tref);
        }
        above_tref * (p.tmax - p.tref)
            + 1000.0 * c.above_tmax.at(p.adjusted_tora, p.pressure_alt) * (temperature - p.tmax)
    }

    fn wind_deduction(&self, temperature: f64) -> f64 {
        let p = self.params;
        let wind = p.headwind;
        let tora = p.adjusted_tora;
        let segments = self.coefficients.wind.for_wind(wind);

        let at_tref = 1000.0 * wind * segments.below_tref.at(tora);
        let deduction = if temperature <= p.tref {
            at_tref
        } else if temperature <= p.tmax {
            at_tref + 1000.0 * wind * segments.above_tref.at(tora) * (temperature - p.tref)
        } else {
            at_tref
                + 1000.0 * wind * segments.above_tref.at(tora) * (p.tmax - p.tref)
                + 1000.0 * wind * segments.above_tmax.at(tora) * (temperature - p.tmax)
        };

        if deduction * wind > 0.0 {
            log_trace!("Wind deduction {} discarded for wind {}", deduction, wind);
            0.0
        } else {
            deduction
        }
    }
}
