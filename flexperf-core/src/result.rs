//! Result record
//!
//! A result is produced fresh by every calculation. It always carries the
//! inputs and derived parameters; the later fields are filled in as the
//! pipeline gets to them, so a result that stopped early (for example
//! `TooHeavy`) still shows the MTOW that was exceeded.
//!
//! Only a result whose `error` is `None` may be shown to the crew.

use core::fmt::{self, Write};

use crate::configuration::Configuration;
use crate::errors::TakeoffPerformanceError;
use crate::flex::FlexTemperature;
use crate::inputs::TakeoffPerformanceInputs;
use crate::limits::{LimitWeight, LimitingFactors, PerFactor};
use crate::mtow::WetConditions;
use crate::params::TakeoffPerformanceParameters;
use crate::speeds::RawSpeeds;

/// Capacity of [`TakeoffPerformanceResult::summary`]
pub const SUMMARY_CAPACITY: usize = 96;

/// Final takeoff speeds (kt)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VSpeeds {
    /// Decision speed
    pub v1: u16,
    /// Rotation speed
    pub vr: u16,
    /// Takeoff safety speed
    pub v2: u16,
}

impl fmt::Display for VSpeeds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "V1 {} VR {} V2 {}", self.v1, self.vr, self.v2)
    }
}

/// Outcome of one takeoff calculation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TakeoffPerformanceResult {
    /// Inputs as supplied
    pub inputs: TakeoffPerformanceInputs,
    /// Derived working parameters
    pub params: TakeoffPerformanceParameters,
    /// Parsed configuration, `None` for an invalid selector
    pub configuration: Option<Configuration>,
    /// First limitation met, `None` on success
    pub error: Option<TakeoffPerformanceError>,
    /// Ceilings of every factor at the reference temperatures
    pub limits: Option<PerFactor<LimitWeight>>,
    /// Governing factor at each reference temperature
    pub limiting_factors: Option<LimitingFactors>,
    /// Dry runway MTOW (kg)
    pub dry_mtow: Option<f64>,
    /// MTOW for the runway condition and CG (kg)
    pub mtow: Option<f64>,
    /// Flex temperature, `None` for full thrust
    pub flex: Option<FlexTemperature>,
    /// Final speeds
    pub speeds: Option<VSpeeds>,
    /// Speeds before rounding and floors
    pub raw_speeds: Option<RawSpeeds>,
    /// Dry runway regression speeds, before any wet correction
    pub dry_speeds: Option<RawSpeeds>,
    /// Wet runway regime
    pub wet: Option<WetConditions>,
    /// Stabilizer takeoff trim (degrees, positive nose up), when a CG was given
    pub stabilizer_trim: Option<f64>,
    /// Speeds were taken from the maximum thrust tailwind cross-check
    pub max_thrust_speeds_applied: bool,
}

impl TakeoffPerformanceResult {
    /// Empty result for `inputs`, nothing computed yet
    pub fn new(inputs: TakeoffPerformanceInputs, params: TakeoffPerformanceParameters) -> Self {
        Self {
            inputs,
            params,
            configuration: None,
            error: None,
            limits: None,
            limiting_factors: None,
            dry_mtow: None,
            mtow: None,
            flex: None,
            speeds: None,
            raw_speeds: None,
            dry_speeds: None,
            wet: None,
            stabilizer_trim: None,
            max_thrust_speeds_applied: false,
        }
    }

    /// Whether the result may be used
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Flex temperature (°C), `None` for full thrust
    pub fn flex_temperature(&self) -> Option<i32> {
        self.flex.map(|flex| flex.temperature)
    }

    /// T-VMCG (°C), wet runways only
    pub fn t_vmcg(&self) -> Option<f64> {
        self.wet.map(|wet| wet.t_vmcg)
    }

    /// One line summary for display, e.g. `CONF 2 MTOW 83000 FLEX 69 V1 132 VR 136 V2 140`
    ///
    /// Lines that do not fit are cut at [`SUMMARY_CAPACITY`].
    pub fn summary(&self) -> heapless::String<SUMMARY_CAPACITY> {
        let mut line = heapless::String::new();
        // A full buffer only truncates the line
        let _ = self.write_summary(&mut line);
        line
    }

    fn write_summary(&self, out: &mut impl Write) -> fmt::Result {
        match self.configuration {
            Some(conf) => write!(out, "CONF {conf}")?,
            None => out.write_str("CONF -")?,
        }
        if let Some(error) = self.error {
            return write!(out, " {error}");
        }
        if let Some(mtow) = self.mtow {
            write!(out, " MTOW {}", libm::floor(mtow) as i64)?;
        }
        match self.flex {
            Some(flex) => write!(out, " FLEX {}", flex.temperature)?,
            None => out.write_str(" TOGA")?,
        }
        if let Some(speeds) = self.speeds {
            write!(out, " {speeds}")?;
        }
        Ok(())
    }
}
