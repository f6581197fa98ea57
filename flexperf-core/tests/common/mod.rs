//! Common test utilities for the integration tests
//!
//! This module provides:
//! - An input builder for takeoff scenarios
//! - Reference scenarios with their expected chart results
//! - Assertion helpers for results

#![allow(dead_code)]

use flexperf_core::{
    AntiIce, Contamination, LineupAngle, RunwayCondition, TakeoffPerformanceCalculator,
    TakeoffPerformanceInputs, TakeoffPerformanceResult, VSpeeds,
};

pub mod harness;
pub mod scenarios;

/// Builder over the nominal inputs: CONF 2, 65 t, 3000 m, sea level, ISA, calm
#[derive(Debug, Clone, Copy)]
pub struct InputsBuilder {
    inputs: TakeoffPerformanceInputs,
}

impl Default for InputsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InputsBuilder {
    pub fn new() -> Self {
        Self {
            inputs: TakeoffPerformanceInputs::default(),
        }
    }

    pub fn tow(mut self, tow: f64) -> Self {
        self.inputs.tow = tow;
        self
    }

    pub fn conf(mut self, conf: u8) -> Self {
        self.inputs.conf = conf;
        self
    }

    pub fn tora(mut self, tora: f64) -> Self {
        self.inputs.tora = tora;
        self
    }

    pub fn slope(mut self, slope: f64) -> Self {
        self.inputs.slope = slope;
        self
    }

    pub fn lineup(mut self, angle: LineupAngle) -> Self {
        self.inputs.lineup_angle = angle;
        self
    }

    pub fn wind(mut self, wind: f64) -> Self {
        self.inputs.wind = wind;
        self
    }

    pub fn elevation(mut self, elevation: f64) -> Self {
        self.inputs.elevation = elevation;
        self
    }

    pub fn qnh(mut self, qnh: f64) -> Self {
        self.inputs.qnh = qnh;
        self
    }

    pub fn oat(mut self, oat: f64) -> Self {
        self.inputs.oat = oat;
        self
    }

    pub fn cg(mut self, cg: f64) -> Self {
        self.inputs.cg = Some(cg);
        self
    }

    pub fn forward_cg(mut self) -> Self {
        self.inputs.forward_cg = true;
        self
    }

    pub fn anti_ice(mut self, anti_ice: AntiIce) -> Self {
        self.inputs.anti_ice = anti_ice;
        self
    }

    pub fn packs(mut self) -> Self {
        self.inputs.packs = true;
        self
    }

    pub fn max_thrust(mut self) -> Self {
        self.inputs.force_max_thrust = true;
        self
    }

    pub fn wet(mut self) -> Self {
        self.inputs.runway_condition = RunwayCondition::Wet;
        self
    }

    pub fn contaminated(mut self, contamination: Contamination) -> Self {
        self.inputs.runway_condition = RunwayCondition::Contaminated(contamination);
        self
    }

    pub fn build(self) -> TakeoffPerformanceInputs {
        self.inputs
    }

    /// Run the inputs through a default calculator
    pub fn calculate(self) -> TakeoffPerformanceResult {
        TakeoffPerformanceCalculator::default().calculate(&self.inputs)
    }
}

/// Speeds as a tuple for compact assertions
pub fn speeds(result: &TakeoffPerformanceResult) -> Option<(u16, u16, u16)> {
    result.speeds.map(|VSpeeds { v1, vr, v2 }| (v1, vr, v2))
}

/// Panic with the full result when it is not a success
pub fn assert_success(result: &TakeoffPerformanceResult) {
    assert!(
        result.is_success(),
        "expected success, got {:?} ({})",
        result.error,
        result.summary()
    );
}
