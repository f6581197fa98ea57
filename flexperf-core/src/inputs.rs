//! Takeoff input record
//!
//! Units are fixed throughout the engine: kilograms, metres for runway
//! distances, feet for elevation, hPa for QNH, degrees Celsius, knots.

use crate::constants::aircraft::{LINEUP_DISTANCE_180_M, LINEUP_DISTANCE_90_M};

/// Engine/wing anti-ice selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AntiIce {
    /// No anti-ice
    #[default]
    Off,
    /// Engine anti-ice only
    Engine,
    /// Engine and wing anti-ice
    EngineWing,
}

impl AntiIce {
    /// Wing anti-ice bleeds air from the engines
    pub const fn wing(self) -> bool {
        matches!(self, Self::EngineWing)
    }
}

/// Angle of the turn onto the runway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineupAngle {
    /// Entry at the runway threshold, no turn
    #[default]
    Zero,
    /// 90 degree turn from a taxiway
    Ninety,
    /// 180 degree turnaround on the runway
    OneEighty,
}

impl LineupAngle {
    /// Runway distance used up by the line-up turn (m)
    pub const fn distance_m(self) -> f64 {
        match self {
            Self::Zero => 0.0,
            Self::Ninety => LINEUP_DISTANCE_90_M,
            Self::OneEighty => LINEUP_DISTANCE_180_M,
        }
    }
}

/// Runway contaminant type and depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Contamination {
    /// Up to 6.3 mm (1/4 in) standing water
    Water6mm,
    /// Up to 12.7 mm (1/2 in) standing water
    Water13mm,
    /// Up to 6.3 mm (1/4 in) slush
    Slush6mm,
    /// Up to 12.7 mm (1/2 in) slush
    Slush13mm,
    /// Compacted snow
    CompactedSnow,
    /// Up to 10 mm dry snow
    DrySnow10mm,
    /// Up to 100 mm dry snow
    DrySnow100mm,
    /// Up to 5 mm wet snow
    WetSnow5mm,
    /// Up to 15 mm wet snow
    WetSnow15mm,
}

impl Contamination {
    /// All contamination states covered by the performance data
    pub const ALL: [Contamination; 9] = [
        Self::Water6mm,
        Self::Water13mm,
        Self::Slush6mm,
        Self::Slush13mm,
        Self::CompactedSnow,
        Self::DrySnow10mm,
        Self::DrySnow100mm,
        Self::WetSnow5mm,
        Self::WetSnow15mm,
    ];
}

/// Runway surface state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunwayCondition {
    /// Dry runway
    #[default]
    Dry,
    /// Wet runway, up to 3 mm of water
    Wet,
    /// Contaminated runway
    Contaminated(Contamination),
}

impl RunwayCondition {
    /// Contaminant, if the runway is contaminated
    pub const fn contamination(self) -> Option<Contamination> {
        match self {
            Self::Contaminated(contamination) => Some(contamination),
            _ => None,
        }
    }

    /// Whether the runway is contaminated
    pub const fn is_contaminated(self) -> bool {
        matches!(self, Self::Contaminated(_))
    }
}

/// Everything the caller supplies for one calculation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TakeoffPerformanceInputs {
    /// Takeoff weight (kg)
    pub tow: f64,
    /// CG is forward of the reference CG
    pub forward_cg: bool,
    /// CG (%MAC), when known
    pub cg: Option<f64>,
    /// Configuration selector as entered (1, 2 or 3)
    pub conf: u8,
    /// Takeoff run available (m)
    pub tora: f64,
    /// Runway slope (%), positive uphill
    pub slope: f64,
    /// Line-up turn
    pub lineup_angle: LineupAngle,
    /// Wind component along the runway (kt), positive headwind
    pub wind: f64,
    /// Field elevation (ft)
    pub elevation: f64,
    /// Altimeter setting (hPa)
    pub qnh: f64,
    /// Outside air temperature (°C)
    pub oat: f64,
    /// Anti-ice selection
    pub anti_ice: AntiIce,
    /// Air conditioning packs on for takeoff
    pub packs: bool,
    /// Crew requests maximum (TOGA) thrust
    ///
    /// The takeoff is always at full thrust and never gets a flex
    /// temperature, whether or not the 15 kt tailwind speed check succeeds.
    pub force_max_thrust: bool,
    /// Runway surface state
    pub runway_condition: RunwayCondition,
}

impl Default for TakeoffPerformanceInputs {
    fn default() -> Self {
        Self {
            tow: 65_000.0,
            forward_cg: false,
            cg: None,
            conf: 2,
            tora: 3_000.0,
            slope: 0.0,
            lineup_angle: LineupAngle::Zero,
            wind: 0.0,
            elevation: 0.0,
            qnh: 1013.25,
            oat: 15.0,
            anti_ice: AntiIce::Off,
            packs: false,
            force_max_thrust: false,
            runway_condition: RunwayCondition::Dry,
        }
    }
}

impl TakeoffPerformanceInputs {
    /// Same inputs with another configuration selector
    pub fn with_conf(mut self, conf: u8) -> Self {
        self.conf = conf;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lineup_distances() {
        assert_eq!(LineupAngle::Zero.distance_m(), 0.0);
        assert!(LineupAngle::Ninety.distance_m() > 0.0);
        assert!(LineupAngle::OneEighty.distance_m() > LineupAngle::Ninety.distance_m());
    }

    #[test]
    fn contamination_dispatch() {
        assert_eq!(RunwayCondition::Dry.contamination(), None);
        assert_eq!(RunwayCondition::Wet.contamination(), None);
        assert_eq!(
            RunwayCondition::Contaminated(Contamination::Slush6mm).contamination(),
            Some(Contamination::Slush6mm)
        );
        assert!(RunwayCondition::Contaminated(Contamination::CompactedSnow).is_contaminated());
    }

    #[test]
    fn wing_anti_ice() {
        assert!(!AntiIce::Off.wing());
        assert!(!AntiIce::Engine.wing());
        assert!(AntiIce::EngineWing.wing());
    }

    #[test]
    fn with_conf_keeps_other_fields() {
        let inputs = TakeoffPerformanceInputs { tow: 70_000.0, ..Default::default() };
        let conf3 = inputs.with_conf(3);
        assert_eq!(conf3.conf, 3);
        assert_eq!(conf3.tow, 70_000.0);
    }
}
