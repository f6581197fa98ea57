//! Reference takeoffs with the results read from the charts
//!
//! Every scenario starts from the nominal inputs of
//! [`InputsBuilder::new`](super::InputsBuilder::new) and changes one or two
//! quantities.

use flexperf_core::{AntiIce, Contamination, LineupAngle, TakeoffPerformanceError, TakeoffPerformanceInputs};

use super::InputsBuilder;

/// Chart results of a scenario
#[derive(Debug, Clone, Copy)]
pub struct Expected {
    pub error: Option<TakeoffPerformanceError>,
    pub mtow: Option<f64>,
    pub flex: Option<i32>,
    pub speeds: Option<(u16, u16, u16)>,
}

impl Expected {
    const fn success(mtow: f64, flex: Option<i32>, speeds: (u16, u16, u16)) -> Self {
        Self {
            error: None,
            mtow: Some(mtow),
            flex,
            speeds: Some(speeds),
        }
    }
}

/// Named inputs and the results they must produce
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub name: &'static str,
    pub inputs: TakeoffPerformanceInputs,
    pub expected: Expected,
}

fn scenario(name: &'static str, inputs: InputsBuilder, expected: Expected) -> Scenario {
    Scenario {
        name,
        inputs: inputs.build(),
        expected,
    }
}

/// Successful takeoffs on dry, wet and contaminated runways
pub fn successful() -> Vec<Scenario> {
    vec![
        scenario("nominal", InputsBuilder::new(), Expected::success(83_000.0, Some(69), (135, 136, 140))),
        scenario("conf 1+F", InputsBuilder::new().conf(1), Expected::success(80_000.0, Some(65), (133, 139, 143))),
        scenario("conf 3", InputsBuilder::new().conf(3), Expected::success(81_350.0, Some(65), (132, 133, 137))),
        scenario("wet", InputsBuilder::new().wet(), Expected::success(80_100.0, Some(65), (127, 134, 138))),
        scenario(
            "wet above T-VMCG",
            InputsBuilder::new().wet().oat(40.0),
            Expected::success(79_000.0, Some(63), (130, 136, 140)),
        ),
        scenario("tailwind", InputsBuilder::new().wind(-10.0), Expected::success(77_400.0, Some(62), (126, 135, 139))),
        scenario("headwind", InputsBuilder::new().wind(20.0), Expected::success(84_200.0, Some(69), (137, 137, 141))),
        scenario(
            "anti-ice and packs",
            InputsBuilder::new().anti_ice(AntiIce::EngineWing).packs(),
            Expected::success(79_900.0, Some(61), (135, 136, 140)),
        ),
        scenario(
            "forward CG",
            InputsBuilder::new().forward_cg().tow(79_000.0).tora(2_800.0),
            Expected::success(80_593.0, Some(45), (144, 149, 153)),
        ),
        scenario(
            "high field",
            InputsBuilder::new().elevation(8_000.0),
            Expected::success(70_560.0, Some(36), (140, 144, 147)),
        ),
        scenario(
            "hot day",
            InputsBuilder::new().oat(45.0).tow(72_000.0),
            Expected::success(83_000.0, Some(60), (137, 143, 146)),
        ),
        scenario(
            "180 degree line-up",
            InputsBuilder::new().lineup(LineupAngle::OneEighty),
            Expected::success(82_672.0, Some(69), (135, 136, 140)),
        ),
        scenario("uphill", InputsBuilder::new().slope(1.5), Expected::success(81_650.0, Some(68), (131, 136, 140))),
        scenario("maximum thrust", InputsBuilder::new().max_thrust(), Expected::success(83_000.0, None, (124, 134, 139))),
        scenario(
            "6 mm water",
            InputsBuilder::new().contaminated(Contamination::Water6mm),
            Expected::success(79_150.0, None, (121, 134, 140)),
        ),
        scenario(
            "cold compacted snow",
            InputsBuilder::new().contaminated(Contamination::CompactedSnow).oat(-20.0),
            Expected::success(77_750.0, None, (125, 134, 140)),
        ),
        scenario(
            "13 mm slush",
            InputsBuilder::new().contaminated(Contamination::Slush13mm),
            Expected::success(75_652.5, None, (117, 134, 140)),
        ),
        scenario(
            "100 mm dry snow",
            InputsBuilder::new().contaminated(Contamination::DrySnow100mm).tow(60_000.0),
            Expected::success(74_836.0, None, (114, 129, 135)),
        ),
    ]
}

/// Takeoffs rejected before or during the calculation
pub fn rejected() -> Vec<(&'static str, TakeoffPerformanceInputs, TakeoffPerformanceError)> {
    use TakeoffPerformanceError::*;

    vec![
        ("selector", InputsBuilder::new().conf(4).build(), InvalidData),
        ("structural", InputsBuilder::new().tow(79_001.0).build(), StructuralMtow),
        ("altitude", InputsBuilder::new().elevation(9_500.0).build(), MaximumPressureAlt),
        ("temperature", InputsBuilder::new().oat(56.0).build(), MaximumTemperature),
        ("empty weight", InputsBuilder::new().tow(43_000.0).build(), OperatingEmptyWeight),
        ("cg", InputsBuilder::new().cg(10.0).build(), CgOutOfLimits),
        ("tailwind", InputsBuilder::new().wind(-16.0).build(), MaximumTailwind),
        ("slope", InputsBuilder::new().slope(2.5).build(), MaximumRunwaySlope),
        (
            "contaminated short runway",
            InputsBuilder::new().contaminated(Contamination::Water6mm).tora(1_500.0).tow(50_000.0).build(),
            TooLight,
        ),
        ("short runway", InputsBuilder::new().tow(70_000.0).tora(1_800.0).build(), TooHeavy),
    ]
}
