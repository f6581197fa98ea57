//! Contaminated Runway Example
//!
//! Compares the same takeoff on a dry, a wet and each contaminated runway,
//! together with the crosswind limit for that surface.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 03_contaminated_runway
//! ```

use flexperf_core::{Contamination, RunwayCondition, TakeoffPerformanceCalculator, TakeoffPerformanceInputs};

fn main() {
    println!("FlexPerf Contaminated Runway Example");
    println!("====================================\n");

    let calculator = TakeoffPerformanceCalculator::default();
    let base = TakeoffPerformanceInputs {
        tow: 62_000.0,
        tora: 2_800.0,
        oat: -4.0,
        ..TakeoffPerformanceInputs::default()
    };

    let conditions = [RunwayCondition::Dry, RunwayCondition::Wet]
        .into_iter()
        .chain(Contamination::ALL.into_iter().map(RunwayCondition::Contaminated));

    println!("{:<32} {:>9} {:>6}  {:<40}", "Runway", "MTOW", "XWIND", "Result");
    for runway_condition in conditions {
        let inputs = TakeoffPerformanceInputs { runway_condition, ..base };
        let result = calculator.calculate(&inputs);
        let mtow = result.mtow.map_or_else(|| "-".to_string(), |m| format!("{m:.0}"));
        let crosswind = calculator.crosswind_limit(runway_condition, inputs.oat);
        println!(
            "{:<32} {:>9} {:>6.0}  {}",
            runway_condition.description(),
            mtow,
            crosswind,
            result.summary()
        );
    }
}
