//! Optimal Configuration Example
//!
//! Evaluates a takeoff in every flap configuration and lets the optimizer
//! pick the one with the most thrust reduction.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_optimal_configuration
//! ```

use flexperf_core::{Configuration, TakeoffPerformanceCalculator, TakeoffPerformanceInputs};

fn main() {
    println!("FlexPerf Optimal Configuration Example");
    println!("======================================\n");

    let calculator = TakeoffPerformanceCalculator::default();
    let inputs = TakeoffPerformanceInputs {
        tow: 72_000.0,
        tora: 2_500.0,
        elevation: 1_200.0,
        qnh: 1008.0,
        oat: 22.0,
        wind: 5.0,
        ..TakeoffPerformanceInputs::default()
    };

    println!("Per configuration:");
    for conf in Configuration::ALL {
        let result = calculator.calculate(&inputs.with_conf(conf.number()));
        println!("  {}", result.summary());
    }

    let best = calculator.calculate_optimal_configuration(&inputs);
    println!("\nSelected:");
    println!("  {}", best.summary());

    // No configuration can lift this weight off a 1200 m runway
    let impossible = TakeoffPerformanceInputs { tora: 1_200.0, ..inputs };
    let fallback = calculator.calculate_optimal_configuration(&impossible);
    println!("\nShort runway fallback:");
    println!("  {}", fallback.summary());
}
