//! Basic Takeoff Calculation Example
//!
//! Computes MTOW, flex temperature and V-speeds for one takeoff on a dry
//! runway, then shows how each input change moves the result.
//!
//! ## What You'll Learn
//!
//! - Filling in the takeoff inputs
//! - Reading the result and its limiting factors
//! - Handling a calculation that ends in a limitation
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_basic_takeoff
//! ```

use flexperf_core::{
    AntiIce, LineupAngle, TakeoffPerformanceCalculator, TakeoffPerformanceInputs, TakeoffPerformanceResult,
};

fn print_result(label: &str, result: &TakeoffPerformanceResult) {
    println!("{label}");
    println!("  {}", result.summary());
    if let Some(error) = result.error {
        println!("  Limitation: {error}");
        return;
    }
    if let Some(factors) = result.limiting_factors {
        println!("  Limiting at OAT: {:?}, at Tref: {:?}", factors.oat, factors.tref);
    }
    match result.flex {
        Some(flex) => println!("  Flex {} °C, limited by {:?}", flex.temperature, flex.limiting_factor),
        None => println!("  Full thrust"),
    }
    println!();
}

fn main() {
    println!("FlexPerf Basic Takeoff Example");
    println!("==============================\n");

    let calculator = TakeoffPerformanceCalculator::default();

    // 68 t, CONF 2, 3000 m at sea level, ISA, calm
    let inputs = TakeoffPerformanceInputs {
        tow: 68_000.0,
        conf: 2,
        tora: 3_000.0,
        elevation: 0.0,
        qnh: 1013.25,
        oat: 15.0,
        ..TakeoffPerformanceInputs::default()
    };
    print_result("Nominal:", &calculator.calculate(&inputs));

    let params = calculator.calculate(&inputs).params;
    println!(
        "Derived: PA {:.0} ft, Tref {:.1} °C, Tmax {:.1} °C, Tflexmax {:.1} °C\n",
        params.pressure_alt, params.tref, params.tmax, params.tflexmax
    );

    let tailwind = TakeoffPerformanceInputs { wind: -10.0, ..inputs };
    print_result("10 kt tailwind:", &calculator.calculate(&tailwind));

    let icing = TakeoffPerformanceInputs {
        anti_ice: AntiIce::EngineWing,
        packs: true,
        oat: 2.0,
        ..inputs
    };
    print_result("Engine and wing anti-ice, packs on:", &calculator.calculate(&icing));

    let intersection = TakeoffPerformanceInputs {
        tora: 2_200.0,
        lineup_angle: LineupAngle::Ninety,
        ..inputs
    };
    print_result("Intersection departure, 2200 m:", &calculator.calculate(&intersection));

    let short = TakeoffPerformanceInputs { tora: 1_600.0, ..inputs };
    print_result("1600 m runway:", &calculator.calculate(&short));
}
