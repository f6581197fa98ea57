//! Takeoff performance engine for FlexPerf
//!
//! Reproduces the flight manual takeoff charts of a single airframe/engine
//! combination: maximum takeoff weight, flex (reduced thrust) temperature and
//! the V1/VR/V2 speeds for a runway, weather and aircraft state.
//!
//! Key constraints:
//! - Pure function of its inputs; the coefficient tables are compiled in
//! - No heap allocation, `no_std` capable (floating point via `libm`)
//! - Expected failures are reported on the result, never panicked
//!
//! ```
//! use flexperf_core::{TakeoffPerformanceCalculator, TakeoffPerformanceInputs};
//!
//! let calculator = TakeoffPerformanceCalculator::default();
//! let inputs = TakeoffPerformanceInputs {
//!     tow: 65_000.0,
//!     tora: 3_000.0,
//!     oat: 15.0,
//!     ..TakeoffPerformanceInputs::default()
//! };
//!
//! let result = calculator.calculate(&inputs);
//! match result.error {
//!     None => {}      // MTOW, flex and speeds are valid
//!     Some(_e) => {}  // Show the limitation to the crew
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod calculator;
pub mod configuration;
pub mod constants;
pub mod contamination;
pub mod errors;
pub mod flex;
pub mod inputs;
pub mod limits;
pub mod lookup;
pub mod mtow;
pub mod optimizer;
pub mod params;
pub mod result;
pub mod speeds;
pub mod tables;
pub mod validators;

// Public API
pub use calculator::TakeoffPerformanceCalculator;
pub use configuration::{ByConfiguration, Configuration};
pub use errors::{TakeoffPerformanceError, ValidationResult};
pub use inputs::{AntiIce, Contamination, LineupAngle, RunwayCondition, TakeoffPerformanceInputs};
pub use limits::{LimitWeight, LimitingFactor, PerFactor};
pub use params::TakeoffPerformanceParameters;
pub use result::{TakeoffPerformanceResult, VSpeeds};
pub use validators::PerformanceLimits;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
