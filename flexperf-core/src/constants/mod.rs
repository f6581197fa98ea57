//! Constants for FlexPerf Core
//!
//! Named values for the airframe limits, the standard atmosphere and the
//! speed limits used by the takeoff calculation. Coefficient data for the
//! performance charts lives in [`crate::tables`]; this module only holds
//! single values with a physical or regulatory meaning.
//!
//! ## Organization
//!
//! - **Aircraft**: structural and certified operating limits
//! - **Atmosphere**: ISA model and pressure altitude constants
//! - **Speeds**: tire speed and speed adjustment constants

/// Structural and certified operating limits of the airframe.
pub mod aircraft;

/// International Standard Atmosphere constants.
pub mod atmosphere;

/// Speed limits and adjustments.
pub mod speeds;

pub use aircraft::{
    MAX_HEADWIND_KT, MAX_PRESSURE_ALT_FT, MAX_RUNWAY_SLOPE_PCT, MAX_TAILWIND_KT,
    OPERATING_EMPTY_WEIGHT_KG, STRUCTURAL_MTOW_KG,
};

pub use atmosphere::{ISA_SEA_LEVEL_TEMP_C, STANDARD_QNH_HPA};

pub use speeds::MAX_TIRE_SPEED_KT;
