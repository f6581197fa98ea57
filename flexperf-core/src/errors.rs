//! Error Types for Takeoff Performance Calculations
//!
//! ## Design Philosophy
//!
//! Every expected failure of a calculation is a value, not a panic:
//!
//! 1. **One code per result**: A result carries at most one error. `None`
//!    means every field of the result is meaningful.
//!
//! 2. **Copy Semantics**: Errors are plain tags so results stay `Copy`-cheap
//!    to compare and store, and the enum is usable without an allocator.
//!
//! 3. **Partial results**: Once an error is set the dependent fields (MTOW,
//!    flex, speeds) must not be shown to the crew, even if populated.
//!
//! ## Error Categories
//!
//! ### Input Preconditions
//! Checked before any table is read, in this order:
//! - `InvalidData`: configuration selector is not 1, 2 or 3
//! - `StructuralMtow`: takeoff weight above the structural limit
//! - `MaximumPressureAlt`: field above the certified pressure altitude
//! - `MaximumTemperature`: OAT above the maximum takeoff temperature
//! - `OperatingEmptyWeight`: takeoff weight below the empty aircraft
//! - `CgOutOfLimits`: CG outside the weight dependent envelope
//! - `MaximumTailwind`: tailwind above the certified limit
//! - `MaximumRunwaySlope`: slope magnitude above 2 %
//!
//! ### Performance Limitations
//! - `TooLight`: below the lowest weight covered by a contamination chart
//! - `TooHeavy`: takeoff weight above the resolved MTOW
//!
//! ### Speed Limitations
//! - `VmcgVmcaLimits`: speed ordering forced a speed below a control floor
//! - `MaximumTireSpeed`: V2 above the tire speed
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use flexperf_core::{TakeoffPerformanceCalculator, TakeoffPerformanceError, TakeoffPerformanceInputs};
//!
//! let result = TakeoffPerformanceCalculator::default().calculate(&TakeoffPerformanceInputs::default());
//! match result.error {
//!     None => {
//!         // show MTOW, flex and speeds
//!     }
//!     Some(TakeoffPerformanceError::TooHeavy) => {
//!         // offer a higher flap configuration or a longer runway
//!     }
//!     Some(e) => {
//!         // display the limitation
//!         let _ = e;
//!     }
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for precondition checks
pub type ValidationResult<T> = Result<T, TakeoffPerformanceError>;

/// Takeoff performance errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TakeoffPerformanceError {
    /// Configuration selector is not a certified flap setting
    #[error("Invalid configuration")]
    InvalidData,

    /// Takeoff weight exceeds the structural maximum
    #[error("Takeoff weight above structural MTOW")]
    StructuralMtow,

    /// Pressure altitude exceeds the certified maximum
    #[error("Pressure altitude above certified maximum")]
    MaximumPressureAlt,

    /// Outside air temperature exceeds the maximum takeoff temperature
    #[error("OAT above maximum takeoff temperature")]
    MaximumTemperature,

    /// Takeoff weight below operating empty weight
    #[error("Takeoff weight below operating empty weight")]
    OperatingEmptyWeight,

    /// CG outside the takeoff envelope for this weight
    #[error("CG out of limits")]
    CgOutOfLimits,

    /// Tailwind component exceeds the certified maximum
    #[error("Tailwind above certified maximum")]
    MaximumTailwind,

    /// Runway slope magnitude exceeds 2 %
    #[error("Runway slope beyond limits")]
    MaximumRunwaySlope,

    /// Below the lowest weight of the contaminated runway charts
    #[error("Too light for contaminated runway data")]
    TooLight,

    /// Takeoff weight exceeds the maximum takeoff weight
    #[error("Takeoff weight above MTOW")]
    TooHeavy,

    /// Speeds cannot satisfy both ordering and VMCG/VMCA floors
    #[error("VMCG/VMCA limits")]
    VmcgVmcaLimits,

    /// V2 exceeds the maximum tire speed
    #[error("Maximum tire speed exceeded")]
    MaximumTireSpeed,
}

impl TakeoffPerformanceError {
    /// Whether the error was raised before any performance data was read
    pub const fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::InvalidData
                | Self::StructuralMtow
                | Self::MaximumPressureAlt
                | Self::MaximumTemperature
                | Self::OperatingEmptyWeight
                | Self::CgOutOfLimits
                | Self::MaximumTailwind
                | Self::MaximumRunwaySlope
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TakeoffPerformanceError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidData => defmt::write!(fmt, "Invalid configuration"),
            Self::StructuralMtow => defmt::write!(fmt, "Above structural MTOW"),
            Self::MaximumPressureAlt => defmt::write!(fmt, "Above max pressure altitude"),
            Self::MaximumTemperature => defmt::write!(fmt, "Above max temperature"),
            Self::OperatingEmptyWeight => defmt::write!(fmt, "Below OEW"),
            Self::CgOutOfLimits => defmt::write!(fmt, "CG out of limits"),
            Self::MaximumTailwind => defmt::write!(fmt, "Above max tailwind"),
            Self::MaximumRunwaySlope => defmt::write!(fmt, "Runway slope beyond limits"),
            Self::TooLight => defmt::write!(fmt, "Too light"),
            Self::TooHeavy => defmt::write!(fmt, "Too heavy"),
            Self::VmcgVmcaLimits => defmt::write!(fmt, "VMCG/VMCA limits"),
            Self::MaximumTireSpeed => defmt::write!(fmt, "Max tire speed"),
        }
    }
}
