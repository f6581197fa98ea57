//! V-Speed Calculation
//!
//! ## Pipeline
//!
//! ```text
//! ┌────────────┐   ┌──────────────┐   ┌──────────────┐
//! │ Regression │──▶│ Wet deltas   │──▶│ Floors and   │──▶ VSpeeds
//! │ (dry, kt)  │   │ (wet only)   │   │ ordering     │
//! └────────────┘   └──────────────┘   └──────────────┘
//! ```
//!
//! Contaminated runways skip the first two stages: their speeds are read
//! from the contaminant's chart at the takeoff weight.
//!
//! The regression family follows the factor that governs the takeoff: the
//! flex factor when a flex temperature is used, the OAT factor otherwise.

pub mod reconcile;
pub mod regression;
pub mod wet;

pub use reconcile::{reconcile, SpeedFloors};
pub use regression::dry_speeds;
pub use wet::wet_speed_deltas;

use core::ops::Add;

/// Unrounded V1, VR and V2 (kt)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawSpeeds {
    /// Decision speed
    pub v1: f64,
    /// Rotation speed
    pub vr: f64,
    /// Takeoff safety speed
    pub v2: f64,
}

impl From<[f64; 3]> for RawSpeeds {
    fn from([v1, vr, v2]: [f64; 3]) -> Self {
        Self { v1, vr, v2 }
    }
}

impl Add for RawSpeeds {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            v1: self.v1 + rhs.v1,
            vr: self.vr + rhs.vr,
            v2: self.v2 + rhs.v2,
        }
    }
}
