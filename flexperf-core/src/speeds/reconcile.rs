//! Speed floors and ordering
//!
//! Raw speeds are rounded up to whole knots and raised to their control
//! floors:
//!
//! | Speed | Floor                      |
//! |-------|----------------------------|
//! | V1    | VMCG (V1)                  |
//! | VR    | VMCG (VR)                  |
//! | V2    | max(VMCA, VMU at weight)   |
//!
//! The ordering `V1 <= VR <= V2` is then restored by pulling the lower speed
//! down, never by pushing the higher one up. A speed pulled below its floor
//! is flagged `VmcgVmcaLimits`. V2 above the tire speed is flagged
//! `MaximumTireSpeed`; otherwise VR may not exceed `2 x tire speed - V2`.
//! Only the first flag raised is reported.

use super::RawSpeeds;
use crate::configuration::Configuration;
use crate::constants::speeds::MAX_TIRE_SPEED_KT;
use crate::errors::TakeoffPerformanceError;
use crate::result::VSpeeds;
use crate::tables::minimum_speeds::{VMCA_V2, VMCG_V1, VMCG_VR, VMU_V2};

/// Control floors of each speed, whole knots
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeedFloors {
    /// VMCG floor of V1 (kt)
    pub v1: f64,
    /// VMCG floor of VR (kt)
    pub vr: f64,
    /// VMCA/VMU floor of V2 (kt)
    pub v2: f64,
}

impl SpeedFloors {
    /// Floors at `pressure_alt` (ft) and `tow` (kg)
    pub fn new(conf: Configuration, pressure_alt: f64, tow: f64) -> Self {
        let [vmu] = VMU_V2.get(conf).get(pressure_alt, tow);
        let vmca = VMCA_V2.get(conf).get(pressure_alt);
        Self {
            v1: libm::ceil(VMCG_V1.get(pressure_alt)),
            vr: libm::ceil(VMCG_VR.get(pressure_alt)),
            v2: libm::ceil(vmca.max(vmu)),
        }
    }
}

/// Keeps the first flag raised
struct Flag(Option<TakeoffPerformanceError>);

impl Flag {
    fn raise(&mut self, error: TakeoffPerformanceError) {
        if self.0.is_none() {
            self.0 = Some(error);
        }
    }

    fn below_floor(&mut self, speed: f64, floor: f64) {
        if speed < floor {
            self.raise(TakeoffPerformanceError::VmcgVmcaLimits);
        }
    }
}

/// Final speeds from `raw`, with the first limitation met on the way
///
/// The speeds are returned even when flagged, so the caller can show what
/// was attempted.
pub fn reconcile(raw: &RawSpeeds, floors: &SpeedFloors) -> (VSpeeds, Option<TakeoffPerformanceError>) {
    let mut flag = Flag(None);

    let mut v1 = libm::ceil(raw.v1).max(floors.v1);
    let mut vr = libm::ceil(raw.vr).max(floors.vr);
    let v2 = libm::ceil(raw.v2).max(floors.v2);

    if vr > v2 {
        vr = v2;
        flag.below_floor(vr, floors.vr);
    }

    if v2 > MAX_TIRE_SPEED_KT {
        flag.raise(TakeoffPerformanceError::MaximumTireSpeed);
    } else {
        let vr_max = 2.0 * MAX_TIRE_SPEED_KT - v2;
        if vr > vr_max {
            vr = vr_max;
            flag.below_floor(vr, floors.vr);
        }
    }

    if v1 > vr {
        v1 = vr;
        flag.below_floor(v1, floors.v1);
    }

    let speeds = VSpeeds {
        v1: v1 as u16,
        vr: vr as u16,
        v2: v2 as u16,
    };
    if flag.0.is_some() {
        log_debug!("Speeds {} flagged: {:?}", speeds, flag.0);
    }
    (speeds, flag.0)
}
