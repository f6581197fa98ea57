//! High-lift configuration selector
//!
//! Every coefficient set in the performance data exists once per takeoff
//! configuration. [`ByConfiguration`] stores exactly one value per
//! configuration as named fields, so a table missing a configuration does not
//! compile.

use core::fmt;

use crate::errors::TakeoffPerformanceError;

/// Takeoff flap/slat configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Configuration {
    /// CONF 1+F
    Conf1PlusF,
    /// CONF 2
    Conf2,
    /// CONF 3
    Conf3,
}

impl Configuration {
    /// All takeoff configurations, least to most extended
    pub const ALL: [Configuration; 3] = [Self::Conf1PlusF, Self::Conf2, Self::Conf3];

    /// Selector number as set on the flap lever
    pub const fn number(self) -> u8 {
        match self {
            Self::Conf1PlusF => 1,
            Self::Conf2 => 2,
            Self::Conf3 => 3,
        }
    }
}

impl TryFrom<u8> for Configuration {
    type Error = TakeoffPerformanceError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Conf1PlusF),
            2 => Ok(Self::Conf2),
            3 => Ok(Self::Conf3),
            _ => Err(TakeoffPerformanceError::InvalidData),
        }
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conf1PlusF => f.write_str("1+F"),
            Self::Conf2 => f.write_str("2"),
            Self::Conf3 => f.write_str("3"),
        }
    }
}

/// One value per takeoff configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ByConfiguration<T> {
    /// CONF 1+F value
    pub conf1: T,
    /// CONF 2 value
    pub conf2: T,
    /// CONF 3 value
    pub conf3: T,
}

impl<T> ByConfiguration<T> {
    /// Value for `conf`
    pub const fn get(&self, conf: Configuration) -> &T {
        match conf {
            Configuration::Conf1PlusF => &self.conf1,
            Configuration::Conf2 => &self.conf2,
            Configuration::Conf3 => &self.conf3,
        }
    }
}
