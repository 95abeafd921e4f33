//! Strongly typed parameter enumerations for the AS7262 driver.
//!
//! These enums map directly to datasheet field encodings and are used across
//! [`Config`](crate::config::Config) and the high-level driver APIs. Prefer these
//! types over raw integers to keep configuration values valid and explicit.
//!
//! # Examples
//!
//! ```rust
//! use as7262::params::{Channel, Gain, Mode};
//!
//! let gain = Gain::X16;
//! let mode = Mode::ContinuousAll;
//! assert_eq!(Channel::Orange.raw_address(), 0x10);
//! let _ = (gain, mode);
//! ```

use modular_bitfield::prelude::Specifier;

/// Base unit of the integration time register, in microseconds.
pub const INTEGRATION_STEP_US: u32 = 2_800;

/// Returns the effective exposure of an integration multiplier in microseconds.
pub const fn integration_time_us(multiplier: u8) -> u32 {
    multiplier as u32 * INTEGRATION_STEP_US
}

/// A raw code that does not name any variant of the target enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutOfRange(pub u8);

/// Channel gain selections encoded in `CONTROL_SETUP[5:4]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum Gain {
    /// 1x gain.
    X1 = 0b00,
    /// 3.7x gain.
    X3_7 = 0b01,
    /// 16x gain.
    X16 = 0b10,
    /// 64x gain.
    X64 = 0b11,
}

impl Gain {
    /// Returns the nominal amplification factor.
    pub const fn multiplier(self) -> f32 {
        match self {
            Self::X1 => 1.0,
            Self::X3_7 => 3.7,
            Self::X16 => 16.0,
            Self::X64 => 64.0,
        }
    }
}

impl TryFrom<u8> for Gain {
    type Error = OutOfRange;

    fn try_from(value: u8) -> core::result::Result<Self, Self::Error> {
        match value {
            0b00 => Ok(Self::X1),
            0b01 => Ok(Self::X3_7),
            0b10 => Ok(Self::X16),
            0b11 => Ok(Self::X64),
            other => Err(OutOfRange(other)),
        }
    }
}

/// Measurement mode selections encoded in `CONTROL_SETUP[3:2]` (`BANK`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum Mode {
    /// Continuous measurement of violet, blue, green and yellow.
    ContinuousVbgy = 0b00,
    /// Continuous measurement of green, yellow, orange and red.
    ContinuousGyor = 0b01,
    /// Continuous measurement of all six channels.
    ///
    /// Fresh data is available once every two integration periods.
    ContinuousAll = 0b10,
    /// Single measurement of all six channels.
    OneShotAll = 0b11,
}

impl Mode {
    /// Returns the number of integration periods needed for a complete data set.
    pub const fn cycles_per_sample(self) -> u8 {
        match self {
            Self::ContinuousVbgy | Self::ContinuousGyor => 1,
            Self::ContinuousAll | Self::OneShotAll => 2,
        }
    }
}

impl TryFrom<u8> for Mode {
    type Error = OutOfRange;

    fn try_from(value: u8) -> core::result::Result<Self, Self::Error> {
        match value {
            0b00 => Ok(Self::ContinuousVbgy),
            0b01 => Ok(Self::ContinuousGyor),
            0b10 => Ok(Self::ContinuousAll),
            0b11 => Ok(Self::OneShotAll),
            other => Err(OutOfRange(other)),
        }
    }
}

/// Spectral measurement bands, in register order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Channel {
    /// 450 nm.
    Violet = 0,
    /// 500 nm.
    Blue = 1,
    /// 550 nm.
    Green = 2,
    /// 570 nm.
    Yellow = 3,
    /// 600 nm.
    Orange = 4,
    /// 650 nm.
    Red = 5,
}

impl Channel {
    /// Every channel in register order.
    pub const ALL: [Channel; 6] = [
        Self::Violet,
        Self::Blue,
        Self::Green,
        Self::Yellow,
        Self::Orange,
        Self::Red,
    ];

    /// Virtual address of the most significant raw count byte.
    pub const fn raw_address(self) -> u8 {
        crate::registers::VREG_RAW_DATA + 2 * self as u8
    }

    /// Virtual address of the most significant calibrated value byte.
    pub const fn calibrated_address(self) -> u8 {
        crate::registers::VREG_CAL_DATA + 4 * self as u8
    }

    /// Peak wavelength of the band in nanometres.
    pub const fn wavelength_nm(self) -> u16 {
        match self {
            Self::Violet => 450,
            Self::Blue => 500,
            Self::Green => 550,
            Self::Yellow => 570,
            Self::Orange => 600,
            Self::Red => 650,
        }
    }
}

impl TryFrom<u8> for Channel {
    type Error = OutOfRange;

    fn try_from(value: u8) -> core::result::Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(OutOfRange(value))
    }
}

/// Indicator LED current limit encoded in `LED_CONTROL[2:1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum IndicatorCurrent {
    /// 1 mA.
    Ma1 = 0b00,
    /// 2 mA.
    Ma2 = 0b01,
    /// 4 mA.
    Ma4 = 0b10,
    /// 8 mA.
    Ma8 = 0b11,
}

/// Illumination LED driver current limit encoded in `LED_CONTROL[5:4]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum DriverCurrent {
    /// 12.5 mA.
    Ma12_5 = 0b00,
    /// 25 mA.
    Ma25 = 0b01,
    /// 50 mA.
    Ma50 = 0b10,
    /// 100 mA.
    Ma100 = 0b11,
}
