//! Register map definitions for the AS7262 spectral sensor.
//!
//! The device exposes three physical registers on the bus. Everything else lives in
//! a virtual register file reached through them (see [`crate::protocol`]).
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

use crate::params::{DriverCurrent, Gain, IndicatorCurrent, Mode};

/// Physical address of the handshake `STATUS` register.
pub(crate) const REG_STATUS: u8 = 0x00;
/// Physical address of the `WRITE` register (virtual address and write data).
pub(crate) const REG_WRITE: u8 = 0x01;
/// Physical address of the `READ` register (virtual read data).
pub(crate) const REG_READ: u8 = 0x02;

/// Flag OR-ed into a virtual address to request a write instead of a read.
pub(crate) const VIRTUAL_WRITE_FLAG: u8 = 0x80;

/// Virtual address of `HW_TYPE`.
pub const VREG_HW_TYPE: u8 = 0x00;
/// Virtual address of `HW_VERSION`.
pub const VREG_HW_VERSION: u8 = 0x01;
/// Virtual address of `FW_VERSION_H`.
pub const VREG_FW_VERSION_H: u8 = 0x02;
/// Virtual address of `FW_VERSION_L`.
pub const VREG_FW_VERSION_L: u8 = 0x03;
/// Virtual address of `CONTROL_SETUP`.
pub const VREG_CONTROL_SETUP: u8 = 0x04;
/// Virtual address of `INT_T`.
pub const VREG_INTEGRATION_TIME: u8 = 0x05;
/// Virtual address of `DEVICE_TEMP`.
pub const VREG_DEVICE_TEMP: u8 = 0x06;
/// Virtual address of `LED_CONTROL`.
pub const VREG_LED_CONTROL: u8 = 0x07;
/// Virtual address of the first raw channel byte (`V_HIGH`).
pub const VREG_RAW_DATA: u8 = 0x08;
/// Virtual address of the first calibrated channel byte (`V_CAL`).
pub const VREG_CAL_DATA: u8 = 0x14;

/// Expected content of `HW_TYPE`.
pub const EXPECTED_HW_TYPE: u8 = 0x40;

/// A virtual register with a typed bitfield view.
pub trait Register: Copy + From<u8> + Into<u8> {
    /// Virtual register address as documented in the datasheet.
    const ADDRESS: u8;
}

/// Bitfield representation of the physical `STATUS` register (address `0x00`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    // READ register holds data for the host (bit 0).
    pub read_ready: bool,
    // WRITE register has not been consumed by the device yet (bit 1).
    pub write_pending: bool,
    #[skip]
    __: B6,
}

impl From<u8> for Status {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Status> for u8 {
    fn from(value: Status) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `CONTROL_SETUP` virtual register (address `0x04`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlSetup {
    #[skip]
    __: B1,
    // Conversion results available (bit 1).
    pub data_ready: bool,
    // Measurement mode / bank selection (bits 3:2).
    pub mode: Mode,
    // Channel gain (bits 5:4).
    pub gain: Gain,
    // INT pin output enable (bit 6).
    pub interrupt_enable: bool,
    // Soft reset, self-clearing (bit 7).
    pub reset: bool,
}

impl From<u8> for ControlSetup {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<ControlSetup> for u8 {
    fn from(value: ControlSetup) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `LED_CONTROL` virtual register (address `0x07`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedControl {
    // Indicator LED enable (bit 0).
    pub indicator_enable: bool,
    // Indicator LED current limit (bits 2:1).
    pub indicator_current: IndicatorCurrent,
    // Illumination LED driver enable (bit 3).
    pub driver_enable: bool,
    // Illumination LED driver current limit (bits 5:4).
    pub driver_current: DriverCurrent,
    #[skip]
    __: B2,
}

impl LedControl {
    /// LED setup written during initialization: indicator on at 4 mA, illumination
    /// driver off with its current limit at 25 mA.
    pub fn indicator_only() -> Self {
        Self::new()
            .with_indicator_enable(true)
            .with_indicator_current(IndicatorCurrent::Ma4)
            .with_driver_enable(false)
            .with_driver_current(DriverCurrent::Ma25)
    }
}

impl From<u8> for LedControl {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<LedControl> for u8 {
    fn from(value: LedControl) -> Self {
        value.into_bytes()[0]
    }
}

impl Register for ControlSetup {
    const ADDRESS: u8 = VREG_CONTROL_SETUP;
}

impl Register for LedControl {
    const ADDRESS: u8 = VREG_LED_CONTROL;
}

/// Soft reset command value written to `CONTROL_SETUP`.
pub const RESET_COMMAND: u8 = 0x80;
