//! `#![no_std]` driver for the AMS AS7262 6-channel visible spectral sensor.
//!
//! The sensor hides its configuration and data registers behind a three-register
//! handshake; [`protocol::VirtualRegisters`] implements it and [`As7262`] builds the
//! gain, mode, integration time and channel accessors on top.
//!
//! ```no_run
//! # fn demo<I2C: embedded_hal::i2c::I2c>(i2c: I2C, mut delay: impl embedded_hal::delay::DelayNs) -> Result<(), as7262::Error<I2C::Error>> {
//! use as7262::{As7262, Config};
//! use as7262::params::{Channel, Gain};
//!
//! let mut sensor = As7262::create_i2c(i2c, Config::default(), &mut delay)?;
//! sensor.set_gain(Gain::X16)?;
//! let red = sensor.read_channel(Channel::Red)?;
//! # let _ = red;
//! # Ok(())
//! # }
//! ```
#![cfg_attr(not(test), no_std)]

#[macro_use]
mod log;

mod error;

pub mod config;
pub mod device;
pub mod interface;
pub mod params;
pub mod protocol;
pub mod registers;

pub use crate::config::{Config, PollLimit};
pub use crate::device::As7262;
pub use crate::error::{Error, Result};
