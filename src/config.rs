//! Configuration primitives for the AS7262 driver.

use crate::interface::i2c::DEFAULT_ADDRESS;
use crate::params::{integration_time_us, Gain, Mode};

/// Integration multiplier applied when none is configured (36 × 2.8 ms = 100.8 ms).
pub const DEFAULT_INTEGRATION_TIME: u8 = 36;

/// Upper bound on `STATUS` polls per handshake step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PollLimit {
    /// Poll until the device answers, however long that takes.
    Unbounded,
    /// Give up with [`Error::Timeout`](crate::Error::Timeout) after this many reads.
    Attempts(u32),
}

/// User-facing configuration for the AS7262 sensor.
///
/// Once the driver is initialized this mirrors what was last written to the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// 7-bit I2C address.
    pub address: u8,
    /// Channel gain.
    pub gain: Gain,
    /// Measurement mode.
    pub mode: Mode,
    /// Host GPIO wired to the INT pin; enables the interrupt output when set.
    pub interrupt_pin: Option<u8>,
    /// Integration time in 2.8 ms steps.
    pub integration_time: u8,
    /// Handshake polling bound.
    pub poll_limit: PollLimit,
}

impl Config {
    /// Begins building a [`Config`] using the builder pattern.
    pub fn new() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Checks whether this configuration can be applied.
    pub fn validate(&self) -> core::result::Result<(), ConfigError> {
        if self.address > 0x7F {
            return Err(ConfigError::AddressOutOfRange);
        }

        if self.poll_limit == PollLimit::Attempts(0) {
            return Err(ConfigError::ZeroPollLimit);
        }

        Ok(())
    }

    /// Effective exposure per integration cycle in microseconds.
    pub const fn integration_time_us(&self) -> u32 {
        integration_time_us(self.integration_time)
    }
}

/// Builder for [`Config`] allowing piecemeal construction.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a new builder seeded with [`Config::default()`].
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Overrides the bus address.
    pub fn address(mut self, address: u8) -> Self {
        self.config.address = address;
        self
    }

    /// Overrides the channel gain.
    pub fn gain(mut self, gain: Gain) -> Self {
        self.config.gain = gain;
        self
    }

    /// Overrides the measurement mode.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Records the interrupt pin and enables the device interrupt output.
    pub fn interrupt_pin(mut self, pin: u8) -> Self {
        self.config.interrupt_pin = Some(pin);
        self
    }

    /// Sets the integration multiplier.
    pub fn integration_time(mut self, multiplier: u8) -> Self {
        self.config.integration_time = multiplier;
        self
    }

    /// Bounds the handshake polling loops.
    pub fn poll_limit(mut self, limit: PollLimit) -> Self {
        self.config.poll_limit = limit;
        self
    }

    /// Finalizes the builder and returns the [`Config`].
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            gain: Gain::X64,
            mode: Mode::ContinuousAll,
            interrupt_pin: None,
            integration_time: DEFAULT_INTEGRATION_TIME,
            poll_limit: PollLimit::Unbounded,
        }
    }
}

/// Validation errors generated while verifying a [`Config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The address does not fit in 7 bits.
    AddressOutOfRange,
    /// A poll limit of zero attempts can never succeed.
    ZeroPollLimit,
}
