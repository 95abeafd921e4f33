//! Bus interface abstraction for the AS7262 driver.

pub mod i2c;

/// Abstraction over the physical register access required by the driver.
///
/// Only the three handshake registers are ever addressed through this trait; the
/// virtual register file is layered on top by [`crate::protocol`].
pub trait As7262Interface {
    /// Error type produced by the concrete bus implementation.
    type Error;

    /// Writes a single physical register.
    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error>;

    /// Reads a single physical register.
    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error>;
}
