//! I2C interface implementation built on top of `embedded-hal` `I2c`.

use embedded_hal::i2c::I2c;

use super::As7262Interface;

/// Default 7-bit bus address of the AS7262.
pub const DEFAULT_ADDRESS: u8 = 0x49;

/// I2C-based interface implementation for the AS7262 driver.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Creates a new interface talking to the device at `address`.
    pub const fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Returns the 7-bit device address used for every transfer.
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// Provides mutable access to the wrapped I2C bus.
    pub fn i2c_mut(&mut self) -> &mut I2C {
        &mut self.i2c
    }

    /// Consumes the interface and returns the owned I2C bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> As7262Interface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error> {
        self.i2c.write(self.address, &[register, value])
    }

    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error> {
        // Repeated start keeps the bus between the address and data phases.
        let mut value = [0u8; 1];
        self.i2c.write_read(self.address, &[register], &mut value)?;
        Ok(value[0])
    }
}

#[cfg(test)]
mod tests {
    use super::{I2cInterface, DEFAULT_ADDRESS};
    use crate::interface::As7262Interface;
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    #[test]
    fn read_register_uses_repeated_start() {
        let expectations = [I2cTransaction::write_read(
            DEFAULT_ADDRESS,
            vec![0x00],
            vec![0x01],
        )];
        let mut interface = I2cInterface::new(I2cMock::new(&expectations), DEFAULT_ADDRESS);

        assert_eq!(interface.read_register(0x00).unwrap(), 0x01);
        interface.release().done();
    }

    #[test]
    fn write_register_sends_register_and_value() {
        let expectations = [I2cTransaction::write(0x3A, vec![0x01, 0x84])];
        let mut interface = I2cInterface::new(I2cMock::new(&expectations), 0x3A);

        interface.write_register(0x01, 0x84).unwrap();
        interface.release().done();
    }

    #[test]
    fn bus_errors_are_passed_through() {
        let expectations = [
            I2cTransaction::write_read(DEFAULT_ADDRESS, vec![0x02], vec![0x00])
                .with_error(ErrorKind::Other),
        ];
        let mut interface = I2cInterface::new(I2cMock::new(&expectations), DEFAULT_ADDRESS);

        assert_eq!(interface.read_register(0x02), Err(ErrorKind::Other));
        interface.release().done();
    }
}
