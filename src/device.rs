//! High-level AS7262 device driver implementation.

use crate::config::{Config, ConfigError, PollLimit};
use crate::error::{Error, Result};
use crate::interface::i2c::I2cInterface;
use crate::interface::As7262Interface;
use crate::params::{Channel, Gain, Mode};
use crate::protocol::VirtualRegisters;
use crate::registers::{
    ControlSetup,
    LedControl,
    EXPECTED_HW_TYPE,
    RESET_COMMAND,
    VREG_CONTROL_SETUP,
    VREG_DEVICE_TEMP,
    VREG_FW_VERSION_H,
    VREG_HW_TYPE,
    VREG_HW_VERSION,
    VREG_INTEGRATION_TIME,
};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

/// Time the device needs after a soft reset before it accepts configuration (milliseconds).
pub const RESET_SETTLE_DELAY_MS: u32 = 1_200;

/// High-level synchronous driver for the AS7262 spectral sensor.
pub struct As7262<IFACE> {
    registers: VirtualRegisters<IFACE>,
    config: Config,
}

/// Identification registers of the sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceInfo {
    /// `HW_TYPE`, 0x40 for the AS7262.
    pub hardware_type: u8,
    /// `HW_VERSION`.
    pub hardware_version: u8,
    /// `FW_VERSION_H:FW_VERSION_L`.
    pub firmware_version: u16,
}

impl<IFACE> As7262<IFACE> {
    // ==================================================================
    // == Driver Construction & Ownership ===============================
    // ==================================================================
    /// Creates a new driver instance from the provided bus interface.
    ///
    /// No bus traffic happens until [`init`](Self::init) is called.
    pub fn new(interface: IFACE, config: Config) -> Self {
        Self {
            registers: VirtualRegisters::new(interface, config.poll_limit),
            config,
        }
    }

    /// Consumes the driver and returns the owned interface and last configuration.
    pub fn release(self) -> (IFACE, Config) {
        (self.registers.release(), self.config)
    }

    /// Provides mutable access to the underlying interface.
    pub fn interface_mut(&mut self) -> &mut IFACE {
        self.registers.interface_mut()
    }

    // ==================================================================
    // == Configuration Snapshot ========================================
    // ==================================================================
    /// Returns the configuration last written to the device.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current channel gain.
    pub fn gain(&self) -> Gain {
        self.config.gain
    }

    /// Current measurement mode.
    pub fn mode(&self) -> Mode {
        self.config.mode
    }

    /// Current integration multiplier in 2.8 ms steps.
    pub fn integration_time(&self) -> u8 {
        self.config.integration_time
    }

    /// Host GPIO recorded as the interrupt line, if any.
    pub fn interrupt_pin(&self) -> Option<u8> {
        self.config.interrupt_pin
    }

    /// Bounds or unbounds the handshake polling loops.
    ///
    /// `PollLimit::Attempts(0)` is rejected and leaves the current bound in place.
    pub fn set_poll_limit(
        &mut self,
        poll_limit: PollLimit,
    ) -> core::result::Result<(), ConfigError> {
        if poll_limit == PollLimit::Attempts(0) {
            return Err(ConfigError::ZeroPollLimit);
        }

        self.registers.set_poll_limit(poll_limit);
        self.config.poll_limit = poll_limit;
        Ok(())
    }
}

impl<I2C> As7262<I2cInterface<I2C>>
where
    I2C: I2c,
{
    // ==================================================================
    // == I2C Convenience Constructors ==================================
    // ==================================================================
    /// Convenience constructor for I2C transports, using `config.address`.
    pub fn new_i2c(i2c: I2C, config: Config) -> Self {
        Self::new(I2cInterface::new(i2c, config.address), config)
    }

    /// Builds and initializes a driver on an I2C bus.
    pub fn create_i2c(
        i2c: I2C,
        config: Config,
        delay: &mut impl DelayNs,
    ) -> Result<Self, I2C::Error> {
        Self::create(I2cInterface::new(i2c, config.address), config, delay)
    }

    /// Releases the driver, returning the I2C bus and configuration.
    pub fn release_i2c(self) -> (I2C, Config) {
        let (iface, config) = self.release();
        (iface.release(), config)
    }
}

impl<IFACE, CommE> As7262<IFACE>
where
    IFACE: As7262Interface<Error = CommE>,
{
    // ==================================================================
    // == Initialization ================================================
    // ==================================================================
    /// Builds a driver and runs [`init`](Self::init) on it.
    pub fn create(interface: IFACE, config: Config, delay: &mut impl DelayNs) -> Result<Self, CommE> {
        let mut device = Self::new(interface, config);
        device.init(delay)?;
        Ok(device)
    }

    /// Verifies the device identity, resets it and applies the current configuration.
    ///
    /// Blocks for [`RESET_SETTLE_DELAY_MS`] after the reset.
    pub fn init(&mut self, delay: &mut impl DelayNs) -> Result<(), CommE> {
        self.config.validate().map_err(|_| Error::InvalidConfig)?;
        self.registers.set_poll_limit(self.config.poll_limit);

        let version = self.check_identity()?;
        self.reset()?;
        delay.delay_ms(RESET_SETTLE_DELAY_MS);

        let setup = ControlSetup::new()
            .with_interrupt_enable(self.config.interrupt_pin.is_some())
            .with_gain(self.config.gain)
            .with_mode(self.config.mode);
        self.registers.write_register(setup)?;
        self.set_integration_time(self.config.integration_time)?;
        self.registers.write_register(LedControl::indicator_only())?;

        info!(
            "AS7262 (hw version {=u8:#x}) ready at address {=u8:#x}",
            version,
            self.config.address
        );
        Ok(())
    }

    /// Checks `HW_TYPE` and `HW_VERSION`, returning the hardware version.
    pub fn check_identity(&mut self) -> Result<u8, CommE> {
        let hardware_type = self.registers.read(VREG_HW_TYPE)?;
        if hardware_type != EXPECTED_HW_TYPE {
            error!(
                "no AS7262 at address {=u8:#x} (hw type {=u8:#x})",
                self.config.address,
                hardware_type
            );
            return Err(Error::DeviceNotFound);
        }

        let version = self.registers.read(VREG_HW_VERSION)?;
        if version == 0 {
            error!("no AS7262 at address {=u8:#x} (hw version 0)", self.config.address);
            return Err(Error::DeviceNotFound);
        }

        Ok(version)
    }

    /// Issues a soft reset. The device needs [`RESET_SETTLE_DELAY_MS`] to recover.
    pub fn reset(&mut self) -> Result<(), CommE> {
        self.registers.write(VREG_CONTROL_SETUP, RESET_COMMAND)
    }

    // ==================================================================
    // == Identification & Status =======================================
    // ==================================================================
    /// Reads the identification registers.
    pub fn device_info(&mut self) -> Result<DeviceInfo, CommE> {
        let hardware_type = self.registers.read(VREG_HW_TYPE)?;
        let hardware_version = self.registers.read(VREG_HW_VERSION)?;
        let firmware_version = self.registers.read_u16(VREG_FW_VERSION_H)?;

        Ok(DeviceInfo {
            hardware_type,
            hardware_version,
            firmware_version,
        })
    }

    /// Returns whether a new set of conversion results is available.
    pub fn data_ready(&mut self) -> Result<bool, CommE> {
        let setup = self.registers.read_register::<ControlSetup>()?;
        Ok(setup.data_ready())
    }

    /// Reads the die temperature in degrees Celsius.
    pub fn read_temperature(&mut self) -> Result<i8, CommE> {
        let raw = self.registers.read(VREG_DEVICE_TEMP)?;
        Ok(raw as i8)
    }

    // ==================================================================
    // == Measurement Configuration =====================================
    // ==================================================================
    /// Sets the channel gain, leaving the other `CONTROL_SETUP` fields as they are.
    pub fn set_gain(&mut self, gain: Gain) -> Result<(), CommE> {
        self.registers
            .modify::<ControlSetup, _>(|setup| setup.set_gain(gain))?;
        self.config.gain = gain;

        debug!("gain set to {}", gain);
        Ok(())
    }

    /// Sets the measurement mode, leaving the other `CONTROL_SETUP` fields as they are.
    pub fn set_mode(&mut self, mode: Mode) -> Result<(), CommE> {
        self.registers
            .modify::<ControlSetup, _>(|setup| setup.set_mode(mode))?;
        self.config.mode = mode;

        debug!("mode set to {}", mode);
        Ok(())
    }

    /// Sets the integration time in 2.8 ms steps (36 gives 100.8 ms).
    ///
    /// In [`Mode::ContinuousAll`] and [`Mode::OneShotAll`] a full data set takes two
    /// integration periods.
    pub fn set_integration_time(&mut self, multiplier: u8) -> Result<(), CommE> {
        self.registers.write(VREG_INTEGRATION_TIME, multiplier)?;
        self.config.integration_time = multiplier;

        debug!("integration time set to {=u8} steps", multiplier);
        Ok(())
    }

    // ==================================================================
    // == Data Acquisition ==============================================
    // ==================================================================
    /// Reads the 16-bit raw count of one channel.
    pub fn read_channel_raw(&mut self, channel: Channel) -> Result<u16, CommE> {
        self.registers.read_u16(channel.raw_address())
    }

    /// Reads the factory-calibrated value of one channel.
    pub fn read_channel(&mut self, channel: Channel) -> Result<f32, CommE> {
        self.registers.read_f32(channel.calibrated_address())
    }

    /// Reads the raw counts of all channels, violet first.
    pub fn read_all_raw(&mut self) -> Result<[u16; 6], CommE> {
        let mut counts = [0u16; 6];
        for (count, channel) in counts.iter_mut().zip(Channel::ALL) {
            *count = self.read_channel_raw(channel)?;
        }
        Ok(counts)
    }

    /// Reads the calibrated values of all channels, violet first.
    pub fn read_all_calibrated(&mut self) -> Result<[f32; 6], CommE> {
        let mut values = [0f32; 6];
        for (value, channel) in values.iter_mut().zip(Channel::ALL) {
            *value = self.read_channel(channel)?;
        }
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::{As7262, DeviceInfo, RESET_SETTLE_DELAY_MS};
    use crate::config::{Config, ConfigError, PollLimit};
    use crate::error::Error;
    use crate::interface::As7262Interface;
    use crate::params::{Channel, Gain, Mode};
    use crate::protocol::script::{vread, vwrite};
    use core::convert::Infallible;
    use embedded_hal::delay::DelayNs;
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Access {
        Read(u8),
        Write(u8, u8),
    }

    /// Register-level model of the sensor's virtual register handshake.
    struct SimulatedSensor {
        registers: [u8; 0x30],
        latch: Option<u8>,
        pending_write: Option<u8>,
        busy_polls: u8,
        countdown: u8,
        log: Vec<Access>,
    }

    impl SimulatedSensor {
        fn new() -> Self {
            let mut sensor = Self {
                registers: [0u8; 0x30],
                latch: None,
                pending_write: None,
                busy_polls: 2,
                countdown: 0,
                log: Vec::new(),
            };
            sensor.registers[0x00] = 0x40;
            sensor.registers[0x01] = 0x3E;
            sensor.load(0x02, &[0x12, 0x34]);
            sensor.registers[0x06] = 27;

            for channel in Channel::ALL {
                let index = channel as u8;
                let raw = 0x0100 * u16::from(index) + 0x00A0 + u16::from(index);
                sensor.load(channel.raw_address(), &raw.to_be_bytes());
                let calibrated = f32::from(index) * 10.0 + 0.25;
                sensor.load(channel.calibrated_address(), &calibrated.to_bits().to_be_bytes());
            }
            sensor
        }

        fn load(&mut self, address: u8, bytes: &[u8]) {
            let start = usize::from(address);
            self.registers[start..start + bytes.len()].copy_from_slice(bytes);
        }

        fn setup(&self) -> u8 {
            self.registers[0x04]
        }
    }

    impl As7262Interface for SimulatedSensor {
        type Error = Infallible;

        fn read_register(&mut self, register: u8) -> Result<u8, Self::Error> {
            match register {
                0x00 => {
                    if self.countdown > 0 {
                        self.countdown -= 1;
                        Ok(0x02)
                    } else if self.latch.is_some() {
                        Ok(0x01)
                    } else {
                        Ok(0x00)
                    }
                }
                0x02 => Ok(self.latch.take().expect("READ fetched before read-ready")),
                other => panic!("read of physical register {other:#04x}"),
            }
        }

        fn write_register(&mut self, register: u8, value: u8) -> Result<(), Self::Error> {
            assert_eq!(register, 0x01, "writes must target the WRITE register");
            self.countdown = self.busy_polls;

            if let Some(address) = self.pending_write.take() {
                self.log.push(Access::Write(address, value));
                // Soft reset is self-clearing.
                let stored = if address == 0x04 { value & 0x7F } else { value };
                self.registers[usize::from(address)] = stored;
            } else if value & 0x80 != 0 {
                self.pending_write = Some(value & 0x7F);
            } else {
                self.log.push(Access::Read(value));
                self.latch = Some(self.registers[usize::from(value)]);
            }
            Ok(())
        }
    }

    /// Accumulates requested delay instead of sleeping.
    #[derive(Default)]
    struct RecordingDelay {
        total_ns: u64,
    }

    impl DelayNs for RecordingDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ns += u64::from(ns);
        }
    }

    fn initialized(config: Config) -> As7262<SimulatedSensor> {
        let mut device = As7262::create(SimulatedSensor::new(), config, &mut NoopDelay)
            .unwrap();
        device.interface_mut().log.clear();
        device
    }

    #[test]
    fn defaults_scenario() {
        let mut device = initialized(Config::default());

        assert_eq!(device.gain(), Gain::X64);
        assert_eq!(device.mode(), Mode::ContinuousAll);
        assert_eq!(device.integration_time(), 36);
        assert_eq!(device.interrupt_pin(), None);

        device.set_gain(Gain::X16).unwrap();
        assert_eq!(device.gain(), Gain::X16);
        assert_eq!(device.mode(), Mode::ContinuousAll);
    }

    #[test]
    fn init_programs_registers_in_order() {
        let mut delay = RecordingDelay::default();
        let device = As7262::create(SimulatedSensor::new(), Config::default(), &mut delay).unwrap();
        let (sensor, _) = device.release();

        assert_eq!(
            sensor.log,
            [
                Access::Read(0x00),
                Access::Read(0x01),
                Access::Write(0x04, 0x80),
                Access::Write(0x04, 0b0011_1000),
                Access::Write(0x05, 36),
                Access::Write(0x07, 0b0001_0101),
            ]
        );
        assert_eq!(delay.total_ns, u64::from(RESET_SETTLE_DELAY_MS) * 1_000_000);
    }

    #[test]
    fn interrupt_pin_enables_int_output() {
        let config = Config::new()
            .interrupt_pin(4)
            .gain(Gain::X1)
            .mode(Mode::ContinuousGyor)
            .integration_time(200)
            .build();
        let mut device = initialized(config);

        assert_eq!(device.interface_mut().setup(), 0b0100_0100);
        assert_eq!(device.interface_mut().registers[0x05], 200);
        assert_eq!(device.interrupt_pin(), Some(4));
    }

    #[test]
    fn gain_round_trips_and_encodes_field() {
        let mut device = initialized(Config::default());

        for (gain, code) in [
            (Gain::X1, 0b00),
            (Gain::X3_7, 0b01),
            (Gain::X16, 0b10),
            (Gain::X64, 0b11),
        ] {
            device.set_gain(gain).unwrap();
            assert_eq!(device.gain(), gain);
            assert_eq!((device.interface_mut().setup() >> 4) & 0b11, code);
        }
    }

    #[test]
    fn mode_round_trips_and_encodes_field() {
        let mut device = initialized(Config::default());

        for (mode, code) in [
            (Mode::ContinuousVbgy, 0b00),
            (Mode::ContinuousGyor, 0b01),
            (Mode::ContinuousAll, 0b10),
            (Mode::OneShotAll, 0b11),
        ] {
            device.set_mode(mode).unwrap();
            assert_eq!(device.mode(), mode);
            assert_eq!((device.interface_mut().setup() >> 2) & 0b11, code);
        }
    }

    #[test]
    fn gain_and_mode_updates_do_not_disturb_each_other() {
        let config = Config::new().interrupt_pin(2).build();
        let mut device = initialized(config);

        for gain in [Gain::X1, Gain::X3_7, Gain::X16, Gain::X64] {
            for mode in [
                Mode::ContinuousVbgy,
                Mode::ContinuousGyor,
                Mode::ContinuousAll,
                Mode::OneShotAll,
            ] {
                device.set_gain(gain).unwrap();
                device.set_mode(mode).unwrap();
                let setup = device.interface_mut().setup();
                assert_eq!((setup >> 4) & 0b11, gain as u8);
                assert_eq!((setup >> 2) & 0b11, mode as u8);
                assert_eq!(setup & 0b0100_0000, 0b0100_0000);

                device.set_gain(gain).unwrap();
                assert_eq!(device.mode(), mode);
            }
        }
    }

    #[test]
    fn integration_time_is_written_verbatim() {
        let mut device = initialized(Config::default());

        for multiplier in 0..=u8::MAX {
            device.set_integration_time(multiplier).unwrap();
            assert_eq!(device.integration_time(), multiplier);
            assert_eq!(
                device.interface_mut().log.pop(),
                Some(Access::Write(0x05, multiplier))
            );
        }
    }

    #[test]
    fn getters_do_not_touch_the_bus() {
        let device = initialized(Config::default());
        let _ = (device.gain(), device.mode(), device.integration_time());
        let _ = device.config();

        let (sensor, _) = device.release();
        assert!(sensor.log.is_empty());
    }

    #[test]
    fn out_of_range_codes_never_reach_the_device() {
        let mut device = initialized(Config::default());

        let result = Gain::try_from(4).map(|gain| device.set_gain(gain));
        assert!(result.is_err());
        let result = Mode::try_from(9).map(|mode| device.set_mode(mode));
        assert!(result.is_err());

        assert_eq!(device.gain(), Gain::X64);
        assert_eq!(device.mode(), Mode::ContinuousAll);
        assert!(device.interface_mut().log.is_empty());
    }

    #[test]
    fn calibrated_channel_reads_four_consecutive_registers() {
        let mut device = initialized(Config::default());

        for channel in Channel::ALL {
            device.interface_mut().log.clear();
            let value = device.read_channel(channel).unwrap();
            assert_eq!(value, f32::from(channel as u8) * 10.0 + 0.25);

            let base = 0x14 + 4 * channel as u8;
            assert_eq!(
                device.interface_mut().log,
                [
                    Access::Read(base),
                    Access::Read(base + 1),
                    Access::Read(base + 2),
                    Access::Read(base + 3),
                ]
            );
        }
    }

    #[test]
    fn raw_channel_reads_two_consecutive_registers() {
        let mut device = initialized(Config::default());

        for channel in Channel::ALL {
            device.interface_mut().log.clear();
            let index = channel as u8;
            let value = device.read_channel_raw(channel).unwrap();
            assert_eq!(value, 0x0100 * u16::from(index) + 0x00A0 + u16::from(index));

            let base = 0x08 + 2 * index;
            assert_eq!(
                device.interface_mut().log,
                [Access::Read(base), Access::Read(base + 1)]
            );
        }
    }

    #[test]
    fn bulk_reads_follow_channel_order() {
        let mut device = initialized(Config::default());

        assert_eq!(
            device.read_all_raw().unwrap(),
            [0x00A0, 0x01A1, 0x02A2, 0x03A3, 0x04A4, 0x05A5]
        );
        assert_eq!(
            device.read_all_calibrated().unwrap(),
            [0.25, 10.25, 20.25, 30.25, 40.25, 50.25]
        );
    }

    #[test]
    fn identification_and_status_queries() {
        let mut device = initialized(Config::default());

        assert_eq!(
            device.device_info().unwrap(),
            DeviceInfo {
                hardware_type: 0x40,
                hardware_version: 0x3E,
                firmware_version: 0x1234,
            }
        );
        assert_eq!(device.read_temperature().unwrap(), 27);

        assert!(!device.data_ready().unwrap());
        device.interface_mut().registers[0x04] |= 0b10;
        assert!(device.data_ready().unwrap());
    }

    #[test]
    fn create_rejects_wrong_hardware_type() {
        let expectations = vread(0x00, 0x41);
        let i2c = I2cMock::new(&expectations);

        let result = As7262::create_i2c(i2c.clone(), Config::default(), &mut NoopDelay);
        assert!(matches!(result, Err(Error::DeviceNotFound)));
        i2c.clone().done();
    }

    #[test]
    fn create_rejects_zero_hardware_version() {
        let expectations = [vread(0x00, 0x40), vread(0x01, 0x00)].concat();
        let i2c = I2cMock::new(&expectations);

        let result = As7262::create_i2c(i2c.clone(), Config::default(), &mut NoopDelay);
        assert!(matches!(result, Err(Error::DeviceNotFound)));
        i2c.clone().done();
    }

    #[test]
    fn create_rejects_invalid_config_without_bus_traffic() {
        let expectations: [I2cTransaction; 0] = [];
        let i2c = I2cMock::new(&expectations);
        let config = Config::new().poll_limit(PollLimit::Attempts(0)).build();

        let result = As7262::create_i2c(i2c.clone(), config, &mut NoopDelay);
        assert!(matches!(result, Err(Error::InvalidConfig)));
        i2c.clone().done();
    }

    #[test]
    fn i2c_init_sequence_matches_handshake() {
        let expectations = [
            vread(0x00, 0x40),
            vread(0x01, 0x3E),
            vwrite(0x04, 0x80),
            vwrite(0x04, 0b0011_1000),
            vwrite(0x05, 36),
            vwrite(0x07, 0b0001_0101),
        ]
        .concat();
        let i2c = I2cMock::new(&expectations);

        let device = As7262::create_i2c(i2c, Config::default(), &mut NoopDelay).unwrap();
        let (mut i2c, config) = device.release_i2c();
        assert_eq!(config, Config::default());
        i2c.done();
    }

    #[test]
    fn failed_update_keeps_configuration() {
        let expectations = [
            vread(0x04, 0b0011_1000),
            vec![I2cTransaction::write_read(0x49, vec![0x00], vec![0x00])
                .with_error(ErrorKind::Other)],
        ]
        .concat();
        let mut device = As7262::new_i2c(I2cMock::new(&expectations), Config::default());

        assert_eq!(
            device.set_gain(Gain::X1),
            Err(Error::Interface(ErrorKind::Other))
        );
        assert_eq!(device.gain(), Gain::X64);

        let (mut i2c, _) = device.release_i2c();
        i2c.done();
    }

    #[test]
    fn poll_limit_is_applied_to_the_handshake() {
        let mut sensor = SimulatedSensor::new();
        sensor.busy_polls = 5;
        let mut device = As7262::new(sensor, Config::default());

        device.set_poll_limit(PollLimit::Attempts(3)).unwrap();
        assert_eq!(device.config().poll_limit, PollLimit::Attempts(3));
        // Freshly built sensor is idle, so the address goes out; read-ready then lags.
        assert_eq!(device.read_temperature(), Err(Error::Timeout));

        device.set_poll_limit(PollLimit::Unbounded).unwrap();
        device.interface_mut().latch = None;
        device.interface_mut().countdown = 0;
        assert_eq!(device.read_temperature(), Ok(27));
    }

    #[test]
    fn zero_poll_limit_is_rejected_and_previous_bound_kept() {
        let mut device = As7262::new(SimulatedSensor::new(), Config::default());
        device.set_poll_limit(PollLimit::Attempts(4)).unwrap();

        assert_eq!(
            device.set_poll_limit(PollLimit::Attempts(0)),
            Err(ConfigError::ZeroPollLimit)
        );
        assert_eq!(device.config().poll_limit, PollLimit::Attempts(4));
        assert!(device.config().validate().is_ok());

        // The retained bound of four polls still outlasts two busy polls.
        assert_eq!(device.read_temperature(), Ok(27));
    }

    #[test]
    fn temperature_is_read_as_signed_celsius() {
        let mut device = initialized(Config::default());

        device.interface_mut().registers[0x06] = 0xF6;
        assert_eq!(device.read_temperature().unwrap(), -10);

        device.interface_mut().registers[0x06] = 0x80;
        assert_eq!(device.read_temperature().unwrap(), -128);

        device.interface_mut().registers[0x06] = 0x7F;
        assert_eq!(device.read_temperature().unwrap(), 127);
    }
}
