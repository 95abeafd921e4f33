//! Virtual register access for the AS7262.
//!
//! The device only exposes `STATUS`, `WRITE` and `READ` on the bus. Every other
//! register is reached through a handshake on those three:
//!
//! * read: wait for `WRITE` to drain, post the virtual address, wait for
//!   `READ` to fill, fetch the byte.
//! * write: wait for `WRITE` to drain, post the address with bit 7 set, wait for
//!   it to drain again, post the value.
//!
//! Multi-byte quantities are stored most significant byte first at consecutive
//! virtual addresses.

use crate::config::PollLimit;
use crate::error::{Error, Result};
use crate::interface::As7262Interface;
use crate::registers::{Register, Status, REG_READ, REG_STATUS, REG_WRITE, VIRTUAL_WRITE_FLAG};

/// Handshake engine turning the physical registers into a virtual register file.
pub struct VirtualRegisters<IFACE> {
    interface: IFACE,
    poll_limit: PollLimit,
}

impl<IFACE> VirtualRegisters<IFACE> {
    /// Wraps a bus interface.
    pub const fn new(interface: IFACE, poll_limit: PollLimit) -> Self {
        Self {
            interface,
            poll_limit,
        }
    }

    /// Returns the active polling bound.
    pub fn poll_limit(&self) -> PollLimit {
        self.poll_limit
    }

    /// Changes the polling bound used by subsequent accesses.
    pub fn set_poll_limit(&mut self, poll_limit: PollLimit) {
        self.poll_limit = poll_limit;
    }

    /// Provides mutable access to the underlying interface.
    pub fn interface_mut(&mut self) -> &mut IFACE {
        &mut self.interface
    }

    /// Consumes the engine and returns the owned interface.
    pub fn release(self) -> IFACE {
        self.interface
    }
}

impl<IFACE, CommE> VirtualRegisters<IFACE>
where
    IFACE: As7262Interface<Error = CommE>,
{
    /// Reads one virtual register.
    pub fn read(&mut self, address: u8) -> Result<u8, CommE> {
        self.wait_for(|status| !status.write_pending())?;
        self.interface.write_register(REG_WRITE, address)?;
        self.wait_for(|status| status.read_ready())?;
        let value = self.interface.read_register(REG_READ)?;

        trace!("vreg read {=u8:#x} -> {=u8:#x}", address, value);
        Ok(value)
    }

    /// Writes one virtual register.
    pub fn write(&mut self, address: u8, value: u8) -> Result<(), CommE> {
        self.wait_for(|status| !status.write_pending())?;
        self.interface
            .write_register(REG_WRITE, address | VIRTUAL_WRITE_FLAG)?;
        self.wait_for(|status| !status.write_pending())?;
        self.interface.write_register(REG_WRITE, value)?;

        trace!("vreg write {=u8:#x} <- {=u8:#x}", address, value);
        Ok(())
    }

    /// Fills `buf` from consecutive virtual registers starting at `address`.
    pub fn read_into(&mut self, address: u8, buf: &mut [u8]) -> Result<(), CommE> {
        for (offset, byte) in buf.iter_mut().enumerate() {
            *byte = self.read(address.wrapping_add(offset as u8))?;
        }
        Ok(())
    }

    /// Reads a big-endian 16-bit value.
    pub fn read_u16(&mut self, address: u8) -> Result<u16, CommE> {
        let mut raw = [0u8; 2];
        self.read_into(address, &mut raw)?;
        Ok(u16::from_be_bytes(raw))
    }

    /// Reads a big-endian 32-bit value.
    pub fn read_u32(&mut self, address: u8) -> Result<u32, CommE> {
        let mut raw = [0u8; 4];
        self.read_into(address, &mut raw)?;
        Ok(u32::from_be_bytes(raw))
    }

    /// Reads a big-endian IEEE-754 single precision value.
    pub fn read_f32(&mut self, address: u8) -> Result<f32, CommE> {
        self.read_u32(address).map(f32::from_bits)
    }

    /// Reads a typed register.
    pub fn read_register<R: Register>(&mut self) -> Result<R, CommE> {
        self.read(R::ADDRESS).map(R::from)
    }

    /// Writes a typed register.
    pub fn write_register<R: Register>(&mut self, value: R) -> Result<(), CommE> {
        self.write(R::ADDRESS, value.into())
    }

    /// Read-modify-write of a typed register. Untouched fields are written back as read.
    pub fn modify<R, F>(&mut self, mutate: F) -> Result<R, CommE>
    where
        R: Register,
        F: FnOnce(&mut R),
    {
        let mut value = self.read_register::<R>()?;
        mutate(&mut value);
        self.write_register(value)?;
        Ok(value)
    }

    fn wait_for<F>(&mut self, ready: F) -> Result<(), CommE>
    where
        F: Fn(Status) -> bool,
    {
        let mut attempts: u32 = 0;
        loop {
            let status = Status::from(self.interface.read_register(REG_STATUS)?);
            if ready(status) {
                return Ok(());
            }

            attempts = attempts.saturating_add(1);
            if let PollLimit::Attempts(limit) = self.poll_limit
                && attempts >= limit
            {
                warn!("handshake gave up after {=u32} status polls", attempts);
                return Err(Error::Timeout);
            }
        }
    }
}
