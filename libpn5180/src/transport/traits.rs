// libpn5180/src/transport/traits.rs

use crate::Result;

/// Bus abstracts the PN5180 hardware lines away from the download protocol.
///
/// The chip shares one SPI channel for both directions and paces it with a
/// BUSY line: low means a request may be clocked in, high means a response
/// is ready (and stays high until its last byte has been read).
pub trait Bus {
    /// Sample the BUSY line.
    fn is_busy(&mut self) -> Result<bool>;

    /// Assert chip-select (NSS low).
    fn select(&mut self) -> Result<()>;

    /// Release chip-select (NSS high).
    fn deselect(&mut self) -> Result<()>;

    /// Clock one byte out and return the byte clocked in.
    fn transfer(&mut self, byte: u8) -> Result<u8>;

    /// Drive the download-request line (REQ).
    fn set_request(&mut self, high: bool) -> Result<()>;

    /// Drive the reset line (RST, active low).
    fn set_reset(&mut self, high: bool) -> Result<()>;

    /// Block for `ms` milliseconds.
    fn delay_ms(&mut self, ms: u32);

    /// Clock out a run of bytes, discarding what comes back. Default
    /// implementation calls `transfer` byte by byte.
    fn write(&mut self, data: &[u8]) -> Result<()> {
        for &b in data {
            self.transfer(b)?;
        }
        Ok(())
    }
}

impl<B: Bus + ?Sized> Bus for &mut B {
    fn is_busy(&mut self) -> Result<bool> {
        (**self).is_busy()
    }
    fn select(&mut self) -> Result<()> {
        (**self).select()
    }
    fn deselect(&mut self) -> Result<()> {
        (**self).deselect()
    }
    fn transfer(&mut self, byte: u8) -> Result<u8> {
        (**self).transfer(byte)
    }
    fn set_request(&mut self, high: bool) -> Result<()> {
        (**self).set_request(high)
    }
    fn set_reset(&mut self, high: bool) -> Result<()> {
        (**self).set_reset(high)
    }
    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms)
    }
    fn write(&mut self, data: &[u8]) -> Result<()> {
        (**self).write(data)
    }
}
