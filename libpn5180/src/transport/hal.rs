// libpn5180/src/transport/hal.rs

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::spi::SpiBus;

use crate::transport::traits::Bus;
use crate::{Error, Result};

/// Bus built from `embedded-hal` 1.0 peripherals.
///
/// NSS is driven manually (not through `SpiDevice`) because the download
/// protocol keeps the chip selected while it polls BUSY between bytes.
pub struct HalBus<SPI, NSS, BUSY, REQ, RST, D> {
    spi: SPI,
    nss: NSS,
    busy: BUSY,
    req: REQ,
    rst: RST,
    delay: D,
}

impl<SPI, NSS, BUSY, REQ, RST, D> HalBus<SPI, NSS, BUSY, REQ, RST, D>
where
    SPI: SpiBus<u8>,
    NSS: OutputPin,
    BUSY: InputPin,
    REQ: OutputPin,
    RST: OutputPin,
    D: DelayNs,
{
    pub fn new(spi: SPI, nss: NSS, busy: BUSY, req: REQ, rst: RST, delay: D) -> Self {
        Self {
            spi,
            nss,
            busy,
            req,
            rst,
            delay,
        }
    }

    pub fn release(self) -> (SPI, NSS, BUSY, REQ, RST, D) {
        (self.spi, self.nss, self.busy, self.req, self.rst, self.delay)
    }
}

fn pin_err<E: embedded_hal::digital::Error>(e: E) -> Error {
    Error::Bus(format!("gpio: {:?}", e.kind()))
}

fn spi_err<E: embedded_hal::spi::Error>(e: E) -> Error {
    Error::Bus(format!("spi: {:?}", e.kind()))
}

fn drive<P: OutputPin>(pin: &mut P, high: bool) -> Result<()> {
    if high {
        pin.set_high().map_err(pin_err)
    } else {
        pin.set_low().map_err(pin_err)
    }
}

impl<SPI, NSS, BUSY, REQ, RST, D> Bus for HalBus<SPI, NSS, BUSY, REQ, RST, D>
where
    SPI: SpiBus<u8>,
    NSS: OutputPin,
    BUSY: InputPin,
    REQ: OutputPin,
    RST: OutputPin,
    D: DelayNs,
{
    fn is_busy(&mut self) -> Result<bool> {
        self.busy.is_high().map_err(pin_err)
    }

    fn select(&mut self) -> Result<()> {
        drive(&mut self.nss, false)
    }

    fn deselect(&mut self) -> Result<()> {
        self.spi.flush().map_err(spi_err)?;
        drive(&mut self.nss, true)
    }

    fn transfer(&mut self, byte: u8) -> Result<u8> {
        let mut buf = [byte];
        self.spi.transfer_in_place(&mut buf).map_err(spi_err)?;
        self.spi.flush().map_err(spi_err)?;
        Ok(buf[0])
    }

    fn set_request(&mut self, high: bool) -> Result<()> {
        drive(&mut self.req, high)
    }

    fn set_reset(&mut self, high: bool) -> Result<()> {
        drive(&mut self.rst, high)
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    fn write(&mut self, data: &[u8]) -> Result<()> {
        self.spi.write(data).map_err(spi_err)?;
        self.spi.flush().map_err(spi_err)
    }
}
