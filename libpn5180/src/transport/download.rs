// libpn5180/src/transport/download.rs

use log::{debug, warn};

use crate::constants::{DOWNLOAD_FILL, DOWNLOAD_MAX_FRAME_LEN, DOWNLOAD_RECV, DOWNLOAD_SEND};
use crate::protocol::{Frame, crc16_be_bytes};
use crate::transport::config::TransportConfig;
use crate::transport::traits::Bus;
use crate::utils::{CancelToken, Deadline, bytes_to_hex_spaced};
use crate::{Error, Result};

/// Half-duplex frame transport for PN5180 download mode.
///
/// Each call to [`exchange`](Self::exchange) sends one request frame and,
/// if the caller provides room for it, reads one response frame. Nothing is
/// retried; the first failure is returned.
pub struct DownloadTransport<B: Bus> {
    bus: B,
    config: TransportConfig,
    cancel: CancelToken,
}

impl<B: Bus> DownloadTransport<B> {
    pub fn new(bus: B) -> Self {
        Self::with_config(bus, TransportConfig::default())
    }

    pub fn with_config(bus: B, config: TransportConfig) -> Self {
        Self {
            bus,
            config,
            cancel: CancelToken::new(),
        }
    }

    /// Use `token` to abort busy waits from elsewhere.
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    pub fn into_inner(self) -> B {
        self.bus
    }

    /// Send `request` (length header + body) and read the response payload
    /// into `response`.
    ///
    /// An empty `response` makes the exchange write-only. Otherwise at most
    /// `response.len()` payload bytes are copied and the number copied is
    /// returned.
    pub fn exchange(&mut self, request: &[u8], response: &mut [u8]) -> Result<usize> {
        let crc = crc16_be_bytes(request);
        debug!(
            "download tx: {:02X} {} {}",
            DOWNLOAD_SEND,
            bytes_to_hex_spaced(request),
            bytes_to_hex_spaced(&crc)
        );

        self.wait_for_busy(false, Deadline::after(self.config.ready_timeout))?;

        self.bus.select()?;
        self.bus.delay_ms(self.config.select_settle_ms);
        let written = self.write_request(request, &crc);
        let released = self.release();
        written?;
        released?;

        if response.is_empty() {
            return Ok(0);
        }

        self.wait_for_busy(true, Deadline::after(self.config.response_timeout))?;

        let mut raw = [0u8; DOWNLOAD_MAX_FRAME_LEN];
        self.bus.select()?;
        self.bus.delay_ms(self.config.select_settle_ms);
        let read = self.read_response(&mut raw);
        let released = self.release();
        let read = read?;
        released?;

        debug!("download rx: {}", bytes_to_hex_spaced(&raw[..read]));

        let payload = Frame::decode_response(&raw[..read]).inspect_err(|e| {
            warn!("download response rejected: {}", e);
        })?;

        let n = payload.len().min(response.len());
        response[..n].copy_from_slice(&payload[..n]);
        Ok(n)
    }

    /// Write-only exchange.
    pub fn send(&mut self, request: &[u8]) -> Result<()> {
        self.exchange(request, &mut []).map(|_| ())
    }

    fn write_request(&mut self, request: &[u8], crc: &[u8; 2]) -> Result<()> {
        self.bus.transfer(DOWNLOAD_SEND)?;
        self.bus.write(request)?;
        self.bus.write(crc)
    }

    /// Clock the response out while BUSY stays high. Returns the number of
    /// bytes stored in `raw`, marker included.
    fn read_response(&mut self, raw: &mut [u8]) -> Result<usize> {
        let marker = self.bus.transfer(DOWNLOAD_FILL)?;
        if marker != DOWNLOAD_RECV {
            warn!("unexpected direction marker {:#04x}", marker);
            return Err(Error::UnexpectedDirection {
                expected: DOWNLOAD_RECV,
                actual: marker,
            });
        }
        raw[0] = marker;

        let mut read = 1usize;
        while self.bus.is_busy()? {
            if read == raw.len() {
                return Err(Error::FrameFormat(format!(
                    "response exceeds {} bytes",
                    raw.len()
                )));
            }
            raw[read] = self.bus.transfer(DOWNLOAD_FILL)?;
            read += 1;
        }
        Ok(read)
    }

    fn release(&mut self) -> Result<()> {
        self.bus.deselect()?;
        self.bus.delay_ms(self.config.deselect_settle_ms);
        Ok(())
    }

    fn wait_for_busy(&mut self, busy: bool, deadline: Deadline) -> Result<()> {
        loop {
            if self.cancel.is_cancelled() {
                return Err(Error::Cancelled);
            }
            if self.bus.is_busy()? == busy {
                return Ok(());
            }
            if deadline.expired() {
                warn!(
                    "timed out waiting for BUSY {}",
                    if busy { "high" } else { "low" }
                );
                return Err(Error::Timeout);
            }
            std::hint::spin_loop();
        }
    }
}
