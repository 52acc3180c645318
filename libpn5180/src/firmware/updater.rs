// libpn5180/src/firmware/updater.rs

use log::{debug, info, warn};

use crate::constants::{CHUNK_STATUS_LEN, DOWNLOAD_CMD_WRITE, VERSION_RESPONSE_LEN};
use crate::firmware::image::FirmwareImage;
use crate::firmware::status::UploadOutcome;
use crate::protocol::Command;
use crate::protocol::responses::{decode_chunk_status, decode_version};
use crate::transport::{Bus, DownloadTransport};
use crate::types::FirmwareVersion;
use crate::Result;

/// RST low time when entering download mode (at least 10 us required)
pub const RESET_PULSE_MS: u32 = 10;

/// Time for the chip to come up after reset (2 ms required)
pub const RESET_RAMP_UP_MS: u32 = 100;

/// Result of a full update session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpdateReport {
    /// Version running on the chip before the upload.
    pub running: FirmwareVersion,
    /// Version carried by the uploaded image.
    pub image: FirmwareVersion,
    pub outcome: UploadOutcome,
    /// Chunks acknowledged with a zero status.
    pub chunks_sent: usize,
}

/// Drives a PN5180 secure firmware update over a [`DownloadTransport`].
pub struct FirmwareUpdater<B: Bus> {
    transport: DownloadTransport<B>,
    chunks_sent: usize,
}

impl<B: Bus> FirmwareUpdater<B> {
    pub fn new(transport: DownloadTransport<B>) -> Self {
        Self {
            transport,
            chunks_sent: 0,
        }
    }

    pub fn transport(&self) -> &DownloadTransport<B> {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut DownloadTransport<B> {
        &mut self.transport
    }

    pub fn into_transport(self) -> DownloadTransport<B> {
        self.transport
    }

    /// Chunks acknowledged by the last call to [`upload`](Self::upload).
    pub fn chunks_sent(&self) -> usize {
        self.chunks_sent
    }

    /// Reset the chip with REQ held high so it boots into download mode.
    pub fn enter_download_mode(&mut self) -> Result<()> {
        info!("switching to download mode");
        let bus = self.transport.bus_mut();
        bus.set_request(true)?;
        bus.set_reset(false)?;
        bus.delay_ms(RESET_PULSE_MS);
        bus.set_reset(true)?;
        bus.delay_ms(RESET_RAMP_UP_MS);
        bus.set_request(false)
    }

    /// Reset the chip with REQ low so it boots the (new) firmware.
    pub fn reset_chip(&mut self) -> Result<()> {
        let bus = self.transport.bus_mut();
        bus.set_request(false)?;
        bus.set_reset(false)?;
        bus.delay_ms(RESET_PULSE_MS);
        bus.set_reset(true)?;
        bus.delay_ms(RESET_RAMP_UP_MS);
        Ok(())
    }

    /// Query the firmware version running on the chip.
    pub fn firmware_version(&mut self) -> Result<FirmwareVersion> {
        let mut res = [0u8; VERSION_RESPONSE_LEN];
        let n = self.transport.exchange(&Command::GetVersion.encode(), &mut res)?;
        decode_version(&res[..n])
    }

    /// Upload every chunk of `image`, stopping at the first failure.
    ///
    /// Device status codes and chunks with a foreign command code end the
    /// upload with the matching [`UploadOutcome`]; transport failures are
    /// returned as errors. Nothing is retried.
    pub fn upload(&mut self, image: &FirmwareImage<'_>) -> Result<UploadOutcome> {
        self.chunks_sent = 0;
        info!("updating firmware to v{} ({} bytes)", image.version(), image.len());

        for chunk in image.chunks() {
            let chunk = chunk?;

            if chunk.command() != DOWNLOAD_CMD_WRITE {
                warn!(
                    "invalid command code {:#04x} in image at offset {}",
                    chunk.command(),
                    chunk.offset
                );
                return Ok(UploadOutcome::MagicMismatch);
            }

            let mut res = [0u8; CHUNK_STATUS_LEN];
            let n = self.transport.exchange(chunk.raw, &mut res)?;
            let status = decode_chunk_status(&res[..n])?;
            if !status.is_ok() {
                warn!(
                    "chip rejected chunk at offset {}: {} ({:#04x})",
                    chunk.offset,
                    status,
                    status.code()
                );
                return Ok(UploadOutcome::Device(status));
            }

            self.chunks_sent += 1;
            debug!(
                "chunk {} accepted ({} of {} bytes)",
                self.chunks_sent,
                chunk.offset + chunk.raw.len(),
                image.len()
            );
        }

        info!("firmware upload done ({} chunks)", self.chunks_sent);
        Ok(UploadOutcome::Success)
    }

    /// Full session: enter download mode, read the running version,
    /// validate `image` and upload it. Validation failures end the session
    /// before anything is sent to the chip.
    pub fn update(&mut self, image: &[u8]) -> Result<UpdateReport> {
        self.enter_download_mode()?;

        let running = self.firmware_version()?;
        info!("current PN5180 firmware: v{}", running);

        let image = FirmwareImage::parse(image).inspect_err(|e| {
            warn!("firmware image rejected: {}", e);
        })?;
        info!("image PN5180 firmware: v{}", image.version());

        let outcome = self.upload(&image)?;
        Ok(UpdateReport {
            running,
            image: image.version(),
            outcome,
            chunks_sent: self.chunks_sent,
        })
    }
}
