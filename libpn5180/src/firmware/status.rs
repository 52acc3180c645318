// libpn5180/src/firmware/status.rs

use derive_more::Display;

/// Status byte reported by the chip for a download-mode command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DownloadStatus {
    #[display(fmt = "ok")]
    Ok,
    #[display(fmt = "invalid address")]
    InvalidAddress,
    #[display(fmt = "generic error")]
    GenericError,
    #[display(fmt = "unknown command")]
    UnknownCommand,
    #[display(fmt = "aborted command")]
    AbortedCommand,
    #[display(fmt = "pll error")]
    PllError,
    #[display(fmt = "address range overflow")]
    AddressRangeOverflow,
    #[display(fmt = "buffer overflow")]
    BufferOverflow,
    #[display(fmt = "memory busy")]
    MemoryBusy,
    #[display(fmt = "signature error")]
    SignatureError,
    #[display(fmt = "firmware version error")]
    FirmwareVersionError,
    #[display(fmt = "protocol error")]
    ProtocolError,
    /// EEPROM content corrupted; the chip only accepts a firmware download.
    #[display(fmt = "sfwu degraded")]
    SfwuDegraded,
    #[display(fmt = "unknown status {:#04x}", _0)]
    Other(u8),
}

impl DownloadStatus {
    pub fn code(&self) -> u8 {
        match self {
            DownloadStatus::Ok => 0x00,
            DownloadStatus::InvalidAddress => 0x01,
            DownloadStatus::GenericError => 0x0A,
            DownloadStatus::UnknownCommand => 0x0B,
            DownloadStatus::AbortedCommand => 0x0C,
            DownloadStatus::PllError => 0x0D,
            DownloadStatus::AddressRangeOverflow => 0x1E,
            DownloadStatus::BufferOverflow => 0x1F,
            DownloadStatus::MemoryBusy => 0x20,
            DownloadStatus::SignatureError => 0x21,
            DownloadStatus::FirmwareVersionError => 0x24,
            DownloadStatus::ProtocolError => 0x28,
            DownloadStatus::SfwuDegraded => 0x2A,
            DownloadStatus::Other(code) => *code,
        }
    }

    pub fn is_ok(&self) -> bool {
        *self == DownloadStatus::Ok
    }
}

impl From<u8> for DownloadStatus {
    fn from(code: u8) -> Self {
        match code {
            0x00 => DownloadStatus::Ok,
            0x01 => DownloadStatus::InvalidAddress,
            0x0A => DownloadStatus::GenericError,
            0x0B => DownloadStatus::UnknownCommand,
            0x0C => DownloadStatus::AbortedCommand,
            0x0D => DownloadStatus::PllError,
            0x1E => DownloadStatus::AddressRangeOverflow,
            0x1F => DownloadStatus::BufferOverflow,
            0x20 => DownloadStatus::MemoryBusy,
            0x21 => DownloadStatus::SignatureError,
            0x24 => DownloadStatus::FirmwareVersionError,
            0x28 => DownloadStatus::ProtocolError,
            0x2A => DownloadStatus::SfwuDegraded,
            other => DownloadStatus::Other(other),
        }
    }
}

/// Terminal state of one upload attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UploadOutcome {
    #[display(fmt = "success")]
    Success,
    /// A chunk did not carry the write command code.
    #[display(fmt = "invalid command code in image")]
    MagicMismatch,
    /// The chip rejected a chunk.
    #[display(fmt = "device error: {}", _0)]
    Device(DownloadStatus),
}

impl UploadOutcome {
    pub fn is_success(&self) -> bool {
        *self == UploadOutcome::Success
    }
}
