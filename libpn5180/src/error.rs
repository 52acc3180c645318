// libpn5180/src/error.rs

use thiserror::Error;

use crate::firmware::DownloadStatus;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// A hardware primitive (SPI transfer, GPIO read/write) failed.
    #[error("bus error: {0}")]
    Bus(String),

    #[error("operation timed out")]
    Timeout,

    #[error("operation cancelled")]
    Cancelled,

    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("crc16 mismatch: expected {expected:#06x}, got {actual:#06x}")]
    ChecksumMismatch { expected: u16, actual: u16 },

    #[error("unexpected frame direction: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedDirection { expected: u8, actual: u8 },

    #[error("frame format error: {0}")]
    FrameFormat(String),

    #[error("download command failed: {0}")]
    Download(DownloadStatus),

    #[error("firmware image too small: {len} bytes (minimum {min})")]
    ImageTooSmall { len: usize, min: usize },

    #[error("firmware image magic mismatch: found {found:02x?}")]
    ImageMagicMismatch { found: [u8; 4] },

    #[error("tag error: status={0:#04x}")]
    TagStatus(u8),

    #[error("tlv format error: unsupported version {version:#04x}")]
    TlvFormat { version: u8 },

    #[error("ndef format error: {0}")]
    NdefFormat(String),

    #[error("no more tag data")]
    EndOfData,
}

impl Error {
    /// True when the tag simply has no (more) data, as opposed to a hard
    /// failure. Decoders use this to report "no NDEF message present".
    pub fn is_end_of_data(&self) -> bool {
        matches!(self, Error::EndOfData)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
