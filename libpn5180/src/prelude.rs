// libpn5180/src/prelude.rs

pub use crate::firmware::{
    DownloadStatus, FirmwareImage, FirmwareUpdater, UpdateReport, UploadOutcome, check_image,
};
pub use crate::ndef::{NdefReader, TextRecord};
pub use crate::tag::{BlockCursor, ByteSource, TagReader};
pub use crate::transport::{Bus, DownloadTransport, TransportConfig};
pub use crate::{Error, FirmwareVersion, Result, SystemInfo, TagUid};

pub use crate::utils::{CancelToken, bytes_to_hex, bytes_to_hex_spaced, ms, parse_hex};
