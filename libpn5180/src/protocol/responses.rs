// libpn5180/src/protocol/responses.rs

use crate::constants::{VERSION_MAJOR_OFFSET, VERSION_MINOR_OFFSET, VERSION_RESPONSE_LEN};
use crate::firmware::DownloadStatus;
use crate::protocol::parser::{byte_at, ensure_len};
use crate::types::FirmwareVersion;
use crate::{Error, Result};

/// Status byte leading every download-mode response payload.
pub fn status_of(payload: &[u8]) -> Result<DownloadStatus> {
    Ok(DownloadStatus::from(byte_at(payload, 0)?))
}

/// Decode the payload of a chunk-write response.
pub fn decode_chunk_status(payload: &[u8]) -> Result<DownloadStatus> {
    // Only the status byte is meaningful; the rest is reserved.
    status_of(payload)
}

/// Decode the payload of a get-version response.
pub fn decode_version(payload: &[u8]) -> Result<FirmwareVersion> {
    let status = status_of(payload)?;
    if !status.is_ok() {
        return Err(Error::Download(status));
    }
    ensure_len(payload, VERSION_RESPONSE_LEN)?;
    Ok(FirmwareVersion::new(
        payload[VERSION_MAJOR_OFFSET],
        payload[VERSION_MINOR_OFFSET],
    ))
}
