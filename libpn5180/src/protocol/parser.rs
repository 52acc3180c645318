// libpn5180/src/protocol/parser.rs

use crate::constants::DOWNLOAD_LEN_HI_MASK;
use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Read a big-endian u16 at given index, with bounds checking.
pub fn be_u16_at(data: &[u8], idx: usize) -> Result<u16> {
    ensure_len(data, idx + 2)?;
    Ok(u16::from_be_bytes([data[idx], data[idx + 1]]))
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Decode the 10-bit length of a download-mode header starting at `idx`.
/// Bits above the low two of the first byte are flags and are ignored.
pub fn header_len_at(data: &[u8], idx: usize) -> Result<usize> {
    let hi = byte_at(data, idx)? & DOWNLOAD_LEN_HI_MASK;
    let lo = byte_at(data, idx + 1)?;
    Ok(((hi as usize) << 8) | lo as usize)
}

/// Encode a 10-bit length into header bytes, keeping `flags` in the upper
/// six bits of the first byte.
pub fn encode_header_len(len: usize, flags: u8) -> Result<[u8; 2]> {
    if len > crate::constants::DOWNLOAD_MAX_PAYLOAD_LEN {
        return Err(Error::InvalidLength {
            expected: crate::constants::DOWNLOAD_MAX_PAYLOAD_LEN,
            actual: len,
        });
    }
    Ok([
        (flags & !DOWNLOAD_LEN_HI_MASK) | ((len >> 8) as u8 & DOWNLOAD_LEN_HI_MASK),
        len as u8,
    ])
}
