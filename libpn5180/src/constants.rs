// libpn5180/src/constants.rs
//! Common protocol constants used across the crate

/// Direction marker for host -> chip download-mode frames
pub const DOWNLOAD_SEND: u8 = 0x7F;

/// Direction marker for chip -> host download-mode frames
pub const DOWNLOAD_RECV: u8 = 0xFF;

/// Filler byte clocked out while reading a response
pub const DOWNLOAD_FILL: u8 = 0xFF;

/// Download command: query the running firmware version
pub const DOWNLOAD_CMD_GET_VERSION: u8 = 0xF1;

/// Download command carried by every chunk of a secure firmware image
pub const DOWNLOAD_CMD_WRITE: u8 = 0xC0;

/// Length header (2) of a download frame; the low 2 bits of the first byte
/// and all of the second byte form a 10-bit payload length.
pub const DOWNLOAD_HEADER_LEN: usize = 2;

/// Mask applied to the first header byte to get the high length bits.
pub const DOWNLOAD_LEN_HI_MASK: u8 = 0x03;

/// Largest payload expressible by the 10-bit length field
pub const DOWNLOAD_MAX_PAYLOAD_LEN: usize = 0x3FF;

/// Largest response envelope: marker(1) + header(2) + payload + crc(2)
pub const DOWNLOAD_MAX_FRAME_LEN: usize = 1 + DOWNLOAD_HEADER_LEN + DOWNLOAD_MAX_PAYLOAD_LEN + 2;

/// Minimal response envelope: marker(1) + header(2) + crc(2)
pub const DOWNLOAD_MIN_FRAME_LEN: usize = 5;

/// Signature at the start of every PN5180 secure firmware image
pub const FIRMWARE_MAGIC: [u8; 4] = [0x00, 0xE4, 0xC0, 0x00];

/// Images below this size are rejected
pub const FIRMWARE_MIN_LEN: usize = 1024;

/// Image offsets holding the version bytes
pub const FIRMWARE_MAJOR_OFFSET: usize = 5;
pub const FIRMWARE_MINOR_OFFSET: usize = 4;

/// Status response length for an uploaded chunk
pub const CHUNK_STATUS_LEN: usize = 4;

/// Get-version response length and version offsets within it
pub const VERSION_RESPONSE_LEN: usize = 10;
pub const VERSION_MAJOR_OFFSET: usize = 9;
pub const VERSION_MINOR_OFFSET: usize = 8;

/// Largest ISO15693 block buffer
pub const MAX_BLOCK_SIZE: usize = 256;

/// Type 5 capability container magic (an invalid NDEF header, so the two
/// cannot be confused)
pub const NDEF_CC_MAGIC: u8 = 0xE1;

/// Capability container version lives in the high nibble
pub const NDEF_CC_VERSION_MASK: u8 = 0xF0;
pub const NDEF_CC_VERSION: u8 = 0x40;

/// TLV type of an NDEF message
pub const TLV_NDEF_MESSAGE: u8 = 0x03;

/// Well-known record type for text
pub const NDEF_RTD_TEXT: u8 = b'T';
// libpn5180/src/constants.rs
