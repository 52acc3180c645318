//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize building simulated chip responses, firmware
//! images and tag memory so tests across the crate and tests/ directory can
//! reuse the same logic.
#![allow(dead_code)]

use crate::constants::{DOWNLOAD_CMD_WRITE, FIRMWARE_MAGIC, VERSION_RESPONSE_LEN};
use crate::protocol::Frame;
use crate::protocol::parser::encode_header_len;
use crate::transport::{Bus, DownloadTransport, TransportConfig};
use crate::types::FirmwareVersion;
use crate::utils::ms;

/// Response envelope for a chunk write with the given status byte.
#[doc(hidden)]
pub fn status_response(status: u8) -> Vec<u8> {
    Frame::encode_response(&[status, 0x00, 0x00, 0x00])
        .unwrap_or_else(|e| panic!("status response: {}", e))
}

/// Response envelope for a get-version query.
#[doc(hidden)]
pub fn version_response(version: FirmwareVersion) -> Vec<u8> {
    let mut payload = [0u8; VERSION_RESPONSE_LEN];
    payload[8] = version.minor;
    payload[9] = version.major;
    Frame::encode_response(&payload).unwrap_or_else(|e| panic!("version response: {}", e))
}

/// Build a firmware image: the signature chunk (body length 0xE4, carrying
/// `version`) followed by one chunk per entry of `body_lens`. Each body
/// length counts the command byte.
#[doc(hidden)]
pub fn build_image(version: FirmwareVersion, body_lens: &[usize]) -> Vec<u8> {
    let mut image = FIRMWARE_MAGIC.to_vec();
    image.push(version.minor);
    image.push(version.major);
    let first_len = 2 + FIRMWARE_MAGIC[1] as usize;
    while image.len() < first_len {
        image.push(image.len() as u8);
    }

    for &len in body_lens {
        let header = encode_header_len(len, 0).unwrap_or_else(|e| panic!("chunk: {}", e));
        image.extend_from_slice(&header);
        image.push(DOWNLOAD_CMD_WRITE);
        image.extend((1..len).map(|i| i as u8));
    }
    image
}

/// Download transport with short timeouts so hung-chip tests finish fast.
#[doc(hidden)]
pub fn fast_transport<B: Bus>(bus: B) -> DownloadTransport<B> {
    DownloadTransport::with_config(
        bus,
        TransportConfig::new()
            .with_ready_timeout(ms(20))
            .with_response_timeout(ms(20)),
    )
}

/// Type 5 tag memory: capability container + NDEF TLV wrapping `record`.
#[doc(hidden)]
pub fn tlv_wrapped(record: &[u8]) -> Vec<u8> {
    let mut mem = vec![0xE1, 0x40, 0x10, 0x00, 0x03, record.len() as u8];
    mem.extend_from_slice(record);
    mem.push(0xFE);
    mem
}

/// Short well-known text record (`MB|ME|SR`, TNF 1, type `T`).
#[doc(hidden)]
pub fn short_text_record(lang: &str, text: &str) -> Vec<u8> {
    let payload_len = 1 + lang.len() + text.len();
    let mut rec = vec![0xD1, 0x01, payload_len as u8, b'T', lang.len() as u8];
    rec.extend_from_slice(lang.as_bytes());
    rec.extend_from_slice(text.as_bytes());
    rec
}
