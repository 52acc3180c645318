// libpn5180/src/protocol/frame.rs

use crate::constants::{
    DOWNLOAD_HEADER_LEN, DOWNLOAD_MAX_PAYLOAD_LEN, DOWNLOAD_MIN_FRAME_LEN, DOWNLOAD_RECV,
    DOWNLOAD_SEND,
};
use crate::protocol::checksum::{crc16, crc16_be_bytes};
use crate::protocol::parser::{be_u16_at, byte_at, encode_header_len, ensure_len, header_len_at};
use crate::{Error, Result};

/// Download-mode frame helper.
///
/// Request:  [SEND(0x7F)] [Header(2) + Body(n)] [CRC16(2, BE)]
/// Response: [RECV(0xFF)] [Header(2)] [Payload(len)] [CRC16(2, BE)]
///
/// The request CRC covers everything between the marker and the CRC. The
/// response CRC covers the 2-byte header and the payload.
pub struct Frame;

impl Frame {
    /// Encode a request (header + body, as found in an image chunk) into a
    /// full wire frame.
    pub fn encode_request(request: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(1 + request.len() + 2);
        out.push(DOWNLOAD_SEND);
        out.extend_from_slice(request);
        out.extend_from_slice(&crc16_be_bytes(request));
        out
    }

    /// Encode a response envelope as the chip would clock it out. Mostly
    /// useful for simulated chips and tests.
    pub fn encode_response(payload: &[u8]) -> Result<Vec<u8>> {
        if payload.len() > DOWNLOAD_MAX_PAYLOAD_LEN {
            return Err(Error::InvalidLength {
                expected: DOWNLOAD_MAX_PAYLOAD_LEN,
                actual: payload.len(),
            });
        }

        let mut out = Vec::with_capacity(DOWNLOAD_MIN_FRAME_LEN + payload.len());
        out.push(DOWNLOAD_RECV);
        out.extend_from_slice(&encode_header_len(payload.len(), 0)?);
        out.extend_from_slice(payload);
        let crc = crc16_be_bytes(&out[1..]);
        out.extend_from_slice(&crc);
        Ok(out)
    }

    /// Validate a raw response envelope and return its payload.
    pub fn decode_response(frame: &[u8]) -> Result<&[u8]> {
        let marker = byte_at(frame, 0)?;
        if marker != DOWNLOAD_RECV {
            return Err(Error::UnexpectedDirection {
                expected: DOWNLOAD_RECV,
                actual: marker,
            });
        }

        ensure_len(frame, DOWNLOAD_MIN_FRAME_LEN)?;
        let len = header_len_at(frame, 1)?;

        // The chip releases BUSY exactly at the end of the frame.
        let required_len = DOWNLOAD_MIN_FRAME_LEN + len;
        if frame.len() != required_len {
            return Err(Error::InvalidLength {
                expected: required_len,
                actual: frame.len(),
            });
        }

        let payload_start = 1 + DOWNLOAD_HEADER_LEN;
        let payload_end = payload_start + len;

        let crc_actual = be_u16_at(frame, payload_end)?;
        let crc_expected = crc16(&frame[1..payload_end]);
        if crc_actual != crc_expected {
            return Err(Error::ChecksumMismatch {
                expected: crc_expected,
                actual: crc_actual,
            });
        }

        Ok(&frame[payload_start..payload_end])
    }
}
