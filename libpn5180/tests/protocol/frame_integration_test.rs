#[path = "../common/mod.rs"]
mod common;

use libpn5180::protocol::{Frame, crc16_be_bytes};
use libpn5180::Error;

#[test]
fn request_frame_layout() {
    let frame = Frame::encode_request(&[0x00, 0x04, 0xF1, 0x00, 0x00, 0x00]);
    assert_eq!(
        frame,
        vec![0x7F, 0x00, 0x04, 0xF1, 0x00, 0x00, 0x00, 0x6E, 0xEF]
    );
}

#[test]
fn response_roundtrip_through_hex() {
    let raw = Frame::encode_response(&[0x00, 0x00, 0x00, 0x00]).unwrap();
    let text = hex::encode(&raw);
    assert!(text.starts_with("ff0004"));
    let parsed = hex::decode(text).unwrap();
    assert_eq!(Frame::decode_response(&parsed).unwrap(), &[0, 0, 0, 0]);
}

#[test]
fn response_with_high_length_bits() {
    let payload = vec![0x5Au8; 0x123];
    let raw = Frame::encode_response(&payload).unwrap();
    assert_eq!(&raw[..3], &[0xFF, 0x01, 0x23]);
    assert_eq!(Frame::decode_response(&raw).unwrap(), payload.as_slice());
}

#[test]
fn corrupted_crc_detected() {
    let mut raw = Frame::encode_response(&[0x00, 0x00, 0x00, 0x00]).unwrap();
    let last = raw.len() - 1;
    raw[last] ^= 0x01;
    assert!(matches!(
        Frame::decode_response(&raw),
        Err(Error::ChecksumMismatch { .. })
    ));
}

#[test]
fn trailing_bytes_rejected() {
    let mut raw = Frame::encode_response(&[0x2A]).unwrap();
    raw.push(0xFF);
    assert!(matches!(
        Frame::decode_response(&raw),
        Err(Error::InvalidLength { .. })
    ));
}

#[test]
fn wrong_marker_rejected() {
    let mut raw = vec![0x7F, 0x00, 0x01, 0x00];
    let crc = crc16_be_bytes(&raw[1..]);
    raw.extend_from_slice(&crc);
    assert!(matches!(
        Frame::decode_response(&raw),
        Err(Error::UnexpectedDirection { expected: 0xFF, actual: 0x7F })
    ));
}
