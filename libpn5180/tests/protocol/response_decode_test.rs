#[path = "../common/mod.rs"]
mod common;

use libpn5180::firmware::DownloadStatus;
use libpn5180::protocol::responses::{decode_chunk_status, decode_version};
use libpn5180::{Error, FirmwareVersion};

#[test]
fn version_payload() {
    let mut payload = [0u8; 10];
    payload[8] = 0x05;
    payload[9] = 0x03;
    assert_eq!(decode_version(&payload).unwrap(), FirmwareVersion::new(3, 5));
}

#[test]
fn version_with_error_status() {
    let mut payload = [0u8; 10];
    payload[0] = 0x0B;
    assert!(matches!(
        decode_version(&payload),
        Err(Error::Download(DownloadStatus::UnknownCommand))
    ));
}

#[test]
fn short_version_payload() {
    assert!(matches!(
        decode_version(&[0x00; 4]),
        Err(Error::InvalidLength { .. })
    ));
}

#[test]
fn chunk_status_codes() {
    assert_eq!(decode_chunk_status(&[0x00, 0, 0, 0]).unwrap(), DownloadStatus::Ok);
    assert_eq!(
        decode_chunk_status(&[0x21, 0, 0, 0]).unwrap(),
        DownloadStatus::SignatureError
    );
    assert_eq!(
        decode_chunk_status(&[0x77, 0, 0, 0]).unwrap(),
        DownloadStatus::Other(0x77)
    );
}
