// fixtures.rs: commonly used tag memory, images and chip responses

use libpn5180::test_support::{build_image, short_text_record, tlv_wrapped};
use libpn5180::types::{FirmwareVersion, TagUid};

pub fn sample_uid() -> TagUid {
    TagUid::from_bytes([0xE0, 0x04, 0x01, 0x50, 0x12, 0x34, 0x56, 0x78])
}

pub fn image_version() -> FirmwareVersion {
    FirmwareVersion::new(4, 1)
}

pub fn running_version() -> FirmwareVersion {
    FirmwareVersion::new(3, 5)
}

/// Signature chunk plus three 300-byte chunks, 1136 bytes in total.
pub fn sample_image() -> Vec<u8> {
    build_image(image_version(), &[300, 300, 300])
}

/// Tag memory holding "Hello, PN5180!" in English.
pub fn hello_tag_memory() -> Vec<u8> {
    tlv_wrapped(&short_text_record("en", "Hello, PN5180!"))
}
