#[path = "../common/mod.rs"]
mod common;

use libpn5180::protocol::{crc16, crc16_be_bytes};

#[test]
fn crc16_known_values() {
    assert_eq!(crc16(b"123456789"), 0x29B1);
    assert_eq!(crc16(&[]), 0xFFFF);
    assert_eq!(crc16(&[0x00]), 0xE1F0);
}

#[test]
fn crc16_is_order_sensitive() {
    assert_eq!(crc16(&[0x01, 0x02]), 0x0E7C);
    assert_eq!(crc16(&[0x02, 0x01]), 0x6B4C);
}

#[test]
fn crc16_big_endian_on_the_wire() {
    assert_eq!(crc16_be_bytes(&[0x00, 0x04, 0xF1, 0x00, 0x00, 0x00]), [0x6E, 0xEF]);
}
