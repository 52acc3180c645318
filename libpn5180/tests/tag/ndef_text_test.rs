#[path = "../common/mod.rs"]
mod common;

use libpn5180::ndef::{NdefReader, Tnf};
use libpn5180::tag::{MockTag, SliceSource};
use libpn5180::test_support::{short_text_record, tlv_wrapped};
use libpn5180::Error;

#[test]
fn hello_from_tag() {
    common::init_logger();
    let mut tag = MockTag::from_bytes(4, &common::hello_tag_memory());
    let mut reader = NdefReader::from_tag(&mut tag, common::sample_uid());
    assert_eq!(reader.read_message_as_text().unwrap(), "Hello, PN5180!");
}

#[test]
fn record_details() {
    let mem = common::hello_tag_memory();
    let mut reader = NdefReader::new(SliceSource::new(&mem));
    let rec = reader.read_text_record().unwrap();
    assert_eq!(rec.header.tnf, Tnf::WellKnown);
    assert!(rec.header.message_begin && rec.header.message_end);
    assert_eq!(rec.type_length, 1);
    assert_eq!(rec.record_type, b'T');
    assert_eq!(rec.language_code_length, 2);
    assert_eq!(rec.language, "en");
    assert_eq!(rec.payload_length, 1 + 2 + 14);
}

#[test]
fn only_needed_blocks_are_read() {
    let mut mem = tlv_wrapped(&short_text_record("en", "hi"));
    mem.resize(64, 0);
    let mut tag = MockTag::from_bytes(4, &mem);
    {
        let mut reader = NdefReader::from_tag(&mut tag, common::sample_uid());
        assert_eq!(reader.read_message_as_text().unwrap(), "hi");
    }
    // 6 bytes of container + 9 bytes of record
    assert_eq!(tag.reads, vec![0, 1, 2, 3]);
}

#[test]
fn invalid_utf8_is_replaced() {
    let mut rec = short_text_record("en", "ab");
    rec[2] += 1;
    rec.push(0xFF);
    let mut reader = NdefReader::new(SliceSource::new(&rec));
    assert_eq!(reader.read_message_as_text().unwrap(), "ab\u{FFFD}");
}

#[test]
fn media_type_record_rejected() {
    let mem = tlv_wrapped(&[0xD2, 0x0A, 0x03, b't', b'e', b'x', b't', b'/', b'p', b'l', b'a', b'i', b'n', b'a', b'b', b'c']);
    let mut reader = NdefReader::new(SliceSource::new(&mem));
    assert!(matches!(reader.read_message_as_text(), Err(Error::NdefFormat(_))));
}

#[test]
fn empty_tag_reports_end_of_data() {
    let mut tag = MockTag::new(4, 0);
    let mut reader = NdefReader::from_tag(&mut tag, common::sample_uid());
    assert!(reader.read_message_as_text().unwrap_err().is_end_of_data());
}

#[test]
fn tag_without_ndef_message() {
    // lock control TLV instead of an NDEF message
    let mem = [0xE1, 0x40, 0x10, 0x00, 0x01, 0x03, 0xA0, 0x10, 0x44];
    let mut tag = MockTag::from_bytes(4, &mem);
    let mut reader = NdefReader::from_tag(&mut tag, common::sample_uid());
    assert!(reader.read_message_as_text().unwrap_err().is_end_of_data());
}
