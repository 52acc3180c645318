// libpn5180/src/ndef/mod.rs
//! NDEF text message decoding for Type 5 (ISO15693) tags.

pub mod reader;
pub mod record;
pub mod tlv;

pub use reader::{NdefReader, decode_text_record};
pub use record::{RecordHeader, TextRecord, Tnf};
pub use tlv::locate_record_header;
