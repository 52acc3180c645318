// libpn5180/src/ndef/record.rs

use derive_more::Display;

/// Type Name Format, the low three bits of a record header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tnf {
    Empty,
    WellKnown,
    MediaType,
    AbsoluteUri,
    External,
    Unknown,
    Unchanged,
    Reserved,
}

impl From<u8> for Tnf {
    fn from(b: u8) -> Self {
        match b & 0x07 {
            0 => Tnf::Empty,
            1 => Tnf::WellKnown,
            2 => Tnf::MediaType,
            3 => Tnf::AbsoluteUri,
            4 => Tnf::External,
            5 => Tnf::Unknown,
            6 => Tnf::Unchanged,
            _ => Tnf::Reserved,
        }
    }
}

/// Flags of the first record byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecordHeader {
    pub message_begin: bool,
    pub message_end: bool,
    pub chunked: bool,
    /// Payload length is one byte instead of four.
    pub short_record: bool,
    pub id_length_present: bool,
    pub tnf: Tnf,
}

impl RecordHeader {
    pub const MB: u8 = 0x80;
    pub const ME: u8 = 0x40;
    pub const CF: u8 = 0x20;
    pub const SR: u8 = 0x10;
    pub const IL: u8 = 0x08;

    pub fn from_byte(b: u8) -> Self {
        Self {
            message_begin: b & Self::MB != 0,
            message_end: b & Self::ME != 0,
            chunked: b & Self::CF != 0,
            short_record: b & Self::SR != 0,
            id_length_present: b & Self::IL != 0,
            tnf: Tnf::from(b),
        }
    }
}

/// A decoded well-known text record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextRecord {
    pub header: RecordHeader,
    pub type_length: u8,
    pub payload_length: u32,
    pub id_length: u8,
    pub record_type: u8,
    /// The text status byte, used whole as the language code length.
    pub language_code_length: u8,
    pub language: String,
    pub text: String,
}
