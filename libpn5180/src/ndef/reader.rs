// libpn5180/src/ndef/reader.rs

use log::debug;

use crate::constants::NDEF_RTD_TEXT;
use crate::ndef::record::{RecordHeader, TextRecord, Tnf};
use crate::ndef::tlv::locate_record_header;
use crate::tag::{BlockCursor, ByteSource, TagReader};
use crate::types::TagUid;
use crate::{Error, Result};

/// Cap on up-front allocation for a text payload; the 32-bit length field
/// comes from the tag and is not trusted for sizing.
const TEXT_PREALLOC_LIMIT: usize = 1024;

/// Decode the first NDEF record of `src` as a well-known text record.
pub fn decode_text_record<S: ByteSource + ?Sized>(src: &mut S) -> Result<TextRecord> {
    let header = RecordHeader::from_byte(locate_record_header(src)?);

    // currently, only well known types are supported
    if header.tnf != Tnf::WellKnown {
        return Err(Error::NdefFormat(format!("unsupported tnf {}", header.tnf)));
    }

    let type_length = src.next_byte()?;

    let payload_length = if header.short_record {
        src.next_byte()? as u32
    } else {
        let mut be = [0u8; 4];
        for b in be.iter_mut() {
            *b = src.next_byte()?;
        }
        u32::from_be_bytes(be)
    };

    let id_length = if header.id_length_present {
        src.next_byte()?
    } else {
        0
    };

    if type_length != 1 {
        return Err(Error::NdefFormat(format!(
            "unsupported type length {}",
            type_length
        )));
    }
    let record_type = src.next_byte()?;
    if record_type != NDEF_RTD_TEXT {
        return Err(Error::NdefFormat(format!(
            "unsupported record type {:#04x}",
            record_type
        )));
    }

    src.skip(id_length as usize)?;

    let language_code_length = src.next_byte()?;
    let language = read_string(src, language_code_length as usize)?;

    let text_len = payload_length
        .checked_sub(1 + language_code_length as u32)
        .ok_or_else(|| {
            Error::NdefFormat(format!(
                "payload length {} shorter than language code {}",
                payload_length, language_code_length
            ))
        })? as usize;
    let text = read_string(src, text_len)?;

    debug!(
        "ndef text record: {} bytes, language '{}'",
        text_len, language
    );

    Ok(TextRecord {
        header,
        type_length,
        payload_length,
        id_length,
        record_type,
        language_code_length,
        language,
        text,
    })
}

/// Read `len` bytes as text; the text ends at the first NUL.
fn read_string<S: ByteSource + ?Sized>(src: &mut S, len: usize) -> Result<String> {
    let mut data = Vec::with_capacity(len.min(TEXT_PREALLOC_LIMIT));
    for _ in 0..len {
        data.push(src.next_byte()?);
    }
    if let Some(nul) = data.iter().position(|&b| b == 0) {
        data.truncate(nul);
    }
    Ok(String::from_utf8_lossy(&data).into_owned())
}

/// Reads an NDEF text message from a byte source, typically a tag.
pub struct NdefReader<S: ByteSource> {
    source: S,
}

impl<R: TagReader> NdefReader<BlockCursor<R>> {
    pub fn from_tag(reader: R, uid: TagUid) -> Self {
        Self::new(BlockCursor::new(reader, uid))
    }
}

impl<S: ByteSource> NdefReader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn into_inner(self) -> S {
        self.source
    }

    /// Decode the text record with all of its header details.
    pub fn read_text_record(&mut self) -> Result<TextRecord> {
        decode_text_record(&mut self.source)
    }

    /// Decode the text record and return only its text.
    pub fn read_message_as_text(&mut self) -> Result<String> {
        self.read_text_record().map(|r| r.text)
    }
}
