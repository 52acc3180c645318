// libpn5180/src/ndef/tlv.rs

use log::debug;

use crate::constants::{NDEF_CC_MAGIC, NDEF_CC_VERSION, NDEF_CC_VERSION_MASK, TLV_NDEF_MESSAGE};
use crate::tag::ByteSource;
use crate::{Error, Result};

/// Read up to the first NDEF record header byte.
///
/// Tag memory either starts with a capability container (0xE1) followed by
/// a TLV block, or directly with a record. A TLV that is not an NDEF message
/// means there is nothing to decode and yields `Error::EndOfData`.
pub fn locate_record_header<S: ByteSource + ?Sized>(src: &mut S) -> Result<u8> {
    let first = src.next_byte()?;
    if first != NDEF_CC_MAGIC {
        return Ok(first);
    }

    let version = src.next_byte()?;
    if version & NDEF_CC_VERSION_MASK != NDEF_CC_VERSION {
        return Err(Error::TlvFormat { version });
    }

    // memory size, access conditions
    src.skip(2)?;

    let tlv_type = src.next_byte()?;
    if tlv_type != TLV_NDEF_MESSAGE {
        debug!("tlv type {:#04x} is not an ndef message", tlv_type);
        return Err(Error::EndOfData);
    }

    // TLV length; the record carries its own lengths
    src.skip(1)?;

    src.next_byte()
}
