//! Hexadecimal helpers for frame logging and for reading tag dumps or
//! firmware images given as text.

use std::fmt::Write;

use crate::{Error, Result};

/// Convert a byte slice to a lowercase hex string without separators.
///
/// Example: `&[0x6e, 0xef]` -> `"6eef"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut s, b| {
        // writing to a String cannot fail
        let _ = write!(s, "{:02x}", b);
        s
    })
}

/// Convert a byte slice to uppercase hex with a space between bytes, the
/// layout used when logging download-mode frames.
///
/// Example: `&[0x7f, 0x00, 0x04]` -> `"7F 00 04"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        let _ = write!(s, "{:02X}", b);
    }
    s
}

/// Parse a hex string into bytes.
///
/// ASCII whitespace, `,` separators and `0x` prefixes are ignored so that
/// C-array style dumps (`0x00, 0xe4, ...`) can be pasted directly.
pub fn parse_hex(s: &str) -> Result<Vec<u8>> {
    let digits: Vec<u8> = s
        .split(|c: char| c.is_ascii_whitespace() || c == ',')
        .map(|tok| tok.trim_start_matches("0x").trim_start_matches("0X"))
        .flat_map(|tok| tok.bytes())
        .collect();

    if digits.len() % 2 != 0 {
        return Err(Error::FrameFormat("hex string has odd length".into()));
    }

    digits
        .chunks(2)
        .map(|pair| {
            let hi = nibble(pair[0])?;
            let lo = nibble(pair[1])?;
            Ok((hi << 4) | lo)
        })
        .collect()
}

fn nibble(c: u8) -> Result<u8> {
    (c as char)
        .to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| Error::FrameFormat(format!("invalid hex digit '{}'", c as char)))
}
