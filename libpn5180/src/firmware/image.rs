// libpn5180/src/firmware/image.rs

use crate::constants::{
    DOWNLOAD_HEADER_LEN, FIRMWARE_MAGIC, FIRMWARE_MAJOR_OFFSET, FIRMWARE_MIN_LEN,
    FIRMWARE_MINOR_OFFSET,
};
use crate::protocol::parser::{byte_at, header_len_at, slice_at};
use crate::types::FirmwareVersion;
use crate::{Error, Result};

/// Validate a secure firmware update image and return the version it
/// carries. Fails on images below 1 KiB or without the expected signature.
pub fn check_image(image: &[u8]) -> Result<FirmwareVersion> {
    if image.len() < FIRMWARE_MIN_LEN {
        return Err(Error::ImageTooSmall {
            len: image.len(),
            min: FIRMWARE_MIN_LEN,
        });
    }

    let mut found = [0u8; 4];
    found.copy_from_slice(&image[..FIRMWARE_MAGIC.len()]);
    if found != FIRMWARE_MAGIC {
        return Err(Error::ImageMagicMismatch { found });
    }

    Ok(FirmwareVersion::new(
        image[FIRMWARE_MAJOR_OFFSET],
        image[FIRMWARE_MINOR_OFFSET],
    ))
}

/// A validated firmware image: a sequence of self-describing chunks, each
/// `[len_hi|flags, len_lo, command, body...]`.
#[derive(Debug, Clone, Copy)]
pub struct FirmwareImage<'a> {
    bytes: &'a [u8],
    version: FirmwareVersion,
}

impl<'a> FirmwareImage<'a> {
    pub fn parse(bytes: &'a [u8]) -> Result<Self> {
        let version = check_image(bytes)?;
        Ok(Self { bytes, version })
    }

    pub fn version(&self) -> FirmwareVersion {
        self.version
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn chunks(&self) -> ChunkIter<'a> {
        ChunkIter {
            bytes: self.bytes,
            offset: 0,
            done: false,
        }
    }
}

/// One chunk of an image, ready to be sent as a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    /// Offset of the chunk within the image.
    pub offset: usize,
    /// Header + body, exactly as sent on the wire.
    pub raw: &'a [u8],
}

impl<'a> Chunk<'a> {
    pub fn command(&self) -> u8 {
        self.raw[DOWNLOAD_HEADER_LEN]
    }

    /// Value of the 10-bit length field (body length, command included).
    pub fn body_len(&self) -> usize {
        self.raw.len() - DOWNLOAD_HEADER_LEN
    }
}

/// Iterator over image chunks.
///
/// Iteration continues while fewer than `len - 1` bytes have been consumed,
/// so a single trailing byte after the last chunk is never sent.
pub struct ChunkIter<'a> {
    bytes: &'a [u8],
    offset: usize,
    done: bool,
}

impl<'a> ChunkIter<'a> {
    fn read_chunk(&self) -> Result<Chunk<'a>> {
        let rest = &self.bytes[self.offset..];
        // header plus at least the command byte
        byte_at(rest, DOWNLOAD_HEADER_LEN)?;
        let body_len = header_len_at(rest, 0)?;
        if body_len == 0 {
            return Err(Error::InvalidLength {
                expected: 1,
                actual: 0,
            });
        }
        let raw = slice_at(rest, 0, DOWNLOAD_HEADER_LEN + body_len)?;
        Ok(Chunk {
            offset: self.offset,
            raw,
        })
    }
}

impl<'a> Iterator for ChunkIter<'a> {
    type Item = Result<Chunk<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.offset >= self.bytes.len().saturating_sub(1) {
            return None;
        }

        match self.read_chunk() {
            Ok(chunk) => {
                self.offset += chunk.raw.len();
                Some(Ok(chunk))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
