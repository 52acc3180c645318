// libpn5180/src/tag/cursor.rs

use log::trace;

use crate::constants::MAX_BLOCK_SIZE;
use crate::tag::traits::{ByteSource, TagReader};
use crate::types::{SystemInfo, TagUid};
use crate::{Error, Result};

/// Presents the blocks of a tag as one ordered byte stream.
///
/// System info is fetched on the first read and cached. Blocks are fetched
/// one at a time as the stream reaches them; the cursor never rewinds.
pub struct BlockCursor<R: TagReader> {
    reader: R,
    uid: TagUid,
    info: Option<SystemInfo>,
    /// Index of the block held in `block`; None before the first fetch.
    block_index: Option<u16>,
    block: [u8; MAX_BLOCK_SIZE],
    pos: usize,
    exhausted: bool,
}

impl<R: TagReader> BlockCursor<R> {
    pub fn new(reader: R, uid: TagUid) -> Self {
        Self {
            reader,
            uid,
            info: None,
            block_index: None,
            block: [0u8; MAX_BLOCK_SIZE],
            pos: 0,
            exhausted: false,
        }
    }

    pub fn uid(&self) -> &TagUid {
        &self.uid
    }

    /// Cached geometry, if already fetched.
    pub fn system_info(&self) -> Option<SystemInfo> {
        self.info
    }

    pub fn block_index(&self) -> Option<u16> {
        self.block_index
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    fn geometry(&mut self) -> Result<SystemInfo> {
        if let Some(info) = self.info {
            return Ok(info);
        }
        let info = self.reader.system_info(&self.uid)?;
        if info.block_size == 0 {
            return Err(Error::InvalidLength {
                expected: 1,
                actual: 0,
            });
        }
        trace!(
            "tag {}: {} blocks of {} bytes",
            self.uid.to_hex(),
            info.block_count,
            info.block_size
        );
        self.info = Some(info);
        Ok(info)
    }

    fn fetch_next_block(&mut self, info: SystemInfo) -> Result<()> {
        let next = match self.block_index {
            None => 0u32,
            Some(i) => i as u32 + 1,
        };
        if next >= info.block_count as u32 {
            self.exhausted = true;
            return Err(Error::EndOfData);
        }

        let index = next as u16;
        let size = info.block_size as usize;
        // a failed read ends the stream; the block is not retried
        if let Err(e) = self
            .reader
            .read_single_block(&self.uid, index, &mut self.block[..size])
        {
            self.exhausted = true;
            return Err(e);
        }
        self.block_index = Some(index);
        self.pos = 0;
        Ok(())
    }
}

impl<R: TagReader> ByteSource for BlockCursor<R> {
    fn next_byte(&mut self) -> Result<u8> {
        if self.exhausted {
            return Err(Error::EndOfData);
        }

        let info = self.geometry()?;
        let size = info.block_size as usize;
        if self.block_index.is_none() || self.pos >= size {
            self.fetch_next_block(info)?;
        }

        let b = self.block[self.pos];
        self.pos += 1;
        Ok(b)
    }
}

/// Iterates the remaining tag bytes; ends quietly at end of data.
impl<R: TagReader> Iterator for BlockCursor<R> {
    type Item = Result<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_byte() {
            Err(Error::EndOfData) => None,
            other => Some(other),
        }
    }
}

/// ByteSource over an in-memory buffer (a tag dump, for instance).
#[derive(Debug, Clone)]
pub struct SliceSource<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }
}

impl ByteSource for SliceSource<'_> {
    fn next_byte(&mut self) -> Result<u8> {
        let b = *self.data.get(self.pos).ok_or(Error::EndOfData)?;
        self.pos += 1;
        Ok(b)
    }
}
