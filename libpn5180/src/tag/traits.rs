// libpn5180/src/tag/traits.rs

use crate::types::{SystemInfo, TagUid};
use crate::Result;

/// Elementary ISO15693 operations provided by the reader driver.
pub trait TagReader {
    /// Query block size and block count of the tag.
    fn system_info(&mut self, uid: &TagUid) -> Result<SystemInfo>;

    /// Read block `index` into `buf`, which is exactly one block long.
    fn read_single_block(&mut self, uid: &TagUid, index: u16, buf: &mut [u8]) -> Result<()>;
}

impl<R: TagReader + ?Sized> TagReader for &mut R {
    fn system_info(&mut self, uid: &TagUid) -> Result<SystemInfo> {
        (**self).system_info(uid)
    }

    fn read_single_block(&mut self, uid: &TagUid, index: u16, buf: &mut [u8]) -> Result<()> {
        (**self).read_single_block(uid, index, buf)
    }
}

/// Forward-only byte stream. `Error::EndOfData` marks the end.
pub trait ByteSource {
    fn next_byte(&mut self) -> Result<u8>;

    /// Discard `n` bytes, stopping at the first error.
    fn skip(&mut self, n: usize) -> Result<()> {
        for _ in 0..n {
            self.next_byte()?;
        }
        Ok(())
    }
}
