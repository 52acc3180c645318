// libpn5180/src/tag/mock.rs

use crate::tag::traits::TagReader;
use crate::types::{SystemInfo, TagUid};
use crate::{Error, Result};

/// ISO15693 error code for "block not available"
const BLOCK_NOT_AVAILABLE: u8 = 0x10;

/// Mock tag for unit tests. Serves blocks from memory and records which
/// blocks were read.
#[derive(Debug, Clone)]
pub struct MockTag {
    pub info: SystemInfo,
    pub blocks: Vec<Vec<u8>>,
    /// Block indices read, in order.
    pub reads: Vec<u16>,
    pub system_info_calls: usize,
    /// Testing hook: system info query fails with Timeout.
    pub fail_system_info: bool,
    /// Testing hook: reading this block fails with a tag status error.
    pub fail_block: Option<u16>,
}

impl MockTag {
    /// Zero-filled tag with the given geometry.
    pub fn new(block_size: u8, block_count: u16) -> Self {
        Self {
            info: SystemInfo::new(block_size, block_count),
            blocks: vec![vec![0u8; block_size as usize]; block_count as usize],
            reads: Vec::new(),
            system_info_calls: 0,
            fail_system_info: false,
            fail_block: None,
        }
    }

    /// Tag whose memory starts with `bytes`; the last block is zero padded.
    pub fn from_bytes(block_size: u8, bytes: &[u8]) -> Self {
        let size = (block_size as usize).max(1);
        let count = bytes.len().div_ceil(size);
        let mut tag = Self::new(block_size, count as u16);
        for (block, data) in tag.blocks.iter_mut().zip(bytes.chunks(size)) {
            let n = data.len().min(block.len());
            block[..n].copy_from_slice(&data[..n]);
        }
        tag
    }
}

impl TagReader for MockTag {
    fn system_info(&mut self, _uid: &TagUid) -> Result<SystemInfo> {
        self.system_info_calls += 1;
        if self.fail_system_info {
            return Err(Error::Timeout);
        }
        Ok(self.info)
    }

    fn read_single_block(&mut self, _uid: &TagUid, index: u16, buf: &mut [u8]) -> Result<()> {
        self.reads.push(index);
        if self.fail_block == Some(index) {
            return Err(Error::TagStatus(BLOCK_NOT_AVAILABLE));
        }
        let block = self
            .blocks
            .get(index as usize)
            .ok_or(Error::TagStatus(BLOCK_NOT_AVAILABLE))?;
        if buf.len() != block.len() {
            return Err(Error::InvalidLength {
                expected: block.len(),
                actual: buf.len(),
            });
        }
        buf.copy_from_slice(block);
        Ok(())
    }
}
