// libpn5180/src/types.rs

use crate::Error;
use derive_more::Display;
use std::convert::TryFrom;

/// ISO15693 tag UID - Newtype Pattern (8 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagUid([u8; 8]);

impl TagUid {
    pub fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for TagUid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 8 {
            return Err(Error::InvalidLength {
                expected: 8,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 8];
        arr.copy_from_slice(&bytes[..8]);
        Ok(Self(arr))
    }
}

/// Firmware version as reported by the chip or stored in an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}.{}", major, minor)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FirmwareVersion {
    pub major: u8,
    pub minor: u8,
}

impl FirmwareVersion {
    pub const fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }
}

/// Tag memory geometry from the system-info query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SystemInfo {
    /// Bytes per block (1..=255)
    pub block_size: u8,
    pub block_count: u16,
}

impl SystemInfo {
    pub const fn new(block_size: u8, block_count: u16) -> Self {
        Self {
            block_size,
            block_count,
        }
    }

    /// Total user memory in bytes.
    pub fn capacity(&self) -> usize {
        self.block_size as usize * self.block_count as usize
    }
}
