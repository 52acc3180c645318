// libpn5180/src/lib.rs

//! libpn5180
//!
//! Pure Rust protocol core for the NXP PN5180: secure firmware download
//! over the download-mode SPI protocol, and NDEF text decoding for
//! ISO15693 tags.

pub mod constants;
pub mod error;
pub mod firmware;
pub mod ndef;
pub mod prelude;
pub mod protocol;
pub mod tag;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available everywhere.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
