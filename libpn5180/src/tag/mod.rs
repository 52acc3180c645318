// libpn5180/src/tag/mod.rs
//! ISO15693 tag memory as a byte stream.

pub mod cursor;
pub mod mock;
pub mod traits;

pub use cursor::{BlockCursor, SliceSource};
pub use mock::MockTag;
pub use traits::{ByteSource, TagReader};
