// libpn5180/src/protocol/mod.rs

pub mod checksum;
pub mod commands;
pub mod frame;
pub mod parser;
pub mod responses;

pub use checksum::{crc16, crc16_be_bytes};
pub use commands::Command;
pub use frame::Frame;
