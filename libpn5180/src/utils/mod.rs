//! Utilities for libpn5180: hex formatting for frame logs and the
//! deadline/cancellation helpers used by the busy waits.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
