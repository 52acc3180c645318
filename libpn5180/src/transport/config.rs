// libpn5180/src/transport/config.rs
//! Download transport configuration

use std::time::Duration;

use crate::utils::{DEFAULT_READY_TIMEOUT_MS, DEFAULT_RESPONSE_TIMEOUT_MS, ms};

/// Settle time after asserting chip-select (ms)
pub const SELECT_SETTLE_MS: u32 = 2;

/// Settle time after releasing chip-select (ms)
pub const DESELECT_SETTLE_MS: u32 = 1;

/// Timing parameters of the BUSY handshake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportConfig {
    /// How long to wait for BUSY low before sending a request.
    pub ready_timeout: Duration,
    /// How long to wait for BUSY high after sending a request.
    pub response_timeout: Duration,
    pub select_settle_ms: u32,
    pub deselect_settle_ms: u32,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            ready_timeout: ms(DEFAULT_READY_TIMEOUT_MS),
            response_timeout: ms(DEFAULT_RESPONSE_TIMEOUT_MS),
            select_settle_ms: SELECT_SETTLE_MS,
            deselect_settle_ms: DESELECT_SETTLE_MS,
        }
    }
}

impl TransportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ready_timeout(mut self, timeout: Duration) -> Self {
        self.ready_timeout = timeout;
        self
    }

    pub fn with_response_timeout(mut self, timeout: Duration) -> Self {
        self.response_timeout = timeout;
        self
    }

    pub fn with_settle_ms(mut self, select: u32, deselect: u32) -> Self {
        self.select_settle_ms = select;
        self.deselect_settle_ms = deselect;
        self
    }
}
