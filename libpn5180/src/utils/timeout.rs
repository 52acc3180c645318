//! Timeout helpers for the BUSY-line handshakes.
//!
//! The chip gives no completion interrupt in download mode, only the BUSY
//! line, so every wait is bounded by a deadline and can be cancelled from
//! another thread through a [`CancelToken`].

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Default wait for BUSY to drop before a request is clocked out.
pub const DEFAULT_READY_TIMEOUT_MS: u64 = 1000;

/// Default wait for BUSY to rise once a request has been sent.
pub const DEFAULT_RESPONSE_TIMEOUT_MS: u64 = 1000;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Point in time after which a wait gives up.
#[derive(Debug, Clone, Copy)]
pub struct Deadline(Instant);

impl Deadline {
    pub fn after(timeout: Duration) -> Self {
        Self(Instant::now() + timeout)
    }

    pub fn expired(&self) -> bool {
        Instant::now() >= self.0
    }
}

/// Shared flag that aborts pending busy waits.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Clear a previous cancellation so the token can be reused.
    pub fn reset(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
