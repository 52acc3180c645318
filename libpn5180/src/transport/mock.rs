// libpn5180/src/transport/mock.rs

use std::collections::VecDeque;

use crate::constants::DOWNLOAD_FILL;
use crate::transport::traits::Bus;
use crate::{Error, Result};

/// Control line touched through the Bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Request,
    Reset,
}

/// Mock bus for unit tests. It behaves like a PN5180 in download mode:
/// every request frame written while selected is recorded, and if a
/// response envelope is queued it is armed when chip-select is released.
/// BUSY is then high until the last byte of that envelope has been read.
#[derive(Debug, Default)]
pub struct MockBus {
    /// Request frames, one entry per select/deselect cycle.
    pub sent: Vec<Vec<u8>>,
    /// Raw response envelopes handed out in order.
    pub responses: VecDeque<Vec<u8>>,
    /// Control line changes in call order.
    pub lines: Vec<(Line, bool)>,
    /// Requested delays in call order.
    pub delays: Vec<u32>,
    /// Testing hook: keep BUSY high forever (chip hung).
    pub stuck_busy: bool,
    /// Testing hook: fail the n-th transfer (1-based) with a bus error.
    pub fail_transfer_at: Option<usize>,
    /// Testing hook: releasing chip-select reports a bus error.
    pub fail_deselect: bool,
    pub selected: bool,
    transfers: usize,
    current: Vec<u8>,
    pending: Option<VecDeque<u8>>,
    reading: bool,
}

impl MockBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw response envelope (marker, header, payload, CRC).
    pub fn push_response(&mut self, raw: Vec<u8>) {
        self.responses.push_back(raw);
    }

    pub fn set_stuck_busy(&mut self, stuck: bool) {
        self.stuck_busy = stuck;
    }

    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }
}

impl Bus for MockBus {
    fn is_busy(&mut self) -> Result<bool> {
        if self.stuck_busy {
            return Ok(true);
        }
        Ok(self.pending.as_ref().is_some_and(|p| !p.is_empty()))
    }

    fn select(&mut self) -> Result<()> {
        self.selected = true;
        self.reading = self.pending.is_some();
        self.current.clear();
        Ok(())
    }

    fn deselect(&mut self) -> Result<()> {
        self.selected = false;
        if self.fail_deselect {
            return Err(Error::Bus("simulated deselect failure".into()));
        }
        if self.reading {
            // Anything not clocked out is dropped, like a real chip.
            self.reading = false;
            self.pending = None;
        } else if !self.current.is_empty() {
            self.sent.push(std::mem::take(&mut self.current));
            self.pending = self.responses.pop_front().map(VecDeque::from);
        }
        Ok(())
    }

    fn transfer(&mut self, byte: u8) -> Result<u8> {
        self.transfers += 1;
        if self.fail_transfer_at == Some(self.transfers) {
            return Err(Error::Bus("simulated spi failure".into()));
        }
        if !self.selected {
            return Err(Error::Bus("transfer without chip-select".into()));
        }

        if self.reading {
            let next = self.pending.as_mut().and_then(|p| p.pop_front());
            Ok(next.unwrap_or(DOWNLOAD_FILL))
        } else {
            self.current.push(byte);
            Ok(DOWNLOAD_FILL)
        }
    }

    fn set_request(&mut self, high: bool) -> Result<()> {
        self.lines.push((Line::Request, high));
        Ok(())
    }

    fn set_reset(&mut self, high: bool) -> Result<()> {
        self.lines.push((Line::Reset, high));
        Ok(())
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delays.push(ms);
    }
}
