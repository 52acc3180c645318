// Shared helpers for integration tests. Each test file pulls this in with
// `#[path = "../common/mod.rs"]`, so not every helper is used everywhere.
#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::*;

/// Route `log` output through env_logger; `RUST_LOG=debug` shows frames.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
