// libpn5180/src/transport/mod.rs

pub mod config;
pub mod download;
#[cfg(feature = "hal")]
pub mod hal;
pub mod mock;
pub mod traits;

pub use config::TransportConfig;
pub use download::DownloadTransport;
#[cfg(feature = "hal")]
pub use hal::HalBus;
pub use mock::MockBus;
pub use traits::Bus;
