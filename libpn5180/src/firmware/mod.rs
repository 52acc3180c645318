// libpn5180/src/firmware/mod.rs
//! PN5180 secure firmware update (download mode).

pub mod image;
pub mod status;
pub mod updater;

pub use image::{Chunk, ChunkIter, FirmwareImage, check_image};
pub use status::{DownloadStatus, UploadOutcome};
pub use updater::{FirmwareUpdater, UpdateReport};
