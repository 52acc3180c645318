//! Inspect a PN5180 secure firmware update image (.sfwu).
//!
//! Usage:
//!   cargo run -p libpn5180 --example firmware_info -- <image.sfwu> [--simulate]
//!
//! With `--simulate` the image is also uploaded to a simulated chip that
//! accepts every chunk, which shows the frames a real update would send
//! (`RUST_LOG=debug`).

use anyhow::{Context, bail};
use libpn5180::firmware::{FirmwareImage, FirmwareUpdater};
use libpn5180::test_support::{status_response, version_response};
use libpn5180::transport::{DownloadTransport, MockBus};
use libpn5180::utils::bytes_to_hex_spaced;
use libpn5180::FirmwareVersion;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        bail!("usage: firmware_info <image.sfwu> [--simulate]");
    };
    let simulate = args.any(|a| a == "--simulate");

    let bytes = std::fs::read(&path).with_context(|| format!("reading {}", path))?;
    let image = FirmwareImage::parse(&bytes).with_context(|| format!("checking {}", path))?;

    println!("image:    {} ({} bytes)", path, image.len());
    println!("version:  v{}", image.version());

    let mut count = 0usize;
    for chunk in image.chunks() {
        let chunk = chunk.context("walking image chunks")?;
        let head = &chunk.raw[..chunk.raw.len().min(8)];
        println!(
            "chunk {:4} @ {:#07x}: {:4} bytes, cmd {:#04x}  {}",
            count,
            chunk.offset,
            chunk.body_len(),
            chunk.command(),
            bytes_to_hex_spaced(head)
        );
        count += 1;
    }
    println!("chunks:   {}", count);

    if simulate {
        let mut chip = MockBus::new();
        chip.push_response(version_response(FirmwareVersion::new(0, 0)));
        for _ in 0..count {
            chip.push_response(status_response(0x00));
        }
        let mut updater = FirmwareUpdater::new(DownloadTransport::new(&mut chip));
        let report = updater.update(&bytes)?;
        println!(
            "simulated: {:?} after {} chunks (v{} -> v{})",
            report.outcome, report.chunks_sent, report.running, report.image
        );
    }

    Ok(())
}
