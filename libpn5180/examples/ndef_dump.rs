//! Decode the NDEF text message held in a Type 5 tag memory dump.
//!
//! Usage:
//!   cargo run -p libpn5180 --example ndef_dump -- "E1 40 10 00 03 0A D1 01 06 54 02 65 6E 61 62 63 FE"
//!   cargo run -p libpn5180 --example ndef_dump -- --block-size 8 <hex>

use anyhow::Context;
use libpn5180::ndef::NdefReader;
use libpn5180::tag::{BlockCursor, MockTag};
use libpn5180::utils::{bytes_to_hex_spaced, parse_hex};
use libpn5180::TagUid;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut block_size = 4u8;
    let mut hex = String::new();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--block-size" {
            let v = args.next().context("--block-size needs a value")?;
            block_size = v.parse().context("block size must be 1..=255")?;
        } else {
            hex.push_str(&arg);
            hex.push(' ');
        }
    }

    let memory = parse_hex(&hex).context("parsing tag memory")?;
    let uid = TagUid::from_bytes([0xE0, 0x04, 0x01, 0x00, 0x00, 0x00, 0x00, 0x01]);
    let mut tag = MockTag::from_bytes(block_size, &memory);

    println!("tag {} ({} blocks of {} bytes)", uid.to_hex(), tag.info.block_count, block_size);
    let bytes: Vec<u8> = BlockCursor::new(&mut tag, uid).collect::<Result<_, _>>()?;
    for (i, block) in bytes.chunks(block_size.max(1) as usize).enumerate() {
        println!("  block {:3}: {}", i, bytes_to_hex_spaced(block));
    }

    let mut reader = NdefReader::from_tag(&mut tag, uid);
    match reader.read_text_record() {
        Ok(rec) => {
            println!("language: {}", rec.language);
            println!("text:     {}", rec.text);
        }
        Err(e) if e.is_end_of_data() => println!("no NDEF text message"),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
