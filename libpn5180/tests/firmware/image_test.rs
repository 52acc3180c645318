#[path = "../common/mod.rs"]
mod common;

use libpn5180::firmware::{FirmwareImage, check_image};
use libpn5180::Error;

#[test]
fn sample_image_version_and_chunks() {
    let image = common::sample_image();
    assert_eq!(check_image(&image).unwrap(), common::image_version());

    let fw = FirmwareImage::parse(&image).unwrap();
    let chunks: Vec<_> = fw.chunks().collect::<Result<_, _>>().unwrap();
    assert_eq!(chunks.len(), 4);
    assert_eq!(chunks[0].offset, 0);
    assert_eq!(chunks[0].body_len(), 0xE4);
    assert_eq!(chunks[1].offset, 230);
    assert!(chunks.iter().all(|c| c.command() == 0xC0));
    assert_eq!(chunks.iter().map(|c| c.raw.len()).sum::<usize>(), image.len());
}

#[test]
fn single_trailing_byte_is_not_a_chunk() {
    let mut image = common::sample_image();
    image.push(0x00);
    let fw = FirmwareImage::parse(&image).unwrap();
    let chunks: Vec<_> = fw.chunks().collect::<Result<_, _>>().unwrap();
    assert_eq!(chunks.len(), 4);
}

#[test]
fn truncated_final_chunk_is_an_error() {
    let mut image = common::sample_image();
    image.truncate(image.len() - 10);
    let fw = FirmwareImage::parse(&image).unwrap();
    let results: Vec<_> = fw.chunks().collect();
    assert_eq!(results.len(), 4);
    assert!(results[..3].iter().all(|r| r.is_ok()));
    assert!(results[3].is_err());
}

#[test]
fn small_image_rejected() {
    let image = vec![0x00, 0xE4, 0xC0, 0x00, 0x01, 0x04];
    assert!(matches!(
        FirmwareImage::parse(&image),
        Err(Error::ImageTooSmall { len: 6, min: 1024 })
    ));
}

#[test]
fn wrong_magic_rejected() {
    let mut image = common::sample_image();
    image[1] = 0xE5;
    match check_image(&image) {
        Err(Error::ImageMagicMismatch { found }) => assert_eq!(found, [0x00, 0xE5, 0xC0, 0x00]),
        other => panic!("expected ImageMagicMismatch, got: {:?}", other),
    }
}
