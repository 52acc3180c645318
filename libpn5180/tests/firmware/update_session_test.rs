#[path = "../common/mod.rs"]
mod common;

use libpn5180::firmware::{DownloadStatus, FirmwareUpdater, UploadOutcome};
use libpn5180::test_support::{fast_transport, status_response, version_response};
use libpn5180::transport::MockBus;
use libpn5180::utils::CancelToken;
use libpn5180::Error;

fn chip_with(responses: Vec<Vec<u8>>) -> MockBus {
    let mut mock = MockBus::new();
    for r in responses {
        mock.push_response(r);
    }
    mock
}

#[test]
fn full_update_session() {
    common::init_logger();
    let image = common::sample_image();
    let mut responses = vec![version_response(common::running_version())];
    responses.extend((0..4).map(|_| status_response(0x00)));
    let mut mock = chip_with(responses);

    let mut up = FirmwareUpdater::new(fast_transport(&mut mock));
    let report = up.update(&image).unwrap();
    assert_eq!(report.running, common::running_version());
    assert_eq!(report.image, common::image_version());
    assert!(report.outcome.is_success());
    assert_eq!(report.chunks_sent, 4);
    drop(up);

    // version query + every chunk, each a separate frame
    assert_eq!(mock.sent.len(), 5);
    assert_eq!(&mock.sent[1][1..231], &image[..230]);
}

#[test]
fn third_chunk_rejected() {
    let image = common::sample_image();
    let mut mock = chip_with(vec![
        version_response(common::running_version()),
        status_response(0x00),
        status_response(0x00),
        status_response(0x20),
    ]);

    let mut up = FirmwareUpdater::new(fast_transport(&mut mock));
    let report = up.update(&image).unwrap();
    assert_eq!(report.outcome, UploadOutcome::Device(DownloadStatus::MemoryBusy));
    assert_eq!(report.chunks_sent, 2);
    drop(up);
    assert_eq!(mock.sent.len(), 4);
}

#[test]
fn version_query_error_status_aborts() {
    let image = common::sample_image();
    let mut payload = [0u8; 10];
    payload[0] = 0x2A;
    let mut mock = chip_with(vec![
        libpn5180::protocol::Frame::encode_response(&payload).unwrap(),
    ]);

    let mut up = FirmwareUpdater::new(fast_transport(&mut mock));
    assert!(matches!(
        up.update(&image),
        Err(Error::Download(DownloadStatus::SfwuDegraded))
    ));
}

#[test]
fn silent_chip_times_out() {
    let image = common::sample_image();
    let mut mock = MockBus::new();
    let mut up = FirmwareUpdater::new(fast_transport(&mut mock));
    assert!(matches!(up.update(&image), Err(Error::Timeout)));
}

#[test]
fn cancelled_session() {
    let image = common::sample_image();
    let mut mock = chip_with(vec![version_response(common::running_version())]);
    let token = CancelToken::new();

    let transport = fast_transport(&mut mock).with_cancel_token(token.clone());
    let mut up = FirmwareUpdater::new(transport);
    token.cancel();
    assert!(matches!(up.update(&image), Err(Error::Cancelled)));
    drop(up);
    assert!(mock.sent.is_empty());
}
