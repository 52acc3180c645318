#[path = "../common/mod.rs"]
mod common;

use libpn5180::protocol::Frame;
use libpn5180::test_support::{fast_transport, status_response};
use libpn5180::transport::MockBus;
use libpn5180::utils::CancelToken;
use libpn5180::Error;

#[test]
fn busy_never_drops() {
    let mut mock = MockBus::new();
    mock.set_stuck_busy(true);

    let mut t = fast_transport(&mut mock);
    let mut res = [0u8; 4];
    assert!(matches!(
        t.exchange(&[0x00, 0x01, 0xC0], &mut res),
        Err(Error::Timeout)
    ));
    drop(t);
    // nothing was written while the chip was busy
    assert!(mock.sent.is_empty());
}

#[test]
fn no_response_times_out() {
    let mut mock = MockBus::new();
    let mut t = fast_transport(&mut mock);
    let mut res = [0u8; 4];
    assert!(matches!(
        t.exchange(&[0x00, 0x01, 0xC0], &mut res),
        Err(Error::Timeout)
    ));
}

#[test]
fn cancelled_before_start() {
    let mut mock = MockBus::new();
    mock.push_response(status_response(0x00));
    let token = CancelToken::new();
    token.cancel();

    let mut t = fast_transport(&mut mock).with_cancel_token(token.clone());
    let mut res = [0u8; 4];
    assert!(matches!(
        t.exchange(&[0x00, 0x01, 0xC0], &mut res),
        Err(Error::Cancelled)
    ));

    token.reset();
    assert_eq!(t.exchange(&[0x00, 0x01, 0xC0], &mut res).unwrap(), 4);
}

#[test]
fn bus_failure_still_releases_chip_select() {
    let mut mock = MockBus::new();
    mock.fail_transfer_at = Some(2);

    let mut t = fast_transport(&mut mock);
    let mut res = [0u8; 4];
    assert!(matches!(
        t.exchange(&[0x00, 0x01, 0xC0], &mut res),
        Err(Error::Bus(_))
    ));
    drop(t);
    assert!(!mock.selected);
}

#[test]
fn corrupted_response_reports_checksum() {
    let mut raw = Frame::encode_response(&[0x00, 0x00, 0x00, 0x00]).unwrap();
    raw[3] ^= 0x80;
    let mut mock = MockBus::new();
    mock.push_response(raw);

    let mut t = fast_transport(&mut mock);
    let mut res = [0u8; 4];
    assert!(matches!(
        t.exchange(&[0x00, 0x01, 0xC0], &mut res),
        Err(Error::ChecksumMismatch { .. })
    ));
}
