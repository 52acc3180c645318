#[path = "../common/mod.rs"]
mod common;

use libpn5180::protocol::{Command, Frame};
use libpn5180::test_support::{fast_transport, status_response};
use libpn5180::transport::MockBus;

#[test]
fn request_then_response_cycle() {
    common::init_logger();
    let mut mock = MockBus::new();
    mock.push_response(status_response(0x00));

    let mut t = fast_transport(&mut mock);
    let mut res = [0xAAu8; 4];
    let n = t.exchange(&Command::GetVersion.encode(), &mut res).unwrap();
    assert_eq!(n, 4);
    assert_eq!(res, [0, 0, 0, 0]);
    drop(t);

    assert_eq!(mock.sent, vec![Frame::encode_request(&Command::GetVersion.encode())]);
    assert!(!mock.selected);
    // select/deselect settle delays for the write and the read phase
    assert_eq!(mock.delays, vec![2, 1, 2, 1]);
}

#[test]
fn short_destination_truncates_payload() {
    let mut mock = MockBus::new();
    mock.push_response(Frame::encode_response(&[1, 2, 3, 4, 5, 6]).unwrap());

    let mut t = fast_transport(&mut mock);
    let mut res = [0u8; 2];
    assert_eq!(t.exchange(&[0x00, 0x01, 0xC0], &mut res).unwrap(), 2);
    assert_eq!(res, [1, 2]);
}

#[test]
fn back_to_back_exchanges() {
    let mut mock = MockBus::new();
    mock.push_response(status_response(0x00));
    mock.push_response(status_response(0x21));

    let mut t = fast_transport(&mut mock);
    let mut res = [0u8; 4];
    t.exchange(&[0x00, 0x01, 0xC0], &mut res).unwrap();
    assert_eq!(res[0], 0x00);
    t.exchange(&[0x00, 0x01, 0xC0], &mut res).unwrap();
    assert_eq!(res[0], 0x21);
    drop(t);
    assert_eq!(mock.sent.len(), 2);
}
