use tagbridge::transport::{MockTransport, Transport};
use tagbridge::Error;

#[test]
fn responses_replay_in_order() {
    let mut mock = MockTransport::new();
    mock.push_response(vec![0x01]);
    mock.push_silence();
    mock.push_response(vec![0x02, 0x03]);

    mock.send(&[0xD4, 0x02]).unwrap();
    assert_eq!(mock.receive(100).unwrap(), vec![0x01]);
    assert!(matches!(mock.receive(100), Err(Error::Timeout)));
    assert_eq!(mock.receive(100).unwrap(), vec![0x02, 0x03]);
    assert_eq!(mock.sent, vec![vec![0xD4, 0x02]]);
}

#[test]
fn boxed_transport_forwards_calls() {
    let mut boxed: Box<dyn Transport> = Box::new(MockTransport::new());
    boxed.clear_input().unwrap();
    boxed.send(&[0x00]).unwrap();
    assert!(matches!(boxed.receive(0), Err(Error::Timeout)));
}
