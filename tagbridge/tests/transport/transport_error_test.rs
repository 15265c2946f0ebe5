use tagbridge::transport::{MockTransport, Transport};
use tagbridge::Error;

#[test]
fn send_failures_are_io_faults() {
    let mut mock = MockTransport::new();
    mock.set_send_failures(2);
    for _ in 0..2 {
        let err = mock.send(&[0x55]).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.is_transport_fault());
    }
    assert!(mock.send(&[0x55]).is_ok());
}

#[test]
fn timeout_is_not_a_transport_fault() {
    let mut mock = MockTransport::new();
    let err = mock.receive(10).unwrap_err();
    assert!(!err.is_transport_fault());
}
