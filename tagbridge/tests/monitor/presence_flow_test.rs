#[path = "../common/mod.rs"]
mod common;

use common::{fixtures, helpers};
use tagbridge::monitor::{Monitor, MonitorConfig};
use tagbridge::presence::PresenceEvent;
use tagbridge::test_support::{self, detection_frame, no_target_frame, RecordingSink};
use tagbridge::{PayloadMode, Uid};

fn ndef_config() -> MonitorConfig {
    MonitorConfig {
        device_id: "hallway".into(),
        poll_interval_ms: 0,
        ..MonitorConfig::default()
    }
}

#[test]
fn none_a_a_none_b_delivers_twice() -> anyhow::Result<()> {
    let uid_a = fixtures::ultralight_uid();
    let uid_b = vec![0x04, 0x99, 0x88, 0x77, 0x66, 0x55, 0x44];

    let mut frames = vec![no_target_frame()];
    frames.extend(helpers::entered_with_ndef(&uid_a, &fixtures::ha_tag_uri_record("front-door-01")));
    frames.push(detection_frame(&uid_a, 0x00));
    frames.push(no_target_frame());
    frames.extend(helpers::entered_with_ndef(&uid_b, &fixtures::ha_tag_uri_record("back-door-02")));

    let reader = helpers::ready_reader(frames)?;
    let mut monitor = Monitor::new(reader, RecordingSink::new(), ndef_config());

    let mut events = Vec::new();
    for _ in 0..5 {
        if let Some(event) = monitor.poll_once()? {
            events.push(event);
        }
    }

    let a = Uid::from_bytes(uid_a);
    let b = Uid::from_bytes(uid_b);
    assert_eq!(
        events,
        vec![
            PresenceEvent::Entered(a.clone()),
            PresenceEvent::Left(a),
            PresenceEvent::Entered(b),
        ]
    );

    let delivered: Vec<_> = monitor
        .sink()
        .events
        .iter()
        .map(|e| (e.tag_id.as_str(), e.device_id.as_str()))
        .collect();
    assert_eq!(
        delivered,
        vec![("front-door-01", "hallway"), ("back-door-02", "hallway")]
    );
    Ok(())
}

#[test]
fn short_ndef_value_is_not_delivered() -> anyhow::Result<()> {
    let frames = helpers::entered_with_ndef(
        &fixtures::ultralight_uid(),
        &test_support::text_record("en", "ab"),
    );
    let reader = helpers::ready_reader(frames)?;
    let mut monitor = Monitor::new(reader, RecordingSink::new(), ndef_config());

    assert!(matches!(monitor.poll_once()?, Some(PresenceEvent::Entered(_))));
    assert_eq!(monitor.sink().attempts, 0);
    Ok(())
}

#[test]
fn uuid_mode_ignores_ndef_content() -> anyhow::Result<()> {
    let reader = helpers::ready_reader(vec![detection_frame(&fixtures::ultralight_uid(), 0x00)])?;
    let config = MonitorConfig {
        payload_mode: PayloadMode::Uuid,
        ..ndef_config()
    };
    let mut monitor = Monitor::new(reader, RecordingSink::new(), config);
    monitor.poll_once()?;

    let sink = monitor.into_sink();
    assert_eq!(sink.events.len(), 1);
    assert_eq!(sink.events[0].tag_id, "04A1B2C3D4E580");
    Ok(())
}

#[test]
fn transport_fault_ends_the_loop() -> anyhow::Result<()> {
    let (shared, boxed) = test_support::shared_mock();
    test_support::seed_handshake(&mut shared.borrow_mut());
    let reader = tagbridge::device::Reader::new_with_transport(
        boxed,
        tagbridge::device::SessionTiming::immediate(),
    )
    .handshake()?;
    let mut monitor = Monitor::new(reader, RecordingSink::new(), ndef_config());

    shared.borrow_mut().set_send_failures(1);
    let stop = std::sync::atomic::AtomicBool::new(false);
    let err = monitor.run(&stop).unwrap_err();
    assert!(err.is_transport_fault());
    Ok(())
}
