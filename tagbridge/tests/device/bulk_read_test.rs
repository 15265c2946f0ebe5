#[path = "../common/mod.rs"]
mod common;

use tagbridge::card::{read_blocks, BulkReadPolicy};
use tagbridge::test_support::{read_error_frame, read_frame};

fn chunk(n: u8) -> Vec<u8> {
    read_frame(&[n; 16])
}

#[test]
fn block_two_of_five_fails_after_retries_returns_partial() -> anyhow::Result<()> {
    let policy = BulkReadPolicy {
        min_partial_bytes: 32,
        ..BulkReadPolicy::default()
    };
    let frames = vec![chunk(0), chunk(1), read_error_frame(0x01), read_error_frame(0x01)];
    let mut reader = common::helpers::ready_reader(frames)?;

    let image = read_blocks(&mut reader, 1, 4, 20, &policy)?.expect("partial image");
    assert_eq!(image.len(), 32);
    assert!(!image.is_complete());
    assert_eq!(&image.as_bytes()[16..], &[1u8; 16]);
    Ok(())
}

#[test]
fn block_zero_failure_returns_nothing() -> anyhow::Result<()> {
    let frames = vec![read_error_frame(0x01), read_error_frame(0x01), chunk(1)];
    let mut reader = common::helpers::ready_reader(frames)?;
    assert!(read_blocks(&mut reader, 1, 4, 20, &BulkReadPolicy::default())?.is_none());
    Ok(())
}

#[test]
fn default_policy_needs_fifty_bytes() -> anyhow::Result<()> {
    // three chunks = 48 bytes is not enough for a partial result
    let frames = vec![chunk(0), chunk(1), chunk(2)];
    let mut reader = common::helpers::ready_reader(frames)?;
    assert!(read_blocks(&mut reader, 1, 4, 20, &BulkReadPolicy::default())?.is_none());

    let frames = vec![chunk(0), chunk(1), chunk(2), chunk(3)];
    let mut reader = common::helpers::ready_reader(frames)?;
    let image = read_blocks(&mut reader, 1, 4, 20, &BulkReadPolicy::default())?.expect("partial");
    assert_eq!(image.len(), 64);
    Ok(())
}

#[test]
fn ndef_window_is_eleven_reads() -> anyhow::Result<()> {
    let frames = (0u8..11).map(chunk).collect();
    let mut reader = common::helpers::ready_reader(frames)?;
    let image = read_blocks(&mut reader, 1, 4, 44, &BulkReadPolicy::default())?.expect("image");
    assert_eq!(image.len(), 176);
    assert!(image.is_complete());
    Ok(())
}
