use crate::constants::{ULTRALIGHT_PAGES_PER_READ, ULTRALIGHT_PAGE_SIZE};
use crate::device::{Reader, Ready};
use crate::protocol::{codec, decode_data_exchange, Command};
use crate::utils::pause;
use crate::Result;

/// Retry and early-stop rules for multi-chunk reads.
///
/// Offsets are bytes from the first requested page. A chunk that still
/// fails after `max_attempts` ends the read. If it sat beyond
/// `critical_bytes` and at least `min_partial_bytes` were collected, the
/// partial image is returned; otherwise the whole read fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkReadPolicy {
    /// Pages requested per READ
    pub pages_per_read: u8,
    /// Attempts per chunk, including the first
    pub max_attempts: u32,
    /// Pause between attempts
    pub retry_pause_ms: u64,
    /// Failures at or before this offset never yield a partial image
    pub critical_bytes: usize,
    /// Bytes needed before a partial image is accepted
    pub min_partial_bytes: usize,
}

impl Default for BulkReadPolicy {
    fn default() -> Self {
        Self {
            pages_per_read: ULTRALIGHT_PAGES_PER_READ,
            max_attempts: 2,
            retry_pause_ms: 50,
            critical_bytes: 16,
            min_partial_bytes: 50,
        }
    }
}

impl BulkReadPolicy {
    fn allows_partial(&self, failed_offset: usize, collected: usize) -> bool {
        failed_offset > self.critical_bytes && collected >= self.min_partial_bytes
    }
}

/// Contiguous tag memory starting at `start_block`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryImage {
    start_block: u8,
    bytes: Vec<u8>,
    complete: bool,
}

impl MemoryImage {
    /// First page of the image
    pub fn start_block(&self) -> u8 {
        self.start_block
    }

    /// Collected bytes, in page order
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of collected bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// False when the read stopped early under the partial-read rule.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Take the collected bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// One READ command (four pages). Missing reply, foreign frame, non-zero
/// status or an empty data field all mean `Ok(None)`.
pub fn read_chunk(reader: &mut Reader<Ready>, target_id: u8, block: u8) -> Result<Option<Vec<u8>>> {
    let Some(raw) = reader.read_block(target_id, block)? else {
        return Ok(None);
    };
    let cmd = Command::mifare_read(target_id, block);
    let data = codec::response_payload(&cmd, &raw).and_then(|payload| {
        decode_data_exchange(payload)
            .map_err(|e| log::debug!("read of block {} rejected: {}", block, e))
            .ok()
    });
    Ok(data.filter(|d| !d.is_empty()).map(<[u8]>::to_vec))
}

fn read_chunk_with_retry(
    reader: &mut Reader<Ready>,
    target_id: u8,
    block: u8,
    policy: &BulkReadPolicy,
) -> Result<Option<Vec<u8>>> {
    let attempts = policy.max_attempts.max(1);
    for attempt in 1..=attempts {
        if let Some(data) = read_chunk(reader, target_id, block)? {
            return Ok(Some(data));
        }
        if attempt < attempts {
            log::debug!("block {} read failed (attempt {}/{}), retrying", block, attempt, attempts);
            pause(policy.retry_pause_ms);
        }
    }
    Ok(None)
}

/// Assemble `total_blocks` pages starting at `start_block`.
///
/// Only transport faults are errors. A read that fails under the policy is
/// `Ok(None)`; one that stops early is a partial `MemoryImage`.
pub fn read_blocks(
    reader: &mut Reader<Ready>,
    target_id: u8,
    start_block: u8,
    total_blocks: u8,
    policy: &BulkReadPolicy,
) -> Result<Option<MemoryImage>> {
    let step = usize::from(policy.pages_per_read.max(1));
    let first = usize::from(start_block);
    let end = first + usize::from(total_blocks);

    let mut bytes = Vec::with_capacity(usize::from(total_blocks) * ULTRALIGHT_PAGE_SIZE);
    let mut complete = true;

    for chunk_start in (first..end).step_by(step) {
        // Page addresses are one byte wide
        let chunk = match u8::try_from(chunk_start) {
            Ok(block) => read_chunk_with_retry(reader, target_id, block, policy)?,
            Err(_) => None,
        };

        match chunk {
            Some(data) => bytes.extend_from_slice(&data),
            None => {
                let offset = (chunk_start - first) * ULTRALIGHT_PAGE_SIZE;
                if policy.allows_partial(offset, bytes.len()) {
                    log::debug!(
                        "stopping at block {} with {} bytes collected",
                        chunk_start,
                        bytes.len()
                    );
                    complete = false;
                    break;
                }
                log::debug!("block {} unreadable at offset {}; giving up", chunk_start, offset);
                return Ok(None);
            }
        }
    }

    if bytes.is_empty() {
        return Ok(None);
    }
    Ok(Some(MemoryImage {
        start_block,
        bytes,
        complete,
    }))
}
