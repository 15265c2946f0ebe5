/// Capability container and NDEF value
pub mod ndef;
/// Retrying multi-page reads
pub mod read;

// Re-export commonly used functions/types at the operations root so callers
// can use `crate::card::operations::read_blocks(...)`.
pub use ndef::{read_capability_container, read_ndef_value, CapabilityContainer};
pub use read::{read_blocks, read_chunk, BulkReadPolicy, MemoryImage};
