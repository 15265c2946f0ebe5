// tagbridge/src/device/mod.rs

/// `Reader` and its state markers
pub mod handle;
/// Settle delays and response timeout
pub mod timing;

pub use handle::{Connected, Reader, Ready};
pub use timing::SessionTiming;
