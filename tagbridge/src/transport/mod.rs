// tagbridge/src/transport/mod.rs

/// In-memory transport for tests
pub mod mock;
/// HSU serial port
#[cfg(feature = "serial")]
pub mod serial;
/// `Transport` trait
pub mod traits;

pub use mock::MockTransport;
#[cfg(feature = "serial")]
pub use serial::SerialTransport;
pub use traits::Transport;
