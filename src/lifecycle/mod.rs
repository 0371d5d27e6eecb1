//! Process lifecycle: startup ordering, signals, graceful shutdown.
//!
//! Configuration and the shared outbound client are built before the
//! listener accepts traffic; shutdown drains in-flight requests before the
//! client is dropped.

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
