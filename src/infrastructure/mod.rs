//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the filesystem, the system clock and cpal.

pub mod config;
pub mod paths;
pub mod recording;
pub mod storage;
pub mod system;
pub mod ticker;

// Re-export adapters
pub use config::XdgConfigStore;
pub use recording::CpalCaptureDevice;
pub use storage::{FileStore, MemoryStore};
pub use system::{SystemClock, UuidGenerator};
pub use ticker::TokioTicker;
