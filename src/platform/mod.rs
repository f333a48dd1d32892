//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time (session start timestamp, id seeding)
//! - Storage (LocalStorage on web, none natively)

pub mod storage;
pub mod time;

pub use storage::{PlatformStorage, open_storage};
pub use time::now_ms;
