//! Trial Showcase - an editable, card-based trial-period report page
//!
//! Core modules:
//! - `model`: Sections of cards and the bundled default content
//! - `persistence`: LocalStorage slots and the version/deployment gate
//! - `app`: The owned application state and its mutation entry points
//! - `editor`: Edit modal state and card drafts
//! - `sidebar`: Responsive sidebar controller
//! - `view`: View models consumed by the renderer
//! - `platform`: Browser/native platform abstraction

pub mod app;
pub mod config;
pub mod editor;
pub mod ids;
pub mod layout;
pub mod model;
pub mod persistence;
pub mod platform;
pub mod sidebar;
pub mod view;

pub use app::{Showcase, ShowcaseError, ShowcaseResult};
pub use config::{BuildInfo, DATA_VERSION, ShowcaseConfig, StorageKeys};
pub use model::{Card, Document, Section};
