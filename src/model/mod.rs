//! Document model
//!
//! Sections of cards, their JSON shape, and the bundled default content.
//! Nothing here touches storage or the DOM.

pub mod card;
pub mod defaults;
pub mod section;

pub use card::{Card, CardId, Priority};
pub use defaults::{Profile, Stat, default_document, default_profile};
pub use section::{Document, Section, SectionId};
