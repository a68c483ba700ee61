//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Document and its backing text store
//! - Whole-document text style
//! - Application settings
//! - Message types for the event system

pub mod document;
pub mod messages;
pub mod settings;
pub mod style;

pub use document::Document;
pub use messages::Message;
pub use settings::AppSettings;
pub use style::{FontFamily, FontSize, StyleOption, TextColor, TextStyle};
