//! Application layer.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Document, TextStyle, Settings, Messages)
//! - `services/` - File reading and writing
//! - `infrastructure/` - Platform seams, FLTK buffer access, errors
//! - `state.rs` - The editor controller that dispatches messages

pub mod domain;
pub mod file_filters;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use domain::{
    AppSettings, Document, FontFamily, FontSize, Message, StyleOption, TextColor, TextStyle,
};
pub use infrastructure::buffer::buffer_text_no_leak;
pub use infrastructure::error::{AppError, Result};
pub use state::{Editor, Flow};
