//! Services layer - business operations.
//!
//! - File reading and writing for the File menu

pub mod file_io;
