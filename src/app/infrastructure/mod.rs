//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - FLTK buffer utilities
//! - Platform traits the controller talks through
//! - Error types

pub mod buffer;
pub mod error;
#[cfg(test)]
pub mod fake;
pub mod platform;
