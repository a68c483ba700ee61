//! FLTK widgets and the platform trait implementations backed by them.

pub mod file_dialogs;
pub mod main_window;
pub mod menu;
pub mod theme;
