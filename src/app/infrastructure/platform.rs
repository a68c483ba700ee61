//! Platform traits for the editor controller.
//!
//! The controller never touches FLTK directly: the text buffer, the styled
//! view and the modal dialogs are reached through these traits. The FLTK
//! implementations live next to the widgets they wrap (`buffer.rs`,
//! `ui::theme`, `ui::file_dialogs`); tests use the fakes in `fake.rs`.

use std::path::{Path, PathBuf};

use crate::app::domain::style::TextStyle;

/// Backing storage for the document text.
///
/// Positions are byte offsets into UTF-8 text, as in FLTK's `TextBuffer`.
pub trait TextStore {
    /// Replace the whole content.
    fn replace_all(&mut self, text: &str);

    /// Full current content.
    fn contents(&self) -> String;

    /// Insert `text` at byte offset `pos`. Callers guarantee `pos` is a char
    /// boundary no greater than the current length.
    fn insert_at(&mut self, pos: usize, text: &str);
}

impl TextStore for String {
    fn replace_all(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }

    fn contents(&self) -> String {
        self.clone()
    }

    fn insert_at(&mut self, pos: usize, text: &str) {
        self.insert_str(pos, text);
    }
}

/// The widget that displays the document with a whole-document style.
pub trait StyleView {
    fn apply_style(&mut self, style: &TextStyle);
}

/// Modal dialogs. Every call blocks until the user answers.
pub trait DialogHost {
    /// Ask for a file to open. `None` means the user cancelled.
    fn pick_open_path(&mut self, start_dir: Option<&Path>) -> Option<PathBuf>;

    /// Ask for a path to save to. `None` means the user cancelled.
    fn pick_save_path(&mut self, start_dir: Option<&Path>) -> Option<PathBuf>;

    fn show_error(&mut self, title: &str, message: &str);

    /// Yes/no question. Dismissing the dialog counts as no.
    fn confirm(&mut self, title: &str, question: &str) -> bool;
}
