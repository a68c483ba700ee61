use std::path::{Path, PathBuf};

use super::domain::document::Document;
use super::domain::messages::Message;
use super::domain::style::{FontFamily, FontSize, StyleOption, TextColor, TextStyle};
use super::infrastructure::error::{AppError, Result};
use super::infrastructure::platform::{DialogHost, StyleView, TextStore};
use super::services::file_io::{self, parent_dir, with_default_extension};

const FILE_ERROR_TITLE: &str = "File Error";
const EXIT_TITLE: &str = "Exit";
const EXIT_QUESTION: &str = "Do you really want to quit?";
const OVERWRITE_TITLE: &str = "Save As";

/// What the event loop should do after a message is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// The editor controller.
///
/// Owns the document, the current style and the handles to the view and
/// dialogs. Every menu message ends up in [`Editor::handle`].
pub struct Editor<S: TextStore, V: StyleView, D: DialogHost> {
    document: Document<S>,
    view: V,
    dialogs: D,
    style: TextStyle,
    /// Last directory used in a file open/save dialog.
    last_directory: Option<PathBuf>,
}

impl<S: TextStore, V: StyleView, D: DialogHost> Editor<S, V, D> {
    /// Build the controller and render the initial style into the view.
    pub fn new(store: S, view: V, dialogs: D, style: TextStyle) -> Self {
        let mut editor = Self {
            document: Document::new(store),
            view,
            dialogs,
            style,
            last_directory: None,
        };
        editor.view.apply_style(&editor.style);
        editor
    }

    pub fn handle(&mut self, msg: Message) -> Flow {
        tracing::debug!(?msg, "handling message");
        match msg {
            Message::FileNew => self.file_new(),
            Message::FileOpen => self.file_open(),
            Message::FileSave => self.file_save(),
            Message::FileQuit => {
                if self.quit() {
                    return Flow::Quit;
                }
            }
            Message::WindowClose => {
                tracing::info!("window closed");
                return Flow::Quit;
            }
            Message::ApplyStyle(option) => self.apply_option(option),
        }
        Flow::Continue
    }

    // --- File operations ---

    pub fn file_new(&mut self) {
        self.document.clear();
        tracing::info!("new document");
    }

    pub fn file_open(&mut self) {
        let Some(path) = self.dialogs.pick_open_path(self.last_directory.as_deref()) else {
            tracing::debug!("open cancelled");
            return;
        };
        if let Err(e) = self.open_path(&path) {
            self.report(e);
        }
    }

    /// Replace the document with the content of `path`. On error the
    /// document is left untouched.
    pub fn open_path(&mut self, path: &Path) -> Result<()> {
        let content = file_io::read_text_file(path)?;
        self.document.load(&content);
        self.remember_directory(path);
        tracing::info!(path = %path.display(), bytes = content.len(), "opened file");
        Ok(())
    }

    pub fn file_save(&mut self) {
        let Some(path) = self.dialogs.pick_save_path(self.last_directory.as_deref()) else {
            tracing::debug!("save cancelled");
            return;
        };
        let chosen = path.clone();
        let path = with_default_extension(path);
        // The native chooser only checked the name as typed.
        if path != chosen && path.exists() {
            let question = format!("{} already exists.\nDo you want to replace it?", path.display());
            if !self.dialogs.confirm(OVERWRITE_TITLE, &question) {
                tracing::debug!(path = %path.display(), "overwrite declined");
                return;
            }
        }
        if let Err(e) = self.save_to(&path) {
            self.report(e);
        }
    }

    /// Write the full document to `path`.
    pub fn save_to(&mut self, path: &Path) -> Result<()> {
        let text = self.document.dump();
        file_io::write_text_file(path, &text)?;
        self.remember_directory(path);
        tracing::info!(path = %path.display(), bytes = text.len(), "saved file");
        Ok(())
    }

    /// Ask for confirmation. Returns `true` if the editor should exit.
    pub fn quit(&mut self) -> bool {
        let confirmed = self.dialogs.confirm(EXIT_TITLE, EXIT_QUESTION);
        tracing::info!(confirmed, "quit requested");
        confirmed
    }

    fn remember_directory(&mut self, path: &Path) {
        if let Some(dir) = parent_dir(path) {
            self.last_directory = Some(dir);
        }
    }

    fn report(&mut self, err: AppError) {
        tracing::warn!(error = %err, "file operation failed");
        self.dialogs.show_error(FILE_ERROR_TITLE, &err.to_string());
    }

    // --- Style ---

    pub fn set_font_family(&mut self, family: FontFamily) {
        self.apply_option(StyleOption::Family(family));
    }

    pub fn set_font_size(&mut self, size: FontSize) {
        self.apply_option(StyleOption::Size(size));
    }

    pub fn set_color(&mut self, color: TextColor) {
        self.apply_option(StyleOption::Color(color));
    }

    /// Apply one menu selection and re-render the full style.
    pub fn apply_option(&mut self, option: StyleOption) {
        self.style = self.style.with_option(option);
        self.view.apply_style(&self.style);
        tracing::debug!(style = ?self.style, "style applied");
    }

    // --- Accessors ---

    pub fn style(&self) -> TextStyle {
        self.style
    }

    pub fn document(&self) -> &Document<S> {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document<S> {
        &mut self.document
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn dialogs(&self) -> &D {
        &self.dialogs
    }

    pub fn dialogs_mut(&mut self) -> &mut D {
        &mut self.dialogs
    }

    pub fn last_directory(&self) -> Option<&Path> {
        self.last_directory.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::infrastructure::fake::{FakeDialogs, FakeView};
    use std::fs;
    use tempfile::TempDir;

    type TestEditor = Editor<String, FakeView, FakeDialogs>;

    fn editor() -> TestEditor {
        Editor::new(String::new(), FakeView::default(), FakeDialogs::new(), TextStyle::default())
    }

    fn size(points: u32) -> FontSize {
        FontSize::new(points).unwrap()
    }

    #[test]
    fn test_initial_style_is_rendered() {
        let ed = editor();
        assert_eq!(ed.view().applied, vec![TextStyle::default()]);
        assert_eq!(ed.style(), TextStyle::default());
    }

    #[test]
    fn test_size_then_color_applies_full_tuple() {
        let mut ed = editor();
        ed.handle(Message::ApplyStyle(StyleOption::Size(size(24))));
        ed.handle(Message::ApplyStyle(StyleOption::Color(TextColor::Red)));

        let expected = TextStyle::new(FontFamily::Helvetica, size(24), TextColor::Red);
        assert_eq!(ed.style(), expected);
        assert_eq!(ed.view().current(), Some(&expected));
    }

    #[test]
    fn test_view_tracks_most_recent_values() {
        let mut ed = editor();
        ed.set_font_family(FontFamily::Arial);
        ed.set_font_size(size(10));
        ed.set_color(TextColor::Green);
        ed.set_font_family(FontFamily::CourierNew);
        ed.set_font_size(size(48));

        let expected = TextStyle::new(FontFamily::CourierNew, size(48), TextColor::Green);
        assert_eq!(ed.view().current(), Some(&expected));
        // one render at startup plus one per selection
        assert_eq!(ed.view().applied.len(), 6);
    }

    #[test]
    fn test_repeated_selection_is_idempotent() {
        let mut ed = editor();
        ed.set_color(TextColor::Blue);
        let after_first = ed.style();
        ed.set_color(TextColor::Blue);
        assert_eq!(ed.style(), after_first);
        assert_eq!(ed.view().current(), Some(&after_first));
    }

    #[test]
    fn test_new_clears_document() {
        let mut ed = editor();
        ed.document_mut().load("draft");
        assert_eq!(ed.handle(Message::FileNew), Flow::Continue);
        assert_eq!(ed.document().dump(), "");
    }

    #[test]
    fn test_open_missing_file_shows_one_error_and_keeps_content() {
        let dir = TempDir::new().unwrap();
        let mut ed = editor();
        ed.document_mut().load("unsaved work");
        ed.dialogs_mut().queue_open(Some(dir.path().join("missing.txt")));

        ed.handle(Message::FileOpen);

        assert_eq!(ed.dialogs().errors.len(), 1);
        let (title, message) = &ed.dialogs().errors[0];
        assert_eq!(title, "File Error");
        assert!(message.starts_with("Could not open the file:"));
        assert_eq!(ed.document().dump(), "unsaved work");
    }

    #[test]
    fn test_open_cancelled_is_noop() {
        let mut ed = editor();
        ed.document_mut().load("keep me");
        ed.dialogs_mut().queue_open(None);

        ed.handle(Message::FileOpen);

        assert!(ed.dialogs().errors.is_empty());
        assert_eq!(ed.document().dump(), "keep me");
    }

    #[test]
    fn test_save_cancelled_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let mut ed = editor();
        ed.document_mut().load("hello");
        ed.dialogs_mut().queue_save(None);

        ed.handle(Message::FileSave);

        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
        assert!(ed.dialogs().errors.is_empty());
    }

    #[test]
    fn test_save_new_open_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.txt");
        let mut ed = editor();

        ed.document_mut().insert(0, "hello");
        ed.dialogs_mut().queue_save(Some(path.clone()));
        ed.handle(Message::FileSave);
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");

        ed.handle(Message::FileNew);
        assert!(ed.document().is_empty());

        ed.dialogs_mut().queue_open(Some(path));
        ed.handle(Message::FileOpen);
        assert_eq!(ed.document().dump(), "hello");
        assert!(ed.dialogs().errors.is_empty());
    }

    #[test]
    fn test_save_appends_default_extension() {
        let dir = TempDir::new().unwrap();
        let mut ed = editor();
        ed.document_mut().load("notes");
        ed.dialogs_mut().queue_save(Some(dir.path().join("notes")));

        ed.handle(Message::FileSave);

        assert_eq!(fs::read_to_string(dir.path().join("notes.txt")).unwrap(), "notes");
        assert!(!dir.path().join("notes").exists());
    }

    #[test]
    fn test_save_asks_before_replacing_file_with_added_extension() {
        let dir = TempDir::new().unwrap();
        let existing = dir.path().join("notes.txt");
        fs::write(&existing, "old").unwrap();
        let mut ed = editor();
        ed.document_mut().load("new");

        ed.dialogs_mut().queue_save(Some(dir.path().join("notes")));
        ed.dialogs_mut().queue_confirm(false);
        ed.handle(Message::FileSave);
        assert_eq!(fs::read_to_string(&existing).unwrap(), "old");
        assert_eq!(ed.dialogs().questions.len(), 1);
        assert!(ed.dialogs().questions[0].contains("notes.txt"));

        ed.dialogs_mut().queue_save(Some(dir.path().join("notes")));
        ed.dialogs_mut().queue_confirm(true);
        ed.handle(Message::FileSave);
        assert_eq!(fs::read_to_string(&existing).unwrap(), "new");
    }

    #[test]
    fn test_save_with_explicit_extension_does_not_ask_again() {
        let dir = TempDir::new().unwrap();
        let existing = dir.path().join("notes.txt");
        fs::write(&existing, "old").unwrap();
        let mut ed = editor();
        ed.document_mut().load("new");

        ed.dialogs_mut().queue_save(Some(existing.clone()));
        ed.handle(Message::FileSave);

        assert!(ed.dialogs().questions.is_empty());
        assert_eq!(fs::read_to_string(&existing).unwrap(), "new");
    }

    #[test]
    fn test_open_file_with_nul_byte_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nul.txt");
        fs::write(&path, "abc\0def").unwrap();
        let mut ed = editor();
        ed.document_mut().load("before");
        ed.dialogs_mut().queue_open(Some(path));

        ed.handle(Message::FileOpen);

        assert_eq!(ed.dialogs().errors.len(), 1);
        assert!(ed.dialogs().errors[0].1.starts_with("Could not open the file:"));
        assert_eq!(ed.document().dump(), "before");
    }

    #[test]
    fn test_save_failure_shows_error_and_keeps_document() {
        let dir = TempDir::new().unwrap();
        let mut ed = editor();
        ed.document_mut().load("precious");
        ed.dialogs_mut()
            .queue_save(Some(dir.path().join("missing-dir").join("a.txt")));

        ed.handle(Message::FileSave);

        assert_eq!(ed.dialogs().errors.len(), 1);
        assert!(ed.dialogs().errors[0].1.starts_with("Could not save the file:"));
        assert_eq!(ed.document().dump(), "precious");
    }

    #[test]
    fn test_dialogs_start_in_last_used_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, "x").unwrap();
        let mut ed = editor();

        ed.dialogs_mut().queue_open(Some(path));
        ed.handle(Message::FileOpen);
        ed.dialogs_mut().queue_save(None);
        ed.handle(Message::FileSave);

        assert_eq!(ed.last_directory(), Some(dir.path()));
        assert_eq!(ed.dialogs().start_dirs, vec![None, Some(dir.path().to_path_buf())]);
    }

    #[test]
    fn test_quit_requires_confirmation() {
        let mut ed = editor();
        ed.dialogs_mut().queue_confirm(false);
        assert_eq!(ed.handle(Message::FileQuit), Flow::Continue);

        ed.dialogs_mut().queue_confirm(true);
        assert_eq!(ed.handle(Message::FileQuit), Flow::Quit);
        assert_eq!(ed.dialogs().questions, vec![EXIT_QUESTION, EXIT_QUESTION]);
    }

    #[test]
    fn test_window_close_quits_without_asking() {
        let mut ed = editor();
        assert_eq!(ed.handle(Message::WindowClose), Flow::Quit);
        assert!(ed.dialogs().questions.is_empty());
    }
}
