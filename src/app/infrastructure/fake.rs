//! Fake platform for testing the controller without a display.
//!
//! Dialog answers are queued up front; everything the controller asks the
//! platform to do is recorded for assertions.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use super::platform::{DialogHost, StyleView};
use crate::app::domain::style::TextStyle;

/// Records every style applied to the view.
#[derive(Debug, Default)]
pub struct FakeView {
    pub applied: Vec<TextStyle>,
}

impl FakeView {
    pub fn current(&self) -> Option<&TextStyle> {
        self.applied.last()
    }
}

impl StyleView for FakeView {
    fn apply_style(&mut self, style: &TextStyle) {
        self.applied.push(*style);
    }
}

/// Scripted dialogs. An empty queue answers like a cancelled dialog.
#[derive(Debug, Default)]
pub struct FakeDialogs {
    open_answers: VecDeque<Option<PathBuf>>,
    save_answers: VecDeque<Option<PathBuf>>,
    confirm_answers: VecDeque<bool>,
    pub errors: Vec<(String, String)>,
    pub questions: Vec<String>,
    pub start_dirs: Vec<Option<PathBuf>>,
}

impl FakeDialogs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_open(&mut self, path: Option<PathBuf>) {
        self.open_answers.push_back(path);
    }

    pub fn queue_save(&mut self, path: Option<PathBuf>) {
        self.save_answers.push_back(path);
    }

    pub fn queue_confirm(&mut self, answer: bool) {
        self.confirm_answers.push_back(answer);
    }
}

impl DialogHost for FakeDialogs {
    fn pick_open_path(&mut self, start_dir: Option<&Path>) -> Option<PathBuf> {
        self.start_dirs.push(start_dir.map(Path::to_path_buf));
        self.open_answers.pop_front().flatten()
    }

    fn pick_save_path(&mut self, start_dir: Option<&Path>) -> Option<PathBuf> {
        self.start_dirs.push(start_dir.map(Path::to_path_buf));
        self.save_answers.pop_front().flatten()
    }

    fn show_error(&mut self, title: &str, message: &str) {
        self.errors.push((title.to_string(), message.to_string()));
    }

    fn confirm(&mut self, _title: &str, question: &str) -> bool {
        self.questions.push(question.to_string());
        self.confirm_answers.pop_front().unwrap_or(false)
    }
}
