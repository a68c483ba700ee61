use std::path::{Path, PathBuf};

use fltk::dialog::{self, FileDialogType, NativeFileChooser, NativeFileChooserOptions};

use crate::app::file_filters::text_files_filter;
use crate::app::infrastructure::platform::DialogHost;

fn chooser(kind: FileDialogType, title: &str, start_dir: Option<&Path>) -> NativeFileChooser {
    let mut nfc = NativeFileChooser::new(kind);
    nfc.set_title(title);
    nfc.set_filter(&text_files_filter());
    if let Some(dir) = start_dir {
        if let Err(e) = nfc.set_directory(&dir) {
            tracing::debug!(dir = %dir.display(), "could not set dialog directory: {:?}", e);
        }
    }
    nfc
}

fn run(mut nfc: NativeFileChooser) -> Option<PathBuf> {
    nfc.show(); // blocks until close
    let filename = nfc.filename();
    if filename.as_os_str().is_empty() {
        None
    } else {
        Some(filename)
    }
}

pub fn native_open_dialog(start_dir: Option<&Path>) -> Option<PathBuf> {
    run(chooser(FileDialogType::BrowseFile, "Open", start_dir))
}

pub fn native_save_dialog(start_dir: Option<&Path>) -> Option<PathBuf> {
    let mut nfc = chooser(FileDialogType::BrowseSaveFile, "Save As", start_dir);
    nfc.set_option(NativeFileChooserOptions::SaveAsConfirm);
    run(nfc)
}

/// FLTK's native file choosers and message boxes.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeDialogs;

impl DialogHost for NativeDialogs {
    fn pick_open_path(&mut self, start_dir: Option<&Path>) -> Option<PathBuf> {
        native_open_dialog(start_dir)
    }

    fn pick_save_path(&mut self, start_dir: Option<&Path>) -> Option<PathBuf> {
        native_save_dialog(start_dir)
    }

    fn show_error(&mut self, title: &str, message: &str) {
        dialog::message_title(title);
        dialog::alert_default(message);
    }

    fn confirm(&mut self, title: &str, question: &str) -> bool {
        dialog::message_title(title);
        matches!(dialog::choice2_default(question, "OK", "Cancel", ""), Some(0))
    }
}
