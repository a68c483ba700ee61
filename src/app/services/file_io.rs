use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::app::infrastructure::error::{AppError, Result};

/// Extension given to saved files when the chosen name has none.
pub const DEFAULT_EXTENSION: &str = "txt";

/// Read a whole file as UTF-8 text.
///
/// Text containing NUL bytes is rejected: the FLTK buffer stops at the first
/// NUL, so loading it would silently drop the rest of the file.
pub fn read_text_file(path: &Path) -> Result<String> {
    let open_error = |source| AppError::FileOpen {
        path: path.to_path_buf(),
        source,
    };
    let content = fs::read_to_string(path).map_err(open_error)?;
    if content.contains('\0') {
        return Err(open_error(io::Error::new(
            io::ErrorKind::InvalidData,
            "file contains NUL bytes",
        )));
    }
    Ok(content)
}

/// Write `content` to `path`, replacing whatever was there.
pub fn write_text_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source| AppError::FileSave {
        path: path.to_path_buf(),
        source,
    })
}

/// Append the default extension to a path that has none.
pub fn with_default_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension(DEFAULT_EXTENSION)
    }
}

/// Directory to start the next open/save dialog in.
pub fn parent_dir(path: &Path) -> Option<PathBuf> {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
}
