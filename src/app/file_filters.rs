/// Filter string for the open and save dialogs.
///
/// FLTK format: "Description\tPattern\nDescription2\tPattern2", one filter per line.
/// Note: FLTK automatically adds an "All Files (*)" option, so we don't include it
pub fn text_files_filter() -> String {
    TEXT_FILE_FILTERS
        .iter()
        .map(|(description, pattern)| format!("{}\t{}", description, pattern))
        .collect::<Vec<_>>()
        .join("\n")
}

/// (description, pattern) pairs offered by the file dialogs, in order.
pub const TEXT_FILE_FILTERS: [(&str, &str); 3] = [
    ("Text Files", "*.txt"),
    ("Markdown Files", "*.md"),
    ("Python Files", "*.py"),
];
