use super::style::StyleOption;

/// All messages that can be sent through the FLTK channel.
/// Each menu callback sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    // File
    FileNew,
    FileOpen,
    FileSave,
    FileQuit,
    WindowClose,

    // Edit
    ApplyStyle(StyleOption),
}
