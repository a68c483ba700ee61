use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::domain::messages::Message;
use crate::app::domain::style::StyleOption;

/// One item of the menu bar.
#[derive(Debug, Clone)]
pub struct MenuEntry {
    /// FLTK menu path, e.g. "Edit/Font Size/24"
    pub path: String,
    pub shortcut: Shortcut,
    pub message: Message,
}

impl MenuEntry {
    fn new(path: impl Into<String>, shortcut: Shortcut, message: Message) -> Self {
        Self {
            path: path.into(),
            shortcut,
            message,
        }
    }
}

/// The full menu bar, in display order.
pub fn menu_entries() -> Vec<MenuEntry> {
    let mut entries = vec![
        MenuEntry::new("File/New", Shortcut::Ctrl | 'n', Message::FileNew),
        MenuEntry::new("File/Open", Shortcut::Ctrl | 'o', Message::FileOpen),
        MenuEntry::new("File/Save", Shortcut::Ctrl | 's', Message::FileSave),
        MenuEntry::new("File/Exit", Shortcut::Ctrl | 'q', Message::FileQuit),
    ];

    entries.extend(StyleOption::all().into_iter().map(|option| {
        MenuEntry::new(
            format!("Edit/{}/{}", option.submenu(), option.label()),
            Shortcut::None,
            Message::ApplyStyle(option),
        )
    }));

    entries
}

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>) {
    for entry in menu_entries() {
        let s = *sender;
        let message = entry.message;
        menu.add(&entry.path, entry.shortcut, MenuFlag::Normal, move |_| s.send(message));
    }
}
