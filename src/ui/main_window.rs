use fltk::{
    enums::Color,
    group::Flex,
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
    window::Window,
};

use crate::app::domain::settings::AppSettings;

pub const WINDOW_TITLE: &str = "My Text Editor";
const MENU_HEIGHT: i32 = 30;

pub struct MainWidgets {
    pub wind: Window,
    pub menu: MenuBar,
    pub text_editor: TextEditor,
    pub buffer: TextBuffer,
}

/// Window with a menu bar on top and one editable text area filling the rest.
pub fn build_main_window(settings: &AppSettings) -> MainWidgets {
    let (w, h) = (settings.window_width, settings.window_height);
    let mut wind = Window::new(100, 100, w, h, WINDOW_TITLE);
    wind.set_xclass("my-text-editor");

    let mut flex = Flex::new(0, 0, w, h, None);
    flex.set_type(fltk::group::FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, MENU_HEIGHT, "");
    flex.fixed(&menu, MENU_HEIGHT);

    let buffer = TextBuffer::default();
    let mut text_editor = TextEditor::new(0, 0, 0, 0, "");
    text_editor.set_buffer(buffer.clone());
    text_editor.set_color(Color::White);
    text_editor.set_selection_color(Color::from_rgb(173, 216, 230));
    if settings.word_wrap {
        text_editor.wrap_mode(WrapMode::AtBounds, 0);
    }

    flex.end();
    wind.resizable(&flex);
    wind.end();

    MainWidgets {
        wind,
        menu,
        text_editor,
        buffer,
    }
}
