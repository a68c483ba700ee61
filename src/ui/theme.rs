use fltk::{prelude::*, text::TextEditor};

use crate::app::domain::style::TextStyle;
use crate::app::infrastructure::platform::StyleView;

/// Render the whole-document style into the editor widget.
pub fn apply_text_style(editor: &mut TextEditor, style: &TextStyle) {
    editor.set_text_font(style.family.to_fltk());
    // FontSize is capped well below i32::MAX
    editor.set_text_size(i32::try_from(style.size.points()).unwrap_or(i32::MAX));
    editor.set_text_color(style.color.to_fltk());
    editor.set_cursor_color(style.color.to_fltk());
    editor.redraw();
}

impl StyleView for TextEditor {
    fn apply_style(&mut self, style: &TextStyle) {
        apply_text_style(self, style);
    }
}
