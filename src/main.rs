use fltk::{app, enums::Event, prelude::*};

use my_text_editor::app::{AppSettings, Editor, Flow, Message};
use my_text_editor::logging;
use my_text_editor::ui::file_dialogs::NativeDialogs;
use my_text_editor::ui::main_window::build_main_window;
use my_text_editor::ui::menu::build_menu;

fn main() {
    logging::init();

    let app = app::App::default().load_system_fonts();
    let settings = AppSettings::load();
    tracing::debug!(?settings, "settings loaded");

    let (sender, receiver) = app::channel::<Message>();

    let mut widgets = build_main_window(&settings);
    build_menu(&mut widgets.menu, &sender);

    // Only the title-bar close button ends the app; FLTK also fires the
    // window callback on Escape, which is ignored here.
    widgets.wind.set_callback(move |_| {
        if app::event() == Event::Close {
            sender.send(Message::WindowClose);
        }
    });

    widgets.wind.show();

    let mut editor = Editor::new(
        widgets.buffer.clone(),
        widgets.text_editor.clone(),
        NativeDialogs,
        settings.initial_style(),
    );
    tracing::info!("editor started");

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            if editor.handle(msg) == Flow::Quit {
                app.quit();
                break;
            }
        }
    }
}
