use fltk::{app, dialog, enums::Event, prelude::*};
use std::cell::RefCell;
use std::rc::Rc;

use factcheck::app::domain::messages::Message;
use factcheck::app::domain::settings::AppSettings;
use factcheck::app::state::AppState;
use factcheck::ui::main_window::build_main_window;
use factcheck::ui::menu::build_menu;
use factcheck::ui::theme::StyleGate;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app = app::App::default();
    let mut style = StyleGate::new();
    style.open();

    let (sender, receiver) = app::channel::<Message>();

    let settings = Rc::new(RefCell::new(AppSettings::load()));
    let check_on_startup = settings.borrow().check_service_on_startup;

    let mut widgets = build_main_window(&sender);
    build_menu(&mut widgets.menu, &sender);

    // Route the close button through the dispatch loop; Escape is ignored.
    {
        let s = sender;
        widgets.wind.set_callback(move |_| {
            if app::event() == Event::Close {
                s.send(Message::WindowClose);
            }
        });
    }

    widgets.wind.show();

    let mut state = match AppState::new(widgets, sender, settings, style) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Could not start: {}", e);
            dialog::alert_default(&format!("FactCheck could not start: {}", e));
            return;
        }
    };
    if check_on_startup {
        state.check_service();
    }

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::FileQuit | Message::WindowClose => {
                    app.quit();
                }
                Message::OpenSettings => state.open_settings(),
                Message::SetMode(mode) => state.set_mode(mode),
                Message::TextChanged(text) => state.text_changed(text),
                Message::UrlChanged(url) => state.url_changed(url),
                Message::ChooseImage => state.choose_image(),
                Message::ClearImage => state.clear_image(),
                Message::Submit => state.submit(),
                Message::SubmissionSettled { id, outcome } => state.submission_settled(id, outcome),
                Message::ServiceChecked(result) => state.service_checked(result),
                Message::OpenLink(url) => state.open_link(&url),
                Message::ShowAbout => state.show_about(),
            }
        }
    }
}
