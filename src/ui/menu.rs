use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::domain::input::InputMode;
use crate::app::domain::messages::Message;

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>) {
    let s = sender;

    // File
    menu.add("File/Choose Image...", Shortcut::Ctrl | 'o', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ChooseImage) });
    menu.add("File/Analyze", Shortcut::Ctrl | 'r', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::Submit) });
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileQuit) });

    // Edit
    menu.add("Edit/Settings...", Shortcut::Ctrl | ',', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::OpenSettings) });

    // Mode
    menu.add("Mode/Text", Shortcut::Ctrl | '1', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SetMode(InputMode::Text)) });
    menu.add("Mode/Link", Shortcut::Ctrl | '2', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SetMode(InputMode::Url)) });
    menu.add("Mode/Image", Shortcut::Ctrl | '3', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SetMode(InputMode::Image)) });

    // Help
    menu.add("Help/About FactCheck", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowAbout) });
}
