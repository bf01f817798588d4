use fltk::{
    button::{Button, CheckButton},
    dialog,
    enums::{Align, Color},
    frame::Frame,
    input::Input,
    prelude::*,
    window::Window,
};
use std::cell::RefCell;
use std::rc::Rc;

use crate::app::domain::settings::AppSettings;

/// Blank means no timeout.
fn parse_timeout(raw: &str) -> Result<Option<u64>, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<u64>()
        .map(Some)
        .map_err(|_| format!("'{}' is not a whole number of seconds", raw))
}

fn section_label(y: i32, label: &str) {
    Frame::default()
        .with_pos(15, y)
        .with_size(390, 25)
        .with_label(label)
        .with_align(Align::Left | Align::Inside);
}

fn field(y: i32, value: &str) -> Input {
    let mut input = Input::default().with_pos(30, y).with_size(360, 28);
    input.set_value(value);
    input
}

/// Show settings dialog and return updated settings if user clicked Save.
/// Invalid values keep the dialog open.
pub fn show_settings_dialog(current_settings: &AppSettings) -> Option<AppSettings> {
    let mut dialog = Window::default()
        .with_size(420, 470)
        .with_label("Settings")
        .center_screen();
    dialog.make_modal(true);

    section_label(15, "Service URL:");
    let base_input = field(42, &current_settings.api_base_url);

    section_label(80, "Text endpoint:");
    let text_input = field(107, &current_settings.text_endpoint);

    section_label(145, "Link endpoint:");
    let url_input = field(172, &current_settings.url_endpoint);

    section_label(210, "Image endpoint:");
    let image_input = field(237, &current_settings.image_endpoint);

    section_label(275, "Request timeout (seconds, blank for none):");
    let timeout_value = current_settings
        .request_timeout_secs
        .map(|t| t.to_string())
        .unwrap_or_default();
    let timeout_input = field(302, &timeout_value);

    let mut check_startup = CheckButton::default()
        .with_pos(30, 345)
        .with_size(360, 25)
        .with_label("Check the service when FactCheck starts");
    check_startup.set_value(current_settings.check_service_on_startup);

    let mut info_frame = Frame::default().with_pos(30, 375).with_size(360, 35);
    info_frame.set_label("Changes apply to the next analysis.");
    info_frame.set_label_size(11);
    info_frame.set_label_color(Color::from_rgb(100, 100, 100));
    info_frame.set_align(Align::Left | Align::Inside | Align::Wrap);

    let mut save_btn = Button::default().with_pos(210, 425).with_size(90, 30).with_label("Save");
    let mut cancel_btn = Button::default().with_pos(310, 425).with_size(90, 30).with_label("Cancel");

    dialog.end();
    dialog.show();

    let result = Rc::new(RefCell::new(None));
    let result_save = result.clone();
    let result_cancel = result.clone();

    let dialog_save = dialog.clone();
    save_btn.set_callback(move |_| {
        let request_timeout_secs = match parse_timeout(&timeout_input.value()) {
            Ok(t) => t,
            Err(e) => {
                dialog::alert_default(&e);
                return;
            }
        };
        let new_settings = AppSettings {
            api_base_url: base_input.value().trim().to_string(),
            text_endpoint: text_input.value().trim().to_string(),
            url_endpoint: url_input.value().trim().to_string(),
            image_endpoint: image_input.value().trim().to_string(),
            request_timeout_secs,
            check_service_on_startup: check_startup.value(),
        };
        if let Err(e) = new_settings.validate() {
            dialog::alert_default(&e.to_string());
            return;
        }

        *result_save.borrow_mut() = Some(new_settings);
        dialog_save.clone().hide();
    });

    let dialog_cancel = dialog.clone();
    cancel_btn.set_callback(move |_| {
        *result_cancel.borrow_mut() = None;
        dialog_cancel.clone().hide();
    });

    let result_close = result.clone();
    dialog.set_callback(move |w| {
        *result_close.borrow_mut() = None;
        w.hide();
    });

    super::run_dialog(&dialog);

    result.borrow().clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timeout() {
        assert_eq!(parse_timeout(""), Ok(None));
        assert_eq!(parse_timeout("  "), Ok(None));
        assert_eq!(parse_timeout(" 30 "), Ok(Some(30)));
        assert!(parse_timeout("ten").is_err());
        assert!(parse_timeout("-5").is_err());
    }
}
