use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use fltk::{app::Sender, dialog, prelude::*};

use super::controllers::claim::ClaimController;
use super::controllers::submission::{SubmissionId, SubmissionOutcome, SubmissionState};
use super::domain::input::{ImageFile, InputMode};
use super::domain::messages::Message;
use super::domain::settings::AppSettings;
use super::domain::verdict::ServiceStatus;
use super::infrastructure::error::AppError;
use super::services::classifier::{ClassifierClient, Classify};
use crate::ui::dialogs::about::show_about_dialog;
use crate::ui::dialogs::settings_dialog::show_settings_dialog;
use crate::ui::file_dialogs::native_image_dialog;
use crate::ui::main_window::MainWidgets;
use crate::ui::theme::{error_text_color, muted_text_color, StyleGate};

fn prompt_for(mode: InputMode) -> &'static str {
    match mode {
        InputMode::Text => "Paste the claim, headline or message you want to check.",
        InputMode::Url => "Paste a link to the article.",
        InputMode::Image => "Choose a screenshot or photo (1 MB at most).",
    }
}

fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.0} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} bytes", bytes)
    }
}

pub struct AppState {
    pub widgets: MainWidgets,
    pub sender: Sender<Message>,
    pub settings: Rc<RefCell<AppSettings>>,
    pub claim: ClaimController,
    client: Arc<ClassifierClient>,
    style: StyleGate,
    /// Outcome of the last status check, shown while idle.
    service_line: Option<String>,
}

impl AppState {
    pub fn new(
        widgets: MainWidgets,
        sender: Sender<Message>,
        settings: Rc<RefCell<AppSettings>>,
        style: StyleGate,
    ) -> Result<Self, AppError> {
        let client = Arc::new(ClassifierClient::from_settings(&settings.borrow())?);
        let mut state = Self {
            widgets,
            sender,
            settings,
            claim: ClaimController::new(),
            client,
            style,
            service_line: None,
        };
        state.refresh();
        Ok(state)
    }

    // --- Input ---

    pub fn set_mode(&mut self, mode: InputMode) {
        self.claim.set_mode(mode);
        self.refresh();
    }

    pub fn text_changed(&mut self, text: String) {
        self.claim.set_text(text);
        self.refresh_controls();
    }

    pub fn url_changed(&mut self, url: String) {
        self.claim.set_url(url);
        self.refresh_controls();
    }

    pub fn choose_image(&mut self) {
        if self.claim.mode() != InputMode::Image {
            self.claim.set_mode(InputMode::Image);
        }
        if let Some(path) = native_image_dialog() {
            match ImageFile::load(&path) {
                // Rejections surface in the status line via the claim state.
                Ok(file) => {
                    if let Err(e) = self.claim.set_image_file(file) {
                        if self.claim.is_submitting() {
                            dialog::alert_default(&e.to_string());
                        }
                    }
                }
                Err(AppError::Validation(e)) => {
                    self.claim.reject_image(e.clone());
                    if self.claim.is_submitting() {
                        dialog::alert_default(&e.to_string());
                    }
                }
                Err(e) => {
                    log::warn!("Could not read {}: {}", path.display(), e);
                    dialog::alert_default(&format!("Could not read image: {}", e));
                }
            }
        }
        self.refresh();
    }

    pub fn clear_image(&mut self) {
        self.claim.clear_image();
        self.refresh();
    }

    // --- Submission ---

    pub fn submit(&mut self) {
        let Some(ticket) = self.claim.begin_submission() else {
            return;
        };
        let client = Arc::clone(&self.client);
        let sender = self.sender;
        std::thread::spawn(move || {
            let outcome = client.classify(&ticket.input);
            sender.send(Message::SubmissionSettled {
                id: ticket.id,
                outcome,
            });
        });
        self.refresh();
    }

    pub fn submission_settled(&mut self, id: SubmissionId, outcome: SubmissionOutcome) {
        if self.claim.settle(id, outcome) {
            self.refresh();
        }
    }

    // --- Service status ---

    pub fn check_service(&self) {
        let client = Arc::clone(&self.client);
        let sender = self.sender;
        std::thread::spawn(move || {
            let result = client.health().map_err(|e| e.to_string());
            sender.send(Message::ServiceChecked(result));
        });
    }

    pub fn service_checked(&mut self, result: Result<ServiceStatus, String>) {
        let line = match result {
            Ok(status) if status.is_active() => {
                log::info!("Service online: {}", status.message);
                "Service online".to_string()
            }
            Ok(status) => {
                log::warn!("Service reported status '{}'", status.status);
                format!("Service status: {}", status.status.replace('@', "@@"))
            }
            Err(e) => {
                log::warn!("Status check failed: {}", e);
                "Service unreachable".to_string()
            }
        };
        self.service_line = Some(line);
        self.refresh_status();
    }

    // --- Settings and links ---

    pub fn open_settings(&mut self) {
        let current = self.settings.borrow().clone();
        if let Some(new_settings) = show_settings_dialog(&current) {
            if let Err(e) = new_settings.save() {
                dialog::alert_default(&format!("Failed to save settings: {}", e));
                return;
            }
            self.apply_settings(new_settings);
        }
    }

    /// Requests already in flight keep the client they started with.
    pub fn apply_settings(&mut self, new_settings: AppSettings) {
        match ClassifierClient::from_settings(&new_settings) {
            Ok(client) => self.client = Arc::new(client),
            Err(e) => {
                log::warn!("Keeping the previous client: {}", e);
                dialog::alert_default(&format!("Settings saved but could not be applied: {}", e));
            }
        }
        *self.settings.borrow_mut() = new_settings;
        self.service_line = None;
        self.check_service();
        self.refresh_status();
    }

    pub fn show_about(&self) {
        show_about_dialog(&self.settings.borrow().api_base_url);
    }

    pub fn open_link(&self, url: &str) {
        log::debug!("Opening {}", url);
        if let Err(e) = open::that(url) {
            dialog::alert_default(&format!("Could not open link: {}", e));
        }
    }

    // --- Projection ---

    /// Project the claim state onto every widget.
    pub fn refresh(&mut self) {
        if !self.style.is_ready() {
            return;
        }
        let mode = self.claim.mode();
        let w = &mut self.widgets;
        w.modes.select(mode);
        w.prompt.set_label(prompt_for(mode));

        match mode {
            InputMode::Text => {
                w.text_input.show();
                w.url_input.hide();
                w.image_row.hide();
            }
            InputMode::Url => {
                w.text_input.hide();
                w.url_input.show();
                w.image_row.hide();
            }
            InputMode::Image => {
                w.text_input.hide();
                w.url_input.hide();
                w.image_row.show();
            }
        }

        match self.claim.presentation() {
            Some(p) => w.result.show_presentation(&p),
            None => w.result.clear(),
        }

        self.refresh_controls();
        self.refresh_status();
        self.widgets.flex.layout();
        self.widgets.wind.redraw();
    }

    fn refresh_controls(&mut self) {
        let w = &mut self.widgets;
        if self.claim.can_submit() {
            w.analyze_btn.activate();
        } else {
            w.analyze_btn.deactivate();
        }
        w.analyze_btn.set_label(if self.claim.is_submitting() { "Analyzing..." } else { "Analyze" });

        match self.claim.image() {
            Some(image) => {
                w.image_label.set_label(&format!(
                    " {} ({})",
                    image.file_name.replace('@', "@@"),
                    format_size(image.size())
                ));
                w.clear_image_btn.activate();
            }
            None => {
                w.image_label.set_label(" No image selected");
                w.clear_image_btn.deactivate();
            }
        }
        w.analyze_btn.redraw();
        w.image_row.redraw();
    }

    fn refresh_status(&mut self) {
        let frame = &mut self.widgets.status_frame;
        match self.claim.state() {
            SubmissionState::Idle => {
                frame.set_label_color(muted_text_color());
                frame.set_label(self.service_line.as_deref().unwrap_or(""));
            }
            SubmissionState::Submitting => {
                frame.set_label_color(muted_text_color());
                frame.set_label("Analyzing...");
            }
            SubmissionState::Succeeded(_) => {
                frame.set_label_color(muted_text_color());
                frame.set_label("Analysis complete.");
            }
            SubmissionState::Failed(err) => {
                frame.set_label_color(error_text_color());
                frame.set_label(&err.to_string().replace('@', "@@"));
            }
        }
        frame.redraw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 bytes");
        assert_eq!(format_size(2048), "2 KB");
        assert_eq!(format_size(1024 * 1024), "1.0 MB");
    }

    #[test]
    fn test_every_mode_has_a_prompt() {
        for mode in InputMode::all() {
            assert!(!prompt_for(*mode).is_empty());
        }
    }
}
