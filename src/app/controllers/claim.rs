use super::input::InputModeController;
use super::presenter::{present, Presentation};
use super::submission::{
    SubmissionId, SubmissionOrchestrator, SubmissionOutcome, SubmissionState, SubmissionTicket,
};
use crate::app::domain::input::{ImageFile, InputMode};
use crate::app::infrastructure::error::ValidationError;
use crate::app::services::classifier::Classify;

/// The single state object behind the window: input buffers plus the
/// submission lifecycle.
#[derive(Debug, Default)]
pub struct ClaimController {
    input: InputModeController,
    submission: SubmissionOrchestrator,
}

impl ClaimController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> InputMode {
        self.input.mode()
    }

    /// Switch modes. Always drops the current result or error, and abandons
    /// any submission still in flight, even when `mode` is already active.
    pub fn set_mode(&mut self, mode: InputMode) {
        self.input.set_mode(mode);
        self.submission.reset();
    }

    pub fn text(&self) -> &str {
        self.input.text()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.input.set_text(text);
    }

    pub fn url(&self) -> &str {
        self.input.url()
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.input.set_url(url);
    }

    pub fn image(&self) -> Option<&ImageFile> {
        self.input.image()
    }

    /// Validate and store an image. Failure is reported synchronously and
    /// also surfaces as the current error.
    pub fn set_image_file(&mut self, file: ImageFile) -> Result<(), ValidationError> {
        match self.input.validate_file(file) {
            Ok(()) => {
                self.submission.clear_error();
                Ok(())
            }
            Err(e) => {
                self.reject_image(e.clone());
                Err(e)
            }
        }
    }

    /// Surface an image rejected before it could be loaded. The image
    /// buffer is emptied, as for a file refused by `set_image_file`.
    pub fn reject_image(&mut self, err: ValidationError) {
        log::info!("Rejected image: {}", err);
        self.input.clear_image();
        self.submission.reject(err);
    }

    pub fn clear_image(&mut self) {
        self.input.clear_image();
    }

    pub fn can_submit(&self) -> bool {
        !self.submission.is_submitting() && self.input.is_ready()
    }

    /// Start a submission for the active mode. The caller performs the
    /// request and reports back through `settle`.
    pub fn begin_submission(&mut self) -> Option<SubmissionTicket> {
        if !self.can_submit() {
            return None;
        }
        let input = self.input.snapshot()?;
        self.submission.begin(input)
    }

    pub fn settle(&mut self, id: SubmissionId, outcome: SubmissionOutcome) -> bool {
        self.submission.settle(id, outcome)
    }

    /// Synchronous submit: begin, classify and settle in one call.
    pub fn submit<C: Classify + ?Sized>(&mut self, client: &C) -> bool {
        if !self.can_submit() {
            return false;
        }
        match self.input.snapshot() {
            Some(input) => self.submission.submit(client, input),
            None => false,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        self.submission.state()
    }

    pub fn is_submitting(&self) -> bool {
        self.submission.is_submitting()
    }

    pub fn presentation(&self) -> Option<Presentation> {
        match self.submission.state() {
            SubmissionState::Succeeded(result) => Some(present(result)),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<String> {
        match self.submission.state() {
            SubmissionState::Failed(err) => Some(err.to_string()),
            _ => None,
        }
    }
}
