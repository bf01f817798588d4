use crate::app::domain::input::{ImageFile, InputMode, SubmissionInput, MAX_IMAGE_BYTES};
use crate::app::infrastructure::error::ValidationError;

/// Reject images over the upload cap.
pub fn validate_image(file: &ImageFile) -> Result<(), ValidationError> {
    if file.size() > MAX_IMAGE_BYTES {
        return Err(ValidationError::FileTooLarge {
            size: file.size(),
            limit: MAX_IMAGE_BYTES,
        });
    }
    Ok(())
}

/// Active input mode plus one buffer per mode. Buffers of inactive modes are
/// kept, so switching back restores what the user typed.
#[derive(Debug, Default)]
pub struct InputModeController {
    mode: InputMode,
    text: String,
    url: String,
    image: Option<ImageFile>,
}

impl InputModeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    pub fn image(&self) -> Option<&ImageFile> {
        self.image.as_ref()
    }

    pub fn clear_image(&mut self) {
        self.image = None;
    }

    /// Store `file` if it fits under the cap. A rejected file replaces
    /// nothing: the image buffer is left empty.
    pub fn validate_file(&mut self, file: ImageFile) -> Result<(), ValidationError> {
        match validate_image(&file) {
            Ok(()) => {
                self.image = Some(file);
                Ok(())
            }
            Err(e) => {
                self.image = None;
                Err(e)
            }
        }
    }

    /// Whether the active mode's buffer holds something sendable.
    pub fn is_ready(&self) -> bool {
        match self.mode {
            InputMode::Text => !self.text.trim().is_empty(),
            InputMode::Url => !self.url.trim().is_empty(),
            InputMode::Image => self.image.is_some(),
        }
    }

    /// Snapshot the active buffer for sending. Buffers stay as they are.
    pub fn snapshot(&self) -> Option<SubmissionInput> {
        if !self.is_ready() {
            return None;
        }
        let input = match self.mode {
            InputMode::Text => SubmissionInput::Text(self.text.trim().to_string()),
            InputMode::Url => SubmissionInput::Url(self.url.trim().to_string()),
            InputMode::Image => SubmissionInput::Image(self.image.clone()?),
        };
        Some(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_text_mode() {
        let input = InputModeController::new();
        assert_eq!(input.mode(), InputMode::Text);
        assert!(!input.is_ready());
        assert_eq!(input.snapshot(), None);
    }

    #[test]
    fn test_whitespace_text_is_not_ready() {
        let mut input = InputModeController::new();
        input.set_text("   \n\t ");
        assert!(!input.is_ready());
        assert_eq!(input.snapshot(), None);
    }

    #[test]
    fn test_text_snapshot_is_trimmed() {
        let mut input = InputModeController::new();
        input.set_text("  Breaking: miracle cure  ");
        assert_eq!(
            input.snapshot(),
            Some(SubmissionInput::Text("Breaking: miracle cure".to_string()))
        );
        // buffer itself is untouched
        assert_eq!(input.text(), "  Breaking: miracle cure  ");
    }

    #[test]
    fn test_readiness_follows_active_mode() {
        let mut input = InputModeController::new();
        input.set_text("some claim");
        input.set_mode(InputMode::Url);
        assert!(!input.is_ready());

        input.set_url("https://example.org/story");
        assert!(input.is_ready());

        input.set_mode(InputMode::Text);
        assert_eq!(input.snapshot(), Some(SubmissionInput::Text("some claim".to_string())));
    }

    #[test]
    fn test_file_at_limit_is_accepted() {
        let mut input = InputModeController::new();
        input.set_mode(InputMode::Image);
        let file = ImageFile::new("exact.png", vec![0; MAX_IMAGE_BYTES]);
        assert!(input.validate_file(file).is_ok());
        assert!(input.is_ready());
    }

    #[test]
    fn test_file_over_limit_is_rejected_and_not_stored() {
        let mut input = InputModeController::new();
        input.set_mode(InputMode::Image);
        input.validate_file(ImageFile::new("small.png", vec![0; 10])).unwrap();

        let err = input
            .validate_file(ImageFile::new("huge.png", vec![0; MAX_IMAGE_BYTES + 1]))
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::FileTooLarge { size: MAX_IMAGE_BYTES + 1, limit: MAX_IMAGE_BYTES }
        );
        assert!(input.image().is_none());
        assert!(!input.is_ready());
    }

    #[test]
    fn test_clear_image() {
        let mut input = InputModeController::new();
        input.set_mode(InputMode::Image);
        input.validate_file(ImageFile::new("a.png", vec![1])).unwrap();
        input.clear_image();
        assert!(!input.is_ready());
    }
}
