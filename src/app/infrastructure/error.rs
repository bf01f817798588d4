use thiserror::Error;

use crate::app::domain::input::InputMode;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Service error: {0}")]
    Service(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

/// Rejections raised locally, before any request leaves the client.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("File is too large ({size} bytes). Please choose an image under 1 MB.")]
    FileTooLarge { size: usize, limit: usize },
}

/// Every way a submission can fail. The `Display` text is what the user sees.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{}", network_message(.mode))]
    Network { mode: InputMode, cause: String },

    #[error("The image is too large for the server to process. Please choose a file under 1 MB.")]
    PayloadTooLarge,

    #[error("{message}")]
    Server { status: Option<i32>, message: String },
}

impl SubmitError {
    /// Generic server failure used when the reply carries no usable `detail`.
    pub fn server_generic(status: i32) -> Self {
        SubmitError::Server {
            status: Some(status),
            message: format!(
                "The analysis service returned an error (HTTP {}). Please try again.",
                status
            ),
        }
    }

    /// A 2xx reply whose body could not be read as an analysis.
    pub fn unexpected_response(status: i32) -> Self {
        SubmitError::Server {
            status: Some(status),
            message: "Received an unexpected response from the analysis service.".to_string(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            SubmitError::Validation(_) => "validation",
            SubmitError::Network { .. } => "network",
            SubmitError::PayloadTooLarge => "payload-too-large",
            SubmitError::Server { .. } => "server",
        }
    }
}

fn network_message(mode: &InputMode) -> &'static str {
    match mode {
        InputMode::Text => {
            "Could not reach the analysis service. Make sure the backend is running and try again."
        }
        InputMode::Url => {
            "Could not analyze this link. The analysis service may be offline or unable to fetch the page."
        }
        InputMode::Image => {
            "Image upload failed. Check your connection and that the analysis service is running."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::input::MAX_IMAGE_BYTES;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert!(app_err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_display() {
        let err = AppError::Settings("invalid base url".to_string());
        assert_eq!(err.to_string(), "Settings error: invalid base url");

        let err = AppError::Service("connection refused".to_string());
        assert_eq!(err.to_string(), "Service error: connection refused");
    }

    #[test]
    fn test_file_too_large_message() {
        let err = ValidationError::FileTooLarge { size: 2_000_000, limit: MAX_IMAGE_BYTES };
        let text = err.to_string();
        assert!(text.contains("2000000"));
        assert!(text.contains("under 1 MB"));
    }

    #[test]
    fn test_network_copy_differs_per_mode() {
        let text = SubmitError::Network { mode: InputMode::Text, cause: "refused".into() };
        let url = SubmitError::Network { mode: InputMode::Url, cause: "refused".into() };
        let image = SubmitError::Network { mode: InputMode::Image, cause: "refused".into() };

        assert_ne!(text.to_string(), url.to_string());
        assert_ne!(url.to_string(), image.to_string());
        assert_ne!(text.to_string(), image.to_string());
        assert!(!text.to_string().contains("refused"));
    }

    #[test]
    fn test_server_message_is_verbatim() {
        let err = SubmitError::Server { status: Some(400), message: "Text cannot be empty".into() };
        assert_eq!(err.to_string(), "Text cannot be empty");
        assert_eq!(err.kind(), "server");
    }

    #[test]
    fn test_validation_converts_into_submit_error() {
        let err: SubmitError = ValidationError::FileTooLarge { size: 5, limit: 4 }.into();
        assert_eq!(err.kind(), "validation");
    }
}
