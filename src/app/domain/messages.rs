use super::input::InputMode;
use super::verdict::ServiceStatus;
use crate::app::controllers::submission::{SubmissionId, SubmissionOutcome};

/// All messages that can be sent through the FLTK channel.
/// Widget callbacks and worker threads send these; the dispatch loop in main handles them.
#[derive(Debug, Clone)]
pub enum Message {
    // File
    FileQuit,
    WindowClose,

    // Edit
    OpenSettings,

    // Input
    SetMode(InputMode),
    TextChanged(String),
    UrlChanged(String),
    ChooseImage,
    ClearImage,
    Submit,

    // Background results
    SubmissionSettled {
        id: SubmissionId,
        outcome: SubmissionOutcome,
    },
    ServiceChecked(Result<ServiceStatus, String>),

    // Results panel
    OpenLink(String),

    // Help
    ShowAbout,
}
