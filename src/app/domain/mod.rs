//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Input modes, image files and submission snapshots
//! - Verdicts, factors and the coerced analysis result
//! - Application settings
//! - Message types for the event system

pub mod input;
pub mod messages;
pub mod settings;
pub mod verdict;

pub use input::{ImageFile, InputMode, SubmissionInput, MAX_IMAGE_BYTES};
pub use messages::Message;
pub use settings::AppSettings;
pub use verdict::{
    AnalysisResult, Classification, Factor, FactorTag, NewsItem, ServiceStatus, Severity,
    VerificationTool,
};
