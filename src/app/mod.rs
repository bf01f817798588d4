//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (input modes, verdicts, settings, messages)
//! - `controllers/` - Orchestration (input buffers, submission lifecycle, presentation)
//! - `services/` - Talking to the classification service (transport, wire format, factors)
//! - `infrastructure/` - Errors and file filters
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use controllers::claim::ClaimController;
pub use domain::{AnalysisResult, AppSettings, InputMode, Message, SubmissionInput};
pub use infrastructure::error::{AppError, SubmitError, ValidationError};
pub use services::classifier::{ClassifierClient, Classify};
