//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models, services, and the UI:
//! - Input mode and per-mode buffers
//! - Submission lifecycle
//! - Result presentation
//! - The combined claim controller the window talks to

pub mod claim;
pub mod input;
pub mod presenter;
pub mod submission;
