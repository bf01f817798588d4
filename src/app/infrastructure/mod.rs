//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - Error types
//! - File dialog filters

pub mod error;
pub mod file_filters;
