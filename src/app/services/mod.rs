//! Services layer - talking to the classification service.
//!
//! This module contains the outbound side of the client:
//! - Endpoint binding and reply interpretation
//! - HTTP transport over `reqwest::blocking`
//! - Wire decoding and the factor marker adapter

pub mod classifier;
pub mod factors;
pub mod transport;
pub mod wire;
