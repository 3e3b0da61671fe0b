//! Shared utilities
//!
//! Error handling, request extractors and form-value parsing used across
//! the layers.

pub mod errors;
pub mod extractors;
pub mod validation;
