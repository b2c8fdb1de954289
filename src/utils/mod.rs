//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Error types for configuration loading
//! - Configuration diagnostics

pub mod diagnostics;
pub mod error;

// Re-export commonly used items
pub use diagnostics::{check_config, format_diagnostics, Diagnostic, DiagnosticLevel};
pub use error::ConfigError;
