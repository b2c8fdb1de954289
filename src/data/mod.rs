//! Data layer - static mappings and configuration
//!
//! This module contains the data the conversion core is built from:
//! - Built-in symbol mappings
//! - Built-in synonym mappings
//! - The settings model and its JSON decoding

pub mod config;
pub mod symbols;
pub mod synonyms;

// Re-export commonly used items
pub use config::TableConfig;
pub use symbols::DEFAULT_SYMBOLS;
pub use synonyms::DEFAULT_SYNONYMS;
