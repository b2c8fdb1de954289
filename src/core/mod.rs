//! Core conversion layer
//!
//! The symbol table, backslash prefix extraction, and the conversion engine
//! that ties them together. Everything here is synchronous, allocation-light
//! and free of editor concerns: callers pass in line text and character
//! offsets and get back replacement spans to apply.

pub mod convert;
pub mod prefix;
pub mod table;

// Re-export commonly used items
pub use convert::{completions, list_insertable, resolve_convert, resolve_swap, Replacement};
pub use prefix::{extract_prefix, Prefix, Span};
pub use table::SymbolTable;
