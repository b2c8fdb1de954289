//! # unimath
//!
//! Bidirectional conversion between backslash mnemonics (`\alpha`,
//! `\Rightarrow`) and their Unicode symbols (`α`, `⇒`), built as the lookup
//! core for text-editor integrations.
//!
//! ## Features
//!
//! - **Bidirectional**: name → symbol at the cursor, and symbol → name for
//!   the character under the cursor, through one swap operation
//! - **Synonyms**: alternate names (`implies` → `Rightarrow`) resolved in a
//!   single hop
//! - **Total reverse naming**: every character gets a name, falling back to
//!   `uXXXX` code-point names for unmapped symbols
//! - **Editor-agnostic**: callers pass line text and character offsets and
//!   receive replacement spans; no event loop, no UI
//! - **Configurable**: JSON settings layered over a built-in table with
//!   last-write-wins overrides
//!
//! ## Usage Examples
//!
//! ### Cursor conversion
//!
//! ```rust
//! use unimath::{resolve_convert, resolve_swap, SymbolTable};
//!
//! let table = SymbolTable::default();
//!
//! // name → symbol at the cursor
//! let rep = resolve_convert(&table, "x \\alpha", 8).unwrap();
//! assert_eq!(rep.text, "α");
//!
//! // symbol → name via swap on a bare character
//! let rep = resolve_swap(&table, "α", 1, 1, 1).unwrap();
//! assert_eq!(rep.text, "\\alpha");
//! ```
//!
//! ### Whole-text conversion
//!
//! ```rust
//! use unimath::{names_to_symbols, symbols_to_names, SymbolTable};
//!
//! let table = SymbolTable::default();
//! assert_eq!(names_to_symbols("\\forall x \\in S", &table), "∀ x ∈ S");
//! assert_eq!(symbols_to_names("∀ x ∈ S", &table), "\\forall x \\in S");
//! ```

use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// Core conversion modules
pub mod core;

/// Data layer - static mappings and configuration
pub mod data;

/// Utility modules
pub mod utils;

// Re-export the core API surface
pub use crate::core::convert::{
    completions, list_insertable, resolve_convert, resolve_swap, Replacement,
};
pub use crate::core::prefix::{extract_prefix, Prefix, Span};
pub use crate::core::table::SymbolTable;

// Re-export data and utilities
pub use data::config::TableConfig;
pub use data::{DEFAULT_SYMBOLS, DEFAULT_SYNONYMS};
pub use utils::diagnostics;
pub use utils::diagnostics::{check_config, format_diagnostics};
pub use utils::error::ConfigError;

lazy_static! {
    // Backslash excluded from the token so "\alpha\beta" splits into two
    // tokens in batch mode, matching what prefix extraction sees when each
    // token is typed.
    static ref TOKEN_RE: Regex = Regex::new(r"\\([^\s\\]+)").unwrap();
}

/// Replace every resolvable `\name` token in `input` with its symbol.
///
/// Unlike cursor conversion, batch input has no cursor to delimit the name,
/// so a token like `Gamma(` is resolved by its longest resolvable prefix:
/// `\Gamma(x)` becomes `Γ(x)`. Tokens with no resolvable prefix are left
/// untouched.
pub fn names_to_symbols(input: &str, table: &SymbolTable) -> String {
    TOKEN_RE
        .replace_all(input, |caps: &Captures| {
            let token = &caps[1];
            let mut end = token.len();
            loop {
                if let Some(symbol) = table.resolve(&token[..end]) {
                    return format!("{}{}", symbol, &token[end..]);
                }
                match token[..end].char_indices().next_back() {
                    Some((i, _)) => end = i,
                    None => return caps[0].to_string(),
                }
            }
        })
        .into_owned()
}

/// Replace every character with a canonical name by `\name`.
///
/// Only mapped characters are rewritten; there is no `uXXXX` fallback here,
/// otherwise every character of ordinary text would turn into an escape.
pub fn symbols_to_names(input: &str, table: &SymbolTable) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match table.name_of_char(ch) {
            Some(name) => {
                out.push('\\');
                out.push_str(name);
            }
            None => out.push(ch),
        }
    }
    out
}

/// Detect which direction a batch conversion should take.
///
/// Returns `"names"` when the input contains a resolvable `\name` token,
/// `"symbols"` when it contains a character with a canonical name, and
/// `"unknown"` otherwise.
pub fn detect_format(input: &str, table: &SymbolTable) -> &'static str {
    if TOKEN_RE
        .captures_iter(input)
        .any(|caps| table.resolve(&caps[1]).is_some())
    {
        return "names";
    }
    if input.chars().any(|ch| table.name_of_char(ch).is_some()) {
        return "symbols";
    }
    "unknown"
}
