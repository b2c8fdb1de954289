//! Table configuration - the settings model the symbol table is built from
//!
//! The editor-integration layer owns *where* settings come from (settings
//! files, defaults, user overrides); this module owns the shape of the data
//! and its JSON decoding. Maps are insertion-ordered (`IndexMap`) so that
//! later entries overwrite earlier ones and listing output stays stable.

use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::data::symbols::DEFAULT_SYMBOLS;
use crate::data::synonyms::DEFAULT_SYNONYMS;
use crate::utils::error::ConfigError;

/// Configuration for building a [`SymbolTable`](crate::core::table::SymbolTable).
///
/// ```rust
/// use unimath::TableConfig;
///
/// let cfg = TableConfig::from_json_str(
///     r#"{ "symbols": { "alpha": "α" }, "synonyms": { "a": "alpha" } }"#,
/// ).unwrap();
/// assert_eq!(cfg.symbols.get("alpha").map(String::as_str), Some("α"));
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TableConfig {
    /// Canonical name → symbol pairs.
    #[serde(default)]
    pub symbols: IndexMap<String, String>,

    /// Synonym → canonical name pairs.
    #[serde(default)]
    pub synonyms: IndexMap<String, String>,

    /// Lowercase syntax names the editor layer should not activate for.
    #[serde(default)]
    pub ignore_syntax: Vec<String>,
}

impl TableConfig {
    /// The built-in defaults compiled into the crate.
    pub fn builtin() -> Self {
        TableConfig {
            symbols: DEFAULT_SYMBOLS
                .iter()
                .map(|(n, s)| (n.to_string(), s.to_string()))
                .collect(),
            synonyms: DEFAULT_SYNONYMS
                .iter()
                .map(|(s, c)| (s.to_string(), c.to_string()))
                .collect(),
            ignore_syntax: Vec::new(),
        }
    }

    /// Decode a configuration from a JSON string.
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(input).map_err(ConfigError::parse)
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&contents)
    }

    /// Load from a JSON file, falling back to the built-in defaults.
    ///
    /// A malformed or unreadable file is reported once on stderr; the caller
    /// still gets a usable table configuration.
    pub fn load_or_builtin(path: impl AsRef<Path>) -> Self {
        match Self::from_json_file(path.as_ref()) {
            Ok(cfg) => cfg,
            Err(err) => {
                eprintln!(
                    "unimath: failed to load {}: {} (using built-in table)",
                    path.as_ref().display(),
                    err
                );
                Self::builtin()
            }
        }
    }

    /// Merge another configuration over this one, last write wins.
    ///
    /// Used to layer user overrides on top of the defaults. `ignore_syntax`
    /// lists are concatenated.
    pub fn merge(&mut self, overrides: TableConfig) {
        for (name, symbol) in overrides.symbols {
            self.symbols.insert(name, symbol);
        }
        for (syn, canonical) in overrides.synonyms {
            self.synonyms.insert(syn, canonical);
        }
        self.ignore_syntax.extend(overrides.ignore_syntax);
    }

    /// Whether conversion should be active for the given syntax name.
    ///
    /// Comparison is case-insensitive; the ignore list is expected to hold
    /// lowercase names.
    pub fn syntax_allowed(&self, syntax_name: &str) -> bool {
        let lowered = syntax_name.to_lowercase();
        !self.ignore_syntax.iter().any(|s| *s == lowered)
    }
}
