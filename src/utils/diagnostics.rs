//! Configuration diagnostics
//!
//! Lints a [`TableConfig`] before it is turned into a symbol table. It can
//! identify:
//!
//! - Names that can never be typed after a backslash (empty, whitespace,
//!   embedded backslash)
//! - Synonyms pointing at unknown canonical names
//! - Synonym chains (resolution is single-hop, the chain is never followed)
//! - Synonyms shadowing canonical names
//! - Two canonical names sharing one symbol (ambiguous reverse mapping)
//!
//! ## Example
//!
//! ```rust
//! use unimath::diagnostics::check_config;
//! use unimath::TableConfig;
//!
//! let cfg = TableConfig::from_json_str(
//!     r#"{ "synonyms": { "a": "nosuch" } }"#,
//! ).unwrap();
//! let report = check_config(&cfg);
//! assert!(!report.is_empty());
//! ```

use std::fmt;

use fxhash::FxHashMap;

use crate::data::config::TableConfig;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagnosticLevel {
    /// Informational note
    Info,
    /// Warning - the table will build but may not behave as intended
    Warning,
    /// Error - the entry cannot work at all
    Error,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::Info => write!(f, "info"),
            DiagnosticLevel::Warning => write!(f, "warning"),
            DiagnosticLevel::Error => write!(f, "error"),
        }
    }
}

/// A single diagnostic message
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity level
    pub level: DiagnosticLevel,
    /// Human-readable message
    pub message: String,
    /// Suggested fix
    pub suggestion: Option<String>,
}

impl Diagnostic {
    pub fn new(level: DiagnosticLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Result of checking a configuration
#[derive(Debug, Clone, Default)]
pub struct DiagnosticReport {
    pub diagnostics: Vec<Diagnostic>,
}

impl DiagnosticReport {
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.level == DiagnosticLevel::Error)
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.level == DiagnosticLevel::Warning)
    }

    fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

fn valid_mnemonic(name: &str) -> bool {
    !name.is_empty() && !name.contains('\\') && !name.contains(char::is_whitespace)
}

/// Lint a table configuration.
pub fn check_config(config: &TableConfig) -> DiagnosticReport {
    let mut report = DiagnosticReport::default();

    for (name, symbol) in &config.symbols {
        if !valid_mnemonic(name) {
            report.push(
                Diagnostic::new(
                    DiagnosticLevel::Error,
                    format!("symbol name {:?} cannot follow a backslash", name),
                )
                .with_suggestion("names must be non-empty, without whitespace or backslashes"),
            );
        }
        if symbol.is_empty() {
            report.push(Diagnostic::new(
                DiagnosticLevel::Error,
                format!("symbol for {:?} is empty", name),
            ));
        }
    }

    // Reverse-mapping ambiguity: only the last canonical name survives.
    let mut seen: FxHashMap<&str, &str> = FxHashMap::default();
    for (name, symbol) in &config.symbols {
        if let Some(earlier) = seen.insert(symbol.as_str(), name.as_str()) {
            report.push(
                Diagnostic::new(
                    DiagnosticLevel::Warning,
                    format!(
                        "{:?} and {:?} both map to {:?}; reverse lookup will use {:?}",
                        earlier, name, symbol, name
                    ),
                )
                .with_suggestion(format!("make {:?} a synonym of {:?}", earlier, name)),
            );
        }
    }

    for (syn, canonical) in &config.synonyms {
        if !valid_mnemonic(syn) {
            report.push(Diagnostic::new(
                DiagnosticLevel::Error,
                format!("synonym {:?} cannot follow a backslash", syn),
            ));
        }
        if config.symbols.contains_key(syn) {
            report.push(
                Diagnostic::new(
                    DiagnosticLevel::Warning,
                    format!("synonym {:?} shadows a canonical name", syn),
                )
                .with_suggestion("the direct symbol entry takes precedence during resolution"),
            );
        }
        if config.synonyms.contains_key(canonical) {
            report.push(
                Diagnostic::new(
                    DiagnosticLevel::Warning,
                    format!(
                        "synonym {:?} points at synonym {:?}; resolution is single-hop",
                        syn, canonical
                    ),
                )
                .with_suggestion(format!(
                    "point {:?} directly at the canonical name",
                    syn
                )),
            );
        } else if !config.symbols.contains_key(canonical) {
            report.push(Diagnostic::new(
                DiagnosticLevel::Warning,
                format!(
                    "synonym {:?} targets unknown canonical name {:?} and will never resolve",
                    syn, canonical
                ),
            ));
        }
    }

    report
}

/// Render a diagnostic report for terminal output.
pub fn format_diagnostics(report: &DiagnosticReport, color: bool) -> String {
    if report.is_empty() {
        return "no issues found".to_string();
    }

    let mut out = String::new();
    for d in &report.diagnostics {
        let level = if color {
            match d.level {
                DiagnosticLevel::Info => format!("\x1b[36m{}\x1b[0m", d.level),
                DiagnosticLevel::Warning => format!("\x1b[33m{}\x1b[0m", d.level),
                DiagnosticLevel::Error => format!("\x1b[31m{}\x1b[0m", d.level),
            }
        } else {
            d.level.to_string()
        };
        out.push_str(&format!("{}: {}\n", level, d.message));
        if let Some(ref sug) = d.suggestion {
            out.push_str(&format!("  hint: {}\n", sug));
        }
    }
    out.push_str(&format!("{} issue(s) found", report.diagnostics.len()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_config_is_empty() {
        let cfg = TableConfig::builtin();
        let report = check_config(&cfg);
        assert!(report.is_empty(), "{:?}", report.diagnostics);
    }

    #[test]
    fn test_unknown_canonical_target() {
        let cfg = TableConfig::from_json_str(r#"{ "synonyms": { "a": "nosuch" } }"#).unwrap();
        let report = check_config(&cfg);
        assert!(report.has_warnings());
        assert!(report.diagnostics[0].message.contains("nosuch"));
    }

    #[test]
    fn test_synonym_chain() {
        let cfg = TableConfig::from_json_str(
            r#"{
                "symbols": { "rightarrow": "→" },
                "synonyms": { "to": "rightarrow", "towards": "to" }
            }"#,
        )
        .unwrap();
        let report = check_config(&cfg);
        assert!(report.has_warnings());
        assert!(report
            .diagnostics
            .iter()
            .any(|d| d.message.contains("single-hop")));
    }

    #[test]
    fn test_ambiguous_reverse_mapping() {
        let cfg = TableConfig::from_json_str(
            r#"{ "symbols": { "le": "≤", "leq": "≤" } }"#,
        )
        .unwrap();
        let report = check_config(&cfg);
        assert!(report.has_warnings());
        assert!(!report.has_errors());
    }

    #[test]
    fn test_invalid_name_is_an_error() {
        let cfg = TableConfig::from_json_str(r#"{ "symbols": { "bad name": "x" } }"#).unwrap();
        let report = check_config(&cfg);
        assert!(report.has_errors());
    }

    #[test]
    fn test_format_diagnostics_plain() {
        let cfg = TableConfig::from_json_str(r#"{ "synonyms": { "a": "nosuch" } }"#).unwrap();
        let rendered = format_diagnostics(&check_config(&cfg), false);
        assert!(rendered.contains("warning:"));
        assert!(rendered.contains("1 issue(s) found"));
    }
}
