//! Conversion engine
//!
//! Orchestrates prefix extraction and table lookups into the operations the
//! editor layer calls: convert-at-cursor, the bidirectional swap, the
//! insert-by-browsing listing and prefix completions. Every function returns
//! a [`Replacement`] (what span to replace with what text) or `None` for
//! "nothing to do"; the caller applies the edit, the engine never mutates
//! text itself.

use crate::core::prefix::{extract_prefix, Span};
use crate::core::table::SymbolTable;

/// An edit for the caller to apply: replace `span` with `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub span: Span,
    pub text: String,
}

impl Replacement {
    pub fn new(span: Span, text: impl Into<String>) -> Self {
        Replacement {
            span,
            text: text.into(),
        }
    }
}

/// Convert the mnemonic at the cursor to its symbol.
///
/// Extracts the backslash prefix ending at `cursor` and resolves it; the
/// replacement covers exactly the `\name` span and carries exactly the
/// symbol, nothing more. `None` when there is no prefix or it does not
/// resolve.
///
/// ```rust
/// use unimath::{resolve_convert, SymbolTable};
///
/// let table = SymbolTable::default();
/// let rep = resolve_convert(&table, "x \\alpha", 8).unwrap();
/// assert_eq!(rep.text, "α");
/// assert_eq!((rep.span.start, rep.span.end), (2, 8));
/// ```
pub fn resolve_convert(table: &SymbolTable, line: &str, cursor: usize) -> Option<Replacement> {
    let prefix = extract_prefix(line, cursor)?;
    let symbol = table.resolve(&prefix.token)?;
    Some(Replacement::new(prefix.span, symbol))
}

/// The bidirectional swap: name → symbol when a resolvable prefix ends at
/// `word_end`, otherwise symbol → name for the single character before the
/// selection end.
///
/// `word_end` is the end of the editor's notion of the word touching the
/// selection end; hosts without word boundaries pass `sel_end` itself.
///
/// Decision order, per the selection `[sel_start, sel_end)`:
///
/// 1. A resolvable prefix ending at `word_end` wins outright, regardless of
///    selection width.
/// 2. Otherwise, for selections at most one character wide, the character in
///    `[sel_end - 1, sel_end)` is replaced by `\` + its display name
///    (canonical name or `uXXXX` fallback).
/// 3. Wider selections are a no-op.
pub fn resolve_swap(
    table: &SymbolTable,
    line: &str,
    sel_start: usize,
    sel_end: usize,
    word_end: usize,
) -> Option<Replacement> {
    if let Some(prefix) = extract_prefix(line, word_end) {
        if let Some(symbol) = table.resolve(&prefix.token) {
            return Some(Replacement::new(prefix.span, symbol));
        }
    }

    if sel_end.saturating_sub(sel_start) <= 1 && sel_end > 0 {
        let ch = line.chars().nth(sel_end - 1)?;
        let name = table.name_for(ch);
        return Some(Replacement::new(
            Span::new(sel_end - 1, sel_end),
            format!("\\{}", name),
        ));
    }

    None
}

/// Display entries for insert-by-browsing, one per canonical entry in table
/// order: `"<symbol> <name>"` plus any synonyms, space-separated. The second
/// element of each pair is the raw symbol to insert at every selection when
/// the entry is picked.
pub fn list_insertable(table: &SymbolTable) -> Vec<(String, String)> {
    table
        .iter()
        .map(|(name, symbol)| {
            let mut display = format!("{} {}", symbol, name);
            for syn in table.synonyms_of(name) {
                display.push(' ');
                display.push_str(syn);
            }
            (display, symbol.to_string())
        })
        .collect()
}

/// Canonical `(name, symbol)` pairs whose name starts with `partial`, in
/// table order. An empty `partial` lists the whole table.
pub fn completions<'t>(table: &'t SymbolTable, partial: &str) -> Vec<(&'t str, &'t str)> {
    table
        .iter()
        .filter(|(name, _)| name.starts_with(partial))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::config::TableConfig;

    fn table() -> SymbolTable {
        let cfg = TableConfig::from_json_str(
            r#"{
                "symbols": {
                    "alpha": "α",
                    "Rightarrow": "⇒",
                    "rightarrow": "→"
                },
                "synonyms": {
                    "implies": "Rightarrow",
                    "to": "rightarrow"
                }
            }"#,
        )
        .unwrap();
        SymbolTable::from_config(&cfg)
    }

    #[test]
    fn test_convert_canonical_name() {
        let rep = resolve_convert(&table(), "x \\alpha", 8).unwrap();
        assert_eq!(rep, Replacement::new(Span::new(2, 8), "α"));
    }

    #[test]
    fn test_convert_synonym() {
        let rep = resolve_convert(&table(), "\\implies", 8).unwrap();
        assert_eq!(rep, Replacement::new(Span::new(0, 8), "⇒"));
    }

    #[test]
    fn test_convert_unknown_name() {
        assert_eq!(resolve_convert(&table(), "\\nosuch", 7), None);
    }

    #[test]
    fn test_convert_without_prefix() {
        assert_eq!(resolve_convert(&table(), "alpha", 5), None);
    }

    #[test]
    fn test_convert_replacement_is_symbol_only() {
        // No trailing space; appending one is the editor layer's choice.
        let rep = resolve_convert(&table(), "\\to", 3).unwrap();
        assert_eq!(rep.text, "→");
    }

    #[test]
    fn test_swap_prefix_branch_wins() {
        // Empty selection at the end of "\alpha": name → symbol.
        let rep = resolve_swap(&table(), "\\alpha", 6, 6, 6).unwrap();
        assert_eq!(rep, Replacement::new(Span::new(0, 6), "α"));
    }

    #[test]
    fn test_swap_prefix_wins_over_single_char() {
        // Cursor sits after "α" but the word extends over "\alpha"; the
        // name → symbol branch takes priority.
        let line = "\\alpha";
        let rep = resolve_swap(&table(), line, 1, 1, 6).unwrap();
        assert_eq!(rep.span, Span::new(0, 6));
        assert_eq!(rep.text, "α");
    }

    #[test]
    fn test_swap_known_symbol_to_name() {
        let rep = resolve_swap(&table(), "x α", 3, 3, 3).unwrap();
        assert_eq!(rep, Replacement::new(Span::new(2, 3), "\\alpha"));
    }

    #[test]
    fn test_swap_unknown_symbol_to_fallback_name() {
        let rep = resolve_swap(&table(), "★", 1, 1, 1).unwrap();
        assert_eq!(rep, Replacement::new(Span::new(0, 1), "\\u2605"));
    }

    #[test]
    fn test_swap_single_char_selection() {
        let rep = resolve_swap(&table(), "⇒ x", 0, 1, 1).unwrap();
        assert_eq!(rep, Replacement::new(Span::new(0, 1), "\\Rightarrow"));
    }

    #[test]
    fn test_swap_wide_selection_is_noop() {
        assert_eq!(resolve_swap(&table(), "hello", 0, 5, 5), None);
    }

    #[test]
    fn test_swap_at_line_start_is_noop() {
        assert_eq!(resolve_swap(&table(), "hello", 0, 0, 0), None);
    }

    #[test]
    fn test_swap_round_trips_through_symbol() {
        let table = table();
        let line = "\\implies";
        let forward = resolve_swap(&table, line, 8, 8, 8).unwrap();
        assert_eq!(forward.text, "⇒");

        // Swapping back on the inserted symbol recovers a name that resolves
        // to the same symbol (the canonical one, not necessarily "implies").
        let back = resolve_swap(&table, &forward.text, 1, 1, 1).unwrap();
        assert_eq!(back.text, "\\Rightarrow");
        assert_eq!(table.resolve(&back.text[1..]), Some("⇒"));
    }

    #[test]
    fn test_list_insertable_format_and_order() {
        let entries = list_insertable(&table());
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0], ("α alpha".to_string(), "α".to_string()));
        assert_eq!(
            entries[1],
            ("⇒ Rightarrow implies".to_string(), "⇒".to_string())
        );
        assert_eq!(entries[2], ("→ rightarrow to".to_string(), "→".to_string()));
    }

    #[test]
    fn test_completions_filter_by_prefix() {
        let t = table();
        let hits = completions(&t, "right");
        assert_eq!(hits, [("rightarrow", "→")]);
        let all = completions(&t, "");
        assert_eq!(all.len(), 3);
        assert!(completions(&t, "zzz").is_empty());
    }
}
