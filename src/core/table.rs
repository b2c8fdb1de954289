//! The bidirectional symbol table
//!
//! Four mappings built once from a [`TableConfig`] and read-only afterwards:
//!
//! - canonical name → symbol (insertion-ordered, drives listing output)
//! - symbol → canonical name (reverse conversion)
//! - synonym → canonical name
//! - canonical name → synonyms (in synonym definition order)
//!
//! Construction is all-or-nothing: the table is fully built before it is
//! returned, so a configuration reload can build a fresh table and swap it in
//! without in-flight lookups ever seeing a partial one. Duplicate keys in the
//! configuration overwrite earlier entries, last write wins.

use fxhash::FxHashMap;
use indexmap::IndexMap;

use crate::data::config::TableConfig;

/// Immutable name ↔ symbol lookup table.
///
/// ```rust
/// use unimath::SymbolTable;
///
/// let table = SymbolTable::default();
/// assert_eq!(table.symbol_of("alpha"), Some("α"));
/// assert_eq!(table.name_of("⇒"), Some("Rightarrow"));
/// assert_eq!(table.resolve("implies"), Some("⇒"));
/// ```
#[derive(Debug, Clone)]
pub struct SymbolTable {
    /// Canonical name → symbol, in configuration order.
    maths: IndexMap<String, String>,
    /// Symbol → canonical name. When two canonical names share a symbol the
    /// later one wins.
    inverse_maths: FxHashMap<String, String>,
    /// Synonym → canonical name.
    synonyms: FxHashMap<String, String>,
    /// Canonical name → synonyms, in synonym definition order.
    inverse_synonyms: FxHashMap<String, Vec<String>>,
}

impl SymbolTable {
    /// An empty table. Every lookup misses; used as the fallback when a
    /// configuration cannot be loaded at all.
    pub fn empty() -> Self {
        SymbolTable {
            maths: IndexMap::new(),
            inverse_maths: FxHashMap::default(),
            synonyms: FxHashMap::default(),
            inverse_synonyms: FxHashMap::default(),
        }
    }

    /// Build a table from a configuration.
    pub fn from_config(config: &TableConfig) -> Self {
        let mut maths = IndexMap::new();
        for (name, symbol) in &config.symbols {
            maths.insert(name.clone(), symbol.clone());
        }

        // Derived after the forward table is complete so that overwritten
        // entries never leak into the reverse direction.
        let mut inverse_maths = FxHashMap::default();
        for (name, symbol) in &maths {
            inverse_maths.insert(symbol.clone(), name.clone());
        }

        let mut synonyms = FxHashMap::default();
        let mut inverse_synonyms: FxHashMap<String, Vec<String>> = FxHashMap::default();
        for (syn, canonical) in &config.synonyms {
            synonyms.insert(syn.clone(), canonical.clone());
            inverse_synonyms
                .entry(canonical.clone())
                .or_default()
                .push(syn.clone());
        }

        SymbolTable {
            maths,
            inverse_maths,
            synonyms,
            inverse_synonyms,
        }
    }

    /// Number of canonical entries.
    pub fn len(&self) -> usize {
        self.maths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maths.is_empty()
    }

    /// Canonical (name, symbol) pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.maths.iter().map(|(n, s)| (n.as_str(), s.as_str()))
    }

    /// The symbol for a canonical name. Synonyms miss here; use
    /// [`resolve`](Self::resolve) for synonym-aware lookup.
    pub fn symbol_of(&self, name: &str) -> Option<&str> {
        self.maths.get(name).map(String::as_str)
    }

    /// The canonical name for a symbol.
    pub fn name_of(&self, symbol: &str) -> Option<&str> {
        self.inverse_maths.get(symbol).map(String::as_str)
    }

    /// The canonical name for a single character.
    pub fn name_of_char(&self, ch: char) -> Option<&str> {
        let mut buf = [0u8; 4];
        self.name_of(ch.encode_utf8(&mut buf))
    }

    /// Resolve a name (canonical or synonym) to its canonical name.
    ///
    /// A canonical name maps to itself. Synonym resolution is single-hop:
    /// if a synonym points at another synonym the target is returned as-is
    /// and will miss in the forward table.
    pub fn canonical_of(&self, name: &str) -> Option<&str> {
        if self.maths.contains_key(name) {
            return self.maths.get_key_value(name).map(|(k, _)| k.as_str());
        }
        self.synonyms.get(name).map(String::as_str)
    }

    /// Synonyms declared for a canonical name, in definition order.
    pub fn synonyms_of(&self, name: &str) -> &[String] {
        self.inverse_synonyms
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Resolve a mnemonic (canonical name or synonym) to its symbol.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.symbol_of(token)
            .or_else(|| self.canonical_of(token).and_then(|c| self.symbol_of(c)))
    }

    /// A display name for any character. Total: falls back to the code point
    /// formatted as `u` + uppercase hex, zero-padded to at least four digits
    /// (`★` → `u2605`, `A` → `u0041`).
    pub fn name_for(&self, ch: char) -> String {
        match self.name_of_char(ch) {
            Some(name) => name.to_string(),
            None => format!("u{:04X}", ch as u32),
        }
    }
}

impl Default for SymbolTable {
    /// The table built from the built-in defaults.
    fn default() -> Self {
        Self::from_config(&TableConfig::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_table() -> SymbolTable {
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
    fn test_symbol_of() {
        let table = small_table();
        assert_eq!(table.symbol_of("alpha"), Some("α"));
        assert_eq!(table.symbol_of("implies"), None);
        assert_eq!(table.symbol_of("nosuch"), None);
    }

    #[test]
    fn test_name_of_inverts_every_entry() {
        let table = small_table();
        for (name, symbol) in table.iter() {
            assert_eq!(table.name_of(symbol), Some(name));
        }
    }

    #[test]
    fn test_canonical_of() {
        let table = small_table();
        assert_eq!(table.canonical_of("alpha"), Some("alpha"));
        assert_eq!(table.canonical_of("implies"), Some("Rightarrow"));
        assert_eq!(table.canonical_of("nosuch"), None);
    }

    #[test]
    fn test_synonyms_of_preserves_order() {
        let cfg = TableConfig::from_json_str(
            r#"{
                "symbols": { "rightarrow": "→" },
                "synonyms": { "to": "rightarrow", "arrow": "rightarrow" }
            }"#,
        )
        .unwrap();
        let table = SymbolTable::from_config(&cfg);
        assert_eq!(table.synonyms_of("rightarrow"), ["to", "arrow"]);
        assert!(table.synonyms_of("nosuch").is_empty());
    }

    #[test]
    fn test_resolve_synonym_is_single_hop() {
        let cfg = TableConfig::from_json_str(
            r#"{
                "symbols": { "rightarrow": "→" },
                "synonyms": { "to": "rightarrow", "towards": "to" }
            }"#,
        )
        .unwrap();
        let table = SymbolTable::from_config(&cfg);
        assert_eq!(table.resolve("to"), Some("→"));
        // "towards" → "to" is a chain; only one hop is followed.
        assert_eq!(table.resolve("towards"), None);
    }

    #[test]
    fn test_duplicate_symbol_last_canonical_wins() {
        let cfg = TableConfig::from_json_str(
            r#"{ "symbols": { "le": "≤", "leq": "≤" } }"#,
        )
        .unwrap();
        let table = SymbolTable::from_config(&cfg);
        assert_eq!(table.symbol_of("le"), Some("≤"));
        assert_eq!(table.symbol_of("leq"), Some("≤"));
        assert_eq!(table.name_of("≤"), Some("leq"));
    }

    #[test]
    fn test_name_for_canonical() {
        let table = small_table();
        assert_eq!(table.name_for('α'), "alpha");
        assert_eq!(table.name_for('⇒'), "Rightarrow");
    }

    #[test]
    fn test_name_for_fallback_is_total() {
        let table = SymbolTable::empty();
        assert_eq!(table.name_for('A'), "u0041");
        assert_eq!(table.name_for('★'), "u2605");
        assert_eq!(table.name_for('→'), "u2192");
        // Above the BMP the hex representation grows past four digits.
        assert_eq!(table.name_for('😀'), "u1F600");
    }

    #[test]
    fn test_fallback_round_trips_to_code_point() {
        let table = SymbolTable::empty();
        for ch in ['★', 'Ω', '𝔸', '\u{10FFFF}'] {
            let name = table.name_for(ch);
            let cp = u32::from_str_radix(&name[1..], 16).unwrap();
            assert_eq!(char::from_u32(cp), Some(ch));
        }
    }

    #[test]
    fn test_empty_table() {
        let table = SymbolTable::empty();
        assert!(table.is_empty());
        assert_eq!(table.resolve("alpha"), None);
        assert_eq!(table.name_of("α"), None);
    }

    #[test]
    fn test_default_table_has_builtins() {
        let table = SymbolTable::default();
        assert!(!table.is_empty());
        assert_eq!(table.resolve("lambda"), Some("λ"));
        assert_eq!(table.resolve("iff"), Some("⇔"));
    }
}
