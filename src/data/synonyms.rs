//! Built-in synonym → canonical name pairs
//!
//! Synonyms are alternate spellings that resolve to a canonical name in
//! [`DEFAULT_SYMBOLS`](crate::data::symbols::DEFAULT_SYMBOLS). Resolution is
//! single-hop: a synonym must point directly at a canonical name, never at
//! another synonym. Definition order is preserved because the reverse table
//! (canonical → synonyms) lists synonyms in the order they were declared.

/// Default synonym → canonical pairs, in definition order.
pub static DEFAULT_SYNONYMS: &[(&str, &str)] = &[
    // Arrows
    ("to", "rightarrow"),
    ("gets", "leftarrow"),
    ("implies", "Rightarrow"),
    ("impliedby", "Leftarrow"),
    ("iff", "Leftrightarrow"),

    // Relations
    ("leq", "le"),
    ("geq", "ge"),
    ("neq", "ne"),

    // Logic
    ("lnot", "neg"),
    ("land", "wedge"),
    ("lor", "vee"),
    ("all", "forall"),
    ("some", "exists"),

    // Set theory
    ("isin", "in"),
    ("union", "cup"),
    ("intersection", "cap"),
    ("empty", "emptyset"),

    // Misc
    ("inf", "infty"),
    ("grad", "nabla"),
    ("Nat", "bbN"),
    ("Int", "bbZ"),
    ("Rat", "bbQ"),
    ("Real", "bbR"),
    ("Complex", "bbC"),
    ("x", "times"),
    ("tick", "checkmark"),
];
