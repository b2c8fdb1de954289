//! Backslash prefix extraction
//!
//! Finds the mnemonic being typed at the cursor: the rightmost backslash on
//! the line such that everything between it and the cursor is non-whitespace.
//! All offsets in this module are *character* offsets, the cursor model every
//! editor front end speaks; byte offsets never cross the API boundary.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Anchored at the cursor; the greedy head pushes the match to the
    /// rightmost backslash. The token may be empty (a bare trailing
    /// backslash), which downstream resolvers simply fail to look up.
    static ref UNICODE_PREFIX_RE: Regex = Regex::new(r".*(\\([^\s]*))$").unwrap();
}

/// A half-open `[start, end)` range of character offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A backslash prefix found before the cursor: the token without its leading
/// backslash, and the span covering backslash + token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefix {
    pub token: String,
    pub span: Span,
}

/// Convert a character offset into a byte offset, `None` when the offset is
/// past the end of the line.
fn byte_offset(line: &str, char_offset: usize) -> Option<usize> {
    line.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(line.len()))
        .nth(char_offset)
}

/// Extract the backslash prefix ending at `cursor` (a character offset).
///
/// Returns `None` when there is no backslash before the cursor, when
/// whitespace breaks the run between the rightmost backslash and the cursor,
/// or when the cursor lies past the end of the line.
///
/// ```rust
/// use unimath::{extract_prefix, Span};
///
/// let p = extract_prefix("text \\alpha", 11).unwrap();
/// assert_eq!(p.token, "alpha");
/// assert_eq!(p.span, Span::new(5, 11));
/// ```
pub fn extract_prefix(line: &str, cursor: usize) -> Option<Prefix> {
    let head = &line[..byte_offset(line, cursor)?];
    let caps = UNICODE_PREFIX_RE.captures(head)?;
    let full = caps.get(1)?;
    let token = caps.get(2).map_or(String::new(), |m| m.as_str().to_string());
    let start = head[..full.start()].chars().count();
    Some(Prefix {
        token,
        span: Span::new(start, cursor),
    })
}
