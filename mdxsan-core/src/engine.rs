//! Defines the `DocumentSanitizer` trait and the result type it produces.
//!
//! The batch runner only talks to this trait, so the per-document rewrite
//! rule can be tested, or replaced, without touching directory traversal or
//! write-back.
//!
//! License: MIT OR APACHE 2.0

use std::borrow::Cow;

/// The outcome of sanitizing one document's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedDocument<'a> {
    /// The rewritten text. Borrowed from the input when nothing changed.
    pub content: Cow<'a, str>,
    /// How many lines were rewritten.
    pub escaped_lines: usize,
}

impl SanitizedDocument<'_> {
    /// True when the output differs from the input.
    pub fn is_changed(&self) -> bool {
        self.escaped_lines > 0
    }
}

/// A pure text-to-text transformation applied to a whole document.
pub trait DocumentSanitizer: Send + Sync {
    /// Sanitizes `content`. Never fails; input it cannot make sense of is
    /// passed through unchanged.
    fn sanitize<'a>(&self, content: &'a str) -> SanitizedDocument<'a>;
}
