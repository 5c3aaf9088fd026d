//! escaper.rs - Inline-code-aware escaping of bare `<` within one line.
//!
//! A line is split into inline code spans and plain text. Only plain text is
//! rewritten: each `<` that does not open an HTML comment (`<!--`) becomes
//! `&lt;`. Code spans are copied through verbatim.
//!
//! License: MIT OR APACHE 2.0

use std::borrow::Cow;

/// Entity written in place of a bare `<`.
pub const LT_ENTITY: &str = "&lt;";
const COMMENT_OPEN: &str = "<!--";
const COMMENT_CLOSE: &str = "-->";

/// A slice of a line, either an inline code span (delimiters included) or
/// plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub is_code: bool,
}

impl<'a> Segment<'a> {
    const fn plain(text: &'a str) -> Self {
        Self { text, is_code: false }
    }

    const fn code(text: &'a str) -> Self {
        Self { text, is_code: true }
    }
}

/// Length of the backtick run starting at byte `start`.
fn run_len(bytes: &[u8], start: usize) -> usize {
    bytes[start..].iter().take_while(|&&b| b == b'`').count()
}

/// Finds the byte offset of the next run of exactly `len` backticks at or
/// after `from`. Longer or shorter runs are skipped whole.
fn find_closing_run(bytes: &[u8], from: usize, len: usize) -> Option<usize> {
    let mut i = from;
    while i < bytes.len() {
        if bytes[i] == b'`' {
            let n = run_len(bytes, i);
            if n == len {
                return Some(i);
            }
            i += n;
        } else {
            i += 1;
        }
    }
    None
}

/// Splits `line` into code and plain segments.
///
/// A run of N backticks opens a span that closes at the next run of exactly N
/// backticks on the same line. If there is no such run, the opener and the
/// rest of the line are plain text. Concatenating the segments yields `line`.
pub fn split_segments(line: &str) -> Vec<Segment<'_>> {
    let bytes = line.as_bytes();
    let mut segments = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let Some(offset) = bytes[pos..].iter().position(|&b| b == b'`') else {
            segments.push(Segment::plain(&line[pos..]));
            break;
        };
        let tick = pos + offset;
        if tick > pos {
            segments.push(Segment::plain(&line[pos..tick]));
        }

        let len = run_len(bytes, tick);
        match find_closing_run(bytes, tick + len, len) {
            Some(close) => {
                let end = close + len;
                segments.push(Segment::code(&line[tick..end]));
                pos = end;
            }
            None => {
                segments.push(Segment::plain(&line[tick..]));
                break;
            }
        }
    }

    segments
}

/// Escapes every `<` in `text` that is not the start of `<!--`.
///
/// Returns a borrowed slice when nothing needed escaping. Already-escaped
/// `&lt;` contains no `<`, so applying this twice changes nothing.
pub fn escape_plain(text: &str) -> Cow<'_, str> {
    if !text.contains('<') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 8);
    let mut changed = false;
    let mut last = 0;
    for (idx, _) in text.match_indices('<') {
        if text[idx..].starts_with(COMMENT_OPEN) {
            continue;
        }
        out.push_str(&text[last..idx]);
        out.push_str(LT_ENTITY);
        last = idx + 1;
        changed = true;
    }

    if !changed {
        return Cow::Borrowed(text);
    }
    out.push_str(&text[last..]);
    Cow::Owned(out)
}

/// Escapes bare `<` in the plain segments of `line`, leaving inline code
/// spans untouched.
pub fn escape_line(line: &str) -> Cow<'_, str> {
    if !line.contains('<') {
        return Cow::Borrowed(line);
    }

    let segments = split_segments(line);
    let mut out = String::with_capacity(line.len() + 8);
    let mut changed = false;
    for segment in &segments {
        if segment.is_code {
            out.push_str(segment.text);
            continue;
        }
        let escaped = escape_plain(segment.text);
        if let Cow::Owned(_) = escaped {
            changed = true;
        }
        out.push_str(&escaped);
    }

    if changed {
        Cow::Owned(out)
    } else {
        Cow::Borrowed(line)
    }
}

/// True when the whole line, ignoring surrounding whitespace, is one HTML
/// comment: it starts with `<!--` and ends with `-->` without the two
/// overlapping. Anything between the outermost delimiters is accepted, so
/// `<!-- a --> b <!-- c -->` also counts.
pub fn is_full_line_comment(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.len() >= COMMENT_OPEN.len() + COMMENT_CLOSE.len()
        && trimmed.starts_with(COMMENT_OPEN)
        && trimmed.ends_with(COMMENT_CLOSE)
}
