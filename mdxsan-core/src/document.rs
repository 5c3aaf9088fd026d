//! document.rs - The release-notes sanitizer for one document.
//!
//! Runs the region tracker over the document's lines and escapes every
//! eligible line. Lines are split and rejoined on `\n` only, so `\r` stays
//! part of each line and CRLF documents keep their endings.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use std::borrow::Cow;

use crate::config::SanitizerConfig;
use crate::engine::{DocumentSanitizer, SanitizedDocument};
use crate::escaper::{escape_line, is_full_line_comment};
use crate::tracker::{LineClass, RegionTracker};

/// Escapes bare `<` inside release-notes regions.
#[derive(Debug, Clone, Default)]
pub struct ReleaseNotesSanitizer {
    config: SanitizerConfig,
}

impl ReleaseNotesSanitizer {
    pub fn new(config: SanitizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SanitizerConfig {
        &self.config
    }

    /// Rewrites a single line given its classification. `None` means the line
    /// is kept as it is.
    fn rewrite_line(class: LineClass, line: &str) -> Option<String> {
        if !class.is_eligible() || !line.contains('<') || is_full_line_comment(line) {
            return None;
        }
        match escape_line(line) {
            Cow::Owned(escaped) => Some(escaped),
            Cow::Borrowed(_) => None,
        }
    }
}

impl DocumentSanitizer for ReleaseNotesSanitizer {
    fn sanitize<'a>(&self, content: &'a str) -> SanitizedDocument<'a> {
        let mut tracker = RegionTracker::from_config(&self.config);
        let mut escaped_lines = 0usize;
        let mut lines: Vec<Cow<'a, str>> = Vec::new();

        for line in content.split('\n') {
            let class = tracker.classify(line);
            match Self::rewrite_line(class, line) {
                Some(escaped) => {
                    escaped_lines += 1;
                    lines.push(Cow::Owned(escaped));
                }
                None => lines.push(Cow::Borrowed(line)),
            }
        }

        if escaped_lines == 0 {
            return SanitizedDocument {
                content: Cow::Borrowed(content),
                escaped_lines,
            };
        }

        debug!("Escaped {} line(s) in document.", escaped_lines);
        SanitizedDocument {
            content: Cow::Owned(lines.join("\n")),
            escaped_lines,
        }
    }
}

/// One-shot helper: sanitizes `content` with the given config.
pub fn sanitize_str(content: &str, config: &SanitizerConfig) -> String {
    ReleaseNotesSanitizer::new(config.clone())
        .sanitize(content)
        .content
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(doc: &str) -> String {
        sanitize_str(doc, &SanitizerConfig::default())
    }

    #[test]
    fn escapes_only_inside_region() {
        let doc = "before <a>\nRELEASE_NOTES_START\nLatency improved to <100us\nRELEASE_NOTES_END\nafter <b>";
        assert_eq!(
            run(doc),
            "before <a>\nRELEASE_NOTES_START\nLatency improved to &lt;100us\nRELEASE_NOTES_END\nafter <b>"
        );
    }

    #[test]
    fn fenced_block_is_untouched() {
        let doc = "RELEASE_NOTES_START\n```js\nif (x < 5) { ... }\n```\nthen <x\nRELEASE_NOTES_END";
        assert_eq!(
            run(doc),
            "RELEASE_NOTES_START\n```js\nif (x < 5) { ... }\n```\nthen &lt;x\nRELEASE_NOTES_END"
        );
    }

    #[test]
    fn full_line_comment_is_untouched() {
        let doc = "RELEASE_NOTES_START\n  <!-- internal note -->\nRELEASE_NOTES_END";
        let sanitizer = ReleaseNotesSanitizer::default();
        let result = sanitizer.sanitize(doc);
        assert!(!result.is_changed());
        assert!(matches!(result.content, Cow::Borrowed(_)));
    }

    #[test]
    fn unclosed_fence_is_reset_by_end_marker() {
        let doc = "RELEASE_NOTES_START\n```\n<kept>\nRELEASE_NOTES_END\nRELEASE_NOTES_START\nnow <plain>\nRELEASE_NOTES_END";
        assert_eq!(
            run(doc),
            "RELEASE_NOTES_START\n```\n<kept>\nRELEASE_NOTES_END\nRELEASE_NOTES_START\nnow &lt;plain>\nRELEASE_NOTES_END"
        );
    }

    #[test]
    fn marker_lines_are_never_escaped() {
        let doc = "<RELEASE_NOTES_START>\n<x\n<RELEASE_NOTES_END>";
        assert_eq!(run(doc), "<RELEASE_NOTES_START>\n&lt;x\n<RELEASE_NOTES_END>");
    }

    #[test]
    fn crlf_and_trailing_newline_survive() {
        let doc = "RELEASE_NOTES_START\r\na <b\r\nRELEASE_NOTES_END\r\n";
        assert_eq!(run(doc), "RELEASE_NOTES_START\r\na &lt;b\r\nRELEASE_NOTES_END\r\n");
    }

    #[test]
    fn counts_escaped_lines() {
        let doc = "RELEASE_NOTES_START\n<a\nno tag\n<b\n`<c>`\nRELEASE_NOTES_END";
        let result = ReleaseNotesSanitizer::default().sanitize(doc);
        assert_eq!(result.escaped_lines, 2);
        assert!(result.is_changed());
    }

    #[test]
    fn unterminated_region_runs_to_end_of_document() {
        let doc = "RELEASE_NOTES_START\n<a";
        assert_eq!(run(doc), "RELEASE_NOTES_START\n&lt;a");
    }

    #[test]
    fn multi_line_comment_interior_is_still_escaped() {
        // Only single-line comments are recognised; the interior of a comment
        // spanning several lines is treated as ordinary text.
        let doc = "RELEASE_NOTES_START\n<!-- start of note\ninterior <x>\n-->\nRELEASE_NOTES_END";
        assert_eq!(
            run(doc),
            "RELEASE_NOTES_START\n<!-- start of note\ninterior &lt;x>\n-->\nRELEASE_NOTES_END"
        );
    }

    #[test]
    fn document_without_markers_is_borrowed() {
        let doc = "# Guide\n\nUse <Tabs> here.\n";
        let result = ReleaseNotesSanitizer::default().sanitize(doc);
        assert!(matches!(result.content, Cow::Borrowed(s) if s == doc));
    }
}
