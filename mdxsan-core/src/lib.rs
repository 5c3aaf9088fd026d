//! # mdxsan Core Library
//!
//! `mdxsan-core` rewrites auto-synced release notes so an MDX renderer, which
//! reads `<` as the start of a JSX tag, can build them. Inside every
//! `RELEASE_NOTES_START` / `RELEASE_NOTES_END` region, bare `<` characters are
//! replaced with `&lt;`. Inline code spans, fenced code blocks and HTML comment
//! openers are left byte-for-byte as they were.
//!
//! This is not a Markdown parser. It knows about fences, inline code spans and
//! single-line HTML comments, and nothing else.
//!
//! ## Modules
//!
//! * `config`: markers and file extensions, loaded from embedded YAML defaults
//!   plus an optional user file.
//! * `tracker`: the region × fence state machine that classifies each line.
//! * `escaper`: splits a line into code/plain segments and escapes plain text.
//! * `engine`: the `DocumentSanitizer` trait.
//! * `document`: `ReleaseNotesSanitizer`, the implementation for whole documents.
//! * `locator`: recursive, suffix-filtered document discovery.
//! * `batch`: runs the sanitizer over a tree and writes changed files back.
//! * `errors`: the `MdxsanError` type.
//!
//! ## Usage Example
//!
//! ```rust
//! use mdxsan_core::{sanitize_str, SanitizerConfig};
//!
//! let input = "RELEASE_NOTES_START\nLatency is now <100us (see `Vec<u8>`)\nRELEASE_NOTES_END";
//! let output = sanitize_str(input, &SanitizerConfig::default());
//! assert_eq!(
//!     output,
//!     "RELEASE_NOTES_START\nLatency is now &lt;100us (see `Vec<u8>`)\nRELEASE_NOTES_END"
//! );
//! ```
//!
//! ## Error Handling
//!
//! Only enumeration and file I/O can fail, reported as [`MdxsanError`]. A
//! missing docs root aborts [`sanitize_tree`]; a single unreadable or
//! unwritable file is recorded in the [`BatchReport`] and skipped.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod batch;
pub mod config;
pub mod document;
pub mod engine;
pub mod errors;
pub mod escaper;
pub mod locator;
pub mod tracker;

pub use batch::{
    process_file, sanitize_files, sanitize_tree, BatchReport, ChangedContents, FileChange, FileFailure, FileOutcome,
    RunOptions,
};
pub use config::{merge_config, SanitizerConfig, UserConfig, DEFAULT_END_MARKER, DEFAULT_START_MARKER};
pub use document::{sanitize_str, ReleaseNotesSanitizer};
pub use engine::{DocumentSanitizer, SanitizedDocument};
pub use errors::MdxsanError;
pub use escaper::{escape_line, escape_plain, is_full_line_comment, split_segments, Segment};
pub use locator::find_documents;
pub use tracker::{classify_lines, LineClass, RegionTracker, ScanState};
