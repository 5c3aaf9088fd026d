// mdxsan/src/lib.rs
//! # mdxsan CLI Application
//!
//! Command-line front end for `mdxsan-core`. Meant to run as a pre-build hook:
//! it walks the docs directory, escapes bare `<` inside release-notes regions,
//! and prints which files it rewrote.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

pub use commands::sanitize::{run_sanitize, RunStatus, SanitizeOptions};
