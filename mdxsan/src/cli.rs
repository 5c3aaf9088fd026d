// mdxsan/src/cli.rs
//! Command-line interface definition for `mdxsan`.

use clap::Parser;
use std::path::PathBuf;

/// Directory sanitized when no root is given.
pub const DEFAULT_DOCS_DIR: &str = "docs";

#[derive(Parser, Debug)]
#[command(
    name = "mdxsan",
    version = env!("CARGO_PKG_VERSION"),
    about = "Escape bare `<` in release notes so MDX builds accept them",
    long_about = "mdxsan rewrites Markdown files in place, replacing bare `<` with `&lt;` inside RELEASE_NOTES_START / RELEASE_NOTES_END regions. Inline code, fenced code blocks and HTML comments are left untouched. Run it before the site build."
)]
pub struct Cli {
    /// Docs directory to scan recursively.
    #[arg(value_name = "ROOT", default_value = DEFAULT_DOCS_DIR)]
    pub root: PathBuf,

    /// YAML file overriding the region markers or file extensions.
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Report files that need sanitizing without writing them; exit 1 if any.
    #[arg(long)]
    pub check: bool,

    /// Print a unified diff for every changed file.
    #[arg(long, short = 'D')]
    pub diff: bool,

    /// Suppress progress output; errors are still printed.
    #[arg(long, short = 'q', conflicts_with = "debug")]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long, short = 'd')]
    pub debug: bool,
}
