// mdxsan/src/commands/sanitize.rs
//! The sanitize run: load config, process the docs tree, print the report.

use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;
use std::path::{Path, PathBuf};

use mdxsan_core::{sanitize_tree, BatchReport, RunOptions, SanitizerConfig};

use crate::ui::{diff_viewer, output};

/// Options for a single invocation.
#[derive(Debug, Clone, Default)]
pub struct SanitizeOptions {
    pub root: PathBuf,
    pub config_path: Option<PathBuf>,
    pub check: bool,
    pub diff: bool,
    pub quiet: bool,
}

/// How a completed run should be reported to the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Everything processed; in check mode, nothing needed changing.
    Success,
    /// Check mode found files that need sanitizing.
    ChangesNeeded,
    /// At least one file could not be read or written.
    PartialFailure,
}

impl RunStatus {
    pub const fn exit_code(self) -> u8 {
        match self {
            RunStatus::Success => 0,
            RunStatus::ChangesNeeded | RunStatus::PartialFailure => 1,
        }
    }
}

/// Runs the sanitizer and writes progress to `out` and per-file failures to
/// `err`. Returns `Err` only for fatal problems (bad config, missing root),
/// in which case no file has been modified.
pub fn run_sanitize(opts: &SanitizeOptions, out: &mut dyn Write, err: &mut dyn Write, color: bool) -> Result<RunStatus> {
    info!("Starting mdxsan run on {}", opts.root.display());

    let config = match &opts.config_path {
        Some(path) => SanitizerConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config '{}'", path.display()))?,
        None => SanitizerConfig::load_default().context("Failed to load built-in config")?,
    };
    debug!("Using config: {:?}", config);

    if !opts.quiet {
        output::print_header(out, opts.check, color)?;
    }

    let run_options = RunOptions {
        dry_run: opts.check,
        keep_contents: opts.diff,
    };
    let report = sanitize_tree(&opts.root, &config, run_options)
        .with_context(|| format!("Failed to scan docs directory '{}'", opts.root.display()))?;

    report_changes(&report, opts, out, err, color)?;

    let status = if !report.is_clean() {
        RunStatus::PartialFailure
    } else if opts.check && report.changed_count() > 0 {
        RunStatus::ChangesNeeded
    } else {
        RunStatus::Success
    };
    info!("mdxsan run finished with status {:?}", status);
    Ok(status)
}

fn report_changes(
    report: &BatchReport,
    opts: &SanitizeOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
    color: bool,
) -> Result<()> {
    let cwd = std::env::current_dir().ok().and_then(|d| d.canonicalize().ok());

    for change in &report.changed {
        let shown = display_path(&change.path, cwd.as_deref());
        if !opts.quiet {
            output::print_changed(out, &shown, opts.check, color)?;
        }
        if let Some(contents) = &change.contents {
            diff_viewer::print_diff(
                &shown.to_string_lossy(),
                &contents.original,
                &contents.sanitized,
                out,
                color,
            )?;
        }
    }

    for failure in &report.failures {
        let shown = display_path(&failure.path, cwd.as_deref());
        output::print_failure(err, &shown, &failure.error, color)?;
    }

    if !opts.quiet {
        output::print_summary(out, report.changed_count(), report.failures.len(), opts.check, color)?;
    }
    Ok(())
}

/// Shows `path` relative to `base` when it lies below it.
fn display_path(path: &Path, base: Option<&Path>) -> PathBuf {
    base.and_then(|base| path.strip_prefix(base).ok())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| path.to_path_buf())
}
