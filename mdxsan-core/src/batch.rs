//! batch.rs - Runs the sanitizer over a docs tree and writes changes back.
//!
//! Documents are processed one at a time: read fully, sanitized in memory,
//! and written back only when the text changed. A failure on one file is
//! recorded and the batch moves on; only a failure to enumerate the tree
//! aborts the run.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, info, warn};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::SanitizerConfig;
use crate::document::ReleaseNotesSanitizer;
use crate::engine::DocumentSanitizer;
use crate::errors::{MdxsanError, Result};
use crate::locator::find_documents;

const TMP_SUFFIX: &str = ".mdxsan.tmp";

/// Options controlling a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Compute changes but never write to disk.
    pub dry_run: bool,
    /// Keep the original and sanitized text of changed files in the report.
    pub keep_contents: bool,
}

/// Before/after text of a changed file, kept when `RunOptions::keep_contents`
/// is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangedContents {
    pub original: String,
    pub sanitized: String,
}

/// A file whose text was (or, in a dry run, would be) rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    pub path: PathBuf,
    pub escaped_lines: usize,
    pub contents: Option<ChangedContents>,
}

/// A file that could not be read or written.
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: MdxsanError,
}

/// Result of processing one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Unchanged,
    Changed(FileChange),
}

/// Summary of a whole batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Number of documents the locator returned.
    pub scanned: usize,
    /// Files that changed, in processing order.
    pub changed: Vec<FileChange>,
    /// Files that failed, in processing order.
    pub failures: Vec<FileFailure>,
}

impl BatchReport {
    pub fn changed_count(&self) -> usize {
        self.changed.len()
    }

    pub fn changed_paths(&self) -> impl Iterator<Item = &Path> {
        self.changed.iter().map(|c| c.path.as_path())
    }

    /// True when every file was processed without error.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Sanitizes one file in place.
pub fn process_file(path: &Path, sanitizer: &dyn DocumentSanitizer, options: RunOptions) -> Result<FileOutcome> {
    let original = fs::read_to_string(path).map_err(|e| MdxsanError::io(path, e))?;
    let result = sanitizer.sanitize(&original);

    if !result.is_changed() || result.content == original.as_str() {
        debug!("No changes needed: {}", path.display());
        return Ok(FileOutcome::Unchanged);
    }

    if options.dry_run {
        debug!("Dry run, not writing: {}", path.display());
    } else {
        write_in_place(path, &result.content)?;
        info!("Rewrote {} ({} line(s) escaped)", path.display(), result.escaped_lines);
    }

    let contents = options.keep_contents.then(|| ChangedContents {
        sanitized: result.content.clone().into_owned(),
        original: original.clone(),
    });

    Ok(FileOutcome::Changed(FileChange {
        path: path.to_path_buf(),
        escaped_lines: result.escaped_lines,
        contents,
    }))
}

/// Locates every document under `root` and sanitizes each one.
///
/// Fails only when the tree itself cannot be enumerated, in which case no
/// file has been touched.
pub fn sanitize_tree(root: &Path, config: &SanitizerConfig, options: RunOptions) -> Result<BatchReport> {
    let documents = find_documents(root, config)?;
    let sanitizer = ReleaseNotesSanitizer::new(config.clone());
    Ok(sanitize_files(&documents, &sanitizer, options))
}

/// Sanitizes an explicit list of files, recording per-file failures.
pub fn sanitize_files(paths: &[PathBuf], sanitizer: &dyn DocumentSanitizer, options: RunOptions) -> BatchReport {
    let mut report = BatchReport {
        scanned: paths.len(),
        ..BatchReport::default()
    };

    for path in paths {
        match process_file(path, sanitizer, options) {
            Ok(FileOutcome::Changed(change)) => report.changed.push(change),
            Ok(FileOutcome::Unchanged) => {}
            Err(error) => {
                warn!("Skipping {}: {}", path.display(), error);
                report.failures.push(FileFailure {
                    path: path.clone(),
                    error,
                });
            }
        }
    }

    debug!(
        "Batch finished: {} scanned, {} changed, {} failed",
        report.scanned,
        report.changed.len(),
        report.failures.len()
    );
    report
}

/// Writes `content` to a sibling temp file and renames it over `path`, so a
/// failed write never leaves a truncated document behind.
fn write_in_place(path: &Path, content: &str) -> Result<()> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let tmp_path = path.with_file_name(format!("{file_name}{TMP_SUFFIX}"));
    let permissions = fs::metadata(path).map_err(|e| MdxsanError::io(path, e))?.permissions();

    let written = (|| -> std::io::Result<()> {
        let mut tmp = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&tmp_path)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        fs::set_permissions(&tmp_path, permissions)?;
        fs::rename(&tmp_path, path)
    })();

    if let Err(e) = written {
        let _ = fs::remove_file(&tmp_path);
        return Err(MdxsanError::io(path, e));
    }
    Ok(())
}
