// mdxsan/src/ui/diff_viewer.rs
//! Unified diff output for files changed by a run.
//!
//! Highlights removed lines in red and added lines in green when `color` is
//! set.

use diffy::{create_patch, Line as DiffLine};
use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Writes a unified diff between `original` and `sanitized`, labelled with
/// `label` (usually the file path). Writes nothing when they are equal.
pub fn print_diff(
    label: &str,
    original: &str,
    sanitized: &str,
    w: &mut dyn Write,
    color: bool,
) -> io::Result<()> {
    if original == sanitized {
        return Ok(());
    }
    let patch = create_patch(original, sanitized);

    let old_header = format!("--- a/{label}");
    let new_header = format!("+++ b/{label}");
    if color {
        writeln!(w, "{}", old_header.bold())?;
        writeln!(w, "{}", new_header.bold())?;
    } else {
        writeln!(w, "{old_header}")?;
        writeln!(w, "{new_header}")?;
    }

    for hunk in patch.hunks() {
        let old = hunk.old_range();
        let new = hunk.new_range();
        let range = format!("@@ -{},{} +{},{} @@", old.start(), old.len(), new.start(), new.len());
        if color {
            writeln!(w, "{}", range.cyan())?;
        } else {
            writeln!(w, "{range}")?;
        }

        for line_change in hunk.lines() {
            match line_change {
                DiffLine::Delete(s) => write_line(w, '-', s, color)?,
                DiffLine::Insert(s) => write_line(w, '+', s, color)?,
                DiffLine::Context(s) => write_line(w, ' ', s, false)?,
            }
        }
    }
    Ok(())
}

fn write_line(w: &mut dyn Write, prefix: char, text: &str, color: bool) -> io::Result<()> {
    let text = text.strip_suffix('\n').unwrap_or(text);
    let line = format!("{prefix}{text}");
    match (color, prefix) {
        (true, '-') => writeln!(w, "{}", line.red()),
        (true, '+') => writeln!(w, "{}", line.green()),
        _ => writeln!(w, "{line}"),
    }
}
