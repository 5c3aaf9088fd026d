// mdxsan/src/ui/output.rs
//! Console messages printed by a sanitize run.
//!
//! Every function takes the writer and a `color` flag so callers decide
//! whether the stream is a terminal.

use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::path::Path;

pub fn print_header(w: &mut dyn Write, check: bool, color: bool) -> io::Result<()> {
    let msg = if check {
        "Checking release notes for MDX compatibility..."
    } else {
        "Sanitizing release notes for MDX compatibility..."
    };
    if color {
        writeln!(w, "{}", msg.bold())
    } else {
        writeln!(w, "{msg}")
    }
}

pub fn print_changed(w: &mut dyn Write, path: &Path, check: bool, color: bool) -> io::Result<()> {
    let (mark, label) = if check {
        ("✗", "Needs sanitizing")
    } else {
        ("✓", "Sanitized")
    };
    match (color, check) {
        (true, true) => writeln!(w, "  {} {}: {}", mark.yellow(), label, path.display()),
        (true, false) => writeln!(w, "  {} {}: {}", mark.green(), label, path.display()),
        (false, _) => writeln!(w, "  {} {}: {}", mark, label, path.display()),
    }
}

pub fn print_failure(w: &mut dyn Write, path: &Path, error: &dyn std::fmt::Display, color: bool) -> io::Result<()> {
    if color {
        writeln!(w, "  {} Failed: {}: {}", "!".red(), path.display(), error)
    } else {
        writeln!(w, "  ! Failed: {}: {}", path.display(), error)
    }
}

/// Prints the closing line. A blank line separates it from the file list
/// when files were listed.
pub fn print_summary(w: &mut dyn Write, changed: usize, failed: usize, check: bool, color: bool) -> io::Result<()> {
    let mut msg = match (changed, check) {
        (0, _) => "Done: no changes needed.".to_string(),
        (n, true) => format!("Done: {n} file(s) need sanitizing."),
        (n, false) => format!("Done: {n} file(s) sanitized."),
    };
    if failed > 0 {
        msg.push_str(&format!(" {failed} file(s) could not be processed."));
    }

    if changed > 0 || failed > 0 {
        writeln!(w)?;
    }
    if color && failed > 0 {
        writeln!(w, "{}", msg.red())
    } else if color {
        writeln!(w, "{}", msg.green())
    } else {
        writeln!(w, "{msg}")
    }
}
