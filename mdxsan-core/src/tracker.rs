//! tracker.rs - Region and fence tracking for a single document.
//!
//! A document is scanned top to bottom in one forward pass. Each line is
//! classified according to whether it sits inside a release-notes region and,
//! within a region, whether it sits inside a fenced code block. Only lines
//! classified [`LineClass::Plain`] are candidates for escaping.
//!
//! License: MIT OR APACHE 2.0

use crate::config::SanitizerConfig;

/// Combined region × fence state. A fence can only be open inside a region,
/// because leaving a region always closes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    /// Outside any release-notes region.
    #[default]
    Outside,
    /// Inside a region, outside any fenced code block.
    Prose,
    /// Inside a region and inside a fenced code block.
    Fenced,
}

/// Classification of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// A start or end marker line. Passed through, never escaped.
    SkipMarker,
    /// Not inside a region. Passed through.
    OutsideRegion,
    /// A fence delimiter inside a region. Passed through.
    FenceToggle,
    /// Inside a fenced block inside a region. Passed through.
    Fenced,
    /// Inside a region, outside fences. Eligible for escaping.
    Plain,
}

impl LineClass {
    /// Whether lines of this class may be rewritten.
    pub const fn is_eligible(self) -> bool {
        matches!(self, LineClass::Plain)
    }
}

/// Returns true when the line, ignoring leading whitespace, opens or closes a
/// fenced code block (three or more backticks or tildes).
pub fn is_fence_delimiter(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("```") || trimmed.starts_with("~~~")
}

/// Line-by-line state machine over one document.
#[derive(Debug, Clone)]
pub struct RegionTracker<'m> {
    start_marker: &'m str,
    end_marker: &'m str,
    state: ScanState,
}

impl<'m> RegionTracker<'m> {
    pub fn new(start_marker: &'m str, end_marker: &'m str) -> Self {
        Self {
            start_marker,
            end_marker,
            state: ScanState::Outside,
        }
    }

    pub fn from_config(config: &'m SanitizerConfig) -> Self {
        Self::new(&config.start_marker, &config.end_marker)
    }

    pub const fn state(&self) -> ScanState {
        self.state
    }

    /// Classifies `line` and advances the state. Must be called on every line
    /// of the document in order.
    pub fn classify(&mut self, line: &str) -> LineClass {
        if line.contains(self.start_marker) {
            // A repeated start marker keeps an open fence open.
            if self.state == ScanState::Outside {
                self.state = ScanState::Prose;
            }
            return LineClass::SkipMarker;
        }
        if line.contains(self.end_marker) {
            self.state = ScanState::Outside;
            return LineClass::SkipMarker;
        }

        match self.state {
            ScanState::Outside => LineClass::OutsideRegion,
            ScanState::Prose if is_fence_delimiter(line) => {
                self.state = ScanState::Fenced;
                LineClass::FenceToggle
            }
            ScanState::Fenced if is_fence_delimiter(line) => {
                self.state = ScanState::Prose;
                LineClass::FenceToggle
            }
            ScanState::Prose => LineClass::Plain,
            ScanState::Fenced => LineClass::Fenced,
        }
    }
}

/// Iterator adaptor pairing each line with its classification.
#[derive(Debug)]
pub struct ClassifiedLines<'m, I> {
    lines: I,
    tracker: RegionTracker<'m>,
}

impl<'a, 'm, I> Iterator for ClassifiedLines<'m, I>
where
    I: Iterator<Item = &'a str>,
{
    type Item = (&'a str, LineClass);

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        Some((line, self.tracker.classify(line)))
    }
}

/// Classifies every line yielded by `lines` with a fresh tracker.
pub fn classify_lines<'a, 'm, I>(lines: I, config: &'m SanitizerConfig) -> ClassifiedLines<'m, I::IntoIter>
where
    I: IntoIterator<Item = &'a str>,
{
    ClassifiedLines {
        lines: lines.into_iter(),
        tracker: RegionTracker::from_config(config),
    }
}
