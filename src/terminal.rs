//! Ambient terminal width detection.
//!
//! The wrapper resolves non-positive widths against the current display
//! width. The lookup is injected through [`WidthSource`] so callers and tests
//! can substitute a fixed value; the default implementation queries the
//! controlling terminal through crossterm and degrades to [`DEFAULT_WIDTH`]
//! when no terminal is available.

use crossterm::terminal;

/// Fallback display width used when the terminal size cannot be determined.
pub const DEFAULT_WIDTH: usize = 80;

/// Source of the ambient display width in columns.
///
/// Implementations must be cheap, non-blocking queries that always return a
/// positive value; failures degrade to a fixed constant rather than
/// propagate.
pub trait WidthSource {
    /// Current display width in columns.
    fn width(&self) -> usize;
}

/// Width source backed by the controlling terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalWidthSource;

impl WidthSource for TerminalWidthSource {
    fn width(&self) -> usize {
        match terminal::size() {
            Ok((cols, _)) if cols > 0 => cols as usize,
            _ => DEFAULT_WIDTH,
        }
    }
}

/// Fixed width source for tests and non-interactive callers.
#[derive(Debug, Clone, Copy)]
pub struct FixedWidthSource(pub usize);

impl WidthSource for FixedWidthSource {
    fn width(&self) -> usize {
        self.0
    }
}
