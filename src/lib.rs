//! Plain-text table rendering and paragraph wrapping for terminal output.
//!
//! This crate turns a grid of strings into an aligned, optionally boxed,
//! fixed-width table suitable for CLI tools and log layers, and provides the
//! greedy word-wrapper the renderer is built on.
//!
//! # Features
//!
//! - **Table rendering**: multi-line cell expansion, per-column alignment
//!   and wrap widths, and a border grammar with distinct junction glyphs for
//!   the first column, separator rules, and the outer box
//! - **Style presets**: plain, ASCII grid, boxed, and box-drawing styles,
//!   all expressible through custom glyph kits
//! - **Text wrapping**: paragraph-aware greedy fill with first-line and
//!   continuation prefixes, resolved against the terminal width on demand
//! - **ANSI awareness**: SGR escape sequences never affect wrap or padding
//!   decisions
//! - **Formatting glue**: ordinals, digit grouping, byte sizes, sentence
//!   casing, display-width truncation
//!
//! Rendering never fails: malformed input (uneven rows, missing alignments,
//! absent terminal) is normalized rather than rejected, and both [`render`]
//! and [`wrap`] are pure functions that are safe to call concurrently.
//!
//! # Example
//!
//! ```
//! use gridtext::{render, Row, TableOptions, TableStyle};
//!
//! let grid = [
//!     Row::cells(["", "Bob", "Sue"]),
//!     Row::Separator,
//!     Row::cells(["Hometown", "San Antonio", "Austin"]),
//!     Row::cells(["Mother", "Bessie", "Mary"]),
//! ];
//! let out = render(&grid, &TableOptions::new(TableStyle::ascii()));
//! assert_eq!(out, concat!(
//!     "+----------+-------------+--------+\n",
//!     "|          | Bob         | Sue    |\n",
//!     "+----------+-------------+--------+\n",
//!     "| Hometown | San Antonio | Austin |\n",
//!     "| Mother   | Bessie      | Mary   |\n",
//!     "+----------+-------------+--------+\n",
//! ));
//! ```

pub mod ansi;
pub mod human;
pub mod style;
pub mod table;
pub mod terminal;
pub mod wrap;

pub use ansi::visible_width;
pub use style::{Alignment, RowGlyphs, RuleGlyphs, TableStyle};
pub use table::{render, Row, TableOptions};
pub use terminal::{FixedWidthSource, TerminalWidthSource, WidthSource, DEFAULT_WIDTH};
pub use wrap::{wrap, wrap_with_source};
