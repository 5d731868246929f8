//! Table rendering: grid model, multi-line cell expansion, and emission.
//!
//! [`render`] is a pure function of a grid of [`Row`]s and a
//! [`TableOptions`]: cells are optionally wrapped to per-column widths,
//! multi-line cells are expanded into extra physical rows, column widths are
//! measured over the expanded grid by visible codepoint count, and the
//! bordered output is emitted in one pass. Malformed input is normalized
//! rather than rejected; rendering never fails.

use smallvec::SmallVec;

use crate::ansi::visible_width;
use crate::style::{Alignment, RuleGlyphs, TableStyle};
use crate::wrap::wrap;

/// One input row: either a sequence of cells, one per column, or a separator
/// marker asking for a horizontal rule at that position instead of data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// A data row. Cells may contain embedded line breaks; such a row
    /// occupies multiple physical output lines.
    Cells(Vec<String>),
    /// Draw a horizontal rule here. The first marker in a grid uses the
    /// style's `header_rule` kit, later ones its `row_rule` kit.
    Separator,
}

impl Row {
    /// Build a data row from anything yielding string-likes.
    pub fn cells<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Row::Cells(cells.into_iter().map(Into::into).collect())
    }

    /// Whether this row is a separator marker.
    pub fn is_separator(&self) -> bool {
        matches!(self, Row::Separator)
    }
}

impl<S: Into<String>> FromIterator<S> for Row {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Row::cells(iter)
    }
}

/// Options controlling one render: the visual style plus per-column wrap
/// widths and alignments.
///
/// `column_widths` and `alignments` are index-to-value mappings with an
/// explicit default: entries beyond either vector's length mean "no wrap
/// limit" and [`Alignment::Left`] respectively, and entries beyond the
/// actual column count are ignored. The `Default` value is the minimal
/// single-space style with no wrapping.
#[derive(Debug, Clone, Default)]
pub struct TableOptions {
    /// Border and connector glyphs plus the two layout flags.
    pub style: TableStyle,
    /// Per-column wrap widths; `0` means "do not rewrap this column".
    pub column_widths: Vec<usize>,
    /// Per-column alignments.
    pub alignments: Vec<Alignment>,
}

impl TableOptions {
    /// Options using `style` with no per-column wrapping and all columns
    /// left-aligned.
    pub fn new(style: TableStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Set per-column alignments.
    pub fn with_alignments(mut self, alignments: Vec<Alignment>) -> Self {
        self.alignments = alignments;
        self
    }

    /// Set per-column wrap widths (`0` leaves a column unwrapped).
    pub fn with_column_widths(mut self, widths: Vec<usize>) -> Self {
        self.column_widths = widths;
        self
    }

    /// Effective alignment for a column; unspecified columns are Left.
    pub fn alignment(&self, col: usize) -> Alignment {
        self.alignments.get(col).copied().unwrap_or_default()
    }

    /// Wrap limit for a column; zero or unspecified means no wrapping.
    pub fn wrap_width(&self, col: usize) -> Option<usize> {
        match self.column_widths.get(col) {
            Some(&w) if w > 0 => Some(w),
            _ => None,
        }
    }
}

/// Render `grid` as a formatted table.
///
/// An empty grid renders as the empty string. Every emitted line ends with
/// exactly one line break; there is no leading or extra trailing break.
///
/// # Example
///
/// ```
/// use gridtext::{render, Row, TableOptions};
///
/// let grid = [
///     Row::cells(["", "Bob", "Sue"]),
///     Row::cells(["Hometown", "San Antonio", "Austin"]),
/// ];
/// let out = render(&grid, &TableOptions::default());
/// assert_eq!(out, "         Bob         Sue\nHometown San Antonio Austin\n");
/// ```
pub fn render(grid: &[Row], opts: &TableOptions) -> String {
    let expanded = expand(grid, opts);
    if expanded.is_empty() {
        return String::new();
    }
    let widths = column_widths(&expanded);
    let style = &opts.style;

    let mut out = String::with_capacity(estimate_capacity(expanded.len(), &widths, style));
    if style.top.is_active() {
        push_rule(&mut out, &style.top, &widths);
    }
    let mut seen_separator = false;
    for row in &expanded {
        match row {
            Row::Separator => {
                let kit = if seen_separator {
                    &style.row_rule
                } else {
                    &style.header_rule
                };
                seen_separator = true;
                if kit.is_active() {
                    push_rule(&mut out, kit, &widths);
                } else {
                    // The marker still occupies a physical line.
                    out.push('\n');
                }
            }
            Row::Cells(cells) => push_row(&mut out, cells, &widths, opts),
        }
    }
    if style.bottom.is_active() {
        push_rule(&mut out, &style.bottom, &widths);
    }
    out
}

/// Wrap cells to their column widths, split every cell on line breaks, and
/// expand each data row into one physical row per cell line. Separator
/// markers pass through, except under `rule_between_rows` where caller
/// markers are dropped and one is synthesized before every data row after
/// the first.
fn expand(grid: &[Row], opts: &TableOptions) -> Vec<Row> {
    let mut expanded = Vec::with_capacity(grid.len());
    for row in grid {
        let cells = match row {
            Row::Separator => {
                if !opts.style.rule_between_rows {
                    expanded.push(Row::Separator);
                }
                continue;
            }
            Row::Cells(cells) => cells,
        };
        if opts.style.rule_between_rows && !expanded.is_empty() {
            expanded.push(Row::Separator);
        }
        let split: Vec<Vec<String>> = cells
            .iter()
            .enumerate()
            .map(|(col, cell)| {
                let wrapped = match opts.wrap_width(col) {
                    Some(limit) => wrap(cell, limit as isize, "", ""),
                    None => cell.replace("\r\n", "\n"),
                };
                wrapped.split('\n').map(str::to_string).collect()
            })
            .collect();
        let height = split.iter().map(Vec::len).max().unwrap_or(0);
        for line in 0..height {
            expanded.push(Row::Cells(
                split
                    .iter()
                    .map(|lines| lines.get(line).cloned().unwrap_or_default())
                    .collect(),
            ));
        }
    }
    expanded
}

/// Maximum visible cell width per column over the expanded grid. Tolerates
/// uneven row lengths; narrower rows simply don't extend the array.
fn column_widths(rows: &[Row]) -> SmallVec<[usize; 8]> {
    let mut widths: SmallVec<[usize; 8]> = SmallVec::new();
    for row in rows {
        let Row::Cells(cells) = row else { continue };
        if cells.len() > widths.len() {
            widths.resize(cells.len(), 0);
        }
        for (col, cell) in cells.iter().enumerate() {
            widths[col] = widths[col].max(visible_width(cell));
        }
    }
    widths
}

/// Emit one horizontal rule line: left glyph, per-column fill with junction
/// glyphs between columns (column 1 distinguished), right glyph.
fn push_rule(out: &mut String, kit: &RuleGlyphs, widths: &[usize]) {
    out.push_str(&kit.left);
    for (col, &width) in widths.iter().enumerate() {
        if col == 1 {
            out.push_str(&kit.junction_first);
        } else if col > 1 {
            out.push_str(&kit.junction);
        }
        for _ in 0..width {
            out.push_str(&kit.fill);
        }
    }
    out.push_str(&kit.right);
    out.push('\n');
}

/// Emit one data row. Rows shorter than the column count are extended with
/// empty cells; right-hand padding is suppressed for the final cell unless
/// the style's `pad_trailing` flag is set.
fn push_row(out: &mut String, cells: &[String], widths: &[usize], opts: &TableOptions) {
    let connectors = &opts.style.connectors;
    out.push_str(&connectors.leading);
    let last = widths.len().saturating_sub(1);
    for (col, &width) in widths.iter().enumerate() {
        if col == 1 {
            out.push_str(&connectors.after_first);
        } else if col > 1 {
            out.push_str(&connectors.between);
        }
        let cell = cells.get(col).map(String::as_str).unwrap_or("");
        let pad = width.saturating_sub(visible_width(cell));
        let pad_right = opts.style.pad_trailing || col < last;
        match opts.alignment(col) {
            Alignment::Left => {
                out.push_str(cell);
                if pad_right {
                    push_spaces(out, pad);
                }
            }
            Alignment::Right => {
                push_spaces(out, pad);
                out.push_str(cell);
            }
            Alignment::Center => {
                let left = pad / 2;
                push_spaces(out, left);
                out.push_str(cell);
                if pad_right {
                    push_spaces(out, pad - left);
                }
            }
        }
    }
    out.push_str(&connectors.trailing);
    out.push('\n');
}

fn push_spaces(out: &mut String, n: usize) {
    for _ in 0..n {
        out.push(' ');
    }
}

/// Rough output-size estimate so rendering mostly allocates once.
fn estimate_capacity(rows: usize, widths: &[usize], style: &TableStyle) -> usize {
    let line = widths.iter().sum::<usize>()
        + widths.len().saturating_sub(1) * style.connectors.between.len()
        + style.connectors.leading.len()
        + style.connectors.trailing.len()
        + 1;
    line * (rows + 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn household() -> Vec<Row> {
        vec![
            Row::cells(["", "Bob", "Sue", "John"]),
            Row::Separator,
            Row::cells(["Hometown", "San Antonio", "Austin", "New York"]),
            Row::cells(["Mother", "Bessie", "Mary", "Sarah"]),
            Row::cells(["Father", "Rick", "Dan", "Mike"]),
        ]
    }

    #[test]
    fn empty_grid_renders_empty() {
        assert_eq!(render(&[], &TableOptions::default()), "");
    }

    #[test]
    fn plain_style_uneven_rows() {
        let grid = [
            Row::cells(["Bob", "Sue"]),
            Row::cells(["Hometown", "Austin", "NY"]),
        ];
        assert_eq!(
            render(&grid, &TableOptions::default()),
            "Bob      Sue    \nHometown Austin NY\n"
        );
    }

    #[test]
    fn plain_style_household() {
        let grid = [
            Row::cells(["", "Bob", "Sue", "John"]),
            Row::cells(["Hometown", "San Antonio", "Austin", "New York"]),
            Row::cells(["Mother", "Bessie", "Mary", "Sarah"]),
            Row::cells(["Father", "Rick", "Dan", "Mike"]),
        ];
        assert_eq!(
            render(&grid, &TableOptions::default()),
            concat!(
                "         Bob         Sue    John\n",
                "Hometown San Antonio Austin New York\n",
                "Mother   Bessie      Mary   Sarah\n",
                "Father   Rick        Dan    Mike\n",
            )
        );
    }

    #[test]
    fn multi_line_cells_expand_rows() {
        let grid = [Row::cells(["a\nb", "c"])];
        assert_eq!(render(&grid, &TableOptions::default()), "a c\nb \n");
    }

    #[test]
    fn crlf_cells_are_normalized() {
        let grid = [Row::cells(["a\r\nb", "c"])];
        assert_eq!(render(&grid, &TableOptions::default()), "a c\nb \n");
    }

    #[test]
    fn ascii_style_household() {
        assert_eq!(
            render(&household(), &TableOptions::new(TableStyle::ascii())),
            concat!(
                "+----------+-------------+--------+----------+\n",
                "|          | Bob         | Sue    | John     |\n",
                "+----------+-------------+--------+----------+\n",
                "| Hometown | San Antonio | Austin | New York |\n",
                "| Mother   | Bessie      | Mary   | Sarah    |\n",
                "| Father   | Rick        | Dan    | Mike     |\n",
                "+----------+-------------+--------+----------+\n",
            )
        );
    }

    #[test]
    fn boxed_style_household() {
        assert_eq!(
            render(&household(), &TableOptions::new(TableStyle::boxed())),
            concat!(
                "+==========+=============+========+==========+\n",
                "|          | Bob         | Sue    | John     |\n",
                "+==========+=============+========+==========+\n",
                "| Hometown | San Antonio | Austin | New York |\n",
                "+----------+-------------+--------+----------+\n",
                "| Mother   | Bessie      | Mary   | Sarah    |\n",
                "+----------+-------------+--------+----------+\n",
                "| Father   | Rick        | Dan    | Mike     |\n",
                "+==========+=============+========+==========+\n",
            )
        );
    }

    #[test]
    fn unicode_boxed_style_household() {
        assert_eq!(
            render(&household(), &TableOptions::new(TableStyle::unicode_boxed())),
            concat!(
                "╔══════════╦═════════════╤════════╤══════════╗\n",
                "║          ║ Bob         │ Sue    │ John     ║\n",
                "╠══════════╬═════════════╪════════╪══════════╣\n",
                "║ Hometown ║ San Antonio │ Austin │ New York ║\n",
                "╟──────────╫─────────────┼────────┼──────────╢\n",
                "║ Mother   ║ Bessie      │ Mary   │ Sarah    ║\n",
                "╟──────────╫─────────────┼────────┼──────────╢\n",
                "║ Father   ║ Rick        │ Dan    │ Mike     ║\n",
                "╚══════════╩═════════════╧════════╧══════════╝\n",
            )
        );
    }

    #[test]
    fn empty_top_kit_suppresses_the_border() {
        let mut style = TableStyle::ascii();
        style.top = RuleGlyphs::default();
        let out = render(&household(), &TableOptions::new(style));
        assert!(out.starts_with("|          | Bob"));
    }

    #[test]
    fn inactive_separator_still_takes_a_line() {
        let grid = [
            Row::cells(["a"]),
            Row::Separator,
            Row::cells(["b"]),
        ];
        assert_eq!(render(&grid, &TableOptions::default()), "a\n\nb\n");
    }

    #[test]
    fn first_and_repeated_separators_use_their_own_kits() {
        let mut style = TableStyle::plain();
        style.header_rule = RuleGlyphs::new("=", "=", "=", "=", "=");
        style.row_rule = RuleGlyphs::new("-", "-", "-", "-", "-");
        let grid = [
            Row::cells(["aa"]),
            Row::Separator,
            Row::cells(["bb"]),
            Row::Separator,
            Row::cells(["cc"]),
        ];
        assert_eq!(
            render(&grid, &TableOptions::new(style)),
            "aa\n====\nbb\n----\ncc\n"
        );
    }

    #[test]
    fn rule_between_rows_drops_caller_markers() {
        let mut style = TableStyle::plain();
        style.row_rule = RuleGlyphs::new("", "-", "", "", "");
        style.header_rule = RuleGlyphs::new("", "-", "", "", "");
        style.rule_between_rows = true;
        // The caller marker after "aa" must not double the synthesized rule.
        let grid = [
            Row::cells(["aa"]),
            Row::Separator,
            Row::cells(["bb"]),
            Row::cells(["cc"]),
        ];
        assert_eq!(
            render(&grid, &TableOptions::new(style)),
            "aa\n--\nbb\n--\ncc\n"
        );
    }

    #[test]
    fn per_column_wrapping() {
        let grid = [Row::cells(["x", "Just a test sentence."])];
        let opts = TableOptions::default().with_column_widths(vec![0, 10]);
        assert_eq!(render(&grid, &opts), "x Just a\n  test\n  sentence.\n");
    }

    #[test]
    fn right_and_center_alignment() {
        let grid = [
            Row::cells(["a", "bb", "ccc"]),
            Row::cells(["dddd", "eee", "f"]),
        ];
        let opts = TableOptions::default().with_alignments(vec![
            Alignment::Right,
            Alignment::Center,
            Alignment::Right,
        ]);
        assert_eq!(render(&grid, &opts), "   a bb  ccc\ndddd eee   f\n");
    }

    #[test]
    fn center_puts_the_odd_space_on_the_right() {
        let grid = [Row::cells(["a"]), Row::cells(["wide"])];
        let mut opts = TableOptions::default().with_alignments(vec![Alignment::Center]);
        opts.style.pad_trailing = true;
        assert_eq!(render(&grid, &opts), " a  \nwide\n");
    }

    #[test]
    fn missing_alignments_default_to_left() {
        let opts = TableOptions::default().with_alignments(vec![Alignment::Right]);
        let grid = [
            Row::cells(["a", "b"]),
            Row::cells(["cc", "dd"]),
        ];
        assert_eq!(render(&grid, &opts), " a b\ncc dd\n");
    }

    #[test]
    fn ansi_cells_do_not_inflate_columns() {
        let grid = [
            Row::cells(["\x1b[1mab\x1b[0m", "x"]),
            Row::cells(["cd", "y"]),
        ];
        assert_eq!(
            render(&grid, &TableOptions::default()),
            "\x1b[1mab\x1b[0m x\ncd y\n"
        );
    }

    #[test]
    fn widths_track_expanded_lines_not_raw_cells() {
        // "San\nAntonio" is 11 raw codepoints but only 7 after expansion.
        let grid = [
            Row::cells(["San\nAntonio", "x"]),
            Row::cells(["abc", "y"]),
        ];
        assert_eq!(
            render(&grid, &TableOptions::default()),
            "San     x\nAntonio \nabc     y\n"
        );
    }

    #[test]
    fn separator_only_grid() {
        let grid = [Row::Separator];
        assert_eq!(render(&grid, &TableOptions::default()), "\n");
    }

    #[test]
    fn all_rows_dropped_renders_empty() {
        let mut style = TableStyle::plain();
        style.rule_between_rows = true;
        let grid = [Row::Separator, Row::Separator];
        assert_eq!(render(&grid, &TableOptions::new(style)), "");
    }

    #[test]
    fn row_collects_from_iterator() {
        let row: Row = ["a", "b"].into_iter().collect();
        assert_eq!(row, Row::cells(["a", "b"]));
        assert!(!row.is_separator());
        assert!(Row::Separator.is_separator());
    }
}
