//! Table style descriptors: border kits, row connectors, and presets.
//!
//! A [`TableStyle`] bundles four horizontal-rule kits (top border, the rule
//! for the first separator marker, the rule for subsequent markers, bottom
//! border), the connector glyphs drawn around data cells, and two flags. All
//! glyphs default to the empty string, which means "draw nothing" for that
//! structural element; a rule whose kit is entirely empty is suppressed as a
//! whole.

/// Horizontal alignment of a column's cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Pad on the right (the default).
    #[default]
    Left,
    /// Pad on the left.
    Right,
    /// Split padding, odd space on the right.
    Center,
}

/// Glyphs for one horizontal rule: the top border, a separator rule, or the
/// bottom border.
///
/// `left` opens the line and `right` closes it; `fill` repeats once per
/// column of width. `junction_first` joins column 0 to column 1 and
/// `junction` joins every later pair, which lets a style visually separate a
/// label column from the data columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleGlyphs {
    /// Opening glyph, drawn before the first column.
    pub left: String,
    /// Fill glyph, repeated to cover each column's width.
    pub fill: String,
    /// Junction drawn between columns 0 and 1.
    pub junction_first: String,
    /// Junction drawn between every later pair of columns.
    pub junction: String,
    /// Closing glyph, drawn after the last column.
    pub right: String,
}

impl RuleGlyphs {
    /// Build a kit from its five glyphs, in drawing order.
    pub fn new(left: &str, fill: &str, junction_first: &str, junction: &str, right: &str) -> Self {
        Self {
            left: left.into(),
            fill: fill.into(),
            junction_first: junction_first.into(),
            junction: junction.into(),
            right: right.into(),
        }
    }

    /// Whether this rule draws anything at all.
    ///
    /// A kit with every glyph empty suppresses its entire line.
    pub fn is_active(&self) -> bool {
        !(self.left.is_empty()
            && self.fill.is_empty()
            && self.junction_first.is_empty()
            && self.junction.is_empty()
            && self.right.is_empty())
    }
}

/// Connector glyphs drawn around and between the cells of a data row.
///
/// `after_first` separates columns 0 and 1, `between` every later pair;
/// like rule junctions this allows a distinguished label column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowGlyphs {
    /// Drawn before the first cell.
    pub leading: String,
    /// Drawn between columns 0 and 1.
    pub after_first: String,
    /// Drawn between every later pair of columns.
    pub between: String,
    /// Drawn after the last cell.
    pub trailing: String,
}

impl RowGlyphs {
    /// Build connectors from their four glyphs, in drawing order.
    pub fn new(leading: &str, after_first: &str, between: &str, trailing: &str) -> Self {
        Self {
            leading: leading.into(),
            after_first: after_first.into(),
            between: between.into(),
            trailing: trailing.into(),
        }
    }
}

/// Full visual style for a rendered table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableStyle {
    /// Border above the first row.
    pub top: RuleGlyphs,
    /// Rule drawn for the first separator marker, typically under a header.
    pub header_rule: RuleGlyphs,
    /// Rule drawn for every subsequent separator marker.
    pub row_rule: RuleGlyphs,
    /// Border below the last row.
    pub bottom: RuleGlyphs,
    /// Connectors around and between data cells.
    pub connectors: RowGlyphs,
    /// Synthesize a separator marker before every data row after the first.
    /// Caller-supplied markers are dropped in this mode so rules are not
    /// doubled.
    pub rule_between_rows: bool,
    /// Pad the last cell of each row out to its column width. Usually wanted
    /// whenever `connectors.trailing` is set.
    pub pad_trailing: bool,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self::plain()
    }
}

impl TableStyle {
    /// Minimal style: single-space column separators, no borders.
    ///
    /// ```text
    ///          Bob         Sue    John
    /// Hometown San Antonio Austin New York
    /// Mother   Bessie      Mary   Sarah
    /// Father   Rick        Dan    Mike
    /// ```
    pub fn plain() -> Self {
        Self {
            top: RuleGlyphs::default(),
            header_rule: RuleGlyphs::default(),
            row_rule: RuleGlyphs::default(),
            bottom: RuleGlyphs::default(),
            connectors: RowGlyphs::new("", " ", " ", ""),
            rule_between_rows: false,
            pad_trailing: false,
        }
    }

    /// ASCII grid with an outer border and a rule at each separator marker.
    ///
    /// ```text
    /// +----------+-------------+--------+----------+
    /// |          | Bob         | Sue    | John     |
    /// +----------+-------------+--------+----------+
    /// | Hometown | San Antonio | Austin | New York |
    /// | Mother   | Bessie      | Mary   | Sarah    |
    /// | Father   | Rick        | Dan    | Mike     |
    /// +----------+-------------+--------+----------+
    /// ```
    pub fn ascii() -> Self {
        Self {
            top: RuleGlyphs::new("+-", "-", "-+-", "-+-", "-+"),
            header_rule: RuleGlyphs::new("+-", "-", "-+-", "-+-", "-+"),
            row_rule: RuleGlyphs::default(),
            bottom: RuleGlyphs::new("+-", "-", "-+-", "-+-", "-+"),
            connectors: RowGlyphs::new("| ", " | ", " | ", " |"),
            rule_between_rows: false,
            pad_trailing: true,
        }
    }

    /// ASCII grid with a heavy outer box and a rule between every row.
    ///
    /// ```text
    /// +==========+=============+========+==========+
    /// |          | Bob         | Sue    | John     |
    /// +==========+=============+========+==========+
    /// | Hometown | San Antonio | Austin | New York |
    /// +----------+-------------+--------+----------+
    /// | Mother   | Bessie      | Mary   | Sarah    |
    /// +----------+-------------+--------+----------+
    /// | Father   | Rick        | Dan    | Mike     |
    /// +==========+=============+========+==========+
    /// ```
    pub fn boxed() -> Self {
        Self {
            top: RuleGlyphs::new("+=", "=", "=+=", "=+=", "=+"),
            header_rule: RuleGlyphs::new("+=", "=", "=+=", "=+=", "=+"),
            row_rule: RuleGlyphs::new("+-", "-", "-+-", "-+-", "-+"),
            bottom: RuleGlyphs::new("+=", "=", "=+=", "=+=", "=+"),
            connectors: RowGlyphs::new("| ", " | ", " | ", " |"),
            rule_between_rows: true,
            pad_trailing: true,
        }
    }

    /// Box-drawing style: double lines around the border and the first
    /// column, single lines inside, a rule between every row.
    ///
    /// ```text
    /// ╔══════════╦═════════════╤════════╤══════════╗
    /// ║          ║ Bob         │ Sue    │ John     ║
    /// ╠══════════╬═════════════╪════════╪══════════╣
    /// ║ Hometown ║ San Antonio │ Austin │ New York ║
    /// ╟──────────╫─────────────┼────────┼──────────╢
    /// ║ Mother   ║ Bessie      │ Mary   │ Sarah    ║
    /// ╟──────────╫─────────────┼────────┼──────────╢
    /// ║ Father   ║ Rick        │ Dan    │ Mike     ║
    /// ╚══════════╩═════════════╧════════╧══════════╝
    /// ```
    pub fn unicode_boxed() -> Self {
        Self {
            top: RuleGlyphs::new("\u{2554}\u{2550}", "\u{2550}", "\u{2550}\u{2566}\u{2550}", "\u{2550}\u{2564}\u{2550}", "\u{2550}\u{2557}"),
            header_rule: RuleGlyphs::new("\u{2560}\u{2550}", "\u{2550}", "\u{2550}\u{256c}\u{2550}", "\u{2550}\u{256a}\u{2550}", "\u{2550}\u{2563}"),
            row_rule: RuleGlyphs::new("\u{255f}\u{2500}", "\u{2500}", "\u{2500}\u{256b}\u{2500}", "\u{2500}\u{253c}\u{2500}", "\u{2500}\u{2562}"),
            bottom: RuleGlyphs::new("\u{255a}\u{2550}", "\u{2550}", "\u{2550}\u{2569}\u{2550}", "\u{2550}\u{2567}\u{2550}", "\u{2550}\u{255d}"),
            connectors: RowGlyphs::new("\u{2551} ", " \u{2551} ", " \u{2502} ", " \u{2551}"),
            rule_between_rows: true,
            pad_trailing: true,
        }
    }
}
