//! Render configuration.
//!
//! [`RenderOptions`] is a plain owned value consumed at render time. It is
//! normally assembled through the fluent methods on
//! [`CodeFrame`](crate::CodeFrame), but can also be built explicitly and
//! handed over via [`CodeFrame::with_options`](crate::CodeFrame::with_options).
//! Range endpoints are normalized at insertion, never stored inverted.

use rustc_hash::FxHashSet;

use crate::render::paint::Palette;

// ============================================================================
// Coordinates
// ============================================================================

/// A line/column coordinate. Lines are 1-indexed, columns 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    /// 1-indexed line number.
    pub line: usize,
    /// 0-indexed char column within the line.
    pub column: usize,
}

impl Point {
    /// Create a point from a line number and column.
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl From<(usize, usize)> for Point {
    fn from((line, column): (usize, usize)) -> Self {
        Self { line, column }
    }
}

// ============================================================================
// Width budget
// ============================================================================

/// Width budget for each rendered line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MaxColumns {
    /// The reported terminal width minus one column (queried at render time).
    #[default]
    Terminal,
    /// A fixed char budget; longer lines are truncated with ellipsis markers.
    Fixed(usize),
    /// No budget: lines are never truncated.
    Unbounded,
}

// ============================================================================
// Line selection
// ============================================================================

/// A contiguous line window with array-slice semantics.
///
/// Indices address the internal line storage (sentinel line 0 included);
/// negative indices count from the end, out-of-range indices clamp, and a
/// window whose end precedes its start is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSelection {
    /// Signed start index.
    pub start: isize,
    /// Signed end index (exclusive); `None` extends to the last line.
    pub end: Option<isize>,
}

impl LineSelection {
    /// Resolve against a storage of `len` lines into a clamped `start..end`.
    pub(crate) fn resolve(&self, len: usize) -> (usize, usize) {
        let clamp = |i: isize| -> usize {
            if i < 0 {
                len.saturating_sub(i.unsigned_abs())
            } else {
                (i as usize).min(len)
            }
        };
        let start = clamp(self.start);
        let end = self.end.map_or(len, clamp);
        (start, end.max(start))
    }
}

// ============================================================================
// RenderOptions
// ============================================================================

/// The full configuration consumed by one render.
#[derive(Debug)]
pub struct RenderOptions {
    /// Emphasis color name handed to the palette. Unknown names paint as a
    /// no-op.
    pub color: String,
    /// Gutter fill unit, repeated to right-align line numbers.
    pub indent: String,
    /// Per-line width budget.
    pub max_columns: MaxColumns,
    /// Optional line window; `None` renders all real lines.
    pub selection: Option<LineSelection>,
    /// The single caret mark, if any.
    pub mark: Option<Point>,
    /// Line numbers rendered with emphasis.
    pub highlighted_numbers: FxHashSet<usize>,
    /// Inclusive whole-line highlight ranges, first match wins.
    pub line_ranges: Vec<(usize, usize)>,
    /// Column highlight ranges, first structurally matching range wins.
    pub column_ranges: Vec<(Point, Point)>,
    /// Paint capability applied to every emphasized piece of text.
    pub palette: Palette,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            color: "red".to_owned(),
            indent: " ".to_owned(),
            max_columns: MaxColumns::default(),
            selection: None,
            mark: None,
            highlighted_numbers: FxHashSet::default(),
            line_ranges: Vec::new(),
            column_ranges: Vec::new(),
            palette: Palette::default(),
        }
    }
}

impl RenderOptions {
    /// Push an inclusive line range, collapsing an inverted pair to its
    /// start. A start of 0 is lifted to the first real line.
    pub(crate) fn push_line_range(&mut self, start: usize, end: usize) {
        let start = start.max(1);
        let end = end.max(start);
        self.line_ranges.push((start, end));
    }

    /// Push a column range, collapsing a pair whose end line precedes its
    /// start line to the start point.
    pub(crate) fn push_column_range(&mut self, start: Point, end: Point) {
        let end = if end.line < start.line { start } else { end };
        self.column_ranges.push((start, end));
    }
}

// ============================================================================
// Tests
// ============================================================================
