//! Horizontal window math: truncation, ellipsis markers, mark centering,
//! and the caret line drawn beneath a marked column.
//!
//! All column arithmetic is in `char`s, like the rest of the crate. A
//! "window" is the contiguous slice of a line chosen for display after the
//! width budget and mark-centering constraints are applied; ellipsis markers
//! are part of the window and count against the budget.

/// Width of one ellipsis marker (`"... "` or `" ..."`).
pub(crate) const ELLIPSIS_LEN: usize = 4;

/// Character width reserved for the line number in the gutter.
pub(crate) const MAX_LINE_NO_WIDTH: usize = 5;

/// Full gutter span: the number field plus `|` plus one space.
pub(crate) const GUTTER_SPAN: usize = MAX_LINE_NO_WIDTH + 2;

// ============================================================================
// Window slicing
// ============================================================================

/// Slice `content` to at most `budget` chars starting at `start`, marking a
/// shifted start with a leading `"... "` and a cut-off end with a trailing
/// `" ..."`. Each marker consumes [`ELLIPSIS_LEN`] chars of the budget, so
/// the result never exceeds `budget` chars overall.
pub(crate) fn slice_window(content: &str, start: usize, budget: usize) -> String {
    let chars: Vec<char> = content.chars().collect();
    let len = chars.len();

    if len < budget {
        return chars[start.min(len)..].iter().collect();
    }

    let mut take = budget;
    let mut prefix = "";
    let mut suffix = "";

    if start > 0 {
        take = take.saturating_sub(ELLIPSIS_LEN);
        prefix = "... ";
    }
    if start + budget < len {
        take = take.saturating_sub(ELLIPSIS_LEN);
        suffix = " ...";
    }

    let start = start.min(len);
    let end = (start + take).min(len);
    let body: String = chars[start..end].iter().collect();
    format!("{prefix}{body}{suffix}")
}

/// Window a line that carries the caret mark.
///
/// The mark is centered in the budget when possible, but the window never
/// extends past the end of the text leaving unused trailing budget. Returns
/// the window and the mark's rendered position within it (shifted by
/// [`ELLIPSIS_LEN`] when a leading marker displaced the content).
pub(crate) fn mark_window(content: &str, mark_column: usize, budget: usize) -> (String, usize) {
    let len = content.chars().count();
    let offset = budget / 2;

    let start = (mark_column as isize - offset as isize)
        .min(len as isize - budget as isize)
        .max(0) as usize;

    let mut caret_pos = mark_column - start;
    if start > 0 {
        caret_pos += ELLIPSIS_LEN;
    }

    (slice_window(content, start, budget), caret_pos)
}

// ============================================================================
// Caret and gutter
// ============================================================================

/// Draw the annotation line under a marked column: dashes out to the caret,
/// then the caret glyph and the caller's original column number.
pub(crate) fn caret_line(caret_pos: usize, column: usize, indent_len: usize) -> String {
    let dashes = (GUTTER_SPAN * indent_len + caret_pos).saturating_sub(1);
    format!("{}^ column: {}", "-".repeat(dashes), column)
}

/// Left padding that right-aligns `number` in the gutter's number field,
/// filled with the configured indent unit.
pub(crate) fn gutter_pad(number: usize, indent: &str) -> String {
    let digits = number.to_string().len();
    indent.repeat(MAX_LINE_NO_WIDTH.saturating_sub(digits))
}

// ============================================================================
// Tests
// ============================================================================
