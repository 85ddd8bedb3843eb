//! The code frame: line store, selection, and the render loop.

use std::io::{self, Write};

use crate::options::{LineSelection, MaxColumns, Point, RenderOptions};
use crate::render::paint::{Palette, terminal_width};
use crate::render::{highlight, window};

// ============================================================================
// Line store
// ============================================================================

/// One stored source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// 1-indexed line number; 0 is the internal sentinel preamble line.
    pub number: usize,
    /// The line's text, without the trailing line break.
    pub text: String,
}

// ============================================================================
// CodeFrame
// ============================================================================

/// A source listing with numbered lines, optional truncation, a caret mark,
/// and highlights.
///
/// Configuration methods consume `self` and return the updated frame, so a
/// fully configured frame is an immutable value: rendering never mutates it
/// and can be repeated.
///
/// # Example
///
/// ```
/// use code_frame::{Palette, frame};
///
/// let listing = frame("one\ntwo\nthree\nfour\nfive")
///     .highlight(2)
///     .slice(1, 4)
///     .unbounded()
///     .palette(Palette::plain())
///     .render();
///
/// assert_eq!(listing, "    1| one\n    2| two\n    3| three");
/// ```
#[derive(Debug)]
pub struct CodeFrame {
    // Index 0 holds the sentinel preamble line; line k lives at index k.
    lines: Vec<SourceLine>,
    options: RenderOptions,
}

/// Build a [`CodeFrame`] over `text`.
pub fn frame(text: impl AsRef<str>) -> CodeFrame {
    CodeFrame::new(text)
}

impl CodeFrame {
    /// Split `text` into 1-indexed lines with default options.
    pub fn new(text: impl AsRef<str>) -> Self {
        let mut lines = vec![SourceLine {
            number: 0,
            text: String::new(),
        }];
        lines.extend(
            text.as_ref()
                .split('\n')
                .enumerate()
                .map(|(i, line)| SourceLine {
                    number: i + 1,
                    text: line.to_owned(),
                }),
        );
        Self {
            lines,
            options: RenderOptions::default(),
        }
    }

    /// Build a frame from an explicitly assembled [`RenderOptions`].
    pub fn with_options(text: impl AsRef<str>, options: RenderOptions) -> Self {
        Self {
            options,
            ..Self::new(text)
        }
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    /// Set the emphasis color name. Names the palette does not recognize
    /// paint as a no-op.
    pub fn color(mut self, name: impl Into<String>) -> Self {
        self.options.color = name.into();
        self
    }

    /// Set the gutter fill unit.
    pub fn indent(mut self, unit: impl Into<String>) -> Self {
        self.options.indent = unit.into();
        self
    }

    /// Set a fixed per-line width budget.
    pub fn max_columns(mut self, columns: usize) -> Self {
        self.options.max_columns = MaxColumns::Fixed(columns);
        self
    }

    /// Remove the width budget: lines are never truncated.
    pub fn unbounded(mut self) -> Self {
        self.options.max_columns = MaxColumns::Unbounded;
        self
    }

    /// Select the line window `start..end` with array-slice semantics:
    /// negative indices count from the end, out-of-range indices clamp.
    pub fn slice(mut self, start: isize, end: isize) -> Self {
        self.options.selection = Some(LineSelection {
            start,
            end: Some(end),
        });
        self
    }

    /// Select every line from `start` (array-slice semantics) onward.
    pub fn slice_from(mut self, start: isize) -> Self {
        self.options.selection = Some(LineSelection { start, end: None });
        self
    }

    /// Set the caret mark. The mark is kept only when `line` exists and
    /// `column` indexes a char of that line; otherwise any previously set
    /// mark is cleared and rendering proceeds unmarked.
    pub fn arrow_mark(mut self, line: usize, column: isize) -> Self {
        self.options.mark = self.valid_mark(line, column);
        self
    }

    fn valid_mark(&self, line: usize, column: isize) -> Option<Point> {
        if column < 0 {
            return None;
        }
        let column = column as usize;
        let len = self.lines.get(line)?.text.chars().count();
        (column < len).then_some(Point::new(line, column))
    }

    /// Add one line number to the emphasis set. Accumulates.
    pub fn highlight(mut self, line: usize) -> Self {
        self.options.highlighted_numbers.insert(line);
        self
    }

    /// Add several line numbers to the emphasis set. Accumulates.
    pub fn highlight_lines(mut self, lines: impl IntoIterator<Item = usize>) -> Self {
        self.options.highlighted_numbers.extend(lines);
        self
    }

    /// Add an inclusive whole-line highlight range. An inverted pair
    /// collapses to its start line.
    pub fn highlight_line_range(mut self, start: usize, end: usize) -> Self {
        self.options.push_line_range(start, end);
        self
    }

    /// Add a column highlight range between two points. A pair whose end
    /// line precedes its start line collapses to the start point.
    pub fn highlight_range(mut self, start: impl Into<Point>, end: impl Into<Point>) -> Self {
        self.options.push_column_range(start.into(), end.into());
        self
    }

    /// Inject a paint capability replacing the builtin palette.
    pub fn palette(mut self, palette: Palette) -> Self {
        self.options.palette = palette;
        self
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// The selected lines, with a leading sentinel stripped.
    fn selected(&self) -> &[SourceLine] {
        let (start, end) = match self.options.selection {
            Some(selection) => selection.resolve(self.lines.len()),
            None => (0, self.lines.len()),
        };
        let lines = &self.lines[start..end];
        match lines.first() {
            Some(line) if line.number == 0 => &lines[1..],
            _ => lines,
        }
    }

    /// Render the configured listing. No trailing newline.
    pub fn render(&self) -> String {
        self.selected()
            .iter()
            .map(|line| self.render_line(line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_line(&self, line: &SourceLine) -> String {
        let budget = match self.options.max_columns {
            MaxColumns::Unbounded => line.text.chars().count(),
            MaxColumns::Fixed(columns) => columns,
            MaxColumns::Terminal => terminal_width(),
        };

        match self.options.mark {
            Some(mark) if mark.line == line.number => {
                let (content, caret_pos) = window::mark_window(&line.text, mark.column, budget);
                let indent_len = self.options.indent.chars().count();
                let caret = window::caret_line(caret_pos, mark.column, indent_len);
                self.compose(line.number, &content, Some(&caret))
            }
            _ => {
                let content = window::slice_window(&line.text, 0, budget);
                self.compose(line.number, &content, None)
            }
        }
    }

    fn compose(&self, number: usize, content: &str, caret: Option<&str>) -> String {
        let pad = window::gutter_pad(number, &self.options.indent);
        let no = highlight::number(number, &self.options);
        let body = highlight::content(number, content, &self.options);
        match caret {
            Some(caret) => format!("{pad}{no}| {body}\n{caret}"),
            None => format!("{pad}{no}| {body}"),
        }
    }

    // ------------------------------------------------------------------
    // Output boundary
    // ------------------------------------------------------------------

    /// Render plus a trailing newline into any writer. This is the only
    /// I/O boundary in the crate.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(self.render().as_bytes())?;
        writer.write_all(b"\n")
    }

    /// Convenience: [`write_to`](Self::write_to) standard output.
    pub fn print(&self) -> io::Result<()> {
        self.write_to(&mut io::stdout().lock())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const FIVE: &str = "one\ntwo\nthree\nfour\nfive";

    fn tagged() -> Palette {
        Palette::new(|color, text| format!("<{color}>{text}</{color}>"))
    }

    fn plain(text: &str) -> CodeFrame {
        frame(text).unbounded().palette(Palette::plain())
    }

    #[test]
    fn numbers_and_gutter() {
        assert_eq!(
            plain(FIVE).render(),
            "    1| one\n    2| two\n    3| three\n    4| four\n    5| five"
        );
    }

    #[test]
    fn empty_input_is_a_single_empty_line() {
        assert_eq!(plain("").render(), "    1| ");
    }

    #[test]
    fn slice_selects_lines_and_strips_the_sentinel() {
        let listing = plain(FIVE).slice(1, 4).render();
        assert_eq!(listing, "    1| one\n    2| two\n    3| three");
        assert!(!listing.contains("four"));

        // Slicing from 0 includes the sentinel slot, which is stripped.
        assert_eq!(plain(FIVE).slice(0, 4).render(), "    1| one\n    2| two\n    3| three");
    }

    #[test]
    fn full_selection_equals_no_selection() {
        let unselected = plain(FIVE).render();
        assert_eq!(plain(FIVE).slice(0, 6).render(), unselected);
        assert_eq!(plain(FIVE).slice(1, 6).render(), unselected);
        assert_eq!(plain(FIVE).slice_from(0).render(), unselected);
    }

    #[test]
    fn negative_slice_indices_count_from_the_end() {
        assert_eq!(plain(FIVE).slice_from(-2).render(), "    4| four\n    5| five");
        assert_eq!(plain(FIVE).slice(1, -3).render(), "    1| one\n    2| two");
    }

    #[test]
    fn out_of_range_slice_clamps() {
        assert_eq!(plain(FIVE).slice(4, 100).render(), "    4| four\n    5| five");
        assert_eq!(plain(FIVE).slice(100, 200).render(), "");
    }

    #[test]
    fn highlight_scenario() {
        let listing = frame(FIVE)
            .highlight(2)
            .slice(1, 4)
            .unbounded()
            .palette(tagged())
            .render();
        assert_eq!(
            listing,
            "    1| one\n    <red>2</red>| two\n    3| three"
        );
    }

    #[test]
    fn highlights_accumulate() {
        let listing = plain(FIVE)
            .highlight(1)
            .highlight_lines([2, 3])
            .palette(tagged())
            .render();
        assert!(listing.contains("<red>1</red>|"));
        assert!(listing.contains("<red>2</red>|"));
        assert!(listing.contains("<red>3</red>|"));
        assert!(listing.contains("    4| four"));
    }

    #[test]
    fn custom_color_flows_through() {
        let listing = frame(FIVE)
            .highlight(2)
            .color("yellow")
            .unbounded()
            .palette(tagged())
            .render();
        assert!(listing.contains("<yellow>2</yellow>|"));
    }

    #[test]
    fn column_range_highlight_on_rendered_output() {
        let listing = frame("abcdef")
            .unbounded()
            .highlight_range((1, 1), (1, 4))
            .palette(tagged())
            .render();
        assert_eq!(listing, "    1| a<red>bcd</red>ef");
    }

    #[test]
    fn line_range_highlight_paints_whole_lines() {
        let listing = frame(FIVE)
            .unbounded()
            .highlight_line_range(3, 4)
            .palette(tagged())
            .render();
        assert!(listing.contains("    3| <red>three</red>"));
        assert!(listing.contains("    4| <red>four</red>"));
        assert!(listing.contains("    5| five"));
    }

    #[test]
    fn column_range_takes_precedence_over_line_range() {
        let listing = frame("abcdef\nghijkl")
            .unbounded()
            .highlight_line_range(1, 2)
            .highlight_range((1, 1), (1, 3))
            .palette(tagged())
            .render();
        assert!(listing.contains("    1| a<red>bc</red>def"));
        assert!(listing.contains("    2| <red>ghijkl</red>"));
    }

    #[test]
    fn caret_mark_under_a_column() {
        let listing = plain("hello world").arrow_mark(1, 6).render();
        assert_eq!(
            listing,
            format!("    1| hello world\n{}^ column: 6", "-".repeat(12))
        );
    }

    #[test]
    fn caret_respects_empty_indent() {
        let listing = plain("hello world").indent("").arrow_mark(1, 6).render();
        assert_eq!(listing, format!("1| hello world\n{}^ column: 6", "-".repeat(5)));
    }

    #[test]
    fn caret_accounts_for_a_shifted_window() {
        let long: String = ('a'..='z').collect();
        let listing = frame(&long)
            .max_columns(10)
            .palette(Palette::plain())
            .arrow_mark(1, 12)
            .render();
        // Window starts at 7 with a leading ellipsis; caret lands at
        // 7 (gutter) + 12 - 7 + 4 - 1 dashes.
        assert_eq!(
            listing,
            format!("    1| ... hi ...\n{}^ column: 12", "-".repeat(15))
        );
    }

    #[test]
    fn invalid_marks_are_dropped() {
        assert!(!plain("hello").arrow_mark(1, -1).render().contains("column:"));
        assert!(!plain("hello").arrow_mark(1, 5).render().contains("column:"));
        assert!(!plain("hello").arrow_mark(7, 0).render().contains("column:"));
    }

    #[test]
    fn invalid_mark_clears_a_previous_mark() {
        let listing = plain("hello").arrow_mark(1, 2).arrow_mark(1, 99).render();
        assert_eq!(listing, "    1| hello");
    }

    #[test]
    fn mark_on_last_valid_column_is_kept() {
        let listing = plain("hello").arrow_mark(1, 4).render();
        assert!(listing.contains("^ column: 4"));
    }

    #[test]
    fn unbounded_never_truncates() {
        let long: String = "x".repeat(500);
        let listing = plain(&long).render();
        assert!(!listing.contains("..."));
        assert!(listing.contains(&long));
    }

    #[test]
    fn fixed_budget_truncates_with_ellipsis() {
        let long: String = ('a'..='z').collect();
        let listing = frame(&long).max_columns(10).palette(Palette::plain()).render();
        assert_eq!(listing, "    1| abcdef ...");
    }

    #[test]
    fn truncated_window_stays_within_budget() {
        let long: String = ('a'..='z').collect();
        for budget in [9, 10, 15, 26] {
            let listing = frame(&long)
                .max_columns(budget)
                .palette(Palette::plain())
                .render();
            let content = listing.strip_prefix("    1| ").unwrap();
            assert!(content.chars().count() <= budget, "budget {budget}: {content:?}");
        }
    }

    #[test]
    fn rendering_is_repeatable() {
        let configured = plain(FIVE).slice(1, 4).highlight(2).arrow_mark(2, 1);
        assert_eq!(configured.render(), configured.render());
    }

    #[test]
    fn explicit_options_assembly() {
        let options = RenderOptions {
            max_columns: MaxColumns::Unbounded,
            palette: Palette::plain(),
            ..RenderOptions::default()
        };
        let listing = CodeFrame::with_options("one\ntwo", options).render();
        assert_eq!(listing, "    1| one\n    2| two");
    }

    #[test]
    fn write_to_appends_a_trailing_newline() {
        let configured = plain(FIVE).slice(1, 2);
        let mut out = Vec::new();
        configured.write_to(&mut out).unwrap();
        assert_eq!(out, b"    1| one\n");
    }
}
