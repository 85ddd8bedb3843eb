//! Highlight resolution: which parts of a rendered line get painted.
//!
//! Resolution order is strict: the line number is painted independently of
//! the content; for content, column ranges are consulted before whole-line
//! ranges, and within each list the first matching entry wins.

use crate::options::RenderOptions;

/// Render the gutter number, painted when it is in the highlight set.
pub(crate) fn number(no: usize, options: &RenderOptions) -> String {
    if options.highlighted_numbers.contains(&no) {
        options.palette.paint(&options.color, &no.to_string())
    } else {
        no.to_string()
    }
}

/// Apply content emphasis for `line` to its windowed text.
///
/// Column indices apply to `text` as rendered; indices past the end clamp
/// silently. Lines strictly between a multi-line column range's endpoints
/// are left unpainted.
pub(crate) fn content(line: usize, text: &str, options: &RenderOptions) -> String {
    let paint = |piece: &str| options.palette.paint(&options.color, piece);

    let touched = options
        .column_ranges
        .iter()
        .find(|(start, end)| start.line == line || end.line == line);

    if let Some((start, end)) = touched {
        let single = start.line == end.line;

        if start.line == line {
            let (before, rest) = split_at_col(text, start.column);
            if single {
                let span = end.column.saturating_sub(start.column);
                let (mid, after) = split_at_col(&rest, span);
                return format!("{before}{}{after}", paint(&mid));
            }
            // Range continues onto later lines: paint to end of text.
            return format!("{before}{}", paint(&rest));
        }

        // Range started earlier and ends here: paint from the start of text.
        let (mid, after) = split_at_col(text, end.column);
        return format!("{}{after}", paint(&mid));
    }

    if options
        .line_ranges
        .iter()
        .any(|&(start, end)| start <= line && line <= end)
    {
        return paint(text);
    }

    text.to_owned()
}

/// Split `text` at a char column, clamping past the end.
fn split_at_col(text: &str, col: usize) -> (String, String) {
    let chars: Vec<char> = text.chars().collect();
    let idx = col.min(chars.len());
    (chars[..idx].iter().collect(), chars[idx..].iter().collect())
}

// ============================================================================
// Tests
// ============================================================================
