//! The paint capability and the builtin color palette.
//!
//! The renderer never talks to a terminal-styling library directly. It holds
//! a [`Palette`], a function from a color name and a piece of text to a
//! styled string. The builtin palette maps the common ANSI color names; any
//! name it does not recognize paints as a no-op, never an error.

use std::fmt;

// ============================================================================
// Palette
// ============================================================================

/// Paint capability: maps a color name and text to a styled string.
///
/// The default palette styles text with the common ANSI foreground colors
/// (built on `owo-colors` when the `color` feature is enabled, identity
/// otherwise). Custom palettes can be injected for testing or for
/// integration with a different styling stack.
///
/// # Example
///
/// ```
/// use code_frame::Palette;
///
/// let tagged = Palette::new(|color, text| format!("<{color}>{text}</{color}>"));
/// ```
pub struct Palette(Box<dyn Fn(&str, &str) -> String + Send + Sync>);

impl Palette {
    /// Create a palette from a `(color name, text) -> styled text` function.
    pub fn new(paint: impl Fn(&str, &str) -> String + Send + Sync + 'static) -> Self {
        Self(Box::new(paint))
    }

    /// A palette that returns text unchanged for every color name.
    pub fn plain() -> Self {
        Self::new(|_, text| text.to_owned())
    }

    /// Apply the palette to `text`.
    pub(crate) fn paint(&self, color: &str, text: &str) -> String {
        (self.0)(color, text)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(builtin)
    }
}

impl fmt::Debug for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Palette(..)")
    }
}

// ============================================================================
// Builtin palette
// ============================================================================

/// Style `text` with the named ANSI foreground color.
#[cfg(feature = "color")]
fn builtin(color: &str, text: &str) -> String {
    use owo_colors::OwoColorize;
    match color {
        "black" => text.black().to_string(),
        "red" => text.red().to_string(),
        "green" => text.green().to_string(),
        "yellow" => text.yellow().to_string(),
        "blue" => text.blue().to_string(),
        "magenta" => text.magenta().to_string(),
        "cyan" => text.cyan().to_string(),
        "white" => text.white().to_string(),
        _ => text.to_owned(),
    }
}

#[cfg(not(feature = "color"))]
fn builtin(_color: &str, text: &str) -> String {
    text.to_owned()
}

// ============================================================================
// Terminal width
// ============================================================================

/// Reported terminal width minus one column, the default line budget.
///
/// Falls back to 79 when the terminal size cannot be queried.
pub(crate) fn terminal_width() -> usize {
    crossterm::terminal::size()
        .map(|(cols, _)| (cols as usize).saturating_sub(1))
        .unwrap_or(79)
}

// ============================================================================
// Tests
// ============================================================================
