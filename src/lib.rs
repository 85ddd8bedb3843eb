//! # code-frame
//!
//! Render a block of source text as a numbered, optionally truncated,
//! optionally highlighted listing for terminal display — the "code frame" a
//! compiler or linter prints to point at a line, column, or range.
//!
//! The crate does not parse the source language. It operates purely on text
//! lines and integer line/column coordinates:
//!
//! - **Gutter**: right-aligned line numbers with a configurable fill unit
//! - **Selection**: contiguous line windows with array-slice semantics
//! - **Truncation**: per-line width budgets with ellipsis markers, keeping a
//!   marked column visible and centered
//! - **Caret marks**: a dashed pointer line under an exact column
//! - **Highlights**: line numbers, whole-line ranges, and sub-line column
//!   ranges, resolved with a deterministic priority
//!
//! ## Quick Start
//!
//! ```
//! use code_frame::frame;
//!
//! let listing = frame("one\ntwo\nthree\nfour\nfive")
//!     .highlight(2)
//!     .slice(1, 4)
//!     .max_columns(68)
//!     .render();
//!
//! assert_eq!(listing.lines().count(), 3);
//! ```
//!
//! ## Degrading instead of failing
//!
//! There is no error taxonomy. Out-of-range slice bounds clamp, invalid
//! caret marks are dropped, inverted range endpoints collapse to their
//! start, and unknown color names paint as a no-op. The only fallible
//! operation is writing to an output stream.
//!
//! ## Styling
//!
//! Emphasis goes through an injected [`Palette`], a plain
//! `(color name, text) -> styled text` function. The default palette is
//! built on `owo-colors` behind the `color` feature (enabled by default);
//! with the feature off it is the identity function.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod frame;
pub mod options;

mod render;

// =============================================================================
// Public surface
// =============================================================================

pub use frame::{CodeFrame, SourceLine, frame};
pub use options::{LineSelection, MaxColumns, Point, RenderOptions};
pub use render::paint::Palette;
