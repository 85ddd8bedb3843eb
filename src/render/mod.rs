//! Rendering internals: window math, highlight resolution, painting.

pub(crate) mod highlight;
pub(crate) mod paint;
pub(crate) mod window;
