//! Configuration errors.
//!
//! Everything that can go wrong is caught when a [`GridConfig`] is built or
//! mutated. Rendering itself is infallible: a degenerate surface produces an
//! empty plan.
//!
//! [`GridConfig`]: crate::config::GridConfig

use core::fmt;

use crate::config::{MAX_CIRCLE_COUNT, MAX_LABEL_TEXT_SIZE, MAX_LINE_WIDTH, MAX_STROKE_WIDTH};

/// Rejected configuration value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// Circle count of zero. At least one ring is required to space the grid.
    InvalidCircleCount,
    /// Circle count above [`MAX_CIRCLE_COUNT`].
    TooManyCircles(u32),
    /// Grid line width that is not finite or not positive.
    InvalidLineWidth(f32),
    /// Label text size that is not finite or not positive.
    InvalidTextSize(f32),
    /// Label stroke width that is not finite or not positive.
    InvalidStrokeWidth(f32),
    /// Grid line width above [`MAX_LINE_WIDTH`].
    LineWidthTooLarge(f32),
    /// Label text size above [`MAX_LABEL_TEXT_SIZE`].
    TextSizeTooLarge(f32),
    /// Label stroke width above [`MAX_STROKE_WIDTH`].
    StrokeWidthTooLarge(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::InvalidCircleCount => f.write_str("circle count must be at least 1"),
            Self::TooManyCircles(n) => write!(f, "circle count {n} exceeds {MAX_CIRCLE_COUNT}"),
            Self::InvalidLineWidth(w) => write!(f, "invalid grid line width {w}"),
            Self::InvalidTextSize(s) => write!(f, "invalid label text size {s}"),
            Self::InvalidStrokeWidth(w) => write!(f, "invalid label stroke width {w}"),
            Self::LineWidthTooLarge(w) => write!(f, "grid line width {w} exceeds {MAX_LINE_WIDTH}"),
            Self::TextSizeTooLarge(s) => write!(f, "label text size {s} exceeds {MAX_LABEL_TEXT_SIZE}"),
            Self::StrokeWidthTooLarge(w) => write!(f, "label stroke width {w} exceeds {MAX_STROKE_WIDTH}"),
        }
    }
}

impl core::error::Error for ConfigError {}
