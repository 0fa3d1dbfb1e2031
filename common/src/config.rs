//! Grid configuration: defaults, limits and the validated [`GridConfig`].
//!
//! Defaults are compile-time constants with `const` assertions, so a bad
//! default fails the build instead of the first render. Hosts start from
//! [`GridConfig::DEFAULT`] and mutate it through the `set_*` methods, which
//! reject values the renderer cannot lay out.
//!
//! # Usage
//!
//! ```ignore
//! let mut config = GridConfig::default();
//! config.set_circle_count(4)?;
//! config.set_grid_color(GRAY);
//! ```

use embedded_graphics::geometry::Size;
use embedded_graphics::pixelcolor::Rgb565;

use crate::colors::BLACK;
use crate::error::ConfigError;

// =============================================================================
// Defaults
// =============================================================================

/// Number of rings between the center and the outer ring.
pub const DEFAULT_CIRCLE_COUNT: u32 = 3;

/// Stroke width of rings and axis lines.
pub const DEFAULT_GRID_LINE_WIDTH: f32 = 1.0;

/// Ring and axis color.
pub const DEFAULT_GRID_COLOR: Rgb565 = BLACK;

/// Label glyph size.
pub const DEFAULT_LABEL_TEXT_SIZE: f32 = 40.0;

/// Label color (fill and stroke).
pub const DEFAULT_LABEL_COLOR: Rgb565 = BLACK;

/// Label stroke width. Mirrors the grid line width.
pub const DEFAULT_LABEL_STROKE_WIDTH: f32 = DEFAULT_GRID_LINE_WIDTH;

// =============================================================================
// Limits
// =============================================================================

/// Largest accepted circle count. Bounds the fixed-capacity plan storage.
pub const MAX_CIRCLE_COUNT: u32 = 24;

/// Largest accepted grid line width.
pub const MAX_LINE_WIDTH: f32 = 32.0;

/// Largest accepted label text size. Keeps label positions and glyph
/// offsets well inside the pixel coordinate range.
pub const MAX_LABEL_TEXT_SIZE: f32 = 256.0;

/// Largest accepted label stroke width.
pub const MAX_STROKE_WIDTH: f32 = 32.0;

/// Rings emitted for [`MAX_CIRCLE_COUNT`], including the zero-radius center ring.
pub const MAX_RING_COUNT: usize = MAX_CIRCLE_COUNT as usize + 1;

/// Horizontal and vertical axis.
pub const AXIS_COUNT: usize = 2;

/// N, E, S, W.
pub const LABEL_COUNT: usize = 4;

/// Capacity of a [`RenderPlan`](crate::plan::RenderPlan).
pub const PLAN_CAPACITY: usize = MAX_RING_COUNT + AXIS_COUNT + LABEL_COUNT;

/// Fraction of the half-extent used by the outer ring and the axis lines.
/// The remaining margin keeps labels off the surface edge.
pub const INSET_FACTOR: f32 = 0.9;

const _: () = assert!(DEFAULT_CIRCLE_COUNT >= 1);
const _: () = assert!(DEFAULT_CIRCLE_COUNT <= MAX_CIRCLE_COUNT);
const _: () = assert!(DEFAULT_GRID_LINE_WIDTH > 0.0);
const _: () = assert!(DEFAULT_LABEL_TEXT_SIZE > 0.0);
const _: () = assert!(DEFAULT_LABEL_STROKE_WIDTH > 0.0);
const _: () = assert!(DEFAULT_GRID_LINE_WIDTH <= MAX_LINE_WIDTH);
const _: () = assert!(DEFAULT_LABEL_TEXT_SIZE <= MAX_LABEL_TEXT_SIZE);
const _: () = assert!(DEFAULT_LABEL_STROKE_WIDTH <= MAX_STROKE_WIDTH);
const _: () = assert!(INSET_FACTOR > 0.0 && INSET_FACTOR < 1.0);

// =============================================================================
// Grid Configuration
// =============================================================================

/// Validated widget configuration.
///
/// Fields are private so a `GridConfig` can never hold a value that would
/// break the layout (a zero circle count in particular).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    circle_count: u32,
    grid_line_width: f32,
    grid_color: Rgb565,
    label_text_size: f32,
    label_color: Rgb565,
    label_stroke_width: f32,
}

impl GridConfig {
    /// Configuration built from the `DEFAULT_*` constants.
    pub const DEFAULT: Self = Self {
        circle_count: DEFAULT_CIRCLE_COUNT,
        grid_line_width: DEFAULT_GRID_LINE_WIDTH,
        grid_color: DEFAULT_GRID_COLOR,
        label_text_size: DEFAULT_LABEL_TEXT_SIZE,
        label_color: DEFAULT_LABEL_COLOR,
        label_stroke_width: DEFAULT_LABEL_STROKE_WIDTH,
    };

    /// Default configuration with a custom circle count.
    pub fn with_circle_count(circle_count: u32) -> Result<Self, ConfigError> {
        let mut config = Self::DEFAULT;
        config.set_circle_count(circle_count)?;
        Ok(config)
    }

    #[inline]
    pub const fn circle_count(&self) -> u32 { self.circle_count }

    #[inline]
    pub const fn grid_line_width(&self) -> f32 { self.grid_line_width }

    #[inline]
    pub const fn grid_color(&self) -> Rgb565 { self.grid_color }

    #[inline]
    pub const fn label_text_size(&self) -> f32 { self.label_text_size }

    #[inline]
    pub const fn label_color(&self) -> Rgb565 { self.label_color }

    #[inline]
    pub const fn label_stroke_width(&self) -> f32 { self.label_stroke_width }

    /// Set the ring count. Must be in `1..=MAX_CIRCLE_COUNT`.
    pub fn set_circle_count(
        &mut self,
        circle_count: u32,
    ) -> Result<(), ConfigError> {
        if circle_count == 0 {
            return Err(ConfigError::InvalidCircleCount);
        }
        if circle_count > MAX_CIRCLE_COUNT {
            return Err(ConfigError::TooManyCircles(circle_count));
        }
        self.circle_count = circle_count;
        Ok(())
    }

    /// Set the ring and axis stroke width. Must be in `(0, MAX_LINE_WIDTH]`.
    pub fn set_grid_line_width(
        &mut self,
        width: f32,
    ) -> Result<(), ConfigError> {
        if !is_positive(width) {
            return Err(ConfigError::InvalidLineWidth(width));
        }
        if width > MAX_LINE_WIDTH {
            return Err(ConfigError::LineWidthTooLarge(width));
        }
        self.grid_line_width = width;
        Ok(())
    }

    #[inline]
    pub const fn set_grid_color(
        &mut self,
        color: Rgb565,
    ) {
        self.grid_color = color;
    }

    /// Set the label glyph size. Also drives the label offsets.
    pub fn set_label_text_size(
        &mut self,
        size: f32,
    ) -> Result<(), ConfigError> {
        if !is_positive(size) {
            return Err(ConfigError::InvalidTextSize(size));
        }
        if size > MAX_LABEL_TEXT_SIZE {
            return Err(ConfigError::TextSizeTooLarge(size));
        }
        self.label_text_size = size;
        Ok(())
    }

    #[inline]
    pub const fn set_label_color(
        &mut self,
        color: Rgb565,
    ) {
        self.label_color = color;
    }

    /// Set the stroke width used around label glyphs.
    pub fn set_label_stroke_width(
        &mut self,
        width: f32,
    ) -> Result<(), ConfigError> {
        if !is_positive(width) {
            return Err(ConfigError::InvalidStrokeWidth(width));
        }
        if width > MAX_STROKE_WIDTH {
            return Err(ConfigError::StrokeWidthTooLarge(width));
        }
        self.label_stroke_width = width;
        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self { Self::DEFAULT }
}

/// Finite and strictly positive. NaN fails both checks.
#[inline]
fn is_positive(value: f32) -> bool { value.is_finite() && value > 0.0 }

// =============================================================================
// Surface Extent
// =============================================================================

/// Drawing area supplied by the host at render time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceExtent {
    pub width: f32,
    pub height: f32,
}

impl SurfaceExtent {
    pub const fn new(
        width: f32,
        height: f32,
    ) -> Self {
        Self { width, height }
    }

    /// Extent covering a draw target of `size` pixels.
    pub const fn from_size(size: Size) -> Self { Self::new(size.width as f32, size.height as f32) }

    /// True when nothing can be laid out: a zero, negative or non-finite side.
    pub fn is_degenerate(&self) -> bool { !is_positive(self.width) || !is_positive(self.height) }
}

impl From<Size> for SurfaceExtent {
    fn from(size: Size) -> Self { Self::from_size(size) }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{GRAY, RED};

    // -------------------------------------------------------------------------
    // Default Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_default_values() {
        let config = GridConfig::default();
        assert_eq!(config.circle_count(), 3, "Default circle count should be 3");
        assert_eq!(config.grid_line_width(), 1.0);
        assert_eq!(config.grid_color(), BLACK);
        assert_eq!(config.label_text_size(), 40.0);
        assert_eq!(config.label_color(), BLACK);
        assert_eq!(
            config.label_stroke_width(),
            config.grid_line_width(),
            "Label stroke should mirror the grid line width"
        );
    }

    #[test]
    fn test_default_matches_const() {
        assert_eq!(GridConfig::default(), GridConfig::DEFAULT);
    }

    #[test]
    fn test_plan_capacity() {
        // 25 rings + 2 axes + 4 labels
        assert_eq!(PLAN_CAPACITY, 31);
    }

    // -------------------------------------------------------------------------
    // Circle Count Validation
    // -------------------------------------------------------------------------

    #[test]
    fn test_zero_circle_count_rejected() {
        let mut config = GridConfig::default();
        assert_eq!(config.set_circle_count(0), Err(ConfigError::InvalidCircleCount));
        assert_eq!(config.circle_count(), 3, "Rejected value must not be stored");
    }

    #[test]
    fn test_circle_count_upper_bound() {
        let mut config = GridConfig::default();
        assert!(config.set_circle_count(MAX_CIRCLE_COUNT).is_ok());
        assert_eq!(
            config.set_circle_count(MAX_CIRCLE_COUNT + 1),
            Err(ConfigError::TooManyCircles(MAX_CIRCLE_COUNT + 1))
        );
        assert_eq!(config.circle_count(), MAX_CIRCLE_COUNT);
    }

    #[test]
    fn test_with_circle_count() {
        assert_eq!(GridConfig::with_circle_count(5).map(|c| c.circle_count()), Ok(5));
        assert_eq!(GridConfig::with_circle_count(0), Err(ConfigError::InvalidCircleCount));
    }

    // -------------------------------------------------------------------------
    // Size Validation
    // -------------------------------------------------------------------------

    #[test]
    fn test_line_width_validation() {
        let mut config = GridConfig::default();
        assert_eq!(config.set_grid_line_width(0.0), Err(ConfigError::InvalidLineWidth(0.0)));
        assert_eq!(config.set_grid_line_width(-2.0), Err(ConfigError::InvalidLineWidth(-2.0)));
        assert!(config.set_grid_line_width(f32::INFINITY).is_err());
        assert!(config.set_grid_line_width(f32::NAN).is_err());
        assert!(config.set_grid_line_width(2.5).is_ok());
        assert_eq!(config.grid_line_width(), 2.5);
    }

    #[test]
    fn test_text_size_validation() {
        let mut config = GridConfig::default();
        assert_eq!(config.set_label_text_size(0.0), Err(ConfigError::InvalidTextSize(0.0)));
        assert!(config.set_label_text_size(f32::NAN).is_err());
        assert!(config.set_label_text_size(12.0).is_ok());
        assert_eq!(config.label_text_size(), 12.0);
    }

    #[test]
    fn test_stroke_width_validation() {
        let mut config = GridConfig::default();
        assert_eq!(config.set_label_stroke_width(-1.0), Err(ConfigError::InvalidStrokeWidth(-1.0)));
        assert!(config.set_label_stroke_width(3.0).is_ok());
        assert_eq!(config.label_stroke_width(), 3.0);
    }

    #[test]
    fn test_size_upper_bounds() {
        let mut config = GridConfig::default();
        assert_eq!(config.set_grid_line_width(1.0e10), Err(ConfigError::LineWidthTooLarge(1.0e10)));
        assert_eq!(config.set_label_text_size(1.0e10), Err(ConfigError::TextSizeTooLarge(1.0e10)));
        assert_eq!(config.set_label_stroke_width(1.0e10), Err(ConfigError::StrokeWidthTooLarge(1.0e10)));
        assert_eq!(config, GridConfig::DEFAULT, "Oversized values must not be stored");

        assert!(config.set_grid_line_width(MAX_LINE_WIDTH).is_ok());
        assert!(config.set_label_text_size(MAX_LABEL_TEXT_SIZE).is_ok());
        assert!(config.set_label_stroke_width(MAX_STROKE_WIDTH).is_ok());
    }

    #[test]
    fn test_color_setters() {
        let mut config = GridConfig::default();
        config.set_grid_color(GRAY);
        config.set_label_color(RED);
        assert_eq!(config.grid_color(), GRAY);
        assert_eq!(config.label_color(), RED);
    }

    // -------------------------------------------------------------------------
    // Surface Extent
    // -------------------------------------------------------------------------

    #[test]
    fn test_extent_degenerate() {
        assert!(SurfaceExtent::new(0.0, 0.0).is_degenerate());
        assert!(SurfaceExtent::new(100.0, 0.0).is_degenerate());
        assert!(SurfaceExtent::new(-10.0, 50.0).is_degenerate());
        assert!(SurfaceExtent::new(f32::NAN, 50.0).is_degenerate());
        assert!(!SurfaceExtent::new(1.0, 1.0).is_degenerate());
    }

    #[test]
    fn test_extent_from_size() {
        let extent = SurfaceExtent::from(Size::new(320, 240));
        assert_eq!(extent, SurfaceExtent::new(320.0, 240.0));
    }
}
