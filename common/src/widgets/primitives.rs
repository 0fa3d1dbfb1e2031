//! Low-level drawing helpers shared by the compass widget.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Text, TextStyle};

use crate::plan::PlanPoint;

/// Pixel coordinates are clamped to `-PIXEL_LIMIT..=PIXEL_LIMIT`, leaving
/// headroom for glyph advances and stroke offsets on top.
pub const PIXEL_LIMIT: i32 = 1 << 24;

/// Round a layout coordinate to the nearest pixel.
#[inline]
pub fn to_pixel(value: f32) -> i32 {
    let clamped = value.clamp(-(PIXEL_LIMIT as f32), PIXEL_LIMIT as f32);
    micromath::F32(clamped).round().0 as i32
}

/// Round a layout point to the nearest pixel.
#[inline]
pub fn to_point(point: PlanPoint) -> Point { Point::new(to_pixel(point.x), to_pixel(point.y)) }

/// Stroke width in whole pixels, never thinner than 1.
#[inline]
pub fn stroke_px(width: f32) -> u32 { to_pixel(width).max(1) as u32 }

/// Diameter in whole pixels for a layout radius. Zero for a degenerate ring.
#[inline]
pub fn diameter_px(radius: f32) -> u32 { to_pixel(radius * 2.0).max(0) as u32 }

/// Draw text in `color`, thickened by repeating it around `position`.
///
/// Mono fonts have no stroke, so the stroke is emulated by painting the
/// glyphs at `offset` pixels in each direction before painting the fill.
/// An offset of 0 paints the fill only.
pub fn draw_stroked_text<D>(
    display: &mut D,
    text: &str,
    position: Point,
    font: &MonoFont<'_>,
    color: Rgb565,
    text_style: TextStyle,
    offset: i32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let char_style = MonoTextStyle::new(font, color);

    // Simple mode: 2 offsets (bottom-right) for embedded performance
    #[cfg(feature = "simple-outline")]
    const DIRECTIONS: [(i32, i32); 2] = [(1, 1), (1, 0)];

    // Full mode: 8 directions
    #[cfg(not(feature = "simple-outline"))]
    const DIRECTIONS: [(i32, i32); 8] = [
        (-1, -1),
        (0, -1),
        (1, -1), // top row
        (-1, 0),
        (1, 0), // middle row (skip center)
        (-1, 1),
        (0, 1),
        (1, 1), // bottom row
    ];

    if offset > 0 {
        for (dx, dy) in DIRECTIONS {
            let offset_pos = Point::new(
                position.x.saturating_add(dx.saturating_mul(offset)),
                position.y.saturating_add(dy.saturating_mul(offset)),
            );
            Text::with_text_style(text, offset_pos, char_style, text_style)
                .draw(display)
                .ok();
        }
    }

    Text::with_text_style(text, position, char_style, text_style)
        .draw(display)
        .ok();
}

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::mono_font::ascii::FONT_6X10;

    use super::*;
    use crate::colors::RED;
    use crate::styles::LEFT_ALIGNED;

    #[test]
    fn test_to_pixel_rounds() {
        assert_eq!(to_pixel(96.67), 97);
        assert_eq!(to_pixel(20.0), 20);
        assert_eq!(to_pixel(10.4), 10);
        assert_eq!(to_pixel(0.0), 0);
    }

    #[test]
    fn test_to_pixel_clamps() {
        assert_eq!(to_pixel(1.0e10), PIXEL_LIMIT);
        assert_eq!(to_pixel(-1.0e10), -PIXEL_LIMIT);
        assert_eq!(to_pixel(f32::INFINITY), PIXEL_LIMIT);
    }

    #[test]
    fn test_to_point() {
        assert_eq!(to_point(PlanPoint::new(9.6, 100.2)), Point::new(10, 100));
    }

    #[test]
    fn test_stroke_px_minimum() {
        assert_eq!(stroke_px(0.2), 1, "Hairlines still paint one pixel");
        assert_eq!(stroke_px(1.0), 1);
        assert_eq!(stroke_px(3.0), 3);
    }

    #[test]
    fn test_diameter_px() {
        assert_eq!(diameter_px(0.0), 0, "Zero-radius ring has no pixels");
        assert_eq!(diameter_px(45.0), 90);
        assert_eq!(diameter_px(22.5), 45);
    }

    #[test]
    fn test_stroked_text_far_offset() {
        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);

        // Position and offset both at the pixel limit must not overflow
        let position = Point::new(to_pixel(1.0e10), to_pixel(-1.0e10));
        draw_stroked_text(&mut display, "N", position, &FONT_6X10, RED, LEFT_ALIGNED, to_pixel(1.0e10));
        assert_eq!(display.affected_area().size, Size::zero(), "Everything lands off screen");
    }
}
