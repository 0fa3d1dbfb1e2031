//! Screen size and the surface extent presets.
//!
//! The simulator window has a fixed size, so a host resize is simulated by
//! drawing the grid into a centered sub-area whose size cycles through
//! [`EXTENT_PRESETS`].

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Window width in pixels (before scaling).
pub const SCREEN_WIDTH: u32 = 320;

/// Window height in pixels (before scaling).
pub const SCREEN_HEIGHT: u32 = 240;

/// Output scale of the simulator window.
pub const WINDOW_SCALE: u32 = 2;

/// Surface extents the grid is cycled through. The last one is degenerate
/// and must paint nothing.
pub const EXTENT_PRESETS: [Size; 5] = [
    Size::new(240, 240),
    Size::new(320, 240),
    Size::new(200, 140),
    Size::new(140, 220),
    Size::new(0, 0),
];

const _: () = assert!(EXTENT_PRESETS[0].width <= SCREEN_WIDTH && EXTENT_PRESETS[0].height <= SCREEN_HEIGHT);
const _: () = assert!(EXTENT_PRESETS[1].width <= SCREEN_WIDTH && EXTENT_PRESETS[1].height <= SCREEN_HEIGHT);
const _: () = assert!(EXTENT_PRESETS[2].width <= SCREEN_WIDTH && EXTENT_PRESETS[2].height <= SCREEN_HEIGHT);
const _: () = assert!(EXTENT_PRESETS[3].width <= SCREEN_WIDTH && EXTENT_PRESETS[3].height <= SCREEN_HEIGHT);

/// Area of the screen the grid is drawn into for `size`, centered.
pub const fn grid_area(size: Size) -> Rectangle {
    let x = (SCREEN_WIDTH.saturating_sub(size.width) / 2) as i32;
    let y = (SCREEN_HEIGHT.saturating_sub(size.height) / 2) as i32;
    Rectangle::new(Point::new(x, y), size)
}
