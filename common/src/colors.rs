//! Color constants for the compass grid.
//!
//! Standard colors come from the `RgbColor` trait constants of
//! `embedded_graphics`, which guarantees the exact full-intensity values.
//! Rgb565 is the native format of most small SPI displays, so nothing is
//! converted on the way to the frame buffer.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black (0, 0, 0). Default grid and label color.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Background of the simulator surface.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red (31, 0, 0). Classic north marker color.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure blue (0, 0, 31).
pub const BLUE: Rgb565 = Rgb565::BLUE;

/// Pure green (0, 63, 0).
pub const GREEN: Rgb565 = Rgb565::GREEN;

// =============================================================================
// Custom Colors
// =============================================================================

/// Dark gray for subtle grids. RGB565: (8, 16, 8), roughly 25% brightness.
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);

/// Orange. RGB565: (31, 32, 0).
pub const ORANGE: Rgb565 = Rgb565::new(31, 32, 0);

/// Dark teal. RGB565: (0, 20, 10).
pub const DARK_TEAL: Rgb565 = Rgb565::new(0, 20, 10);

// =============================================================================
// Palette
// =============================================================================

/// Colors a host can cycle through for grid and label styling.
/// All entries are readable on a white background.
pub const PALETTE: [Rgb565; 6] = [BLACK, GRAY, RED, BLUE, DARK_TEAL, ORANGE];

/// Return the palette entry following `color`.
///
/// Colors outside the palette restart the cycle at the first entry.
pub fn next_palette_color(color: Rgb565) -> Rgb565 {
    match PALETTE.iter().position(|&c| c == color) {
        Some(idx) => PALETTE[(idx + 1) % PALETTE.len()],
        None => PALETTE[0],
    }
}
