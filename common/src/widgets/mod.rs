//! Widget components for the compass grid.
//!
//! All widgets are generic over `DrawTarget<Color = Rgb565>` for platform independence.

mod compass;
mod primitives;

pub use compass::{CompassGrid, draw_render_plan};
pub use primitives::{diameter_px, draw_stroked_text, stroke_px, to_pixel, to_point};
