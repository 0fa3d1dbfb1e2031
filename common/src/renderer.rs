//! Compass grid layout.
//!
//! [`render`] turns a surface extent and a [`GridConfig`] into a
//! [`RenderPlan`]. It is pure: nothing is cached between calls, so a resize
//! or a config change is handled by simply calling it again.
//!
//! # Layout
//!
//! ```text
//! radius    = min(width, height) / 2
//! line_size = radius * INSET_FACTOR        outer ring, axis half-length
//! ring(i)   = line_size * i / circle_count for i = circle_count ..= 0
//! ```
//!
//! Label offsets are measured from `radius`, not `line_size`, and differ per
//! letter to compensate for glyph width and baseline:
//!
//! | Label | x | y |
//! |-------|---|---|
//! | N | `cx - t/3` | `cy - radius + t` |
//! | E | `cx + radius - t` | `cy + t/3` |
//! | S | `cx - t/4` | `cy + radius - t/5` |
//! | W | `cx - radius + t/5` | `cy + t/3` |

use crate::config::{GridConfig, INSET_FACTOR, SurfaceExtent};
use crate::plan::{
    AxisLine,
    Cardinal,
    GridGeometry,
    GridStroke,
    Label,
    LabelStyle,
    PlanPoint,
    Primitive,
    RenderPlan,
    Ring,
};

/// Compute the drawing primitives for one paint of the grid.
///
/// A degenerate extent (zero, negative or non-finite side) yields an empty
/// plan that still carries the configured styles.
pub fn render(
    extent: SurfaceExtent,
    config: &GridConfig,
) -> RenderPlan {
    let grid_stroke = GridStroke {
        color: config.grid_color(),
        width: config.grid_line_width(),
    };
    let label_style = LabelStyle {
        color: config.label_color(),
        size: config.label_text_size(),
        stroke_width: config.label_stroke_width(),
    };
    let mut plan = RenderPlan::empty(grid_stroke, label_style);

    let Some(geometry) = grid_geometry(extent) else {
        return plan;
    };
    plan.set_geometry(geometry);

    push_rings(&mut plan, &geometry, config.circle_count());
    push_axes(&mut plan, &geometry);
    for cardinal in Cardinal::ALL {
        plan.push(Primitive::Label(Label {
            cardinal,
            position: label_position(cardinal, &geometry, label_style.size),
            size: label_style.size,
            color: label_style.color,
        }));
    }

    plan
}

/// Center, radius and inset line size for `extent`, `None` when degenerate.
pub fn grid_geometry(extent: SurfaceExtent) -> Option<GridGeometry> {
    if extent.is_degenerate() {
        return None;
    }
    let radius = extent.width.min(extent.height) / 2.0;
    Some(GridGeometry {
        center: PlanPoint::new(extent.width / 2.0, extent.height / 2.0),
        radius,
        line_size: radius * INSET_FACTOR,
    })
}

/// Baseline-left position of one label.
pub fn label_position(
    cardinal: Cardinal,
    geometry: &GridGeometry,
    text_size: f32,
) -> PlanPoint {
    let PlanPoint { x: cx, y: cy } = geometry.center;
    let r = geometry.radius;
    let t = text_size;
    match cardinal {
        Cardinal::North => PlanPoint::new(cx - t / 3.0, cy - r + t),
        Cardinal::East => PlanPoint::new(cx + r - t, cy + t / 3.0),
        Cardinal::South => PlanPoint::new(cx - t / 4.0, cy + r - t / 5.0),
        Cardinal::West => PlanPoint::new(cx - r + t / 5.0, cy + t / 3.0),
    }
}

/// Rings from outer to inner. Index 0 is a zero-radius ring marking the center.
fn push_rings(
    plan: &mut RenderPlan,
    geometry: &GridGeometry,
    circle_count: u32,
) {
    // GridConfig guarantees circle_count >= 1
    let count = circle_count as f32;
    for i in (0..=circle_count).rev() {
        plan.push(Primitive::Circle(Ring {
            center: geometry.center,
            radius: geometry.line_size * i as f32 / count,
        }));
    }
}

fn push_axes(
    plan: &mut RenderPlan,
    geometry: &GridGeometry,
) {
    let PlanPoint { x: cx, y: cy } = geometry.center;
    let half = geometry.line_size;
    plan.push(Primitive::Line(AxisLine {
        from: PlanPoint::new(cx - half, cy),
        to: PlanPoint::new(cx + half, cy),
    }));
    plan.push(Primitive::Line(AxisLine {
        from: PlanPoint::new(cx, cy - half),
        to: PlanPoint::new(cx, cy + half),
    }));
}

// =============================================================================
// Tests
// =============================================================================
