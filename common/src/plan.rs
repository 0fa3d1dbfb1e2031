//! Drawing primitives produced by one render pass.
//!
//! Coordinates are kept in `f32` so the layout stays exact; rounding to
//! pixels happens only when a plan is painted (see [`crate::widgets`]).
//!
//! Primitive order is the paint order:
//!
//! | Order | Primitive | Count |
//! |-------|-----------|-------|
//! | 1 | Rings, outer to inner | `circle_count + 1` |
//! | 2 | Horizontal axis, vertical axis | 2 |
//! | 3 | Labels N, E, S, W | 4 |

use embedded_graphics::pixelcolor::Rgb565;
use heapless::Vec;

use crate::config::PLAN_CAPACITY;

/// Point in surface coordinates (origin top-left, y down).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlanPoint {
    pub x: f32,
    pub y: f32,
}

impl PlanPoint {
    #[inline]
    pub const fn new(
        x: f32,
        y: f32,
    ) -> Self {
        Self { x, y }
    }
}

/// One concentric ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ring {
    pub center: PlanPoint,
    pub radius: f32,
}

/// One axis line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisLine {
    pub from: PlanPoint,
    pub to: PlanPoint,
}

/// Compass point of a label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cardinal {
    North,
    East,
    South,
    West,
}

impl Cardinal {
    /// Labels in paint order.
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Single-letter label text.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::East => "E",
            Self::South => "S",
            Self::West => "W",
        }
    }
}

/// One cardinal label. `position` is the left end of the text baseline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Label {
    pub cardinal: Cardinal,
    pub position: PlanPoint,
    pub size: f32,
    pub color: Rgb565,
}

impl Label {
    #[inline]
    pub const fn text(&self) -> &'static str { self.cardinal.as_str() }
}

/// Single primitive in paint order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Primitive {
    Circle(Ring),
    Line(AxisLine),
    Label(Label),
}

/// Stroke shared by rings and axis lines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridStroke {
    pub color: Rgb565,
    pub width: f32,
}

/// Fill-and-stroke style for labels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelStyle {
    pub color: Rgb565,
    pub size: f32,
    pub stroke_width: f32,
}

/// Derived measurements the primitives were laid out from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridGeometry {
    /// Surface midpoint, shared by every ring.
    pub center: PlanPoint,
    /// Half of the smaller extent side. Label offsets are measured from it.
    pub radius: f32,
    /// Outer ring radius and axis half-length (`radius * INSET_FACTOR`).
    pub line_size: f32,
}

/// Ordered primitives of one render pass plus their styles.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderPlan {
    primitives: Vec<Primitive, PLAN_CAPACITY>,
    geometry: Option<GridGeometry>,
    grid_stroke: GridStroke,
    label_style: LabelStyle,
}

impl RenderPlan {
    /// Plan with no primitives, used for degenerate surfaces.
    pub const fn empty(
        grid_stroke: GridStroke,
        label_style: LabelStyle,
    ) -> Self {
        Self {
            primitives: Vec::new(),
            geometry: None,
            grid_stroke,
            label_style,
        }
    }

    pub(crate) const fn set_geometry(
        &mut self,
        geometry: GridGeometry,
    ) {
        self.geometry = Some(geometry);
    }

    /// Append a primitive. Callers size their input by the config limits,
    /// so a full plan means a broken caller: debug builds assert, release
    /// builds drop the primitive.
    pub(crate) fn push(
        &mut self,
        primitive: Primitive,
    ) {
        let pushed = self.primitives.push(primitive).is_ok();
        debug_assert!(pushed, "render plan capacity exceeded");
    }

    /// All primitives in paint order.
    #[inline]
    pub fn primitives(&self) -> &[Primitive] { &self.primitives }

    #[inline]
    pub fn len(&self) -> usize { self.primitives.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.primitives.is_empty() }

    /// Measurements behind the layout, `None` for an empty plan.
    #[inline]
    pub const fn geometry(&self) -> Option<GridGeometry> { self.geometry }

    #[inline]
    pub const fn grid_stroke(&self) -> GridStroke { self.grid_stroke }

    #[inline]
    pub const fn label_style(&self) -> LabelStyle { self.label_style }

    /// Rings, outer to inner.
    pub fn circles(&self) -> impl Iterator<Item = &Ring> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Circle(ring) => Some(ring),
            _ => None,
        })
    }

    /// Axis lines, horizontal first.
    pub fn lines(&self) -> impl Iterator<Item = &AxisLine> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Line(line) => Some(line),
            _ => None,
        })
    }

    /// Labels in N, E, S, W order.
    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Label(label) => Some(label),
            _ => None,
        })
    }

    /// Label for one compass point.
    pub fn label(
        &self,
        cardinal: Cardinal,
    ) -> Option<&Label> {
        self.labels().find(|l| l.cardinal == cardinal)
    }
}
