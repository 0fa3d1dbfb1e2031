//! Compass grid widget: paints a [`RenderPlan`] onto a draw target.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, Primitive as _, PrimitiveStyle};

use super::primitives::{diameter_px, draw_stroked_text, stroke_px, to_pixel, to_point};
use crate::config::{GridConfig, SurfaceExtent};
use crate::error::ConfigError;
use crate::plan::{Label, LabelStyle, Primitive, RenderPlan};
use crate::redraw::RedrawState;
use crate::renderer::render;
use crate::styles::{LEFT_ALIGNED, label_font};

/// Paint every primitive of `plan` in order.
///
/// Rings and axes share one stroke style. Labels are painted last so the
/// grid never covers them.
pub fn draw_render_plan<D>(
    display: &mut D,
    plan: &RenderPlan,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let grid = plan.grid_stroke();
    let stroke = PrimitiveStyle::with_stroke(grid.color, stroke_px(grid.width));

    for primitive in plan.primitives() {
        match primitive {
            Primitive::Circle(ring) => {
                let diameter = diameter_px(ring.radius);
                if diameter == 0 {
                    continue;
                }
                Circle::with_center(to_point(ring.center), diameter)
                    .into_styled(stroke)
                    .draw(display)
                    .ok();
            }
            Primitive::Line(line) => {
                Line::new(to_point(line.from), to_point(line.to))
                    .into_styled(stroke)
                    .draw(display)
                    .ok();
            }
            Primitive::Label(label) => draw_label(display, label, &plan.label_style()),
        }
    }
}

fn draw_label<D>(
    display: &mut D,
    label: &Label,
    style: &LabelStyle,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_stroked_text(
        display,
        label.text(),
        to_point(label.position),
        label_font(label.size),
        label.color,
        LEFT_ALIGNED,
        to_pixel(style.stroke_width / 2.0),
    );
}

/// Host-side handle combining a configuration with redraw tracking.
///
/// The host mutates the configuration through [`CompassGrid::update_config`],
/// which requests a redraw on success, then calls
/// [`CompassGrid::draw_if_dirty`] once per frame.
pub struct CompassGrid {
    config: GridConfig,
    redraw: RedrawState,
}

impl CompassGrid {
    pub const fn new(config: GridConfig) -> Self {
        Self {
            config,
            redraw: RedrawState::new(),
        }
    }

    #[inline]
    pub const fn config(&self) -> &GridConfig { &self.config }

    /// Apply a configuration change and request a redraw.
    ///
    /// The change runs on a copy: if it fails the current configuration is
    /// kept and no redraw is requested.
    pub fn update_config<F>(
        &mut self,
        change: F,
    ) -> Result<(), ConfigError>
    where
        F: FnOnce(&mut GridConfig) -> Result<(), ConfigError>,
    {
        let mut next = self.config;
        change(&mut next)?;
        self.config = next;
        self.redraw.request_redraw();
        Ok(())
    }

    /// Force a repaint on the next frame, e.g. after the host cleared the display.
    #[inline]
    pub const fn request_redraw(&mut self) { self.redraw.request_redraw(); }

    /// Render and paint when the config or extent changed since the last paint.
    ///
    /// Returns whether anything was painted. The host is responsible for
    /// clearing the area beforehand when the grid shrinks or changes color.
    pub fn draw_if_dirty<D>(
        &mut self,
        display: &mut D,
        extent: SurfaceExtent,
    ) -> bool
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let dirty = self.redraw.check_dirty(extent);
        if dirty {
            let plan = render(extent, &self.config);
            draw_render_plan(display, &plan);
        }
        self.redraw.end_frame();
        dirty
    }
}

impl Default for CompassGrid {
    fn default() -> Self { Self::new(GridConfig::DEFAULT) }
}

// =============================================================================
// Unit Tests
// =============================================================================
