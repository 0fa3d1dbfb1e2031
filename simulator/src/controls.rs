//! Keyboard controls acting as the host's configuration surface.
//!
//! | Key | Control |
//! |-----|---------|
//! | Up / Down | Circle count +1 / -1 |
//! | Right / Left | Label text size +4 / -4 |
//! | W | Grid line width 1 → 2 → 3 → 1 |
//! | G | Next grid color |
//! | L | Next label color |
//! | R | Next surface extent preset |
//!
//! Every accepted change requests a redraw through [`CompassGrid`]; rejected
//! changes leave the configuration untouched and are logged.

use core::fmt::Write;

use compass_grid::colors::next_palette_color;
use compass_grid::profiling::{DebugLog, LOG_LINE_LENGTH, RenderStats};
use compass_grid::{CompassGrid, ConfigError, GridConfig, SurfaceExtent};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::sdl2::Keycode;
use heapless::String;

use crate::layout::{EXTENT_PRESETS, grid_area};

/// Step applied to the label text size per key press.
const TEXT_SIZE_STEP: f32 = 4.0;

/// Grid line widths cycle back to 1 after this.
const LINE_WIDTH_CYCLE_END: f32 = 3.0;

/// One configuration change requested by the user.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Control {
    MoreCircles,
    FewerCircles,
    LargerLabels,
    SmallerLabels,
    CycleLineWidth,
    CycleGridColor,
    CycleLabelColor,
    CycleExtent,
}

impl Control {
    /// Map a key press to a control.
    pub fn from_key(keycode: Keycode) -> Option<Self> {
        match keycode {
            Keycode::Up => Some(Self::MoreCircles),
            Keycode::Down => Some(Self::FewerCircles),
            Keycode::Right => Some(Self::LargerLabels),
            Keycode::Left => Some(Self::SmallerLabels),
            Keycode::W => Some(Self::CycleLineWidth),
            Keycode::G => Some(Self::CycleGridColor),
            Keycode::L => Some(Self::CycleLabelColor),
            Keycode::R => Some(Self::CycleExtent),
            _ => None,
        }
    }

    /// Short name used as log prefix.
    pub const fn name(self) -> &'static str {
        match self {
            Self::MoreCircles | Self::FewerCircles => "Circles",
            Self::LargerLabels | Self::SmallerLabels => "Label size",
            Self::CycleLineWidth => "Line width",
            Self::CycleGridColor => "Grid color",
            Self::CycleLabelColor => "Label color",
            Self::CycleExtent => "Extent",
        }
    }
}

/// Everything the simulator host owns: the widget and the current extent preset.
pub struct GridHost {
    grid: CompassGrid,
    preset: usize,
}

impl GridHost {
    pub const fn new(config: GridConfig) -> Self {
        Self {
            grid: CompassGrid::new(config),
            preset: 0,
        }
    }

    #[inline]
    pub const fn config(&self) -> &GridConfig { self.grid.config() }

    #[inline]
    pub const fn grid_mut(&mut self) -> &mut CompassGrid { &mut self.grid }

    /// Current surface size in pixels.
    #[inline]
    pub const fn extent_size(&self) -> Size { EXTENT_PRESETS[self.preset] }

    /// Current surface in layout units.
    #[inline]
    pub const fn extent(&self) -> SurfaceExtent { SurfaceExtent::from_size(self.extent_size()) }

    /// Screen area the grid is drawn into.
    #[inline]
    pub const fn area(&self) -> Rectangle { grid_area(self.extent_size()) }

    /// Apply `control`, log the outcome and update the counters.
    ///
    /// Returns true when the change was accepted and the screen must be
    /// cleared before the next paint.
    pub fn apply(
        &mut self,
        control: Control,
        log: &mut DebugLog,
        stats: &mut RenderStats,
    ) -> bool {
        match self.try_apply(control) {
            Ok(()) => {
                stats.config_changes = stats.config_changes.wrapping_add(1);
                self.log_change(control, log);
                true
            }
            Err(err) => {
                stats.rejected_changes = stats.rejected_changes.wrapping_add(1);
                log.push_error(control.name(), &err);
                false
            }
        }
    }

    fn try_apply(
        &mut self,
        control: Control,
    ) -> Result<(), ConfigError> {
        match control {
            Control::MoreCircles => self
                .grid
                .update_config(|c| c.set_circle_count(c.circle_count().saturating_add(1))),
            Control::FewerCircles => self
                .grid
                .update_config(|c| c.set_circle_count(c.circle_count().saturating_sub(1))),
            Control::LargerLabels => self
                .grid
                .update_config(|c| c.set_label_text_size(c.label_text_size() + TEXT_SIZE_STEP)),
            Control::SmallerLabels => self
                .grid
                .update_config(|c| c.set_label_text_size(c.label_text_size() - TEXT_SIZE_STEP)),
            Control::CycleLineWidth => self.grid.update_config(|c| {
                let width = c.grid_line_width();
                let next = if width >= LINE_WIDTH_CYCLE_END { 1.0 } else { width + 1.0 };
                c.set_grid_line_width(next)?;
                c.set_label_stroke_width(next)
            }),
            Control::CycleGridColor => self.grid.update_config(|c| {
                c.set_grid_color(next_palette_color(c.grid_color()));
                Ok(())
            }),
            Control::CycleLabelColor => self.grid.update_config(|c| {
                c.set_label_color(next_palette_color(c.label_color()));
                Ok(())
            }),
            Control::CycleExtent => {
                // The extent is host state; the grid picks up the new size itself.
                self.preset = (self.preset + 1) % EXTENT_PRESETS.len();
                self.grid.request_redraw();
                Ok(())
            }
        }
    }

    fn log_change(
        &self,
        control: Control,
        log: &mut DebugLog,
    ) {
        let config = self.config();
        match control {
            Control::MoreCircles | Control::FewerCircles => log.push_value(control.name(), config.circle_count()),
            Control::LargerLabels | Control::SmallerLabels => {
                log.push_value(control.name(), config.label_text_size() as u32);
            }
            Control::CycleLineWidth => log.push_value(control.name(), config.grid_line_width() as u32),
            Control::CycleGridColor | Control::CycleLabelColor => log.push(control.name()),
            Control::CycleExtent => {
                let size = self.extent_size();
                let mut line: String<LOG_LINE_LENGTH> = String::new();
                let _ = write!(line, "Extent: {}x{}", size.width, size.height);
                log.push(&line);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use compass_grid::colors::{BLACK, GRAY};

    use super::*;

    fn host() -> (GridHost, DebugLog, RenderStats) { (GridHost::new(GridConfig::DEFAULT), DebugLog::new(), RenderStats::new()) }

    #[test]
    fn test_key_mapping() {
        assert_eq!(Control::from_key(Keycode::Up), Some(Control::MoreCircles));
        assert_eq!(Control::from_key(Keycode::R), Some(Control::CycleExtent));
        assert_eq!(Control::from_key(Keycode::Y), None, "Y is reserved for page switching");
    }

    #[test]
    fn test_more_circles() {
        let (mut host, mut log, mut stats) = host();
        assert!(host.apply(Control::MoreCircles, &mut log, &mut stats));
        assert_eq!(host.config().circle_count(), 4);
        assert_eq!(log.iter().last(), Some("Circles: 4"));
        assert_eq!(stats.config_changes, 1);
    }

    #[test]
    fn test_fewer_circles_stops_at_one() {
        let (mut host, mut log, mut stats) = host();
        host.apply(Control::FewerCircles, &mut log, &mut stats);
        host.apply(Control::FewerCircles, &mut log, &mut stats);
        assert_eq!(host.config().circle_count(), 1);

        assert!(!host.apply(Control::FewerCircles, &mut log, &mut stats), "Zero circles must be rejected");
        assert_eq!(host.config().circle_count(), 1);
        assert_eq!(stats.rejected_changes, 1);
        assert_eq!(log.iter().last(), Some("Circles: circle count must be at least 1"));
    }

    #[test]
    fn test_label_size_rejects_zero() {
        let (mut host, mut log, mut stats) = host();
        // 40 -> 4 in nine steps, the tenth would reach 0
        for _ in 0..9 {
            assert!(host.apply(Control::SmallerLabels, &mut log, &mut stats));
        }
        assert_eq!(host.config().label_text_size(), 4.0);
        assert!(!host.apply(Control::SmallerLabels, &mut log, &mut stats));
        assert_eq!(host.config().label_text_size(), 4.0);
    }

    #[test]
    fn test_label_size_stops_at_limit() {
        let (mut host, mut log, mut stats) = host();
        // 40 -> 256 in 54 steps
        for _ in 0..54 {
            assert!(host.apply(Control::LargerLabels, &mut log, &mut stats));
        }
        assert_eq!(host.config().label_text_size(), 256.0);

        assert!(!host.apply(Control::LargerLabels, &mut log, &mut stats));
        assert_eq!(host.config().label_text_size(), 256.0);
        assert_eq!(log.iter().last(), Some("Label size: label text size 260 exceeds 256"));
    }

    #[test]
    fn test_line_width_cycle() {
        let (mut host, mut log, mut stats) = host();
        let mut widths = [0.0f32; 3];
        for w in &mut widths {
            host.apply(Control::CycleLineWidth, &mut log, &mut stats);
            *w = host.config().grid_line_width();
        }
        assert_eq!(widths, [2.0, 3.0, 1.0]);
        assert_eq!(host.config().label_stroke_width(), 1.0, "Label stroke follows the grid width");
    }

    #[test]
    fn test_grid_color_cycle() {
        let (mut host, mut log, mut stats) = host();
        assert_eq!(host.config().grid_color(), BLACK);
        host.apply(Control::CycleGridColor, &mut log, &mut stats);
        assert_eq!(host.config().grid_color(), GRAY);
        assert_eq!(host.config().label_color(), BLACK, "Label color is independent");
    }

    #[test]
    fn test_extent_cycle_wraps() {
        let (mut host, mut log, mut stats) = host();
        assert_eq!(host.extent_size(), EXTENT_PRESETS[0]);
        for _ in 0..EXTENT_PRESETS.len() - 1 {
            host.apply(Control::CycleExtent, &mut log, &mut stats);
        }
        assert!(host.extent().is_degenerate(), "Last preset is 0x0");
        assert_eq!(log.iter().last(), Some("Extent: 0x0"));

        host.apply(Control::CycleExtent, &mut log, &mut stats);
        assert_eq!(host.extent_size(), EXTENT_PRESETS[0]);
    }
}
