//! Compass grid simulator for Windows/Desktop.
//!
//! Hosts the compass grid widget in an `embedded-graphics-simulator` window.
//! The simulator plays the host UI layer: it owns the configuration, supplies
//! the surface extent and asks for a redraw after every accepted change.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod controls;
mod layout;
mod pages;
mod screens;
mod timing;

use std::thread;
use std::time::Instant;

use compass_grid::GridConfig;
use compass_grid::colors::WHITE;
use compass_grid::profiling::{DebugLog, RenderStats};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};

use crate::controls::{Control, GridHost};
use crate::layout::{SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_SCALE};
use crate::pages::Page;
use crate::screens::draw_log_page;
use crate::timing::FRAME_TIME;

fn main() {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("Compass Grid Sim", &output_settings);

    display.clear(WHITE).ok();
    window.update(&display);

    let mut host = GridHost::new(GridConfig::DEFAULT);
    let mut current_page = Page::default();
    let mut clear_requested = true;

    let mut stats = RenderStats::new();
    let mut debug_log = DebugLog::new();
    debug_log.push("Grid ready");
    debug_log.push_value("Circles", host.config().circle_count());

    loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    if keycode == Keycode::Y {
                        current_page = current_page.toggle();
                        clear_requested = true;
                        debug_log.push(match current_page {
                            Page::Compass => "Page: Compass",
                            Page::Log => "Page: Log",
                        });
                        // The log page overwrote the grid
                        host.grid_mut().request_redraw();
                    } else if let Some(control) = Control::from_key(keycode) {
                        clear_requested |= host.apply(control, &mut debug_log, &mut stats);
                    }
                }
                _ => {}
            }
        }

        match current_page {
            Page::Compass => {
                if clear_requested {
                    display.clear(WHITE).ok();
                    clear_requested = false;
                }
                let area = host.area();
                let extent = host.extent();
                let painted = host.grid_mut().draw_if_dirty(&mut display.cropped(&area), extent);
                stats.record_frame(painted);
            }
            Page::Log => {
                draw_log_page(&mut display, host.config(), host.extent_size(), &stats, &debug_log);
            }
        }

        window.update(&display);

        let elapsed = frame_start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(elapsed) {
            thread::sleep(remaining);
        }
    }
}
