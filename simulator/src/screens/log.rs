//! Log page: current configuration, render counters and the debug log.

use core::fmt::Write;

use compass_grid::GridConfig;
use compass_grid::colors::{BLACK, GRAY, GREEN, ORANGE, WHITE};
use compass_grid::profiling::{DebugLog, RenderStats};
use compass_grid::styles::STATUS_FONT;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use heapless::String;

use crate::layout::{SCREEN_HEIGHT, SCREEN_WIDTH};

const HEADER_Y: i32 = 12;
const HEADER_DIVIDER_Y: i32 = 18;
const SECTION_HEADER_Y: i32 = 28;
const STATS_Y: i32 = 40;
const LOG_DIVIDER_Y: i32 = 130;
const LOG_Y: i32 = 142;
const LOG_LINE_HEIGHT: i32 = 12;
const COL1_X: i32 = 4;
const COL2_X: i32 = 165;
const STAT_LINE_HEIGHT: i32 = 13;

const HEADER_COLOR: Rgb565 = GREEN;
const SECTION_COLOR: Rgb565 = GRAY;
const VALUE_COLOR: Rgb565 = WHITE;
const LOG_PROMPT_COLOR: Rgb565 = GREEN;
const LOG_TEXT_COLOR: Rgb565 = ORANGE;
const DIVIDER_COLOR: Rgb565 = GRAY;

pub fn draw_log_page<D>(
    display: &mut D,
    config: &GridConfig,
    extent: Size,
    stats: &RenderStats,
    log: &DebugLog,
) where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BLACK).ok();

    let header_style = MonoTextStyle::new(STATUS_FONT, HEADER_COLOR);
    Text::new("COMPASS GRID", Point::new(COL1_X, HEADER_Y), header_style)
        .draw(display)
        .ok();
    draw_horizontal_line(display, HEADER_DIVIDER_Y);

    let section_style = MonoTextStyle::new(STATUS_FONT, SECTION_COLOR);
    Text::new("CONFIG", Point::new(COL1_X, SECTION_HEADER_Y), section_style)
        .draw(display)
        .ok();
    Text::new("RENDER", Point::new(COL2_X, SECTION_HEADER_Y), section_style)
        .draw(display)
        .ok();

    draw_config_column(display, config, extent);
    draw_render_column(display, stats);
    draw_horizontal_line(display, LOG_DIVIDER_Y);
    draw_log_terminal(display, log);
}

fn draw_config_column<D>(
    display: &mut D,
    config: &GridConfig,
    extent: Size,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let value_style = MonoTextStyle::new(STATUS_FONT, VALUE_COLOR);
    let mut lines: [String<24>; 5] = Default::default();
    let _ = write!(lines[0], "Circles:  {}", config.circle_count());
    let _ = write!(lines[1], "Line w:   {:.1}", config.grid_line_width());
    let _ = write!(lines[2], "Label sz: {:.0}", config.label_text_size());
    let _ = write!(lines[3], "Stroke:   {:.1}", config.label_stroke_width());
    let _ = write!(lines[4], "Extent:   {}x{}", extent.width, extent.height);

    let mut y = STATS_Y;
    for line in &lines {
        Text::new(line, Point::new(COL1_X, y), value_style).draw(display).ok();
        y += STAT_LINE_HEIGHT;
    }
}

fn draw_render_column<D>(
    display: &mut D,
    stats: &RenderStats,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let value_style = MonoTextStyle::new(STATUS_FONT, VALUE_COLOR);
    let mut lines: [String<24>; 5] = Default::default();
    let _ = write!(lines[0], "Frames:   {}", stats.frames);
    let _ = write!(lines[1], "Renders:  {}", stats.renders);
    let _ = write!(lines[2], "Skipped:  {}", stats.skipped());
    let _ = write!(lines[3], "Changes:  {}", stats.config_changes);
    let _ = write!(lines[4], "Rejected: {}", stats.rejected_changes);

    let mut y = STATS_Y;
    for line in &lines {
        Text::new(line, Point::new(COL2_X, y), value_style).draw(display).ok();
        y += STAT_LINE_HEIGHT;
    }
}

fn draw_log_terminal<D>(
    display: &mut D,
    log: &DebugLog,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let prompt_style = MonoTextStyle::new(STATUS_FONT, LOG_PROMPT_COLOR);
    let text_style = MonoTextStyle::new(STATUS_FONT, LOG_TEXT_COLOR);

    Rectangle::new(
        Point::new(0, LOG_DIVIDER_Y + 2),
        Size::new(SCREEN_WIDTH, SCREEN_HEIGHT - LOG_DIVIDER_Y as u32 - 2),
    )
    .into_styled(PrimitiveStyle::with_fill(Rgb565::new(1, 2, 1)))
    .draw(display)
    .ok();

    let mut y = LOG_Y;
    for line in log.iter() {
        Text::new(">", Point::new(COL1_X, y), prompt_style).draw(display).ok();
        Text::new(line, Point::new(COL1_X + 10, y), text_style)
            .draw(display)
            .ok();
        y += LOG_LINE_HEIGHT;
    }

    Text::new("> _", Point::new(COL1_X, y), prompt_style).draw(display).ok();
}

fn draw_horizontal_line<D>(
    display: &mut D,
    y: i32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Line::new(Point::new(2, y), Point::new(SCREEN_WIDTH as i32 - 2, y))
        .into_styled(PrimitiveStyle::with_stroke(DIVIDER_COLOR, 1))
        .draw(display)
        .ok();
}
