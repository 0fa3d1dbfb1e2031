//! Label fonts and text styles.
//!
//! Mono fonts come in fixed sizes, so a requested label size is mapped to the
//! largest bundled font whose glyph height fits it. Label positions from the
//! renderer are baseline-left, which matches `LEFT_ALIGNED` with the default
//! alphabetic baseline.

use embedded_graphics::{
    mono_font::{
        MonoFont,
        ascii::{FONT_6X10, FONT_10X20},
    },
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_7_POINT, PROFONT_12_POINT, PROFONT_14_POINT, PROFONT_18_POINT, PROFONT_24_POINT};

/// Left-aligned text on the alphabetic baseline. Used for cardinal labels.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Alphabetic)
    .build();

/// Small font for log lines and status text.
pub const STATUS_FONT: &MonoFont = &FONT_6X10;

/// Candidate label fonts, largest first.
const LABEL_FONTS: [&MonoFont<'static>; 7] = [
    &PROFONT_24_POINT,
    &PROFONT_18_POINT,
    &FONT_10X20,
    &PROFONT_14_POINT,
    &PROFONT_12_POINT,
    &FONT_6X10,
    &PROFONT_7_POINT,
];

/// Largest font whose glyph height does not exceed `text_size`.
///
/// Falls back to the smallest font when even that one is too tall.
pub fn label_font(text_size: f32) -> &'static MonoFont<'static> {
    LABEL_FONTS
        .iter()
        .copied()
        .find(|font| font.character_size.height as f32 <= text_size)
        .unwrap_or(LABEL_FONTS[LABEL_FONTS.len() - 1])
}
