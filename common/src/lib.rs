//! Compass grid widget.
//!
//! Renders a static compass backdrop: concentric rings, a horizontal and a
//! vertical axis line through the center, and the four cardinal labels.
//! The layout math is a pure function of the surface extent and a
//! [`GridConfig`]; painting is done by any `DrawTarget<Color = Rgb565>`.
//!
//! - [`colors`]: RGB565 color constants and the palette used by hosts
//! - [`config`]: Default values, limits and the validated [`GridConfig`]
//! - [`error`]: Configuration errors
//! - [`plan`]: Drawing primitives produced by one render pass
//! - [`renderer`]: The layout computation ([`render`])
//! - [`redraw`]: Explicit redraw requests and extent change tracking
//! - [`styles`]: Label font selection and text styles
//! - [`widgets`]: Painting a plan onto a draw target
//! - [`profiling`]: Debug log buffer (no time dependencies)
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` compatible and allocation-free. Plans are stored in
//! fixed-capacity `heapless` collections.

#![no_std]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod colors;
pub mod config;
pub mod error;
pub mod plan;
pub mod profiling;
pub mod redraw;
pub mod renderer;
pub mod styles;
pub mod widgets;

// Re-export commonly used items
pub use config::{GridConfig, SurfaceExtent};
pub use error::ConfigError;
pub use plan::RenderPlan;
pub use renderer::render;
pub use widgets::CompassGrid;
