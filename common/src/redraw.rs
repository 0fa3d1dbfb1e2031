//! Redraw tracking for the compass grid.
//!
//! The grid is static, so repainting every frame is wasted work. The host
//! tells the tracker when it changed the configuration and the tracker
//! notices extent changes on its own:
//!
//! | Trigger | Source | Detected by |
//! |---------|--------|-------------|
//! | First frame | Startup | `first_frame` flag |
//! | Config change | Host calls `request_redraw()` | `redraw_requested` flag |
//! | Resize | Host passes a new extent | Comparison with previous extent |
//!
//! A dirty frame recomputes the plan from scratch; nothing from the previous
//! plan is reused.

use crate::config::SurfaceExtent;

/// Tracks whether the grid needs to be rendered and painted again.
pub struct RedrawState {
    /// Extent seen by the last `check_dirty` call.
    prev_extent: Option<SurfaceExtent>,

    /// Host changed the configuration since the last frame.
    redraw_requested: bool,

    /// Whether this is the first frame (need full redraw).
    first_frame: bool,
}

impl RedrawState {
    /// Create a new redraw state for first frame.
    pub const fn new() -> Self {
        Self {
            prev_extent: None,
            redraw_requested: false,
            first_frame: true,
        }
    }

    /// Notify that the configuration changed and the grid must be recomputed.
    #[inline]
    pub const fn request_redraw(&mut self) { self.redraw_requested = true; }

    /// Check if a redraw was requested and not yet consumed by `end_frame`.
    #[inline]
    pub const fn redraw_requested(&self) -> bool { self.redraw_requested }

    /// Check if this is the first frame.
    #[inline]
    pub const fn is_first_frame(&self) -> bool { self.first_frame }

    /// Check if the grid must be repainted for `extent`.
    ///
    /// Records `extent` so the next call only reports a resize when the
    /// extent actually changes.
    pub fn check_dirty(
        &mut self,
        extent: SurfaceExtent,
    ) -> bool {
        let resized = self.prev_extent != Some(extent);
        self.prev_extent = Some(extent);
        self.first_frame || self.redraw_requested || resized
    }

    /// Call at end of frame to reset per-frame state.
    pub const fn end_frame(&mut self) {
        self.first_frame = false;
        self.redraw_requested = false;
    }
}

impl Default for RedrawState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EXTENT: SurfaceExtent = SurfaceExtent::new(240.0, 240.0);

    #[test]
    fn test_first_frame_dirty() {
        let mut state = RedrawState::new();
        assert!(state.is_first_frame());
        assert!(state.check_dirty(EXTENT), "First frame must always paint");
    }

    #[test]
    fn test_clean_after_end_frame() {
        let mut state = RedrawState::new();
        state.check_dirty(EXTENT);
        state.end_frame();

        assert!(!state.is_first_frame());
        assert!(!state.check_dirty(EXTENT), "Unchanged frame should not repaint");
    }

    #[test]
    fn test_request_redraw() {
        let mut state = RedrawState::new();
        state.check_dirty(EXTENT);
        state.end_frame();

        state.request_redraw();
        assert!(state.redraw_requested());
        assert!(state.check_dirty(EXTENT), "Config change should repaint");

        state.end_frame();
        assert!(!state.redraw_requested(), "Request is consumed by end_frame");
        assert!(!state.check_dirty(EXTENT));
    }

    #[test]
    fn test_resize_dirty() {
        let mut state = RedrawState::new();
        state.check_dirty(EXTENT);
        state.end_frame();

        let resized = SurfaceExtent::new(200.0, 160.0);
        assert!(state.check_dirty(resized), "Resize should repaint");
        state.end_frame();
        assert!(!state.check_dirty(resized), "Same extent again is clean");
    }

    #[test]
    fn test_default_matches_new() {
        let a = RedrawState::default();
        let b = RedrawState::new();
        assert_eq!(a.is_first_frame(), b.is_first_frame());
        assert_eq!(a.redraw_requested(), b.redraw_requested());
    }
}
