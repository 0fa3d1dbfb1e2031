//! Debug log and render counters.
//!
//! The log is a fixed-size ring buffer of short lines that a host can show
//! on screen; there is no logging facade on the target. Counters track how
//! often the grid was actually recomputed versus skipped. Neither depends on
//! time, so both live here rather than in a platform crate.
//!
//! # Usage
//!
//! ```ignore
//! let mut log = DebugLog::new();
//! log.push("Grid ready");
//! log.push_error("Circles", &ConfigError::InvalidCircleCount);
//!
//! for line in log.iter() {
//!     println!("{}", line);
//! }
//! ```

use core::fmt::{self, Write};

use heapless::{Deque, String};

// =============================================================================
// Debug Log Configuration
// =============================================================================

/// Maximum number of log lines to keep in the ring buffer.
pub const LOG_BUFFER_SIZE: usize = 6;

/// Maximum characters per log line.
pub const LOG_LINE_LENGTH: usize = 48;

// =============================================================================
// Debug Log Ring Buffer
// =============================================================================

/// Ring buffer for debug log messages.
///
/// Stores the last `LOG_BUFFER_SIZE` messages. Old messages are dropped when
/// the buffer is full and long messages are truncated.
pub struct DebugLog {
    buffer: Deque<String<LOG_LINE_LENGTH>, LOG_BUFFER_SIZE>,
}

impl DebugLog {
    /// Create a new empty debug log.
    pub const fn new() -> Self { Self { buffer: Deque::new() } }

    /// Push a log message. If buffer is full, oldest message is dropped.
    pub fn push(
        &mut self,
        msg: &str,
    ) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }

        let mut line: String<LOG_LINE_LENGTH> = String::new();
        for c in msg.chars().take(LOG_LINE_LENGTH - 1) {
            line.push(c).ok();
        }

        self.buffer.push_back(line).ok();
    }

    /// Push `"<label>: <value>"`, formatted without allocation.
    pub fn push_value(
        &mut self,
        label: &str,
        value: u32,
    ) {
        let mut line: String<LOG_LINE_LENGTH> = String::new();
        let _ = write!(line, "{label}: {value}");
        self.push(&line);
    }

    /// Push `"<label>: <error>"` using the error's `Display` impl.
    pub fn push_error(
        &mut self,
        label: &str,
        err: &dyn fmt::Display,
    ) {
        let mut line: String<LOG_LINE_LENGTH> = String::new();
        // Overflow only truncates the line
        let _ = write!(line, "{label}: {err}");
        self.push(&line);
    }

    /// Iterate over log messages (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.buffer.iter().map(heapless::string::StringInner::as_str) }

    /// Get number of log entries.
    #[inline]
    pub fn len(&self) -> usize { self.buffer.len() }

    /// Check if log is empty.
    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }
}

impl Default for DebugLog {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Render Counters
// =============================================================================

/// How often the grid was recomputed, skipped or reconfigured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames checked for redraw.
    pub frames: u32,
    /// Frames that recomputed and painted a plan.
    pub renders: u32,
    /// Configuration changes accepted.
    pub config_changes: u32,
    /// Configuration changes rejected with a `ConfigError`.
    pub rejected_changes: u32,
}

impl RenderStats {
    pub const fn new() -> Self {
        Self {
            frames: 0,
            renders: 0,
            config_changes: 0,
            rejected_changes: 0,
        }
    }

    /// Record one frame and whether it painted.
    pub const fn record_frame(
        &mut self,
        painted: bool,
    ) {
        self.frames = self.frames.wrapping_add(1);
        if painted {
            self.renders = self.renders.wrapping_add(1);
        }
    }

    /// Frames that reused the previous paint.
    #[inline]
    pub const fn skipped(&self) -> u32 { self.frames.saturating_sub(self.renders) }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn test_debug_log_push() {
        let mut log = DebugLog::new();
        assert!(log.is_empty());

        log.push("Grid ready");
        assert_eq!(log.len(), 1);

        log.push("Circles: 4");
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_debug_log_ring_buffer() {
        let mut log = DebugLog::new();

        for i in 0..LOG_BUFFER_SIZE {
            log.push_value("n", i as u32);
        }
        assert_eq!(log.len(), LOG_BUFFER_SIZE);

        log.push("New");
        assert_eq!(log.len(), LOG_BUFFER_SIZE);

        let first = log.iter().next().unwrap();
        assert_eq!(first, "n: 1", "Oldest entry should have been dropped");
        assert_eq!(log.iter().last().unwrap(), "New");
    }

    #[test]
    fn test_debug_log_truncation() {
        let mut log = DebugLog::new();
        let long_msg = "This is a very long message that exceeds the maximum line length limit";
        log.push(long_msg);

        let stored = log.iter().next().unwrap();
        assert!(stored.len() < LOG_LINE_LENGTH);
        assert!(long_msg.starts_with(stored));
    }

    #[test]
    fn test_push_value() {
        let mut log = DebugLog::new();
        log.push_value("Circles", 12);
        assert_eq!(log.iter().next().unwrap(), "Circles: 12");
    }

    #[test]
    fn test_push_error() {
        let mut log = DebugLog::new();
        log.push_error("Circles", &ConfigError::InvalidCircleCount);
        assert_eq!(log.iter().next().unwrap(), "Circles: circle count must be at least 1");
    }

    #[test]
    fn test_render_stats() {
        let mut stats = RenderStats::new();
        stats.record_frame(true);
        stats.record_frame(false);
        stats.record_frame(false);
        assert_eq!(stats.frames, 3);
        assert_eq!(stats.renders, 1);
        assert_eq!(stats.skipped(), 2);
        assert_eq!(RenderStats::default(), RenderStats::new());
    }
}
