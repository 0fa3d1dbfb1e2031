//! Page navigation for the simulator.
//!
//! Press `Y` to toggle between pages.
//!
//! - [`Page::Compass`]: The compass grid inside the current surface extent
//! - [`Page::Log`]: Current configuration, render counters and the debug log

/// Available pages in the simulator.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Page {
    /// Compass grid on a white background.
    #[default]
    Compass,

    /// Configuration, counters and debug log terminal.
    Log,
}

impl Page {
    /// Toggle to the other page.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Compass => Self::Log,
            Self::Log => Self::Compass,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_default() {
        assert_eq!(Page::default(), Page::Compass);
    }

    #[test]
    fn test_page_toggle() {
        assert_eq!(Page::Compass.toggle(), Page::Log);
        assert_eq!(Page::Log.toggle(), Page::Compass);
    }
}
