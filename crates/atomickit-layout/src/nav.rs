//! Adaptive navigation mode selection.
//!
//! Narrow screens get a bottom navigation bar, wide screens a sidebar that
//! can collapse to icons only. Only the decision lives here.

use log::debug;

/// Navigation display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavMode {
    BottomBar,
    Sidebar,
}

/// Dimension configuration for adaptive navigation, in dp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptiveNavConfig {
    /// Width at which navigation switches from bottom bar to sidebar.
    pub breakpoint: f32,
    pub sidebar_width: f32,
    pub sidebar_collapsed_width: f32,
    pub bottom_nav_height: f32,
    pub expand_sidebar_by_default: bool,
}

impl Default for AdaptiveNavConfig {
    fn default() -> Self {
        Self {
            breakpoint: 600.0,
            sidebar_width: 240.0,
            sidebar_collapsed_width: 72.0,
            bottom_nav_height: 64.0,
            expand_sidebar_by_default: true,
        }
    }
}

impl AdaptiveNavConfig {
    /// Picks the navigation mode for a measured width.
    pub fn mode_for_width(&self, width_dp: f32) -> NavMode {
        let mode = if width_dp >= self.breakpoint {
            NavMode::Sidebar
        } else {
            NavMode::BottomBar
        };
        debug!(
            "width {width_dp} dp -> {mode:?} (breakpoint {})",
            self.breakpoint
        );
        mode
    }

    /// Sidebar width for the given expansion state.
    pub fn sidebar_width(&self, expanded: bool) -> f32 {
        if expanded {
            self.sidebar_width
        } else {
            self.sidebar_collapsed_width
        }
    }
}
