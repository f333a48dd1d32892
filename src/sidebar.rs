//! Responsive sidebar controller
//!
//! In `Auto` mode the viewport width drives the collapsed state. The first
//! manual toggle switches to `Manual` for the rest of the session; only a full
//! reset goes back to `Auto`.

use crate::config::NARROW_BREAKPOINT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarMode {
    Auto,
    Manual,
}

/// How much room the sidebar takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarWidth {
    /// Collapsed on a narrow viewport: not drawn at all
    Hidden,
    /// Collapsed on a wide viewport: icon rail with abbreviated titles
    Rail,
    Full,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SidebarController {
    collapsed: bool,
    narrow: bool,
    mode: SidebarMode,
    breakpoint: f64,
}

impl Default for SidebarController {
    fn default() -> Self {
        Self::new(None, NARROW_BREAKPOINT)
    }
}

impl SidebarController {
    /// Start from the stored desktop preference (expanded when none)
    pub fn new(stored: Option<bool>, breakpoint: f64) -> Self {
        Self {
            collapsed: stored.unwrap_or(false),
            narrow: false,
            mode: SidebarMode::Auto,
            breakpoint,
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn is_narrow(&self) -> bool {
        self.narrow
    }

    pub fn mode(&self) -> SidebarMode {
        self.mode
    }

    pub fn width(&self) -> SidebarWidth {
        match (self.collapsed, self.narrow) {
            (false, _) => SidebarWidth::Full,
            (true, false) => SidebarWidth::Rail,
            (true, true) => SidebarWidth::Hidden,
        }
    }

    /// The toggle button disappears together with a hidden sidebar
    pub fn toggle_visible(&self) -> bool {
        self.width() != SidebarWidth::Hidden
    }

    /// Abbreviated labels are used on the rail only
    pub fn is_rail(&self) -> bool {
        self.width() == SidebarWidth::Rail
    }

    /// React to a viewport width. `stored` is the persisted desktop preference.
    /// Returns the value to persist, if any.
    pub fn observe_viewport(&mut self, width: f64, stored: Option<bool>) -> Option<bool> {
        let before = (self.collapsed, self.narrow);
        self.narrow = width < self.breakpoint;
        if self.mode == SidebarMode::Auto {
            self.collapsed = if self.narrow { true } else { stored.unwrap_or(false) };
        }
        self.persistable(before)
    }

    /// Manual toggle. Leaves `Auto` mode for good.
    pub fn toggle(&mut self) -> Option<bool> {
        let before = (self.collapsed, self.narrow);
        if self.mode == SidebarMode::Auto {
            log::debug!("Sidebar switched to manual mode");
        }
        self.mode = SidebarMode::Manual;
        self.collapsed = !self.collapsed;
        self.persistable(before)
    }

    /// Back to `Auto` with no stored preference
    pub fn reset(&mut self) {
        self.mode = SidebarMode::Auto;
        self.collapsed = self.narrow;
    }

    /// Changes are persisted only on wide viewports so the narrow-screen
    /// auto-collapse never overwrites the desktop preference.
    fn persistable(&self, before: (bool, bool)) -> Option<bool> {
        let changed = before != (self.collapsed, self.narrow);
        if changed && !self.narrow {
            Some(self.collapsed)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_collapses_below_breakpoint() {
        let mut sidebar = SidebarController::default();
        assert_eq!(sidebar.observe_viewport(800.0, None), None);
        assert!(sidebar.is_collapsed());
        assert_eq!(sidebar.width(), SidebarWidth::Hidden);
        assert!(!sidebar.toggle_visible());
    }

    #[test]
    fn test_auto_restores_stored_preference_when_wide() {
        let mut sidebar = SidebarController::new(Some(true), NARROW_BREAKPOINT);
        sidebar.observe_viewport(800.0, Some(true));
        assert_eq!(sidebar.observe_viewport(1280.0, Some(false)), Some(false));
        assert!(!sidebar.is_collapsed());
        assert_eq!(sidebar.width(), SidebarWidth::Full);

        sidebar.observe_viewport(1280.0, Some(true));
        assert!(sidebar.is_rail());
    }

    #[test]
    fn test_manual_toggle_disables_auto() {
        let mut sidebar = SidebarController::default();
        sidebar.observe_viewport(1280.0, None);
        assert_eq!(sidebar.toggle(), Some(true));
        assert_eq!(sidebar.mode(), SidebarMode::Manual);

        sidebar.toggle();
        assert!(!sidebar.is_collapsed());
        assert_eq!(sidebar.observe_viewport(600.0, None), None);
        assert!(!sidebar.is_collapsed());
        assert!(sidebar.is_narrow());
    }

    #[test]
    fn test_narrow_changes_are_not_persisted() {
        let mut sidebar = SidebarController::default();
        sidebar.observe_viewport(600.0, None);
        sidebar.toggle();
        // Expanded on a narrow screen: state changed but nothing to persist
        assert!(!sidebar.is_collapsed());
        assert_eq!(sidebar.toggle(), None);
        // Widening makes the manual state persistable
        assert_eq!(sidebar.observe_viewport(1400.0, None), Some(true));
    }

    #[test]
    fn test_reset_returns_to_auto() {
        let mut sidebar = SidebarController::default();
        sidebar.observe_viewport(1280.0, None);
        sidebar.toggle();
        sidebar.reset();
        assert_eq!(sidebar.mode(), SidebarMode::Auto);
        assert!(!sidebar.is_collapsed());
        sidebar.observe_viewport(700.0, None);
        assert!(sidebar.is_collapsed());
    }
}
