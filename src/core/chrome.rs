//! Scroll-driven navigation chrome state.
//!
//! The navigation bar turns compact once the page is scrolled past
//! [`COMPACT_SCROLL_THRESHOLD`]. Any scroll movement also dismisses the
//! mobile menu.

use crate::config::COMPACT_SCROLL_THRESHOLD;

/// What an observation changed. Observers only need to re-render when
/// [`ChromeUpdate::changed`] is true.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChromeUpdate {
    pub compact_changed: bool,
    pub menu_closed: bool,
}

impl ChromeUpdate {
    pub fn changed(self) -> bool {
        self.compact_changed || self.menu_closed
    }
}

/// Navigation bar state: compact flag plus the mobile menu flag.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollChrome {
    offset: f64,
    compact: bool,
    mobile_menu_open: bool,
}

impl ScrollChrome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_compact(&self) -> bool {
        self.compact
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    /// Last observed vertical scroll offset.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Record a new scroll offset.
    pub fn observe(&mut self, offset: f64) -> ChromeUpdate {
        let mut update = ChromeUpdate::default();
        if offset == self.offset {
            return update;
        }
        self.offset = offset;

        let compact = offset > COMPACT_SCROLL_THRESHOLD;
        if compact != self.compact {
            self.compact = compact;
            update.compact_changed = true;
        }
        if self.mobile_menu_open {
            self.mobile_menu_open = false;
            update.menu_closed = true;
        }
        update
    }

    pub fn toggle_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Close the mobile menu. Returns whether it was open.
    pub fn close_menu(&mut self) -> bool {
        std::mem::replace(&mut self.mobile_menu_open, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold() {
        let mut chrome = ScrollChrome::new();
        assert!(!chrome.is_compact());

        chrome.observe(50.0);
        assert!(!chrome.is_compact());

        chrome.observe(50.5);
        assert!(chrome.is_compact());

        chrome.observe(400.0);
        assert!(chrome.is_compact());

        chrome.observe(12.0);
        assert!(!chrome.is_compact());

        chrome.observe(0.0);
        assert!(!chrome.is_compact());
    }

    #[test]
    fn test_same_compact_value_is_not_a_change() {
        let mut chrome = ScrollChrome::new();
        assert!(chrome.observe(80.0).compact_changed);
        let update = chrome.observe(120.0);
        assert!(!update.changed());
        assert_eq!(chrome.offset(), 120.0);
    }

    #[test]
    fn test_scroll_closes_open_menu() {
        let mut chrome = ScrollChrome::new();
        chrome.toggle_menu();
        assert!(chrome.is_mobile_menu_open());

        let update = chrome.observe(3.0);
        assert!(update.menu_closed);
        assert!(!update.compact_changed);
        assert!(!chrome.is_mobile_menu_open());
    }

    #[test]
    fn test_scroll_with_closed_menu_leaves_it_closed() {
        let mut chrome = ScrollChrome::new();
        let update = chrome.observe(10.0);
        assert!(!update.menu_closed);
        assert!(!chrome.is_mobile_menu_open());
    }

    #[test]
    fn test_unchanged_offset_keeps_menu_open() {
        let mut chrome = ScrollChrome::new();
        chrome.observe(30.0);
        chrome.toggle_menu();
        assert!(!chrome.observe(30.0).changed());
        assert!(chrome.is_mobile_menu_open());
    }

    #[test]
    fn test_close_menu() {
        let mut chrome = ScrollChrome::new();
        assert!(!chrome.close_menu());
        chrome.toggle_menu();
        assert!(chrome.close_menu());
        assert!(!chrome.is_mobile_menu_open());
    }
}
