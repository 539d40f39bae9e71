//! Expanding panel gallery selection and layout.
//!
//! A fixed, ordered row of panels where at most one is expanded. Hovering
//! or clicking a panel expands it; leaving the whole gallery collapses
//! everything back to equal widths.
//!
//! | Selection  | Selected panel | Other panels |
//! |------------|----------------|--------------|
//! | none       | -              | 1.0          |
//! | `Some(id)` | 3.0            | 0.5          |

use crate::config::gallery_weights::{COLLAPSED, EXPANDED, IDLE};
use crate::models::PanelId;

/// Gallery selection state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    /// Nothing expanded; equal widths.
    #[default]
    Idle,
    /// One panel expanded.
    Expanded(PanelId),
}

/// Selection state machine over a fixed panel sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct Gallery {
    panels: Vec<PanelId>,
    selection: Selection,
}

impl Gallery {
    /// Gallery over `panels` with nothing expanded.
    pub fn new(panels: impl IntoIterator<Item = PanelId>) -> Self {
        Self {
            panels: panels.into_iter().collect(),
            selection: Selection::Idle,
        }
    }

    /// Gallery over `panels` that opens with the first one expanded.
    pub fn with_first_expanded(panels: impl IntoIterator<Item = PanelId>) -> Self {
        let mut gallery = Self::new(panels);
        if let Some(&first) = gallery.panels.first() {
            gallery.selection = Selection::Expanded(first);
        }
        gallery
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn selected(&self) -> Option<PanelId> {
        match self.selection {
            Selection::Idle => None,
            Selection::Expanded(id) => Some(id),
        }
    }

    pub fn is_expanded(&self, id: PanelId) -> bool {
        self.selection == Selection::Expanded(id)
    }

    /// Panels in display order.
    pub fn panels(&self) -> &[PanelId] {
        &self.panels
    }

    /// Pointer entered a panel.
    ///
    /// Returns whether the selection changed. Ids outside the gallery are
    /// ignored.
    pub fn pointer_enter(&mut self, id: PanelId) -> bool {
        self.select(id)
    }

    /// Panel was clicked or tapped. Same transition as hovering.
    pub fn click(&mut self, id: PanelId) -> bool {
        self.select(id)
    }

    /// Pointer left the gallery container.
    pub fn pointer_leave(&mut self) -> bool {
        let changed = self.selection != Selection::Idle;
        self.selection = Selection::Idle;
        changed
    }

    fn select(&mut self, id: PanelId) -> bool {
        if !self.panels.contains(&id) {
            return false;
        }
        let next = Selection::Expanded(id);
        let changed = self.selection != next;
        self.selection = next;
        changed
    }

    /// Flex weight for `id` under the current selection.
    pub fn weight(&self, id: PanelId) -> f32 {
        match self.selection {
            Selection::Idle => IDLE,
            Selection::Expanded(selected) if selected == id => EXPANDED,
            Selection::Expanded(_) => COLLAPSED,
        }
    }

    /// Weights for every panel, in display order.
    pub fn weights(&self) -> Vec<(PanelId, f32)> {
        self.panels.iter().map(|&id| (id, self.weight(id))).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: PanelId = PanelId(0);
    const B: PanelId = PanelId(1);
    const C: PanelId = PanelId(2);

    fn abc() -> Gallery {
        Gallery::new([A, B, C])
    }

    #[test]
    fn test_idle_weights_are_equal() {
        assert_eq!(abc().weights(), vec![(A, 1.0), (B, 1.0), (C, 1.0)]);
    }

    #[test]
    fn test_hover_expands_one() {
        let mut gallery = abc();
        assert!(gallery.pointer_enter(B));
        assert_eq!(gallery.weights(), vec![(A, 0.5), (B, 3.0), (C, 0.5)]);
        assert!(gallery.is_expanded(B));
        assert!(!gallery.is_expanded(A));
    }

    #[test]
    fn test_leave_restores_equal_weights() {
        let mut gallery = abc();
        gallery.pointer_enter(B);
        assert!(gallery.pointer_leave());
        assert_eq!(gallery.weights(), vec![(A, 1.0), (B, 1.0), (C, 1.0)]);
        assert!(!gallery.pointer_leave());
    }

    #[test]
    fn test_switching_panels_skips_idle() {
        let mut gallery = abc();
        gallery.pointer_enter(A);
        gallery.pointer_enter(B);
        assert_eq!(gallery.selection(), Selection::Expanded(B));
        assert_eq!(gallery.weights(), vec![(A, 0.5), (B, 3.0), (C, 0.5)]);
    }

    #[test]
    fn test_click_matches_hover() {
        let mut hovered = abc();
        let mut clicked = abc();
        hovered.pointer_enter(C);
        clicked.click(C);
        assert_eq!(hovered, clicked);
        assert!(!clicked.click(C));
    }

    #[test]
    fn test_unknown_panel_is_rejected() {
        let mut gallery = abc();
        gallery.pointer_enter(A);
        assert!(!gallery.click(PanelId(9)));
        assert_eq!(gallery.selected(), Some(A));
    }

    #[test]
    fn test_first_expanded_start() {
        let gallery = Gallery::with_first_expanded([A, B, C]);
        assert_eq!(gallery.selected(), Some(A));
        assert_eq!(Gallery::with_first_expanded(Vec::new()).selected(), None);
    }

    #[test]
    fn test_order_is_stable() {
        let mut gallery = abc();
        gallery.click(C);
        assert_eq!(gallery.panels(), &[A, B, C]);
    }
}
