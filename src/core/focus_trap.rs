//! Keyboard focus confinement for overlay dialogs.
//!
//! The trap is generic over the focus handle so it can be driven by DOM
//! elements in the browser and by plain values in tests. The set of
//! handles is supplied by the dialog content at activation and is not
//! re-read until the next activation.

/// What the host should do with a Tab keypress.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TabAction<H> {
    /// Cancel the default traversal and focus this handle instead.
    Redirect(H),
    /// Let the browser move focus normally.
    Default,
}

#[derive(Clone, Debug)]
enum TrapState<H> {
    Inactive,
    Active { handles: Vec<H> },
}

/// Tab-cycling focus trap.
///
/// While active, Tab on the last handle wraps to the first and Shift+Tab on
/// the first wraps to the last. Everything in between is left to the
/// browser. Focus is not restored to the opener on deactivation.
#[derive(Clone, Debug)]
pub struct FocusTrap<H> {
    state: TrapState<H>,
}

impl<H> Default for FocusTrap<H> {
    fn default() -> Self {
        Self {
            state: TrapState::Inactive,
        }
    }
}

impl<H: Clone + PartialEq> FocusTrap<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, TrapState::Active { .. })
    }

    /// Capture `handles` and return the one to focus first.
    ///
    /// Returns `None` when the trap is already active, so repeated calls
    /// during one activation never steal focus again.
    pub fn activate(&mut self, handles: Vec<H>) -> Option<H> {
        if self.is_active() {
            return None;
        }
        let first = handles.first().cloned();
        self.state = TrapState::Active { handles };
        first
    }

    /// Drop the captured handles.
    pub fn deactivate(&mut self) {
        self.state = TrapState::Inactive;
    }

    /// Decide how to handle Tab (`backward` is Shift+Tab) given the handle
    /// that currently has focus.
    pub fn on_tab(&self, focused: Option<&H>, backward: bool) -> TabAction<H> {
        let TrapState::Active { handles } = &self.state else {
            return TabAction::Default;
        };
        let (Some(first), Some(last)) = (handles.first(), handles.last()) else {
            return TabAction::Default;
        };

        match (backward, focused) {
            (false, Some(current)) if current == last => TabAction::Redirect(first.clone()),
            (true, Some(current)) if current == first => TabAction::Redirect(last.clone()),
            _ => TabAction::Default,
        }
    }

    /// Drop captured handles that fail `keep`, preserving order.
    ///
    /// Content can be swapped out while the trap is active; the ends of the
    /// cycle move to whatever handles remain.
    pub fn retain(&mut self, keep: impl FnMut(&H) -> bool) {
        if let TrapState::Active { handles } = &mut self.state {
            handles.retain(keep);
        }
    }

    /// Number of captured handles (0 when inactive).
    pub fn len(&self) -> usize {
        match &self.state {
            TrapState::Active { handles } => handles.len(),
            TrapState::Inactive => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trap_with(n: usize) -> FocusTrap<usize> {
        let mut trap = FocusTrap::new();
        trap.activate((0..n).collect());
        trap
    }

    #[test]
    fn test_activation_focuses_first_once() {
        let mut trap = FocusTrap::new();
        assert_eq!(trap.activate(vec!["name", "email", "send"]), Some("name"));
        assert!(trap.is_active());
        // A second activation request during the same activation is ignored
        assert_eq!(trap.activate(vec!["other"]), None);
        assert_eq!(trap.len(), 3);
    }

    #[test]
    fn test_reactivation_after_deactivate() {
        let mut trap = FocusTrap::new();
        trap.activate(vec![1, 2]);
        trap.deactivate();
        assert!(!trap.is_active());
        assert!(trap.is_empty());
        assert_eq!(trap.activate(vec![7, 8]), Some(7));
    }

    #[test]
    fn test_wraps_for_various_sizes() {
        for n in [2, 3, 4, 9] {
            let trap = trap_with(n);
            let last = n - 1;
            assert_eq!(
                trap.on_tab(Some(&last), false),
                TabAction::Redirect(0),
                "forward wrap with {n} handles"
            );
            assert_eq!(
                trap.on_tab(Some(&0), true),
                TabAction::Redirect(last),
                "backward wrap with {n} handles"
            );
        }
    }

    #[test]
    fn test_inner_moves_use_default() {
        let trap = trap_with(4);
        assert_eq!(trap.on_tab(Some(&0), false), TabAction::Default);
        assert_eq!(trap.on_tab(Some(&1), false), TabAction::Default);
        assert_eq!(trap.on_tab(Some(&2), true), TabAction::Default);
        assert_eq!(trap.on_tab(Some(&3), true), TabAction::Default);
    }

    #[test]
    fn test_unknown_focus_uses_default() {
        let trap = trap_with(3);
        assert_eq!(trap.on_tab(None, false), TabAction::Default);
        assert_eq!(trap.on_tab(Some(&42), true), TabAction::Default);
    }

    #[test]
    fn test_inactive_and_empty_traps_do_nothing() {
        let inactive: FocusTrap<usize> = FocusTrap::new();
        assert_eq!(inactive.on_tab(Some(&0), false), TabAction::Default);

        let mut empty: FocusTrap<usize> = FocusTrap::new();
        assert_eq!(empty.activate(Vec::new()), None);
        assert!(empty.is_active());
        assert_eq!(empty.on_tab(None, true), TabAction::Default);
    }

    #[test]
    fn test_retain_moves_the_ends_to_remaining_handles() {
        // Close button plus a form that gets replaced by its confirmation
        let mut trap = trap_with(5);
        assert_eq!(trap.on_tab(Some(&0), false), TabAction::Default);

        trap.retain(|h| *h == 0);
        assert_eq!(trap.len(), 1);
        assert_eq!(trap.on_tab(Some(&0), false), TabAction::Redirect(0));
        assert_eq!(trap.on_tab(Some(&0), true), TabAction::Redirect(0));
        // A stale handle no longer counts as an end
        assert_eq!(trap.on_tab(Some(&4), false), TabAction::Default);
    }

    #[test]
    fn test_retain_on_inactive_trap_is_a_no_op() {
        let mut trap: FocusTrap<usize> = FocusTrap::new();
        trap.retain(|_| false);
        assert!(!trap.is_active());
        assert_eq!(trap.activate(vec![3, 4]), Some(3));
    }

    #[test]
    fn test_single_handle_wraps_onto_itself() {
        let trap = trap_with(1);
        assert_eq!(trap.on_tab(Some(&0), false), TabAction::Redirect(0));
        assert_eq!(trap.on_tab(Some(&0), true), TabAction::Redirect(0));
    }
}
