//! Overlay dialog bookkeeping.
//!
//! The manager stores a single `Option<ModalId>`, so at most one dialog can
//! be open at any moment. Opening a second dialog while one is open replaces
//! it; callers are expected not to do that.

/// Every overlay dialog the site can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModalId {
    /// "Conversation Context" strategy call request form.
    StrategyCall,
}

/// Result of an open/close request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalTransition {
    /// Dialog became visible.
    Opened(ModalId),
    /// `previous` was still open and got replaced.
    Replaced { previous: ModalId, next: ModalId },
    /// Dialog was dismissed.
    Closed(ModalId),
    /// Nothing changed.
    Unchanged,
}

impl ModalTransition {
    pub fn changed(self) -> bool {
        self != Self::Unchanged
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalManager {
    open: Option<ModalId>,
}

impl ModalManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, id: ModalId) -> ModalTransition {
        match self.open.replace(id) {
            None => ModalTransition::Opened(id),
            Some(previous) if previous == id => ModalTransition::Unchanged,
            Some(previous) => ModalTransition::Replaced { previous, next: id },
        }
    }

    /// Close `id`. Closing a dialog that is not open is a no-op.
    pub fn close(&mut self, id: ModalId) -> ModalTransition {
        if self.open == Some(id) {
            self.open = None;
            ModalTransition::Closed(id)
        } else {
            ModalTransition::Unchanged
        }
    }

    pub fn is_open(&self, id: ModalId) -> bool {
        self.open == Some(id)
    }

    /// The dialog currently shown, if any.
    pub fn active(&self) -> Option<ModalId> {
        self.open
    }

    /// Whether any dialog is open; the focus trap is active exactly then.
    pub fn any_open(&self) -> bool {
        self.open.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close_cycle() {
        let mut modals = ModalManager::new();
        assert!(!modals.any_open());

        assert_eq!(
            modals.open(ModalId::StrategyCall),
            ModalTransition::Opened(ModalId::StrategyCall)
        );
        assert!(modals.is_open(ModalId::StrategyCall));
        assert_eq!(modals.active(), Some(ModalId::StrategyCall));

        assert_eq!(
            modals.close(ModalId::StrategyCall),
            ModalTransition::Closed(ModalId::StrategyCall)
        );
        assert!(!modals.any_open());
    }

    #[test]
    fn test_reopen_is_unchanged() {
        let mut modals = ModalManager::new();
        modals.open(ModalId::StrategyCall);
        assert_eq!(modals.open(ModalId::StrategyCall), ModalTransition::Unchanged);
        assert!(modals.is_open(ModalId::StrategyCall));
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let mut modals = ModalManager::new();
        let transition = modals.close(ModalId::StrategyCall);
        assert!(!transition.changed());
        assert_eq!(modals.active(), None);
    }
}
