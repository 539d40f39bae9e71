//! Focus trap hook for dialog hosts.

use leptos::prelude::*;
use web_sys::{HtmlElement, KeyboardEvent};

use crate::core::{FocusTrap, TabAction};
use crate::utils::dom;

/// Browser-side handle around a [`FocusTrap`] of DOM elements.
///
/// The trap state is stored locally because DOM handles cannot leave the
/// main thread.
#[derive(Clone, Copy)]
pub struct FocusTrapHandle {
    trap: StoredValue<FocusTrap<HtmlElement>, LocalStorage>,
}

impl FocusTrapHandle {
    pub fn new() -> Self {
        Self {
            trap: StoredValue::new_local(FocusTrap::new()),
        }
    }

    /// Capture `handles` and focus the first one.
    ///
    /// Does nothing if the trap is already active.
    pub fn activate(&self, handles: Vec<HtmlElement>) {
        if let Some(first) = self.trap.try_update_value(|t| t.activate(handles)).flatten() {
            dom::focus(&first);
        }
    }

    pub fn deactivate(&self) {
        self.trap.update_value(|t| t.deactivate());
    }

    /// Keydown handler: wraps Tab / Shift+Tab at the ends of the snapshot.
    ///
    /// Elements that have left the document are dropped first, so replacing
    /// the dialog content never leaves the cycle without an end.
    pub fn handle_keydown(&self, ev: &KeyboardEvent) {
        if ev.key() != "Tab" {
            return;
        }
        self.trap.update_value(|t| t.retain(|h| h.is_connected()));
        let focused = dom::active_element();
        let action = self
            .trap
            .with_value(|t| t.on_tab(focused.as_ref(), ev.shift_key()));
        if let TabAction::Redirect(target) = action {
            ev.prevent_default();
            dom::focus(&target);
        }
    }
}

impl Default for FocusTrapHandle {
    fn default() -> Self {
        Self::new()
    }
}
