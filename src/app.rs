//! Root application module.
//!
//! Contains the main App component, the AppContext definition and
//! application-level setup logic following Leptos conventions.

use leptos::prelude::*;
use leptos_use::use_window_scroll;
use log::debug;

use crate::components::layout::{FloatingCallButton, Footer};
use crate::components::nav::NavBar;
use crate::components::router::ViewRouter;
use crate::components::strategy::StrategyModal;
use crate::core::{ModalId, ModalManager, NavEffect, ScrollChrome, ThemeMode, View, ViewState};
use crate::utils::dom;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and available everywhere via
/// `use_context::<AppContext>()`. Every field is private: theme, current
/// view, open dialog and navigation chrome are each written only through
/// the methods below.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct AppContext {
    theme: RwSignal<ThemeMode>,
    view: RwSignal<ViewState>,
    modals: RwSignal<ModalManager>,
    chrome: RwSignal<ScrollChrome>,
}

impl AppContext {
    /// Creates a new application context with default state.
    ///
    /// - Theme: Dark
    /// - View: Home
    /// - No dialog open, mobile menu closed, full-height navigation
    pub fn new() -> Self {
        Self {
            theme: RwSignal::new(ThemeMode::default()),
            view: RwSignal::new(ViewState::new()),
            modals: RwSignal::new(ModalManager::new()),
            chrome: RwSignal::new(ScrollChrome::new()),
        }
    }

    // --- Theme ---

    pub fn theme(&self) -> ThemeMode {
        self.theme.get()
    }

    pub fn is_dark(&self) -> bool {
        self.theme.with(|t| t.is_dark())
    }

    pub fn toggle_theme(&self) {
        self.theme.update(|t| *t = t.toggled());
    }

    // --- Views ---

    pub fn current_view(&self) -> View {
        self.view.with(|v| v.current())
    }

    /// Switch the main content to `view`, then scroll to the top.
    pub fn navigate(&self, view: View) {
        debug!("navigate: {view}");
        if let Some(NavEffect::ScrollToTop) = self.view.try_update(|v| v.navigate(view)) {
            dom::scroll_to_top();
        }
    }

    // --- Dialogs ---

    pub fn is_modal_open(&self, id: ModalId) -> bool {
        self.modals.with(|m| m.is_open(id))
    }

    /// Whether any dialog is open.
    pub fn has_open_modal(&self) -> bool {
        self.modals.with(|m| m.any_open())
    }

    /// Open `id`. Callers must not open a second dialog while one is shown.
    pub fn open_modal(&self, id: ModalId) {
        self.modals.maybe_update(|m| {
            let transition = m.open(id);
            debug!("modal: {transition:?}");
            transition.changed()
        });
    }

    pub fn close_modal(&self, id: ModalId) {
        self.modals.maybe_update(|m| {
            let transition = m.close(id);
            debug!("modal: {transition:?}");
            transition.changed()
        });
    }

    // --- Navigation chrome ---

    pub fn is_compact(&self) -> bool {
        self.chrome.with(|c| c.is_compact())
    }

    pub fn is_menu_open(&self) -> bool {
        self.chrome.with(|c| c.is_mobile_menu_open())
    }

    pub fn toggle_menu(&self) {
        self.chrome.update(|c| c.toggle_menu());
    }

    pub fn close_menu(&self) {
        self.chrome.maybe_update(|c| c.close_menu());
    }

    /// Feed a new window scroll offset. Only notifies when the compact flag
    /// flips or the mobile menu gets closed.
    pub fn observe_scroll(&self, offset: f64) {
        self.chrome.maybe_update(|c| c.observe(offset).changed());
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Keeps `<body>` in sync with the theme
/// - Feeds window scroll offsets into the navigation chrome
/// - Renders navigation, the current view, footer and dialogs
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    Effect::new(move || dom::apply_body_theme(ctx.theme()));

    let (_, scroll_y) = use_window_scroll();
    Effect::new(move || ctx.observe_scroll(scroll_y.get()));

    view! {
        <div class=move || format!("site {}", ctx.theme().class_name())>
            <NavBar />
            <main>
                <ViewRouter />
            </main>
            <Footer />
            <StrategyModal />
            <FloatingCallButton />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggle_leaves_other_state_alone() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppContext::new();
            ctx.open_modal(ModalId::StrategyCall);
            let view_before = ctx.view.get_untracked();
            let chrome_before = ctx.chrome.get_untracked();

            assert!(ctx.is_dark());
            ctx.toggle_theme();
            assert_eq!(ctx.theme.get_untracked(), ThemeMode::Light);
            ctx.toggle_theme();
            assert_eq!(ctx.theme.get_untracked(), ThemeMode::Dark);

            assert_eq!(ctx.view.get_untracked(), view_before);
            assert_eq!(ctx.chrome.get_untracked(), chrome_before);
            assert!(ctx.modals.with_untracked(|m| m.is_open(ModalId::StrategyCall)));
        });
    }

    #[test]
    fn test_scroll_closes_menu_and_compacts() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppContext::new();
            ctx.toggle_menu();
            assert!(ctx.chrome.with_untracked(|c| c.is_mobile_menu_open()));

            ctx.observe_scroll(120.0);
            let chrome = ctx.chrome.get_untracked();
            assert!(chrome.is_compact());
            assert!(!chrome.is_mobile_menu_open());
        });
    }

    #[test]
    fn test_modal_open_close() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppContext::new();
            ctx.close_modal(ModalId::StrategyCall);
            assert!(!ctx.modals.with_untracked(|m| m.any_open()));

            ctx.open_modal(ModalId::StrategyCall);
            assert_eq!(
                ctx.modals.with_untracked(|m| m.active()),
                Some(ModalId::StrategyCall)
            );
            ctx.close_modal(ModalId::StrategyCall);
            assert_eq!(ctx.modals.with_untracked(|m| m.active()), None);
        });
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_app_renders_site_shell() {
        let document = dom::document().expect("browser document");
        let host: web_sys::HtmlElement = document
            .create_element("div")
            .ok()
            .and_then(|e| e.dyn_into().ok())
            .expect("host element");
        document.body().expect("body").append_child(&host).expect("append host");

        let handle = leptos::mount::mount_to(host.clone(), App);

        let site = host.query_selector(".site").ok().flatten().expect("site root");
        assert!(site.class_name().contains("theme-dark"));
        assert!(site.query_selector("main").ok().flatten().is_some());
        drop(handle);
    }
}
