//! View router component.
//!
//! There is no URL routing: the current [`View`] lives in
//! [`AppContext`] and this component swaps the page composition when it
//! changes. Scrolling back to the top is handled by
//! [`AppContext::navigate`] after the swap is committed.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::pages::{AuditPage, HomePage, HowItWorksPage, PricingPage};
use crate::core::View;

/// Renders the page for the current view.
#[component]
pub fn ViewRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    // Memo so unrelated context updates do not rebuild the page
    let current = Memo::new(move |_| ctx.current_view());

    move || match current.get() {
        View::Home => view! { <HomePage /> }.into_any(),
        View::HowItWorks => view! { <HowItWorksPage /> }.into_any(),
        View::Pricing => view! { <PricingPage /> }.into_any(),
        View::Audit => view! { <AuditPage /> }.into_any(),
    }
}
