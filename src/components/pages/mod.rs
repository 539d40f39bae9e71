//! Page compositions, one per [`View`](crate::core::View).
//!
//! Pages only arrange static content and wire their buttons to
//! [`AppContext`](crate::app::AppContext). They hold no state of their own
//! beyond what embedded widgets own.

mod audit;
mod home;
mod how_it_works;
mod pricing;

pub use audit::AuditPage;
pub use home::HomePage;
pub use how_it_works::HowItWorksPage;
pub use pricing::PricingPage;

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::View;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

/// Primary call to action: takes the visitor to the audit intake.
#[component]
fn AuditButton(#[prop(default = "Run My Growth Audit")] label: &'static str) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    view! {
        <button class=css::primary on:click=move |_| ctx.navigate(View::Audit)>
            {label}
            <Icon icon=ic::ARROW_RIGHT />
        </button>
    }
}

/// Centered page header shared by the inner pages.
#[component]
fn PageHeader(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class=css::hero>
            <h1 class=css::heroTitle>{title}</h1>
            <div class=css::heroLede>{children()}</div>
        </section>
    }
}
