//! Landing page.

use leptos::prelude::*;

use super::{AuditButton, css};
use crate::app::AppContext;
use crate::components::toolkit::Toolkit;
use crate::core::View;

const PROBLEMS: &[&str] = &[
    "Leads leaking from broken funnels.",
    "Vendors pointing fingers when ads stall.",
    "Follow-ups that depend on someone remembering.",
];

const PRICING_PRINCIPLES: &[&str] = &[
    "We don't sell packages.",
    "We don't price by hours.",
    "And we don't guess.",
];

const TICKER: &str = "SLEEP WHILE YOU SCALE \u{2022} OWN YOUR FREEDOM \u{2022} THE FUTURE IS AUTOMATED \u{2022} BUILD SYSTEMS \u{2022} BREAK RECORDS";

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    view! {
        <section id=View::Home.id() class=css::hero>
            <span class=css::heroEyebrow>"SYSTEM ARCHITECTURE v2 LIVE"</span>
            <h1 class=css::heroTitle>
                "Human " <span class=css::heroTitleMuted>"Friction."</span>
            </h1>
            <p class=css::heroLede>
                "We build the automated infrastructure that powers high-ticket empires. Zero management. Pure throughput."
            </p>
            <div class=css::ctaRow>
                <AuditButton />
                <button class=css::ghost on:click=move |_| ctx.navigate(View::HowItWorks)>
                    "See How It Works"
                </button>
            </div>
        </section>

        <section class=css::section>
            <div class=css::container>
                <h2 class=css::heading>"You already know how to coach."</h2>
                <p class=css::subheading>"The problem is everything wrapped around it."</p>
                <div class=css::problems>
                    {PROBLEMS.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                </div>
            </div>
        </section>

        <div class=css::marquee aria-hidden="true">
            <span>{TICKER}</span>
        </div>

        <Toolkit />

        <section class=css::section>
            <div class=css::container>
                <h2 class=css::heading>"Pricing"</h2>
                <p class=css::subheading>"What ownership looks like in practice"</p>
                <p class=css::prose>
                    "Pricing reflects the level of responsibility we take on, not a bundle of tasks."
                </p>
                <ul class=css::list>
                    {PRICING_PRINCIPLES.iter().map(|p| view! { <li>{*p}</li> }).collect_view()}
                </ul>
                <button class=css::ghost on:click=move |_| ctx.navigate(View::Pricing)>
                    "View Pricing"
                </button>
            </div>
        </section>

        <section class=css::closing>
            <h2 class=css::closingTitle>"Ready for " <span class=css::heroTitleMuted>"Hypergrowth?"</span></h2>
            <p class=css::closingBody>
                "Stop managing your business manually. Build a system that captures revenue while you sleep."
            </p>
            <AuditButton label="Initialize Strategy Sequence" />
        </section>
    }
}
