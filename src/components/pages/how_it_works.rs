//! "How It Works" page: positioning cards and the delivery process.

use leptos::prelude::*;

use super::{AuditButton, PageHeader, css};
use crate::models::content::PROCESS_STEPS;

const BELIEFS: &[(&str, &[&str])] = &[
    (
        "This isn't a growth problem",
        &[
            "Most coaches already know how to coach. They've put in the reps. They've refined their offer.",
            "What breaks is everything wrapped around the work.",
            "Traffic comes in, but nothing connects cleanly. Leads show interest, then stall. Tools pile up.",
        ],
    ),
    (
        "Ownership changes everything",
        &[
            "Most setups split responsibility. Ads live with one person. Funnels with another.",
            "When something underperforms, fixes stay partial.",
            "One team owns the full system, from first click to booked call.",
        ],
    ),
    (
        "Why this works",
        &[
            "Growth does not fail because people are lazy or uninformed. It fails because responsibility is split.",
            "When one team owns the entire system, momentum becomes easier to create and easier to keep.",
        ],
    ),
];

#[component]
pub fn HowItWorksPage() -> impl IntoView {
    view! {
        <PageHeader title="The System">
            <p>"We don't sell tactics. We run the system."</p>
            <AuditButton />
        </PageHeader>

        <section class=css::section>
            <div class=css::cards>
                {BELIEFS
                    .iter()
                    .map(|(title, paragraphs)| {
                        view! {
                            <article class=css::card>
                                <h2 class=css::cardTitle>{*title}</h2>
                                {paragraphs
                                    .iter()
                                    .map(|p| view! { <p class=css::cardBody>{*p}</p> })
                                    .collect_view()}
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section class=css::section>
            <div class=css::container>
                <h2 class=css::heading>"The Process"</h2>
                <ol class=css::steps>
                    {PROCESS_STEPS
                        .iter()
                        .enumerate()
                        .map(|(i, step)| {
                            view! {
                                <li class=css::step>
                                    <span class=css::stepIndex>{format!("{:02}", i + 1)}</span>
                                    <div>
                                        <h3 class=css::stepTitle>{step.title}</h3>
                                        <p class=css::stepBody>{step.body}</p>
                                    </div>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </div>
        </section>
    }
}
