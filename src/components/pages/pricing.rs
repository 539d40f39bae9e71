//! Pricing page.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::{AuditButton, PageHeader, css};
use crate::components::icons as ic;
use crate::models::content::{ENTRY_TIER, PRICING_GROUPS, PricingTier};

#[component]
pub fn PricingPage() -> impl IntoView {
    view! {
        <PageHeader title="Pricing">
            <p>"Pricing reflects the level of responsibility we take on, not a bundle of tasks."</p>
        </PageHeader>

        <section class=css::section>
            <div class=css::container>
                <h2 class=css::heading>"How to Start"</h2>
                <div class=css::entry>
                    <TierCard tier=ENTRY_TIER />
                    <AuditButton />
                </div>
            </div>
        </section>

        {PRICING_GROUPS
            .iter()
            .map(|group| {
                view! {
                    <section class=css::section>
                        <div class=css::container>
                            <h2 class=css::heading>{group.heading}</h2>
                            <p class=css::subheading>{group.blurb}</p>
                            <div class=css::tierGrid>
                                {group
                                    .tiers
                                    .iter()
                                    .map(|tier| view! { <TierCard tier=*tier /> })
                                    .collect_view()}
                            </div>
                        </div>
                    </section>
                }
            })
            .collect_view()}
    }
}

#[component]
fn TierCard(tier: PricingTier) -> impl IntoView {
    view! {
        <article class=css::tier>
            <h3 class=css::tierName>{tier.name}</h3>
            <p class=css::tierPrice>
                {tier.price}
                {tier.period.map(|period| view! { <span class=css::tierPeriod>" "{period}</span> })}
            </p>
            <p class=css::tierSummary>{tier.summary}</p>
            <ul class=css::tierIncludes>
                {tier
                    .includes
                    .iter()
                    .map(|item| {
                        view! {
                            <li>
                                <Icon icon=ic::CHECK />
                                <span>{*item}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <p class=css::tierNote>{tier.note}</p>
        </article>
    }
}
