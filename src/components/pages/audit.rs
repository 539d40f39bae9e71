//! Growth audit page: what the audit is, what it isn't, and the intake form.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::{PageHeader, css};
use crate::components::forms::AuditForm;
use crate::components::icons as ic;
use crate::models::content::{AUDIT_IS, AUDIT_IS_NOT};

#[component]
pub fn AuditPage() -> impl IntoView {
    view! {
        <PageHeader title="Growth Audit">
            <p>"A structured look at how your growth system actually behaves."</p>
        </PageHeader>

        <section class=css::section>
            <div class=css::split>
                <div>
                    <h2 class=css::heading>"What this is"</h2>
                    <ul class=css::checklist>
                        {AUDIT_IS
                            .iter()
                            .map(|line| {
                                view! {
                                    <li class=css::checkItem>
                                        <Icon icon=ic::CHECK />
                                        <span>{*line}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div>
                    <h2 class=css::heading>"What this is not"</h2>
                    <ul class=css::checklist>
                        {AUDIT_IS_NOT
                            .iter()
                            .map(|line| {
                                view! {
                                    <li class=css::crossItem>
                                        <Icon icon=ic::CROSS />
                                        <span>{*line}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </section>

        <section class=css::section>
            <div class=css::container>
                <h2 class=css::heading>"Intake Questions"</h2>
                <p class=css::subheading>
                    "The more context you provide, the more precise the diagnosis. Detail matters."
                </p>
                <div class=css::formPanel>
                    <AuditForm />
                </div>
            </div>
        </section>

        <section class=css::closing>
            <h2 class=css::closingTitle>"Certainty is an engineered state."</h2>
            <p class=css::closingBody>"Everything else follows from there."</p>
        </section>
    }
}
