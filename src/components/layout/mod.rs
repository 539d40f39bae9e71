//! Page chrome below the navigation bar: footer and floating call button.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{BRAND_PRIMARY, BRAND_SECONDARY, FLOATING_BUTTON_DELAY_MS};
use crate::core::ModalId;
use crate::models::content::FOOTER_COLUMNS;

stylance::import_crate_style!(css, "src/components/layout/layout.module.css");

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class=css::footer>
            <div class=css::top>
                <div class=css::about>
                    <h4 class=css::brand>
                        {BRAND_PRIMARY}
                        <span class=css::brandMuted>{BRAND_SECONDARY}</span>
                    </h4>
                    <p class=css::tagline>
                        "Building the automated backbone for the next generation of digital enterprise."
                    </p>
                    <div class=css::status>
                        <span class=css::statusDot></span>
                        "ALL SYSTEMS OPERATIONAL"
                    </div>
                </div>
                <div class=css::columns>
                    {FOOTER_COLUMNS
                        .iter()
                        .map(|(heading, links)| {
                            view! {
                                <div>
                                    <h5 class=css::columnHeading>{*heading}</h5>
                                    <ul class=css::columnLinks>
                                        {links
                                            .iter()
                                            .map(|link| view! { <li><a href="#">{*link}</a></li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class=css::bottom>
                <p>"\u{a9} RawCurrency Inc. // EST. 2024"</p>
            </div>
        </footer>
    }
}

/// Round "strategy call" button pinned to the bottom right on small
/// screens. Appears after a short delay.
#[component]
pub fn FloatingCallButton() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let visible = RwSignal::new(false);

    spawn_local(async move {
        TimeoutFuture::new(FLOATING_BUTTON_DELAY_MS).await;
        // Root may be gone if the app was unmounted meanwhile
        let _ = visible.try_set(true);
    });

    view! {
        <Show when=move || visible.get() && !ctx.has_open_modal()>
            <button
                class=css::floating
                aria-label="Request a strategy call"
                on:click=move |_| ctx.open_modal(ModalId::StrategyCall)
            >
                <Icon icon=ic::MESSAGE />
            </button>
        </Show>
    }
}
