//! "What We Handle" expanding panel gallery.
//!
//! Hovering or clicking a panel expands it and collapses its siblings;
//! leaving the gallery returns every panel to equal width. Panel order
//! never changes and only flex weights animate.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::core::Gallery;
use crate::models::{GalleryPanel, TOOLKIT_PANELS};

stylance::import_crate_style!(css, "src/components/toolkit/toolkit.module.css");

#[component]
pub fn Toolkit() -> impl IntoView {
    let gallery = RwSignal::new(Gallery::with_first_expanded(
        TOOLKIT_PANELS.iter().map(|p| p.id),
    ));

    view! {
        <section class=css::section>
            <div class=css::header>
                <span class=css::eyebrow>"Capabilities"</span>
                <h2 class=css::heading>"What We Handle"</h2>
            </div>
            <div
                class=css::gallery
                on:mouseleave=move |_| gallery.maybe_update(|g| g.pointer_leave())
            >
                {TOOLKIT_PANELS
                    .iter()
                    .map(|panel| view! { <Panel panel=panel gallery=gallery /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Panel(panel: &'static GalleryPanel, gallery: RwSignal<Gallery>) -> impl IntoView {
    let id = panel.id;
    let expanded = Memo::new(move |_| gallery.with(|g| g.is_expanded(id)));
    let weight = move || gallery.with(|g| g.weight(id)).to_string();

    view! {
        <div
            class=move || {
                if expanded.get() {
                    format!("{} {}", css::panel, css::panelExpanded)
                } else {
                    css::panel.to_string()
                }
            }
            style:flex-grow=weight
            on:mouseenter=move |_| gallery.maybe_update(|g| g.pointer_enter(id))
            on:click=move |_| gallery.maybe_update(|g| g.click(id))
        >
            <img class=css::image src=panel.image alt=panel.title loading="lazy" />
            <div class=css::shade></div>
            <span class=css::ordinal>{id.ordinal()}</span>
            <div class=css::content>
                <div class=css::icon>
                    <Icon icon=panel.icon />
                </div>
                <h3 class=css::title>{panel.title}</h3>
                <Show when=move || expanded.get()>
                    <div class=css::details>
                        <p class=css::subtitle>{panel.subtitle}</p>
                        <p class=css::description>{panel.description}</p>
                        <div class=css::tags>
                            {panel
                                .tags
                                .iter()
                                .map(|tag| view! { <span class=css::tag>{*tag}</span> })
                                .collect_view()}
                        </div>
                    </div>
                </Show>
            </div>
        </div>
    }
}
