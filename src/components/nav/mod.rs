//! Navigation bar component.
//!
//! Fixed header with the wordmark, view links, theme toggle and the
//! strategy call button. Shrinks into a compact bar once the page is
//! scrolled; on narrow screens the links move into a dismissible menu.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use leptos_use::use_media_query;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{BRAND_PRIMARY, BRAND_SECONDARY, DESKTOP_MEDIA_QUERY};
use crate::core::{ModalId, View};

stylance::import_crate_style!(css, "src/components/nav/nav.module.css");

/// Top navigation bar.
#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let compact = Memo::new(move |_| ctx.is_compact());
    let menu_open = Memo::new(move |_| ctx.is_menu_open());
    let is_desktop = use_media_query(DESKTOP_MEDIA_QUERY);

    let go = move |view: View| {
        ctx.navigate(view);
        ctx.close_menu();
    };

    let open_strategy = move |_: ev::MouseEvent| {
        ctx.open_modal(ModalId::StrategyCall);
        ctx.close_menu();
    };

    let bar_class = move || {
        if compact.get() {
            format!("{} {}", css::bar, css::barCompact)
        } else {
            css::bar.to_string()
        }
    };

    let links = move || {
        View::ALL
            .into_iter()
            .map(|target| {
                let class = move || {
                    if ctx.current_view() == target {
                        format!("{} {}", css::link, css::linkActive)
                    } else {
                        css::link.to_string()
                    }
                };
                view! {
                    <a
                        href=format!("#{}", target.id())
                        class=class
                        on:click=move |ev: ev::MouseEvent| {
                            ev.prevent_default();
                            go(target);
                        }
                    >
                        {target.label()}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class=bar_class>
            <div class=css::inner>
                <a
                    href="#home"
                    class=css::brand
                    on:click=move |ev: ev::MouseEvent| {
                        ev.prevent_default();
                        go(View::Home);
                    }
                >
                    {BRAND_PRIMARY}
                    <span class=css::brandMuted>{BRAND_SECONDARY}</span>
                </a>

                <div class=css::links>{links}</div>

                <div class=css::actions>
                    <ThemeToggle />
                    <button class=css::cta on:click=open_strategy>"Strategy Call"</button>
                </div>

                <div class=css::mobileActions>
                    <ThemeToggle />
                    <button
                        class=css::iconButton
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| ctx.toggle_menu()
                    >
                        {move || if menu_open.get() {
                            view! { <Icon icon=ic::CLOSE /> }.into_any()
                        } else {
                            view! { <Icon icon=ic::MENU /> }.into_any()
                        }}
                    </button>
                </div>
            </div>
        </nav>

        <Show when=move || menu_open.get() && !is_desktop.get()>
            <div class=css::backdrop on:click=move |_| ctx.close_menu()></div>
            <div class=css::mobileMenu>
                {links}
                <button class=css::cta on:click=open_strategy>"Strategy Call"</button>
            </div>
        </Show>
    }
}

/// Sun/moon button flipping the site theme.
#[component]
fn ThemeToggle() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    view! {
        <button
            class=css::iconButton
            aria-label="Toggle Theme"
            on:click=move |_| ctx.toggle_theme()
        >
            {move || if ctx.is_dark() {
                view! { <Icon icon=ic::SUN /> }.into_any()
            } else {
                view! { <Icon icon=ic::MOON /> }.into_any()
            }}
        </button>
    }
}
