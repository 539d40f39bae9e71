//! Overlay dialog host.
//!
//! Renders a backdrop plus a centered dialog while `open` is true and owns
//! the keyboard behavior of the overlay:
//! - Escape and backdrop clicks call `on_close`
//! - Tab / Shift+Tab cycle through the dialog's focusable elements
//!
//! The focusable elements are not discovered from the DOM. The dialog
//! content hands them over through `focusables`, and the host prepends its
//! own close button. The list is captured once per opening and elements
//! that leave the document are pruned on the next Tab.

mod hook;

pub use hook::FocusTrapHandle;

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use web_sys::HtmlElement;

use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/modal/modal.module.css");

#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<()>,
    /// Focusable elements of the dialog content, in tab order.
    focusables: Callback<(), Vec<HtmlElement>>,
    /// Accessible name of the dialog.
    #[prop(into)]
    label: String,
    children: ChildrenFn,
) -> impl IntoView {
    let trap = FocusTrapHandle::new();
    let dialog_ref = NodeRef::<leptos::html::Div>::new();
    let close_ref = NodeRef::<leptos::html::Button>::new();

    // Trap is active exactly while the dialog is open and mounted
    Effect::new(move || {
        let is_open = open.get();
        let mounted = dialog_ref.get().is_some();
        if is_open && mounted {
            let mut handles: Vec<HtmlElement> = Vec::new();
            if let Some(button) = close_ref.get_untracked() {
                handles.push(button.into());
            }
            handles.extend(focusables.run(()));
            trap.activate(handles);
        } else if !is_open {
            trap.deactivate();
        }
    });

    let handle_keydown = move |ev: ev::KeyboardEvent| match ev.key().as_str() {
        "Escape" => {
            ev.prevent_default();
            on_close.run(());
        }
        "Tab" => trap.handle_keydown(&ev),
        _ => {}
    };

    view! {
        <Show when=move || open.get()>
            <div class=css::overlay on:click=move |_| on_close.run(()) on:keydown=handle_keydown>
                <div class=css::backdrop></div>
                <div
                    node_ref=dialog_ref
                    class=css::dialog
                    role="dialog"
                    aria-modal="true"
                    aria-label=label.clone()
                    on:click=|ev: ev::MouseEvent| ev.stop_propagation()
                >
                    <button
                        node_ref=close_ref
                        class=css::close
                        aria-label="Close modal"
                        on:click=move |_| on_close.run(())
                    >
                        <Icon icon=ic::CLOSE />
                    </button>
                    <div class=css::body>{children()}</div>
                </div>
            </div>
        </Show>
    }
}
