//! Strategy call dialog.
//!
//! The "Conversation Context" form lives inside the [`Modal`] host. Its
//! submission state is created here, outside the dialog's `<Show>`, so a
//! delivered request keeps showing its confirmation when the dialog is
//! reopened.

use leptos::{ev, prelude::*};
use web_sys::HtmlElement;

use crate::app::AppContext;
use crate::components::forms::{FormStatus, FormSuccess, LeadFormHandle, TextField, field_id};
use crate::components::modal::Modal;
use crate::core::{LeadKind, ModalId, View};

stylance::import_crate_style!(css, "src/components/forms/forms.module.css");
stylance::import_crate_style!(local, "src/components/strategy/strategy.module.css");

const FORM: &str = "strategy";
const BOTTLENECKS: &str = "Current Bottlenecks / Breakdowns";

#[component]
pub fn StrategyModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let handle = LeadFormHandle::new(LeadKind::StrategyCall);

    let form_ref = NodeRef::<leptos::html::Form>::new();
    let name_ref = NodeRef::<leptos::html::Input>::new();
    let business_ref = NodeRef::<leptos::html::Input>::new();
    let position_ref = NodeRef::<leptos::html::Input>::new();
    let email_ref = NodeRef::<leptos::html::Input>::new();
    let phone_ref = NodeRef::<leptos::html::Input>::new();
    let bottlenecks_ref = NodeRef::<leptos::html::Textarea>::new();
    let submit_ref = NodeRef::<leptos::html::Button>::new();
    let audit_ref = NodeRef::<leptos::html::Button>::new();

    // Tab order of the form; empty once the confirmation replaced it
    let focusables = Callback::new(move |()| {
        let mut handles: Vec<HtmlElement> = Vec::new();
        for input in [name_ref, business_ref, position_ref, email_ref, phone_ref] {
            handles.extend(input.get_untracked().map(HtmlElement::from));
        }
        handles.extend(bottlenecks_ref.get_untracked().map(HtmlElement::from));
        for button in [submit_ref, audit_ref] {
            handles.extend(button.get_untracked().map(HtmlElement::from));
        }
        handles
    });

    let close = Callback::new(move |()| ctx.close_modal(ModalId::StrategyCall));
    let open = Signal::derive(move || ctx.is_modal_open(ModalId::StrategyCall));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(form) = form_ref.get_untracked() {
            handle.submit(&form);
        }
    };
    let go_to_audit = move |_: ev::MouseEvent| {
        ctx.close_modal(ModalId::StrategyCall);
        ctx.navigate(View::Audit);
    };

    view! {
        <Modal open=open on_close=close focusables=focusables label="Conversation Context">
            <h2 class=local::title>"Conversation Context"</h2>
            <p class=local::lede>
                "This is not a generic call. We require context to ensure the conversation is useful."
            </p>
            <Show
                when=move || handle.is_succeeded()
                fallback=move || view! {
                    <form node_ref=form_ref class=css::form on:submit=on_submit>
                        <div class=local::pair>
                            <TextField
                                form=FORM
                                name="Full Name"
                                label="Full Name"
                                placeholder="Full Name"
                                node_ref=name_ref
                            />
                            <TextField
                                form=FORM
                                name="Business Name"
                                label="Business Name"
                                placeholder="Business Name"
                                node_ref=business_ref
                            />
                        </div>
                        <TextField
                            form=FORM
                            name="Position"
                            label="Position"
                            placeholder="Your Position"
                            node_ref=position_ref
                        />
                        <div class=local::pair>
                            <TextField
                                form=FORM
                                name="Email"
                                label="Email"
                                placeholder="Email Address"
                                kind="email"
                                node_ref=email_ref
                            />
                            <TextField
                                form=FORM
                                name="Contact Number"
                                label="Contact Number"
                                placeholder="Contact Number (optional)"
                                kind="tel"
                                required=false
                                node_ref=phone_ref
                            />
                        </div>
                        <div class=css::field>
                            <label class=css::label for=field_id(FORM, BOTTLENECKS)>
                                {BOTTLENECKS}
                            </label>
                            <textarea
                                node_ref=bottlenecks_ref
                                id=field_id(FORM, BOTTLENECKS)
                                name=BOTTLENECKS
                                rows="4"
                                required
                                class=css::input
                                placeholder=BOTTLENECKS
                            ></textarea>
                        </div>
                        <button
                            node_ref=submit_ref
                            type="submit"
                            class=css::submit
                            disabled=move || !handle.can_submit()
                        >
                            {move || {
                                if handle.is_submitting() { "Sending..." } else { "Request a Conversation" }
                            }}
                        </button>
                        <FormStatus handle=handle />
                        <button
                            node_ref=audit_ref
                            type="button"
                            class=css::secondary
                            on:click=go_to_audit
                        >
                            "Go to the audit for an in-depth diagnosis"
                        </button>
                        <p class=css::fine>
                            "Submitting does not guarantee a call. We review context before confirming next steps."
                        </p>
                    </form>
                }
            >
                <FormSuccess title="Request Received" message="We'll be in touch shortly." />
            </Show>
        </Modal>
    }
}
