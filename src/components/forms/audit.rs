//! Growth audit intake form.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use super::{FormStatus, FormSuccess, LeadFormHandle, field_id};
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::{LeadKind, ModalId};
use crate::models::content::{AUDIT_QUESTIONS, BUSINESS_MODELS};

stylance::import_crate_style!(css, "src/components/forms/forms.module.css");

const FORM: &str = "audit";

/// Intake form for the growth audit.
///
/// Owns its own [`LeadFormHandle`]; the confirmation replaces the form once
/// the lead is delivered.
#[component]
pub fn AuditForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let handle = LeadFormHandle::new(LeadKind::GrowthAudit);
    let form_ref = NodeRef::<leptos::html::Form>::new();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(form) = form_ref.get_untracked() {
            handle.submit(&form);
        }
    };
    let open_call = move |_: ev::MouseEvent| ctx.open_modal(ModalId::StrategyCall);

    view! {
        <Show
            when=move || handle.is_succeeded()
            fallback=move || view! {
                <form node_ref=form_ref class=css::form on:submit=on_submit>
                    <h3 class=css::section>"// 01. IDENTITY"</h3>
                    <div class=css::grid>
                        <TextField form=FORM name="Full Name" label="Full Name" placeholder="John Doe" />
                        <TextField form=FORM name="Business Name" label="Business Name" placeholder="Acme Inc." />
                        <TextField
                            form=FORM
                            name="Role"
                            label="Your Role in the Business"
                            placeholder="Founder, CEO, Growth Head..."
                        />
                        <TextField
                            form=FORM
                            name="Email"
                            label="Email Address"
                            placeholder="john@acme.com"
                            kind="email"
                        />
                    </div>
                    <div class=css::field>
                        <label class=css::label for=field_id(FORM, "Business Model")>
                            "Primary Business Model"
                        </label>
                        <select id=field_id(FORM, "Business Model") name="Business Model" required class=css::input>
                            <option value="" disabled selected>"Select Model..."</option>
                            {BUSINESS_MODELS
                                .iter()
                                .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                                .collect_view()}
                        </select>
                    </div>

                    <div class=css::divider></div>

                    <h3 class=css::section>"// 02. DIAGNOSTICS"</h3>
                    <DiagnosticQuestions />

                    <div class=css::divider></div>

                    <p class=css::notice>
                        <strong>"Confidentiality Protocol: "</strong>
                        "Your system data is reviewed only by senior architects. We do not share logic with competitors."
                    </p>
                    <button
                        type="submit"
                        class=css::submit
                        disabled=move || !handle.can_submit()
                    >
                        {move || {
                            if handle.is_submitting() {
                                "Submitting securely..."
                            } else {
                                "Submit for Review"
                            }
                        }}
                    </button>
                    <FormStatus handle=handle />
                    <p class=css::fine>"Limited audit slots available per week."</p>
                    <button type="button" class=css::link on:click=open_call>
                        "Prefer to skip the audit? Request a Direct Strategy Call"
                    </button>
                </form>
            }
        >
            <FormSuccess
                title="Audit Request Received"
                message="Thank you for providing those details. We will review your context and reach out shortly if we see a fit."
            />
            <button type="button" class=css::link on:click=open_call>
                "Have more to add? Request a Call "
                <Icon icon=ic::ARROW_RIGHT />
            </button>
        </Show>
    }
}

#[component]
fn DiagnosticQuestions() -> impl IntoView {
    AUDIT_QUESTIONS
        .iter()
        .map(|q| {
            let id = field_id(FORM, q.field);
            view! {
                <div class=css::field>
                    <label class=css::question for=id.clone()>{q.question}</label>
                    <div class=css::hint>{q.hint}</div>
                    <textarea
                        id=id
                        name=q.field
                        rows=q.rows.to_string()
                        class=css::input
                        placeholder=q.placeholder
                    ></textarea>
                </div>
            }
        })
        .collect_view()
}

/// Labeled single-line input.
///
/// `name` is the relay field key; the DOM id is derived from `form` and
/// `name` so two forms on one page never share ids.
#[component]
pub fn TextField(
    form: &'static str,
    name: &'static str,
    label: &'static str,
    placeholder: &'static str,
    #[prop(default = "text")] kind: &'static str,
    #[prop(default = true)] required: bool,
    #[prop(optional)] node_ref: Option<NodeRef<leptos::html::Input>>,
) -> impl IntoView {
    let node_ref = node_ref.unwrap_or_else(NodeRef::new);
    let id = field_id(form, name);
    view! {
        <div class=css::field>
            <label class=css::label for=id.clone()>{label}</label>
            <input
                node_ref=node_ref
                id=id
                name=name
                type=kind
                required=required
                class=css::input
                placeholder=placeholder
            />
        </div>
    }
}
