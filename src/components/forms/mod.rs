//! Lead capture forms and their shared pieces.
//!
//! - [`LeadFormHandle`] - per-form submission state and the submit path
//! - [`AuditForm`] - long intake form on the Growth Audit page
//! - [`FormSuccess`] / [`FormStatus`] - confirmation and status lines

mod audit;
mod hook;

pub use audit::{AuditForm, TextField};
pub use hook::LeadFormHandle;

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/forms/forms.module.css");

/// DOM id for the control sending field `name` in form `form`.
///
/// Relay field names contain spaces and repeat across forms, so they are
/// slugged and prefixed: `("strategy", "Full Name")` gives
/// `strategy-full-name`.
pub fn field_id(form: &str, name: &str) -> String {
    let mut id = String::with_capacity(form.len() + name.len() + 1);
    id.push_str(form);
    let mut pending_dash = true;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash {
                id.push('-');
                pending_dash = false;
            }
            id.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    id
}

/// Confirmation shown in place of a form once its lead is delivered.
#[component]
pub fn FormSuccess(title: &'static str, message: &'static str) -> impl IntoView {
    view! {
        <div class=css::success role="status">
            <div class=css::successIcon>
                <Icon icon=ic::CHECK />
            </div>
            <h3 class=css::successTitle>{title}</h3>
            <p class=css::successMessage>{message}</p>
        </div>
    }
}

/// Validation and failure line under a form's submit button.
#[component]
pub fn FormStatus(handle: LeadFormHandle) -> impl IntoView {
    view! {
        <Show when=move || !handle.missing().is_empty()>
            <p class=css::failure role="alert">
                {move || format!("Please fill in: {}", handle.missing().join(", "))}
            </p>
        </Show>
        <Show when=move || handle.is_failed()>
            <p class=css::failure role="alert">
                "Something went wrong sending your request. Please try again."
            </p>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LeadKind;

    #[test]
    fn test_field_id_is_a_valid_html_id() {
        assert_eq!(field_id("strategy", "Full Name"), "strategy-full-name");
        assert_eq!(
            field_id("strategy", "Current Bottlenecks / Breakdowns"),
            "strategy-current-bottlenecks-breakdowns"
        );
        assert_eq!(field_id("audit", "Why Now"), "audit-why-now");
        assert!(!field_id("audit", "Business Model").contains(' '));
    }

    #[test]
    fn test_forms_never_share_ids() {
        let strategy: Vec<_> = LeadKind::StrategyCall
            .required_fields()
            .iter()
            .map(|name| field_id("strategy", name))
            .collect();
        for name in LeadKind::GrowthAudit.required_fields() {
            assert!(!strategy.contains(&field_id("audit", name)));
        }
        // Same relay name, different forms
        assert_ne!(field_id("strategy", "Email"), field_id("audit", "Email"));
    }
}
