//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs. Every helper degrades
//! to a no-op when the API is unavailable.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlFormElement, ScrollBehavior, ScrollToOptions, Window};

use crate::config::theme::BODY_TRANSITION;
use crate::core::{LeadPayload, ThemeMode};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Smoothly scroll the window back to the top.
pub fn scroll_to_top() {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Paint `<body>` with the theme's background so overscroll areas match.
pub fn apply_body_theme(theme: ThemeMode) {
    if let Some(body) = document().and_then(|d| d.body()) {
        let style = body.style();
        let _ = style.set_property("background-color", theme.body_background());
        let _ = style.set_property("transition", BODY_TRANSITION);
    }
}

/// Focus `element`. Returns `true` on success.
pub fn focus(element: &HtmlElement) -> bool {
    element.focus().is_ok()
}

/// The element that currently has keyboard focus, if it is an HTML element.
pub fn active_element() -> Option<HtmlElement> {
    document()?
        .active_element()?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Collect every named control of `form` in document order.
///
/// Non-string entries (file inputs) are skipped.
pub fn form_fields(form: &HtmlFormElement) -> LeadPayload {
    let Ok(data) = web_sys::FormData::new_with_form(form) else {
        return LeadPayload::new();
    };
    let Ok(Some(entries)) = js_sys::try_iter(&data.entries()) else {
        return LeadPayload::new();
    };

    entries
        .flatten()
        .filter_map(|entry| {
            let pair = entry.dyn_into::<js_sys::Array>().ok()?;
            Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
        })
        .collect()
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn element<T: JsCast>(tag: &str) -> T {
        document()
            .and_then(|d| d.create_element(tag).ok())
            .and_then(|e| e.dyn_into::<T>().ok())
            .expect("browser document")
    }

    #[wasm_bindgen_test]
    fn test_form_fields_in_document_order() {
        let form: HtmlFormElement = element("form");
        form.set_inner_html(
            r#"<input name="Full Name" value="Ada">
               <input name="Email" value="ada@example.com">
               <textarea name="Goal">More calls</textarea>"#,
        );

        let payload = form_fields(&form);
        let names: Vec<_> = payload.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["Full Name", "Email", "Goal"]);
        assert_eq!(payload.get("Goal"), Some("More calls"));
    }

    #[wasm_bindgen_test]
    fn test_apply_body_theme() {
        apply_body_theme(ThemeMode::Light);
        let body = document().and_then(|d| d.body()).expect("body");
        let color = body.style().get_property_value("background-color").unwrap_or_default();
        assert_eq!(color, "rgb(255, 255, 255)");
    }
}
