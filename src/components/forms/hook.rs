//! Reactive wrapper around the lead submission state machine.

use leptos::prelude::*;
use log::{debug, info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlFormElement;

use crate::core::{
    LeadForm, LeadKind, LeadPayload, LeadTransport, PendingSubmission, SubmissionState,
};
use crate::utils::{FormRelay, dom};

/// Submission state of one form instance.
///
/// Create it outside any `<Show>` that hides the form so the state
/// survives the form being unmounted and remounted.
#[derive(Clone, Copy)]
pub struct LeadFormHandle {
    form: RwSignal<LeadForm>,
    missing: RwSignal<Vec<&'static str>>,
}

impl LeadFormHandle {
    pub fn new(kind: LeadKind) -> Self {
        Self {
            form: RwSignal::new(LeadForm::new(kind)),
            missing: RwSignal::new(Vec::new()),
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.form.with(|f| f.state())
    }

    /// False exactly while a request is in flight.
    pub fn can_submit(&self) -> bool {
        self.form.with(|f| f.can_submit())
    }

    pub fn is_submitting(&self) -> bool {
        self.state() == SubmissionState::Submitting
    }

    pub fn is_succeeded(&self) -> bool {
        self.state() == SubmissionState::Succeeded
    }

    pub fn is_failed(&self) -> bool {
        self.state() == SubmissionState::Failed
    }

    /// Required fields left blank by the last submit attempt.
    pub fn missing(&self) -> Vec<&'static str> {
        self.missing.get()
    }

    /// Validate `form` and, if complete, send it to the relay.
    pub fn submit(&self, form: &HtmlFormElement) {
        self.submit_to(form, FormRelay::default());
    }

    /// Same as [`submit`](Self::submit) with an explicit transport.
    ///
    /// A submit while a request is in flight is dropped before any network
    /// activity.
    pub fn submit_to<T: LeadTransport + 'static>(&self, form: &HtmlFormElement, transport: T) {
        let Some(pending) = self.admit(dom::form_fields(form)) else {
            return;
        };
        let handle = *self;
        spawn_local(async move {
            handle.deliver(pending, &transport).await;
        });
    }

    /// Validation gate plus `Idle/Failed -> Submitting`.
    ///
    /// Returns `None` when required fields are blank or the form refuses
    /// another request.
    pub fn admit(&self, payload: LeadPayload) -> Option<PendingSubmission> {
        let kind = self.form.with_untracked(|f| f.kind());
        let missing = kind.missing_required(&payload);
        if !missing.is_empty() {
            debug!("{kind:?}: {} required field(s) blank", missing.len());
            self.missing.set(missing);
            return None;
        }
        self.missing.maybe_update(|m| {
            let had_missing = !m.is_empty();
            m.clear();
            had_missing
        });

        match self.form.try_update(|f| f.begin(payload))? {
            Ok(pending) => {
                info!("{kind:?}: submitting lead (attempt {})", pending.attempt());
                Some(pending)
            }
            Err(rejected) => {
                debug!("{kind:?}: submit ignored, {rejected}");
                None
            }
        }
    }

    /// Send an admitted submission and record its outcome.
    ///
    /// Returns `None` if the form was disposed while the request was in
    /// flight.
    pub async fn deliver<T: LeadTransport>(
        &self,
        pending: PendingSubmission,
        transport: &T,
    ) -> Option<SubmissionState> {
        let kind = pending.kind();
        let outcome = pending.send(transport).await;
        match &outcome {
            Ok(()) => info!("{kind:?}: lead delivered"),
            Err(e) => warn!("{kind:?}: lead submission failed: {e}"),
        }
        self.form.try_update(|f| f.resolve(&outcome))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    use super::*;
    use crate::core::error::SubmissionError;

    /// Counts requests and replays scripted outcomes, then succeeds.
    #[derive(Default)]
    struct CountingTransport {
        calls: Cell<usize>,
        outcomes: RefCell<VecDeque<Result<(), SubmissionError>>>,
    }

    impl CountingTransport {
        fn failing_once(error: SubmissionError) -> Self {
            Self {
                outcomes: RefCell::new(VecDeque::from([Err(error)])),
                ..Self::default()
            }
        }
    }

    impl LeadTransport for CountingTransport {
        async fn send(&self, _payload: &LeadPayload) -> Result<(), SubmissionError> {
            self.calls.set(self.calls.get() + 1);
            self.outcomes.borrow_mut().pop_front().unwrap_or(Ok(()))
        }
    }

    fn audit_fields() -> LeadPayload {
        [
            ("Full Name", "Ada Lovelace"),
            ("Business Name", "Engines Ltd"),
            ("Role", "Founder"),
            ("Email", "ada@example.com"),
            ("Business Model", "consultant"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_new_handle_is_idle() {
        let owner = Owner::new();
        owner.with(|| {
            let handle = LeadFormHandle::new(LeadKind::GrowthAudit);
            assert_eq!(handle.form.get_untracked().state(), SubmissionState::Idle);
            assert_eq!(handle.form.get_untracked().kind(), LeadKind::GrowthAudit);
            assert!(handle.missing.get_untracked().is_empty());
        });
    }

    #[test]
    fn test_blank_required_fields_block_submission() {
        let owner = Owner::new();
        owner.with(|| {
            let handle = LeadFormHandle::new(LeadKind::GrowthAudit);
            let mut payload = audit_fields();
            payload.insert("Email", "  ");

            assert!(handle.admit(payload).is_none());
            assert_eq!(handle.missing.get_untracked(), vec!["Email"]);
            let form = handle.form.get_untracked();
            assert_eq!(form.state(), SubmissionState::Idle);
            assert_eq!(form.attempts(), 0);

            // A complete payload clears the reported fields
            assert!(handle.admit(audit_fields()).is_some());
            assert!(handle.missing.get_untracked().is_empty());
        });
    }

    #[tokio::test]
    async fn test_double_submit_issues_one_request() {
        let owner = Owner::new();
        let handle = owner.with(|| LeadFormHandle::new(LeadKind::GrowthAudit));
        let transport = CountingTransport::default();

        let first = handle.admit(audit_fields()).expect("first submit is admitted");
        assert!(handle.admit(audit_fields()).is_none());
        assert!(!handle.form.get_untracked().can_submit());

        let state = handle.deliver(first, &transport).await;
        assert_eq!(state, Some(SubmissionState::Succeeded));
        assert_eq!(transport.calls.get(), 1);
        assert_eq!(handle.form.get_untracked().attempts(), 1);
    }

    #[tokio::test]
    async fn test_failure_then_retry_on_same_handle() {
        let owner = Owner::new();
        let handle = owner.with(|| LeadFormHandle::new(LeadKind::GrowthAudit));
        let transport = CountingTransport::failing_once(SubmissionError::Status(500));

        let pending = handle.admit(audit_fields()).unwrap();
        assert_eq!(
            handle.deliver(pending, &transport).await,
            Some(SubmissionState::Failed)
        );
        assert!(handle.form.get_untracked().can_submit());

        let retry = handle.admit(audit_fields()).unwrap();
        assert_eq!(handle.form.get_untracked().state(), SubmissionState::Submitting);
        assert_eq!(
            handle.deliver(retry, &transport).await,
            Some(SubmissionState::Succeeded)
        );
        assert_eq!(transport.calls.get(), 2);
    }

    #[tokio::test]
    async fn test_outcome_after_disposal_is_dropped() {
        let owner = Owner::new();
        let handle = owner.with(|| LeadFormHandle::new(LeadKind::GrowthAudit));
        let transport = CountingTransport::default();

        let pending = handle.admit(audit_fields()).unwrap();
        owner.cleanup();

        assert_eq!(handle.deliver(pending, &transport).await, None);
        assert_eq!(transport.calls.get(), 1);
    }
}
