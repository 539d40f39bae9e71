//! Lead form submission state machine.
//!
//! Each form instance owns one [`LeadForm`]. A request can only be issued
//! through the [`PendingSubmission`] that [`LeadForm::begin`] hands out, and
//! `begin` refuses while a request is in flight, so one form never has two
//! concurrent requests.
//!
//! ```text
//! Idle ──begin──▶ Submitting ──Ok──▶ Succeeded
//!                   ▲    │
//!             begin │    └──Err──▶ Failed
//!                   └──────────────────┘
//! ```

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::config::relay_fields;
use crate::core::error::{SubmissionError, SubmitRejected};

// ============================================================================
// LeadKind
// ============================================================================

/// The lead forms on the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LeadKind {
    /// Short "Conversation Context" form inside the strategy call dialog.
    StrategyCall,
    /// Long intake form on the Growth Audit page.
    GrowthAudit,
}

impl LeadKind {
    /// Subject line of the notification e-mail.
    pub fn subject(self) -> &'static str {
        match self {
            Self::StrategyCall => "New Strategy Request",
            Self::GrowthAudit => "New Growth Audit Intake",
        }
    }

    /// Form tag shown in the notification.
    pub fn form_type(self) -> &'static str {
        match self {
            Self::StrategyCall => "Big Strategy Form",
            Self::GrowthAudit => "Comprehensive Audit Intake",
        }
    }

    /// Fields that must be non-blank before submitting.
    pub fn required_fields(self) -> &'static [&'static str] {
        match self {
            Self::StrategyCall => &[
                "Full Name",
                "Business Name",
                "Position",
                "Email",
                "Current Bottlenecks / Breakdowns",
            ],
            Self::GrowthAudit => &["Full Name", "Business Name", "Role", "Email", "Business Model"],
        }
    }

    /// Relay bookkeeping fields, in the order they are sent.
    pub fn bookkeeping(self) -> [(&'static str, &'static str); 4] {
        [
            (relay_fields::SUBJECT, self.subject()),
            (relay_fields::FORM_TYPE, self.form_type()),
            (relay_fields::CAPTCHA, relay_fields::CAPTCHA_VALUE),
            (relay_fields::TEMPLATE, relay_fields::TEMPLATE_VALUE),
        ]
    }

    /// Required fields that are missing or blank in `payload`.
    pub fn missing_required(self, payload: &LeadPayload) -> Vec<&'static str> {
        self.required_fields()
            .iter()
            .copied()
            .filter(|name| payload.get(name).is_none_or(|v| v.trim().is_empty()))
            .collect()
    }
}

// ============================================================================
// LeadPayload
// ============================================================================

/// Ordered field name/value pairs, serialized as one flat JSON object.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadPayload {
    fields: Vec<(String, String)>,
}

impl LeadPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing an existing value with the same name in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LeadPayload {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut payload = Self::new();
        for (name, value) in iter {
            payload.insert(name, value);
        }
        payload
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for LeadPayload {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

impl Serialize for LeadPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

// ============================================================================
// Transport
// ============================================================================

/// Outbound channel for lead payloads.
///
/// Implementations send exactly one request per call and do not retry.
#[allow(async_fn_in_trait)]
pub trait LeadTransport {
    async fn send(&self, payload: &LeadPayload) -> Result<(), SubmissionError>;
}

// ============================================================================
// LeadForm
// ============================================================================

/// Per-form submission status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Submission state machine for one form instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LeadForm {
    kind: LeadKind,
    state: SubmissionState,
    attempts: u32,
}

impl LeadForm {
    pub fn new(kind: LeadKind) -> Self {
        Self {
            kind,
            state: SubmissionState::Idle,
            attempts: 0,
        }
    }

    pub fn kind(&self) -> LeadKind {
        self.kind
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Number of requests issued so far.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// The submit button is disabled exactly while a request is in flight.
    pub fn can_submit(&self) -> bool {
        matches!(self.state, SubmissionState::Idle | SubmissionState::Failed)
    }

    /// Move to `Submitting` and hand out the single request for this attempt.
    ///
    /// Bookkeeping fields for the form's kind are added to `payload`.
    pub fn begin(&mut self, mut payload: LeadPayload) -> Result<PendingSubmission, SubmitRejected> {
        match self.state {
            SubmissionState::Submitting => return Err(SubmitRejected::InFlight),
            SubmissionState::Succeeded => return Err(SubmitRejected::AlreadySubmitted),
            SubmissionState::Idle | SubmissionState::Failed => {}
        }
        payload.extend(self.kind.bookkeeping());
        self.state = SubmissionState::Submitting;
        self.attempts += 1;
        Ok(PendingSubmission {
            kind: self.kind,
            payload,
            attempt: self.attempts,
        })
    }

    /// Apply the outcome of the in-flight request.
    ///
    /// Outcomes arriving when nothing is in flight are ignored.
    pub fn resolve(&mut self, outcome: &Result<(), SubmissionError>) -> SubmissionState {
        if self.state == SubmissionState::Submitting {
            self.state = match outcome {
                Ok(()) => SubmissionState::Succeeded,
                Err(_) => SubmissionState::Failed,
            };
        }
        self.state
    }
}

/// A request that has been admitted by [`LeadForm::begin`] but not sent.
#[derive(Debug)]
#[must_use = "a pending submission does nothing until sent"]
pub struct PendingSubmission {
    kind: LeadKind,
    payload: LeadPayload,
    attempt: u32,
}

impl PendingSubmission {
    pub fn kind(&self) -> LeadKind {
        self.kind
    }

    pub fn payload(&self) -> &LeadPayload {
        &self.payload
    }

    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    /// Issue the request. Consumes the submission so it is sent once.
    pub async fn send<T: LeadTransport>(self, transport: &T) -> Result<(), SubmissionError> {
        transport.send(&self.payload).await
    }
}
