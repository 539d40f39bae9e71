//! Core interaction logic for the site.
//!
//! Every controller here is a plain state machine with no browser
//! dependency, so it can be unit tested natively:
//! - [`ViewState`] current page and navigation effects
//! - [`ModalManager`] and [`FocusTrap`] dialog lifecycle and keyboard focus
//! - [`ScrollChrome`] compact navigation and mobile menu dismissal
//! - [`Gallery`] expanding panel selection and flex weights
//! - [`LeadForm`] lead submission state per form

pub mod chrome;
pub mod error;
pub mod focus_trap;
pub mod gallery;
pub mod lead;
pub mod modal;
pub mod theme;
pub mod view;

pub use chrome::ScrollChrome;
pub use focus_trap::{FocusTrap, TabAction};
pub use gallery::Gallery;
pub use lead::{
    LeadForm, LeadKind, LeadPayload, LeadTransport, PendingSubmission, SubmissionState,
};
pub use modal::{ModalId, ModalManager};
pub use theme::ThemeMode;
pub use view::{NavEffect, View, ViewState};
