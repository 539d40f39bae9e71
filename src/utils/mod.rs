//! Browser utilities.
//!
//! Provides:
//! - [`dom`] - Window, scrolling, focus and form helpers
//! - [`FormRelay`] - HTTP transport for lead submissions

pub mod dom;
mod relay;

pub use relay::FormRelay;
