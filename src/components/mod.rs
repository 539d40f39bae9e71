//! UI components built with Leptos.
//!
//! - [`router`] - Swaps the page for the current view (main entry point)
//! - [`nav`] - Navigation bar, theme toggle and mobile menu
//! - [`pages`] - One composition per view
//! - [`toolkit`] - Expanding panel gallery
//! - [`modal`] - Dialog host with focus trapping
//! - [`strategy`] - Strategy call dialog
//! - [`forms`] - Lead capture forms
//! - [`layout`] - Footer and floating call button
//! - [`icons`] - Centralized icon definitions (change icon set here)

pub mod forms;
pub mod icons;
pub mod layout;
pub mod modal;
pub mod nav;
pub mod pages;
pub mod router;
pub mod strategy;
pub mod toolkit;

pub use router::ViewRouter;
