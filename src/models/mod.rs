//! Static content models for the site.
//!
//! - [`GalleryPanel`], [`PanelId`] - "What We Handle" gallery tiles
//! - [`content`] - Pricing tiers, process steps and audit copy

pub mod content;
mod gallery;

pub use gallery::{GalleryPanel, PanelId, TOOLKIT_PANELS};
