//! Logical page selection.
//!
//! The site has no URL routing. Exactly one [`View`] is current at a time
//! and [`ViewState::navigate`] is the only way to change it.

use std::fmt;
use std::str::FromStr;

use crate::core::error::NavigationError;

/// Top-level pages rendered in the main content area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    Home,
    HowItWorks,
    Pricing,
    Audit,
}

impl View {
    /// All views in navigation order.
    pub const ALL: [View; 4] = [View::Home, View::HowItWorks, View::Pricing, View::Audit];

    /// Stable identifier used in anchors and logs.
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::HowItWorks => "how-it-works",
            Self::Pricing => "pricing",
            Self::Audit => "audit",
        }
    }

    /// Label shown in the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::HowItWorks => "How It Works",
            Self::Pricing => "Pricing",
            Self::Audit => "Run Audit",
        }
    }

    /// Resolve a view from its identifier.
    pub fn from_id(id: &str) -> Result<Self, NavigationError> {
        let id = id.trim_start_matches('#');
        Self::ALL
            .into_iter()
            .find(|v| v.id() == id)
            .ok_or_else(|| NavigationError::UnknownView(id.to_string()))
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for View {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s)
    }
}

/// Side effect requested by a navigation, run after the view swap commits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEffect {
    /// Smooth-scroll the window back to the top.
    ScrollToTop,
}

/// Current view holder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    current: View,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> View {
        self.current
    }

    /// Switch to `view`.
    ///
    /// Navigating to the already-current view still scrolls to the top,
    /// matching a click on the active nav item.
    pub fn navigate(&mut self, view: View) -> NavEffect {
        self.current = view;
        NavEffect::ScrollToTop
    }
}
