//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! There is no runtime configuration surface; everything here is fixed at
//! compile time.

// =============================================================================
// Application Metadata
// =============================================================================

/// Brand name, split for the two-tone wordmark.
pub const BRAND_PRIMARY: &str = "RAW";
pub const BRAND_SECONDARY: &str = "CURRENCY";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Lead Relay
// =============================================================================

/// Form relay endpoint receiving every lead submission.
pub const LEAD_ENDPOINT: &str = "https://formsubmit.co/ajax/abhinavnosnitch@gmail.com";

/// Bookkeeping fields understood by the relay.
pub mod relay_fields {
    pub const SUBJECT: &str = "_subject";
    pub const FORM_TYPE: &str = "form_type";
    pub const CAPTCHA: &str = "_captcha";
    pub const TEMPLATE: &str = "_template";

    /// Captcha is disabled for AJAX submissions.
    pub const CAPTCHA_VALUE: &str = "false";
    /// Notification e-mails are rendered as a table.
    pub const TEMPLATE_VALUE: &str = "table";
}

// =============================================================================
// Navigation Chrome
// =============================================================================

/// Scroll offset (CSS px) above which the navigation bar turns compact.
pub const COMPACT_SCROLL_THRESHOLD: f64 = 50.0;

/// Media query matching the desktop navigation layout.
pub const DESKTOP_MEDIA_QUERY: &str = "(min-width: 768px)";

/// Delay before the floating mobile call button appears.
pub const FLOATING_BUTTON_DELAY_MS: u32 = 2000;

// =============================================================================
// Gallery Layout
// =============================================================================

/// Flex weights for the expanding panel gallery.
pub mod gallery_weights {
    /// Every panel while nothing is expanded.
    pub const IDLE: f32 = 1.0;
    /// The expanded panel.
    pub const EXPANDED: f32 = 3.0;
    /// Every other panel while one is expanded.
    pub const COLLAPSED: f32 = 0.5;
}

// =============================================================================
// Theme
// =============================================================================

/// Document body styling per theme.
pub mod theme {
    pub const DARK_BODY_BACKGROUND: &str = "#000000";
    pub const LIGHT_BODY_BACKGROUND: &str = "#ffffff";
    pub const BODY_TRANSITION: &str = "background-color 1200ms ease-in-out";
}
