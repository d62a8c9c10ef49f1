//! Constant values.

/// Theme token holding the logo image url.
pub static WIDGET_LOGO_URL_TOKEN: &str = "--ul-theme-widget-logo-url";

/// Theme token controlling the logo placement.
pub static WIDGET_LOGO_POSITION_TOKEN: &str = "--ul-theme-widget-logo-position";

/// Position value that hides the logo.
pub static WIDGET_LOGO_HIDDEN_POSITION: &str = "none";
