//! Custom hooks.
pub mod theme_tokens;

// Re-exports
pub use theme_tokens::use_theme_tokens;
