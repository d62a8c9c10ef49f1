//! Get the active theme token resolver.
use crate::theme::TokenResolver;
use yew::prelude::*;

/// Hook for the active [`TokenResolver`].
///
/// # Returns
/// The resolver provided through context.
/// Falls back to the document-backed resolver if no context is set.
#[hook]
pub fn use_theme_tokens() -> TokenResolver {
    use_context::<TokenResolver>().unwrap_or_else(TokenResolver::document)
}
