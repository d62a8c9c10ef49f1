//! Theme token resolution.
use crate::Result;
use std::collections::HashMap;
use std::rc::Rc;

// **********************
// *** Token Resolver ***
// **********************

type Lookup = dyn Fn(&str) -> Option<String>;

/// Resolves theme tokens to their current values.
///
/// Cheap to clone and compares by identity,
/// so it can be provided through component context.
#[derive(Clone)]
pub struct TokenResolver {
    lookup: Rc<Lookup>,
}

impl TokenResolver {
    /// Resolver backed by the computed style of the document root element.
    pub fn document() -> Self {
        Self {
            lookup: Rc::new(|token| match computed_token(token) {
                Ok(value) => value,
                Err(_) => {
                    tracing::debug!(?token, "could not read computed style");
                    None
                }
            }),
        }
    }

    /// Resolver backed by a fixed token table.
    pub fn from_values<K, V>(values: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let values = values
            .into_iter()
            .map(|(token, value)| (token.into(), value.into()))
            .collect::<HashMap<String, String>>();

        Self {
            lookup: Rc::new(move |token| values.get(token).cloned()),
        }
    }

    /// Gets the current value of a token.
    ///
    /// # Returns
    /// The trimmed value.
    /// `None` if the token is not set or its value is empty.
    pub fn resolve(&self, token: &str) -> Option<String> {
        (self.lookup)(token)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }
}

impl PartialEq for TokenResolver {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.lookup, &other.lookup)
    }
}

/// Reads a token from the computed style of the document root element.
///
/// # Returns
/// The raw property value.
/// `None` if no document is available.
///
/// # Errors
/// + If the computed style can not be read.
fn computed_token(token: &str) -> Result<Option<String>> {
    let Some(window) = web_sys::window() else {
        return Ok(None);
    };

    let Some(root) = window.document().and_then(|doc| doc.document_element()) else {
        return Ok(None);
    };

    let Some(style) = window.get_computed_style(&root)? else {
        return Ok(None);
    };

    Ok(Some(style.get_property_value(token)?))
}

#[cfg(test)]
#[path = "./tokens_test.rs"]
mod tokens_test;
