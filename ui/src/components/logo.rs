//! Themed logo for the login widget.
use crate::constants;
use crate::hooks::use_theme_tokens;
use crate::theme::TokenResolver;
use indexmap::IndexMap;
use yew::prelude::*;
use yew::virtual_dom::{VNode, VTag};

/// Layout classes for the logo container.
static CONTAINER_CLASSES: &str = "flex flex-wrap justify-widget-logo";

/// Sizing classes for the logo image.
static IMG_CLASSES: &str = "h-widget-logo w-auto object-contain object-center";

/// Properties for a [`ThemeLogo`].
#[derive(Properties, PartialEq)]
pub struct ThemeLogoProps {
    /// Fallback image url, used only when the theme does not set one.
    #[prop_or_default]
    pub image_url: Option<AttrValue>,

    /// Alt text for the logo image.
    pub alt_text: AttrValue,

    /// Additional classes merged onto the container.
    #[prop_or_default]
    pub class: Classes,

    /// Additional attributes applied to the `img` element.
    /// Attributes the component sets itself win over entries here.
    #[prop_or_default]
    pub attrs: IndexMap<&'static str, AttrValue>,
}

/// Themed logo component.
///
/// The image source and visibility come from the widget theme:
/// [`WIDGET_LOGO_URL_TOKEN`](constants::WIDGET_LOGO_URL_TOKEN) supplies the
/// url, with `image_url` as fallback, and resolving
/// [`WIDGET_LOGO_POSITION_TOKEN`](constants::WIDGET_LOGO_POSITION_TOKEN) to
/// `none` hides the logo entirely.
#[function_component(ThemeLogo)]
pub fn theme_logo(props: &ThemeLogoProps) -> Html {
    let tokens = use_theme_tokens();
    if logo_hidden(&tokens) {
        return html! {};
    }

    let src = logo_source(&tokens, props.image_url.as_ref());
    let mut img = VTag::new("img");
    for (key, value) in merged_attributes(&props.attrs, src, props.alt_text.clone()) {
        img.add_attribute(key, value);
    }

    html! {
        <div class={classes!(CONTAINER_CLASSES, props.class.clone())}>
            { VNode::from(img) }
        </div>
    }
}

/// `true` if the theme positions the logo as hidden.
fn logo_hidden(tokens: &TokenResolver) -> bool {
    tokens
        .resolve(constants::WIDGET_LOGO_POSITION_TOKEN)
        .as_deref()
        == Some(constants::WIDGET_LOGO_HIDDEN_POSITION)
}

/// Gets the image source.
///
/// # Returns
/// The themed url if the theme sets one, otherwise `fallback`.
/// `None` if neither is available.
fn logo_source(tokens: &TokenResolver, fallback: Option<&AttrValue>) -> Option<AttrValue> {
    tokens
        .resolve(constants::WIDGET_LOGO_URL_TOKEN)
        .map(AttrValue::from)
        .or_else(|| fallback.cloned())
}

/// Final attribute set for the `img` element.
///
/// Caller attributes are kept in insertion order.
/// Attributes owned by the component are inserted after them and a later
/// insert wins, so `loading`, `decoding`, and `fetchpriority` can not be
/// overridden by callers.
fn merged_attributes(
    attrs: &IndexMap<&'static str, AttrValue>,
    src: Option<AttrValue>,
    alt: AttrValue,
) -> IndexMap<&'static str, AttrValue> {
    let mut merged = attrs.clone();
    merged.insert("class", AttrValue::Static(IMG_CLASSES));
    if let Some(src) = src {
        merged.insert("src", src);
    }

    merged.insert("alt", alt);
    merged.insert("loading", AttrValue::Static("eager"));
    merged.insert("decoding", AttrValue::Static("async"));
    merged.insert("fetchpriority", AttrValue::Static("high"));
    merged
}

#[cfg(test)]
#[path = "./logo_test.rs"]
mod logo_test;
