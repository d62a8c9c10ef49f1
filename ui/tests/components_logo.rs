#![cfg(target_arch = "wasm32")]
//! Tests for `components/logo`.
use indexmap::IndexMap;
use lumen_ui::components::ThemeLogo;
use lumen_ui::constants;
use lumen_ui::theme::TokenResolver;
use std::time::Duration;
use wasm_bindgen_test::*;
use yew::prelude::*;
wasm_bindgen_test_configure!(run_in_browser);

// *****************
// *** ThemeLogo ***
// *****************

#[wasm_bindgen_test]
async fn logo_should_render_the_fallback_url() {
    #[function_component(App)]
    fn app() -> Html {
        let tokens =
            TokenResolver::from_values([(constants::WIDGET_LOGO_POSITION_TOKEN, "left")]);

        html! {
            <ContextProvider<TokenResolver> context={tokens}>
                <ThemeLogo image_url={"fallback.png"} alt_text={"Acme"} />
            </ContextProvider<TokenResolver>>
        }
    }

    let root = mount::<App>().await;
    let img = root
        .query_selector("img")
        .expect("could not query root")
        .expect("img should render");

    assert_eq!(Some("fallback.png".to_string()), img.get_attribute("src"));
    assert_eq!(Some("Acme".to_string()), img.get_attribute("alt"));
    assert_eq!(Some("eager".to_string()), img.get_attribute("loading"));
    assert_eq!(Some("async".to_string()), img.get_attribute("decoding"));
    assert_eq!(Some("high".to_string()), img.get_attribute("fetchpriority"));
}

#[wasm_bindgen_test]
async fn logo_should_be_hidden_when_positioned_none() {
    #[function_component(App)]
    fn app() -> Html {
        let tokens = TokenResolver::from_values([
            (constants::WIDGET_LOGO_URL_TOKEN, "https://x/logo.png"),
            (constants::WIDGET_LOGO_POSITION_TOKEN, "none"),
        ]);

        html! {
            <ContextProvider<TokenResolver> context={tokens}>
                <ThemeLogo image_url={"fallback.png"} alt_text={"Acme"} />
            </ContextProvider<TokenResolver>>
        }
    }

    let root = mount::<App>().await;
    assert!(
        root.query_selector("div")
            .expect("could not query root")
            .is_none(),
        "hidden logo should produce no output"
    );
}

#[wasm_bindgen_test]
async fn logo_should_prefer_the_themed_url() {
    #[function_component(App)]
    fn app() -> Html {
        let tokens = TokenResolver::from_values([
            (constants::WIDGET_LOGO_URL_TOKEN, "https://x/logo.png"),
            (constants::WIDGET_LOGO_POSITION_TOKEN, "center"),
        ]);

        let mut attrs = IndexMap::new();
        attrs.insert("loading", AttrValue::from("lazy"));
        attrs.insert("data-qa", AttrValue::from("widget-logo"));

        html! {
            <ContextProvider<TokenResolver> context={tokens}>
                <ThemeLogo image_url={"fallback.png"}
                    alt_text={"Acme"}
                    class={classes!("mt-4")}
                    {attrs} />
            </ContextProvider<TokenResolver>>
        }
    }

    let root = mount::<App>().await;
    let img = root
        .query_selector("img")
        .expect("could not query root")
        .expect("img should render");

    assert_eq!(
        Some("https://x/logo.png".to_string()),
        img.get_attribute("src"),
        "themed url should win over the fallback"
    );
    assert_eq!(
        Some("eager".to_string()),
        img.get_attribute("loading"),
        "fixed attributes should win over caller overrides"
    );
    assert_eq!(
        Some("widget-logo".to_string()),
        img.get_attribute("data-qa"),
        "caller attributes should pass through"
    );

    let container = root
        .query_selector("div")
        .expect("could not query root")
        .expect("container should render");

    let class = container.get_attribute("class").unwrap_or_default();
    assert!(class.contains("justify-widget-logo"));
    assert!(class.contains("mt-4"), "caller classes should merge onto the container");
}

// ***************
// *** helpers ***
// ***************

/// Renders `App` under a fresh element in the document body.
async fn mount<App>() -> web_sys::Element
where
    App: yew::BaseComponent,
    App::Properties: Default,
{
    let document = web_sys::window()
        .expect("window not found")
        .document()
        .expect("document not found");

    let root = document
        .create_element("div")
        .expect("could not create root element");

    document
        .body()
        .expect("body not found")
        .append_child(&root)
        .expect("could not attach root element");

    yew::Renderer::<App>::with_root(root.clone()).render();

    // let the scheduler flush the initial render
    yew::platform::time::sleep(Duration::from_millis(50)).await;
    root
}
