//! Sandbox application.
use lumen_ui::components::ThemeLogo;
use lumen_ui::theme::TokenResolver;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let tokens = use_memo(|_| TokenResolver::document(), ());

    html! {
        <ContextProvider<TokenResolver> context={(*tokens).clone()}>
            <main class={classes!("h-screen", "flex", "items-center", "justify-center")}>
                <ThemeLogo image_url={"/public/logo.svg"} alt_text={"Lumen"} />
            </main>
        </ContextProvider<TokenResolver>>
    }
}
