use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::TapButton;
use crate::router::Route;

/// Shown for any path the route table does not know.
#[function_component(NotFound)]
pub fn not_found() -> Html {
    let navigator = use_navigator();
    let go_home = Callback::from(move |()| {
        if let Some(navigator) = navigator.as_ref() {
            navigator.push(&Route::Home);
        }
    });

    html! {
        <section class="panel not-found" aria-live="assertive">
            <h1>{ "Page not found" }</h1>
            <p>{ "Nothing is mined or felled here." }</p>
            <TapButton class={classes!("home-btn")} on_tap={go_home}>
                { "Back to the menu" }
            </TapButton>
        </section>
    }
}
