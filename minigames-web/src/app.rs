use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::fields_overview::FieldsOverview;
use crate::pages::home::HomePage;
use crate::pages::mines_overview::MinesOverview;
use crate::pages::mining::MiningPage;
use crate::pages::not_found::NotFound;
use crate::pages::woodcutting::WoodcuttingPage;
use crate::paths;
use crate::router::Route;
use crate::store::StoreProvider;

/// View for `route`. Play views are keyed by id so switching definitions
/// starts a fresh grid.
#[must_use]
pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Mining => html! { <MinesOverview /> },
        Route::MinePlay { mine_id } => html! {
            <MiningPage key={mine_id.clone()} mine_id={mine_id} />
        },
        Route::Woodcutting => html! { <FieldsOverview /> },
        Route::FieldPlay { field_id } => html! {
            <WoodcuttingPage key={field_id.clone()} field_id={field_id} />
        },
        Route::NotFound => html! { <NotFound /> },
    }
}

/// Everything below the router: shared stores and the routed view.
#[function_component(AppBody)]
pub fn app_body() -> Html {
    html! {
        <StoreProvider>
            <a class="skip-link" href="#main">{ "Skip to content" }</a>
            <main id="main">
                <Switch<Route> render={switch} />
            </main>
        </StoreProvider>
    }
}

/// Root component mounted into the page.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter basename={paths::router_base()}>
            <AppBody />
        </BrowserRouter>
    }
}
