use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::TopBar;
use crate::router::Route;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <>
            <TopBar title="Minigames" />
            <nav class="menu" aria-label="Minigames">
                <Link<Route> to={Route::Mining} classes={classes!("menu-card", "mining")}>
                    <h2>{ "Mining" }</h2>
                    <p>{ "Break rock, dig up gems." }</p>
                </Link<Route>>
                <Link<Route> to={Route::Woodcutting} classes={classes!("menu-card", "woodcutting")}>
                    <h2>{ "Woodcutting" }</h2>
                    <p>{ "Fell trees for wood and fruit." }</p>
                </Link<Route>>
            </nav>
        </>
    }
}
