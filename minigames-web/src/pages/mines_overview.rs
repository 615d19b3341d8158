use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::TopBar;
use crate::router::Route;
use crate::store::use_registry;

/// Every mine in the registry, each linking to its play view.
#[function_component(MinesOverview)]
pub fn mines_overview() -> Html {
    let registry = use_registry();
    let registry = registry.borrow();
    let cards = registry.mines().iter().map(|mine| {
        let target = Route::MinePlay {
            mine_id: mine.id.clone(),
        };
        html! {
            <li key={mine.id.clone()}>
                <Link<Route> to={target} classes={classes!("def-card")}>
                    <h2>{ mine.name.clone() }</h2>
                    if let Some(description) = &mine.description {
                        <p class="description">{ description.clone() }</p>
                    }
                    <p class="stats">
                        { format!("{:.1}% gems · {} rows", mine.total_gem_chance() * 100.0, mine.length) }
                    </p>
                </Link<Route>>
            </li>
        }
    });

    html! {
        <>
            <TopBar title="Mining" back={Route::Mining.parent()} />
            <ul class="def-list mines">{ for cards }</ul>
        </>
    }
}
