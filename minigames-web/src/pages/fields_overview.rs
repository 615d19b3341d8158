use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::TopBar;
use crate::router::Route;
use crate::store::use_registry;

#[function_component(FieldsOverview)]
pub fn fields_overview() -> Html {
    let registry = use_registry();
    let registry = registry.borrow();
    let cards = registry.fields().iter().map(|field| {
        let target = Route::FieldPlay {
            field_id: field.id.clone(),
        };
        html! {
            <li key={field.id.clone()}>
                <Link<Route> to={target} classes={classes!("def-card")}>
                    <h2>{ field.name.clone() }</h2>
                    if let Some(description) = &field.description {
                        <p class="description">{ description.clone() }</p>
                    }
                    <p class="stats">
                        { format!("{:.0}% fruit trees · {} rows", field.fruit_chance * 100.0, field.length) }
                    </p>
                </Link<Route>>
            </li>
        }
    });

    html! {
        <>
            <TopBar title="Woodcutting" back={Route::Woodcutting.parent()} />
            <ul class="def-list fields">{ for cards }</ul>
        </>
    }
}
