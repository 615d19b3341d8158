use minigames_core::{COLS, CellId};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{TapButton, TopBar};
use crate::pages::{ROW_BATCH, grid_rows, next_batch};
use crate::rng::grid_rng;
use crate::router::Route;
use crate::store::{InventoryAction, use_inventory, use_registry};

#[derive(Properties, PartialEq)]
pub struct WoodcuttingPageProps {
    pub field_id: AttrValue,
}

/// Play view for one field. Each chop yields a log, plus fruit from fruit trees.
#[function_component(WoodcuttingPage)]
pub fn woodcutting_page(props: &WoodcuttingPageProps) -> Html {
    let registry = use_registry();
    let inventory = use_inventory();
    let grid = {
        let registry = registry.clone();
        let field_id = props.field_id.clone();
        use_mut_ref(move || registry.borrow_mut().generate_field(&field_id, &mut grid_rng()))
    };
    let visible_rows = use_state(|| ROW_BATCH);
    let refresh = use_force_update();

    let Some(field) = registry.borrow().field(&props.field_id).cloned() else {
        log::warn!("unknown field {}; back to the list", props.field_id);
        return html! { <Redirect<Route> to={Route::Woodcutting} /> };
    };

    let on_strike = {
        let grid = grid.clone();
        let refresh = refresh.clone();
        Callback::from(move |id: CellId| {
            let chopped = grid.borrow_mut().as_mut().and_then(|grid| grid.strike(id));
            if let Some(kind) = chopped {
                inventory.dispatch(InventoryAction::Chopped(kind));
                refresh.force_update();
            }
        })
    };
    let on_more = {
        let visible_rows = visible_rows.clone();
        let total = field.length as usize;
        Callback::from(move |()| visible_rows.set(next_batch(*visible_rows, total)))
    };
    let on_replant = {
        let grid = grid.clone();
        let visible_rows = visible_rows.clone();
        let field_id = props.field_id.clone();
        Callback::from(move |()| {
            let fresh = registry.borrow_mut().generate_field(&field_id, &mut grid_rng());
            *grid.borrow_mut() = fresh;
            visible_rows.set(ROW_BATCH);
            refresh.force_update();
        })
    };

    let grid = grid.borrow();
    let Some(grid) = grid.as_ref() else {
        return html! { <Redirect<Route> to={Route::Woodcutting} /> };
    };
    let visible = (*visible_rows).min(grid.row_count());

    html! {
        <>
            <TopBar title={field.name.clone()} back={Some(Route::Woodcutting)} />
            <section class="play woodcutting" data-field={field.id.clone()}>
                <p class="progress">
                    { format!("{} of {} trees standing", grid.active_count(), grid.row_count() * COLS) }
                </p>
                <div class="grid">
                    { grid_rows(grid, visible, &AttrValue::from("tree"), &on_strike) }
                </div>
                if visible < grid.row_count() {
                    <TapButton class={classes!("more-btn")} on_tap={on_more}>
                        { "Walk further" }
                    </TapButton>
                }
                <TapButton class={classes!("regen-btn")} on_tap={on_replant}>
                    { "Replant" }
                </TapButton>
            </section>
        </>
    }
}
