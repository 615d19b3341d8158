use minigames_core::{COLS, CellId};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{TapButton, TopBar};
use crate::pages::{ROW_BATCH, grid_rows, next_batch};
use crate::rng::grid_rng;
use crate::router::Route;
use crate::store::{InventoryAction, use_inventory, use_registry};

#[derive(Properties, PartialEq)]
pub struct MiningPageProps {
    pub mine_id: AttrValue,
}

/// Play view for one mine. Unknown ids send the player back to the mine list.
#[function_component(MiningPage)]
pub fn mining_page(props: &MiningPageProps) -> Html {
    let registry = use_registry();
    let inventory = use_inventory();
    let grid = {
        let registry = registry.clone();
        let mine_id = props.mine_id.clone();
        use_mut_ref(move || registry.borrow_mut().generate_mine(&mine_id, &mut grid_rng()))
    };
    let visible_rows = use_state(|| ROW_BATCH);
    let refresh = use_force_update();

    let Some(mine) = registry.borrow().mine(&props.mine_id).cloned() else {
        log::warn!("unknown mine {}; back to the list", props.mine_id);
        return html! { <Redirect<Route> to={Route::Mining} /> };
    };

    let on_strike = {
        let grid = grid.clone();
        let refresh = refresh.clone();
        Callback::from(move |id: CellId| {
            let struck = grid.borrow_mut().as_mut().and_then(|grid| grid.strike(id));
            if let Some(kind) = struck {
                inventory.dispatch(InventoryAction::Mined(kind));
                refresh.force_update();
            }
        })
    };
    let on_more = {
        let visible_rows = visible_rows.clone();
        let total = mine.length as usize;
        Callback::from(move |()| visible_rows.set(next_batch(*visible_rows, total)))
    };
    let on_regenerate = {
        let grid = grid.clone();
        let visible_rows = visible_rows.clone();
        let mine_id = props.mine_id.clone();
        Callback::from(move |()| {
            let fresh = registry.borrow_mut().generate_mine(&mine_id, &mut grid_rng());
            *grid.borrow_mut() = fresh;
            visible_rows.set(ROW_BATCH);
            refresh.force_update();
        })
    };

    let grid = grid.borrow();
    let Some(grid) = grid.as_ref() else {
        return html! { <Redirect<Route> to={Route::Mining} /> };
    };
    let visible = (*visible_rows).min(grid.row_count());

    html! {
        <>
            <TopBar title={mine.name.clone()} back={Some(Route::Mining)} />
            <section class="play mining" data-mine={mine.id.clone()}>
                <p class="progress">
                    { format!("{} of {} rocks left", grid.active_count(), grid.row_count() * COLS) }
                </p>
                <div class="grid">
                    { grid_rows(grid, visible, &AttrValue::from("cell"), &on_strike) }
                </div>
                if visible < grid.row_count() {
                    <TapButton class={classes!("more-btn")} on_tap={on_more}>
                        { "Dig deeper" }
                    </TapButton>
                }
                <TapButton class={classes!("regen-btn")} on_tap={on_regenerate}>
                    { "New mine" }
                </TapButton>
            </section>
        </>
    }
}
