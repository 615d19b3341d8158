use minigames_core::GemName;
use yew::prelude::*;

use crate::components::TapButton;
use crate::store::{InventoryAction, use_inventory};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub open: bool,
    pub on_close: Callback<()>,
}

/// Slide-over sheet listing everything gathered so far.
#[function_component(InventorySheet)]
pub fn inventory_sheet(props: &Props) -> Html {
    let inventory = use_inventory();
    let on_reset = {
        let inventory = inventory.clone();
        Callback::from(move |()| inventory.dispatch(InventoryAction::Reset))
    };
    let inv = &inventory.inventory;

    let gems = GemName::ALL.into_iter().map(|gem| {
        html! {
            <li key={gem.as_str()} class="gem" data-gem={gem.as_str()}>
                <span class="swatch" style={format!("background-color: {}", gem.color())}></span>
                { format!("{gem}: {}", inv.gem_count(gem)) }
            </li>
        }
    });

    html! {
        <aside
            class={classes!("sheet", props.open.then_some("open"))}
            aria-label="Inventory"
            aria-hidden={(!props.open).to_string()}
        >
            <header class="sheet-header">
                <h2>{ "Inventory" }</h2>
                <TapButton
                    class={classes!("close")}
                    aria_label="Close inventory"
                    on_tap={props.on_close.clone()}
                >
                    { "×" }
                </TapButton>
            </header>
            <ul class="resources">
                <li data-resource="stone">{ format!("Stone: {}", inv.stone) }</li>
                <li data-resource="wood">{ format!("Wood: {}", inv.wood) }</li>
                <li data-resource="fruit">{ format!("Fruit: {}", inv.fruit) }</li>
            </ul>
            <ul class="gems">{ for gems }</ul>
            <TapButton class={classes!("reset")} on_tap={on_reset}>
                { "Reset inventory" }
            </TapButton>
        </aside>
    }
}
