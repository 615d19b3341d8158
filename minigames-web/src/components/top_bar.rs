use minigames_core::TapTrigger;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{InventorySheet, TapButton};
use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: AttrValue,
    /// Target of the back button; no button when absent.
    #[prop_or_default]
    pub back: Option<Route>,
}

#[function_component(TopBar)]
pub fn top_bar(props: &Props) -> Html {
    let sheet_open = use_state(|| false);
    let navigator = use_navigator();

    let on_back = {
        let target = props.back.clone();
        Callback::from(move |()| {
            if let (Some(navigator), Some(target)) = (navigator.as_ref(), target.as_ref()) {
                navigator.push(target);
            }
        })
    };
    let toggle_sheet = {
        let sheet_open = sheet_open.clone();
        Callback::from(move |()| sheet_open.set(!*sheet_open))
    };
    let close_sheet = {
        let sheet_open = sheet_open.clone();
        Callback::from(move |()| sheet_open.set(false))
    };

    html! {
        <header class="top-bar">
            if props.back.is_some() {
                <TapButton class={classes!("back-btn")} aria_label="Back" on_tap={on_back}>
                    { "← Back" }
                </TapButton>
            }
            <h1>{ props.title.clone() }</h1>
            <TapButton
                class={classes!("inventory-btn")}
                trigger={TapTrigger::Down}
                aria_label="Open inventory"
                on_tap={toggle_sheet}
            >
                { "Inventory" }
            </TapButton>
            <InventorySheet open={*sheet_open} on_close={close_sheet} />
        </header>
    }
}
