use minigames_core::{TapOptions, TapTrigger};
use yew::prelude::*;

use crate::tap::use_tap;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_tap: Callback<()>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub trigger: TapTrigger,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub children: Html,
}

/// Button that activates once per tap, however the press was delivered.
#[function_component(TapButton)]
pub fn tap_button(p: &Props) -> Html {
    let options = TapOptions {
        trigger: p.trigger,
        ..TapOptions::default()
    };
    let tap = use_tap(p.on_tap.clone(), options, ());
    let trigger = match p.trigger {
        TapTrigger::Up => "up",
        TapTrigger::Down => "down",
    };

    html! {
        <button
            type="button"
            class={p.class.clone()}
            aria-label={p.aria_label.clone()}
            data-trigger={trigger}
            onpointerdown={tap.onpointerdown}
            onpointerup={tap.onpointerup}
            onpointercancel={tap.onpointercancel}
            onpointerleave={tap.onpointerleave}
            onclick={tap.onclick}
            onkeydown={tap.onkeydown}
        >
            { p.children.clone() }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn tap_button_renders_children_and_class() {
        let props = Props {
            on_tap: Callback::noop(),
            class: classes!("inventory-btn"),
            trigger: TapTrigger::Down,
            aria_label: Some(AttrValue::from("Open inventory")),
            children: html! { "Inventory" },
        };
        let html = block_on(LocalServerRenderer::<TapButton>::with_props(props).render());
        assert!(html.contains("Inventory"));
        assert!(html.contains(r#"class="inventory-btn""#));
        assert!(html.contains(r#"aria-label="Open inventory""#));
        assert!(html.contains(r#"type="button""#));
        assert!(html.contains(r#"data-trigger="down""#));
    }
}
