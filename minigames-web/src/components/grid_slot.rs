use minigames_core::{CellId, CellInstance, OutcomeKind, TapOptions};
use yew::prelude::*;

use crate::tap::use_tap;

#[derive(Properties, PartialEq)]
pub struct GridSlotProps<K: OutcomeKind> {
    pub cell: CellInstance<K>,
    /// Base CSS class, `cell` for mines and `tree` for fields.
    pub class: AttrValue,
    pub on_strike: Callback<CellId>,
}

/// One struck-able slot of a mine or field grid.
#[function_component(GridSlot)]
pub fn grid_slot<K: OutcomeKind>(props: &GridSlotProps<K>) -> Html {
    let cell = &props.cell;
    let on_tap = {
        let on_strike = props.on_strike.clone();
        let id = cell.id;
        Callback::from(move |()| on_strike.emit(id))
    };
    // A slot that was disabled or replaced between press and release must not fire.
    let tap = use_tap(on_tap, TapOptions::default(), (cell.id, cell.disabled));

    let label = format!("{}, {} left", cell.kind.label(), cell.remaining);
    html! {
        <button
            type="button"
            class={classes!(props.class.to_string(), cell.disabled.then_some("disabled"))}
            style={format!("background-color: {}", cell.color)}
            disabled={cell.disabled}
            aria-label={label}
            data-kind={cell.kind.label()}
            onpointerdown={tap.onpointerdown}
            onpointerup={tap.onpointerup}
            onpointercancel={tap.onpointercancel}
            onpointerleave={tap.onpointerleave}
            onclick={tap.onclick}
            onkeydown={tap.onkeydown}
        >
            { cell.remaining.to_string() }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use minigames_core::{CellIdSource, CellKind, GemName, OutcomeTable, generate};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use yew::LocalServerRenderer;

    fn ruby_cell() -> CellInstance<GemName> {
        let table = OutcomeTable::new([(GemName::Ruby, 1.0)]);
        let mut rng = SmallRng::seed_from_u64(3);
        generate(&table, &mut CellIdSource::new(), &mut rng)
    }

    #[test]
    fn slot_shows_durability_and_color() {
        let cell = ruby_cell();
        assert_eq!(cell.kind, CellKind::Named(GemName::Ruby));
        let remaining = cell.remaining;
        let props = GridSlotProps {
            cell,
            class: "cell".into(),
            on_strike: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<GridSlot<GemName>>::with_props(props).render());
        assert!(html.contains(r#"class="cell""#));
        assert!(html.contains("hsl(0, 80%, 55%)"));
        assert!(html.contains(&format!("Ruby, {remaining} left")));
        assert!(!html.contains("disabled"));
    }

    #[test]
    fn exhausted_slot_renders_disabled() {
        let mut cell = ruby_cell();
        while cell.strike().is_some() {}
        let props = GridSlotProps {
            cell,
            class: "cell".into(),
            on_strike: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<GridSlot<GemName>>::with_props(props).render());
        assert!(html.contains(r#"class="cell disabled""#));
        assert!(html.contains("Ruby, 0 left"));
    }
}
