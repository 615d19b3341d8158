pub mod fields_overview;
pub mod home;
pub mod mines_overview;
pub mod mining;
pub mod not_found;
pub mod woodcutting;

use minigames_core::{CellId, Grid, OutcomeKind};
use yew::prelude::*;

use crate::components::GridSlot;

/// Rows mounted up front; the rest are revealed a batch at a time.
pub const ROW_BATCH: usize = 30;

/// Next number of visible rows after asking for more.
#[must_use]
pub fn next_batch(visible: usize, total: usize) -> usize {
    visible.saturating_add(ROW_BATCH).min(total)
}

/// The first `visible` rows of `grid`, one [`GridSlot`] per cell.
pub fn grid_rows<K: OutcomeKind>(
    grid: &Grid<K>,
    visible: usize,
    class: &AttrValue,
    on_strike: &Callback<CellId>,
) -> Html {
    grid.rows()
        .iter()
        .take(visible)
        .enumerate()
        .map(|(index, row)| {
            html! {
                <div class="grid-row" key={index}>
                    { for row.iter().map(|cell| html! {
                        <GridSlot<K>
                            key={cell.id.get()}
                            cell={cell.clone()}
                            class={class.clone()}
                            on_strike={on_strike.clone()}
                        />
                    }) }
                </div>
            }
        })
        .collect()
}
