pub mod grid_slot;
pub mod inventory_sheet;
pub mod tap_button;
pub mod top_bar;

pub use grid_slot::GridSlot;
pub use inventory_sheet::InventorySheet;
pub use tap_button::TapButton;
pub use top_bar::TopBar;
