//! Minigames Core
//!
//! Platform-agnostic logic for the minigames shell: procedural outcome
//! generation for the mining and woodcutting grids, definition catalogs,
//! the shared inventory, and the tap disambiguation state machine.
//! This crate has no UI or platform-specific dependencies.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod fields;
pub mod gems;
pub mod inventory;
pub mod mines;
pub mod outcome;
pub mod same_value;
pub mod slug;
pub mod tap;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogError, Definition, Registry, static_fields, static_mines};
pub use config::{ConfigIssue, clamp_chance, clamp_count};
pub use constants::{COLS, MAX_ROWS, REMAINING_MAX, REMAINING_MIN};
pub use fields::{FieldDefinition, FieldInput, Tree, TreeYield};
pub use gems::GemName;
pub use inventory::Inventory;
pub use mines::{MineCell, MineDefinition, MineInput};
pub use outcome::{
    CellId, CellIdSource, CellInstance, CellKind, Grid, OutcomeKind, OutcomeTable, generate,
    generate_rows, roll_remaining,
};
pub use same_value::SameValue;
pub use slug::slugify;
pub use tap::{
    ClickOutcome, NoToken, PointerKind, PointerSample, PressOutcome, ReleaseOutcome, TapEngine,
    TapOptions, TapRejection, TapTrigger, TokenProvider,
};
