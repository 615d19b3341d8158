//! Shared constants for grid layout and slot durability.

/// Cells per grid row in both minigames.
pub const COLS: usize = 6;

/// Most rows a grid is ever generated with. Longer definitions are cut short.
pub const MAX_ROWS: u32 = 10_000;

/// Lowest durability a freshly generated slot can roll.
pub const REMAINING_MIN: u8 = 2;
/// Highest durability a freshly generated slot can roll (inclusive).
pub const REMAINING_MAX: u8 = 5;

/// Grey shades used for stone cells.
pub const STONE_GREYS: [&str; 5] = [
    "hsl(0, 0%, 80%)",
    "hsl(0, 0%, 70%)",
    "hsl(0, 0%, 60%)",
    "hsl(0, 0%, 50%)",
    "hsl(0, 0%, 40%)",
];

/// Canopy shades used for trees without fruit.
pub const TREE_GREENS: [&str; 5] = [
    "hsl(120, 40%, 32%)",
    "hsl(110, 45%, 38%)",
    "hsl(130, 35%, 28%)",
    "hsl(100, 40%, 42%)",
    "hsl(140, 30%, 35%)",
];

/// Canopy color for fruit-bearing trees.
pub const FRUIT_TREE_COLOR: &str = "hsl(15, 75%, 52%)";

/// Catalog slug used when a mine name slugifies to nothing.
pub const MINE_FALLBACK_SLUG: &str = "mine";
/// Catalog slug used when a field name slugifies to nothing.
pub const FIELD_FALLBACK_SLUG: &str = "field";
