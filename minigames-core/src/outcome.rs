//! Procedural outcome generation shared by the mining and woodcutting minigames.
//!
//! Rates are absolute per-slot chances, not weights. A table is walked in name
//! order and the first cumulative interval containing the roll wins; anything
//! left over falls through to the remainder kind (stone, plain tree). A table
//! whose rates sum past 1 leaves the tail of that walk unreachable.
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{COLS, REMAINING_MAX, REMAINING_MIN};

/// A named outcome a slot can roll, as opposed to the remainder.
pub trait OutcomeKind: Copy + Eq + fmt::Debug + 'static {
    /// Label for slots that matched no named outcome.
    const REMAINDER_NAME: &'static str;
    /// Shades a remainder slot picks from uniformly.
    const REMAINDER_PALETTE: &'static [&'static str];

    /// Name used for sort order and display.
    fn name(self) -> &'static str;

    /// Display color for slots holding this outcome.
    fn color(self) -> &'static str;
}

/// Named outcomes with their absolute per-slot probabilities, kept sorted by name.
#[derive(Debug, Clone, PartialEq)]
pub struct OutcomeTable<K> {
    entries: Vec<(K, f64)>,
}

impl<K: OutcomeKind> OutcomeTable<K> {
    /// Build a table from `(kind, probability)` pairs. A repeated kind keeps its last rate.
    pub fn new<I>(rates: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
    {
        let mut entries: Vec<(K, f64)> = Vec::new();
        for (kind, chance) in rates {
            if let Some(slot) = entries.iter_mut().find(|(existing, _)| *existing == kind) {
                slot.1 = chance;
            } else {
                entries.push((kind, chance));
            }
        }
        entries.sort_by(|a, b| a.0.name().cmp(b.0.name()));
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[(K, f64)] {
        &self.entries
    }

    /// Configured chance for `kind`, zero when absent.
    #[must_use]
    pub fn chance(&self, kind: K) -> f64 {
        self.entries
            .iter()
            .find(|(k, _)| *k == kind)
            .map_or(0.0, |(_, p)| *p)
    }

    /// Sum of every configured rate.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, p)| *p).sum()
    }

    /// Probability mass left for the remainder kind.
    #[must_use]
    pub fn remainder_chance(&self) -> f64 {
        let total = self.total();
        if total >= 1.0 { 0.0 } else { 1.0 - total }
    }

    /// Chance each entry is actually rolled once its interval is clipped to `[0, 1)`.
    ///
    /// Differs from the configured rates only when they sum past 1, or for
    /// non-positive rates (which never roll).
    #[must_use]
    pub fn effective_chances(&self) -> Vec<(K, f64)> {
        let mut acc: f64 = 0.0;
        self.entries
            .iter()
            .map(|&(kind, chance)| {
                if chance <= 0.0 {
                    return (kind, 0.0);
                }
                let start = acc.min(1.0);
                acc += chance;
                (kind, acc.min(1.0) - start)
            })
            .collect()
    }

    /// Chance the remainder is actually rolled.
    #[must_use]
    pub fn effective_remainder(&self) -> f64 {
        let claimed: f64 = self.effective_chances().iter().map(|(_, p)| *p).sum();
        (1.0 - claimed).max(0.0)
    }

    /// Resolve a uniform roll in `[0, 1)` against the cumulative intervals.
    ///
    /// Entries with a non-positive rate occupy no interval. `None` is the remainder.
    #[must_use]
    pub fn resolve(&self, roll: f64) -> Option<K> {
        let mut acc = 0.0;
        for &(kind, chance) in &self.entries {
            if chance <= 0.0 {
                continue;
            }
            let next = acc + chance;
            if roll < next {
                return Some(kind);
            }
            acc = next;
        }
        None
    }

    /// Draw one outcome from `rng`.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Option<K> {
        self.resolve(rng.r#gen::<f64>())
    }
}

/// Process-unique identifier of a generated slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellId(u64);

impl CellId {
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic id counter handed to the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellIdSource {
    next: u64,
}

impl Default for CellIdSource {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl CellIdSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> CellId {
        let id = CellId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far.
    #[must_use]
    pub const fn issued(&self) -> u64 {
        self.next - 1
    }
}

/// What a slot rolled: the remainder or one of the named outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind<K> {
    Remainder,
    Named(K),
}

impl<K: OutcomeKind> CellKind<K> {
    #[must_use]
    pub const fn outcome(self) -> Option<K> {
        match self {
            Self::Remainder => None,
            Self::Named(kind) => Some(kind),
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Remainder => K::REMAINDER_NAME,
            Self::Named(kind) => kind.name(),
        }
    }
}

/// One generated slot in a mine or field grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellInstance<K> {
    pub id: CellId,
    pub kind: CellKind<K>,
    pub color: &'static str,
    pub remaining: u8,
    pub disabled: bool,
}

impl<K: OutcomeKind> CellInstance<K> {
    /// Outcome name, absent for remainder slots.
    #[must_use]
    pub fn name(&self) -> Option<&'static str> {
        self.kind.outcome().map(OutcomeKind::name)
    }

    #[must_use]
    pub const fn is_remainder(&self) -> bool {
        matches!(self.kind, CellKind::Remainder)
    }

    /// Spend one use of the slot, disabling it once durability runs out.
    ///
    /// Returns what the interaction yielded, or `None` for a disabled slot.
    pub fn strike(&mut self) -> Option<CellKind<K>> {
        if self.disabled {
            return None;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.disabled = true;
        }
        Some(self.kind)
    }
}

/// Uniform durability roll in `REMAINING_MIN..=REMAINING_MAX`.
pub fn roll_remaining<R: Rng>(rng: &mut R) -> u8 {
    rng.gen_range(REMAINING_MIN..=REMAINING_MAX)
}

fn remainder_shade<K: OutcomeKind, R: Rng>(rng: &mut R) -> &'static str {
    let palette = K::REMAINDER_PALETTE;
    if palette.is_empty() {
        return "";
    }
    palette[rng.gen_range(0..palette.len())]
}

/// Generate a single slot from `table`.
pub fn generate<K, R>(table: &OutcomeTable<K>, ids: &mut CellIdSource, rng: &mut R) -> CellInstance<K>
where
    K: OutcomeKind,
    R: Rng,
{
    let (kind, color) = match table.sample(rng) {
        Some(named) => (CellKind::Named(named), named.color()),
        None => (CellKind::Remainder, remainder_shade::<K, R>(rng)),
    };
    CellInstance {
        id: ids.next_id(),
        kind,
        color,
        remaining: roll_remaining(rng),
        disabled: false,
    }
}

/// A populated grid, `COLS` slots per row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<K> {
    rows: Vec<[CellInstance<K>; COLS]>,
}

impl<K: OutcomeKind> Grid<K> {
    #[must_use]
    pub fn rows(&self) -> &[[CellInstance<K>; COLS]] {
        &self.rows
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn cells(&self) -> impl Iterator<Item = &CellInstance<K>> {
        self.rows.iter().flat_map(|row| row.iter())
    }

    #[must_use]
    pub fn cell(&self, id: CellId) -> Option<&CellInstance<K>> {
        self.cells().find(|cell| cell.id == id)
    }

    /// Strike the slot with `id`. Unknown ids and disabled slots yield nothing.
    pub fn strike(&mut self, id: CellId) -> Option<CellKind<K>> {
        self.rows
            .iter_mut()
            .flat_map(|row| row.iter_mut())
            .find(|cell| cell.id == id)
            .and_then(CellInstance::strike)
    }

    /// Slots that can still be struck.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.cells().filter(|cell| !cell.disabled).count()
    }
}

/// Populate `rows` rows of `COLS` slots from `table`.
pub fn generate_rows<K, R>(
    table: &OutcomeTable<K>,
    rows: usize,
    ids: &mut CellIdSource,
    rng: &mut R,
) -> Grid<K>
where
    K: OutcomeKind,
    R: Rng,
{
    let rows = (0..rows)
        .map(|_| std::array::from_fn(|_| generate(table, ids, rng)))
        .collect();
    Grid { rows }
}
