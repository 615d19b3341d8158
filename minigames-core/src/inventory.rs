//! Resources gathered across both minigames.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::fields::TreeYield;
use crate::gems::GemName;
use crate::mines::MineCell;
use crate::outcome::CellKind;

/// Shared resource counters. Every gem is always present in `gems`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub stone: u32,
    pub wood: u32,
    pub fruit: u32,
    pub gems: BTreeMap<GemName, u32>,
}

impl Default for Inventory {
    fn default() -> Self {
        Self {
            stone: 0,
            wood: 0,
            fruit: 0,
            gems: GemName::ALL.into_iter().map(|gem| (gem, 0)).collect(),
        }
    }
}

impl Inventory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit whatever `cell` holds: stone, or its gem.
    pub fn add_to_inventory(&mut self, cell: &MineCell) {
        self.add_mined(cell.kind);
    }

    pub fn add_mined(&mut self, kind: CellKind<GemName>) {
        match kind {
            CellKind::Remainder => self.stone = self.stone.saturating_add(1),
            CellKind::Named(gem) => {
                let count = self.gems.entry(gem).or_insert(0);
                *count = count.saturating_add(1);
            }
        }
    }

    /// One chop: a log of wood, plus fruit when the tree bears it.
    pub fn add_chopped(&mut self, kind: CellKind<TreeYield>) {
        self.add_wood(1);
        if let CellKind::Named(TreeYield::Fruit) = kind {
            self.add_fruit(1);
        }
    }

    pub fn add_wood(&mut self, count: u32) {
        self.wood = self.wood.saturating_add(count);
    }

    pub fn add_fruit(&mut self, count: u32) {
        self.fruit = self.fruit.saturating_add(count);
    }

    #[must_use]
    pub fn gem_count(&self, gem: GemName) -> u32 {
        self.gems.get(&gem).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn total_gems(&self) -> u32 {
        self.gems.values().fold(0_u32, |acc, n| acc.saturating_add(*n))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stone == 0 && self.wood == 0 && self.fruit == 0 && self.total_gems() == 0
    }

    /// Zero every counter, keeping all gem names present.
    pub fn reset(&mut self) {
        self.stone = 0;
        self.wood = 0;
        self.fruit = 0;
        for count in self.gems.values_mut() {
            *count = 0;
        }
    }
}
