//! Woodcutting fields: rows of trees, some of them fruit-bearing.
use serde::{Deserialize, Serialize};

use crate::catalog::Definition;
use crate::config::{ConfigIssue, check_chance, clamp_chance, clamp_count};
use crate::constants::{FIELD_FALLBACK_SLUG, FRUIT_TREE_COLOR, TREE_GREENS};
use crate::outcome::{CellInstance, OutcomeKind, OutcomeTable};

/// The only named outcome a tree can roll; plain trees are the remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TreeYield {
    Fruit,
}

impl OutcomeKind for TreeYield {
    const REMAINDER_NAME: &'static str = "tree";
    const REMAINDER_PALETTE: &'static [&'static str] = &TREE_GREENS;

    fn name(self) -> &'static str {
        match self {
            Self::Fruit => "fruit",
        }
    }

    fn color(self) -> &'static str {
        match self {
            Self::Fruit => FRUIT_TREE_COLOR,
        }
    }
}

/// A generated tree.
pub type Tree = CellInstance<TreeYield>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub id: String,
    pub name: String,
    /// Number of grid rows.
    pub length: u32,
    /// Chance in `0..1` that a tree bears fruit.
    pub fruit_chance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FieldDefinition {
    #[must_use]
    pub fn outcome_table(&self) -> OutcomeTable<TreeYield> {
        OutcomeTable::new([(TreeYield::Fruit, self.fruit_chance)])
    }

    #[must_use]
    pub fn plain_chance(&self) -> f64 {
        self.outcome_table().remainder_chance()
    }
}

/// Request to add a field at runtime.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldInput {
    pub name: String,
    pub length: f64,
    pub fruit_chance: f64,
    #[serde(default)]
    pub description: Option<String>,
}

impl Definition for FieldDefinition {
    type Input = FieldInput;

    const KIND: &'static str = "field";
    const FALLBACK_SLUG: &'static str = FIELD_FALLBACK_SLUG;

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn input_name(input: &Self::Input) -> &str {
        &input.name
    }

    fn from_input(id: String, input: Self::Input) -> Self {
        Self {
            id,
            name: input.name,
            length: clamp_count(input.length),
            fruit_chance: clamp_chance(input.fruit_chance),
            description: input.description,
        }
    }

    fn validate(&self) -> Vec<ConfigIssue> {
        check_chance(&self.id, TreeYield::Fruit.name(), self.fruit_chance)
            .into_iter()
            .collect()
    }
}
