//! Mine definitions: length plus a per-gem rate table.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog::Definition;
use crate::config::{ConfigIssue, check_chance, clamp_chance, clamp_count};
use crate::constants::MINE_FALLBACK_SLUG;
use crate::gems::GemName;
use crate::outcome::{CellInstance, OutcomeTable};

/// A generated mine cell: stone or a gem.
pub type MineCell = CellInstance<GemName>;

/// A mine with its own depth and gem distribution.
///
/// Gem rates are absolute per-cell probabilities. Stone fills the remainder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MineDefinition {
    pub id: String,
    pub name: String,
    /// Number of grid rows.
    pub length: u32,
    pub gem_rates: BTreeMap<GemName, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl MineDefinition {
    #[must_use]
    pub fn outcome_table(&self) -> OutcomeTable<GemName> {
        OutcomeTable::new(self.gem_rates.iter().map(|(gem, rate)| (*gem, *rate)))
    }

    #[must_use]
    pub fn total_gem_chance(&self) -> f64 {
        self.gem_rates.values().sum()
    }

    #[must_use]
    pub fn stone_chance(&self) -> f64 {
        let total = self.total_gem_chance();
        if total >= 1.0 { 0.0 } else { 1.0 - total }
    }
}

/// Request to add a mine at runtime. Numbers are clamped, never rejected.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MineInput {
    pub name: String,
    pub length: f64,
    pub gem_rates: Vec<(GemName, f64)>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Definition for MineDefinition {
    type Input = MineInput;

    const KIND: &'static str = "mine";
    const FALLBACK_SLUG: &'static str = MINE_FALLBACK_SLUG;

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
        let gem_rates = input
            .gem_rates
            .into_iter()
            .map(|(gem, rate)| (gem, clamp_chance(rate)))
            .collect();
        Self {
            id,
            name: input.name,
            length: clamp_count(input.length),
            gem_rates,
            description: input.description,
        }
    }

    fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues: Vec<ConfigIssue> = self
            .gem_rates
            .iter()
            .filter_map(|(gem, rate)| check_chance(&self.id, gem.as_str(), *rate))
            .collect();
        let total = self.total_gem_chance();
        if total > 1.0 {
            issues.push(ConfigIssue::RateOverflow {
                id: self.id.clone(),
                total,
            });
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mine(rates: &[(GemName, f64)]) -> MineDefinition {
        MineDefinition {
            id: "test".into(),
            name: "Test".into(),
            length: 10,
            gem_rates: rates.iter().copied().collect(),
            description: None,
        }
    }

    #[test]
    fn stone_chance_complements_gem_total() {
        let m = mine(&[(GemName::Ruby, 0.1), (GemName::Opal, 0.15)]);
        assert!((m.total_gem_chance() - 0.25).abs() < 1e-12);
        assert!((m.stone_chance() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn stone_chance_floors_at_zero() {
        let m = mine(&[(GemName::Ruby, 0.6), (GemName::Opal, 0.6)]);
        assert!(m.stone_chance().abs() < f64::EPSILON);
        assert!(matches!(
            m.validate().as_slice(),
            [ConfigIssue::RateOverflow { .. }]
        ));
    }

    #[test]
    fn validate_flags_each_out_of_range_rate() {
        let m = mine(&[(GemName::Ruby, -0.2), (GemName::Jade, 0.1)]);
        let issues = m.validate();
        assert_eq!(issues.len(), 1);
        assert!(matches!(
            &issues[0],
            ConfigIssue::ChanceOutOfRange { outcome: "Ruby", .. }
        ));
    }

    #[test]
    fn from_input_clamps_numbers() {
        let input = MineInput {
            name: "Odd".into(),
            length: f64::NAN,
            gem_rates: vec![
                (GemName::Ruby, f64::INFINITY),
                (GemName::Topaz, -1.0),
                (GemName::Jade, 0.2),
            ],
            description: Some("odd one".into()),
        };
        let m = MineDefinition::from_input("odd".into(), input);
        assert_eq!(m.length, 1);
        assert!(m.gem_rates[&GemName::Ruby].abs() < f64::EPSILON);
        assert!(m.gem_rates[&GemName::Topaz].abs() < f64::EPSILON);
        assert!((m.gem_rates[&GemName::Jade] - 0.2).abs() < f64::EPSILON);
        assert_eq!(m.description.as_deref(), Some("odd one"));
    }

    #[test]
    fn outcome_table_matches_rates() {
        let m = mine(&[(GemName::Sapphire, 0.05), (GemName::Diamond, 0.01)]);
        let table = m.outcome_table();
        assert!((table.chance(GemName::Sapphire) - 0.05).abs() < f64::EPSILON);
        assert!(table.chance(GemName::Ruby).abs() < f64::EPSILON);
        assert_eq!(table.entries()[0].0, GemName::Diamond);
    }
}
