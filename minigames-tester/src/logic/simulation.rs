use minigames_core::{
    CellIdSource, CellKind, Definition, FieldDefinition, MineDefinition, OutcomeKind, OutcomeTable,
    REMAINING_MAX, REMAINING_MIN, generate,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Which catalog a definition comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DefinitionKind {
    Mine,
    Field,
}

impl DefinitionKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mine => "mine",
            Self::Field => "field",
        }
    }
}

/// Sampling parameters shared by every definition in a run.
#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    pub draws: u32,
    pub seed: u64,
    pub tolerance: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutcomeStat {
    pub outcome: String,
    pub configured: f64,
    pub expected: f64,
    pub observed: f64,
    pub count: u32,
    pub within_tolerance: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct DistributionResult {
    pub kind: DefinitionKind,
    pub id: String,
    pub name: String,
    pub draws: u32,
    pub seed: u64,
    pub outcomes: Vec<OutcomeStat>,
    pub durability_violations: u32,
    pub config_warnings: Vec<String>,
    pub passed: bool,
    pub duration: Duration,
}

impl DistributionResult {
    /// Failure lines for report output.
    pub fn failures(&self) -> Vec<String> {
        let mut failures: Vec<String> = self
            .outcomes
            .iter()
            .filter(|stat| !stat.within_tolerance)
            .map(|stat| {
                format!(
                    "{} observed {:.4}, expected {:.4}",
                    stat.outcome, stat.observed, stat.expected
                )
            })
            .collect();
        if self.durability_violations > 0 {
            failures.push(format!(
                "{} cells rolled durability outside {REMAINING_MIN}..={REMAINING_MAX}",
                self.durability_violations
            ));
        }
        failures
    }
}

fn ratio(count: u32, draws: u32) -> f64 {
    if draws == 0 {
        0.0
    } else {
        f64::from(count) / f64::from(draws)
    }
}

struct Sampled {
    counts: HashMap<Option<&'static str>, u32>,
    durability_violations: u32,
}

fn sample_table<K: OutcomeKind>(table: &OutcomeTable<K>, cfg: SimulationConfig) -> Sampled {
    let mut rng = ChaCha8Rng::seed_from_u64(cfg.seed);
    let mut ids = CellIdSource::new();
    let mut counts: HashMap<Option<&'static str>, u32> = HashMap::new();
    let mut durability_violations = 0;
    for _ in 0..cfg.draws {
        let cell = generate(table, &mut ids, &mut rng);
        if !(REMAINING_MIN..=REMAINING_MAX).contains(&cell.remaining) {
            durability_violations += 1;
        }
        let key = match cell.kind {
            CellKind::Remainder => None,
            CellKind::Named(kind) => Some(kind.name()),
        };
        *counts.entry(key).or_default() += 1;
    }
    Sampled {
        counts,
        durability_violations,
    }
}

fn outcome_stats<K: OutcomeKind>(
    table: &OutcomeTable<K>,
    sampled: &Sampled,
    cfg: SimulationConfig,
) -> Vec<OutcomeStat> {
    let stat = |outcome: &str, configured: f64, expected: f64, count: u32| {
        let observed = ratio(count, cfg.draws);
        OutcomeStat {
            outcome: outcome.to_string(),
            configured,
            expected,
            observed,
            count,
            within_tolerance: (observed - expected).abs() <= cfg.tolerance,
        }
    };

    let mut stats: Vec<OutcomeStat> = table
        .effective_chances()
        .into_iter()
        .map(|(kind, expected)| {
            let count = sampled.counts.get(&Some(kind.name())).copied().unwrap_or(0);
            stat(kind.name(), table.chance(kind), expected, count)
        })
        .collect();
    let remainder = sampled.counts.get(&None).copied().unwrap_or(0);
    stats.push(stat(
        K::REMAINDER_NAME,
        table.remainder_chance(),
        table.effective_remainder(),
        remainder,
    ));
    stats
}

fn run_table<K: OutcomeKind>(
    kind: DefinitionKind,
    id: &str,
    name: &str,
    table: &OutcomeTable<K>,
    config_warnings: Vec<String>,
    cfg: SimulationConfig,
) -> DistributionResult {
    let start = Instant::now();
    let sampled = sample_table(table, cfg);
    let outcomes = outcome_stats(table, &sampled, cfg);
    let passed =
        sampled.durability_violations == 0 && outcomes.iter().all(|stat| stat.within_tolerance);
    log::debug!(
        "{} '{id}': {} draws, passed={passed}",
        kind.label(),
        cfg.draws
    );
    DistributionResult {
        kind,
        id: id.to_string(),
        name: name.to_string(),
        draws: cfg.draws,
        seed: cfg.seed,
        outcomes,
        durability_violations: sampled.durability_violations,
        config_warnings,
        passed,
        duration: start.elapsed(),
    }
}

pub fn simulate_mine(mine: &MineDefinition, cfg: SimulationConfig) -> DistributionResult {
    let warnings = mine.validate().iter().map(ToString::to_string).collect();
    run_table(
        DefinitionKind::Mine,
        &mine.id,
        &mine.name,
        &mine.outcome_table(),
        warnings,
        cfg,
    )
}

pub fn simulate_field(field: &FieldDefinition, cfg: SimulationConfig) -> DistributionResult {
    let warnings = field.validate().iter().map(ToString::to_string).collect();
    run_table(
        DefinitionKind::Field,
        &field.id,
        &field.name,
        &field.outcome_table(),
        warnings,
        cfg,
    )
}
