pub mod reports;
pub mod simulation;

pub use simulation::{
    DefinitionKind, DistributionResult, OutcomeStat, SimulationConfig, simulate_field,
    simulate_mine,
};
