mod logic;
mod util;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use minigames_core::catalog::{FIELDS_JSON, MINES_JSON};
use minigames_core::{Definition, Registry};
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::{Path, PathBuf};
use std::time::Instant;

use logic::{DistributionResult, SimulationConfig, simulate_field, simulate_mine};
use util::split_csv;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindFilter {
    /// Mines and fields
    All,
    /// Mining definitions only
    Mine,
    /// Woodcutting definitions only
    Field,
}

impl KindFilter {
    const fn includes_mines(self) -> bool {
        matches!(self, Self::All | Self::Mine)
    }

    const fn includes_fields(self) -> bool {
        matches!(self, Self::All | Self::Field)
    }
}

#[derive(Debug, Parser)]
#[command(name = "minigames-tester", version = "0.1.0")]
#[command(about = "Samples mine and field definitions and checks their outcome distributions")]
struct Args {
    /// Which catalog to sample
    #[arg(long, value_enum, default_value_t = KindFilter::All)]
    kind: KindFilter,

    /// Definition ids to sample (comma-separated, or "all")
    #[arg(long, default_value = "all")]
    ids: String,

    /// Draws per definition
    #[arg(long, default_value_t = 10_000)]
    draws: u32,

    /// Seed for the sampling RNG
    #[arg(long, default_value_t = 1337)]
    seed: u64,

    /// Largest accepted gap between observed and expected frequency
    #[arg(long, default_value_t = 0.02)]
    tolerance: f64,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console"])]
    report: String,

    /// List the catalog and exit
    #[arg(long)]
    list: bool,

    /// Replace the embedded mines with a JSON file
    #[arg(long)]
    mines_file: Option<PathBuf>,

    /// Replace the embedded fields with a JSON file
    #[arg(long)]
    fields_file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let registry = load_registry(&args)?;

    if args.list {
        return list_catalog(&args, &registry);
    }

    announce_banner();

    let start_time = Instant::now();
    let results = run_simulations(&args, &registry)?;
    write_reports(&args, &results, start_time)?;

    if results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }

    Ok(())
}

fn announce_banner() {
    println!("{}", "⛏️  Minigames Distribution Tester".bright_cyan().bold());
    println!("{}", "=================================".cyan());
}

fn read_catalog(path: Option<&Path>, embedded: &'static str) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => Ok(embedded.to_string()),
    }
}

fn load_registry(args: &Args) -> Result<Registry> {
    if args.mines_file.is_none() && args.fields_file.is_none() {
        return Ok(Registry::seeded());
    }
    let mines = read_catalog(args.mines_file.as_deref(), MINES_JSON)?;
    let fields = read_catalog(args.fields_file.as_deref(), FIELDS_JSON)?;
    Registry::from_json(&mines, &fields).context("failed to load catalog")
}

fn list_catalog(args: &Args, registry: &Registry) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;
    if args.kind.includes_mines() {
        writeln!(output_target.writer(), "Mines:")?;
        for mine in registry.mines().iter() {
            writeln!(
                output_target.writer(),
                "  {:20} - {} ({} rows, {:.1}% gems)",
                mine.id,
                mine.name,
                mine.length,
                mine.total_gem_chance() * 100.0
            )?;
        }
    }
    if args.kind.includes_fields() {
        writeln!(output_target.writer(), "Fields:")?;
        for field in registry.fields().iter() {
            writeln!(
                output_target.writer(),
                "  {:20} - {} ({} rows, {:.1}% fruit)",
                field.id,
                field.name,
                field.length,
                field.fruit_chance * 100.0
            )?;
        }
    }
    output_target.flush_inner()?;
    Ok(())
}

/// Ids to sample from one catalog; `None` means every entry.
fn selected_ids(ids_arg: &str) -> Option<Vec<String>> {
    let ids = split_csv(ids_arg);
    if ids.is_empty() || ids.iter().any(|id| id == "all") {
        None
    } else {
        Some(ids)
    }
}

fn pick<'a, T: Definition + 'a>(
    entries: impl Iterator<Item = &'a T>,
    selected: Option<&[String]>,
) -> Vec<&'a T> {
    entries
        .filter(|entry| selected.is_none_or(|ids| ids.iter().any(|id| id == entry.id())))
        .collect()
}

fn run_simulations(args: &Args, registry: &Registry) -> Result<Vec<DistributionResult>> {
    if !(args.tolerance.is_finite() && args.tolerance >= 0.0) {
        anyhow::bail!("tolerance must be a non-negative number, got {}", args.tolerance);
    }
    let cfg = SimulationConfig {
        draws: args.draws,
        seed: args.seed,
        tolerance: args.tolerance,
    };
    let selected = selected_ids(&args.ids);
    let selected = selected.as_deref();

    if let Some(ids) = selected {
        for id in ids {
            let known = (args.kind.includes_mines() && registry.mines().contains(id))
                || (args.kind.includes_fields() && registry.fields().contains(id));
            if !known {
                eprintln!("⚠️  Unknown definition: {}", id.yellow());
            }
        }
    }

    let mut results = Vec::new();
    if args.kind.includes_mines() {
        for mine in pick(registry.mines().iter(), selected) {
            if args.verbose {
                println!("🎲 Sampling mine {}", mine.id.bold());
            }
            results.push(simulate_mine(mine, cfg));
        }
    }
    if args.kind.includes_fields() {
        for field in pick(registry.fields().iter(), selected) {
            if args.verbose {
                println!("🎲 Sampling field {}", field.id.bold());
            }
            results.push(simulate_field(field, cfg));
        }
    }
    Ok(results)
}

fn write_reports(args: &Args, results: &[DistributionResult], start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report.as_str() {
        "json" => logic::reports::generate_json_report(output_target.writer(), results)?,
        "markdown" => {
            if results.is_empty() {
                writeln!(
                    &mut output_target,
                    "# Minigames Distribution Results\n\n_No definitions sampled._"
                )?;
            } else {
                logic::reports::generate_markdown_report(output_target.writer(), results)?;
            }
        }
        _ => {
            if results.is_empty() {
                writeln!(&mut output_target, "No definitions sampled.")?;
            } else {
                logic::reports::generate_console_report(
                    output_target.writer(),
                    results,
                    start_time.elapsed(),
                )?;
            }
            writeln!(&mut output_target)?;
            writeln!(&mut output_target, "🏁 Total time: {:?}", start_time.elapsed())?;
        }
    }

    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Args {
        Args {
            kind: KindFilter::All,
            ids: "all".to_string(),
            draws: 2_000,
            seed: 1337,
            tolerance: 0.05,
            report: "json".to_string(),
            list: false,
            mines_file: None,
            fields_file: None,
            verbose: false,
            output: None,
        }
    }

    fn temp_file(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!("minigames-tester-{label}-{}", std::process::id()))
    }

    #[test]
    fn all_keyword_selects_everything() {
        assert!(selected_ids("all").is_none());
        assert!(selected_ids("grove,all").is_none());
        assert!(selected_ids(" , ").is_none());
        assert_eq!(
            selected_ids("grove, shallow"),
            Some(vec!["grove".to_string(), "shallow".to_string()])
        );
    }

    #[test]
    fn kind_filter_limits_catalogs() {
        let registry = Registry::seeded();
        let args = Args {
            kind: KindFilter::Field,
            ..base_args()
        };
        let results = run_simulations(&args, &registry).unwrap();
        assert_eq!(results.len(), registry.fields().len());
        assert!(
            results
                .iter()
                .all(|r| r.kind == logic::DefinitionKind::Field)
        );
    }

    #[test]
    fn ids_filter_picks_named_definitions() {
        let registry = Registry::seeded();
        let args = Args {
            ids: "balanced,highland,nowhere".to_string(),
            ..base_args()
        };
        let results = run_simulations(&args, &registry).unwrap();
        let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["balanced", "highland"]);
    }

    #[test]
    fn negative_tolerance_is_rejected() {
        let registry = Registry::seeded();
        let args = Args {
            tolerance: -0.1,
            ..base_args()
        };
        assert!(run_simulations(&args, &registry).is_err());
    }

    #[test]
    fn custom_mines_file_replaces_seed() {
        let path = temp_file("mines.json");
        std::fs::write(
            &path,
            r#"[{"id":"tiny","name":"Tiny","length":3,"gem_rates":{"Opal":0.5}}]"#,
        )
        .unwrap();
        let args = Args {
            mines_file: Some(path),
            ..base_args()
        };
        let registry = load_registry(&args).unwrap();
        assert_eq!(registry.mines().len(), 1);
        assert!(registry.mine("tiny").is_some());
        assert!(registry.field("grove").is_some());
    }

    #[test]
    fn malformed_catalog_file_errors() {
        let path = temp_file("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        let args = Args {
            fields_file: Some(path),
            ..base_args()
        };
        assert!(load_registry(&args).is_err());
    }

    #[test]
    fn write_reports_emits_json_output() {
        let path = temp_file("report.json");
        let args = Args {
            output: Some(path.clone()),
            ..base_args()
        };
        write_reports(&args, &[], Instant::now()).unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("[]"));
    }

    #[test]
    fn list_catalog_writes_both_sections() {
        let path = temp_file("list.txt");
        let args = Args {
            list: true,
            output: Some(path.clone()),
            ..base_args()
        };
        list_catalog(&args, &Registry::seeded()).unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("Mines:"));
        assert!(content.contains("deep-crystal"));
        assert!(content.contains("Fields:"));
        assert!(content.contains("savannah"));
    }
}
