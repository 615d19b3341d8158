use anyhow::Result;
use colored::Colorize;
use std::io::Write;
use std::time::Duration;

use super::{DistributionResult, OutcomeStat};

fn pass_counts(results: &[DistributionResult]) -> (usize, usize) {
    let passed = results.iter().filter(|r| r.passed).count();
    (passed, results.len() - passed)
}

fn percent(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

pub fn generate_console_report(
    out: &mut dyn Write,
    results: &[DistributionResult],
    total_duration: Duration,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📊 Distribution Results Summary".bright_cyan().bold())?;
    writeln!(out, "{}", "===============================".cyan())?;

    let (passed, failed) = pass_counts(results);
    writeln!(out, "Definitions checked: {}", results.len())?;
    writeln!(out, "Passed: {}", passed.to_string().green())?;
    writeln!(out, "Failed: {}", failed.to_string().red())?;
    writeln!(out, "Total time: {total_duration:?}")?;
    writeln!(out)?;

    for result in results {
        let status = if result.passed {
            "✅ PASS".green()
        } else {
            "❌ FAIL".red()
        };
        writeln!(
            out,
            "{} {} {} ({})",
            status,
            result.kind.label(),
            result.id.bold(),
            result.name
        )?;
        writeln!(
            out,
            "   Draws: {} (seed {}) in {:?}",
            result.draws, result.seed, result.duration
        )?;
        for warning in &result.config_warnings {
            writeln!(out, "   ⚠️  {}", warning.yellow())?;
        }
        for stat in &result.outcomes {
            write_console_stat(out, stat)?;
        }
        let failures = result.failures();
        if !failures.is_empty() {
            writeln!(out, "   Failures:")?;
            for failure in &failures {
                writeln!(out, "     • {}", failure.red())?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

fn write_console_stat(out: &mut dyn Write, stat: &OutcomeStat) -> Result<()> {
    let observed = percent(stat.observed);
    let observed = if stat.within_tolerance {
        observed.green()
    } else {
        observed.red()
    };
    writeln!(
        out,
        "   {:10} observed {:>8}  expected {:>8}  configured {:>8}  ({} hits)",
        stat.outcome,
        observed,
        percent(stat.expected),
        percent(stat.configured),
        stat.count
    )?;
    Ok(())
}

pub fn generate_json_report(out: &mut dyn Write, results: &[DistributionResult]) -> Result<()> {
    let json_output = serde_json::to_string_pretty(results)?;
    writeln!(out, "{json_output}")?;
    Ok(())
}

pub fn generate_markdown_report(out: &mut dyn Write, results: &[DistributionResult]) -> Result<()> {
    writeln!(out, "# Minigames Distribution Results\n")?;

    let (passed, failed) = pass_counts(results);
    writeln!(out, "## Summary\n")?;
    writeln!(out, "- **Definitions checked**: {}", results.len())?;
    writeln!(out, "- **Passed**: {passed}")?;
    writeln!(out, "- **Failed**: {failed}\n")?;

    writeln!(out, "## Detailed Results\n")?;
    for result in results {
        let status = if result.passed { "✅" } else { "❌" };
        writeln!(
            out,
            "### {} {} `{}` ({})\n",
            status,
            result.kind.label(),
            result.id,
            result.name
        )?;
        writeln!(out, "- **Draws**: {} (seed {})", result.draws, result.seed)?;
        for warning in &result.config_warnings {
            writeln!(out, "- **Warning**: {warning}")?;
        }
        writeln!(out)?;
        writeln!(out, "| Outcome | Configured | Expected | Observed | Hits |")?;
        writeln!(out, "|---|---:|---:|---:|---:|")?;
        for stat in &result.outcomes {
            let mark = if stat.within_tolerance { "" } else { " ⚠️" };
            writeln!(
                out,
                "| {} | {} | {} | {}{} | {} |",
                stat.outcome,
                percent(stat.configured),
                percent(stat.expected),
                percent(stat.observed),
                mark,
                stat.count
            )?;
        }
        let failures = result.failures();
        if !failures.is_empty() {
            writeln!(out, "\n- **Failures**:")?;
            for failure in &failures {
                writeln!(out, "  - {failure}")?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}
