use anyhow::Result;
use colored::{ColoredString, Colorize};
use std::io::Write;
use std::time::Duration;
use triforce_logic::{Availability, LocationReport};

use super::ScenarioResult;

#[allow(clippy::cast_precision_loss)]
fn success_rate(results: &[ScenarioResult]) -> f64 {
    if results.is_empty() {
        return 0.0;
    }
    let passed = results.iter().filter(|r| r.passed).count();
    (passed as f64 / results.len() as f64) * 100.0
}

pub fn generate_console_report(
    out: &mut impl Write,
    results: &[ScenarioResult],
    total_duration: Duration,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📊 Scenario Results Summary".bright_cyan().bold())?;
    writeln!(out, "{}", "===========================".cyan())?;

    let total = results.len();
    let passed = results.iter().filter(|r| r.passed).count();
    writeln!(out, "Total scenarios: {total}")?;
    writeln!(out, "Passed: {}", passed.to_string().green())?;
    writeln!(out, "Failed: {}", (total - passed).to_string().red())?;
    writeln!(out, "Success rate: {:.1}%", success_rate(results))?;
    writeln!(out, "Total time: {total_duration:?}")?;
    writeln!(out)?;

    for result in results {
        let status = if result.passed {
            "✅ PASS".green()
        } else {
            "❌ FAIL".red()
        };
        writeln!(out, "{} {}", status, result.scenario_name.bold())?;
        writeln!(
            out,
            "   Checks: {}/{} passed",
            result.checks_passed, result.checks_run
        )?;
        writeln!(out, "   Time: {:?}", result.duration)?;
        if !result.failures.is_empty() {
            writeln!(out, "   Failures:")?;
            for failure in &result.failures {
                writeln!(out, "     • {}", failure.red())?;
            }
        }
        writeln!(out)?;
    }

    if let Some(slowest) = results.iter().max_by_key(|r| r.duration) {
        writeln!(
            out,
            "Slowest: {} ({:?})",
            slowest.scenario_name.yellow(),
            slowest.duration
        )?;
    }
    Ok(())
}

pub fn generate_json_report(out: &mut impl Write, results: &[ScenarioResult]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, results)?;
    writeln!(out)?;
    Ok(())
}

pub fn generate_markdown_report(out: &mut impl Write, results: &[ScenarioResult]) -> Result<()> {
    writeln!(out, "# Triforce Scenario Results\n")?;

    let total = results.len();
    let passed = results.iter().filter(|r| r.passed).count();
    writeln!(out, "## Summary\n")?;
    writeln!(out, "- **Total scenarios**: {total}")?;
    writeln!(out, "- **Passed**: {passed}")?;
    writeln!(out, "- **Failed**: {}", total - passed)?;
    writeln!(out, "- **Success rate**: {:.1}%\n", success_rate(results))?;

    writeln!(out, "## Detailed Results\n")?;
    for result in results {
        let status = if result.passed { "✅" } else { "❌" };
        writeln!(out, "### {} {}\n", status, result.scenario_name)?;
        writeln!(
            out,
            "- **Checks**: {}/{} passed",
            result.checks_passed, result.checks_run
        )?;
        writeln!(out, "- **Time**: {:?}", result.duration)?;
        if !result.failures.is_empty() {
            writeln!(out, "- **Failures**:")?;
            for failure in &result.failures {
                writeln!(out, "  - {failure}")?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

fn paint(availability: Availability) -> ColoredString {
    let label = availability.label();
    match availability {
        Availability::Available => label.green(),
        Availability::Possible => label.yellow(),
        Availability::Glitches => label.magenta(),
        Availability::Unavailable => label.red(),
    }
}

pub fn generate_snapshot_console(
    out: &mut impl Write,
    reports: &[LocationReport],
    goal_met: bool,
) -> Result<()> {
    writeln!(out, "{}", "🗺️  Dungeon Availability".bright_cyan().bold())?;
    writeln!(out, "{}", "========================".cyan())?;
    for report in reports {
        let marker = if report.claimed { "✔" } else { " " };
        writeln!(
            out,
            "{marker} {:<20} {:<14} boss {:<12} chests {}",
            report.location.name(),
            report.boss_name,
            paint(report.boss_availability),
            paint(report.chest_availability)
        )?;
    }
    writeln!(out)?;
    let goal = if goal_met {
        "met".green()
    } else {
        "not met".red()
    };
    writeln!(out, "Goal: {goal}")?;
    Ok(())
}

pub fn generate_snapshot_json(out: &mut impl Write, reports: &[LocationReport]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, reports)?;
    writeln!(out)?;
    Ok(())
}

pub fn generate_snapshot_markdown(
    out: &mut impl Write,
    reports: &[LocationReport],
    goal_met: bool,
) -> Result<()> {
    writeln!(out, "# Dungeon Availability\n")?;
    writeln!(out, "| Location | Boss | Boss availability | Chests | Claimed |")?;
    writeln!(out, "|---|---|---|---|---|")?;
    for report in reports {
        writeln!(
            out,
            "| {} | {} | {} | {} | {} |",
            report.location.name(),
            report.boss_name,
            report.boss_availability,
            report.chest_availability,
            if report.claimed { "yes" } else { "no" }
        )?;
    }
    writeln!(out)?;
    writeln!(out, "Goal met: {}", if goal_met { "yes" } else { "no" })?;
    Ok(())
}
