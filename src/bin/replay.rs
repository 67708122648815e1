//! Scenario replay for swipebar
//!
//! Runs YAML gesture scenarios against a headless panel set and prints
//! the resulting panel states.
//!
//! Usage:
//!   cargo run --bin swipebar-replay -- scenarios/open_left.yaml
//!   cargo run --bin swipebar-replay -- scenarios/*.yaml --config my.yaml --json

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;

use swipebar::config::SwipeBarConfig;
use swipebar::scenario::{Scenario, ScenarioReport};

#[derive(Parser, Debug)]
#[command(name = "swipebar-replay", about = "Replay swipe gesture scenarios")]
struct Args {
    /// Scenario YAML files
    #[arg(required = true)]
    scenarios: Vec<PathBuf>,
    /// Panel config used by scenarios without their own
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print reports as JSON
    #[arg(long)]
    json: bool,
}

fn print_report(report: &ScenarioReport) {
    let status = if report.passed() { "ok" } else { "FAILED" };
    println!("{} ... {} ({} frames)", report.name, status, report.frames);
    for panel in &report.panels {
        let translate = panel
            .translate_px
            .map(|t| format!("{:.1}px", t))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:<6} {:<10} translate {:<9} listening {}",
            panel.side.as_str(),
            format!("{:?}", panel.state),
            translate,
            panel.listening
        );
    }
    match report.locked {
        Some(side) => println!("  locked by {}", side),
        None => println!("  unlocked"),
    }
    for failure in &report.failures {
        println!("  ✗ {}", failure);
    }
}

fn main() -> Result<()> {
    swipebar::tracing::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SwipeBarConfig::load_from(path)?,
        None => SwipeBarConfig::load(),
    };

    let mut reports = Vec::with_capacity(args.scenarios.len());
    for path in &args.scenarios {
        let scenario = Scenario::load(path)?;
        reports.push(scenario.run(&config));
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            print_report(report);
        }
    }

    let failed = reports.iter().filter(|r| !r.passed()).count();
    if failed > 0 {
        bail!("{} of {} scenarios failed", failed, reports.len());
    }
    Ok(())
}
