//! Evaluate a tank mixing scenario
//!
//! Reads a scenario JSON file (or uses the built-in example), optionally
//! replaces its options from a separate JSON file, and prints the evaluation
//! as JSON on stdout. Logs go to stderr.
//!
//! Run with: cargo run --features cli --bin evaluate_scenario -- [scenario.json] [--options options.json]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tank_mixing::{evaluate, evaluation_to_json, load_scenario, Options, Scenario};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "evaluate_scenario")]
#[command(about = "Screen a tank scenario for mixing problems and print the evaluation as JSON")]
struct Args {
    /// Scenario JSON file; the built-in example is used when omitted
    scenario: Option<PathBuf>,

    /// Options JSON file replacing the scenario's own options
    #[arg(long)]
    options: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tank_mixing=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let mut scenario = match &args.scenario {
        Some(path) => load_scenario(path)?,
        None => {
            tracing::info!("No scenario file given, using the built-in example");
            Scenario::default_example()
        }
    };

    if let Some(path) = &args.options {
        scenario.options = Options::load(path)?;
        tracing::info!("Loaded options from {:?}", path);
    }

    let evaluation = evaluate(&scenario);
    tracing::info!(
        "{}: overall {} (vertical {}, horizontal {}), dominant risk {:?}",
        scenario.name,
        evaluation.overall_status,
        evaluation.vertical_status,
        evaluation.horizontal_status,
        evaluation.dominant_risk
    );

    println!("{}", evaluation_to_json(&evaluation)?);
    Ok(())
}
