//! make-stats-files: seeds initial stats.ron files for every survivor.
//!
//! Usage:
//!   make-stats-files
//!   make-stats-files --base-dir ../game/assets
//!   make-stats-files --base-dir ../game/assets --roster roster.json --json

use anyhow::{bail, Context, Result};
use std::env;
use survivor_stats_core::{GenerationReport, GeneratorConfig, Roster, StatsFileGenerator};

const DEFAULT_BASE_DIR: &str = "assets";

#[derive(Debug, PartialEq, Eq)]
struct CliArgs {
    base_dir: String,
    roster: Option<String>,
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let cli = parse_args(&args)?;

    let mut config = GeneratorConfig::new(&cli.base_dir);
    if let Some(path) = &cli.roster {
        let roster = Roster::load(path).with_context(|| format!("loading roster {path}"))?;
        log::info!("Using roster {path} ({} survivors)", roster.survivors.len());
        config = config.with_roster(roster);
    }

    let report = StatsFileGenerator::new(config)
        .run()
        .with_context(|| format!("seeding stats under {}", cli.base_dir))?;
    log::info!("Run complete: {} files", report.files.len());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report);
    }
    Ok(())
}

fn parse_args(args: &[String]) -> Result<CliArgs> {
    Ok(CliArgs {
        base_dir: parse_arg(args, "--base-dir")?
            .unwrap_or(DEFAULT_BASE_DIR)
            .to_string(),
        roster: parse_arg(args, "--roster")?.map(str::to_string),
        json: args.iter().any(|a| a == "--json"),
    })
}

fn print_summary(report: &GenerationReport) {
    println!("=== STATS SEEDED ===");
    println!("  base dir:  {}", report.base_dir.display());
    println!("  files:     {}", report.files.len());
    for file in &report.files {
        println!(
            "  {:<10} {} ({} bytes)",
            file.survivor,
            file.path.display(),
            file.bytes
        );
    }
}

/// Value following `flag`, if the flag is present. A flag with nothing
/// after it (or followed by another flag) is an error, never a default.
fn parse_arg<'a>(args: &'a [String], flag: &str) -> Result<Option<&'a str>> {
    let Some(pos) = args.iter().position(|a| a == flag) else {
        return Ok(None);
    };
    match args.get(pos + 1) {
        Some(value) if !value.starts_with("--") => Ok(Some(value.as_str())),
        _ => bail!("{flag} requires a value"),
    }
}
