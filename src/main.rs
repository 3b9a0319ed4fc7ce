//! Meeras - Entry Point
//!
//! `meeras calculate` distributes an estate for the heirs given on the
//! command line or in an input file; `meeras rules` browses the rule texts.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Deserialize;

use meeras::core::error::{MeerasError, Result};
use meeras::engine::InheritanceEngine;
use meeras::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "meeras")]
#[command(about = "Hanafi inheritance share calculator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Distribute an estate among the given heirs
    Calculate(CalculateArgs),
    /// List or search the rule texts
    Rules(RulesArgs),
}

#[derive(Args, Debug)]
struct CalculateArgs {
    /// Gender of the deceased: male or female
    #[arg(long)]
    gender: Option<DeceasedGender>,

    /// Heir count as id=count, e.g. --heir sons=2 (repeatable)
    #[arg(long = "heir", value_parser = parse_heir)]
    heirs: Vec<(HeirId, i64)>,

    /// JSON or TOML file with `gender` and a `heirs` table
    #[arg(long)]
    input: Option<PathBuf>,

    /// Engine config TOML (defaults to built-in values)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Args, Debug)]
struct RulesArgs {
    /// Only rules whose id, title or text contains this
    #[arg(long)]
    search: Option<String>,

    /// Language of the rule texts: en or ur
    #[arg(long, default_value = "en")]
    lang: Language,
}

/// Contents of an `--input` file
#[derive(Deserialize, Debug)]
struct InputFile {
    gender: Option<DeceasedGender>,
    #[serde(default)]
    heirs: HeirQuantities,
}

fn parse_heir(raw: &str) -> std::result::Result<(HeirId, i64), String> {
    let (id, count) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected id=count, got '{}'", raw))?;
    let id: HeirId = id.trim().parse().map_err(|e: MeerasError| e.to_string())?;
    let count: i64 = count
        .trim()
        .parse()
        .map_err(|_| format!("invalid count '{}' for {}", count, id))?;
    Ok((id, count))
}

fn load_input(path: &Path) -> Result<InputFile> {
    let content = std::fs::read_to_string(path)?;
    let is_toml = path.extension().is_some_and(|ext| ext == "toml");
    if is_toml {
        Ok(toml::from_str(&content)?)
    } else {
        Ok(serde_json::from_str(&content)?)
    }
}

fn run_calculate(args: CalculateArgs) -> Result<()> {
    let engine = match &args.config {
        Some(path) => InheritanceEngine::new(EngineConfig::load_from_toml(path)?),
        None => InheritanceEngine::global(),
    };

    let (mut quantities, file_gender) = match &args.input {
        Some(path) => {
            let input = load_input(path)?;
            (input.heirs, input.gender)
        }
        None => (HeirQuantities::new(), None),
    };
    for (id, count) in &args.heirs {
        quantities.set(*id, *count);
    }

    let gender = args
        .gender
        .or(file_gender)
        .ok_or_else(|| MeerasError::UnknownGender("missing --gender".into()))?;

    tracing::info!(gender = %gender, heirs = quantities.len(), "calculating");
    let outcome = engine.calculate(&quantities, gender);

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
        OutputFormat::Text => print_outcome(&outcome),
    }
    Ok(())
}

fn print_outcome(outcome: &CalculationOutcome) {
    println!("{:<28} {:>10} {:>9}", "Heir", "Share", "%");
    for result in &outcome.results {
        if result.is_blocked {
            let by = result.blocked_by.as_deref().unwrap_or("");
            println!("{:<28} {:>10}   blocked by {}", result.heir.label(), "-", by);
        } else {
            println!(
                "{:<28} {:>10} {:>8.2}%",
                result.heir.label(),
                result.share_fraction,
                result.percentage
            );
        }
    }

    println!();
    println!("Steps:");
    for (i, line) in outcome.step_lines().iter().enumerate() {
        println!("  {}. {}", i + 1, line);
    }
}

fn run_rules(args: RulesArgs) {
    let rules = RuleText::search(args.search.as_deref().unwrap_or(""), args.lang);
    if rules.is_empty() {
        println!("No rules match");
        return;
    }

    for (category, entries) in RuleText::grouped(&rules) {
        println!("== {} ==", category.name(args.lang));
        for rule in entries {
            println!("{}) {}", rule.id, rule.title(args.lang));
            println!("   {}", rule.content(args.lang));
        }
        println!();
    }
}

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("meeras=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Calculate(args) => run_calculate(args)?,
        Command::Rules(args) => run_rules(args),
    }
    Ok(())
}
