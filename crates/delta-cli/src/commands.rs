use std::process::ExitCode;

use anyhow::Context;
use colored::{ColoredString, Colorize};
use delta_diff::{
    apply_changes, apply_section_records, diff_sections_with, diff_with, DeltaSection, DiffOutcome,
};
use delta_types::{ChangeSet, CollectionRecord};
use serde_json::json;
use tracing::info;

use crate::cli::*;
use crate::config::CliConfig;
use crate::snapshot::{self, JsonItem, JsonSection};

pub fn run_command(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = CliConfig::resolve(cli.config.as_deref())?;
    match cli.command {
        Command::Diff(args) => cmd_diff(&args, &config.with_args(&args), cli.format),
        Command::Verify(args) => cmd_verify(&args, &config.with_args(&args), cli.format),
    }
}

/// The two parsed snapshot files.
pub enum Snapshots {
    Flat(Vec<JsonItem>, Vec<JsonItem>),
    Sectioned(Vec<JsonSection>, Vec<JsonSection>),
}

/// Records computed for a pair of snapshots.
#[derive(Debug, PartialEq)]
pub enum Report {
    Reload,
    Flat(ChangeSet),
    Sections(Vec<CollectionRecord>),
}

impl Report {
    fn len(&self) -> usize {
        match self {
            Report::Reload => 1,
            Report::Flat(set) => set.len(),
            Report::Sections(records) => records.len(),
        }
    }
}

pub fn read(args: &DiffArgs, config: &CliConfig) -> anyhow::Result<Snapshots> {
    let from = snapshot::load(&args.from)?;
    let to = snapshot::load(&args.to)?;
    if args.sections {
        Ok(Snapshots::Sectioned(
            snapshot::sections(&from, &config.id_field, &config.items_field)
                .with_context(|| format!("in {}", args.from.display()))?,
            snapshot::sections(&to, &config.id_field, &config.items_field)
                .with_context(|| format!("in {}", args.to.display()))?,
        ))
    } else {
        Ok(Snapshots::Flat(
            snapshot::items(&from, &config.id_field)
                .with_context(|| format!("in {}", args.from.display()))?,
            snapshot::items(&to, &config.id_field)
                .with_context(|| format!("in {}", args.to.display()))?,
        ))
    }
}

pub fn compute(snapshots: &Snapshots, config: &CliConfig) -> anyhow::Result<Report> {
    let report = match snapshots {
        Snapshots::Flat(from, to) => match diff_with(from, to, &config.diff)? {
            DiffOutcome::Reload => Report::Reload,
            DiffOutcome::Changes(set) => Report::Flat(set),
        },
        Snapshots::Sectioned(from, to) => {
            Report::Sections(diff_sections_with(from, to, &config.diff)?)
        }
    };
    Ok(report)
}

/// Replay `report` onto the old snapshot. Returns a description of the first
/// mismatch against the new snapshot, if any.
pub fn replay(snapshots: &Snapshots, report: &Report) -> anyhow::Result<Option<String>> {
    match (snapshots, report) {
        (Snapshots::Flat(..), Report::Reload) => Ok(None),
        (Snapshots::Flat(from, to), Report::Flat(set)) => {
            let rebuilt = apply_changes(from, to, &set.changes)?;
            if rebuilt.len() != to.len() {
                return Ok(Some(format!(
                    "expected {} items, rebuilt {}",
                    to.len(),
                    rebuilt.len()
                )));
            }
            Ok(rebuilt
                .iter()
                .zip(to)
                .position(|(got, want)| got != want)
                .map(|i| format!("item {i} should be {}", to[i].value())))
        }
        (Snapshots::Sectioned(from, to), Report::Sections(records)) => {
            let rebuilt = apply_section_records(from, to, records)?;
            Ok(rebuilt
                .iter()
                .zip(to)
                .position(|(got, want)| got.as_slice() != want.items())
                .map(|i| format!("section {i} should be {}", to[i].value())))
        }
        _ => anyhow::bail!("report does not match the snapshot shape"),
    }
}

fn cmd_diff(args: &DiffArgs, config: &CliConfig, format: OutputFormat) -> anyhow::Result<ExitCode> {
    let snapshots = read(args, config)?;
    let report = compute(&snapshots, config)?;
    info!(records = report.len(), "diff complete");

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report_json(&report))?),
        OutputFormat::Text => print_report(&report),
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_verify(args: &DiffArgs, config: &CliConfig, format: OutputFormat) -> anyhow::Result<ExitCode> {
    let snapshots = read(args, config)?;
    let report = compute(&snapshots, config)?;
    let mismatch = replay(&snapshots, &report)?;

    match format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "ok": mismatch.is_none(),
                "records": report.len(),
                "mismatch": mismatch,
            }))?
        ),
        OutputFormat::Text => match &mismatch {
            None => println!(
                "{} {} records reproduce {}",
                "✓".green().bold(),
                report.len(),
                args.to.display()
            ),
            Some(reason) => println!("{} {}", "✗ Mismatch:".red().bold(), reason),
        },
    }

    Ok(if mismatch.is_none() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn report_json(report: &Report) -> serde_json::Value {
    match report {
        Report::Reload => json!({ "reload": true, "records": [] }),
        Report::Flat(set) => json!({ "reload": false, "records": set.changes }),
        Report::Sections(records) => json!({ "reload": false, "records": records }),
    }
}

fn print_report(report: &Report) {
    match report {
        Report::Reload => println!("{}", "reload".magenta().bold()),
        Report::Flat(set) => {
            for change in set {
                println!("  {}", paint(&change.to_string()));
            }
            println!(
                "{} records: {} removed, {} added, {} moved, {} changed",
                set.len().to_string().bold(),
                set.removals(),
                set.additions(),
                set.moves(),
                set.modifications()
            );
        }
        Report::Sections(records) => {
            for record in records {
                println!("  {}", paint(&record.to_string()));
            }
            let sections = records.iter().filter(|r| r.is_section_record()).count();
            println!(
                "{} records: {} item, {} section",
                records.len().to_string().bold(),
                records.len() - sections,
                sections
            );
        }
    }
}

fn paint(line: &str) -> ColoredString {
    if line.starts_with("add") {
        line.green()
    } else if line.starts_with("remove") {
        line.red()
    } else if line.starts_with("move") {
        line.yellow()
    } else if line.starts_with("change") {
        line.cyan()
    } else {
        line.magenta()
    }
}
