//! `patterns` command line: run or list the catalog
use anyhow::Result;
use clap::{Parser, Subcommand};
use patterns_core::{HarnessConfig, OutputFormat, Registry, RunReport, Runner};
use std::io::Write;
use std::path::PathBuf;

/// Exit code for command line usage errors (BSD `EX_USAGE`). Kept apart
/// from the report codes 0, 1 and 2.
pub const USAGE_EXIT_CODE: i32 = 64;

#[derive(Parser, Debug)]
#[command(name = "patterns")]
#[command(about = "Run design pattern demonstrations", long_about = None)]
#[command(after_help = "Exit codes: 0 all ok, 1 an example failed, 2 an unknown name, 64 usage error")]
pub struct Cli {
    /// YAML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run every example, or only the ones named
    Run {
        #[arg(long, value_delimiter = ',')]
        only: Option<Vec<String>>,
        #[arg(long)]
        format: Option<OutputFormat>,
    },
    /// List registered examples
    List,
}

/// Exit code for a failed parse. Help and version requests are not errors.
pub fn parse_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() {
        USAGE_EXIT_CODE
    } else {
        0
    }
}

/// Executes `command` against `registry`, writing the report to `out`.
/// Returns the process exit code.
pub fn execute<W: Write>(
    command: &Command,
    config: &HarnessConfig,
    registry: &Registry,
    out: &mut W,
) -> Result<i32> {
    match command {
        Command::Run { only, format } => {
            let runner = Runner::new(registry);
            let report = match only {
                Some(names) => runner.run(names),
                None => runner.run_all(),
            };
            match format.unwrap_or(config.format) {
                OutputFormat::Text => render_text(&report, out)?,
                OutputFormat::Json => render_json(&report, out)?,
            }
            Ok(report.exit_code())
        }
        Command::List => {
            for (name, example) in registry.iter() {
                writeln!(
                    out,
                    "{:<18} {:<11} {}",
                    name,
                    example.category().to_string(),
                    example.summary()
                )?;
            }
            Ok(0)
        }
    }
}

pub fn render_text<W: Write>(report: &RunReport, out: &mut W) -> Result<()> {
    for result in &report.results {
        writeln!(out, "== {} [{}] ({} ms)", result.name, result.outcome, result.elapsed_ms)?;
        for line in &result.output {
            writeln!(out, "   {}", line)?;
        }
    }
    writeln!(out, "{}", report.summary())?;
    Ok(())
}

pub fn render_json<W: Write>(report: &RunReport, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}
