//! Binary entrypoint for the patterns CLI.
use anyhow::Result;
use clap::Parser;
use patterns_cli::{execute, parse_exit_code, Cli};
use patterns_core::{logging, registry, HarnessConfig};
use std::io::Write;

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version go to stdout, usage errors to stderr.
            let _ = err.print();
            std::process::exit(parse_exit_code(&err));
        }
    };
    let config = HarnessConfig::load(cli.config.as_deref())?;
    logging::init(&config.log_level);

    let shared = registry::global();
    patterns_catalog::register_all(&mut shared.write())?;

    let code = {
        let registry = shared.read();
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        let code = execute(&cli.command, &config, &registry, &mut out)?;
        out.flush()?;
        code
    };
    tracing::debug!(code, "exiting");
    std::process::exit(code);
}
