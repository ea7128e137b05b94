use anyhow::{Context, Result};
use clap::Parser;
use hostdata_core::{Config, Session};
use std::io;
use tracing::{debug, info};

mod cli;
mod output;

use cli::Cli;
use output::OutputWriter;

fn main() -> Result<()> {
    // Diagnostics go to stderr so stdout stays clean for table/json output
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };
    debug!("Using config: {:?}", config);

    let parser = config.line_parser();
    let format = cli.format.unwrap_or(config.display.format);

    let session = Session::load(&cli.file, &parser)
        .with_context(|| format!("Could not load \"{}\"", cli.file.display()))?;

    let session = match &cli.date {
        Some(text) => {
            let date = parser
                .parse_date(text)
                .with_context(|| format!("Could not use \"{}\" as a filter date", text))?;
            info!("Filtering by date: {}", date);
            session.filter_by_date(date)
        }
        None => session,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    OutputWriter::new(format, &config.display).write_session(&mut out, &session)?;

    Ok(())
}
