use clap::Parser;
use hostdata_core::OutputFormat;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "hostdata",
    about = "Load a traffic log, optionally filter it by date, and total its byte volume",
    version = "0.1.0",
    author = "Hostdata Team"
)]
pub struct Cli {
    /// Traffic log file to load
    pub file: PathBuf,

    /// Only show records from this date (e.g. 2024-01-10)
    #[arg(short, long)]
    pub date: Option<String>,

    /// Output format (table, json); overrides the config file
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Config file to use instead of .hostdata.toml / ~/.config/hostdata/config.toml
    #[arg(short, long, env = "HOSTDATA_CONFIG")]
    pub config: Option<PathBuf>,
}
