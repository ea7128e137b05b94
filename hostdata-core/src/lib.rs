// hostdata - traffic log parsing and aggregation
//
// Loads `<time> <date> <host> <packets> <reserved> <size> ...` lines into
// records, filters them by calendar date and totals their byte volume. The
// `hostdata` binary is a thin shell over this library.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod filter;
pub mod input;
pub mod parser;
pub mod record;
pub mod session;

pub use aggregate::total_bytes;
pub use config::{Config, DisplayConfig, OutputFormat, ParsingConfig};
pub use error::{HostDataError, LineError, Result};
pub use filter::filter_by_date;
pub use input::{decode_lines, read_host_file};
pub use parser::{
    parse_host_line, parse_host_lines, parse_time_offset, LineParser, ParseReport, SkippedLine,
    DEFAULT_DATE_FORMATS, MIN_FIELDS,
};
pub use record::HostRecord;
pub use session::Session;
