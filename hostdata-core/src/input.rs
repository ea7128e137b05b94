use crate::error::{HostDataError, Result};
use encoding_rs::{Encoding, UTF_8};
use std::fs;
use std::path::Path;
use tracing::{debug, error, info, warn};

/// Reads a whole log file into lines.
///
/// A missing or unreadable file is the only failure. Undecodable bytes are
/// replaced with U+FFFD rather than aborting the load: a line whose time, date
/// or count fields are damaged is then skipped by the parser, while damage in
/// the host or ignored columns is carried into the record as is.
pub fn read_host_file(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    info!("Reading log file: {}", path.display());

    let data = match fs::read(path) {
        Ok(data) => {
            debug!("Read {} bytes from file {}", data.len(), path.display());
            data
        }
        Err(e) => {
            error!("Failed to read file {}: {}", path.display(), e);
            return Err(HostDataError::FileAccess {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    let lines = decode_lines(&data);
    debug!("Decoded {} lines from file {}", lines.len(), path.display());
    Ok(lines)
}

/// Decodes raw file contents and splits them on `\n` / `\r\n`.
///
/// A UTF-8, UTF-16LE or UTF-16BE byte-order mark selects the encoding;
/// without one the data is treated as UTF-8.
pub fn decode_lines(data: &[u8]) -> Vec<String> {
    let (encoding, bom_len) = Encoding::for_bom(data).unwrap_or((UTF_8, 0));
    let (text, had_errors) = encoding.decode_without_bom_handling(&data[bom_len..]);

    if had_errors {
        warn!("Input contained invalid {} sequences; they were replaced", encoding.name());
    }

    text.lines().map(str::to_string).collect()
}
