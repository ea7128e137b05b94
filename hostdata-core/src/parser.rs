use crate::error::LineError;
use crate::record::HostRecord;
use chrono::{Duration, NaiveDate, NaiveTime, Timelike};
use tracing::{debug, info};

/// A line needs at least this many whitespace-separated fields: everything up
/// to and including the size column. Six, not seven, so that the documented
/// six-field sample lines parse (see DESIGN.md, open question 1).
pub const MIN_FIELDS: usize = 6;

/// Date layouts accepted out of the box. All are locale-independent.
pub const DEFAULT_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d.%m.%Y"];

const TIME_FORMATS: &[&str] = &["%H:%M:%S", "%H:%M:%S%.f", "%H:%M"];

const TIME_FIELD: usize = 0;
const DATE_FIELD: usize = 1;
const HOST_FIELD: usize = 2;
const PACKETS_FIELD: usize = 3;
const SIZE_FIELD: usize = 5;

/// A line that did not produce a record, with its 1-based position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line_number: usize,
    pub reason: LineError,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub records: Vec<HostRecord>,
    pub skipped: Vec<SkippedLine>,
}

/// Turns raw log lines of the form
/// `<time> <date> <host> <packets> <reserved> <size> [extra...]`
/// into [`HostRecord`]s.
///
/// The only configurable part is the list of accepted date layouts; every
/// other rule is fixed.
#[derive(Debug, Clone)]
pub struct LineParser {
    date_formats: Vec<String>,
}

impl Default for LineParser {
    fn default() -> Self {
        Self {
            date_formats: DEFAULT_DATE_FORMATS.iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl LineParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends extra chrono date layouts, tried after the defaults.
    pub fn with_date_formats<I, S>(mut self, formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for format in formats {
            let format = format.into();
            if !self.date_formats.contains(&format) {
                self.date_formats.push(format);
            }
        }
        self
    }

    pub fn date_formats(&self) -> &[String] {
        &self.date_formats
    }

    /// Parses every line, keeping valid records in input order and silently
    /// dropping the rest.
    pub fn parse_lines<I, S>(&self, lines: I) -> Vec<HostRecord>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.parse_with_report(lines).records
    }

    /// Same as [`LineParser::parse_lines`] but also reports which lines were
    /// skipped and why.
    pub fn parse_with_report<I, S>(&self, lines: I) -> ParseReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = ParseReport::default();

        for (index, line) in lines.into_iter().enumerate() {
            match self.parse_line(line.as_ref()) {
                Ok(record) => report.records.push(record),
                Err(reason) => {
                    debug!("Skipping line {}: {}", index + 1, reason);
                    report.skipped.push(SkippedLine {
                        line_number: index + 1,
                        reason,
                    });
                }
            }
        }

        info!(
            "Parsed {} records, skipped {} lines",
            report.records.len(),
            report.skipped.len()
        );
        report
    }

    pub fn parse_line(&self, line: &str) -> Result<HostRecord, LineError> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < MIN_FIELDS {
            return Err(LineError::TooFewFields {
                expected: MIN_FIELDS,
                found: fields.len(),
            });
        }

        let offset = parse_time_offset(fields[TIME_FIELD])?;
        let date = self.parse_date(fields[DATE_FIELD])?;
        let host = fields[HOST_FIELD];
        let packets = parse_count("packet count", fields[PACKETS_FIELD])?;
        let size = parse_count("size", fields[SIZE_FIELD])?;

        let timestamp = date
            .and_hms_opt(0, 0, 0)
            .and_then(|midnight| midnight.checked_add_signed(offset))
            .ok_or_else(|| LineError::InvalidTime(fields[TIME_FIELD].to_string()))?;

        Ok(HostRecord::new(timestamp, host, packets, size))
    }

    /// Parses a calendar date using the configured layouts, first match wins.
    pub fn parse_date(&self, text: &str) -> Result<NaiveDate, LineError> {
        self.date_formats
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
            .ok_or_else(|| LineError::InvalidDate(text.to_string()))
    }
}

/// Parses lines with the default [`LineParser`].
pub fn parse_host_lines<I, S>(lines: I) -> Vec<HostRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    LineParser::default().parse_lines(lines)
}

pub fn parse_host_line(line: &str) -> Result<HostRecord, LineError> {
    LineParser::default().parse_line(line)
}

/// Offset from midnight for a time field such as `08:15:30`, `08:15`,
/// `08:15:30.250` or `1.02:00:00` (one day plus two hours).
pub fn parse_time_offset(text: &str) -> Result<Duration, LineError> {
    let invalid = || LineError::InvalidTime(text.to_string());

    // A dot before the first colon separates a whole-day count.
    let (days, clock) = match (text.find('.'), text.find(':')) {
        (Some(dot), Some(colon)) if dot < colon => {
            let days = text[..dot].parse::<u32>().map_err(|_| invalid())?;
            (days, &text[dot + 1..])
        }
        _ => (0, text),
    };

    let time = TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(clock, format).ok())
        .ok_or_else(invalid)?;

    // chrono represents a leap second (`:60`) as nanosecond >= 1s; it would
    // roll the timestamp into the next second and possibly the next date.
    if time.nanosecond() >= 1_000_000_000 {
        return Err(invalid());
    }

    Ok(Duration::days(i64::from(days))
        + Duration::seconds(i64::from(time.num_seconds_from_midnight()))
        + Duration::nanoseconds(i64::from(time.nanosecond())))
}

fn parse_count(field: &'static str, text: &str) -> Result<u32, LineError> {
    text.parse::<u32>().map_err(|_| LineError::InvalidInteger {
        field,
        value: text.to_string(),
    })
}
