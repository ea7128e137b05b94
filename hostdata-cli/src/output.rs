use hostdata_core::{DisplayConfig, HostRecord, OutputFormat, Session};
use serde::Serialize;
use std::io::{self, Write};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Serialize)]
struct JsonRecord<'a> {
    timestamp: String,
    host: &'a str,
    packets: u32,
    size: u32,
    total_bytes: u64,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    date: Option<String>,
    records: Vec<JsonRecord<'a>>,
    total_bytes: u64,
    skipped: usize,
}

/// Renders the current view of a session, the way the grid and total label
/// of a graphical front end would.
pub struct OutputWriter<'a> {
    format: OutputFormat,
    display: &'a DisplayConfig,
}

impl<'a> OutputWriter<'a> {
    pub fn new(format: OutputFormat, display: &'a DisplayConfig) -> Self {
        Self { format, display }
    }

    pub fn write_session<W: Write>(&self, out: &mut W, session: &Session) -> io::Result<()> {
        match self.format {
            OutputFormat::Table => self.write_table(out, session),
            OutputFormat::Json => self.write_json(out, session),
        }
    }

    fn write_table<W: Write>(&self, out: &mut W, session: &Session) -> io::Result<()> {
        let records = session.view();
        let host_width = records
            .iter()
            .map(|r| r.host().chars().count())
            .max()
            .unwrap_or(0)
            .max("Host".len());

        writeln!(
            out,
            "{:<19}  {:<host_width$}  {:>10}  {:>10}  {:>14}",
            "Timestamp", "Host", "Packets", "Size", "Total"
        )?;
        for record in records {
            writeln!(
                out,
                "{:<19}  {:<host_width$}  {:>10}  {:>10}  {:>14}",
                record.timestamp().format(TIMESTAMP_FORMAT).to_string(),
                record.host(),
                record.packets(),
                record.size(),
                record.total_bytes()
            )?;
        }

        writeln!(out)?;
        if let Some(date) = session.active_date() {
            writeln!(out, "Date: {}", date)?;
        }
        writeln!(
            out,
            "{}: {} {}",
            self.display.total_label,
            session.view_total_bytes(),
            self.display.unit
        )?;
        if !session.skipped().is_empty() {
            writeln!(out, "Skipped lines: {}", session.skipped().len())?;
        }
        Ok(())
    }

    fn write_json<W: Write>(&self, out: &mut W, session: &Session) -> io::Result<()> {
        let report = JsonReport {
            date: session.active_date().map(|d| d.to_string()),
            records: session.view().iter().map(json_record).collect(),
            total_bytes: session.view_total_bytes(),
            skipped: session.skipped().len(),
        };

        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)
    }
}

fn json_record(record: &HostRecord) -> JsonRecord<'_> {
    JsonRecord {
        timestamp: record.timestamp().format(TIMESTAMP_FORMAT).to_string(),
        host: record.host(),
        packets: record.packets(),
        size: record.size(),
        total_bytes: record.total_bytes(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use hostdata_core::LineParser;

    fn session() -> Session {
        Session::from_lines(
            [
                "08:00:00 2024-01-10 hostA 10 0 100",
                "09:00:00 2024-01-10 hostB 5 0 200",
                "bad line",
                "10:00:00 2024-01-11 hostA 2 0 50",
            ],
            &LineParser::default(),
        )
    }

    fn render(format: OutputFormat, display: &DisplayConfig, session: &Session) -> String {
        let mut buffer = Vec::new();
        OutputWriter::new(format, display)
            .write_session(&mut buffer, session)
            .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_table_output() {
        let output = render(OutputFormat::Table, &DisplayConfig::default(), &session());

        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[0].starts_with("Timestamp"));
        assert!(lines[1].starts_with("2024-01-10 08:00:00  hostA"));
        assert!(lines[1].ends_with("1000"));
        assert!(output.contains("Total volume: 2100 bytes"));
        assert!(output.contains("Skipped lines: 1"));
        assert!(!output.contains("Date:"));
    }

    #[test]
    fn test_table_output_uses_display_text() {
        let display = DisplayConfig {
            total_label: "Загальний обсяг".to_string(),
            unit: "байт".to_string(),
            ..DisplayConfig::default()
        };
        let filtered = session().filter_by_date(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());

        let output = render(OutputFormat::Table, &display, &filtered);
        assert!(output.contains("Date: 2024-01-10"));
        assert!(output.contains("Загальний обсяг: 2000 байт"));
    }

    #[test]
    fn test_json_output() {
        let filtered = session().filter_by_date(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
        let output = render(OutputFormat::Json, &DisplayConfig::default(), &filtered);

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["date"], "2024-01-10");
        assert_eq!(value["total_bytes"], 2000);
        assert_eq!(value["skipped"], 1);
        assert_eq!(value["records"].as_array().unwrap().len(), 2);
        assert_eq!(value["records"][1]["host"], "hostB");
        assert_eq!(value["records"][1]["total_bytes"], 1000);
    }
}
