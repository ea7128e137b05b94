use crate::aggregate::total_bytes;
use crate::error::Result;
use crate::filter::filter_by_date;
use crate::input::read_host_file;
use crate::parser::{LineParser, SkippedLine};
use crate::record::HostRecord;
use chrono::NaiveDate;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// What a front end holds between actions: the full data set of the last
/// load and the view currently on screen.
///
/// Both are immutable snapshots. Every action returns a new `Session`
/// instead of editing the old one, so the "all data" and "filtered view"
/// snapshots can never alias each other's changes.
#[derive(Debug, Clone)]
pub struct Session {
    all: Arc<[HostRecord]>,
    view: Arc<[HostRecord]>,
    skipped: Arc<[SkippedLine]>,
    active_date: Option<NaiveDate>,
}

impl Default for Session {
    fn default() -> Self {
        let empty: Arc<[HostRecord]> = Arc::from(Vec::<HostRecord>::new());
        Self {
            view: Arc::clone(&empty),
            all: empty,
            skipped: Arc::from(Vec::<SkippedLine>::new()),
            active_date: None,
        }
    }
}

impl Session {
    /// Reads and parses `path`. Only file access errors are returned.
    pub fn load(path: impl AsRef<Path>, parser: &LineParser) -> Result<Self> {
        let lines = read_host_file(path.as_ref())?;
        let session = Self::from_lines(&lines, parser);
        info!(
            "Loaded {} records from {}",
            session.all.len(),
            path.as_ref().display()
        );
        Ok(session)
    }

    pub fn from_lines<I, S>(lines: I, parser: &LineParser) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let report = parser.parse_with_report(lines);
        let all: Arc<[HostRecord]> = report.records.into();

        Self {
            view: Arc::clone(&all),
            all,
            skipped: report.skipped.into(),
            active_date: None,
        }
    }

    /// Narrows the view to one calendar date. Always filters the full data
    /// set, never the current view.
    pub fn filter_by_date(&self, date: NaiveDate) -> Self {
        Self {
            all: Arc::clone(&self.all),
            view: filter_by_date(&self.all, date).into(),
            skipped: Arc::clone(&self.skipped),
            active_date: Some(date),
        }
    }

    pub fn clear_filter(&self) -> Self {
        Self {
            all: Arc::clone(&self.all),
            view: Arc::clone(&self.all),
            skipped: Arc::clone(&self.skipped),
            active_date: None,
        }
    }

    pub fn all(&self) -> &[HostRecord] {
        &self.all
    }

    pub fn view(&self) -> &[HostRecord] {
        &self.view
    }

    pub fn skipped(&self) -> &[SkippedLine] {
        &self.skipped
    }

    pub fn active_date(&self) -> Option<NaiveDate> {
        self.active_date
    }

    pub fn all_total_bytes(&self) -> u64 {
        total_bytes(&self.all)
    }

    pub fn view_total_bytes(&self) -> u64 {
        total_bytes(&self.view)
    }
}
