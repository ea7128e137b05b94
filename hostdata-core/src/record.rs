use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// One parsed traffic observation.
///
/// Records are only built by the parser and are never mutated afterwards, so
/// the fields stay private and are exposed through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostRecord {
    timestamp: NaiveDateTime,
    host: String,
    packets: u32,
    size: u32,
}

impl HostRecord {
    pub(crate) fn new(timestamp: NaiveDateTime, host: impl Into<String>, packets: u32, size: u32) -> Self {
        Self {
            timestamp,
            host: host.into(),
            packets,
            size,
        }
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Calendar-date component of the timestamp.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn packets(&self) -> u32 {
        self.packets
    }

    /// Bytes per packet.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// `packets * size`, widened so the product cannot overflow.
    pub fn total_bytes(&self) -> u64 {
        u64::from(self.packets) * u64::from(self.size)
    }
}
