use crate::record::HostRecord;
use chrono::NaiveDate;
use tracing::debug;

/// Records whose timestamp falls on `date`, in their original order.
pub fn filter_by_date(records: &[HostRecord], date: NaiveDate) -> Vec<HostRecord> {
    let result: Vec<HostRecord> = records
        .iter()
        .filter(|record| record.date() == date)
        .cloned()
        .collect();

    debug!("Filtered {} records down to {} for {}", records.len(), result.len(), date);
    result
}
