use crate::record::HostRecord;

/// Sum of `packets * size` over all records. Zero for an empty slice.
pub fn total_bytes(records: &[HostRecord]) -> u64 {
    records.iter().map(HostRecord::total_bytes).sum()
}
