//! Free-text filtering of a day's appointments, as used by the doctor
//! calendar's search box.

use shared::AppointmentRecord;

/// Case-insensitive match of `query` against the counterpart name or any tag.
/// An empty (or all-whitespace) query matches every record.
pub fn matches_query(record: &AppointmentRecord, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    record.details.counterpart_name().to_lowercase().contains(&needle)
        || record
            .details
            .tags()
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle))
}

/// Records matching `query`, in their original order
pub fn filter_appointments<'a, I>(records: I, query: &str) -> Vec<&'a AppointmentRecord>
where
    I: IntoIterator<Item = &'a AppointmentRecord>,
{
    records
        .into_iter()
        .filter(|record| matches_query(record, query))
        .collect()
}
