use crate::domain::constants::DATE_FORMAT;
use crate::domain::models::{CalculationResult, GlobalConfig, HistoryEntry, ServiceHours};
use crate::services::output::CodedError;
use chrono::Local;

/// Builds the immutable snapshot for a save. The id is the creation
/// timestamp in millis; two saves in the same millisecond collide, which
/// the stored format accepts.
pub fn new_entry(
    config: &GlobalConfig,
    services: Vec<ServiceHours>,
    results: CalculationResult,
) -> HistoryEntry {
    let now = Local::now();
    let millis = now.timestamp_millis();
    HistoryEntry {
        id: millis.to_string(),
        timestamp: millis,
        date_str: now.format(DATE_FORMAT).to_string(),
        config: config.clone(),
        services,
        results,
    }
}

/// Newest-first is a structural invariant of the stored sequence, not a
/// display-time sort: saves always go to the front.
pub fn prepend(entry: HistoryEntry, current: &[HistoryEntry]) -> Vec<HistoryEntry> {
    let mut next = Vec::with_capacity(current.len() + 1);
    next.push(entry);
    next.extend_from_slice(current);
    next
}

pub fn clear() -> Vec<HistoryEntry> {
    Vec::new()
}

/// Looks an entry up by full id or by a unique id suffix (entries are
/// usually cited by their last four digits).
pub fn find<'a>(history: &'a [HistoryEntry], id: &str) -> anyhow::Result<&'a HistoryEntry> {
    if let Some(entry) = history.iter().find(|e| e.id == id) {
        return Ok(entry);
    }
    let matches: Vec<&HistoryEntry> = history.iter().filter(|e| e.id.ends_with(id)).collect();
    match matches.len() {
        1 => Ok(matches[0]),
        0 => Err(CodedError::new(
            "UNKNOWN_ENTRY",
            format!("history entry not found: {}", id),
        )),
        _ => Err(CodedError::new(
            "AMBIGUOUS_ENTRY",
            format!("id suffix matches more than one entry: {}", id),
        )),
    }
}

pub fn short_id(id: &str) -> &str {
    &id[id.len().saturating_sub(4)..]
}
