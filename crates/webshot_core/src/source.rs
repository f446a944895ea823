use crate::WorkItem;

/// Parses a newline-delimited work-item listing.
///
/// Each line is trimmed; blank and whitespace-only lines are dropped.
/// Item order follows line order.
pub fn parse_work_items(raw: &str) -> Vec<WorkItem> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
