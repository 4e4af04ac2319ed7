use chrono::{DateTime, Duration, Utc};

/// Formats the UTC calendar date of an instant as a daily partition id
/// (`YYYY.MM.DD`).
pub fn partition_date(ts: DateTime<Utc>) -> String {
    ts.format("%Y.%m.%d").to_string()
}

/// Resolves the daily index partitions a lookback window touches.
///
/// The log store rotates to a new partition at UTC midnight. If the window
/// start falls on a different UTC calendar day than `now`, both the
/// pre-midnight and the post-midnight partition are returned, oldest first;
/// otherwise only today's. Lookback windows are assumed to stay under ~24h,
/// so at most one rotation boundary is crossed.
pub fn partitions_for_window(now: DateTime<Utc>, lookback_minutes: u32) -> Vec<String> {
    let start = now - Duration::minutes(i64::from(lookback_minutes));

    if start.date_naive() != now.date_naive() {
        vec![partition_date(start), partition_date(now)]
    } else {
        vec![partition_date(now)]
    }
}
