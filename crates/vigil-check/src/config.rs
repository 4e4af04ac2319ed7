use serde::{Deserialize, Serialize};

/// Threshold policy applied to the aggregated match count of a log search.
///
/// Externally tagged, so a config carries exactly one of the two variants;
/// entries with both or neither fail to deserialize instead of being
/// resolved by a runtime null-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// The aggregated total must equal this count exactly.
    ExactCount(u64),
    /// The aggregated total must reach this count.
    AtLeastCount(u64),
}

/// The fixed check battery one verification run executes.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckConfig {
    /// Containers expected to be running.
    #[serde(default)]
    pub docker_containers: Vec<String>,
    /// Inclusive disk usage percentage that triggers a finding.
    pub disk_usage_percent_warning: u32,
    /// Inclusive 5-minute load average that triggers a finding.
    pub uptime_load_5_minutes_warning: f64,
    #[serde(default)]
    pub log_search: Vec<LogSearchConfig>,
}

/// One log-search check: a query, its lookback window, and the match policy
/// applied to the result.
#[derive(Debug, Clone, Deserialize)]
pub struct LogSearchConfig {
    pub host: String,
    pub port: u16,
    /// Query string passed to the store's `query_string` query.
    pub query: String,
    /// Trailing window, in minutes, the search covers.
    pub lookback_minutes: u32,
    pub match_policy: MatchPolicy,
    /// Title carried by findings this check's match policy produces.
    pub notification_title: String,
}
