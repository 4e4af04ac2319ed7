use crate::config::MatchPolicy;
use serde::Deserialize;
use vigil_common::Finding;

const TITLE: &str = "Log search verification error";

/// Per-partition search response, as returned by the log store.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub hits: SearchHits,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchHits {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub hits: Vec<SearchHit>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchHit {
    #[serde(rename = "_source", default)]
    pub source: HitSource,
}

/// One matching log line. Missing fields deserialize to empty strings, the
/// store does not guarantee all of them on every document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HitSource {
    #[serde(default)]
    pub message: String,
    #[serde(rename = "docker.name", default)]
    pub source_name: String,
    #[serde(rename = "@timestamp", default)]
    pub timestamp: String,
}

impl HitSource {
    fn line(&self) -> String {
        format!("{} {} {}", self.timestamp, self.source_name, self.message)
    }
}

/// Match count and hit list accumulated across all partitions of one window.
#[derive(Debug, Default)]
pub struct MatchSummary {
    pub total: u64,
    pub hits: Vec<HitSource>,
}

/// Merges per-partition response bodies by summing totals and concatenating
/// hits in partition order. Nothing is deduplicated: the same body given
/// twice doubles the summary.
pub fn aggregate(bodies: &[String]) -> serde_json::Result<MatchSummary> {
    let mut summary = MatchSummary::default();

    for body in bodies {
        let response: SearchResponse = serde_json::from_str(body)?;
        summary.total += response.hits.total;
        summary
            .hits
            .extend(response.hits.hits.into_iter().map(|h| h.source));
    }

    Ok(summary)
}

/// Aggregates the per-partition bodies and applies the match policy.
///
/// A malformed body aborts the whole aggregation with a single parse
/// finding; partitions already parsed are discarded.
pub fn verify_matches(bodies: &[String], policy: MatchPolicy, title: &str) -> Vec<Finding> {
    let summary = match aggregate(bodies) {
        Ok(summary) => summary,
        Err(e) => {
            return vec![Finding::new(
                TITLE,
                format!("Failed to parse log search response: {e}"),
            )];
        }
    };

    apply_policy(&summary, policy, title)
}

/// Applies the configured match policy to an aggregated summary.
///
/// `ExactCount` reports a zero total as a single count mismatch, and a
/// non-zero mismatch as one finding per accumulated hit. `AtLeastCount`
/// reports a miss as the count shortfall plus, when any hit was returned,
/// one sample line.
pub fn apply_policy(summary: &MatchSummary, policy: MatchPolicy, title: &str) -> Vec<Finding> {
    let mut findings = Vec::new();

    match policy {
        MatchPolicy::ExactCount(expected) => {
            if summary.total != expected {
                if summary.total == 0 {
                    findings.push(Finding::new(
                        title,
                        format!("Expected {expected} matches but was 0"),
                    ));
                } else {
                    for hit in &summary.hits {
                        findings.push(Finding::new(title, hit.line()));
                    }
                }
            }
        }
        MatchPolicy::AtLeastCount(atleast) => {
            if summary.total < atleast {
                findings.push(Finding::new(
                    title,
                    format!(
                        "Expected at least {atleast} matches but was {}",
                        summary.total
                    ),
                ));
                if let Some(first) = summary.hits.first() {
                    findings.push(Finding::new(
                        title,
                        format!("One of the matching lines: {}", first.line()),
                    ));
                }
            }
        }
    }

    findings
}
