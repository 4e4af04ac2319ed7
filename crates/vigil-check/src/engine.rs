use crate::checks;
use crate::config::{CheckConfig, LogSearchConfig};
use crate::logsearch::{aggregate, query, window};
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tracing;
use vigil_common::Finding;

/// Supplies raw probe output for the text-based checks.
///
/// Implementations shell out or read `/proc`; the engine itself never
/// invokes commands. A probe error is captured as a finding and the
/// evaluator still runs against empty output, so e.g. every expected
/// container gets reported missing when the docker probe fails.
#[async_trait]
pub trait Prober: Send + Sync {
    /// One container name per line, each with a leading character to strip.
    async fn container_list(&self) -> Result<String>;

    /// `df`-style table: a header line, then whitespace columns with the
    /// usage percentage in column index 1.
    async fn disk_usage(&self) -> Result<String>;

    /// `/proc/loadavg`-style line with the 5-minute average in field 1.
    async fn load_average(&self) -> Result<String>;
}

/// Fetches one log-search partition and returns the raw response body.
#[async_trait]
pub trait SearchClient: Send + Sync {
    async fn search(&self, url: &str, body: &str) -> Result<String>;
}

/// Runs the configured check battery and concatenates the findings.
pub struct VerificationEngine {
    config: CheckConfig,
}

impl VerificationEngine {
    pub fn new(config: CheckConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// Runs every check in fixed order (containers, disk, load, then each
    /// log search in configured order) and returns the concatenated
    /// findings. An empty vector means all checks passed. A failing check
    /// never cancels the remaining ones.
    pub async fn run(&self, probes: &dyn Prober, search: &dyn SearchClient) -> Vec<Finding> {
        let mut findings = Vec::new();

        let output = match probes.container_list().await {
            Ok(output) => output,
            Err(e) => {
                findings.push(Finding::new(
                    "Docker verification error",
                    format!("Failed to run docker command: {e}"),
                ));
                String::new()
            }
        };
        findings.extend(checks::docker::verify_running_containers(
            &output,
            &self.config.docker_containers,
        ));

        let output = match probes.disk_usage().await {
            Ok(output) => output,
            Err(e) => {
                findings.push(Finding::new(
                    "Disk usage verification error",
                    format!("Failed to run df command: {e}"),
                ));
                String::new()
            }
        };
        findings.extend(checks::disk::verify_disk_usage(
            &output,
            self.config.disk_usage_percent_warning,
        ));

        let output = match probes.load_average().await {
            Ok(output) => output,
            Err(e) => {
                findings.push(Finding::new(
                    "Load average verification error",
                    format!("Failed to read load average: {e}"),
                ));
                String::new()
            }
        };
        findings.extend(checks::load::verify_load_average(
            &output,
            self.config.uptime_load_5_minutes_warning,
        ));

        for entry in &self.config.log_search {
            findings.extend(self.run_log_search(entry, search).await);
        }

        tracing::debug!(count = findings.len(), "Verification run finished");
        findings
    }

    async fn run_log_search(
        &self,
        entry: &LogSearchConfig,
        client: &dyn SearchClient,
    ) -> Vec<Finding> {
        // A window crossing UTC midnight spans two daily partitions, so the
        // result may combine the pre- and post-rotation indexes.
        let partitions = window::partitions_for_window(Utc::now(), entry.lookback_minutes);
        let urls = query::make_urls(&entry.host, entry.port, &partitions);

        let body = match query::make_body(&entry.query, entry.lookback_minutes) {
            Ok(body) => body,
            Err(e) => {
                return vec![Finding::new(
                    "Log search verification error",
                    format!("Failed to build log search request body: {e}"),
                )];
            }
        };

        let mut responses = Vec::new();
        for url in &urls {
            match client.search(url, &body).await {
                Ok(response) => responses.push(response),
                Err(e) => {
                    return vec![Finding::new(
                        "Log search verification error",
                        format!("Failed to query log store: {e}"),
                    )];
                }
            }
        }

        aggregate::verify_matches(&responses, entry.match_policy, &entry.notification_title)
    }
}
