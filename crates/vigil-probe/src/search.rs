use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing;
use vigil_check::SearchClient;

/// Posts log-search queries over HTTP and returns the raw response body.
///
/// The response status is deliberately not checked: an error body from the
/// store fails JSON parsing in the aggregator and surfaces as a parse
/// finding there.
pub struct HttpSearchClient {
    client: reqwest::Client,
}

impl HttpSearchClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpSearchClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SearchClient for HttpSearchClient {
    async fn search(&self, url: &str, body: &str) -> Result<String> {
        tracing::debug!(url, "Querying log store");

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_string())
            .send()
            .await?;

        Ok(response.text().await?)
    }
}
