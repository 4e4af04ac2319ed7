use serde_json::json;

/// Builds one search URL per resolved partition.
pub fn make_urls(host: &str, port: u16, partitions: &[String]) -> Vec<String> {
    partitions
        .iter()
        .map(|p| format!("http://{host}:{port}/logstash-{p}/logs/_search"))
        .collect()
}

/// Renders the search request body for a query string and lookback window.
///
/// The user query lands inside a `query_string` query (JSON-escaped by
/// serialization) and the lookback becomes a relative `now-<N>m` range on
/// `@timestamp`. The surrounding envelope caps the result size at 500 and
/// sorts newest first.
pub fn make_body(query: &str, lookback_minutes: u32) -> serde_json::Result<String> {
    let body = json!({
        "query": {
            "filtered": {
                "query": {
                    "query_string": {
                        "query": query
                    }
                },
                "filter": {
                    "bool": {
                        "must": [
                            {
                                "range": {
                                    "@timestamp": {
                                        "gte": format!("now-{lookback_minutes}m")
                                    }
                                }
                            }
                        ],
                        "must_not": []
                    }
                }
            }
        },
        "size": 500,
        "sort": {
            "@timestamp": "desc"
        },
        "fields": ["_source"],
        "script_fields": {},
        "fielddata_fields": ["timestamp", "@timestamp"]
    });

    serde_json::to_string(&body)
}
