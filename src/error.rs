/// Errors surfaced by the worth computation. Fail-fast: the first error
/// aborts the whole run, no partial totals.
#[derive(Debug, thiserror::Error)]
pub enum WorthError {
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("unexpected response shape from {endpoint}: {detail}")]
    BadResponseShape { endpoint: String, detail: String },
    #[error("no price available for pair {pair}")]
    PriceUnavailable { pair: String },
}

impl WorthError {
    pub fn transport(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Transport {
            endpoint: endpoint.into(),
            source,
        }
    }

    pub fn bad_shape(endpoint: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::BadResponseShape {
            endpoint: endpoint.into(),
            detail: detail.into(),
        }
    }
}
