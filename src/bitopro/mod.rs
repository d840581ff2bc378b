use reqwest::Client;

mod auth;
mod balance_api;
mod ticker_api;

pub use auth::AuthHeaders;
pub use balance_api::Balance;

const ENDPOINT: &str = "https://api.bitopro.com/v3";

#[derive(Debug, Clone)]
pub struct BitoPro {
    client: Client,
    base_url: String,
}

impl BitoPro {
    pub fn new() -> Self {
        Self::with_base_url(ENDPOINT)
    }

    /// Client against a non-default endpoint, used by the integration
    /// tests to target a local stub exchange.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for BitoPro {
    fn default() -> Self {
        Self::new()
    }
}
