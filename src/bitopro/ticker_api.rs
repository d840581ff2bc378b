use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::bitopro::BitoPro;
use crate::error::WorthError;

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
struct Ticker {
    last_price: Option<String>,
}

/// The ticker endpoint wraps its payload in a `data` field that holds
/// either a single object or a one-element array depending on how the
/// pair was requested.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum TickerData {
    One(Ticker),
    Many(Vec<Ticker>),
}

fn normalize(body: Value) -> Result<Option<Ticker>, serde_json::Error> {
    match body.get("data") {
        Some(data) => {
            let data: TickerData = serde_json::from_value(data.clone())?;
            Ok(match data {
                TickerData::One(ticker) => Some(ticker),
                TickerData::Many(tickers) => tickers.into_iter().next(),
            })
        }
        // Some deployments return the ticker at the root
        None => serde_json::from_value(body).map(Some),
    }
}

impl BitoPro {
    /// Latest traded price for a pair like `btc_twd`. Unauthenticated.
    pub async fn get_ticker_price(&self, pair: &str) -> Result<Decimal, WorthError> {
        let url = self.url(&format!("/tickers/{pair}"));

        let res = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(|err| WorthError::transport(&url, err))?;

        let body = res
            .text()
            .await
            .map_err(|err| WorthError::transport(&url, err))?;

        debug!("Ticker response for {} : {}", pair, body);

        let body: Value = serde_json::de::from_str(body.as_str())
            .map_err(|err| WorthError::bad_shape(&url, err.to_string()))?;
        let ticker =
            normalize(body).map_err(|err| WorthError::bad_shape(&url, err.to_string()))?;

        let price = ticker
            .and_then(|ticker| ticker.last_price)
            .filter(|price| !price.is_empty())
            .ok_or_else(|| WorthError::PriceUnavailable {
                pair: pair.to_string(),
            })?;

        Decimal::from_str(price.as_str())
            .map_err(|err| WorthError::bad_shape(&url, format!("lastPrice: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_data_as_object() {
        let body = json!({ "data": { "pair": "btc_twd", "lastPrice": "100" } });
        let ticker = normalize(body).unwrap().unwrap();
        assert_eq!(ticker.last_price.as_deref(), Some("100"));
    }

    #[test]
    fn test_data_as_array() {
        let body = json!({ "data": [{ "pair": "btc_twd", "lastPrice": "100" }] });
        let ticker = normalize(body).unwrap().unwrap();
        assert_eq!(ticker.last_price.as_deref(), Some("100"));
    }

    #[test]
    fn test_bare_body() {
        let body = json!({ "pair": "btc_twd", "lastPrice": "100" });
        let ticker = normalize(body).unwrap().unwrap();
        assert_eq!(ticker.last_price.as_deref(), Some("100"));
    }

    #[test]
    fn test_empty_data_array() {
        let body = json!({ "data": [] });
        let ticker = normalize(body).unwrap();
        assert!(ticker.is_none());
    }

    #[test]
    fn test_missing_last_price() {
        let body = json!({ "data": { "pair": "btc_twd", "volume": "12.3" } });
        let ticker = normalize(body).unwrap().unwrap();
        assert!(ticker.last_price.is_none());
    }
}
