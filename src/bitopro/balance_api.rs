use chrono::prelude::*;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use crate::bitopro::auth::{self, APIKEY_HEADER, PAYLOAD_HEADER, SIGNATURE_HEADER};
use crate::bitopro::BitoPro;
use crate::credentials::Credentials;
use crate::error::WorthError;

#[derive(Deserialize, Debug, Clone)]
struct BalanceResponse {
    data: Vec<Balance>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Balance {
    pub currency: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
}

impl BitoPro {
    /// All account balances, zero amounts included. Callers decide what
    /// to keep.
    pub async fn get_balances(
        &self,
        credentials: &Credentials,
    ) -> Result<Vec<Balance>, WorthError> {
        let url = self.url("/accounts/balance");
        let headers = auth::sign(credentials, Utc::now().timestamp_millis());

        let res = self
            .client
            .get(&url)
            .header(APIKEY_HEADER, &headers.api_key)
            .header(PAYLOAD_HEADER, &headers.payload)
            .header(SIGNATURE_HEADER, &headers.signature)
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(|err| WorthError::transport(&url, err))?;

        let body = res
            .text()
            .await
            .map_err(|err| WorthError::transport(&url, err))?;

        debug!("Balance response : {}", body);

        let response: BalanceResponse = serde_json::de::from_str(body.as_str())
            .map_err(|err| WorthError::bad_shape(&url, err.to_string()))?;

        Ok(response.data)
    }
}
