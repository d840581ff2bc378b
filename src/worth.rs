use std::fmt::Display;

use colored::Colorize;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use tracing::info;

use crate::bitopro::BitoPro;
use crate::credentials::Credentials;
use crate::error::WorthError;

/// Valuation currency. Balances held in it are passed through as-is.
const FIAT: &str = "twd";

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AssetValue {
    pub currency: String,
    pub value: Decimal,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AssetWorth {
    pub assets: Vec<AssetValue>,
    pub total: Decimal,
}

fn pair_for(currency: &str) -> String {
    format!("{}_{}", currency.to_lowercase(), FIAT)
}

impl BitoPro {
    /// Total account worth in TWD: fetch balances, drop empty ones, price
    /// each remaining asset through its `{currency}_twd` ticker and sum in
    /// the order the exchange returned them. Any failed lookup aborts the
    /// whole computation.
    pub async fn asset_worth(&self, credentials: &Credentials) -> Result<AssetWorth, WorthError> {
        let balances = self.get_balances(credentials).await?;

        let mut assets = vec![];
        let mut total = dec!(0);

        for balance in balances.into_iter().filter(|b| b.amount > dec!(0)) {
            let value = if balance.currency.to_lowercase() == FIAT {
                balance.amount
            } else {
                let price = self.get_ticker_price(&pair_for(&balance.currency)).await?;
                balance.amount * price
            };

            info!("{} : {}", balance.currency, value);

            total += value;
            assets.push(AssetValue {
                currency: balance.currency,
                value,
            });
        }

        Ok(AssetWorth { assets, total })
    }
}

impl Display for AssetWorth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let assets = self
            .assets
            .iter()
            .map(|asset| format!("{}: {}", asset.currency, asset.value.to_string().purple()))
            .collect::<Vec<String>>();
        write!(
            f,
            "~{} TWD : {}",
            self.total.to_string().yellow(),
            assets.join(" / ")
        )
    }
}
