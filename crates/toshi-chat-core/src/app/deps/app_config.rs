// toshi-chat/toshi-chat-core
//
// Copyright: 2026, The toshi-chat authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::payments::models::{CurrencyPair, FiatCurrency};
use crate::domain::payments::services::ValueFormatter;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// The currency payments are denominated in.
    pub native_currency_symbol: String,
    /// The number of fraction digits shown for native values.
    pub native_fraction_digits: u32,
    /// The currency native values are converted to for display.
    pub fiat_currency: FiatCurrency,
    /// The number of fraction digits shown for fiat values.
    pub fiat_fraction_digits: usize,
    /// Placed between the fiat and the native value in payment subtitles.
    pub subtitle_separator: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            native_currency_symbol: "ETH".to_string(),
            native_fraction_digits: 4,
            fiat_currency: FiatCurrency::Usd,
            fiat_fraction_digits: 2,
            subtitle_separator: " · ".to_string(),
        }
    }
}

impl AppConfig {
    /// Reads a configuration from JSON. Missing keys fall back to their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn currency_pair(&self) -> CurrencyPair {
        CurrencyPair::new(&self.native_currency_symbol, self.fiat_currency)
    }

    pub fn value_formatter(&self) -> ValueFormatter {
        ValueFormatter::new(
            &self.native_currency_symbol,
            self.native_fraction_digits,
            self.fiat_fraction_digits,
        )
    }
}
