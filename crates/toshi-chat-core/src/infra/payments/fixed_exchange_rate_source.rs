// toshi-chat/toshi-chat-core
//
// Copyright: 2026, The toshi-chat authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use anyhow::{anyhow, Result};
use parking_lot::RwLock;

use crate::domain::payments::models::CurrencyPair;
use crate::domain::payments::services::ExchangeRateSource;

/// Serves rates that were pushed into it, e.g. by a host that polls a rate API.
#[derive(Default)]
pub struct FixedExchangeRateSource {
    rates: RwLock<HashMap<CurrencyPair, f64>>,
}

impl FixedExchangeRateSource {
    pub fn with_rate(pair: CurrencyPair, rate: f64) -> Self {
        let source = Self::default();
        source.set_rate(pair, rate);
        source
    }

    pub fn set_rate(&self, pair: CurrencyPair, rate: f64) {
        self.rates.write().insert(pair, rate);
    }

    pub fn remove_rate(&self, pair: &CurrencyPair) {
        self.rates.write().remove(pair);
    }
}

impl ExchangeRateSource for FixedExchangeRateSource {
    fn rate(&self, pair: &CurrencyPair) -> Result<f64> {
        self.rates
            .read()
            .get(pair)
            .copied()
            .ok_or(anyhow!("No exchange rate for {pair}"))
    }
}
