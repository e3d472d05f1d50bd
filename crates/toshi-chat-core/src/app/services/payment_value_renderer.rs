// toshi-chat/toshi-chat-core
//
// Copyright: 2026, The toshi-chat authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use tracing::warn;

use crate::app::deps::{AppConfig, DynExchangeRateSource};
use crate::app::dtos::PresentationModel;
use crate::domain::payments::models::{CurrencyPair, FiatCurrency, Wei};
use crate::domain::payments::services::ValueFormatter;

/// Formats payment values against the current exchange rate.
///
/// `PresentationModel`s carry no value strings of their own. Call `render` right before a model
/// is displayed.
#[derive(Clone)]
pub struct PaymentValueRenderer {
    currency_pair: CurrencyPair,
    fiat_currency: FiatCurrency,
    formatter: ValueFormatter,
    exchange_rate_source: DynExchangeRateSource,
}

impl PaymentValueRenderer {
    pub fn new(config: &AppConfig, exchange_rate_source: DynExchangeRateSource) -> Self {
        Self {
            currency_pair: config.currency_pair(),
            fiat_currency: config.fiat_currency,
            formatter: config.value_formatter(),
            exchange_rate_source,
        }
    }

    /// Returns a copy of `model` with `ethereum_value_string` and `fiat_value_string` set. The
    /// fiat value stays absent if no exchange rate is available. Models without a payment
    /// value are returned unchanged.
    pub fn render(&self, model: &PresentationModel) -> PresentationModel {
        let Some(value) = model.payment_value() else {
            return model.clone();
        };

        let fiat_value_string = self
            .fiat_value_string(value)
            .map_err(|err| warn!("Could not format fiat value. {}", err.to_string()))
            .ok();

        PresentationModel {
            ethereum_value_string: Some(self.ethereum_value_string(value)),
            fiat_value_string,
            ..model.clone()
        }
    }

    pub fn ethereum_value_string(&self, value: Wei) -> String {
        self.formatter.ethereum_value_string(value)
    }

    /// Converts `value` at the rate the exchange rate source reports right now.
    pub fn fiat_value_string(&self, value: Wei) -> Result<String> {
        let rate = self.exchange_rate_source.rate(&self.currency_pair)?;
        Ok(self
            .formatter
            .fiat_value_string(value, rate, self.fiat_currency)?)
    }
}
