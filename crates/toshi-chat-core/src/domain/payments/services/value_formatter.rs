// toshi-chat/toshi-chat-core
//
// Copyright: 2026, The toshi-chat authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::payments::models::{FiatCurrency, ValueFormatError, Wei};

#[derive(Debug, Clone, PartialEq)]
pub struct ValueFormatter {
    native_currency_symbol: String,
    native_fraction_digits: u32,
    fiat_fraction_digits: usize,
}

impl ValueFormatter {
    pub fn new(
        native_currency_symbol: impl Into<String>,
        native_fraction_digits: u32,
        fiat_fraction_digits: usize,
    ) -> Self {
        Self {
            native_currency_symbol: native_currency_symbol.into(),
            native_fraction_digits,
            fiat_fraction_digits,
        }
    }

    pub fn native_currency_symbol(&self) -> &str {
        &self.native_currency_symbol
    }

    /// Formats `wei` with a fixed number of fraction digits, e.g. "0.0067 ETH".
    pub fn ethereum_value_string(&self, wei: Wei) -> String {
        let (integer, fraction) = wei.to_fixed_point(self.native_fraction_digits);

        if self.native_fraction_digits == 0 {
            return format!("{} {}", integer, self.native_currency_symbol);
        }

        format!(
            "{}.{:0width$} {}",
            integer,
            fraction,
            self.native_currency_symbol,
            width = self.native_fraction_digits.min(18) as usize
        )
    }

    /// Formats the fiat equivalent of `wei` at `rate`, e.g. "$8.23 USD".
    pub fn fiat_value_string(
        &self,
        wei: Wei,
        rate: f64,
        currency: FiatCurrency,
    ) -> Result<String, ValueFormatError> {
        if !rate.is_finite() || rate < 0.0 {
            return Err(ValueFormatError::InvalidRate(rate));
        }

        Ok(format!(
            "{}{:.*} {}",
            currency.symbol(),
            self.fiat_fraction_digits,
            wei.to_ether() * rate,
            currency
        ))
    }
}

impl Default for ValueFormatter {
    fn default() -> Self {
        Self::new("ETH", 4, 2)
    }
}
