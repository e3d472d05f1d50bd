// toshi-chat/toshi-chat-core
//
// Copyright: 2026, The toshi-chat authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;

use crate::domain::payments::models::CurrencyPair;

/// Provides live exchange rates. Rates change over time, so callers must not cache the result
/// beyond the formatting pass they requested it for.
#[cfg_attr(feature = "test", mockall::automock)]
pub trait ExchangeRateSource: Send + Sync {
    /// Returns how many units of `pair.quote` one unit of `pair.base` is worth.
    fn rate(&self, pair: &CurrencyPair) -> Result<f64>;
}
