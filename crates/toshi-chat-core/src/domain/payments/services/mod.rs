// toshi-chat/toshi-chat-core
//
// Copyright: 2026, The toshi-chat authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use exchange_rate_source::ExchangeRateSource;
pub use value_formatter::ValueFormatter;

mod exchange_rate_source;
mod value_formatter;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::exchange_rate_source::MockExchangeRateSource;
}
