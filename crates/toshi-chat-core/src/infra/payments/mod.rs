// toshi-chat/toshi-chat-core
//
// Copyright: 2026, The toshi-chat authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use fixed_exchange_rate_source::FixedExchangeRateSource;

mod fixed_exchange_rate_source;
