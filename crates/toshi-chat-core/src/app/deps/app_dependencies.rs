// toshi-chat/toshi-chat-core
//
// Copyright: 2026, The toshi-chat authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::domain::payments::services::ExchangeRateSource;

pub type DynExchangeRateSource = Arc<dyn ExchangeRateSource>;
