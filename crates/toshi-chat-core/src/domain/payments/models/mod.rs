// toshi-chat/toshi-chat-core
//
// Copyright: 2026, The toshi-chat authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use currency::{CurrencyPair, FiatCurrency};
pub use error::{ValueFormatError, ValueParseError};
pub use wei::{Wei, WEI_PER_ETHER};

mod currency;
mod error;
mod wei;
