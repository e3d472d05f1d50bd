// toshi-chat/toshi-chat-core
//
// Copyright: 2026, The toshi-chat authors
// License: Mozilla Public License v2.0 (MPL v2.0)

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueParseError {
    #[error("Value is empty")]
    Empty,
    #[error("Value '{0}' contains invalid digits")]
    InvalidDigits(String),
    #[error("Value '{0}' does not fit into 128 bits")]
    Overflow(String),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValueFormatError {
    #[error("Exchange rate {0} is not a finite, non-negative number")]
    InvalidRate(f64),
}
