// toshi-chat/toshi-chat-core
//
// Copyright: 2026, The toshi-chat authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ValueParseError;

pub const WEI_PER_ETHER: u128 = 1_000_000_000_000_000_000;
const ETHER_DECIMALS: u32 = 18;

/// An amount of ether in its minor unit.
///
/// On the wire values are `0x`-prefixed hex strings, e.g. `"0x17ac784453a3d2"`. Plain decimal
/// strings are accepted as well.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Wei(u128);

impl Wei {
    pub fn new(value: u128) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u128 {
        self.0
    }

    pub fn to_ether(&self) -> f64 {
        self.0 as f64 / WEI_PER_ETHER as f64
    }

    /// Rounds half-up to `fraction_digits` digits of ether and returns the integer and the
    /// fractional part, e.g. `(0, 67)` for 0.0067 ether with four digits.
    pub fn to_fixed_point(&self, fraction_digits: u32) -> (u128, u128) {
        let fraction_digits = fraction_digits.min(ETHER_DECIMALS);
        let scale = 10u128.pow(ETHER_DECIMALS - fraction_digits);

        let mut units = self.0 / scale;
        let remainder = self.0 % scale;
        if remainder > 0 && remainder >= scale - remainder {
            units += 1;
        }

        let fraction_scale = 10u128.pow(fraction_digits);
        (units / fraction_scale, units % fraction_scale)
    }
}

impl FromStr for Wei {
    type Err = ValueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let (digits, radix) = match trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
        {
            Some(hex) => (hex, 16),
            None => (trimmed, 10),
        };

        if digits.is_empty() {
            return Err(ValueParseError::Empty);
        }

        if !digits.chars().all(|c| c.is_digit(radix)) {
            return Err(ValueParseError::InvalidDigits(s.to_string()));
        }

        u128::from_str_radix(digits, radix)
            .map(Wei)
            .map_err(|_| ValueParseError::Overflow(s.to_string()))
    }
}

impl TryFrom<String> for Wei {
    type Error = ValueParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Wei> for String {
    fn from(value: Wei) -> Self {
        value.to_string()
    }
}

impl Display for Wei {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
