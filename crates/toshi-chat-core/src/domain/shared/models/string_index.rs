// toshi-chat/toshi-chat-core
//
// Copyright: 2026, The toshi-chat authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Range;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Utf8Index(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Utf16Index(usize);

impl Utf8Index {
    pub fn new(value: usize) -> Self {
        Self(value)
    }

    pub fn into_inner(self) -> usize {
        self.0
    }

    /// Converts a byte offset into `string` to the equivalent offset in UTF-16 code units,
    /// which is what native text renderers address attributes with.
    pub fn to_utf16_index(&self, string: &str) -> Result<Utf16Index> {
        let mut utf8_idx = self.0;
        let mut utf16_idx = 0;

        for c in string.chars() {
            if utf8_idx == 0 {
                break;
            }

            utf8_idx = utf8_idx
                .checked_sub(c.len_utf8())
                .ok_or(anyhow!("Utf8Index is not at a char boundary."))?;

            utf16_idx += c.len_utf16();
        }

        (utf8_idx == 0)
            .then_some(Utf16Index(utf16_idx))
            .ok_or(anyhow!("Utf8Index is out of bounds."))
    }
}

impl Utf16Index {
    pub fn new(value: usize) -> Self {
        Self(value)
    }

    pub fn into_inner(self) -> usize {
        self.0
    }
}

pub trait Utf8RangeExt {
    fn to_utf16_range(&self, string: &str) -> Result<Range<Utf16Index>>;
}

impl Utf8RangeExt for Range<Utf8Index> {
    fn to_utf16_range(&self, string: &str) -> Result<Range<Utf16Index>> {
        Ok(self.start.to_utf16_index(string)?..self.end.to_utf16_index(string)?)
    }
}
