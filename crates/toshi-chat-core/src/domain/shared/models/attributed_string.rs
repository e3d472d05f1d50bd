// toshi-chat/toshi-chat-core
//
// Copyright: 2026, The toshi-chat authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Display, Formatter};
use std::ops::Range;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use strum_macros::{Display as StrumDisplay, EnumString};

use super::string_index::{Utf16Index, Utf8Index, Utf8RangeExt};

/// How a run of text should be rendered. The host maps these to its own fonts and colors.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, StrumDisplay, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
pub enum TextStyle {
    #[default]
    Regular,
    Emphasized,
    Secondary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleRun {
    pub range: Range<Utf8Index>,
    pub style: TextStyle,
}

impl StyleRun {
    /// The slice of `string` this run covers, or `None` if the run does not fall on character
    /// boundaries of `string`.
    pub fn text<'a>(&self, string: &'a str) -> Option<&'a str> {
        string.get(self.range.start.into_inner()..self.range.end.into_inner())
    }
}

/// A string with non-overlapping style runs covering it from start to end.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AttributedString {
    string: String,
    runs: Vec<StyleRun>,
}

impl AttributedString {
    pub fn new(string: impl Into<String>, style: TextStyle) -> Self {
        Self::default().appending(string, style)
    }

    /// Returns a copy with `string` appended in `style`. Adjacent runs with the same style are
    /// merged and empty fragments are ignored.
    pub fn appending(mut self, string: impl Into<String>, style: TextStyle) -> Self {
        let fragment = string.into();
        if fragment.is_empty() {
            return self;
        }

        let start = self.string.len();
        self.string.push_str(&fragment);
        let end = Utf8Index::new(self.string.len());

        match self.runs.last_mut() {
            Some(run) if run.style == style => run.range.end = end,
            _ => self.runs.push(StyleRun {
                range: Utf8Index::new(start)..end,
                style,
            }),
        }

        self
    }

    pub fn as_str(&self) -> &str {
        &self.string
    }

    pub fn runs(&self) -> &[StyleRun] {
        &self.runs
    }

    pub fn is_empty(&self) -> bool {
        self.string.is_empty()
    }

    /// The style runs addressed in UTF-16 code units.
    pub fn utf16_runs(&self) -> Result<Vec<(Range<Utf16Index>, TextStyle)>> {
        self.runs
            .iter()
            .map(|run| Ok((run.range.to_utf16_range(&self.string)?, run.style)))
            .collect()
    }
}

impl Display for AttributedString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.string)
    }
}
