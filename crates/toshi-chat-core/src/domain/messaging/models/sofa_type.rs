// toshi-chat/toshi-chat-core
//
// Copyright: 2026, The toshi-chat authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

/// The type tags of the SOFA protocol. A raw body is the tag immediately followed by a JSON
/// object, e.g. `SOFA::Message:{"body":"o hai"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum SofaType {
    Message,
    Command,
    InitRequest,
    Init,
    PaymentRequest,
    Payment,
    Status,
}

impl SofaType {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Message => "SOFA::Message:",
            Self::Command => "SOFA::Command:",
            Self::InitRequest => "SOFA::InitRequest:",
            Self::Init => "SOFA::Init:",
            Self::PaymentRequest => "SOFA::PaymentRequest:",
            Self::Payment => "SOFA::Payment:",
            Self::Status => "SOFA::Status:",
        }
    }

    /// Splits `raw` into its type and the body following the tag.
    pub fn split_tag(raw: &str) -> Option<(SofaType, &str)> {
        SofaType::iter().find_map(|sofa_type| {
            raw.strip_prefix(sofa_type.tag())
                .map(|body| (sofa_type, body))
        })
    }
}
