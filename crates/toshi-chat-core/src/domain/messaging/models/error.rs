// toshi-chat/toshi-chat-core
//
// Copyright: 2026, The toshi-chat authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::payments::models::ValueParseError;
use crate::domain::shared::models::AttachmentId;

use super::{ErrorKind, SofaType};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PayloadParseError {
    #[error("Body does not start with a known SOFA type tag")]
    UnknownType,
    #[error("Invalid {sofa_type} body: {message}")]
    InvalidJson {
        sofa_type: SofaType,
        message: String,
    },
    #[error("Invalid {sofa_type} value: {source}")]
    InvalidValue {
        sofa_type: SofaType,
        source: ValueParseError,
    },
}

/// Non-fatal problems encountered while presenting a message. Each of them shows up as an
/// absent field in the presentation model.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PresentationIssue {
    #[error("Malformed payload: {0}")]
    MalformedPayload(#[from] PayloadParseError),
    #[error("None of the attachments {0:?} could be resolved")]
    UnresolvedAttachment(Vec<AttachmentId>),
    #[error("Identity key error: {0}")]
    IdentityKeyError(ErrorKind),
    #[error("No exchange rate available: {0}")]
    MissingExchangeRate(String),
}
