// toshi-chat/toshi-chat-core
//
// Copyright: 2026, The toshi-chat authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Deserializer, Serialize};
use strum_macros::{Display, EnumString};
use tracing::warn;

use crate::domain::payments::models::Wei;

use super::SofaType;

/// The typed content carried inside an envelope's body.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedPayload {
    PlainText(SofaMessage),
    Payment(SofaPayment),
    PaymentRequest(SofaPaymentRequest),
    Command(SofaCommand),
    /// `InitRequest`, `Init` and `Status` messages.
    Control {
        sofa_type: SofaType,
        body: serde_json::Value,
    },
    Unknown,
}

impl DecodedPayload {
    pub fn sofa_type(&self) -> Option<SofaType> {
        match self {
            Self::PlainText(_) => Some(SofaType::Message),
            Self::Payment(_) => Some(SofaType::Payment),
            Self::PaymentRequest(_) => Some(SofaType::PaymentRequest),
            Self::Command(_) => Some(SofaType::Command),
            Self::Control { sofa_type, .. } => Some(*sofa_type),
            Self::Unknown => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SofaMessage {
    pub body: String,
    pub controls: Vec<SofaControl>,
    pub show_keyboard: Option<bool>,
}

impl SofaMessage {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ControlKind {
    Button,
    Group,
}

/// A button (or a group of buttons) a bot attaches to a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SofaControl {
    #[serde(rename = "type")]
    pub kind: ControlKind,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_controls",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub controls: Vec<SofaControl>,
}

/// Deserializes a list of controls, dropping the entries this client does not understand
/// instead of failing the surrounding message.
pub(super) fn deserialize_controls<'de, D>(deserializer: D) -> Result<Vec<SofaControl>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?;

    Ok(values
        .unwrap_or_default()
        .into_iter()
        .filter_map(|value| {
            serde_json::from_value(value)
                .map_err(|err| warn!("Ignoring unsupported control. {}", err.to_string()))
                .ok()
        })
        .collect())
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Unconfirmed,
    Confirmed,
    Error,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SofaPayment {
    pub value: Wei,
    pub status: PaymentStatus,
    pub tx_hash: Option<String>,
    pub from_address: Option<String>,
    pub to_address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SofaPaymentRequest {
    pub value: Wei,
    pub destination_address: Option<String>,
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SofaCommand {
    pub body: String,
    pub value: Option<serde_json::Value>,
}
