// toshi-chat/toshi-chat-core
//
// Copyright: 2026, The toshi-chat authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::payments::models::Wei;

use super::payload::deserialize_controls;
use super::{
    DecodedPayload, PayloadParseError, PaymentStatus, SofaCommand, SofaControl, SofaMessage,
    SofaPayment, SofaPaymentRequest, SofaType,
};

/// Decodes and encodes SOFA bodies.
pub struct SofaParser;

impl SofaParser {
    pub fn decode(raw: &str) -> Result<DecodedPayload, PayloadParseError> {
        let (sofa_type, body) = SofaType::split_tag(raw).ok_or(PayloadParseError::UnknownType)?;

        let payload = match sofa_type {
            SofaType::Message => {
                let body = parse_body::<MessageBody>(sofa_type, body)?;
                DecodedPayload::PlainText(SofaMessage {
                    body: body.body,
                    controls: body.controls,
                    show_keyboard: body.show_keyboard,
                })
            }
            SofaType::Command => {
                let body = parse_body::<CommandBody>(sofa_type, body)?;
                DecodedPayload::Command(SofaCommand {
                    body: body.body,
                    value: body.value,
                })
            }
            SofaType::Payment => {
                let body = parse_body::<PaymentBody>(sofa_type, body)?;
                DecodedPayload::Payment(SofaPayment {
                    value: parse_value(sofa_type, &body.value)?,
                    status: body.status.unwrap_or_default(),
                    tx_hash: body.tx_hash,
                    from_address: body.from_address,
                    to_address: body.to_address,
                })
            }
            SofaType::PaymentRequest => {
                let body = parse_body::<PaymentRequestBody>(sofa_type, body)?;
                DecodedPayload::PaymentRequest(SofaPaymentRequest {
                    value: parse_value(sofa_type, &body.value)?,
                    destination_address: body.destination_address,
                    body: body.body,
                })
            }
            SofaType::InitRequest | SofaType::Init | SofaType::Status => {
                let body = parse_body::<serde_json::Map<String, serde_json::Value>>(sofa_type, body)?;
                DecodedPayload::Control {
                    sofa_type,
                    body: serde_json::Value::Object(body),
                }
            }
        };

        Ok(payload)
    }

    /// Encodes `payload` into a raw body. Returns `None` for payloads without a SOFA type.
    pub fn encode(payload: &DecodedPayload) -> Option<String> {
        let sofa_type = payload.sofa_type()?;

        let body = match payload {
            DecodedPayload::PlainText(message) => serde_json::to_string(&MessageBody {
                body: message.body.clone(),
                controls: message.controls.clone(),
                show_keyboard: message.show_keyboard,
            }),
            DecodedPayload::Command(command) => serde_json::to_string(&CommandBody {
                body: command.body.clone(),
                value: command.value.clone(),
            }),
            DecodedPayload::Payment(payment) => serde_json::to_string(&PaymentBody {
                value: payment.value.to_string(),
                status: Some(payment.status),
                tx_hash: payment.tx_hash.clone(),
                from_address: payment.from_address.clone(),
                to_address: payment.to_address.clone(),
            }),
            DecodedPayload::PaymentRequest(request) => serde_json::to_string(&PaymentRequestBody {
                value: request.value.to_string(),
                destination_address: request.destination_address.clone(),
                body: request.body.clone(),
            }),
            DecodedPayload::Control { body, .. } => serde_json::to_string(body),
            DecodedPayload::Unknown => return None,
        };

        match body {
            Ok(body) => Some(format!("{}{}", sofa_type.tag(), body)),
            Err(err) => {
                error!("Failed to encode {sofa_type} payload. {}", err.to_string());
                None
            }
        }
    }
}

fn parse_body<T: DeserializeOwned>(sofa_type: SofaType, body: &str) -> Result<T, PayloadParseError> {
    serde_json::from_str(body).map_err(|err| PayloadParseError::InvalidJson {
        sofa_type,
        message: err.to_string(),
    })
}

fn parse_value(sofa_type: SofaType, value: &str) -> Result<Wei, PayloadParseError> {
    value
        .parse()
        .map_err(|source| PayloadParseError::InvalidValue { sofa_type, source })
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MessageBody {
    #[serde(default)]
    body: String,
    #[serde(
        default,
        deserialize_with = "deserialize_controls",
        skip_serializing_if = "Vec::is_empty"
    )]
    controls: Vec<SofaControl>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    show_keyboard: Option<bool>,
}

#[derive(Serialize, Deserialize)]
struct CommandBody {
    #[serde(default)]
    body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<serde_json::Value>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PaymentBody {
    value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status: Option<PaymentStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tx_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    from_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    to_address: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PaymentRequestBody {
    value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    destination_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    body: Option<String>,
}
