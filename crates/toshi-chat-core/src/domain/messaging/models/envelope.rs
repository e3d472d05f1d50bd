// toshi-chat/toshi-chat-core
//
// Copyright: 2026, The toshi-chat authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::domain::shared::models::{AttachmentId, CounterpartyId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Incoming,
    Outgoing,
}

/// The transport state of a message. Incoming messages are never sent by us and keep the
/// default.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum DeliveryStatus {
    #[default]
    AttemptingOut,
    Sent,
    Delivered,
    Failed,
}

/// Key-exchange and identity failures the signaling layer reports instead of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    MissingKeyId,
    NoSession,
    InvalidKeySignature,
    UntrustedIdentity,
}

/// Our local response to a payment request.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum PaymentState {
    /// The request has not been answered yet.
    #[default]
    None,
    PendingConfirmation,
    Approved,
    Rejected,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageEnvelope {
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
    pub direction: Direction,
    pub delivery_status: DeliveryStatus,
    pub counterparty_id: CounterpartyId,
    /// The encoded payload. Absent for key-exchange errors.
    pub raw_body: Option<String>,
    pub attachment_ids: Vec<AttachmentId>,
    pub error_kind: Option<ErrorKind>,
    pub payment_state: PaymentState,
}

impl MessageEnvelope {
    pub fn outgoing(
        timestamp: u64,
        counterparty_id: impl Into<CounterpartyId>,
        raw_body: impl Into<String>,
    ) -> Self {
        Self::new(
            timestamp,
            Direction::Outgoing,
            counterparty_id.into(),
            Some(raw_body.into()),
        )
    }

    pub fn incoming(
        timestamp: u64,
        counterparty_id: impl Into<CounterpartyId>,
        raw_body: impl Into<String>,
    ) -> Self {
        Self::new(
            timestamp,
            Direction::Incoming,
            counterparty_id.into(),
            Some(raw_body.into()),
        )
    }

    /// An outgoing message that could not be sent because of `error_kind`.
    pub fn identity_key_error(
        timestamp: u64,
        counterparty_id: impl Into<CounterpartyId>,
        error_kind: ErrorKind,
    ) -> Self {
        Self {
            error_kind: Some(error_kind),
            ..Self::new(timestamp, Direction::Outgoing, counterparty_id.into(), None)
        }
    }

    fn new(
        timestamp: u64,
        direction: Direction,
        counterparty_id: CounterpartyId,
        raw_body: Option<String>,
    ) -> Self {
        Self {
            timestamp,
            direction,
            delivery_status: DeliveryStatus::default(),
            counterparty_id,
            raw_body,
            attachment_ids: vec![],
            error_kind: None,
            payment_state: PaymentState::default(),
        }
    }
}

impl MessageEnvelope {
    pub fn is_outgoing(&self) -> bool {
        self.direction == Direction::Outgoing
    }

    pub fn sent_at(&self) -> Option<DateTime<Utc>> {
        let millis = i64::try_from(self.timestamp).ok()?;
        Utc.timestamp_millis_opt(millis).single()
    }
}
