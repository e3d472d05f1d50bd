// toshi-chat/toshi-chat-core
//
// Copyright: 2026, The toshi-chat authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use strum_macros::{Display, EnumString};

use crate::domain::messaging::models::{
    Attachment, DecodedPayload, DeliveryStatus, Image, MessageEnvelope, PresentationIssue,
};
use crate::domain::payments::models::Wei;
use crate::domain::shared::models::AttributedString;

/// The kind of bubble the renderer should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum MessageType {
    Text,
    Image,
    Actionable,
}

/// Everything the renderer needs to display a single message.
#[derive(Debug, Clone, PartialEq)]
pub struct PresentationModel {
    pub is_outgoing: bool,
    /// The message waits for a response of our user.
    pub is_actionable: bool,
    /// The message should be shown at all.
    pub is_displayable: bool,
    pub text: Option<String>,
    pub attributed_text: Option<AttributedString>,
    pub title: Option<String>,
    pub attributed_title: Option<AttributedString>,
    pub subtitle: Option<String>,
    pub attributed_subtitle: Option<AttributedString>,
    /// The first of the envelope's attachments for which content is stored.
    pub attachment: Option<Attachment>,
    pub image: Option<Image>,
    /// Never set by the presenter. See `PaymentValueRenderer`.
    pub fiat_value_string: Option<String>,
    /// Never set by the presenter. See `PaymentValueRenderer`.
    pub ethereum_value_string: Option<String>,
    /// `None` for identity key errors and envelopes without a body.
    pub decoded_payload: Option<DecodedPayload>,
    pub delivery_status: DeliveryStatus,
    pub source_envelope: MessageEnvelope,
    pub issues: Vec<PresentationIssue>,
}

impl PresentationModel {
    /// A model with all content absent.
    pub(crate) fn empty(envelope: MessageEnvelope) -> Self {
        Self {
            is_outgoing: envelope.is_outgoing(),
            is_actionable: false,
            is_displayable: false,
            text: None,
            attributed_text: None,
            title: None,
            attributed_title: None,
            subtitle: None,
            attributed_subtitle: None,
            attachment: None,
            image: None,
            fiat_value_string: None,
            ethereum_value_string: None,
            decoded_payload: None,
            delivery_status: envelope.delivery_status,
            source_envelope: envelope,
            issues: vec![],
        }
    }

    /// Derived from the envelope and the decoded payload. Note that a text message with
    /// attachment ids is an `Image`, no matter whether the attachments could be resolved.
    pub fn message_type(&self) -> MessageType {
        if self.source_envelope.error_kind.is_some() {
            return MessageType::Text;
        }

        match &self.decoded_payload {
            Some(DecodedPayload::PlainText(_)) if !self.source_envelope.attachment_ids.is_empty() => {
                MessageType::Image
            }
            Some(DecodedPayload::Payment(_) | DecodedPayload::PaymentRequest(_)) => {
                MessageType::Actionable
            }
            Some(
                DecodedPayload::PlainText(_)
                | DecodedPayload::Command(_)
                | DecodedPayload::Control { .. }
                | DecodedPayload::Unknown,
            )
            | None => MessageType::Text,
        }
    }

    /// The native value of payments and payment requests.
    pub fn payment_value(&self) -> Option<Wei> {
        match &self.decoded_payload {
            Some(DecodedPayload::Payment(payment)) => Some(payment.value),
            Some(DecodedPayload::PaymentRequest(request)) => Some(request.value),
            _ => None,
        }
    }
}
