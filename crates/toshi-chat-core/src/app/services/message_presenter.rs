// toshi-chat/toshi-chat-core
//
// Copyright: 2026, The toshi-chat authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use tracing::{debug, info, instrument, warn};

use crate::app::deps::{AppConfig, DynExchangeRateSource};
use crate::app::dtos::PresentationModel;
use crate::domain::messaging::models::{
    Attachment, DecodedPayload, Image, MessageEnvelope, PaymentState, PresentationIssue,
    SofaParser,
};
use crate::domain::messaging::services::AttachmentResolver;
use crate::domain::payments::models::Wei;
use crate::domain::shared::models::{AttributedString, TextStyle};

use super::{MessagePresenterBuilder, PaymentValueRenderer, UndefinedExchangeRateSource};

const PAYMENT_SENT_TITLE: &str = "Payment sent";
const PAYMENT_RECEIVED_TITLE: &str = "Payment received";
const PAYMENT_REQUEST_TITLE: &str = "Payment request";

/// Turns message envelopes into presentation models.
///
/// Presenting is synchronous and keeps no state between calls. The attachment resolver and the
/// exchange rate source are the only collaborators that are called.
pub struct MessagePresenter {
    subtitle_separator: String,
    payment_values: PaymentValueRenderer,
}

impl MessagePresenter {
    pub fn builder() -> MessagePresenterBuilder<UndefinedExchangeRateSource> {
        MessagePresenterBuilder::new()
    }

    pub(crate) fn new(config: &AppConfig, exchange_rate_source: DynExchangeRateSource) -> Self {
        Self {
            subtitle_separator: config.subtitle_separator.clone(),
            payment_values: PaymentValueRenderer::new(config, exchange_rate_source),
        }
    }

    /// A renderer sharing this presenter's configuration and exchange rate source.
    pub fn payment_value_renderer(&self) -> PaymentValueRenderer {
        self.payment_values.clone()
    }
}

impl MessagePresenter {
    #[instrument(skip_all, fields(timestamp = envelope.timestamp, direction = %envelope.direction))]
    pub fn present(
        &self,
        envelope: &MessageEnvelope,
        attachments: &dyn AttachmentResolver,
    ) -> PresentationModel {
        let mut model = PresentationModel::empty(envelope.clone());

        if let Some(error_kind) = envelope.error_kind {
            debug!("Presenting identity key error '{error_kind}' as system notice.");
            model.is_outgoing = false;
            model.delivery_status = Default::default();
            model.issues.push(PresentationIssue::IdentityKeyError(error_kind));
            return model;
        }

        let Some(raw_body) = envelope.raw_body.as_deref() else {
            info!("Envelope has neither a body nor an error.");
            return model;
        };

        let payload = SofaParser::decode(raw_body).unwrap_or_else(|err| {
            warn!("Failed to decode message body. {}", err.to_string());
            model.issues.push(err.into());
            DecodedPayload::Unknown
        });

        match &payload {
            DecodedPayload::PlainText(message) => {
                model.text = Some(message.body.clone());
                model.is_displayable = true;

                if let Some((attachment, image)) = self.resolve_attachment(envelope, attachments) {
                    model.attachment = Some(attachment);
                    model.image = image;
                } else if !envelope.attachment_ids.is_empty() {
                    model.issues.push(PresentationIssue::UnresolvedAttachment(
                        envelope.attachment_ids.clone(),
                    ));
                }
            }
            DecodedPayload::Command(command) => {
                model.text = Some(command.body.clone());
                model.is_displayable = true;
            }
            DecodedPayload::Payment(payment) => {
                let title = if envelope.is_outgoing() {
                    PAYMENT_SENT_TITLE
                } else {
                    PAYMENT_RECEIVED_TITLE
                };
                self.set_payment_content(&mut model, title, payment.value);
                model.is_displayable = true;
            }
            DecodedPayload::PaymentRequest(request) => {
                self.set_payment_content(&mut model, PAYMENT_REQUEST_TITLE, request.value);
                model.text = request.body.clone();
                model.is_displayable = true;
                model.is_actionable =
                    !envelope.is_outgoing() && envelope.payment_state == PaymentState::None;
            }
            DecodedPayload::Control { sofa_type, .. } => {
                debug!("Not displaying {sofa_type} message.");
            }
            DecodedPayload::Unknown => {
                model.is_displayable = true;
            }
        }

        model.decoded_payload = Some(payload);
        model
    }
}

impl MessagePresenter {
    /// Returns the first attachment with stored content together with its image, if the content
    /// is one.
    fn resolve_attachment(
        &self,
        envelope: &MessageEnvelope,
        attachments: &dyn AttachmentResolver,
    ) -> Option<(Attachment, Option<Image>)> {
        let attachment = envelope.attachment_ids.iter().find_map(|id| {
            let attachment = attachments.resolve(id);
            if attachment.is_none() {
                info!("No content stored for attachment '{id}'.");
            }
            attachment
        })?;

        let image = attachment.is_image().then(|| attachment.image()).and_then(|result| {
            result
                .map_err(|err| warn!("Could not read image. {}", err.to_string()))
                .ok()
        });

        Some((attachment, image))
    }

    fn set_payment_content(&self, model: &mut PresentationModel, title: &str, value: Wei) {
        model.title = Some(title.to_string());
        model.attributed_title = Some(AttributedString::new(title, TextStyle::Emphasized));

        let ethereum_value = self.payment_values.ethereum_value_string(value);
        let subtitle = match self.payment_values.fiat_value_string(value) {
            Ok(fiat_value) => AttributedString::new(fiat_value, TextStyle::Emphasized)
                .appending(&self.subtitle_separator, TextStyle::Secondary),
            Err(err) => {
                warn!("Presenting payment without fiat value. {}", err.to_string());
                model
                    .issues
                    .push(PresentationIssue::MissingExchangeRate(err.to_string()));
                AttributedString::default()
            }
        }
        .appending(ethereum_value, TextStyle::Secondary);

        model.subtitle = Some(subtitle.as_str().to_string());
        model.attributed_subtitle = Some(subtitle);
    }
}
