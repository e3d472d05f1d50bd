// toshi-chat
//
// Copyright: 2026, The toshi-chat authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use pretty_assertions::assert_eq;

use toshi_chat_core::dtos::{
    DecodedPayload, DeliveryStatus, ErrorKind, MessageType, PaymentStatus, PresentationIssue,
    SofaType,
};
use toshi_chat_core::infra::attachments::InMemoryAttachmentStore;
use toshi_chat_core::test::{mock_data, EnvelopeBuilder, MockAttachmentResolver};

// MARK: - Outgoing

#[test]
fn test_handling_invalid_key_message() {
    let presenter = mock_data::presenter();
    let mut resolver = MockAttachmentResolver::new();
    resolver.expect_resolve().never();

    let envelope = EnvelopeBuilder::identity_key_error(ErrorKind::MissingKeyId).build();
    let parsed = presenter.present(&envelope, &resolver);

    assert_eq!(parsed.fiat_value_string, None);
    assert_eq!(parsed.ethereum_value_string, None);
    assert_eq!(parsed.attachment, None);
    assert_eq!(parsed.image, None);
    assert_eq!(parsed.title, None);
    assert_eq!(parsed.subtitle, None);
    assert_eq!(parsed.attributed_title, None);
    assert_eq!(parsed.attributed_subtitle, None);
    assert_eq!(parsed.decoded_payload, None);
    assert_eq!(parsed.text, None);
    assert_eq!(parsed.attributed_text, None);

    assert!(!parsed.is_outgoing);
    assert!(!parsed.is_actionable);
    assert!(!parsed.is_displayable);

    assert_eq!(parsed.message_type(), MessageType::Text);
    assert_eq!(parsed.source_envelope, envelope);
    assert_eq!(parsed.delivery_status, DeliveryStatus::AttemptingOut);
    assert_eq!(
        parsed.issues,
        vec![PresentationIssue::IdentityKeyError(ErrorKind::MissingKeyId)]
    );
}

#[test]
fn test_identity_key_error_ignores_delivery_status_and_body() {
    let presenter = mock_data::presenter();

    let envelope = EnvelopeBuilder::identity_key_error(ErrorKind::UntrustedIdentity)
        .set_raw_body(Some(mock_data::payment_message_body()))
        .set_delivery_status(DeliveryStatus::Failed)
        .build();
    let parsed = presenter.present(&envelope, &InMemoryAttachmentStore::default());

    assert_eq!(parsed.decoded_payload, None);
    assert_eq!(parsed.title, None);
    assert_eq!(parsed.message_type(), MessageType::Text);
    assert_eq!(parsed.delivery_status, DeliveryStatus::AttemptingOut);
    assert!(!parsed.is_displayable);
    assert!(!parsed.is_actionable);
}

#[test]
fn test_parsing_outgoing_message() {
    let presenter = mock_data::presenter();
    let resolver = InMemoryAttachmentStore::default();

    let envelope = EnvelopeBuilder::outgoing(mock_data::text_message_body()).build();
    let parsed = presenter.present(&envelope, &resolver);

    assert_eq!(parsed.fiat_value_string, None);
    assert_eq!(parsed.ethereum_value_string, None);
    assert_eq!(parsed.attachment, None);
    assert_eq!(parsed.image, None);
    assert_eq!(parsed.title, None);
    assert_eq!(parsed.subtitle, None);
    assert_eq!(parsed.attributed_title, None);
    assert_eq!(parsed.attributed_subtitle, None);
    assert_eq!(parsed.attributed_text, None);

    assert!(parsed.is_outgoing);
    assert!(parsed.is_displayable);
    assert!(!parsed.is_actionable);

    assert_eq!(parsed.message_type(), MessageType::Text);
    assert_eq!(parsed.source_envelope, envelope);
    assert_eq!(parsed.text.as_deref(), Some("o hai"));
    assert_eq!(
        parsed.decoded_payload.as_ref().and_then(DecodedPayload::sofa_type),
        Some(SofaType::Message)
    );
    assert_eq!(parsed.delivery_status, DeliveryStatus::AttemptingOut);
    assert!(parsed.issues.is_empty());
}

#[test]
fn test_parsing_outgoing_message_with_attachments() {
    let presenter = mock_data::presenter();
    let mut resolver = MockAttachmentResolver::new();
    resolver.expect_resolve().times(2).returning(|_| None);

    let envelope = EnvelopeBuilder::outgoing(mock_data::text_message_body())
        .set_attachment_ids(["One", "Two"])
        .build();
    let parsed = presenter.present(&envelope, &resolver);

    assert_eq!(parsed.fiat_value_string, None);
    assert_eq!(parsed.ethereum_value_string, None);
    // No content is stored for either attachment.
    assert_eq!(parsed.attachment, None);
    assert_eq!(parsed.image, None);
    assert_eq!(parsed.title, None);
    assert_eq!(parsed.subtitle, None);
    assert_eq!(parsed.attributed_title, None);
    assert_eq!(parsed.attributed_subtitle, None);
    assert_eq!(parsed.attributed_text, None);

    assert!(parsed.is_outgoing);
    assert!(parsed.is_displayable);
    assert!(!parsed.is_actionable);

    assert_eq!(parsed.message_type(), MessageType::Image);
    assert_eq!(parsed.source_envelope, envelope);
    assert_eq!(parsed.text.as_deref(), Some("o hai"));
    assert_eq!(
        parsed.decoded_payload.as_ref().and_then(DecodedPayload::sofa_type),
        Some(SofaType::Message)
    );
    assert_eq!(parsed.delivery_status, DeliveryStatus::AttemptingOut);
    assert_eq!(
        parsed.issues,
        vec![PresentationIssue::UnresolvedAttachment(vec![
            "One".into(),
            "Two".into()
        ])]
    );
}

#[test]
fn test_parsing_outgoing_payment() {
    let presenter = mock_data::presenter();
    let resolver = InMemoryAttachmentStore::default();

    let envelope = EnvelopeBuilder::outgoing(mock_data::payment_message_body()).build();
    let parsed = presenter.present(&envelope, &resolver);

    // Computed right before display since exchange rates change.
    assert_eq!(parsed.fiat_value_string, None);
    assert_eq!(parsed.ethereum_value_string, None);

    assert_eq!(parsed.attachment, None);
    assert_eq!(parsed.image, None);
    assert_eq!(parsed.text, None);
    assert_eq!(parsed.attributed_text, None);

    assert!(parsed.is_outgoing);
    assert!(parsed.is_displayable);
    // Outgoing payments are never actionable.
    assert!(!parsed.is_actionable);

    let Some(DecodedPayload::Payment(payment)) = &parsed.decoded_payload else {
        panic!("Expected a payment but got {:?}", parsed.decoded_payload);
    };

    let renderer = presenter.payment_value_renderer();
    let fiat_value_string = renderer.fiat_value_string(payment.value).unwrap();
    assert!(!fiat_value_string.is_empty());

    let ethereum_value_string = renderer.ethereum_value_string(payment.value);
    assert_eq!(ethereum_value_string, "0.0067 ETH");

    let subtitle = parsed.subtitle.clone().unwrap_or_default();
    assert!(subtitle.contains(&ethereum_value_string), "{subtitle}");
    assert!(subtitle.contains(&fiat_value_string), "{subtitle}");
    let attributed_subtitle = parsed.attributed_subtitle.clone().unwrap_or_default();
    assert!(attributed_subtitle.as_str().contains(&ethereum_value_string));
    assert!(attributed_subtitle.as_str().contains(&fiat_value_string));
    assert_eq!(subtitle, "$8.23 USD · 0.0067 ETH");

    assert_eq!(parsed.message_type(), MessageType::Actionable);
    assert_eq!(parsed.source_envelope, envelope);
    assert_eq!(parsed.title.as_deref(), Some("Payment sent"));
    assert_eq!(
        parsed.attributed_title.as_ref().map(|title| title.as_str()),
        Some("Payment sent")
    );
    assert_eq!(payment.status, PaymentStatus::Unconfirmed);
    assert_eq!(parsed.delivery_status, DeliveryStatus::AttemptingOut);
}

// MARK: - Incoming

#[test]
fn test_parsing_incoming_payment() {
    let presenter = mock_data::presenter();
    let resolver = InMemoryAttachmentStore::default();

    let envelope = EnvelopeBuilder::incoming(mock_data::payment_message_body()).build();
    let parsed = presenter.present(&envelope, &resolver);

    assert_eq!(parsed.fiat_value_string, None);
    assert_eq!(parsed.ethereum_value_string, None);

    assert_eq!(parsed.attachment, None);
    assert_eq!(parsed.image, None);
    assert_eq!(parsed.text, None);
    assert_eq!(parsed.attributed_text, None);

    assert!(!parsed.is_outgoing);
    // Payments are complete and need no response.
    assert!(!parsed.is_actionable);
    assert!(parsed.is_displayable);

    let Some(DecodedPayload::Payment(payment)) = &parsed.decoded_payload else {
        panic!("Expected a payment but got {:?}", parsed.decoded_payload);
    };

    assert_eq!(payment.status, PaymentStatus::Unconfirmed);

    let renderer = presenter.payment_value_renderer();
    let fiat_value_string = renderer.fiat_value_string(payment.value).unwrap();
    assert!(!fiat_value_string.is_empty());

    let ethereum_value_string = renderer.ethereum_value_string(payment.value);
    assert_eq!(ethereum_value_string, "0.0067 ETH");

    let subtitle = parsed.subtitle.clone().unwrap_or_default();
    assert!(subtitle.contains(&ethereum_value_string), "{subtitle}");
    assert!(subtitle.contains(&fiat_value_string), "{subtitle}");

    assert_eq!(parsed.message_type(), MessageType::Actionable);
    assert_eq!(parsed.source_envelope, envelope);
    assert_eq!(parsed.title.as_deref(), Some("Payment received"));
    assert_eq!(
        parsed.attributed_title.as_ref().map(|title| title.as_str()),
        Some("Payment received")
    );
    assert_eq!(parsed.delivery_status, DeliveryStatus::AttemptingOut);
}

#[test]
fn test_parsing_incoming_message() {
    let presenter = mock_data::presenter();
    let mut resolver = MockAttachmentResolver::new();
    resolver.expect_resolve().never();

    let envelope = EnvelopeBuilder::incoming(mock_data::text_message_body())
        .set_delivery_status(DeliveryStatus::Delivered)
        .build();
    let parsed = presenter.present(&envelope, &resolver);

    assert!(!parsed.is_outgoing);
    assert!(parsed.is_displayable);
    assert!(!parsed.is_actionable);

    assert_eq!(parsed.message_type(), MessageType::Text);
    assert_eq!(parsed.text.as_deref(), Some("o hai"));
    assert_eq!(parsed.title, None);
    assert_eq!(parsed.subtitle, None);
    assert_eq!(parsed.attachment, None);
    assert_eq!(parsed.delivery_status, DeliveryStatus::Delivered);
    assert_eq!(parsed.source_envelope, envelope);
    assert!(parsed.issues.is_empty());
}

#[test]
fn test_parsing_incoming_payment_in_any_status() {
    let presenter = mock_data::presenter();

    for (status, expected_status) in [
        ("confirmed", PaymentStatus::Confirmed),
        ("error", PaymentStatus::Error),
    ] {
        let envelope = EnvelopeBuilder::incoming(format!(
            r#"SOFA::Payment:{{"value":"{}","status":"{status}"}}"#,
            mock_data::PAYMENT_VALUE
        ))
        .build();
        let parsed = presenter.present(&envelope, &InMemoryAttachmentStore::default());

        let Some(DecodedPayload::Payment(payment)) = &parsed.decoded_payload else {
            panic!("Expected a payment but got {:?}", parsed.decoded_payload);
        };
        assert_eq!(payment.status, expected_status);

        assert_eq!(parsed.message_type(), MessageType::Actionable);
        assert_eq!(parsed.title.as_deref(), Some("Payment received"));
        assert_eq!(parsed.subtitle.as_deref(), Some("$8.23 USD · 0.0067 ETH"));
        assert!(!parsed.is_actionable, "{status}");
        assert!(parsed.is_displayable, "{status}");
        assert!(parsed.issues.is_empty(), "{status}");
    }
}

#[test]
fn test_unsupported_controls_keep_message_text() {
    let presenter = mock_data::presenter();

    let envelope = EnvelopeBuilder::incoming(
        r#"SOFA::Message:{"body":"🍿","controls":[{"type":"weird","label":"x"}]}"#,
    )
    .build();
    let parsed = presenter.present(&envelope, &InMemoryAttachmentStore::default());

    assert_eq!(parsed.text.as_deref(), Some("🍿"));
    assert_eq!(parsed.message_type(), MessageType::Text);
    assert!(parsed.is_displayable);
    assert!(parsed.issues.is_empty());

    let Some(DecodedPayload::PlainText(message)) = &parsed.decoded_payload else {
        panic!("Expected a text message but got {:?}", parsed.decoded_payload);
    };
    assert!(message.controls.is_empty());
}

#[test]
fn test_delivery_status_is_passed_through() {
    let presenter = mock_data::presenter();

    let envelope = EnvelopeBuilder::outgoing(mock_data::text_message_body())
        .set_delivery_status(DeliveryStatus::Delivered)
        .build();
    let parsed = presenter.present(&envelope, &InMemoryAttachmentStore::default());

    assert_eq!(parsed.delivery_status, DeliveryStatus::Delivered);
}

// MARK: - Degraded payloads

#[test]
fn test_malformed_payload_degrades_to_unknown() {
    let presenter = mock_data::presenter();

    let envelope = EnvelopeBuilder::incoming(r#"SOFA::Message:{"body":"#).build();
    let parsed = presenter.present(&envelope, &InMemoryAttachmentStore::default());

    assert_eq!(parsed.decoded_payload, Some(DecodedPayload::Unknown));
    assert_eq!(parsed.text, None);
    assert_eq!(parsed.title, None);
    assert_eq!(parsed.subtitle, None);
    assert_eq!(parsed.message_type(), MessageType::Text);
    assert!(parsed.is_displayable);
    assert!(!parsed.is_actionable);
    assert!(matches!(
        parsed.issues.as_slice(),
        [PresentationIssue::MalformedPayload(_)]
    ));
}

#[test]
fn test_untagged_payload_degrades_to_unknown() {
    let presenter = mock_data::presenter();

    let envelope = EnvelopeBuilder::incoming("o hai")
        .set_attachment_ids(["One"])
        .build();
    let parsed = presenter.present(&envelope, &InMemoryAttachmentStore::default());

    assert_eq!(parsed.decoded_payload, Some(DecodedPayload::Unknown));
    assert_eq!(parsed.text, None);
    assert_eq!(parsed.message_type(), MessageType::Text);
    assert!(parsed.is_displayable);
}

#[test]
fn test_envelope_without_body() {
    let presenter = mock_data::presenter();

    let envelope = EnvelopeBuilder::incoming("").set_raw_body(None).build();
    let parsed = presenter.present(&envelope, &InMemoryAttachmentStore::default());

    assert_eq!(parsed.decoded_payload, None);
    assert_eq!(parsed.message_type(), MessageType::Text);
    assert!(!parsed.is_displayable);
    assert!(parsed.issues.is_empty());
}

#[test]
fn test_control_messages_are_not_displayable() {
    let presenter = mock_data::presenter();

    let envelope =
        EnvelopeBuilder::incoming(r#"SOFA::InitRequest:{"values":["paymentAddress"]}"#).build();
    let parsed = presenter.present(&envelope, &InMemoryAttachmentStore::default());

    assert_eq!(
        parsed.decoded_payload.as_ref().and_then(DecodedPayload::sofa_type),
        Some(SofaType::InitRequest)
    );
    assert_eq!(parsed.message_type(), MessageType::Text);
    assert!(!parsed.is_displayable);
    assert!(!parsed.is_actionable);
    assert_eq!(parsed.text, None);
}

#[test]
fn test_commands_are_presented_as_text() {
    let presenter = mock_data::presenter();

    let envelope =
        EnvelopeBuilder::outgoing(r#"SOFA::Command:{"body":"Balance","value":"balance"}"#)
            .build();
    let parsed = presenter.present(&envelope, &InMemoryAttachmentStore::default());

    assert_eq!(parsed.text.as_deref(), Some("Balance"));
    assert_eq!(parsed.message_type(), MessageType::Text);
    assert!(parsed.is_displayable);
    assert!(!parsed.is_actionable);
}

// MARK: - Idempotence

#[test]
fn test_presenting_twice_yields_equal_models() {
    let presenter = mock_data::presenter();
    let resolver = InMemoryAttachmentStore::new([mock_data::png_attachment("One", 2, 2)]);

    let envelopes = [
        EnvelopeBuilder::identity_key_error(ErrorKind::NoSession).build(),
        EnvelopeBuilder::outgoing(mock_data::text_message_body())
            .set_attachment_ids(["One", "Two"])
            .build(),
        EnvelopeBuilder::incoming(mock_data::payment_message_body()).build(),
        EnvelopeBuilder::incoming(mock_data::payment_request_body()).build(),
        EnvelopeBuilder::incoming("garbage").build(),
    ];

    for envelope in envelopes {
        assert_eq!(
            presenter.present(&envelope, &resolver),
            presenter.present(&envelope, &resolver)
        );
    }
}
