// toshi-chat/toshi-chat-core
//
// Copyright: 2026, The toshi-chat authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use presentation_model::{MessageType, PresentationModel};

pub use crate::domain::{
    messaging::models::{
        Attachment, ControlKind, DecodedPayload, DeliveryStatus, Direction, ErrorKind, Image,
        MessageEnvelope, PaymentState, PaymentStatus, PresentationIssue, SofaCommand,
        SofaControl, SofaMessage, SofaPayment, SofaPaymentRequest, SofaType,
    },
    payments::models::{CurrencyPair, FiatCurrency, Wei},
    shared::models::{AttachmentId, AttributedString, CounterpartyId, StyleRun, TextStyle},
};

mod presentation_model;
