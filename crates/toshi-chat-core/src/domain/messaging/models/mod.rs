// toshi-chat/toshi-chat-core
//
// Copyright: 2026, The toshi-chat authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use attachment::{Attachment, Image};
pub use envelope::{DeliveryStatus, Direction, ErrorKind, MessageEnvelope, PaymentState};
pub use error::{PayloadParseError, PresentationIssue};
pub use payload::{
    ControlKind, DecodedPayload, PaymentStatus, SofaCommand, SofaControl, SofaMessage,
    SofaPayment, SofaPaymentRequest,
};
pub use payload_parser::SofaParser;
pub use sofa_type::SofaType;

mod attachment;
mod envelope;
mod error;
mod payload;
mod payload_parser;
mod sofa_type;
