// toshi-chat/toshi-chat-core
//
// Copyright: 2026, The toshi-chat authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use message_presenter::MessagePresenter;
pub use message_presenter_builder::{MessagePresenterBuilder, UndefinedExchangeRateSource};
pub use payment_value_renderer::PaymentValueRenderer;

mod message_presenter;
mod message_presenter_builder;
mod payment_value_renderer;
