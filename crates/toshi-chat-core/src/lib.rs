// toshi-chat/toshi-chat-core
//
// Copyright: 2026, The toshi-chat authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use app::deps::AppConfig;
pub use app::dtos;
pub use app::services::{MessagePresenter, MessagePresenterBuilder, PaymentValueRenderer};


pub mod app;
pub mod domain;
pub mod infra;
