// toshi-chat/toshi-chat-core
//
// Copyright: 2026, The toshi-chat authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::{AppConfig, DynExchangeRateSource};
use crate::domain::payments::services::ExchangeRateSource;

use super::MessagePresenter;

pub struct UndefinedExchangeRateSource;

pub struct MessagePresenterBuilder<E> {
    config: AppConfig,
    exchange_rate_source: E,
}

impl MessagePresenterBuilder<UndefinedExchangeRateSource> {
    pub(crate) fn new() -> Self {
        MessagePresenterBuilder {
            config: Default::default(),
            exchange_rate_source: UndefinedExchangeRateSource,
        }
    }

    pub fn set_exchange_rate_source<S: ExchangeRateSource + 'static>(
        self,
        exchange_rate_source: S,
    ) -> MessagePresenterBuilder<DynExchangeRateSource> {
        self.set_shared_exchange_rate_source(Arc::new(exchange_rate_source))
    }

    pub fn set_shared_exchange_rate_source(
        self,
        exchange_rate_source: DynExchangeRateSource,
    ) -> MessagePresenterBuilder<DynExchangeRateSource> {
        MessagePresenterBuilder {
            config: self.config,
            exchange_rate_source,
        }
    }
}

impl<E> MessagePresenterBuilder<E> {
    pub fn set_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }
}

impl MessagePresenterBuilder<DynExchangeRateSource> {
    pub fn build(self) -> MessagePresenter {
        MessagePresenter::new(&self.config, self.exchange_rate_source)
    }
}
