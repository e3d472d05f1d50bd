// toshi-chat/toshi-chat-core
//
// Copyright: 2026, The toshi-chat authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use app_config::AppConfig;
pub use app_dependencies::*;

mod app_config;
mod app_dependencies;
