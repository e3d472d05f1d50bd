// toshi-chat/toshi-chat-core
//
// Copyright: 2026, The toshi-chat authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use attachment_resolver::AttachmentResolver;

mod attachment_resolver;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::attachment_resolver::MockAttachmentResolver;
}
