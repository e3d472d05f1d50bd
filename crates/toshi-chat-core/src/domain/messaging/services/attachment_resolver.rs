// toshi-chat/toshi-chat-core
//
// Copyright: 2026, The toshi-chat authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::messaging::models::Attachment;
use crate::domain::shared::models::AttachmentId;

/// Looks up stored attachment content. Caching and thread-safety of the underlying storage are
/// up to the implementation.
#[cfg_attr(feature = "test", mockall::automock)]
pub trait AttachmentResolver: Send + Sync {
    /// Returns `None` if no content is stored for `id`.
    fn resolve(&self, id: &AttachmentId) -> Option<Attachment>;
}
