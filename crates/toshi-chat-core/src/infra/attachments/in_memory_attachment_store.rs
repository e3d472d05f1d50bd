// toshi-chat/toshi-chat-core
//
// Copyright: 2026, The toshi-chat authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::domain::messaging::models::Attachment;
use crate::domain::messaging::services::AttachmentResolver;
use crate::domain::shared::models::AttachmentId;

#[derive(Default)]
pub struct InMemoryAttachmentStore {
    attachments: RwLock<HashMap<AttachmentId, Attachment>>,
}

impl InMemoryAttachmentStore {
    pub fn new(attachments: impl IntoIterator<Item = Attachment>) -> Self {
        Self {
            attachments: RwLock::new(
                attachments
                    .into_iter()
                    .map(|attachment| (attachment.id.clone(), attachment))
                    .collect(),
            ),
        }
    }

    /// Stores `attachment`, replacing any attachment with the same id.
    pub fn insert(&self, attachment: Attachment) {
        self.attachments
            .write()
            .insert(attachment.id.clone(), attachment);
    }

    pub fn remove(&self, id: &AttachmentId) -> Option<Attachment> {
        self.attachments.write().remove(id)
    }

    pub fn len(&self) -> usize {
        self.attachments.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.attachments.read().is_empty()
    }
}

impl AttachmentResolver for InMemoryAttachmentStore {
    fn resolve(&self, id: &AttachmentId) -> Option<Attachment> {
        self.attachments.read().get(id).cloned()
    }
}
