// toshi-chat/toshi-chat-core
//
// Copyright: 2026, The toshi-chat authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use in_memory_attachment_store::InMemoryAttachmentStore;

mod in_memory_attachment_store;
