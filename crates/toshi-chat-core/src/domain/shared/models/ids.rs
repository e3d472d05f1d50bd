// toshi-chat/toshi-chat-core
//
// Copyright: 2026, The toshi-chat authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use toshi_utils::id_string;

// Identifies the other party of a conversation. Opaque to this crate.
id_string!(CounterpartyId);

// A reference to an attachment held by the host's attachment storage.
id_string!(AttachmentId);
