// toshi-chat/toshi-chat-core
//
// Copyright: 2026, The toshi-chat authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use attributed_string::{AttributedString, StyleRun, TextStyle};
pub use ids::{AttachmentId, CounterpartyId};
pub use string_index::{Utf16Index, Utf8Index};

mod attributed_string;
mod ids;
mod string_index;
