// toshi-chat/toshi-utils
//
// Copyright: 2026, The toshi-chat authors
// License: Mozilla Public License v2.0 (MPL v2.0)

mod id_string_macro;
