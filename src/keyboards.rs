// Copyright 2025 Felipe Torres González
//
//    Licensed under the Apache License, Version 2.0 (the "License");
//    you may not use this file except in compliance with the License.
//    You may obtain a copy of the License at
//
//        http://www.apache.org/licenses/LICENSE-2.0
//
//    Unless required by applicable law or agreed to in writing, software
//    distributed under the License is distributed on an "AS IS" BASIS,
//    WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//    See the License for the specific language governing permissions and
//    limitations under the License.

//! Keyboards module
//!
//! # Description
//!
//! This module includes all the keyboards that are attached to the replies of the bot.

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

/// Label of the button attached to article replies.
pub const FIND_YOURS_LABEL: &str = "Узнать свою";
/// Label of the button attached to the help message.
pub const FIND_ARTICLE_LABEL: &str = "Узнать статью";

/// Keyboard with a single button that opens an inline query in the current chat.
///
/// # Description
///
/// Pressing the button inserts the bot's username followed by `query` in the input field of the chat, so
/// the user gets an inline query answer right away.
pub fn switch_inline_keyboard(label: &str, query: &str) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new([[InlineKeyboardButton::switch_inline_query_current_chat(
        label, query,
    )]])
}
