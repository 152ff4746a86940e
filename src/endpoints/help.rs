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

//! Handler for the /help and /start commands.

use crate::{
    handlers::Message,
    keyboards::{FIND_ARTICLE_LABEL, switch_inline_keyboard},
    replies::{ReplyPayload, SendMessage},
};
use tracing::info;

/// Help handler.
#[tracing::instrument(
    name = "Help handler",
    skip(msg),
    fields(
        chat_id = %msg.chat.id,
    )
)]
pub fn help(msg: &Message) -> ReplyPayload {
    info!("Command /help called");

    ReplyPayload::SendMessage(SendMessage {
        chat_id: msg.chat.id,
        message_thread_id: msg.message_thread_id,
        reply_to_message_id: msg.message_id,
        allow_sending_without_reply: false,
        text: help_text().to_owned(),
        parse_mode: None,
        reply_markup: switch_inline_keyboard(FIND_ARTICLE_LABEL, ""),
    })
}

fn help_text() -> &'static str {
    include_str!("../../data/templates/help.txt").trim_end()
}
