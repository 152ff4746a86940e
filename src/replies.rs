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

//! Reply payloads.
//!
//! # Description
//!
//! Telegram allows answering a webhook request with a method call: the body of the HTTP response is a JSON
//! object with the name of the method in the `method` field, and the parameters of the call in the rest of
//! the fields. This way, the bot doesn't need to issue any request to the Bot API by itself.
//!
//! Only the two methods that the bot uses are modelled here.

use serde::Serialize;
use teloxide::types::{InlineKeyboardMarkup, ParseMode};

/// Method call returned to Telegram as the body of the webhook response.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "method")]
pub enum ReplyPayload {
    #[serde(rename = "answerInlineQuery")]
    AnswerInlineQuery(AnswerInlineQuery),
    #[serde(rename = "sendMessage")]
    SendMessage(SendMessage),
}

/// Parameters of `answerInlineQuery`.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerInlineQuery {
    pub inline_query_id: String,
    /// Seconds that Telegram may cache the answer for repeated queries.
    pub cache_time: u32,
    /// Cached answers must not be shared between users.
    pub is_personal: bool,
    pub results: Vec<InlineQueryResultArticle>,
}

/// Result of type `article` of an inline query.
#[derive(Debug, Clone, Serialize)]
pub struct InlineQueryResultArticle {
    #[serde(rename = "type")]
    pub result_type: &'static str,
    /// Only used by Telegram to tell the results apart.
    pub id: String,
    pub title: String,
    pub description: String,
    pub input_message_content: InputTextMessageContent,
    pub thumbnail_url: String,
    pub thumbnail_width: u32,
    pub thumbnail_height: u32,
    pub reply_markup: InlineKeyboardMarkup,
}

/// Text message that gets sent when the user picks an inline result.
#[derive(Debug, Clone, Serialize)]
pub struct InputTextMessageContent {
    pub message_text: String,
    pub parse_mode: ParseMode,
}

/// Parameters of `sendMessage`.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessage {
    pub chat_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_thread_id: Option<i64>,
    pub reply_to_message_id: i64,
    /// When `false`, Telegram fails the call if the replied message no longer exists.
    pub allow_sending_without_reply: bool,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    pub reply_markup: InlineKeyboardMarkup,
}
