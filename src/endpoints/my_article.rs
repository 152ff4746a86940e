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

//! Handler for the /myarticle command.

use crate::{
    articles::ArticleTable,
    endpoints::helper::article_text,
    handlers::Message,
    keyboards::{FIND_YOURS_LABEL, switch_inline_keyboard},
    replies::{ReplyPayload, SendMessage},
};
use rand::Rng;
use teloxide::types::ParseMode;
use tracing::info;

const MESSAGE_HEADER: &str = "Твоя статья УК РФ";

/// MyArticle handler.
///
/// # Description
///
/// Replies to the command with a random article. The reply is bound to the message of the command: if
/// that message is gone when Telegram executes the call, the call fails instead of sending a loose
/// message to the chat.
#[tracing::instrument(
    name = "MyArticle handler",
    skip(msg, articles, rng),
    fields(
        chat_id = %msg.chat.id,
    )
)]
pub fn my_article<R: Rng + ?Sized>(
    msg: &Message,
    articles: &ArticleTable,
    rng: &mut R,
) -> ReplyPayload {
    info!("Command /myarticle called");

    let article = articles.random(rng);

    ReplyPayload::SendMessage(SendMessage {
        chat_id: msg.chat.id,
        message_thread_id: msg.message_thread_id,
        reply_to_message_id: msg.message_id,
        allow_sending_without_reply: false,
        text: article_text(MESSAGE_HEADER, &article),
        parse_mode: Some(ParseMode::Html),
        reply_markup: switch_inline_keyboard(FIND_YOURS_LABEL, ""),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::Chat;
    use pretty_assertions::assert_eq;
    use rand::{SeedableRng, rngs::StdRng};
    use serde_json::json;

    #[test]
    fn reply_to_command() {
        let articles = ArticleTable::from_toml_str("[articles]\n\"213\" = \"Хулиганство\"\n")
            .expect("Failed to parse the test table");
        let msg = Message {
            message_id: 5,
            message_thread_id: Some(1),
            chat: Chat { id: 42 },
            text: Some("/myarticle".to_owned()),
        };

        let payload = my_article(&msg, &articles, &mut StdRng::seed_from_u64(3));

        assert_eq!(
            serde_json::to_value(payload).expect("Failed to serialise the payload"),
            json!({
                "method": "sendMessage",
                "chat_id": 42,
                "message_thread_id": 1,
                "reply_to_message_id": 5,
                "allow_sending_without_reply": false,
                "text": "<b><u>📕 Твоя статья УК РФ:</u></b>\n<code>213</code> - <tg-spoiler>Хулиганство</tg-spoiler>",
                "parse_mode": "HTML",
                "reply_markup": {
                    "inline_keyboard": [
                        [{ "text": "Узнать свою", "switch_inline_query_current_chat": "" }]
                    ]
                }
            })
        );
    }

    #[test]
    fn reply_outside_of_a_thread() {
        let articles = ArticleTable::embedded().expect("Failed to load the embedded table");
        let msg = Message {
            message_id: 9,
            message_thread_id: None,
            chat: Chat { id: -1001 },
            text: Some("/myarticle@bot".to_owned()),
        };

        let payload = serde_json::to_value(my_article(&msg, &articles, &mut rand::rng()))
            .expect("Failed to serialise the payload");

        assert_eq!(payload.get("message_thread_id"), None);
        assert_eq!(payload["chat_id"], -1001);
    }
}
