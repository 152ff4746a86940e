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

//! Inbound updates delivered by Telegram to the webhook.
//!
//! # Description
//!
//! Only the handful of fields that the bot needs are decoded; everything else that Telegram sends is ignored.
//! Each of the interesting objects of the update is validated on its own, so an update whose `message` lacks
//! mandatory fields is classified as [Update::Unrecognized] rather than rejected as a whole.

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

/// Prefix of the command that requests a random article.
pub const MY_ARTICLE_COMMAND: &str = "/myarticle";
/// Commands that request the help message.
pub const HELP_COMMANDS: [&str; 2] = ["/help", "/start"];

/// Inline query sent when a user types the bot's name in any chat.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InlineQuery {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Chat {
    pub id: i64,
}

/// Chat message. Only text messages are of interest for the bot.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Message {
    pub message_id: i64,
    #[serde(default)]
    pub message_thread_id: Option<i64>,
    pub chat: Chat,
    #[serde(default)]
    pub text: Option<String>,
}

impl Message {
    /// Text of the message, `None` when it is missing or empty.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }
}

/// Decoded update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
    InlineQuery(InlineQuery),
    Message(Message),
    Unrecognized,
}

impl Update {
    /// Decode an update from the body of a webhook request.
    ///
    /// # Description
    ///
    /// An error is only returned when the body is not a JSON object. Updates that are valid JSON but
    /// don't carry a well formed inline query or message are returned as [Update::Unrecognized].
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        let object: Map<String, Value> = serde_json::from_slice(body)?;

        Ok(Update::from(object))
    }

    /// Classify the update into the action the bot should take.
    pub fn command(&self) -> Command<'_> {
        match self {
            Update::InlineQuery(query) => Command::InlineQuery(query),
            Update::Message(message) => match message.text() {
                None => Command::Ignore,
                Some(text) if text.starts_with(MY_ARTICLE_COMMAND) => Command::MyArticle(message),
                Some(text) if HELP_COMMANDS.contains(&text) => Command::Help(message),
                Some(_) => Command::Ignore,
            },
            Update::Unrecognized => Command::Ignore,
        }
    }
}

impl From<Map<String, Value>> for Update {
    /// Pick the objects of interest from the top level of an update; `null` counts as absent.
    fn from(mut object: Map<String, Value>) -> Self {
        if let Some(query) = object.remove("inline_query").filter(|v| !v.is_null()) {
            return match serde_json::from_value::<InlineQuery>(query) {
                Ok(query) => Update::InlineQuery(query),
                Err(e) => {
                    debug!("Malformed inline query: {e}");
                    Update::Unrecognized
                }
            };
        }

        match object
            .remove("message")
            .filter(|v| !v.is_null())
            .map(serde_json::from_value::<Message>)
        {
            Some(Ok(message)) => Update::Message(message),
            Some(Err(e)) => {
                debug!("Malformed message: {e}");
                Update::Unrecognized
            }
            None => Update::Unrecognized,
        }
    }
}

/// Action requested by an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// Answer an inline query with a random article.
    InlineQuery(&'a InlineQuery),
    /// Reply to a `/myarticle` command with a random article.
    MyArticle(&'a Message),
    /// Reply to `/help` or `/start` with the help message.
    Help(&'a Message),
    /// Nothing to do, the update gets an empty reply.
    Ignore,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn message_with_text(text: &str) -> String {
        serde_json::json!({
            "message": {
                "message_id": 5,
                "message_thread_id": 1,
                "chat": { "id": 42 },
                "text": text,
            }
        })
        .to_string()
    }

    #[test]
    fn decode_inline_query() {
        let update = Update::from_slice(br#"{"update_id":1,"inline_query":{"id":"abc","query":""}}"#)
            .expect("Failed to decode");

        assert_eq!(
            update,
            Update::InlineQuery(InlineQuery {
                id: "abc".to_owned()
            })
        );
    }

    #[test]
    fn decode_message() {
        let update = Update::from_slice(message_with_text("/myarticle").as_bytes())
            .expect("Failed to decode");

        assert_eq!(
            update,
            Update::Message(Message {
                message_id: 5,
                message_thread_id: Some(1),
                chat: Chat { id: 42 },
                text: Some("/myarticle".to_owned()),
            })
        );
    }

    #[test]
    fn decode_message_without_thread() {
        let update =
            Update::from_slice(br#"{"message":{"message_id":7,"chat":{"id":-100},"text":"/help"}}"#)
                .expect("Failed to decode");

        let Update::Message(message) = update else {
            panic!("Expected a message");
        };
        assert_eq!(message.message_thread_id, None);
        assert_eq!(message.chat.id, -100);
    }

    #[test]
    fn inline_query_takes_precedence_over_message() {
        let body = serde_json::json!({
            "inline_query": { "id": "q1" },
            "message": { "message_id": 1, "chat": { "id": 2 }, "text": "/help" },
        })
        .to_string();
        let update = Update::from_slice(body.as_bytes()).expect("Failed to decode");

        assert!(matches!(update.command(), Command::InlineQuery(q) if q.id == "q1"));
    }

    #[rstest]
    #[case::empty_object("{}")]
    #[case::null_fields(r#"{"inline_query":null,"message":null}"#)]
    #[case::inline_query_without_id(r#"{"inline_query":{"query":"x"}}"#)]
    #[case::message_without_chat(r#"{"message":{"message_id":1,"text":"/help"}}"#)]
    #[case::message_with_wrong_types(r#"{"message":{"message_id":"1","chat":{"id":2},"text":"/help"}}"#)]
    #[case::other_update_kind(r#"{"update_id":3,"callback_query":{"id":"c"}}"#)]
    fn unrecognized_updates(#[case] body: &str) {
        let update = Update::from_slice(body.as_bytes()).expect("Failed to decode");

        assert_eq!(update, Update::Unrecognized);
        assert_eq!(update.command(), Command::Ignore);
    }

    #[rstest]
    #[case::not_json("this is not json")]
    #[case::empty_body("")]
    #[case::array("[1, 2, 3]")]
    #[case::string(r#""message""#)]
    fn undecodable_bodies(#[case] body: &str) {
        assert!(Update::from_slice(body.as_bytes()).is_err());
    }

    #[rstest]
    #[case::exact("/myarticle")]
    #[case::with_bot_name("/myarticle@my_article_bot")]
    #[case::with_arguments("/myarticle please")]
    #[case::glued_suffix("/myarticlexyz")]
    fn my_article_commands(#[case] text: &str) {
        let update = Update::from_slice(message_with_text(text).as_bytes()).expect("Failed to decode");

        assert!(matches!(update.command(), Command::MyArticle(m) if m.message_id == 5));
    }

    #[rstest]
    #[case::help("/help")]
    #[case::start("/start")]
    fn help_commands(#[case] text: &str) {
        let update = Update::from_slice(message_with_text(text).as_bytes()).expect("Failed to decode");

        assert!(matches!(update.command(), Command::Help(m) if m.chat.id == 42));
    }

    #[rstest]
    #[case::empty_text("")]
    #[case::plain_text("hello")]
    #[case::help_with_arguments("/help me")]
    #[case::start_with_bot_name("/start@my_article_bot")]
    #[case::command_not_at_start("give me /myarticle")]
    #[case::uppercase("/MYARTICLE")]
    fn ignored_texts(#[case] text: &str) {
        let update = Update::from_slice(message_with_text(text).as_bytes()).expect("Failed to decode");

        assert_eq!(update.command(), Command::Ignore);
    }

    #[test]
    fn message_without_text_is_ignored() {
        let update = Update::from_slice(br#"{"message":{"message_id":1,"chat":{"id":2},"photo":[]}}"#)
            .expect("Failed to decode");

        assert!(matches!(update, Update::Message(_)));
        assert_eq!(update.command(), Command::Ignore);
    }
}
