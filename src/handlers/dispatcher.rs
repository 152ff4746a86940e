//! Main handler of the MyArticle bot.
//!
//! # Description
//!
//! The [Dispatcher] turns a decoded [Update] into the reply that Telegram has to execute. It holds no
//! mutable state, so a single instance is shared by all the requests.

use crate::{
    articles::ArticleTable,
    endpoints::{help, inline_query, my_article},
    handlers::{Command, Update},
    replies::ReplyPayload,
};
use rand::Rng;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Dispatcher {
    articles: Arc<ArticleTable>,
}

impl Dispatcher {
    pub fn new(articles: Arc<ArticleTable>) -> Self {
        Dispatcher { articles }
    }

    pub fn articles(&self) -> &ArticleTable {
        &self.articles
    }

    /// Build the reply for an update.
    ///
    /// # Description
    ///
    /// `rng` is the source of randomness for the article draws. Returns `None` when the update requires no
    /// action, which translates into an empty reply.
    pub fn dispatch<R: Rng + ?Sized>(&self, update: &Update, rng: &mut R) -> Option<ReplyPayload> {
        let command = update.command();
        debug!("Update classified as {command:?}");

        match command {
            Command::InlineQuery(query) => Some(inline_query(query, &self.articles, rng)),
            Command::MyArticle(msg) => Some(my_article(msg, &self.articles, rng)),
            Command::Help(msg) => Some(help(msg)),
            Command::Ignore => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::{SeedableRng, rngs::StdRng};
    use rstest::{fixture, rstest};

    #[fixture]
    fn dispatcher() -> Dispatcher {
        let articles = ArticleTable::embedded().expect("Failed to load the embedded table");
        Dispatcher::new(Arc::new(articles))
    }

    fn dispatch(dispatcher: &Dispatcher, body: &str) -> Option<ReplyPayload> {
        let update = Update::from_slice(body.as_bytes()).expect("Failed to decode");
        dispatcher.dispatch(&update, &mut StdRng::seed_from_u64(11))
    }

    #[rstest]
    fn inline_query_gets_an_answer(dispatcher: Dispatcher) {
        let reply = dispatch(&dispatcher, r#"{"inline_query":{"id":"abc"}}"#);

        let Some(ReplyPayload::AnswerInlineQuery(answer)) = reply else {
            panic!("Expected an answer to the inline query");
        };
        assert_eq!(answer.inline_query_id, "abc");
        assert_eq!(answer.results.len(), 1);
    }

    #[rstest]
    fn my_article_gets_an_article(dispatcher: Dispatcher) {
        let reply = dispatch(
            &dispatcher,
            r#"{"message":{"message_id":5,"message_thread_id":1,"chat":{"id":42},"text":"/myarticle"}}"#,
        );

        let Some(ReplyPayload::SendMessage(msg)) = reply else {
            panic!("Expected a message");
        };
        assert!(msg.parse_mode.is_some());
        assert!(
            dispatcher
                .articles()
                .iter()
                .any(|a| msg.text.contains(&format!("<code>{}</code>", a.id)))
        );
    }

    #[rstest]
    fn help_gets_no_parse_mode(dispatcher: Dispatcher) {
        let reply = dispatch(
            &dispatcher,
            r#"{"message":{"message_id":5,"chat":{"id":42},"text":"/help"}}"#,
        );

        let Some(ReplyPayload::SendMessage(msg)) = reply else {
            panic!("Expected a message");
        };
        assert!(msg.parse_mode.is_none());
    }

    #[rstest]
    #[case::empty_update("{}")]
    #[case::no_text(r#"{"message":{"message_id":5,"chat":{"id":42}}}"#)]
    #[case::other_text(r#"{"message":{"message_id":5,"chat":{"id":42},"text":"hi"}}"#)]
    fn nothing_to_reply(dispatcher: Dispatcher, #[case] body: &str) {
        assert!(dispatch(&dispatcher, body).is_none());
    }
}
