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

//! Handler for inline queries.

use crate::{
    articles::ArticleTable,
    endpoints::helper::article_text,
    handlers::InlineQuery,
    keyboards::{FIND_YOURS_LABEL, switch_inline_keyboard},
    replies::{AnswerInlineQuery, InlineQueryResultArticle, InputTextMessageContent, ReplyPayload},
};
use rand::Rng;
use teloxide::types::ParseMode;
use tracing::info;

/// Seconds that Telegram may keep the answer of an inline query in its cache.
pub const INLINE_CACHE_TIME: u32 = 300;

const RESULT_TITLE: &str = "Твоя статья УК РФ";
const RESULT_DESCRIPTION: &str = "Отправить статью";
const MESSAGE_HEADER: &str = "Моя статья УК РФ";
const THUMBNAIL_URL: &str =
    "https://novgaz-rzn.ru/images/upload/ee360f8f913b4d0cbb6ea54b745fea7d.jpg";
const THUMBNAIL_WIDTH: u32 = 1024;
const THUMBNAIL_HEIGHT: u32 = 682;
/// Query typed in the chat when the button of the result is pressed.
const SWITCH_QUERY: &str = ":?";

/// Inline query handler.
///
/// # Description
///
/// Answers with a single result that holds a random article. The answer is personal, so Telegram
/// won't serve a cached answer of one user to a different user.
#[tracing::instrument(
    name = "Inline query handler",
    skip(query, articles, rng),
    fields(
        query_id = %query.id,
    )
)]
pub fn inline_query<R: Rng + ?Sized>(
    query: &InlineQuery,
    articles: &ArticleTable,
    rng: &mut R,
) -> ReplyPayload {
    info!("Inline query received");

    let article = articles.random(rng);

    let result = InlineQueryResultArticle {
        result_type: "article",
        id: rng.random::<u64>().to_string(),
        title: RESULT_TITLE.to_owned(),
        description: RESULT_DESCRIPTION.to_owned(),
        input_message_content: InputTextMessageContent {
            message_text: article_text(MESSAGE_HEADER, &article),
            parse_mode: ParseMode::Html,
        },
        thumbnail_url: THUMBNAIL_URL.to_owned(),
        thumbnail_width: THUMBNAIL_WIDTH,
        thumbnail_height: THUMBNAIL_HEIGHT,
        reply_markup: switch_inline_keyboard(FIND_YOURS_LABEL, SWITCH_QUERY),
    };

    ReplyPayload::AnswerInlineQuery(AnswerInlineQuery {
        inline_query_id: query.id.clone(),
        cache_time: INLINE_CACHE_TIME,
        is_personal: true,
        results: vec![result],
    })
}
