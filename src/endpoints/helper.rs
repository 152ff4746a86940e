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

use crate::articles::Article;
use teloxide::utils::html;

/// Render an article as an HTML message.
///
/// # Description
///
/// The identifier goes in a monospace span and the label is hidden behind a spoiler, so the
/// user has to tap the message to discover it.
pub(crate) fn article_text(header: &str, article: &Article<'_>) -> String {
    format!(
        "<b><u>📕 {header}:</u></b>\n<code>{}</code> - <tg-spoiler>{}</tg-spoiler>",
        html::escape(article.id),
        html::escape(article.name),
    )
}
