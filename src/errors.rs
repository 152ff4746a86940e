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

//! Custom error types.
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors found while loading the article table.
///
/// All of them are fatal: the bot refuses to serve requests without a valid table.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ArticleError {
    #[error("the article table has no entries")]
    Empty,
    #[error("an article has an empty identifier")]
    EmptyId,
    #[error("the article {0} has an empty label")]
    EmptyLabel(String),
    #[error("wrong format of the article table: {0}")]
    Parse(String),
    #[error("failed to read the article table: {0}")]
    Io(String),
}

impl From<toml::de::Error> for ArticleError {
    fn from(value: toml::de::Error) -> Self {
        ArticleError::Parse(value.to_string())
    }
}

impl From<std::io::Error> for ArticleError {
    fn from(value: std::io::Error) -> Self {
        ArticleError::Io(value.to_string())
    }
}

#[derive(Error, Debug)]
pub enum BotError {
    #[error("wrong format of the payload")]
    WrongMessageFormat,
}

impl IntoResponse for BotError {
    fn into_response(self) -> Response {
        let status = match self {
            BotError::WrongMessageFormat => StatusCode::BAD_REQUEST,
        };
        let body = Json(serde_json::json!({
            "error": self.to_string(),
        }));
        (status, body).into_response()
    }
}
