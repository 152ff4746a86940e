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

//! Module with the handler for the webhook endpoint of the MyArticle bot.
//!
//! # Description
//!
//! Telegram delivers every update as a POST request to the webhook. The bot answers within the same
//! request: the body of the response is the method call that Telegram has to execute, or nothing at all
//! when the update needs no reply.
//!
//! Example of request:
//!
//! ```bash
//! curl -X POST 'http://localhost:9602/webhook' \
//!   -H 'Content-Type: application/json' \
//!   -d '{"message":{"message_id":5,"chat":{"id":42},"text":"/myarticle"}}'
//! ```

use crate::{WebServerState, errors::BotError, handlers::Update};
use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

#[tracing::instrument(name = "Webhook handler", skip_all)]
pub async fn webhook_handler(
    State(state): State<WebServerState>,
    body: Bytes,
) -> Result<Response, BotError> {
    let update = match Update::from_slice(&body) {
        Ok(update) => update,
        Err(e) => {
            warn!("Undecodable update received: {e}");
            if state.reject_malformed {
                return Err(BotError::WrongMessageFormat);
            }
            return Ok(StatusCode::OK.into_response());
        }
    };

    let reply = state.dispatcher.dispatch(&update, &mut rand::rng());

    match reply {
        Some(payload) => Ok(Json(payload).into_response()),
        None => {
            debug!("Nothing to reply");
            Ok(StatusCode::OK.into_response())
        }
    }
}
