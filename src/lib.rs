//! Library of the MyArticle bot crate.
//!
//! # Description
//!
//! The bot answers every update within the webhook request itself, so it never calls the Bot API on its
//! own. See [endpoints::webhook_handler] for the entry point.

use axum::{Router, routing::post};
use std::sync::Arc;

pub mod articles;
pub mod configuration;
pub mod errors;
pub mod keyboards;
pub mod replies;
pub mod telemetry;

// Bring all the endpoints to the main context.
pub mod endpoints {
    mod help;
    mod helper;
    mod inline_query;
    mod my_article;
    mod webhook;

    pub use help::help;
    pub use inline_query::{INLINE_CACHE_TIME, inline_query};
    pub use my_article::my_article;
    pub use webhook::webhook_handler;
}

// Bring all the handlers to the main context.
pub mod handlers {
    mod dispatcher;
    mod update;

    pub use dispatcher::Dispatcher;
    pub use update::*;
}

pub use articles::ArticleTable;
pub use handlers::Dispatcher;

/// State shared by the handlers of the HTTP server.
#[derive(Debug, Clone)]
pub struct WebServerState {
    pub dispatcher: Dispatcher,
    /// Answer undecodable bodies with _400 Bad Request_ instead of an empty reply.
    pub reject_malformed: bool,
}

impl WebServerState {
    pub fn new(articles: ArticleTable, reject_malformed: bool) -> Self {
        WebServerState {
            dispatcher: Dispatcher::new(Arc::new(articles)),
            reject_malformed,
        }
    }
}

/// Build the router of the HTTP server.
///
/// Only `POST` requests to `webhook_path` are served.
pub fn router(state: WebServerState, webhook_path: &str) -> Router {
    let webhook_path = if webhook_path.starts_with('/') {
        webhook_path.to_owned()
    } else {
        format!("/{webhook_path}")
    };

    Router::new()
        .route(&webhook_path, post(endpoints::webhook_handler))
        .with_state(state)
}
