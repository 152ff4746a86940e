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

//! Main file of the MyArticle bot

use myarticlebot::{
    ArticleTable, WebServerState, configuration::Settings, router, telemetry::configure_tracing,
};
use std::process::exit;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load the settings.
    let settings = match Settings::new() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to parse configuration files: {e}");
            exit(78)
        }
    };

    // Initialize the tracing subsystem.
    configure_tracing(settings.tracing_level.as_str());

    // The bot can't serve a single request without articles.
    let articles = match ArticleTable::load(settings.articles.file.as_deref()) {
        Ok(articles) => articles,
        Err(e) => {
            error!("Failed to load the article table: {e}");
            exit(65)
        }
    };
    info!("Loaded {} articles", articles.len());

    let state = WebServerState::new(articles, settings.application.reject_malformed);
    let app = router(state, &settings.application.webhook_path);

    let http_server_address = settings.http_server_address();
    let tcp_listener = TcpListener::bind(&http_server_address).await?;

    info!(
        "Started MyArticle bot server on {http_server_address}{}",
        settings.application.webhook_path
    );

    axum::serve(tcp_listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Gracefully closed MyArticle bot server");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for the shutdown signal: {e}");
    }
}
