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

//! MyArticle bot configuration module
//!
//! # Description
//!
//! This module includes all the definitions for the app's settings and the
//! objects that automate reading the configuration from files or environment
//! variables and parsing them to Rust's native types.
//!
//! All the environment variables that are meant to be used within this module shall use the
//! prefix _MYARTICLEBOT_, and `__` to separate nested keys.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Name of the directory in which configuration files will be stored.
const CONF_DIR: &str = "config";

/// Main settings `struct`.
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// Level for the tracing crate.
    pub tracing_level: String,
    /// Application specific settings.
    pub application: ApplicationSettings,
    /// Source of the article table.
    #[serde(default)]
    pub articles: ArticlesSettings,
}

/// Settings of the HTTP side of the bot.
///
/// # Description
///
/// - [ApplicationSettings::webhook_path]: the only route that accepts updates from Telegram.
/// - [ApplicationSettings::reject_malformed]: when `true`, bodies that can't be decoded as an update are
///   answered with _400 Bad Request_. Otherwise, an empty reply is sent back so that Telegram doesn't
///   attempt to deliver the same update again.
#[derive(Debug, Deserialize)]
pub struct ApplicationSettings {
    pub http_server_host: String,
    pub http_server_port: u16,
    #[serde(default = "default_webhook_path")]
    pub webhook_path: String,
    #[serde(default)]
    pub reject_malformed: bool,
}

/// Settings of the article table.
///
/// When [ArticlesSettings::file] is `None`, the table embedded in the binary is used.
#[derive(Debug, Default, Deserialize)]
pub struct ArticlesSettings {
    pub file: Option<String>,
}

fn default_webhook_path() -> String {
    "/webhook".to_owned()
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        // Build the full path of the configuration directory.
        let base_path =
            std::env::current_dir().map_err(|e| ConfigError::Foreign(Box::new(e)))?;
        let cfg_dir = base_path.join(CONF_DIR);

        let settings = Config::builder()
            .add_source(File::from(cfg_dir.join("base")).required(true))
            .add_source(Environment::with_prefix("myarticlebot").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// Address in which the HTTP server listens, in the form `host:port`.
    pub fn http_server_address(&self) -> String {
        format!(
            "{}:{}",
            self.application.http_server_host, self.application.http_server_port
        )
    }
}
