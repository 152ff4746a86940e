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

//! Module with the logic for the article table.
//!
//! # Description
//!
//! The article table maps short identifiers (article numbers of the Russian Criminal Code) to their
//! titles. It is loaded once at startup, either from the copy embedded in the binary or from an external
//! TOML file, and it is never modified afterwards. That allows sharing it between request handlers
//! behind an `Arc` without any kind of locking.
//!
//! The file format is a single table named `articles`:
//!
//! ```toml
//! [articles]
//! "158" = "Кража"
//! "159" = "Мошенничество"
//! ```

use crate::errors::ArticleError;
use rand::Rng;
use serde::Deserialize;
use std::{collections::BTreeMap, fmt, path::Path};
use tracing::{debug, instrument};

/// Article table shipped with the bot.
const EMBEDDED_TABLE: &str = include_str!("../data/articles.toml");

/// An entry of the [ArticleTable].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Article<'a> {
    pub id: &'a str,
    pub name: &'a str,
}

impl fmt::Display for Article<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.id, self.name)
    }
}

#[derive(Deserialize)]
struct ArticleFile {
    articles: BTreeMap<String, String>,
}

/// Immutable mapping from article identifiers to labels.
///
/// # Description
///
/// A table can only be built through [ArticleTable::from_toml_str] or the helpers based on it, which
/// guarantee that the table is not empty and that no identifier or label is empty.
#[derive(Debug, Clone)]
pub struct ArticleTable {
    articles: BTreeMap<String, String>,
    ids: Vec<String>,
}

impl ArticleTable {
    /// Parse and validate a table written in TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, ArticleError> {
        let file: ArticleFile = toml::from_str(content)?;

        ArticleTable::try_from(file.articles)
    }

    /// Load the table embedded in the binary.
    pub fn embedded() -> Result<Self, ArticleError> {
        ArticleTable::from_toml_str(EMBEDDED_TABLE)
    }

    /// Load a table from an external TOML file.
    #[instrument(name = "Load article table")]
    pub fn from_file(path: &Path) -> Result<Self, ArticleError> {
        let content = std::fs::read_to_string(path)?;

        ArticleTable::from_toml_str(&content)
    }

    /// Load the table from `path` when given, or the embedded one otherwise.
    pub fn load(path: Option<&str>) -> Result<Self, ArticleError> {
        match path {
            Some(path) => ArticleTable::from_file(Path::new(path)),
            None => ArticleTable::embedded(),
        }
    }

    /// Number of articles in the table. Never zero.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Always `false`, a table can't be built without articles.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Look up the label of an article.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.articles.get(id).map(String::as_str)
    }

    /// Draw one article uniformly at random.
    ///
    /// # Description
    ///
    /// Each call is an independent draw: previously served articles are not excluded.
    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> Article<'_> {
        let id = &self.ids[rng.random_range(0..self.ids.len())];
        let article = Article {
            id,
            name: &self.articles[id],
        };
        debug!("Article drawn: {article}");

        article
    }

    /// Iterate over the articles sorted by identifier.
    pub fn iter(&self) -> impl Iterator<Item = Article<'_>> {
        self.articles.iter().map(|(id, name)| Article { id, name })
    }
}

impl TryFrom<BTreeMap<String, String>> for ArticleTable {
    type Error = ArticleError;

    fn try_from(articles: BTreeMap<String, String>) -> Result<Self, Self::Error> {
        if articles.is_empty() {
            return Err(ArticleError::Empty);
        }

        for (id, name) in articles.iter() {
            if id.trim().is_empty() {
                return Err(ArticleError::EmptyId);
            }
            if name.trim().is_empty() {
                return Err(ArticleError::EmptyLabel(id.clone()));
            }
        }

        let ids = articles.keys().cloned().collect();

        Ok(ArticleTable { articles, ids })
    }
}
