//! Resolving a single article from the full collection.
//!
//! # Design
//! The service has no single-item endpoint, so the edit and delete screens
//! fetch `GET /posts` and pick their subject out of it. The lookup itself is
//! the pure `find_by_id`; `load_article` is the fetch plus that lookup, and
//! `resolve` turns the fetch result into a display state so it can be tested
//! without a transport.

use tracing::{debug, warn};

use crate::error::ApiError;
use crate::messages;
use crate::transport::{ArticleGateway, Transport};
use crate::types::{Article, ArticleId};

/// Find the article with `id` in a fetched collection.
pub fn find_by_id(articles: &[Article], id: ArticleId) -> Option<&Article> {
    articles.iter().find(|article| article.id == id)
}

/// Parse a route parameter as an article id.
///
/// Surrounding whitespace is tolerated; anything that is not an integer
/// yields `None`, which the screens treat exactly like a missing article.
pub fn parse_article_id(raw: &str) -> Option<ArticleId> {
    raw.trim().parse().ok()
}

/// Display state of a screen bound to one article.
///
/// `resolve` never yields `Loading`; the host holds it while the fetch is
/// in flight and replaces it with the resolved state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// Fetch in flight: show a spinner, never stale data.
    Loading,
    Found(Article),
    /// The collection loaded but does not contain the id.
    NotFound,
    /// The fetch itself failed. Not retried.
    LoadFailed(String),
}

impl Lookup {
    /// Message for the empty-state body, if the screen is in a terminal
    /// error state.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Lookup::NotFound => Some(messages::ARTICLE_NOT_FOUND),
            Lookup::LoadFailed(message) => Some(message.as_str()),
            Lookup::Loading | Lookup::Found(_) => None,
        }
    }

    pub fn article(&self) -> Option<&Article> {
        match self {
            Lookup::Found(article) => Some(article),
            _ => None,
        }
    }
}

/// Turn a collection fetch result into the state for `raw_id`.
pub fn resolve(fetched: Result<Vec<Article>, ApiError>, raw_id: &str) -> Lookup {
    let articles = match fetched {
        Ok(articles) => articles,
        Err(err) => {
            warn!(error = %err, "failed to load articles");
            return Lookup::LoadFailed(messages::LOAD_ARTICLE_FAILED.to_string());
        }
    };
    let Some(id) = parse_article_id(raw_id) else {
        debug!(raw_id, "route id is not an integer");
        return Lookup::NotFound;
    };
    match find_by_id(&articles, id) {
        Some(article) => Lookup::Found(article.clone()),
        None => {
            debug!(id, count = articles.len(), "article missing from collection");
            Lookup::NotFound
        }
    }
}

/// Fetch the collection once and resolve `raw_id` in it.
pub fn load_article<T: Transport>(gateway: &ArticleGateway<T>, raw_id: &str) -> Lookup {
    resolve(gateway.list(), raw_id)
}
