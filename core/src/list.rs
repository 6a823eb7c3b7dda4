//! Article list screen.

use std::borrow::Cow;

use tracing::warn;

use crate::error::ApiError;
use crate::messages;
use crate::transport::{ArticleGateway, Transport};
use crate::types::Article;

/// Descriptions longer than this are cut in the list table.
pub const LIST_EXCERPT_LEN: usize = 80;

/// Cut `text` to `max` characters, appending `...` when anything was dropped.
pub fn excerpt(text: &str, max: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max) {
        Some((cut, _)) => Cow::Owned(format!("{}...", &text[..cut])),
        None => Cow::Borrowed(text),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListScreen {
    Loading,
    Loaded(Vec<Article>),
    LoadFailed(String),
}

impl ListScreen {
    pub fn load<T: Transport>(gateway: &ArticleGateway<T>) -> Self {
        Self::from_result(gateway.list())
    }

    pub fn from_result(result: Result<Vec<Article>, ApiError>) -> Self {
        match result {
            Ok(articles) => ListScreen::Loaded(articles),
            Err(err) => {
                warn!(error = %err, "failed to load article list");
                ListScreen::LoadFailed(messages::LOAD_ARTICLES_FAILED.to_string())
            }
        }
    }

    /// Loaded articles; empty while loading or after a failure.
    pub fn articles(&self) -> &[Article] {
        match self {
            ListScreen::Loaded(articles) => articles,
            ListScreen::Loading | ListScreen::LoadFailed(_) => &[],
        }
    }

    /// Count line above the table, once the list has loaded.
    pub fn summary(&self) -> Option<String> {
        let ListScreen::Loaded(articles) = self else {
            return None;
        };
        Some(match articles.len() {
            0 => "Aucun article trouvé".to_string(),
            1 => "1 article trouvé".to_string(),
            n => format!("{n} articles trouvés"),
        })
    }

    /// Description cell for one row of the table.
    pub fn excerpt_for(article: &Article) -> Cow<'_, str> {
        if article.description.is_empty() {
            return Cow::Borrowed(messages::NO_DESCRIPTION);
        }
        excerpt(&article.description, LIST_EXCERPT_LEN)
    }

    /// Title and description cell of every loaded row, in service order.
    pub fn rows(&self) -> Vec<(&str, Cow<'_, str>)> {
        self.articles()
            .iter()
            .map(|article| (article.title.as_str(), Self::excerpt_for(article)))
            .collect()
    }
}
