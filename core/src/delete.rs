//! Delete confirmation flow.
//!
//! # Design
//! `Loading → {NotFound | LoadFailed | Confirming} → Deleting →
//! {Deleted | Confirming}`. A failed delete returns to `Confirming` with the
//! article still held, so the preview stays on screen and the buttons are
//! usable again.
//!
//! The confirmation panel fades in after `REVEAL_DELAY`. That is cosmetic:
//! `reveal` flips a flag and nothing else depends on it, so hosts may call
//! it immediately.

use std::time::Duration;

use tracing::{info, warn};

use crate::error::ApiError;
use crate::list::excerpt;
use crate::messages;
use crate::sync::{self, Lookup};
use crate::transport::{ArticleGateway, Transport};
use crate::types::{Article, ArticleId};

pub const REVEAL_DELAY: Duration = Duration::from_millis(500);

/// Descriptions longer than this are cut in the preview.
pub const PREVIEW_EXCERPT_LEN: usize = 150;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteState {
    Loading,
    NotFound,
    LoadFailed(String),
    Confirming {
        article: Article,
        revealed: bool,
        error: Option<String>,
    },
    Deleting {
        article: Article,
    },
    /// Terminal: the host navigates back to the list.
    Deleted,
}

/// What the confirmation panel shows about the article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub title: String,
    pub excerpt: String,
}

#[derive(Debug, Clone)]
pub struct DeleteController {
    state: DeleteState,
}

impl Default for DeleteController {
    fn default() -> Self {
        Self::new()
    }
}

impl DeleteController {
    pub fn new() -> Self {
        Self {
            state: DeleteState::Loading,
        }
    }

    /// Fetch the collection and resolve `raw_id` in it.
    pub fn load<T: Transport>(gateway: &ArticleGateway<T>, raw_id: &str) -> Self {
        let mut controller = Self::new();
        controller.apply_lookup(sync::load_article(gateway, raw_id));
        controller
    }

    pub fn state(&self) -> &DeleteState {
        &self.state
    }

    /// Leave `Loading` once the lookup has settled. Ignored in any other state.
    pub fn apply_lookup(&mut self, lookup: Lookup) {
        if self.state != DeleteState::Loading {
            return;
        }
        self.state = match lookup {
            Lookup::Loading => DeleteState::Loading,
            Lookup::Found(article) => DeleteState::Confirming {
                article,
                revealed: false,
                error: None,
            },
            Lookup::NotFound => DeleteState::NotFound,
            Lookup::LoadFailed(message) => DeleteState::LoadFailed(message),
        };
    }

    pub fn reveal(&mut self) {
        if let DeleteState::Confirming { revealed, .. } = &mut self.state {
            *revealed = true;
        }
    }

    pub fn article(&self) -> Option<&Article> {
        match &self.state {
            DeleteState::Confirming { article, .. } | DeleteState::Deleting { article } => {
                Some(article)
            }
            _ => None,
        }
    }

    pub fn preview(&self) -> Option<Preview> {
        self.article().map(|article| Preview {
            title: article.title.clone(),
            excerpt: excerpt(&article.description, PREVIEW_EXCERPT_LEN).into_owned(),
        })
    }

    /// Message for the body: an empty state while not found or failed to
    /// load, or the banner after a failed delete.
    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            DeleteState::NotFound => Some(messages::ARTICLE_NOT_FOUND),
            DeleteState::LoadFailed(message) => Some(message.as_str()),
            DeleteState::Confirming { error, .. } => error.as_deref(),
            _ => None,
        }
    }

    /// Whether the confirm and cancel buttons are enabled.
    pub fn can_confirm(&self) -> bool {
        matches!(self.state, DeleteState::Confirming { .. })
    }

    /// Enter `Deleting` and return the id to delete. `None` unless confirming.
    pub fn begin_delete(&mut self) -> Option<ArticleId> {
        let DeleteState::Confirming { article, .. } = &self.state else {
            return None;
        };
        let article = article.clone();
        let id = article.id;
        self.state = DeleteState::Deleting { article };
        Some(id)
    }

    pub fn complete_delete(&mut self, result: Result<(), ApiError>) -> &DeleteState {
        let DeleteState::Deleting { article } = &self.state else {
            return &self.state;
        };
        self.state = match result {
            Ok(()) => {
                info!(id = article.id, "article deleted");
                DeleteState::Deleted
            }
            Err(err) => {
                warn!(id = article.id, error = %err, "article deletion failed");
                DeleteState::Confirming {
                    article: article.clone(),
                    revealed: true,
                    error: Some(messages::DELETE_FAILED.to_string()),
                }
            }
        };
        &self.state
    }

    /// Confirm the deletion. Issues exactly one request when confirming,
    /// none otherwise.
    pub fn delete<T: Transport>(&mut self, gateway: &ArticleGateway<T>) -> &DeleteState {
        match self.begin_delete() {
            Some(id) => {
                let result = gateway.delete(id);
                self.complete_delete(result)
            }
            None => &self.state,
        }
    }
}
