//! Domain DTOs for the article API.
//!
//! # Design
//! The remote service speaks French on the wire (`titre`); the Rust side uses
//! `title` and renames at the serde boundary. These types are defined
//! independently from the mock-server crate so integration tests catch any
//! schema drift between the two.

use serde::{Deserialize, Serialize};

/// Minimum length of an article title.
pub const TITLE_MIN: usize = 3;
/// Maximum length of an article title.
pub const TITLE_MAX: usize = 100;
/// Minimum length of an article description.
pub const DESCRIPTION_MIN: usize = 10;
/// Maximum length of an article description.
pub const DESCRIPTION_MAX: usize = 1000;

/// Identifier assigned by the remote service.
pub type ArticleId = i64;

/// An article as returned by the API. Owned by the remote service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    #[serde(rename = "titre")]
    pub title: String,
    pub description: String,
}

/// Request body for both create and update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleInput {
    #[serde(rename = "titre")]
    pub title: String,
    pub description: String,
}

impl From<&Article> for ArticleInput {
    fn from(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            description: article.description.clone(),
        }
    }
}

/// Response wrapper: the payload lives under `data`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Envelope<T> {
    pub data: T,
}
