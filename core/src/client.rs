//! Stateless HTTP request builder and response parser for the article API.
//!
//! # Design
//! `ArticleClient` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. [`ArticleGateway`](crate::transport::ArticleGateway)
//! glues the two together around a `Transport`.
//!
//! The deployed service exposes deletion under `/post/{id}` while every other
//! route lives under `/posts`. The paths below match it exactly.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Article, ArticleId, ArticleInput, Envelope};

const JSON_CONTENT_TYPE: (&str, &str) = ("content-type", "application/json");

/// Synchronous, stateless client for the article API.
#[derive(Debug, Clone)]
pub struct ArticleClient {
    base_url: String,
}

impl ArticleClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_articles(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/posts".to_string(), None)
    }

    pub fn build_create_article(&self, input: &ArticleInput) -> Result<HttpRequest, ApiError> {
        let body = encode(input)?;
        Ok(self.request(HttpMethod::Post, "/posts/create".to_string(), Some(body)))
    }

    pub fn build_update_article(
        &self,
        id: ArticleId,
        input: &ArticleInput,
    ) -> Result<HttpRequest, ApiError> {
        let body = encode(input)?;
        Ok(self.request(HttpMethod::Put, format!("/posts/edit/{id}"), Some(body)))
    }

    pub fn build_delete_article(&self, id: ArticleId) -> HttpRequest {
        self.request(HttpMethod::Delete, format!("/post/{id}"), None)
    }

    pub fn parse_list_articles(&self, response: HttpResponse) -> Result<Vec<Article>, ApiError> {
        check_status(&response)?;
        let envelope: Envelope<Vec<Article>> = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::Deserialization(e.to_string()))?;
        Ok(envelope.data)
    }

    /// The created article is not needed by any screen (they all navigate
    /// back to the list, which re-fetches), so only the status is checked.
    pub fn parse_create_article(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    pub fn parse_update_article(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    pub fn parse_delete_article(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    fn request(&self, method: HttpMethod, path: String, body: Option<String>) -> HttpRequest {
        HttpRequest {
            method,
            url: format!("{}{path}", self.base_url),
            headers: vec![(JSON_CONTENT_TYPE.0.to_string(), JSON_CONTENT_TYPE.1.to_string())],
            body,
        }
    }
}

fn encode(input: &ArticleInput) -> Result<String, ApiError> {
    serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))
}

/// Map any non-2xx status to `ApiError::Status`.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::Status {
        status: response.status,
        body: response.body.clone(),
    })
}
