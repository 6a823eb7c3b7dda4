//! Client core for the article service: gateway, form and screen state.
//!
//! # Overview
//! Four screens (list, create, edit, delete) over a remote REST service that
//! owns every article. Nothing is cached between screens: each one fetches
//! what it needs when it is opened.
//!
//! # Design
//! - `ArticleClient` builds `HttpRequest` values and parses `HttpResponse`
//!   values without touching the network; `ArticleGateway` runs them through
//!   an explicit `Transport`.
//! - Screen state (`FormController`, `DeleteController`, `ListScreen`,
//!   `EditScreen`) changes only through synchronous transitions, so every
//!   lifecycle is testable without a renderer or a server.
//! - Single-article screens resolve their subject from the full collection
//!   (`sync::find_by_id`); the service has no single-item endpoint.

pub mod client;
pub mod config;
pub mod delete;
pub mod edit;
pub mod error;
pub mod form;
pub mod http;
pub mod list;
pub mod messages;
pub mod route;
pub mod sync;
pub mod transport;
pub mod types;
pub mod validation;

pub use client::ArticleClient;
pub use config::Config;
pub use delete::{DeleteController, DeleteState};
pub use edit::EditScreen;
pub use error::ApiError;
pub use form::{CancelDecision, Draft, FormController, Phase, SubmitAction, SubmitRequest};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use list::ListScreen;
pub use route::Route;
pub use sync::{find_by_id, Lookup};
pub use transport::{ArticleGateway, Transport, UreqTransport};
pub use types::{Article, ArticleId, ArticleInput, Envelope};
pub use validation::{Field, FieldError, FieldErrors, ValidationError};
