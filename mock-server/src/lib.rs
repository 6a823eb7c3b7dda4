//! In-memory stand-in for the article REST service.
//!
//! Serves the same four routes as the deployed API, including its
//! `/post/{id}` delete path, and wraps every payload in a `data` envelope.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Article {
    pub id: i64,
    pub titre: String,
    pub description: String,
}

#[derive(Deserialize)]
pub struct ArticleInput {
    pub titre: String,
    pub description: String,
}

#[derive(Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

#[derive(Debug, Default)]
pub struct Store {
    next_id: i64,
    articles: BTreeMap<i64, Article>,
}

impl Store {
    fn insert(&mut self, input: ArticleInput) -> Article {
        self.next_id += 1;
        let article = Article {
            id: self.next_id,
            titre: input.titre,
            description: input.description,
        };
        self.articles.insert(article.id, article.clone());
        article
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    app_with(Db::default())
}

/// Router over an existing store, so tests can seed or inspect it.
pub fn app_with(db: Db) -> Router {
    Router::new()
        .route("/posts", get(list_articles))
        .route("/posts/create", post(create_article))
        .route("/posts/edit/{id}", put(update_article))
        .route("/post/{id}", delete(delete_article))
        .with_state(db)
}

/// Insert an article directly, bypassing HTTP.
pub async fn seed(db: &Db, titre: &str, description: &str) -> Article {
    db.write().await.insert(ArticleInput {
        titre: titre.to_string(),
        description: description.to_string(),
    })
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_articles(State(db): State<Db>) -> Json<Envelope<Vec<Article>>> {
    let store = db.read().await;
    Json(Envelope {
        data: store.articles.values().cloned().collect(),
    })
}

async fn create_article(
    State(db): State<Db>,
    Json(input): Json<ArticleInput>,
) -> (StatusCode, Json<Envelope<Article>>) {
    let article = db.write().await.insert(input);
    info!(id = article.id, "article created");
    (StatusCode::CREATED, Json(Envelope { data: article }))
}

async fn update_article(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<ArticleInput>,
) -> Result<Json<Envelope<Article>>, StatusCode> {
    let mut store = db.write().await;
    let article = store.articles.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    article.titre = input.titre;
    article.description = input.description;
    info!(id, "article updated");
    Ok(Json(Envelope {
        data: article.clone(),
    }))
}

async fn delete_article(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store
        .articles
        .remove(&id)
        .map(|_| {
            info!(id, "article deleted");
            StatusCode::NO_CONTENT
        })
        .ok_or(StatusCode::NOT_FOUND)
}
