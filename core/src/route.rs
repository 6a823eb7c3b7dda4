//! The four screens and their paths.

use crate::types::ArticleId;

/// A screen. Edit and delete keep the raw path parameter: an id that does
/// not parse is reported by the screen as "not found", not as a bad route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List,
    Create,
    Edit(String),
    Delete(String),
}

impl Route {
    pub fn edit(id: ArticleId) -> Self {
        Route::Edit(id.to_string())
    }

    pub fn delete(id: ArticleId) -> Self {
        Route::Delete(id.to_string())
    }

    /// Match a location path. Query strings, fragments and a trailing `/`
    /// are ignored.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Some(Route::List),
            ["create"] => Some(Route::Create),
            ["edit", id] => Some(Route::Edit((*id).to_string())),
            ["delete", id] => Some(Route::Delete((*id).to_string())),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::List => "/".to_string(),
            Route::Create => "/create".to_string(),
            Route::Edit(id) => format!("/edit/{id}"),
            Route::Delete(id) => format!("/delete/{id}"),
        }
    }
}
