//! Edit screen: load the article, then hand it to a form controller.

use crate::form::FormController;
use crate::sync::{self, Lookup};
use crate::transport::{ArticleGateway, Transport};

#[derive(Debug, Clone)]
pub enum EditScreen {
    Loading,
    NotFound,
    LoadFailed(String),
    Editing(FormController),
}

impl EditScreen {
    pub fn load<T: Transport>(gateway: &ArticleGateway<T>, raw_id: &str) -> Self {
        Self::from_lookup(sync::load_article(gateway, raw_id))
    }

    pub fn from_lookup(lookup: Lookup) -> Self {
        match lookup {
            Lookup::Loading => EditScreen::Loading,
            Lookup::Found(article) => EditScreen::Editing(FormController::edit(article)),
            Lookup::NotFound => EditScreen::NotFound,
            Lookup::LoadFailed(message) => EditScreen::LoadFailed(message),
        }
    }

    /// The form, only once the article has been found.
    pub fn form(&self) -> Option<&FormController> {
        match self {
            EditScreen::Editing(form) => Some(form),
            _ => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut FormController> {
        match self {
            EditScreen::Editing(form) => Some(form),
            _ => None,
        }
    }
}
