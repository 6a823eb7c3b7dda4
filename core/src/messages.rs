//! User-facing strings shown by the screens.

pub const NO_DESCRIPTION: &str = "Aucune description";
pub const ARTICLE_NOT_FOUND: &str = "Article non trouvé";
pub const LOAD_ARTICLE_FAILED: &str =
    "Une erreur est survenue lors du chargement de l'article";
pub const LOAD_ARTICLES_FAILED: &str =
    "Une erreur est survenue lors du chargement des articles";
pub const CREATE_FAILED: &str = "Une erreur est survenue lors de la création de l'article";
pub const UPDATE_FAILED: &str =
    "Une erreur est survenue lors de la modification de l'article";
pub const DELETE_FAILED: &str =
    "Une erreur est survenue lors de la suppression de l'article";
pub const DISCARD_CHANGES_PROMPT: &str =
    "Vous avez des modifications non enregistrées. Voulez-vous vraiment quitter ?";
