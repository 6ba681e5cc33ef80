use std::path::PathBuf;

/// Failures that abort a whole menu pass
#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Document has no `menu` key")]
    MissingMenu,

    #[error("`menu` must be an object, found {0}")]
    MenuNotObject(&'static str),
}

/// Problems in the catalog tables themselves
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Duplicate catalog slug: {0}")]
    DuplicateSlug(String),

    #[error("Catalog slug {slug:?} is not normalized (expected {expected:?})")]
    InvalidSlug { slug: String, expected: String },

    #[error("Category group for {0:?} has no keywords")]
    EmptyCategory(String),

    #[error("Default image reference is empty")]
    EmptyDefault,
}
