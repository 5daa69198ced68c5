use thiserror::Error;

use crate::elements::ElementRole;

/// Errors raised while mounting the sidebar layout onto a page.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("sidebar layout element not found: {0}")]
    MissingElement(ElementRole),
}

/// Errors emitted by layout store backends.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("layout store IO failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("layout store JSON failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("layout store backend failed: {0}")]
    Backend(String),
}
