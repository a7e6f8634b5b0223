//! Error types for the page model and its renderers.
//!
//! Building the model never fails; these cover the checks and rendering
//! steps layered on top of it.

use thiserror::Error;

/// Model invariant violations reported by [`crate::PageModel::validate`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("page field `{0}` is empty")]
    EmptyField(&'static str),

    #[error("gallery entry {0} is empty")]
    EmptyImage(usize),

    #[error("gallery has no images")]
    EmptyGallery,
}

/// Failures while turning a model into markup
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] askama::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid mount point `{0}`")]
    InvalidMountPoint(String),
}
