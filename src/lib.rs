//! Profile Page
//!
//! Renders a static personal-profile page from an immutable page model.
//!
//! - `model`: the page model and its literal content
//! - `mount`: the element id the page is attached to
//! - `render`: HTML (Askama), JSON and markdown renderers
//! - `config`: environment-driven server settings
//! - `server`: Axum host for the rendered page (feature `api`)

pub mod config;
pub mod error;
pub mod model;
pub mod mount;
pub mod render;

#[cfg(feature = "api")]
pub mod server;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{ModelError, RenderError};
pub use model::{create_model, PageModel};
pub use mount::MountPoint;
pub use render::{HtmlRenderer, JsonRenderer, MarkdownRenderer};

#[cfg(feature = "api")]
pub use server::{create_router, AppState};
