//! Renderers that bind a [`PageModel`](crate::PageModel) into output markup.
//!
//! Each call reads the model afresh; nothing is cached between renders.

pub mod html;
pub mod json;
pub mod markdown;

pub use html::HtmlRenderer;
pub use json::JsonRenderer;
pub use markdown::MarkdownRenderer;
