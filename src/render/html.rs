use askama::Template;

use crate::error::RenderError;
use crate::model::PageModel;
use crate::mount::MountPoint;

/// Full profile page, mounted inside `<div id="{mount_id}">`
#[derive(Template)]
#[template(path = "pages/profile.html")]
struct ProfileTemplate<'a> {
    page: &'a PageModel,
    sections: [&'a str; 7],
    mount_id: &'a str,
}

/// HTML renderer for the profile page
pub struct HtmlRenderer;

impl HtmlRenderer {
    /// Render the page as a standalone HTML document
    pub fn render(page: &PageModel, mount: &MountPoint) -> Result<String, RenderError> {
        let template = ProfileTemplate {
            page,
            sections: page.sections(),
            mount_id: mount.id(),
        };

        let html = template.render()?;
        tracing::debug!("Rendered profile page into {} ({} bytes)", mount.selector(), html.len());
        Ok(html)
    }
}
