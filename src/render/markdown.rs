use crate::model::PageModel;

/// Markdown renderer for the profile page
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    /// Render the page as markdown
    pub fn render(page: &PageModel) -> String {
        let mut md = String::with_capacity(1024);

        md.push_str(&format!("# {}\n\n", page.title));

        for section in page.sections() {
            md.push_str(&format!("## {}\n\n", section));
        }

        // Gallery sits under the last heading
        for (idx, url) in page.gallery().iter().enumerate() {
            md.push_str(&format!("![Gallery picture {}]({})\n", idx + 1, url));
        }
        md.push('\n');

        md.push_str("---\n\n");
        md.push_str(&format!("*{}*\n", page.footer));

        md
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::create_model;

    #[test]
    fn test_render_markdown() {
        let md = MarkdownRenderer::render(&create_model());

        assert!(md.starts_with("# Personal Profile Web page\n"));
        assert!(md.contains("## 4 IT Experience\n"));
        assert!(md.contains("## 5 Hobbies & Interests\n"));
        assert!(md.contains("![Gallery picture 3](https://www.w3schools.com/vue/img_cake.svg)"));
        assert!(md.trim_end().ends_with("*Asia Pacific College*"));
    }

    #[test]
    fn test_markdown_heading_count() {
        let md = MarkdownRenderer::render(&create_model());
        assert_eq!(md.lines().filter(|l| l.starts_with("## ")).count(), 7);
        assert_eq!(md.lines().filter(|l| l.starts_with("![")).count(), 7);
    }
}
