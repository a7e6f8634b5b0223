use crate::error::RenderError;
use crate::model::PageModel;

/// JSON renderer exposing the model under its binding names
pub struct JsonRenderer;

impl JsonRenderer {
    /// Render the model as pretty-printed JSON
    pub fn render(page: &PageModel) -> Result<String, RenderError> {
        Ok(serde_json::to_string_pretty(page)?)
    }

    /// Render the model as compact JSON (no whitespace)
    pub fn render_compact(page: &PageModel) -> Result<String, RenderError> {
        Ok(serde_json::to_string(page)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::create_model;

    #[test]
    fn test_render_json() {
        let json = JsonRenderer::render(&create_model()).unwrap();

        assert!(json.contains("\"title\": \"Personal Profile Web page\""));
        assert!(json.contains("\"section7\": \"7 Picture Gallery\""));
        assert!(json.contains("\"footer\": \"Asia Pacific College\""));
        assert!(json.contains("\"manyFoods\": ["));
    }

    #[test]
    fn test_render_compact() {
        let json = JsonRenderer::render_compact(&create_model()).unwrap();

        assert!(!json.contains("\n"));
        assert!(json.starts_with("{\"title\":\"Personal Profile Web page\""));
    }

    #[test]
    fn test_json_reads_back_into_model() {
        let json = JsonRenderer::render_compact(&create_model()).unwrap();
        let parsed: PageModel = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, create_model());
    }
}
