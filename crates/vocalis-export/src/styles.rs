use serde::{Deserialize, Serialize};

/// Colors and fonts inlined into the report's `<style>` block. The document
/// must stay self-contained, so everything here ends up embedded, with no
/// external stylesheets or font files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportTheme {
    /// CSS font stack for the whole document.
    pub body_font: String,

    /// Primary brand color: headings, score values, table labels.
    pub accent: String,

    /// Secondary brand color: gradient end, block borders.
    pub accent_secondary: String,

    /// Body text color.
    pub text: String,

    /// De-emphasized text color.
    pub muted: String,

    /// Background for score cards and exercise blocks.
    pub card_background: String,
}

impl Default for ReportTheme {
    fn default() -> Self {
        Self {
            body_font: "Arial, sans-serif".to_string(),
            accent: "#6366f1".to_string(),
            accent_secondary: "#8b5cf6".to_string(),
            text: "#333".to_string(),
            muted: "#666".to_string(),
            card_background: "#f5f5f5".to_string(),
        }
    }
}
