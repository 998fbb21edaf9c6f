use valma_config::ValmaConfig;

/// Knobs shared by merge and revert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOptions {
    /// Site stylesheet href as seen from a student folder.
    pub site_stylesheet: String,
    pub title_prefix: String,
    /// Revert only: delete `helpers` after all folders are processed.
    pub remove_helpers: bool,
    /// Revert only: helper files relative to the project root.
    pub helpers: Vec<String>,
}

impl TransformOptions {
    #[must_use]
    pub fn page_title(&self, page: &str) -> String {
        format!("{} - {page}", self.title_prefix)
    }

    /// Contents of the regenerated per-student stylesheet.
    #[must_use]
    pub fn stylesheet_stub(&self) -> String {
        format!("@import url(\"{}\");\n", self.site_stylesheet)
    }
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self::from(&ValmaConfig::default())
    }
}

impl From<&ValmaConfig> for TransformOptions {
    fn from(config: &ValmaConfig) -> Self {
        Self {
            site_stylesheet: config.layout.site_stylesheet.clone(),
            title_prefix: config.branding.title_prefix.clone(),
            remove_helpers: config.revert.remove_helpers,
            helpers: config.revert.helpers.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use valma_core::layout::{DEFAULT_SITE_STYLESHEET, DEFAULT_TITLE_PREFIX};

    use super::*;

    #[test]
    fn defaults_follow_layout_constants() {
        let options = TransformOptions::default();
        assert_eq!(options.site_stylesheet, DEFAULT_SITE_STYLESHEET);
        assert_eq!(options.title_prefix, DEFAULT_TITLE_PREFIX);
        assert_eq!(options.stylesheet_stub(), "@import url(\"../../style.css\");\n");
        assert_eq!(options.page_title("Student"), "VALMAtrack - Student");
    }
}
