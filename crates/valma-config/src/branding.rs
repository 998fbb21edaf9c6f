//! Page title branding.

use serde::{Deserialize, Serialize};
use valma_core::layout::DEFAULT_TITLE_PREFIX;

fn default_title_prefix() -> String {
    DEFAULT_TITLE_PREFIX.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BrandingConfig {
    /// Titles are rendered as `<prefix> - <Page>`.
    #[serde(default = "default_title_prefix")]
    pub title_prefix: String,
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            title_prefix: default_title_prefix(),
        }
    }
}

impl BrandingConfig {
    #[must_use]
    pub fn page_title(&self, page: &str) -> String {
        format!("{} - {page}", self.title_prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_title_joins_prefix() {
        let config = BrandingConfig::default();
        assert_eq!(config.page_title("Calendar"), "VALMAtrack - Calendar");
    }
}
