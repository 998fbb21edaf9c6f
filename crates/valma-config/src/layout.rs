//! Where student folders live and how they reference the site stylesheet.

use serde::{Deserialize, Serialize};
use valma_core::layout::DEFAULT_SITE_STYLESHEET;

fn default_students_dir() -> String {
    "public/student".to_string()
}

fn default_site_stylesheet() -> String {
    DEFAULT_SITE_STYLESHEET.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LayoutConfig {
    /// Students root, relative to the project root unless absolute.
    #[serde(default = "default_students_dir")]
    pub students_dir: String,

    /// Site stylesheet href as seen from inside a student folder.
    #[serde(default = "default_site_stylesheet")]
    pub site_stylesheet: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            students_dir: default_students_dir(),
            site_stylesheet: default_site_stylesheet(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = LayoutConfig::default();
        assert_eq!(config.students_dir, "public/student");
        assert_eq!(config.site_stylesheet, "../../style.css");
    }
}
