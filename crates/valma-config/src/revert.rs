//! Revert cleanup settings.

use serde::{Deserialize, Serialize};

const fn default_remove_helpers() -> bool {
    true
}

fn default_helpers() -> Vec<String> {
    [
        "scripts/merge_students.js",
        "scripts/revert_merge.js",
        "scripts/patch_student_scripts.js",
        "scripts/patch_student_scripts_v2.js",
        "scripts/replace_nav_in_scripts.js",
        "FILE_TREE.txt",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RevertConfig {
    /// Delete the helper files once every folder has been reverted.
    #[serde(default = "default_remove_helpers")]
    pub remove_helpers: bool,

    /// Helper files, relative to the project root.
    #[serde(default = "default_helpers")]
    pub helpers: Vec<String>,
}

impl Default for RevertConfig {
    fn default() -> Self {
        Self {
            remove_helpers: default_remove_helpers(),
            helpers: default_helpers(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = RevertConfig::default();
        assert!(config.remove_helpers);
        assert_eq!(config.helpers.len(), 6);
        assert!(config.helpers.contains(&"FILE_TREE.txt".to_string()));
        assert!(config.helpers.contains(&"scripts/revert_merge.js".to_string()));
    }
}
