use std::path::PathBuf;

use anyhow::Context;
use valma_config::ValmaConfig;

use crate::cli::GlobalFlags;

/// Paths and settings every batch command needs.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub project_root: PathBuf,
    pub students_dir: PathBuf,
    pub config: ValmaConfig,
}

/// Resolve the project root, load `.env` and layered config, apply overrides.
pub fn load_workspace(flags: &GlobalFlags) -> anyhow::Result<Workspace> {
    let project_root = resolve_project_root(flags.project.as_deref())?;

    let _ = dotenvy::from_path(project_root.join(".env"));
    let config = ValmaConfig::load_for_project(&project_root).with_context(|| {
        format!(
            "failed to load configuration for {}",
            project_root.display()
        )
    })?;

    let students_dir = flags.students_dir.as_deref().map_or_else(
        || config.students_dir(&project_root),
        |dir| project_root.join(dir),
    );
    tracing::debug!(
        project_root = %project_root.display(),
        students_dir = %students_dir.display(),
        "workspace resolved"
    );

    Ok(Workspace {
        project_root,
        students_dir,
        config,
    })
}

fn resolve_project_root(project_override: Option<&str>) -> anyhow::Result<PathBuf> {
    if let Some(path) = project_override {
        let explicit = PathBuf::from(path);
        if explicit.is_dir() {
            return Ok(explicit);
        }
        anyhow::bail!(
            "invalid --project '{}': directory does not exist",
            explicit.display()
        );
    }
    std::env::current_dir().context("failed to read current directory")
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::cli::{ColorMode, OutputFormat, ProgressMode};

    fn flags(project: &Path, students_dir: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            quiet: true,
            verbose: false,
            project: Some(project.display().to_string()),
            students_dir: students_dir.map(str::to_string),
            color: ColorMode::Never,
            progress: ProgressMode::Off,
        }
    }

    #[test]
    fn students_dir_defaults_from_config() {
        let project = tempfile::TempDir::new().unwrap();
        let workspace = load_workspace(&flags(project.path(), None)).unwrap();
        assert_eq!(workspace.project_root, project.path());
        assert_eq!(
            workspace.students_dir,
            project.path().join("public/student")
        );
    }

    #[test]
    fn students_dir_flag_overrides_config() {
        let project = tempfile::TempDir::new().unwrap();
        let workspace = load_workspace(&flags(project.path(), Some("web/kids"))).unwrap();
        assert_eq!(workspace.students_dir, project.path().join("web/kids"));
    }

    #[test]
    fn missing_project_is_rejected() {
        let project = tempfile::TempDir::new().unwrap();
        let missing = project.path().join("nope");
        let err = load_workspace(&flags(&missing, None)).unwrap_err();
        assert!(err.to_string().contains("directory does not exist"));
    }
}
