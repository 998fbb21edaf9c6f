use figment::Jail;
use valma_config::ValmaConfig;

#[test]
fn env_overrides_nested_fields() {
    Jail::expect_with(|jail| {
        jail.set_env("VALMA_LAYOUT__STUDENTS_DIR", "from/env");
        jail.set_env("VALMA_REVERT__REMOVE_HELPERS", "false");

        let config = ValmaConfig::load().expect("config loads");
        assert_eq!(config.layout.students_dir, "from/env");
        assert!(!config.revert.remove_helpers);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".valma")?;
        jail.create_file(
            ".valma/config.toml",
            r#"
[branding]
title_prefix = "FromFile"
"#,
        )?;
        jail.set_env("VALMA_BRANDING__TITLE_PREFIX", "FromEnv");

        let config = ValmaConfig::load().expect("config loads");
        assert_eq!(config.branding.title_prefix, "FromEnv");
        Ok(())
    });
}

#[test]
fn project_root_argument_is_respected() {
    Jail::expect_with(|jail| {
        jail.create_dir("site")?;
        jail.create_dir("site/.valma")?;
        jail.create_file(
            "site/.valma/config.toml",
            r#"
[layout]
students_dir = "pages/student"
"#,
        )?;

        let root = jail.directory().join("site");
        let config = ValmaConfig::load_for_project(&root).expect("config loads");
        assert_eq!(config.layout.students_dir, "pages/student");
        assert_eq!(
            config.students_dir(&root),
            root.join("pages/student")
        );
        Ok(())
    });
}
