//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed cwd and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use valma_config::ValmaConfig;

#[test]
fn loads_layout_and_branding_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[layout]
students_dir = "site/students"
site_stylesheet = "../../assets/site.css"

[branding]
title_prefix = "Attendance"
"#,
        )?;

        let config: ValmaConfig = Figment::from(Serialized::defaults(ValmaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.layout.students_dir, "site/students");
        assert_eq!(config.layout.site_stylesheet, "../../assets/site.css");
        assert_eq!(config.branding.page_title("Home"), "Attendance - Home");
        assert!(config.revert.remove_helpers);
        Ok(())
    });
}

#[test]
fn partial_section_keeps_field_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[revert]
remove_helpers = false
"#,
        )?;

        let config: ValmaConfig = Figment::from(Serialized::defaults(ValmaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!(!config.revert.remove_helpers);
        assert_eq!(config.revert.helpers.len(), 6);
        assert_eq!(config.layout.students_dir, "public/student");
        Ok(())
    });
}

#[test]
fn project_config_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".valma")?;
        jail.create_file(
            ".valma/config.toml",
            r#"
[layout]
students_dir = "www/student"
"#,
        )?;

        let config = ValmaConfig::load().expect("config loads");
        assert_eq!(config.layout.students_dir, "www/student");
        Ok(())
    });
}

#[test]
fn empty_title_prefix_fails_validation() {
    Jail::expect_with(|jail| {
        jail.create_dir(".valma")?;
        jail.create_file(
            ".valma/config.toml",
            r#"
[branding]
title_prefix = "  "
"#,
        )?;

        let err = ValmaConfig::load().unwrap_err();
        assert!(err.to_string().contains("branding.title_prefix"));
        Ok(())
    });
}
