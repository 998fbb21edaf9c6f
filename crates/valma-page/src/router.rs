//! Hash routing and menu highlighting for the combined document.

use serde::Serialize;
use valma_core::Section;

/// Section selected by a URL hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "section", rename_all = "snake_case")]
pub enum ActiveSection {
    Known(Section),
    /// Hash names no page. Every section stays hidden and no page
    /// initializer runs.
    Unknown(String),
}

impl ActiveSection {
    /// The raw section name, as used for element ids and menu matching.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Known(section) => section.id(),
            Self::Unknown(name) => name,
        }
    }

    #[must_use]
    pub const fn section(&self) -> Option<Section> {
        match self {
            Self::Known(section) => Some(*section),
            Self::Unknown(_) => None,
        }
    }
}

/// Resolve `location.hash` to a section. Absent, empty, or bare `#` mean home.
#[must_use]
pub fn resolve_section(hash: Option<&str>) -> ActiveSection {
    let name = hash.unwrap_or_default();
    let name = name.strip_prefix('#').unwrap_or(name);
    if name.is_empty() {
        return ActiveSection::Known(Section::Home);
    }
    Section::from_id(name).map_or_else(
        || {
            tracing::debug!(hash = name, "hash names no section");
            ActiveSection::Unknown(name.to_string())
        },
        ActiveSection::Known,
    )
}

/// Whether a menu entry linking to `href` is highlighted for `active`.
///
/// Home also matches links that still name the standalone home page.
#[must_use]
pub fn is_active_menu_href(href: &str, active: &ActiveSection) -> bool {
    let name = active.name();
    if href.strip_prefix('#') == Some(name) {
        return true;
    }
    active.section() == Some(Section::Home) && href.contains(Section::Home.page_file())
}

/// Visibility of every page section after routing.
#[must_use]
pub fn visible_sections(active: &ActiveSection) -> Vec<(Section, bool)> {
    Section::ALL
        .into_iter()
        .map(|section| (section, active.section() == Some(section)))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("#"))]
    #[case(Some("#home"))]
    fn defaults_to_home(#[case] hash: Option<&str>) {
        assert_eq!(resolve_section(hash), ActiveSection::Known(Section::Home));
    }

    #[test]
    fn known_hash_selects_section() {
        assert_eq!(
            resolve_section(Some("#calendar")),
            ActiveSection::Known(Section::Calendar)
        );
    }

    #[test]
    fn unknown_hash_hides_everything() {
        let active = resolve_section(Some("#grades"));
        assert_eq!(active, ActiveSection::Unknown("grades".to_string()));
        assert!(visible_sections(&active).iter().all(|(_, shown)| !shown));
    }

    #[test]
    fn only_routed_section_is_visible() {
        let visible = visible_sections(&resolve_section(Some("#settings")));
        let shown: Vec<_> = visible
            .into_iter()
            .filter_map(|(section, shown)| shown.then_some(section))
            .collect();
        assert_eq!(shown, vec![Section::Settings]);
    }

    #[rstest]
    #[case("#home", "home", true)]
    #[case("studentHome.html", "home", true)]
    #[case("./studentHome.html", "home", true)]
    #[case("studentHome.html", "profile", false)]
    #[case("#profile", "profile", true)]
    #[case("#profile", "settings", false)]
    #[case("#grades", "grades", true)]
    fn menu_highlighting(#[case] href: &str, #[case] hash: &str, #[case] active: bool) {
        let section = resolve_section(Some(hash));
        assert_eq!(is_active_menu_href(href, &section), active);
    }
}
