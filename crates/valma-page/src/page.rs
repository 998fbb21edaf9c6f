//! Page initialization for the routed section plus the shared widgets:
//! search, quick menu, and notifications.

use std::fmt::Write as _;

use serde::Serialize;
use valma_core::Section;

use crate::attendance::{AttendanceRecord, StatusCounts, sample_records};
use crate::calendar::{CalendarCell, CalendarRecord, calendar_grid, calendar_records};
use crate::router::{ActiveSection, is_active_menu_href, resolve_section};
use crate::streak::{PLACEHOLDER_STREAK, StreakBadge};

/// Where the confirmed logout link sends the user.
pub const LOGOUT_TARGET: &str = "../../index.html";
pub const LOGOUT_PROMPT: &str = "Are you sure you want to log out?";

/// Content prepared by the home initializer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeContent {
    pub records: Vec<AttendanceRecord>,
    pub counts: StatusCounts,
}

/// Content prepared by the calendar initializer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarContent {
    pub grid: Vec<Vec<CalendarCell>>,
    pub records: Vec<CalendarRecord>,
}

/// Handlers attached by the settings initializer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsWiring {
    /// `#accountToggle` toggles `#accountDropdown`.
    pub account_dropdown: bool,
    pub logout_prompt: &'static str,
    pub logout_target: &'static str,
}

impl Default for SettingsWiring {
    fn default() -> Self {
        Self {
            account_dropdown: true,
            logout_prompt: LOGOUT_PROMPT,
            logout_target: LOGOUT_TARGET,
        }
    }
}

/// Everything `initializePage` does for one hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageInit {
    pub active: ActiveSection,
    /// Menu hrefs that get the `active` class.
    pub active_menu: Vec<String>,
    pub home: Option<HomeContent>,
    pub calendar: Option<CalendarContent>,
    pub settings: Option<SettingsWiring>,
    pub search: bool,
    pub streak: StreakBadge,
}

/// Run the page initializer for `hash` against the sidebar's menu hrefs.
///
/// Unknown hashes highlight nothing but a matching `#name` link and run
/// only the shared initializers.
#[must_use]
pub fn initialize_page<S: AsRef<str>>(hash: Option<&str>, menu_hrefs: &[S]) -> PageInit {
    let active = resolve_section(hash);
    let active_menu = menu_hrefs
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|href| is_active_menu_href(href, &active))
        .map(str::to_string)
        .collect();

    let mut init = PageInit {
        active: active.clone(),
        active_menu,
        home: None,
        calendar: None,
        settings: None,
        search: true,
        streak: StreakBadge::new(PLACEHOLDER_STREAK),
    };
    match active.section() {
        Some(Section::Home) => {
            init.home = Some(HomeContent {
                records: sample_records(),
                counts: StatusCounts::PLACEHOLDER,
            });
        }
        Some(Section::Calendar) => {
            init.calendar = Some(CalendarContent {
                grid: calendar_grid(),
                records: calendar_records(),
            });
        }
        Some(Section::Settings) => init.settings = Some(SettingsWiring::default()),
        Some(Section::Profile) | None => {}
    }
    tracing::debug!(section = active.name(), "page initialized");
    init
}

/// Handle a search submission. Blank queries are ignored.
#[must_use]
pub fn perform_search(query: &str) -> Option<&str> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    tracing::info!(query, "searching");
    Some(query)
}

pub const QUICK_MENU_PROMPT: &str =
    "Quick Menu:\n1. Profile\n2. Settings\n3. Help\n4. About\n\nEnter number:";
pub const HELP_TEXT: &str = "Help: Contact admin@valmatrack.com for support";
pub const ABOUT_TEXT: &str = "VALMAtrack v1.0\nRFID Attendance System\n© 2025";

/// Result of a quick-menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum QuickMenuAction {
    Navigate(Section),
    Alert(&'static str),
    Nothing,
}

#[must_use]
pub fn quick_menu(choice: Option<&str>) -> QuickMenuAction {
    match choice.map(str::trim) {
        Some("1") => QuickMenuAction::Navigate(Section::Profile),
        Some("2") => QuickMenuAction::Navigate(Section::Settings),
        Some("3") => QuickMenuAction::Alert(HELP_TEXT),
        Some("4") => QuickMenuAction::Alert(ABOUT_TEXT),
        _ => QuickMenuAction::Nothing,
    }
}

pub const NOTIFICATIONS: [&str; 3] = [
    "Attendance marked: On time",
    "Weekly report available",
    "System update",
];

/// Alert text for the notification button.
#[must_use]
pub fn notification_alert() -> String {
    let mut text = format!("You have {} new notifications!\n", NOTIFICATIONS.len());
    for (index, message) in NOTIFICATIONS.iter().enumerate() {
        let _ = write!(text, "\n{}. {message}", index + 1);
    }
    text
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::streak::StreakTier;

    const MENU: [&str; 5] = ["#home", "#profile", "#calendar", "#settings", "../../index.html"];

    #[test]
    fn home_runs_attendance_initializer() {
        let init = initialize_page(None, &MENU);
        assert_eq!(init.active_menu, vec!["#home"]);
        let home = init.home.unwrap();
        assert_eq!(home.records.len(), 5);
        assert_eq!(home.counts, StatusCounts::PLACEHOLDER);
        assert!(init.calendar.is_none());
        assert!(init.settings.is_none());
    }

    #[test]
    fn calendar_runs_grid_initializer() {
        let init = initialize_page(Some("#calendar"), &MENU);
        assert_eq!(init.active_menu, vec!["#calendar"]);
        assert!(init.calendar.is_some());
        assert!(init.home.is_none());
    }

    #[test]
    fn settings_wires_logout() {
        let settings = initialize_page(Some("#settings"), &MENU).settings.unwrap();
        assert_eq!(settings.logout_target, "../../index.html");
        assert!(settings.account_dropdown);
    }

    #[rstest]
    #[case(Some("#profile"))]
    #[case(Some("#grades"))]
    fn shared_initializers_always_run(#[case] hash: Option<&str>) {
        let init = initialize_page(hash, &MENU);
        assert!(init.home.is_none() && init.calendar.is_none() && init.settings.is_none());
        assert!(init.search);
        assert_eq!(init.streak.days, 9);
        assert_eq!(init.streak.tier, StreakTier::Yellow);
    }

    #[test]
    fn home_matches_legacy_page_link() {
        let init = initialize_page(Some("#home"), &["studentHome.html", "#calendar"]);
        assert_eq!(init.active_menu, vec!["studentHome.html"]);
    }

    #[rstest]
    #[case("  attendance ", Some("attendance"))]
    #[case("   ", None)]
    #[case("", None)]
    fn search_ignores_blank(#[case] query: &str, #[case] expected: Option<&str>) {
        assert_eq!(perform_search(query), expected);
    }

    #[rstest]
    #[case(Some("1"), QuickMenuAction::Navigate(Section::Profile))]
    #[case(Some("2"), QuickMenuAction::Navigate(Section::Settings))]
    #[case(Some("3"), QuickMenuAction::Alert(HELP_TEXT))]
    #[case(Some("4"), QuickMenuAction::Alert(ABOUT_TEXT))]
    #[case(Some("5"), QuickMenuAction::Nothing)]
    #[case(None, QuickMenuAction::Nothing)]
    fn quick_menu_choices(#[case] choice: Option<&str>, #[case] action: QuickMenuAction) {
        assert_eq!(quick_menu(choice), action);
    }

    #[test]
    fn notification_alert_lists_three() {
        assert_eq!(
            notification_alert(),
            "You have 3 new notifications!\n\n1. Attendance marked: On time\n2. Weekly report available\n3. System update"
        );
    }
}
