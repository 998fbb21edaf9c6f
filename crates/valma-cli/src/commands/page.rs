use serde::Serialize;
use valma_core::Section;
use valma_page::{PageInit, StreakBadge, StreakTier, attendance, calendar, initialize_page};

use crate::cli::subcommands::PageCommands;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

/// Handle `valma page`.
pub fn handle(action: &PageCommands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        PageCommands::Route { hash } => output(&route_view(hash.as_deref()), flags.format),
        PageCommands::Streak { days } => output(&StreakBadge::new(*days), flags.format),
        PageCommands::Render { hash } => {
            let fragments = render_fragments(&initialize_page(hash.as_deref(), &menu_hrefs()));
            match flags.format {
                OutputFormat::Json => output(&fragments, flags.format),
                OutputFormat::Table | OutputFormat::Raw => {
                    for fragment in &fragments {
                        println!("<!-- {} -->\n{}", fragment.target, fragment.html.trim_end());
                    }
                    Ok(())
                }
            }
        }
    }
}

/// The sidebar links of a merged page.
fn menu_hrefs() -> Vec<String> {
    Section::ALL.into_iter().map(Section::hash).collect()
}

#[derive(Debug, Serialize)]
struct RouteView {
    section: String,
    known: bool,
    visible: Vec<Section>,
    active_menu: Vec<String>,
    initializers: Vec<&'static str>,
    streak_days: u32,
    streak_tier: StreakTier,
}

fn route_view(hash: Option<&str>) -> RouteView {
    let init = initialize_page(hash, &menu_hrefs());
    let mut initializers = Vec::new();
    if init.home.is_some() {
        initializers.push("attendance");
    }
    if init.calendar.is_some() {
        initializers.push("calendar");
    }
    if init.settings.is_some() {
        initializers.push("settings");
    }
    if init.search {
        initializers.push("search");
    }
    initializers.push("streak");

    RouteView {
        section: init.active.name().to_string(),
        known: init.active.section().is_some(),
        visible: init.active.section().into_iter().collect(),
        active_menu: init.active_menu,
        initializers,
        streak_days: init.streak.days,
        streak_tier: init.streak.tier,
    }
}

/// Markup written into one element of the page.
#[derive(Debug, Serialize)]
struct Fragment {
    target: &'static str,
    html: String,
}

fn render_fragments(init: &PageInit) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    if let Some(home) = &init.home {
        fragments.push(Fragment {
            target: "#attendanceRecords",
            html: attendance::render_records(&home.records),
        });
        for (target, count) in [
            ("#onTimeCount", home.counts.on_time),
            ("#lateCount", home.counts.late),
            ("#absentCount", home.counts.absent),
            ("#excusedCount", home.counts.excused),
        ] {
            fragments.push(Fragment {
                target,
                html: count.to_string(),
            });
        }
    }
    if let Some(content) = &init.calendar {
        fragments.push(Fragment {
            target: "#calendarBody",
            html: calendar::render_grid(&content.grid),
        });
        fragments.push(Fragment {
            target: "#recordsList",
            html: calendar::render_records(&content.records),
        });
    }
    fragments.push(Fragment {
        target: "#streakNumber",
        html: init.streak.days.to_string(),
    });
    fragments
}
