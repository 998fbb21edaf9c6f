//! Calendar page: month grid and the per-day record list.

use std::fmt::Write as _;

use serde::Serialize;

use crate::attendance::format_delay;

pub const MONTH_NAME: &str = "December";
pub const DAYS_IN_MONTH: u32 = 31;
pub const GRID_ROWS: usize = 7;
pub const GRID_COLUMNS: usize = 7;

/// Last day with a recorded status.
const LAST_RECORDED_DAY: u32 = 12;
const NO_CLASS_DAYS: [u32; 3] = [6, 7, 8];

/// Placeholder shown for days without a record yet.
pub const UNRECORDED: &str = "———";

/// Recorded status of one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayMark {
    OnTime,
    NoClass,
}

impl DayMark {
    /// Mark for `day`, or `None` when nothing is recorded.
    #[must_use]
    pub fn for_day(day: u32) -> Option<Self> {
        if !(1..=LAST_RECORDED_DAY).contains(&day) {
            None
        } else if NO_CLASS_DAYS.contains(&day) {
            Some(Self::NoClass)
        } else {
            Some(Self::OnTime)
        }
    }

    /// CSS class of the grid cell.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::OnTime => "on-time-box",
            Self::NoClass => "no-box",
        }
    }

    /// Tooltip and record label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::OnTime => "On Time",
            Self::NoClass => "No Class",
        }
    }
}

/// One grid cell. Cells past the end of the month have no day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarCell {
    pub day: Option<u32>,
    pub mark: Option<DayMark>,
}

/// Month grid, row-major, [`GRID_ROWS`] x [`GRID_COLUMNS`].
#[must_use]
pub fn calendar_grid() -> Vec<Vec<CalendarCell>> {
    let mut next_day = 1;
    (0..GRID_ROWS)
        .map(|_| {
            (0..GRID_COLUMNS)
                .map(|_| {
                    if next_day > DAYS_IN_MONTH {
                        return CalendarCell {
                            day: None,
                            mark: None,
                        };
                    }
                    let day = next_day;
                    next_day += 1;
                    CalendarCell {
                        day: Some(day),
                        mark: DayMark::for_day(day),
                    }
                })
                .collect()
        })
        .collect()
}

/// Render the grid as `<tr>` rows for the calendar `<tbody>`.
#[must_use]
pub fn render_grid(grid: &[Vec<CalendarCell>]) -> String {
    let mut out = String::new();
    for row in grid {
        out.push_str("<tr>");
        for cell in row {
            match (cell.day, cell.mark) {
                (Some(day), Some(mark)) => {
                    let _ = write!(
                        out,
                        "<td class=\"{}\" title=\"{}\">{day}</td>",
                        mark.css_class(),
                        mark.label()
                    );
                }
                (Some(day), None) => {
                    let _ = write!(out, "<td>{day}</td>");
                }
                (None, _) => out.push_str("<td></td>"),
            }
        }
        out.push_str("</tr>\n");
    }
    out
}

/// Entry of the record list beside the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarRecord {
    pub date: String,
    pub status: &'static str,
}

#[must_use]
pub fn calendar_records() -> Vec<CalendarRecord> {
    (1..=DAYS_IN_MONTH)
        .map(|day| CalendarRecord {
            date: format!("{MONTH_NAME} {day}:"),
            status: DayMark::for_day(day).map_or(UNRECORDED, DayMark::label),
        })
        .collect()
}

/// Render records as `record-item` fragments, fading in 0.05s apart.
#[must_use]
pub fn render_records(records: &[CalendarRecord]) -> String {
    let mut out = String::new();
    for (index, record) in records.iter().enumerate() {
        let _ = writeln!(
            out,
            "<div class=\"record-item\" style=\"animation: fadeInLeft 0.4s ease {}s both\">\
             <img src=\"../../assets/c.jpg\" alt=\"Clock\" class=\"record-icon\">\
             <div><div class=\"record-date\">{}</div><div class=\"record-time\">{}</div></div>\
             </div>",
            format_delay(index, 0.05),
            record.date,
            record.status
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn grid_is_seven_by_seven() {
        let grid = calendar_grid();
        assert_eq!(grid.len(), GRID_ROWS);
        assert!(grid.iter().all(|row| row.len() == GRID_COLUMNS));

        let days: Vec<u32> = grid.iter().flatten().filter_map(|c| c.day).collect();
        assert_eq!(days, (1..=31).collect::<Vec<_>>());
        assert_eq!(grid.iter().flatten().filter(|c| c.day.is_none()).count(), 18);
    }

    #[rstest]
    #[case(1, Some(DayMark::OnTime))]
    #[case(5, Some(DayMark::OnTime))]
    #[case(6, Some(DayMark::NoClass))]
    #[case(8, Some(DayMark::NoClass))]
    #[case(9, Some(DayMark::OnTime))]
    #[case(12, Some(DayMark::OnTime))]
    #[case(13, None)]
    #[case(31, None)]
    fn day_marks(#[case] day: u32, #[case] mark: Option<DayMark>) {
        assert_eq!(DayMark::for_day(day), mark);
        let cell = calendar_grid()
            .into_iter()
            .flatten()
            .find(|c| c.day == Some(day))
            .unwrap();
        assert_eq!(cell.mark, mark);
    }

    #[test]
    fn rendered_grid_marks_cells() {
        let html = render_grid(&calendar_grid());
        assert_eq!(html.lines().count(), 7);
        assert!(html.contains("<td class=\"no-box\" title=\"No Class\">7</td>"));
        assert!(html.contains("<td class=\"on-time-box\" title=\"On Time\">12</td>"));
        assert!(html.contains("<td>13</td>"));
        assert!(html.lines().last().unwrap().ends_with("<td></td></tr>"));
    }

    #[test]
    fn records_cover_the_month() {
        let records = calendar_records();
        assert_eq!(records.len(), 31);
        assert_eq!(records[0].date, "December 1:");
        assert_eq!(records[6].status, "No Class");
        assert_eq!(records[11].status, "On Time");
        assert_eq!(records[12].status, UNRECORDED);
        assert_eq!(records[30].date, "December 31:");
    }

    #[test]
    fn rendered_records_are_staggered() {
        let html = render_records(&calendar_records());
        assert_eq!(html.lines().count(), 31);
        assert!(html.lines().nth(2).unwrap().contains("ease 0.1s both"));
        assert!(html.contains("<div class=\"record-date\">December 7:</div><div class=\"record-time\">No Class</div>"));
    }
}
