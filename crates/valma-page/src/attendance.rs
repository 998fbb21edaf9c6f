//! Home page attendance list, status counts, and lateness.

use std::fmt::Write as _;

use chrono::{NaiveTime, Timelike};
use serde::Serialize;

use crate::error::PageError;

const CLOCK_ICON: &str = "../../assets/c.jpg";

/// One weekday of the attendance list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceRecord {
    pub day: u32,
    pub weekday: &'static str,
    pub time_in: &'static str,
    pub time_out: &'static str,
    pub total_hours: &'static str,
}

/// Records shown until a backend supplies real data.
#[must_use]
pub fn sample_records() -> Vec<AttendanceRecord> {
    [
        (1, "Mon", "6:19 AM", "3:15 PM", "8h 56m"),
        (2, "Tue", "6:53 AM", "4:15 PM", "9h 22m"),
        (3, "Wed", "6:49 AM", "4:15 PM", "9h 26m"),
        (4, "Thu", "6:52 AM", "4:00 PM", "9h 08m"),
        (5, "Fri", "6:49 AM", "4:00 PM", "9h 11m"),
    ]
    .into_iter()
    .map(
        |(day, weekday, time_in, time_out, total_hours)| AttendanceRecord {
            day,
            weekday,
            time_in,
            time_out,
            total_hours,
        },
    )
    .collect()
}

fn time_block(value: &str, label: &str) -> String {
    format!(
        "<div class=\"time-block\">\
         <img src=\"{CLOCK_ICON}\" alt=\"Clock\" class=\"time-icon\">\
         <div class=\"time-value\">{value}</div>\
         <div class=\"time-label\">{label}</div>\
         </div>"
    )
}

/// Render one `attendance-item`. Items fade in 0.1s apart.
#[must_use]
pub fn render_record(record: &AttendanceRecord, index: usize) -> String {
    let delay = format_delay(index, 0.1);
    format!(
        "<div class=\"attendance-item\" style=\"animation: fadeInUp 0.5s ease {delay}s both\">\
         <div class=\"attendance-date\">\
         <div class=\"date-number\">{day:02}</div>\
         <div class=\"date-day\">{weekday}</div>\
         </div>\
         {time_in}<div class=\"divider\"></div>{time_out}<div class=\"divider\"></div>{total}\
         </div>",
        day = record.day,
        weekday = record.weekday,
        time_in = time_block(record.time_in, "Time-in"),
        time_out = time_block(record.time_out, "Time-out"),
        total = time_block(record.total_hours, "Total Hours"),
    )
}

/// Render the whole list, one item per line.
#[must_use]
pub fn render_records(records: &[AttendanceRecord]) -> String {
    records
        .iter()
        .enumerate()
        .fold(String::new(), |mut out, (index, record)| {
            let _ = writeln!(out, "{}", render_record(record, index));
            out
        })
}

/// `index * step` seconds, without float noise (`0.30000000000000004`).
pub(crate) fn format_delay(index: usize, step: f64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let seconds = index as f64 * step;
    let text = format!("{seconds:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text.is_empty() { "0".to_string() } else { text.to_string() }
}

/// Counters on the home status cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub on_time: u32,
    pub late: u32,
    pub absent: u32,
    pub excused: u32,
}

impl StatusCounts {
    /// Values shown until a backend supplies real data.
    pub const PLACEHOLDER: Self = Self {
        on_time: 9,
        late: 0,
        absent: 0,
        excused: 0,
    };
}

/// Latest on-time arrival, in seconds after midnight (07:00:00).
const CUTOFF_SECONDS: u32 = 7 * 60 * 60;

const FORMATS: [&str; 4] = ["%H:%M:%S", "%H:%M", "%I:%M:%S %p", "%I:%M %p"];

/// Parse a clock time as written on attendance records.
///
/// # Errors
/// Returns [`PageError::InvalidTime`] for anything but `HH:MM[:SS]` or
/// `h:MM[:SS] AM/PM`.
pub fn parse_time(text: &str) -> Result<NaiveTime, PageError> {
    let text = text.trim();
    FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(text, format).ok())
        .ok_or_else(|| PageError::InvalidTime(text.to_string()))
}

/// Whether a time-in is late: strictly after 07:00:00.
///
/// # Errors
/// See [`parse_time`].
pub fn is_late(text: &str) -> Result<bool, PageError> {
    Ok(parse_time(text)?.num_seconds_from_midnight() > CUTOFF_SECONDS)
}
