use chrono::{DateTime, Datelike, TimeZone};

use super::notation::Notation;
use super::vocabulary::month_name;

/// Render an absolute day and month, adding the year when `target` falls in
/// an earlier calendar year than `current_year`.
pub fn render_calendar<Tz: TimeZone>(
    target: &DateTime<Tz>,
    current_year: i32,
    notation: Notation,
) -> String {
    let month = month_name(target.month(), notation);
    if target.year() < current_year {
        format!("{} {}, {}", target.day(), month, target.year())
    } else {
        format!("{} {}", target.day(), month)
    }
}
