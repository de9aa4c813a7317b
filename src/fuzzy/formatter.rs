use chrono::{DateTime, Datelike, FixedOffset, Local, ParseError, TimeDelta, TimeZone, Utc};
use tracing::debug;

use super::calendar::render_calendar;
use super::error::FormatError;
use super::notation::Notation;
use super::vocabulary::Term;

pub const SECONDS_PER_MINUTE: i64 = 60;
pub const SECONDS_PER_HOUR: i64 = 3_600;
pub const SECONDS_PER_DAY: i64 = 86_400;
pub const SECONDS_PER_WEEK: i64 = 604_800;
pub const SECONDS_PER_MONTH: i64 = 2_629_800;

// Uppercase `T` separator and a numeric offset; a trailing `Z` is mapped to
// `+00:00` before parsing.
const ISO_INSTANT: &str = "%Y-%m-%dT%H:%M:%S%.f%:z";

/// Elapsed-time range selecting the rendering rule. Counted buckets carry the
/// number of whole units elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Now,
    Minutes(i64),
    Hours(i64),
    Days(i64),
    Weeks(i64),
    Calendar,
}

impl Bucket {
    /// Bucket for a number of elapsed seconds. Ranges are lower-inclusive, and
    /// negative values (instants in the future) fall into `Now`.
    pub fn classify(elapsed_secs: i64) -> Bucket {
        if elapsed_secs < SECONDS_PER_MINUTE {
            Bucket::Now
        } else if elapsed_secs < SECONDS_PER_HOUR {
            Bucket::Minutes(elapsed_secs / SECONDS_PER_MINUTE)
        } else if elapsed_secs < SECONDS_PER_DAY {
            Bucket::Hours(elapsed_secs / SECONDS_PER_HOUR)
        } else if elapsed_secs < SECONDS_PER_WEEK {
            Bucket::Days(elapsed_secs / SECONDS_PER_DAY)
        } else if elapsed_secs < SECONDS_PER_MONTH {
            Bucket::Weeks(elapsed_secs / SECONDS_PER_WEEK)
        } else {
            Bucket::Calendar
        }
    }
}

/// Format an instant given as milliseconds since the Unix epoch.
pub fn from_timestamp(epoch_millis: i64, notation: Notation) -> String {
    render(epoch_millis, &Local::now(), notation)
}

/// Format an ISO-8601 instant such as `2023-05-01T12:00:00Z` or
/// `2023-05-01T14:00:00.250+02:00`.
pub fn from_date_string(text: &str, notation: Notation) -> Result<String, FormatError> {
    let instant = parse_instant(text).map_err(|source| FormatError::Parse {
        input: text.to_string(),
        source,
    })?;
    Ok(from_timestamp(instant.timestamp_millis(), notation))
}

fn parse_instant(text: &str) -> Result<DateTime<FixedOffset>, ParseError> {
    match text.strip_suffix('Z') {
        Some(utc) => DateTime::parse_from_str(&format!("{utc}+00:00"), ISO_INSTANT),
        None => DateTime::parse_from_str(text, ISO_INSTANT),
    }
}

/// Format text holding either epoch milliseconds or an ISO-8601 instant.
pub fn from_text(text: &str, notation: Notation) -> Result<String, FormatError> {
    match text.parse::<i64>() {
        Ok(millis) => Ok(from_timestamp(millis, notation)),
        Err(_) => from_date_string(text, notation),
    }
}

/// Render `target_millis` relative to `now`. Calendar dates and the current
/// year are taken in `now`'s time zone.
pub fn render<Tz: TimeZone>(target_millis: i64, now: &DateTime<Tz>, notation: Notation) -> String {
    let elapsed = elapsed_seconds(now.timestamp_millis(), target_millis);
    let bucket = Bucket::classify(elapsed);
    debug!(elapsed_secs = elapsed, bucket = ?bucket, %notation, "Rendering elapsed time");

    match bucket {
        Bucket::Now => Term::Now.text(notation).to_string(),
        Bucket::Minutes(n) => counted(n, Term::Minute, Term::Minutes, notation),
        Bucket::Hours(n) => counted(n, Term::Hour, Term::Hours, notation),
        Bucket::Days(1) if notation == Notation::Long => Term::Day.text(notation).to_string(),
        Bucket::Days(n) => counted(n, Term::Day, Term::Days, notation),
        Bucket::Weeks(n) => counted(n, Term::Week, Term::Weeks, notation),
        Bucket::Calendar => {
            let target = instant_from_millis(target_millis).with_timezone(&now.timezone());
            render_calendar(&target, now.year(), notation)
        }
    }
}

fn counted(magnitude: i64, one: Term, many: Term, notation: Notation) -> String {
    let term = if magnitude == 1 { one } else { many };
    format!("{magnitude}{}", term.text(notation))
}

/// Whole seconds from `target_millis` to `now_millis`, rounded toward
/// negative infinity.
fn elapsed_seconds(now_millis: i64, target_millis: i64) -> i64 {
    let delta = i128::from(now_millis) - i128::from(target_millis);
    // |delta| < 2^64, so the quotient always fits in an i64.
    delta.div_euclid(1_000) as i64
}

/// Instants before chrono's supported range are pinned just inside it.
fn instant_from_millis(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis)
        .unwrap_or_else(|| DateTime::<Utc>::MIN_UTC + TimeDelta::days(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_seconds_floors() {
        assert_eq!(elapsed_seconds(1_999, 1_000), 0);
        assert_eq!(elapsed_seconds(2_000, 1_000), 1);
        assert_eq!(elapsed_seconds(1_000, 1_001), -1);
        assert_eq!(elapsed_seconds(i64::MAX, i64::MIN), (u64::MAX / 1_000) as i64);
    }

    #[test]
    fn parse_instant_accepts_zulu_and_offsets() {
        let zulu = parse_instant("2023-05-01T12:00:00Z").unwrap();
        let offset = parse_instant("2023-05-01T14:00:00.250+02:00").unwrap();
        assert_eq!(offset.timestamp_millis() - zulu.timestamp_millis(), 250);
        assert!(parse_instant("2023-05-01T12:00:00.123456789Z").is_ok());
    }

    #[test]
    fn parse_instant_is_strict() {
        assert!(parse_instant("2023-05-01 12:00:00Z").is_err());
        assert!(parse_instant("2023-05-01t12:00:00Z").is_err());
        assert!(parse_instant("2023-05-01T12:00:00z").is_err());
        assert!(parse_instant("2023-05-01T12:00:00").is_err());
        assert!(parse_instant("2023-05-01T12:00:00ZZ").is_err());
    }

    #[test]
    fn week_threshold_is_seven_days() {
        assert_eq!(SECONDS_PER_WEEK, 7 * SECONDS_PER_DAY);
    }

    #[test]
    fn out_of_range_millis_are_pinned() {
        let t = instant_from_millis(i64::MIN);
        assert!(t > DateTime::<Utc>::MIN_UTC);
    }
}
