//! Date parsing and locale-aware formatting for post timestamps.
//!
//! Post dates are stored as strings (`publishedAt` in front matter), either
//! calendar-only (`2025-08-22`) or full ISO-8601 timestamps. Calendar-only
//! input is anchored to midnight UTC so the day never shifts when the date
//! is later rendered in a non-UTC timezone.
//!
//! [`format_date`] renders the absolute date in the long form of the
//! resolved locale and can append a coarse relative label:
//!
//! ```text
//! August 22, 2025 (7d ago)
//! 22 août 2025
//! January 1, 2024 (Today)
//! ```

pub mod locale;

pub use locale::Locale;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{FolioError, Result};

/// Options for [`format_date`].
///
/// `FormatOptions::default()` gives the plain call: UTC projection, the
/// actual current instant as "now", and English rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// IANA timezone the date is projected into for display. The underlying
    /// instant is never altered, only its wall-clock representation. `None`
    /// means UTC.
    pub time_zone: Option<Tz>,
    /// Reference instant for relative labels. Defaults to the current
    /// instant; fix it to make relative output deterministic in tests.
    pub now: Option<DateTime<Utc>>,
    /// Display locale. `None` renders with the English default.
    pub locale: Option<&'static Locale>,
}

/// Parse a date string into an absolute instant.
///
/// Accepted forms:
/// - `YYYY-MM-DD`, anchored to midnight UTC of that day
/// - RFC 3339 timestamps (`2025-08-22T15:30:00Z`, `2025-08-22T15:30:00+02:00`)
/// - zone-less timestamps (`2025-08-22T15:30:00`), taken as UTC
///
/// Anything else is an [`FolioError::InvalidDate`]. There is no best-effort
/// fallback: a date that fails to parse is reported, not silently rendered
/// from a garbage instant.
pub fn parse_instant(input: &str) -> Result<DateTime<Utc>> {
    let trimmed = input.trim();
    if trimmed.contains('T') {
        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(dt.with_timezone(&Utc));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    } else if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)));
    }
    Err(FolioError::InvalidDate {
        input: input.to_string(),
    })
}

/// Format a post date for display.
///
/// The absolute part follows the locale's month names and field ordering.
/// When `include_relative` is set, a suffix in parentheses compares the
/// target against `options.now` using calendar fields in the active zone:
/// `{n}y ago`, `{n}mo ago`, `{n}d ago`, or `Today`, first match wins.
///
/// # Errors
///
/// Returns [`FolioError::InvalidDate`] when the input fails [`parse_instant`].
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use folio_core::date::{FormatOptions, Locale, format_date};
///
/// let options = FormatOptions {
///     locale: Locale::resolve("fr"),
///     ..Default::default()
/// };
/// assert_eq!(format_date("2025-08-22", false, &options).unwrap(), "22 août 2025");
///
/// let options = FormatOptions {
///     now: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
///     ..Default::default()
/// };
/// assert_eq!(
///     format_date("2024-01-01", true, &options).unwrap(),
///     "January 1, 2024 (Today)"
/// );
/// ```
pub fn format_date(input: &str, include_relative: bool, options: &FormatOptions) -> Result<String> {
    let instant = parse_instant(input)?;
    let target = zoned_date(instant, options.time_zone);

    let locale = options.locale.unwrap_or(&locale::EN_US);
    let full = locale.format_long(target);

    if !include_relative {
        return Ok(full);
    }

    let now = options.now.unwrap_or_else(Utc::now);
    let today = zoned_date(now, options.time_zone);

    Ok(format!("{} ({})", full, relative_label(target, today)))
}

/// Wall-clock calendar date of `instant` in the active zone.
fn zoned_date(instant: DateTime<Utc>, time_zone: Option<Tz>) -> NaiveDate {
    match time_zone {
        Some(tz) => instant.with_timezone(&tz).date_naive(),
        None => instant.date_naive(),
    }
}

/// Coarse relative label, first match wins.
///
/// Year and month use calendar-field differences (so December 31 is "1y ago"
/// on January 1); days are midnight-to-midnight in the active zone.
fn relative_label(target: NaiveDate, today: NaiveDate) -> String {
    let years = i64::from(today.year() - target.year());
    let months = years * 12 + i64::from(today.month() as i32 - target.month() as i32);
    let days = (today - target).num_days();

    if years >= 1 {
        format!("{years}y ago")
    } else if months >= 1 {
        format!("{months}mo ago")
    } else if days >= 1 {
        format!("{days}d ago")
    } else {
        "Today".to_string()
    }
}
