//! Date normalization for WHOIS date fields.
//!
//! Registries print dates in whatever format their software was written
//! with. [`normalize`] reconciles them into a UTC `DateTime` by trying a
//! fixed list of templates in order; the first template that consumes the
//! whole fragment wins. Day-first numeric formats are tried before the
//! month-first reading, and formats with a four-digit leading year before
//! both, so `10-05-2018` reads as 10 May 2018 while `04/14/2008`, which
//! has no day-first reading, still resolves to 14 April.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

/// Named zone abbreviations seen in WHOIS output, with their UTC offset in hours.
const ZONES: &[(&str, i32)] = &[
    ("UTC", 0),
    ("GMT", 0),
    ("UT", 0),
    ("WET", 0),
    ("WEST", 1),
    ("BST", 1),
    ("CET", 1),
    ("CEST", 2),
    ("EET", 2),
    ("EEST", 3),
    ("MSK", 3),
    ("HKT", 8),
    ("SGT", 8),
    ("JST", 9),
    ("KST", 9),
    ("AEST", 10),
    ("AEDT", 11),
    ("EST", -5),
    ("EDT", -4),
    ("CST", -6),
    ("CDT", -5),
    ("MST", -7),
    ("MDT", -6),
    ("PST", -8),
    ("PDT", -7),
];

static ZONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let names: Vec<&str> = ZONES.iter().map(|(name, _)| *name).collect();
    Regex::new(&format!(r"\s*\(?\b({})\b\)?", names.join("|"))).expect("Invalid zone regex")
});

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Years outside this range come from misreading a short numeric field.
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1900..=9999;

#[derive(Debug, Clone, Copy)]
enum Template {
    /// RFC 3339 with `Z` or a numeric offset.
    Rfc3339,
    /// RFC 2822 with a numeric offset.
    Rfc2822,
    /// Format carrying its own `%z` offset.
    Offset(&'static str),
    /// Format with a time component, zone supplied separately.
    DateTime(&'static str),
    /// Format with a date only; time is midnight.
    Date(&'static str),
    /// Eight digits, `YYYYMMDD`, optionally followed by `HH:MM:SS`.
    Compact,
}

/// Templates in the order they are tried.
const TEMPLATES: &[Template] = &[
    Template::Rfc3339,
    Template::Offset("%Y-%m-%dT%H:%M:%S%z"),
    Template::Offset("%Y-%m-%d %H:%M:%S %z"),
    Template::DateTime("%Y-%m-%dT%H:%M:%S%.f"),
    Template::DateTime("%Y-%m-%d %H:%M:%S%.fZ"),
    Template::DateTime("%Y-%m-%d %H:%M:%S%.f"),
    Template::Date("%Y-%m-%d"),
    Template::Date("%d-%b-%Y"),
    Template::Date("%d-%B-%Y"),
    Template::DateTime("%d-%b-%Y %H:%M:%S"),
    Template::Date("%d-%m-%Y"),
    Template::Date("%m-%d-%Y"),
    Template::DateTime("%d.%m.%Y %H:%M:%S"),
    Template::Date("%d.%m.%Y"),
    Template::DateTime("%Y.%m.%d %H:%M:%S"),
    Template::Date("%Y.%m.%d"),
    Template::Date("%Y. %m. %d."),
    Template::DateTime("%Y/%m/%d %H:%M:%S"),
    Template::Date("%Y/%m/%d"),
    Template::DateTime("%d/%m/%Y %H:%M:%S%.f"),
    Template::Date("%d/%m/%Y"),
    Template::DateTime("%m/%d/%Y %H:%M:%S"),
    Template::Date("%m/%d/%Y"),
    Template::Compact,
    Template::Rfc2822,
    Template::DateTime("%a, %d %b %Y %H:%M:%S"),
    Template::DateTime("%a %b %d %H:%M:%S %Y"),
    Template::Date("%a %b %d %Y"),
    Template::DateTime("%d %b %Y %H:%M:%S"),
    Template::Date("%d %B %Y"),
    Template::Date("%d %b %Y"),
    Template::Date("%B %d %Y"),
    Template::Date("%B %d, %Y"),
    Template::Date("%b %d %Y"),
];

/// Normalizes a WHOIS date fragment into a UTC date-time.
///
/// A template whose result falls outside the supported year range counts as
/// a miss. Returns `None` when no template matches; callers drop the value.
pub fn normalize(fragment: &str) -> Option<DateTime<Utc>> {
    let (cleaned, offset) = strip_zone(fragment.trim());
    if cleaned.is_empty() {
        return None;
    }

    TEMPLATES.iter().find_map(|template| {
        apply(*template, &cleaned, offset)
            .filter(|dt| YEAR_RANGE.contains(&chrono::Datelike::year(dt)))
    })
}

/// Removes a named zone from the fragment and returns its offset.
fn strip_zone(fragment: &str) -> (String, Option<FixedOffset>) {
    let mut offset = None;
    let stripped = ZONE_PATTERN.replace(fragment, |caps: &regex::Captures<'_>| {
        offset = ZONES
            .iter()
            .find(|(name, _)| *name == &caps[1])
            .and_then(|(_, hours)| FixedOffset::east_opt(hours * 3600));
        " "
    });
    let cleaned = WHITESPACE.replace_all(stripped.trim(), " ").into_owned();
    (cleaned, offset)
}

fn apply(template: Template, text: &str, offset: Option<FixedOffset>) -> Option<DateTime<Utc>> {
    match template {
        Template::Rfc3339 => DateTime::parse_from_rfc3339(text)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        Template::Rfc2822 => DateTime::parse_from_rfc2822(text)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        Template::Offset(fmt) => DateTime::parse_from_str(text, fmt)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        Template::DateTime(fmt) => NaiveDateTime::parse_from_str(text, fmt)
            .ok()
            .and_then(|naive| localize(naive, offset)),
        Template::Date(fmt) => NaiveDate::parse_from_str(text, fmt)
            .ok()
            .and_then(|date| localize(date.and_hms_opt(0, 0, 0)?, offset)),
        Template::Compact => {
            let digits = text.get(..8)?;
            if !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            let date = NaiveDate::from_ymd_opt(
                digits[..4].parse().ok()?,
                digits[4..6].parse().ok()?,
                digits[6..].parse().ok()?,
            )?;
            let rest = text[8..].trim();
            let time = if rest.is_empty() {
                NaiveTime::from_hms_opt(0, 0, 0)?
            } else if text[8..].starts_with(' ') {
                NaiveTime::parse_from_str(rest, "%H:%M:%S").ok()?
            } else {
                return None;
            };
            localize(date.and_time(time), offset)
        }
    }
}

fn localize(naive: NaiveDateTime, offset: Option<FixedOffset>) -> Option<DateTime<Utc>> {
    match offset {
        Some(offset) => offset
            .from_local_datetime(&naive)
            .single()
            .map(|dt| dt.with_timezone(&Utc)),
        None => Some(naive.and_utc()),
    }
}
