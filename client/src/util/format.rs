//! Display formatting for event cards and detail views (German locale).
//!
//! Backend timestamps arrive as ISO-8601 strings, sometimes with an offset,
//! sometimes naive, sometimes with a space instead of `T`. Anything that
//! cannot be parsed renders as a placeholder rather than failing the view.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, Month, OffsetDateTime, PrimitiveDateTime, Time, Weekday};

/// Placeholder for unknown locations and dates.
pub const TBA: &str = "TBA";

/// Parse a backend timestamp, keeping the wall-clock time it was sent with.
pub fn parse_datetime(raw: &str) -> Option<PrimitiveDateTime> {
    let raw = raw.trim().replacen(' ', "T", 1);
    if let Ok(dt) = OffsetDateTime::parse(&raw, &Rfc3339) {
        return Some(PrimitiveDateTime::new(dt.date(), dt.time()));
    }
    if let Some(head) = raw.get(..19) {
        if let Ok(dt) = PrimitiveDateTime::parse(head, format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]")) {
            return Some(dt);
        }
    }
    if let Some(head) = raw.get(..16) {
        if let Ok(dt) = PrimitiveDateTime::parse(head, format_description!("[year]-[month]-[day]T[hour]:[minute]")) {
            return Some(dt);
        }
    }
    let head = raw.get(..10)?;
    let date = Date::parse(head, format_description!("[year]-[month]-[day]")).ok()?;
    Some(PrimitiveDateTime::new(date, Time::MIDNIGHT))
}

fn month_short(month: Month) -> &'static str {
    match month {
        Month::January => "Jan.",
        Month::February => "Feb.",
        Month::March => "März",
        Month::April => "Apr.",
        Month::May => "Mai",
        Month::June => "Juni",
        Month::July => "Juli",
        Month::August => "Aug.",
        Month::September => "Sept.",
        Month::October => "Okt.",
        Month::November => "Nov.",
        Month::December => "Dez.",
    }
}

fn month_long(month: Month) -> &'static str {
    match month {
        Month::January => "Januar",
        Month::February => "Februar",
        Month::March => "März",
        Month::April => "April",
        Month::May => "Mai",
        Month::June => "Juni",
        Month::July => "Juli",
        Month::August => "August",
        Month::September => "September",
        Month::October => "Oktober",
        Month::November => "November",
        Month::December => "Dezember",
    }
}

fn weekday_long(day: Weekday) -> &'static str {
    match day {
        Weekday::Monday => "Montag",
        Weekday::Tuesday => "Dienstag",
        Weekday::Wednesday => "Mittwoch",
        Weekday::Thursday => "Donnerstag",
        Weekday::Friday => "Freitag",
        Weekday::Saturday => "Samstag",
        Weekday::Sunday => "Sonntag",
    }
}

fn clock(dt: PrimitiveDateTime) -> String {
    format!("{:02}:{:02}", dt.hour(), dt.minute())
}

/// Day and short month for the card date badge, e.g. `("01", "Aug.")`.
pub fn date_badge(raw: Option<&str>) -> (String, String) {
    match raw.and_then(parse_datetime) {
        Some(dt) => (format!("{:02}", dt.day()), month_short(dt.month()).to_owned()),
        None => ("--".to_owned(), TBA.to_owned()),
    }
}

/// Long date, e.g. `Freitag, 1. August 2025`.
pub fn long_date(raw: Option<&str>) -> String {
    match raw.and_then(parse_datetime) {
        Some(dt) => format!(
            "{}, {}. {} {}",
            weekday_long(dt.weekday()),
            dt.day(),
            month_long(dt.month()),
            dt.year()
        ),
        None => "Datum TBA".to_owned(),
    }
}

/// Date plus clock time, e.g. `1. Aug. 2025, 22:00`.
pub fn date_time(raw: &str) -> String {
    match parse_datetime(raw) {
        Some(dt) => format!("{}. {} {}, {}", dt.day(), month_short(dt.month()), dt.year(), clock(dt)),
        None => TBA.to_owned(),
    }
}

/// `22:00 - 06:00` with an end time, `ab 22:00` without one.
pub fn time_range(start: Option<&str>, end: Option<&str>) -> String {
    let Some(start) = start.and_then(parse_datetime) else {
        return TBA.to_owned();
    };
    match end.and_then(parse_datetime) {
        Some(end) => format!("{} - {}", clock(start), clock(end)),
        None => format!("ab {}", clock(start)),
    }
}

/// `Kostenlos` for free events, `€12.50` otherwise; `None` when unknown.
pub fn price(value: Option<f64>) -> Option<String> {
    let value = value?;
    if value <= 0.0 { Some("Kostenlos".to_owned()) } else { Some(format!("€{value:.2}")) }
}

/// Human-readable genre name; unknown genres pass through unchanged.
pub fn genre_display_name(genre: &str) -> String {
    match genre {
        "goa" => "Goa Trance",
        "psytrance" => "Psytrance",
        "dnb" => "Drum & Bass",
        "hardcore" => "Hardcore",
        "techno" => "Techno",
        "house" => "House",
        "trance" => "Trance",
        "breakbeat" => "Breakbeat",
        other => other,
    }
    .to_owned()
}

/// Genres offered in the list filter, as `(value, label)`.
pub const GENRES: [(&str, &str); 8] = [
    ("goa", "Goa Trance"),
    ("psytrance", "Psytrance"),
    ("dnb", "Drum & Bass"),
    ("hardcore", "Hardcore"),
    ("techno", "Techno"),
    ("house", "House"),
    ("trance", "Trance"),
    ("breakbeat", "Breakbeat"),
];

/// `location, city` with whichever parts are known.
pub fn place(location: Option<&str>, city: Option<&str>) -> String {
    match (location.filter(|s| !s.is_empty()), city.filter(|s| !s.is_empty())) {
        (Some(l), Some(c)) => format!("{l}, {c}"),
        (Some(l), None) => l.to_owned(),
        (None, Some(c)) => c.to_owned(),
        (None, None) => TBA.to_owned(),
    }
}
