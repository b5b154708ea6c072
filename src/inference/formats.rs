//! Date/time detection for text values

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Recognised date/time shape of a text value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateTimeFormat {
    /// ISO 8601 date-time, `T` or space separated, optional offset
    DateTime,
    /// ISO 8601 date (YYYY-MM-DD)
    Date,
    /// YYYY/MM/DD
    SlashDate,
    /// MM/DD/YYYY
    UsDate,
    /// DD.MM.YYYY
    DottedDate,
    /// Basic ISO 8601 (YYYYMMDDTHHMMSS)
    CompactDateTime,
    /// RFC 2822 (e.g. `Tue, 1 Jul 2003 10:52:37 +0200`)
    Rfc2822,
    /// Clock time (HH:MM[:SS])
    Time,
    /// MM/DD/YYYY followed by a clock time
    UsDateTime,
    /// Month name first (e.g. `Jan 15, 2024`)
    MonthNameDate,
    /// Day first, then month name (e.g. `15 Jan 2024`)
    DayMonthNameDate,
    /// Month name and year (e.g. `January 2024`), first of the month
    MonthYear,
    /// YYYY-MM, first of the month
    YearMonth,
}

impl std::fmt::Display for DateTimeFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateTimeFormat::DateTime => write!(f, "date-time"),
            DateTimeFormat::Date => write!(f, "date"),
            DateTimeFormat::SlashDate => write!(f, "slash-date"),
            DateTimeFormat::UsDate => write!(f, "us-date"),
            DateTimeFormat::DottedDate => write!(f, "dotted-date"),
            DateTimeFormat::CompactDateTime => write!(f, "compact-date-time"),
            DateTimeFormat::Rfc2822 => write!(f, "rfc2822"),
            DateTimeFormat::Time => write!(f, "time"),
            DateTimeFormat::UsDateTime => write!(f, "us-date-time"),
            DateTimeFormat::MonthNameDate => write!(f, "month-name-date"),
            DateTimeFormat::DayMonthNameDate => write!(f, "day-month-name-date"),
            DateTimeFormat::MonthYear => write!(f, "month-year"),
            DateTimeFormat::YearMonth => write!(f, "year-month"),
        }
    }
}

// Shape checks run before chrono so that obviously non-date text is cheap to reject
static DATETIME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\d{4}-\d{2}-\d{2}[Tt ]\d{2}:\d{2}(:\d{2}(\.\d+)?)?([Zz]|[+-]\d{2}:?\d{2}|\s*(UTC|GMT))?$",
    )
    .unwrap()
});

static DATE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{1,2}-\d{1,2}$").unwrap());

static SLASH_DATE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}/\d{1,2}/\d{1,2}$").unwrap());

static US_DATE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{1,2}/\d{1,2}/\d{4}$").unwrap());

static DOTTED_DATE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}\.\d{1,2}\.\d{4}$").unwrap());

static COMPACT_DATETIME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{8}T\d{6}$").unwrap());

static RFC2822_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z]{3},\s*)?\d{1,2}\s+[A-Za-z]{3}\s+\d{4}\s+\d{2}:\d{2}(:\d{2})?\s+\S+$")
        .unwrap()
});

static US_DATETIME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{1,2}/\d{1,2}/\d{4}[Tt ]\d{1,2}:\d{2}(:\d{2}(\.\d+)?)?$").unwrap()
});

static MONTH_NAME_DATE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]{3,9}\.?\s+\d{1,2},?\s+\d{4}$").unwrap());

static DAY_MONTH_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}\s+[A-Za-z]{3,9}\.?,?\s+\d{4}$").unwrap());

static MONTH_YEAR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]{3,9}\.?,?\s+\d{4}$").unwrap());

static YEAR_MONTH_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{1,2}$").unwrap());

static TIME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}:\d{2}(:\d{2}(\.\d+)?)?$").unwrap());

const OFFSET_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
];

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Detect the date/time shape of a value, if it is a valid date/time
pub fn detect_datetime_format(value: &str) -> Option<DateTimeFormat> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    let format = if DATETIME_REGEX.is_match(value) {
        DateTimeFormat::DateTime
    } else if DATE_REGEX.is_match(value) {
        DateTimeFormat::Date
    } else if SLASH_DATE_REGEX.is_match(value) {
        DateTimeFormat::SlashDate
    } else if US_DATE_REGEX.is_match(value) {
        DateTimeFormat::UsDate
    } else if DOTTED_DATE_REGEX.is_match(value) {
        DateTimeFormat::DottedDate
    } else if COMPACT_DATETIME_REGEX.is_match(value) {
        DateTimeFormat::CompactDateTime
    } else if RFC2822_REGEX.is_match(value) {
        DateTimeFormat::Rfc2822
    } else if US_DATETIME_REGEX.is_match(value) {
        DateTimeFormat::UsDateTime
    } else if MONTH_NAME_DATE_REGEX.is_match(value) {
        DateTimeFormat::MonthNameDate
    } else if DAY_MONTH_NAME_REGEX.is_match(value) {
        DateTimeFormat::DayMonthNameDate
    } else if MONTH_YEAR_REGEX.is_match(value) {
        DateTimeFormat::MonthYear
    } else if YEAR_MONTH_REGEX.is_match(value) {
        DateTimeFormat::YearMonth
    } else if TIME_REGEX.is_match(value) {
        DateTimeFormat::Time
    } else {
        return None;
    };

    // Shape matched; the calendar/clock values must be real as well
    parse_with(value, format).map(|_| format)
}

/// Parse a value as a date/time
///
/// Offset-carrying values are normalised to UTC. Bare clock times are
/// anchored to 1970-01-01.
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    let format = detect_datetime_format(value)?;
    parse_with(value, format)
}

fn parse_with(value: &str, format: DateTimeFormat) -> Option<NaiveDateTime> {
    match format {
        DateTimeFormat::DateTime => parse_iso_datetime(value),
        DateTimeFormat::Date => parse_date(value, "%Y-%m-%d"),
        DateTimeFormat::SlashDate => parse_date(value, "%Y/%m/%d"),
        DateTimeFormat::UsDate => parse_date(value, "%m/%d/%Y"),
        DateTimeFormat::DottedDate => parse_date(value, "%d.%m.%Y"),
        DateTimeFormat::CompactDateTime => {
            NaiveDateTime::parse_from_str(value, "%Y%m%dT%H%M%S").ok()
        }
        DateTimeFormat::Rfc2822 => DateTime::parse_from_rfc2822(value)
            .ok()
            .map(|dt| dt.naive_utc()),
        DateTimeFormat::Time => NaiveTime::parse_from_str(value, "%H:%M:%S%.f")
            .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
            .ok()
            .and_then(|time| NaiveDate::from_ymd_opt(1970, 1, 1).map(|d| d.and_time(time))),
        DateTimeFormat::UsDateTime => {
            let normalised = value.replacen(['T', 't'], " ", 1);
            NaiveDateTime::parse_from_str(&normalised, "%m/%d/%Y %H:%M:%S%.f")
                .or_else(|_| NaiveDateTime::parse_from_str(&normalised, "%m/%d/%Y %H:%M"))
                .ok()
        }
        DateTimeFormat::MonthNameDate => parse_date(&month_name_words(value), "%B %d %Y"),
        DateTimeFormat::DayMonthNameDate => parse_date(&month_name_words(value), "%d %B %Y"),
        DateTimeFormat::MonthYear => {
            parse_date(&format!("1 {}", month_name_words(value)), "%d %B %Y")
        }
        DateTimeFormat::YearMonth => parse_date(&format!("{value}-01"), "%Y-%m-%d"),
    }
}

// `Jan. 15,  2024` -> `Jan 15 2024`; chrono's %B accepts full and short names
fn month_name_words(value: &str) -> String {
    value
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|word| !word.is_empty())
        .map(|word| word.trim_end_matches('.'))
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_iso_datetime(value: &str) -> Option<NaiveDateTime> {
    let utc_rest = value
        .strip_suffix("UTC")
        .or_else(|| value.strip_suffix("GMT"))
        .or_else(|| value.strip_suffix(['Z', 'z']));
    let normalised = match utc_rest {
        Some(rest) => format!("{}+00:00", rest.trim_end()),
        None => value.to_string(),
    };

    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&normalised, fmt) {
            return Some(dt.naive_utc());
        }
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&normalised, fmt) {
            return Some(dt);
        }
    }
    None
}

fn parse_date(value: &str, fmt: &str) -> Option<NaiveDateTime> {
    NaiveDate::parse_from_str(value, fmt)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Fraction of values that parse as a date/time
pub fn datetime_confidence(values: &[&str]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let matches = values
        .iter()
        .filter(|v| parse_datetime(v).is_some())
        .count();

    matches as f64 / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_date() {
        assert_eq!(detect_datetime_format("2024-01-15"), Some(DateTimeFormat::Date));
        assert_eq!(detect_datetime_format("2024-12-31"), Some(DateTimeFormat::Date));
        assert_eq!(detect_datetime_format("2024-02-30"), None); // No such day
    }

    #[test]
    fn test_detect_datetime() {
        for value in [
            "2024-01-15T10:30:00",
            "2024-01-15T10:30:00Z",
            "2024-01-15T10:30:00+05:00",
            "2024-01-15 10:30:00",
            "2024-01-15 10:30:00.250",
            "2024-01-15T10:30",
        ] {
            assert_eq!(
                detect_datetime_format(value),
                Some(DateTimeFormat::DateTime),
                "{value}"
            );
        }
    }

    #[test]
    fn test_offsets_normalised_to_utc() {
        let parsed = parse_datetime("2024-01-15T10:30:00+02:00").unwrap();
        assert_eq!(parsed.to_string(), "2024-01-15 08:30:00");
    }

    #[test]
    fn test_other_date_shapes() {
        assert_eq!(detect_datetime_format("2024/01/15"), Some(DateTimeFormat::SlashDate));
        assert_eq!(detect_datetime_format("01/15/2024"), Some(DateTimeFormat::UsDate));
        assert_eq!(detect_datetime_format("15.01.2024"), Some(DateTimeFormat::DottedDate));
        assert_eq!(
            detect_datetime_format("20240115T103000"),
            Some(DateTimeFormat::CompactDateTime)
        );
        assert_eq!(
            detect_datetime_format("Tue, 1 Jul 2003 10:52:37 +0200"),
            Some(DateTimeFormat::Rfc2822)
        );
        assert_eq!(detect_datetime_format("10:30:00"), Some(DateTimeFormat::Time));
    }

    #[test]
    fn test_us_date_with_time() {
        assert_eq!(
            detect_datetime_format("01/15/2024 10:30"),
            Some(DateTimeFormat::UsDateTime)
        );
        let parsed = parse_datetime("01/15/2024 10:30:45").unwrap();
        assert_eq!(parsed.to_string(), "2024-01-15 10:30:45");
        assert_eq!(detect_datetime_format("13/15/2024 10:30"), None);
    }

    #[test]
    fn test_month_name_dates() {
        assert_eq!(
            detect_datetime_format("Jan 15, 2024"),
            Some(DateTimeFormat::MonthNameDate)
        );
        assert_eq!(
            parse_datetime("January 15, 2024").unwrap().to_string(),
            "2024-01-15 00:00:00"
        );
        assert_eq!(
            detect_datetime_format("15 Jan 2024"),
            Some(DateTimeFormat::DayMonthNameDate)
        );
        assert_eq!(
            parse_datetime("15 January 2024").unwrap().to_string(),
            "2024-01-15 00:00:00"
        );
        assert_eq!(detect_datetime_format("Foo 15, 2024"), None);
    }

    #[test]
    fn test_month_and_year_only() {
        assert_eq!(detect_datetime_format("January 2024"), Some(DateTimeFormat::MonthYear));
        assert_eq!(
            parse_datetime("Mar 2024").unwrap().to_string(),
            "2024-03-01 00:00:00"
        );
        assert_eq!(detect_datetime_format("2024-01"), Some(DateTimeFormat::YearMonth));
        assert_eq!(
            parse_datetime("2024-07").unwrap().to_string(),
            "2024-07-01 00:00:00"
        );
        assert_eq!(detect_datetime_format("2024-13"), None);
    }

    #[test]
    fn test_trailing_utc_zone() {
        assert_eq!(
            detect_datetime_format("2024-01-15 10:30:00 UTC"),
            Some(DateTimeFormat::DateTime)
        );
        assert_eq!(
            parse_datetime("2024-01-15 10:30:00 GMT").unwrap().to_string(),
            "2024-01-15 10:30:00"
        );
    }

    #[test]
    fn test_non_dates() {
        assert_eq!(detect_datetime_format("hello"), None);
        assert_eq!(detect_datetime_format("42"), None);
        assert_eq!(detect_datetime_format("a-b-c"), None);
        assert_eq!(detect_datetime_format(""), None);
        assert_eq!(detect_datetime_format("   "), None);
    }

    #[test]
    fn test_datetime_confidence() {
        let dates = vec!["2024-01-01", "2024-02-15", "2024-03-20"];
        assert_eq!(datetime_confidence(&dates), 1.0);

        let mixed = vec!["2024-01-01", "not-a-date", "2024-03-20"];
        assert!((datetime_confidence(&mixed) - 0.666).abs() < 0.01);

        assert_eq!(datetime_confidence(&[]), 0.0);
    }
}
