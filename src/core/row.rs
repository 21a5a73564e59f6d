use chrono::{DateTime, NaiveDate, NaiveDateTime};
use smallvec::SmallVec;

use crate::core::types::{RawRecord, Row};

const DATE_TIME_FORMATS: [&str; 3] = ["%d/%m/%Y %H:%M", "%d/%m/%Y %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
const DATE_FORMATS: [&str; 2] = ["%d/%m/%Y", "%Y-%m-%d"];

/// Maps a raw record into a typed [`Row`].
///
/// Total: unparseable fields become `None` instead of failing, and the row is
/// later excluded from whichever dimensions need the missing field.
#[must_use]
pub fn normalize_row(raw: &RawRecord) -> Row {
    Row::new()
        .with_id(raw.id.trim())
        .with_date(parse_release_date(&raw.date_global))
        .with_price(parse_number(&raw.amount))
        .with_rating(parse_number(&raw.overall_avg_rating))
        .with_category(&raw.category)
        .with_free(parse_flag(&raw.is_free))
        .with_platform_tags(split_platforms(&raw.supported_operating_systems))
        .with_kind(&raw.kind)
}

#[must_use]
pub fn normalize_rows(raw: &[RawRecord]) -> Vec<Row> {
    raw.iter().map(normalize_row).collect()
}

/// Parses the marketplace release date (`dd/mm/YYYY HH:MM`) plus a few ISO forms.
#[must_use]
pub fn parse_release_date(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(input, format) {
            return Some(parsed);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(input, format) {
            return parsed.and_hms_opt(0, 0, 0);
        }
    }
    DateTime::parse_from_rfc3339(input)
        .ok()
        .map(|parsed| parsed.naive_local())
}

#[must_use]
pub fn parse_number(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// `TRUE`, `True`, `true` and `1` mark a free game; anything else is paid.
#[must_use]
pub fn parse_flag(input: &str) -> bool {
    let input = input.trim();
    input.eq_ignore_ascii_case("true") || input == "1"
}

fn split_platforms(input: &str) -> SmallVec<[&str; 4]> {
    input
        .split([',', ';'])
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::Datelike;

    use super::*;

    #[test]
    fn parses_marketplace_date_format() {
        let date = parse_release_date("23/07/2016 14:30").expect("date");
        assert_eq!((date.year(), date.month(), date.day()), (2016, 7, 23));
    }

    #[test]
    fn parses_iso_and_rfc3339_dates() {
        assert_eq!(parse_release_date("2019-03-01").map(|d| d.year()), Some(2019));
        assert_eq!(
            parse_release_date("2021-12-31T23:00:00+02:00").map(|d| d.year()),
            Some(2021)
        );
    }

    #[test]
    fn garbage_date_is_absent() {
        assert_eq!(parse_release_date("soon"), None);
        assert_eq!(parse_release_date(""), None);
        assert_eq!(parse_release_date("31/02/2020"), None);
    }

    #[test]
    fn flag_accepts_common_spellings() {
        assert!(parse_flag("TRUE"));
        assert!(parse_flag("True"));
        assert!(parse_flag(" 1 "));
        assert!(!parse_flag("FALSE"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn numbers_reject_non_finite() {
        assert_eq!(parse_number("19.99"), Some(19.99));
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("free"), None);
    }

    #[test]
    fn platforms_are_split_and_cleaned() {
        let raw = RawRecord {
            supported_operating_systems: "['Windows', 'Mac'] ; Linux".to_owned(),
            ..RawRecord::default()
        };
        let row = normalize_row(&raw);
        let tags: Vec<&str> = row.platform_tags().iter().map(String::as_str).collect();
        assert_eq!(tags, vec!["Linux", "Mac", "Windows"]);
    }
}
