//! Date handling for appointment payloads.
//!
//! Clients send dates in whatever shape a browser form produces, so the
//! deserializers accept RFC 3339, naive timestamps (read as UTC), bare dates
//! and epoch milliseconds. Dates are stored as BSON datetimes and rendered
//! back as RFC 3339 with millisecond precision.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use mongodb::bson;
use serde::{de, Deserialize, Deserializer};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDate {
    Millis(i64),
    Text(String),
}

/// Parses a textual date into UTC, or `None` if no accepted shape matches.
pub fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

pub fn to_bson(date: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(date.timestamp_millis())
}

/// Renders a stored date as `2024-10-01T09:30:00.000Z`.
pub fn format_date(date: bson::DateTime) -> String {
    match DateTime::<Utc>::from_timestamp_millis(date.timestamp_millis()) {
        Some(dt) => dt.to_rfc3339_opts(SecondsFormat::Millis, true),
        None => date.to_string(),
    }
}

fn from_raw<E: de::Error>(raw: RawDate) -> Result<bson::DateTime, E> {
    match raw {
        RawDate::Millis(ms) => Ok(bson::DateTime::from_millis(ms)),
        RawDate::Text(text) => parse_date(&text)
            .map(to_bson)
            .ok_or_else(|| E::custom(format!("Cast to date failed for value \"{}\"", text))),
    }
}

/// `deserialize_with` target for required date fields.
pub fn deserialize<'de, D>(deserializer: D) -> Result<bson::DateTime, D::Error>
where
    D: Deserializer<'de>,
{
    from_raw(RawDate::deserialize(deserializer)?)
}

/// `deserialize_with` target for optional date fields; `null` reads as absent.
pub fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<bson::DateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawDate>::deserialize(deserializer)? {
        Some(raw) => from_raw(raw).map(Some),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_accepted_shapes() {
        let expected = Utc.with_ymd_and_hms(2024, 10, 1, 9, 30, 0).unwrap();

        assert_eq!(parse_date("2024-10-01T09:30:00Z"), Some(expected));
        assert_eq!(parse_date("2024-10-01T11:30:00+02:00"), Some(expected));
        assert_eq!(parse_date("2024-10-01T09:30:00"), Some(expected));
        assert_eq!(parse_date("2024-10-01 09:30:00"), Some(expected));
        assert_eq!(
            parse_date("2024-10-01"),
            Some(Utc.with_ymd_and_hms(2024, 10, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_date("next tuesday"), None);
        assert_eq!(parse_date("2024-13-40"), None);
    }

    #[test]
    fn formats_with_millis_and_z() {
        let date = to_bson(Utc.with_ymd_and_hms(2024, 10, 1, 9, 30, 0).unwrap());
        assert_eq!(format_date(date), "2024-10-01T09:30:00.000Z");
    }

    #[derive(Deserialize)]
    struct Holder {
        #[serde(deserialize_with = "deserialize")]
        date: bson::DateTime,
    }

    #[derive(Deserialize)]
    struct OptionalHolder {
        #[serde(default, deserialize_with = "deserialize_optional")]
        date: Option<bson::DateTime>,
    }

    #[test]
    fn deserializes_text_and_millis() {
        let text: Holder = serde_json::from_str(r#"{"date":"2024-10-01"}"#).unwrap();
        let millis: Holder = serde_json::from_str(r#"{"date":1727740800000}"#).unwrap();
        assert_eq!(text.date, millis.date);

        assert!(serde_json::from_str::<Holder>(r#"{"date":"soon"}"#).is_err());
    }

    #[test]
    fn optional_date_accepts_null_and_absence() {
        let absent: OptionalHolder = serde_json::from_str("{}").unwrap();
        let null: OptionalHolder = serde_json::from_str(r#"{"date":null}"#).unwrap();
        assert!(absent.date.is_none());
        assert!(null.date.is_none());
    }
}
