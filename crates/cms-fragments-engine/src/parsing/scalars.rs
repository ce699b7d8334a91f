use std::{str::FromStr, sync::LazyLock};

use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use rust_decimal::Decimal;

use super::ParseError;
use crate::{models::GeoPoint, node::ContentNode};

static COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("valid color pattern"));

/// Timestamp layout used by the API, e.g. `2016-06-03T15:30:00+0000`.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

pub fn parse_string(value: &ContentNode, kind: &str) -> Result<String, ParseError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ParseError::malformed(kind, "expected a string value"))
}

pub fn parse_number(value: &ContentNode) -> Result<Decimal, ParseError> {
    let raw = match value {
        ContentNode::Number(n) => n.to_string(),
        ContentNode::String(s) => s.trim().to_string(),
        _ => return Err(ParseError::malformed("Number", "expected a number")),
    };
    Decimal::from_str(&raw)
        .or_else(|_| Decimal::from_scientific(&raw))
        .map_err(|e| ParseError::malformed("Number", format!("{raw}: {e}")))
}

pub fn parse_date(value: &ContentNode) -> Result<NaiveDate, ParseError> {
    let raw = parse_string(value, "Date")?;
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .map_err(|e| ParseError::malformed("Date", format!("{raw}: {e}")))
}

pub fn parse_timestamp(value: &ContentNode) -> Result<DateTime<Utc>, ParseError> {
    let raw = parse_string(value, "Timestamp")?;
    timestamp_from_str(&raw).map_err(|reason| ParseError::malformed("Timestamp", reason))
}

pub(crate) fn timestamp_from_str(raw: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| format!("{raw}: {e}"))
}

pub fn parse_color(value: &ContentNode) -> Result<String, ParseError> {
    let raw = parse_string(value, "Color")?;
    if COLOR.is_match(&raw) {
        Ok(raw)
    } else {
        Err(ParseError::malformed(
            "Color",
            format!("{raw} is not a #RRGGBB color"),
        ))
    }
}

pub fn parse_geo_point(value: &ContentNode) -> Result<GeoPoint, ParseError> {
    let coordinate = |key: &str| {
        value
            .get(key)
            .and_then(ContentNode::as_f64)
            .ok_or_else(|| ParseError::malformed("GeoPoint", format!("missing `{key}`")))
    };
    Ok(GeoPoint {
        latitude: coordinate("latitude")?,
        longitude: coordinate("longitude")?,
    })
}
