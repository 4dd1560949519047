//! KST date/time codec.
//!
//! Every timestamp the shopby API sends or expects is wall-clock time in
//! Korea Standard Time. This module normalizes the handful of textual shapes
//! the API produces into [`KstDateTime`] / [`KstDate`], and renders them back
//! into the single format the API accepts on input.
//!
//! | Direction | Format | Example |
//! |-----------|--------|---------|
//! | outbound instant | `YYYY-MM-DD HH:MM:SS` | `2025-03-01 12:30:00` |
//! | outbound date | `YYYY-MM-DD` | `2025-03-01` |
//! | inbound instant | `YYYY-MM-DDTHH:MM[:SS[.fraction]][Z\|±HH[:MM]\|±HHMM]` | `2025-11-06T17:27:44.085197` |
//! | inbound instant | `YYYY-MM-DD HH:MM[:SS[.fraction]][Z\|±HH[:MM]\|±HHMM]` | `2025-11-06 17:27:44+09:00` |
//! | inbound instant | `YYYY-MM-DD` (midnight) | `2025-11-06` |
//! | inbound date | `YYYY-MM-DD` | `2025-11-06` |
//!
//! Values without an offset are taken to already be KST; values with an
//! offset are converted. The date decoder never strips a time component.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::de::{Error as DeError, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use time::macros::{format_description, offset};
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset};

use crate::error::TemporalError;

/// Korea Standard Time, UTC+09:00. Korea does not observe daylight saving.
pub const KST: UtcOffset = offset!(+9);

/// Textual shapes accepted by [`KstDateTime::parse`], in the order they are tried.
pub const DATETIME_PATTERNS: &[&str] = &[
    "YYYY-MM-DDTHH:MM[:SS[.fraction]][Z|±HH[:MM]|±HHMM]",
    "YYYY-MM-DD HH:MM[:SS[.fraction]][Z|±HH[:MM]|±HHMM]",
    "YYYY-MM-DD",
];

/// Textual shapes accepted by [`KstDate::parse`].
pub const DATE_PATTERNS: &[&str] = &["YYYY-MM-DD"];

/// A timestamp that may or may not carry an offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    /// Wall-clock fields only; interpreted as KST.
    Naive(PrimitiveDateTime),
    /// Absolute instant; converted to KST.
    Aware(OffsetDateTime),
}

impl From<PrimitiveDateTime> for Timestamp {
    fn from(value: PrimitiveDateTime) -> Self {
        Self::Naive(value)
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(value: OffsetDateTime) -> Self {
        Self::Aware(value)
    }
}

impl From<KstDateTime> for Timestamp {
    fn from(value: KstDateTime) -> Self {
        Self::Aware(value.0)
    }
}

/// Point in time, always expressed at the [`KST`] offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KstDateTime(OffsetDateTime);

impl KstDateTime {
    pub fn now() -> Self {
        Self(OffsetDateTime::now_utc().to_offset(KST))
    }

    /// Re-expresses an absolute instant at the KST offset.
    pub fn from_offset_datetime(value: OffsetDateTime) -> Self {
        Self(value.to_offset(KST))
    }

    /// Attaches the KST offset to naive wall-clock fields without shifting them.
    pub fn assume_kst(value: PrimitiveDateTime) -> Self {
        Self(value.assume_offset(KST))
    }

    pub fn from_timestamp(value: impl Into<Timestamp>) -> Self {
        match value.into() {
            Timestamp::Naive(naive) => Self::assume_kst(naive),
            Timestamp::Aware(aware) => Self::from_offset_datetime(aware),
        }
    }

    /// Parses any of [`DATETIME_PATTERNS`], committing to the first that matches.
    pub fn parse(input: &str) -> Result<Self, TemporalError> {
        parse_extended(input)
            .or_else(|| parse_date_only(input))
            .ok_or_else(|| TemporalError::InvalidFormat {
                target: "KstDateTime",
                value: input.to_owned(),
                accepted: DATETIME_PATTERNS,
            })
    }

    /// Decodes a raw JSON value; only strings are accepted.
    pub fn decode(value: &Value) -> Result<Self, TemporalError> {
        match value {
            Value::String(text) => Self::parse(text),
            other => Err(TemporalError::InvalidType {
                target: "KstDateTime",
                found: json_type_name(other),
            }),
        }
    }

    pub fn into_inner(self) -> OffsetDateTime {
        self.0
    }

    pub fn date(self) -> KstDate {
        KstDate(self.0.date())
    }

    /// Renders `YYYY-MM-DD HH:MM:SS`. Sub-second precision is dropped.
    pub fn format(self) -> String {
        self.to_string()
    }
}

impl Display for KstDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let rendered = self
            .0
            .to_offset(KST)
            .format(format_description!(
                "[year]-[month]-[day] [hour]:[minute]:[second]"
            ))
            .map_err(|_| std::fmt::Error)?;
        f.write_str(&rendered)
    }
}

impl FromStr for KstDateTime {
    type Err = TemporalError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl From<OffsetDateTime> for KstDateTime {
    fn from(value: OffsetDateTime) -> Self {
        Self::from_offset_datetime(value)
    }
}

impl From<PrimitiveDateTime> for KstDateTime {
    fn from(value: PrimitiveDateTime) -> Self {
        Self::assume_kst(value)
    }
}

impl Serialize for KstDateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for KstDateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(KstDateTimeVisitor)
    }
}

struct KstDateTimeVisitor;

impl Visitor<'_> for KstDateTimeVisitor {
    type Value = KstDateTime;

    fn expecting(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("a KST datetime string")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: DeError,
    {
        KstDateTime::parse(value).map_err(E::custom)
    }
}

/// Calendar date in the KST market; carries no time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KstDate(Date);

impl KstDate {
    pub fn today() -> Self {
        KstDateTime::now().date()
    }

    /// Parses `YYYY-MM-DD` exactly. Timestamps with a time part are rejected.
    pub fn parse(input: &str) -> Result<Self, TemporalError> {
        Date::parse(input, format_description!("[year]-[month]-[day]"))
            .map(Self)
            .map_err(|_| TemporalError::InvalidFormat {
                target: "KstDate",
                value: input.to_owned(),
                accepted: DATE_PATTERNS,
            })
    }

    pub fn decode(value: &Value) -> Result<Self, TemporalError> {
        match value {
            Value::String(text) => Self::parse(text),
            other => Err(TemporalError::InvalidType {
                target: "KstDate",
                found: json_type_name(other),
            }),
        }
    }

    pub fn into_inner(self) -> Date {
        self.0
    }

    pub fn format(self) -> String {
        self.to_string()
    }
}

impl Display for KstDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let rendered = self
            .0
            .format(format_description!("[year]-[month]-[day]"))
            .map_err(|_| std::fmt::Error)?;
        f.write_str(&rendered)
    }
}

impl FromStr for KstDate {
    type Err = TemporalError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl From<Date> for KstDate {
    fn from(value: Date) -> Self {
        Self(value)
    }
}

impl Serialize for KstDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for KstDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(KstDateVisitor)
    }
}

struct KstDateVisitor;

impl Visitor<'_> for KstDateVisitor {
    type Value = KstDate;

    fn expecting(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("a YYYY-MM-DD date string")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: DeError,
    {
        KstDate::parse(value).map_err(E::custom)
    }
}

/// Renders any timestamp as a KST `YYYY-MM-DD HH:MM:SS` string for query parameters.
///
/// Naive input is taken to be KST already; aware input is converted.
pub fn to_kst_string(value: impl Into<Timestamp>) -> String {
    KstDateTime::from_timestamp(value).format()
}

/// Date, `T` or a single space, then a clock with optional seconds, fraction
/// and offset. Without an offset the wall clock is KST.
fn parse_extended(input: &str) -> Option<KstDateTime> {
    let date = Date::parse(input.get(..10)?, format_description!("[year]-[month]-[day]")).ok()?;
    if !matches!(input.get(10..11)?, "T" | " ") {
        return None;
    }
    let (clock, offset) = split_offset(input.get(11..)?)?;
    let clock = Time::parse(
        clock,
        format_description!("[hour]:[minute][optional [:[second][optional [.[subsecond]]]]]"),
    )
    .ok()?;

    let naive = PrimitiveDateTime::new(date, clock);
    Some(match offset {
        Some(offset) => KstDateTime::from_offset_datetime(naive.assume_offset(offset)),
        None => KstDateTime::assume_kst(naive),
    })
}

/// Splits a trailing `Z`, `±HH:MM`, `±HHMM` or `±HH` off the clock text.
fn split_offset(text: &str) -> Option<(&str, Option<UtcOffset>)> {
    if let Some(clock) = text.strip_suffix('Z') {
        return Some((clock, Some(UtcOffset::UTC)));
    }
    let Some(at) = text.find(|c: char| c == '+' || c == '-') else {
        return Some((text, None));
    };
    let (clock, raw) = text.split_at(at);
    let offset = UtcOffset::parse(
        raw,
        format_description!("[offset_hour sign:mandatory]:[offset_minute]"),
    )
    .or_else(|_| {
        UtcOffset::parse(
            raw,
            format_description!("[offset_hour sign:mandatory][offset_minute]"),
        )
    })
    .or_else(|_| UtcOffset::parse(raw, format_description!("[offset_hour sign:mandatory]")))
    .ok()?;
    Some((clock, Some(offset)))
}

fn parse_date_only(input: &str) -> Option<KstDateTime> {
    Date::parse(input, format_description!("[year]-[month]-[day]"))
        .ok()
        .map(|date| KstDateTime::assume_kst(date.midnight()))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(number) if number.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
