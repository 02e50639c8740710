//! Canonical encoding of stored timestamps.
//!
//! Every timestamp the controller writes into a status object (for example `savepointTime`)
//! goes through [`TimeConverter`], so the stored form is stable across releases:
//!
//! ```text
//! YYYY-MM-DDTHH:MM:SSZ      e.g. 2024-03-01T12:00:05Z
//! ```
//!
//! The encoding is RFC3339 in UTC with whole-second precision, produced by the `time` crate.
//! Fixed-width fields make the strings sort lexicographically in time order;
//! RFC3339 limits them to years 0000 through 9999.
use std::fmt;

use time::{OffsetDateTime, UtcOffset, format_description::well_known::Rfc3339};

use crate::error::{ModelError, ModelResult};

/// Converts between [`OffsetDateTime`] and the stored string representation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeConverter;

impl TimeConverter {
    /// Encode a point in time.
    ///
    /// The value is shifted to UTC and anything below one second is dropped.
    /// Only years `0000..=9999` (after the shift to UTC) are representable;
    /// anything else is [`ModelError::TimestampOutOfRange`].
    ///
    /// ```
    /// use flinkop_model::TimeConverter;
    /// use time::macros::datetime;
    ///
    /// let ts = TimeConverter::to_string(datetime!(2024-03-01 14:00:05.750 +02:00)).unwrap();
    /// assert_eq!(ts, "2024-03-01T12:00:05Z");
    /// ```
    pub fn to_string(t: OffsetDateTime) -> ModelResult<String> {
        t.checked_to_offset(UtcOffset::UTC)
            .ok_or_else(|| out_of_range(t, "not representable in UTC"))?
            .replace_nanosecond(0)
            .map_err(|e| out_of_range(t, e))?
            .format(&Rfc3339)
            .map_err(|e| out_of_range(t, e))
    }

    /// Decode a stored timestamp.
    ///
    /// Any RFC3339 value is accepted (other offsets, fractional seconds);
    /// the result is normalized to UTC.
    /// Empty or malformed input yields [`ModelError::MalformedTimestamp`].
    pub fn from_string(raw: &str) -> ModelResult<OffsetDateTime> {
        if raw.is_empty() {
            return Err(ModelError::MalformedTimestamp("empty string".to_string()));
        }
        OffsetDateTime::parse(raw, &Rfc3339)
            .map(|t| t.to_offset(UtcOffset::UTC))
            .map_err(|e| ModelError::MalformedTimestamp(format!("{raw:?}: {e}")))
    }
}

fn out_of_range(t: OffsetDateTime, reason: impl fmt::Display) -> ModelError {
    ModelError::TimestampOutOfRange(format!("{t}: {reason}"))
}

/// Serde adapter for `Option<OffsetDateTime>` fields stored in the canonical format.
///
/// ```ignore
/// #[serde(default, with = "crate::timestamp::option", skip_serializing_if = "Option::is_none")]
/// pub completion_time: Option<OffsetDateTime>,
/// ```
pub mod option {
    use serde::{Deserialize, Deserializer, Serializer, de, ser};
    use time::OffsetDateTime;

    use super::TimeConverter;

    pub fn serialize<S>(value: &Option<OffsetDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(t) => {
                let raw = TimeConverter::to_string(*t).map_err(ser::Error::custom)?;
                serializer.serialize_some(&raw)
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<OffsetDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| TimeConverter::from_string(&raw).map_err(de::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::{Duration, macros::datetime};

    #[test]
    fn formats_utc_with_whole_seconds() {
        let t = datetime!(2024-03-01 12:00:05 UTC);
        assert_eq!(TimeConverter::to_string(t).unwrap(), "2024-03-01T12:00:05Z");
    }

    #[test]
    fn formats_other_offsets_in_utc() {
        let t = datetime!(2023-12-31 22:30:00 -05:00);
        assert_eq!(TimeConverter::to_string(t).unwrap(), "2024-01-01T03:30:00Z");
    }

    #[test]
    fn truncates_sub_second_precision() {
        let t = datetime!(2024-03-01 12:00:05.999999 UTC);
        assert_eq!(TimeConverter::to_string(t).unwrap(), "2024-03-01T12:00:05Z");
    }

    #[test]
    fn roundtrip_is_exact_at_second_resolution() {
        let t = datetime!(2021-06-15 08:09:10 UTC);
        let back = TimeConverter::from_string(&TimeConverter::to_string(t).unwrap()).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn roundtrip_drops_fraction() {
        let t = datetime!(2021-06-15 08:09:10.400 +03:00);
        let back = TimeConverter::from_string(&TimeConverter::to_string(t).unwrap()).unwrap();
        assert_eq!(back, datetime!(2021-06-15 05:09:10 UTC));
    }

    #[test]
    fn roundtrip_holds_at_year_range_edges() {
        for t in [
            datetime!(0000-01-01 00:00:00 UTC),
            datetime!(9999-12-31 23:59:59 UTC),
        ] {
            let encoded = TimeConverter::to_string(t).unwrap();
            assert_eq!(TimeConverter::from_string(&encoded).unwrap(), t, "{encoded}");
        }
    }

    #[test]
    fn years_outside_rfc3339_are_rejected() {
        let before_year_zero = [
            datetime!(-0001-06-15 08:09:10 UTC),
            datetime!(0000-01-01 00:30:00 +01:00),
        ];
        for t in before_year_zero {
            assert!(
                matches!(TimeConverter::to_string(t), Err(ModelError::TimestampOutOfRange(_))),
                "{t} should not encode"
            );
        }
    }

    #[test]
    fn encoded_strings_sort_in_time_order() {
        let base = datetime!(2024-09-09 23:59:58 UTC);
        let mut encoded: Vec<String> = [0, 1, 2, 3600, 86_400 * 40]
            .iter()
            .rev()
            .map(|s| TimeConverter::to_string(base + Duration::seconds(*s)).unwrap())
            .collect();
        let times_desc = encoded.clone();

        encoded.sort();
        let mut expected = times_desc;
        expected.reverse();
        assert_eq!(encoded, expected);
    }

    #[test]
    fn parses_offsets_and_fractions() {
        let t = TimeConverter::from_string("2024-03-01T14:00:05.5+02:00").unwrap();
        assert_eq!(t, datetime!(2024-03-01 12:00:05.5 UTC));
        assert_eq!(t.offset(), UtcOffset::UTC);
    }

    #[test]
    fn rejects_malformed_input() {
        let bad = ["", " ", "yesterday", "2024-03-01", "2024-03-01 12:00:05", "2024-13-01T00:00:00Z"];

        for raw in bad {
            let res = TimeConverter::from_string(raw);
            assert!(
                matches!(res, Err(ModelError::MalformedTimestamp(_))),
                "expected MalformedTimestamp for {raw:?}, got {res:?}"
            );
        }
    }

    #[derive(serde::Serialize, serde::Deserialize)]
    struct Holder {
        #[serde(default, with = "super::option", skip_serializing_if = "Option::is_none")]
        at: Option<OffsetDateTime>,
    }

    #[test]
    fn serde_option_uses_stored_format() {
        let h = Holder {
            at: Some(datetime!(2024-03-01 12:00:05.123 UTC)),
        };
        let json = serde_json::to_string(&h).unwrap();
        assert_eq!(json, r#"{"at":"2024-03-01T12:00:05Z"}"#);

        let back: Holder = serde_json::from_str(&json).unwrap();
        assert_eq!(back.at, Some(datetime!(2024-03-01 12:00:05 UTC)));
    }

    #[test]
    fn serde_option_handles_missing_and_null() {
        let missing: Holder = serde_json::from_str("{}").unwrap();
        assert!(missing.at.is_none());

        let null: Holder = serde_json::from_str(r#"{"at":null}"#).unwrap();
        assert!(null.at.is_none());

        assert_eq!(serde_json::to_string(&missing).unwrap(), "{}");
    }

    #[test]
    fn serde_option_rejects_garbage() {
        let res = serde_json::from_str::<Holder>(r#"{"at":"not-a-time"}"#);
        assert!(res.is_err());
    }
}
