//! Purpose: Millisecond-precision instants for timestamp-typed record fields.
//! Exports: `Timestamp`.
//! Role: Bridges `time::OffsetDateTime` and the wire's epoch-seconds encoding.
//! Invariants: Values are truncated to whole milliseconds on construction.
//! Invariants: Marshalled form is a JSON number of epoch seconds.

use serde::{Serialize, Serializer};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Timestamp(OffsetDateTime);

impl Timestamp {
    pub fn from_unix_millis(millis: i64) -> Option<Self> {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000)
            .ok()
            .map(Self)
    }

    /// Rounds to the nearest millisecond.
    pub fn from_epoch_seconds(seconds: f64) -> Option<Self> {
        if !seconds.is_finite() {
            return None;
        }
        let millis = (seconds * 1000.0).round();
        if millis < i64::MIN as f64 || millis > i64::MAX as f64 {
            return None;
        }
        Self::from_unix_millis(millis as i64)
    }

    /// Accepts epoch seconds (`"1580000000.5"`) or RFC 3339 text.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if let Ok(seconds) = text.parse::<f64>() {
            return Self::from_epoch_seconds(seconds);
        }
        OffsetDateTime::parse(text, &Rfc3339).ok().map(Self::from)
    }

    pub fn unix_millis(&self) -> i64 {
        self.0.unix_timestamp_nanos().div_euclid(1_000_000) as i64
    }

    pub fn epoch_seconds(&self) -> f64 {
        self.unix_millis() as f64 / 1000.0
    }

    pub fn to_rfc3339(&self) -> Option<String> {
        self.0.format(&Rfc3339).ok()
    }

    pub fn as_offset_date_time(&self) -> OffsetDateTime {
        self.0
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(value: OffsetDateTime) -> Self {
        let millis = value.unix_timestamp_nanos().div_euclid(1_000_000);
        // Any OffsetDateTime fits in i64 milliseconds.
        Self::from_unix_millis(millis as i64).unwrap_or(Self(value))
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.epoch_seconds())
    }
}

#[cfg(test)]
mod tests {
    use super::Timestamp;

    #[test]
    fn epoch_seconds_round_to_millis() {
        let ts = Timestamp::from_epoch_seconds(1_580_000_000.1234).expect("ts");
        assert_eq!(ts.unix_millis(), 1_580_000_000_123);
    }

    #[test]
    fn parse_accepts_numeric_and_rfc3339() {
        let numeric = Timestamp::parse("1580000000").expect("numeric");
        let text = Timestamp::parse("2020-01-26T00:53:20Z").expect("rfc3339");
        assert_eq!(numeric, text);
        assert_eq!(text.to_rfc3339().as_deref(), Some("2020-01-26T00:53:20Z"));
    }

    #[test]
    fn parse_rejects_garbage_and_non_finite() {
        assert!(Timestamp::parse("yesterday").is_none());
        assert!(Timestamp::parse("inf").is_none());
        assert!(Timestamp::from_epoch_seconds(f64::NAN).is_none());
    }

    #[test]
    fn marshals_as_epoch_seconds_number() {
        let ts = Timestamp::from_unix_millis(1_580_000_000_500).expect("ts");
        let json = serde_json::to_string(&ts).expect("json");
        assert_eq!(json, "1580000000.5");
    }
}
