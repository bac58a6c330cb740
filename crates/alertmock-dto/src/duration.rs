//! Prometheus-style duration strings.
//!
//! Rule definitions carry durations as compact strings (`5m`, `90s`, `1h30m`).
//! [`PromDuration`] keeps the parsed [`Duration`] and renders the canonical
//! compact form when serialized.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DtoError, Result};

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * 60;
const SECS_PER_DAY: u64 = 24 * 60 * 60;

/// A duration expressed in the Prometheus string format.
///
/// Supported units are `s`, `m`, `h`, and `d`; components may be chained
/// (`1h30m`). Sub-second precision is not representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PromDuration(Duration);

impl PromDuration {
    /// Creates a duration from whole seconds.
    #[must_use]
    pub const fn seconds(secs: u64) -> Self {
        Self(Duration::from_secs(secs))
    }

    /// Creates a duration from whole minutes.
    #[must_use]
    pub const fn minutes(mins: u64) -> Self {
        Self(Duration::from_secs(mins * SECS_PER_MINUTE))
    }

    /// Creates a duration from whole hours.
    #[must_use]
    pub const fn hours(hours: u64) -> Self {
        Self(Duration::from_secs(hours * SECS_PER_HOUR))
    }

    /// Returns the underlying [`Duration`].
    #[must_use]
    pub const fn as_duration(&self) -> Duration {
        self.0
    }

    /// Returns the duration in whole seconds.
    #[must_use]
    pub const fn as_secs(&self) -> u64 {
        self.0.as_secs()
    }

    /// Returns true if the duration is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0.as_secs() == 0
    }
}

impl fmt::Display for PromDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut secs = self.0.as_secs();
        if secs == 0 {
            return write!(f, "0s");
        }

        for (unit, label) in [
            (SECS_PER_DAY, "d"),
            (SECS_PER_HOUR, "h"),
            (SECS_PER_MINUTE, "m"),
            (1, "s"),
        ] {
            if secs >= unit {
                write!(f, "{}{label}", secs / unit)?;
                secs %= unit;
            }
        }
        Ok(())
    }
}

impl FromStr for PromDuration {
    type Err = DtoError;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(DtoError::InvalidDuration {
                reason: "empty string".to_string(),
            });
        }

        let mut total: u64 = 0;
        let mut value: Option<u64> = None;

        for ch in s.chars() {
            if let Some(digit) = ch.to_digit(10) {
                let current = value.unwrap_or(0);
                value = Some(
                    current
                        .checked_mul(10)
                        .and_then(|v| v.checked_add(u64::from(digit)))
                        .ok_or_else(|| DtoError::InvalidDuration {
                            reason: format!("value overflow in '{s}'"),
                        })?,
                );
                continue;
            }

            let multiplier = match ch {
                's' => 1,
                'm' => SECS_PER_MINUTE,
                'h' => SECS_PER_HOUR,
                'd' => SECS_PER_DAY,
                other => {
                    return Err(DtoError::InvalidDuration {
                        reason: format!("unknown unit '{other}' in '{s}'"),
                    });
                }
            };

            let Some(v) = value.take() else {
                return Err(DtoError::InvalidDuration {
                    reason: format!("unit '{ch}' without a value in '{s}'"),
                });
            };

            total = v
                .checked_mul(multiplier)
                .and_then(|v| total.checked_add(v))
                .ok_or_else(|| DtoError::InvalidDuration {
                    reason: format!("value overflow in '{s}'"),
                })?;
        }

        if value.is_some() {
            return Err(DtoError::InvalidDuration {
                reason: format!("trailing value without a unit in '{s}'"),
            });
        }

        Ok(Self(Duration::from_secs(total)))
    }
}

impl From<PromDuration> for Duration {
    fn from(value: PromDuration) -> Self {
        value.0
    }
}

impl Serialize for PromDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PromDuration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_case::test_case;

    #[test_case("5m", 300; "five minutes")]
    #[test_case("90s", 90; "ninety seconds")]
    #[test_case("1h30m", 5400; "compound hour and minutes")]
    #[test_case("2d", 172_800; "two days")]
    #[test_case("0s", 0; "zero")]
    #[test_case("1d1h1m1s", 90_061; "all units")]
    fn parse_valid(input: &str, expected_secs: u64) {
        let parsed: PromDuration = input.parse().expect("should parse");
        assert_eq!(parsed.as_secs(), expected_secs);
    }

    #[test_case(""; "empty")]
    #[test_case("5"; "missing unit")]
    #[test_case("m"; "missing value")]
    #[test_case("5x"; "unknown unit")]
    #[test_case("1h30"; "trailing value")]
    fn parse_invalid(input: &str) {
        let parsed = input.parse::<PromDuration>();
        assert!(matches!(
            parsed,
            Err(DtoError::InvalidDuration { .. })
        ));
    }

    #[test_case(PromDuration::minutes(5), "5m")]
    #[test_case(PromDuration::seconds(90), "1m30s")]
    #[test_case(PromDuration::hours(1), "1h")]
    #[test_case(PromDuration::seconds(0), "0s")]
    #[test_case(PromDuration::seconds(90_061), "1d1h1m1s")]
    fn display_canonical(duration: PromDuration, expected: &str) {
        assert_eq!(duration.to_string(), expected);
    }

    #[test]
    fn constructors() {
        assert_eq!(PromDuration::seconds(30).as_secs(), 30);
        assert_eq!(PromDuration::minutes(2).as_secs(), 120);
        assert_eq!(PromDuration::hours(3).as_secs(), 10_800);
        assert!(PromDuration::seconds(0).is_zero());
        assert!(!PromDuration::minutes(1).is_zero());
    }

    #[test]
    fn serde_as_string() {
        let json = serde_json::to_string(&PromDuration::minutes(5)).expect("serialize");
        assert_eq!(json, "\"5m\"");

        let parsed: PromDuration = serde_json::from_str("\"1h30m\"").expect("deserialize");
        assert_eq!(parsed.as_secs(), 5400);
    }

    proptest! {
        #[test]
        fn display_parse_roundtrip(secs in 0u64..=10_000_000) {
            let original = PromDuration::seconds(secs);
            let parsed: PromDuration = original.to_string().parse().expect("roundtrip parse");
            prop_assert_eq!(parsed, original);
        }
    }
}
