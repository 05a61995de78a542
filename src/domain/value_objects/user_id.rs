//! User identity as carried by handshakes and notification requests.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Positive integer identity of a user in the social graph.
///
/// Zero and negative values are never valid identities, so every
/// constructor rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct UserId(i64);

/// Reasons a raw value cannot become a [`UserId`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidUserId {
    #[error("user id must be positive, got {0}")]
    NotPositive(i64),

    #[error("user id is not an integer: {0:?}")]
    NotAnInteger(String),
}

impl UserId {
    /// Create a user id, rejecting non-positive values.
    pub fn new(value: i64) -> Result<Self, InvalidUserId> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(InvalidUserId::NotPositive(value))
        }
    }

    /// Get the raw i64 value.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for UserId {
    type Error = InvalidUserId;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl FromStr for UserId {
    type Err = InvalidUserId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<i64>()
            .map_err(|_| InvalidUserId::NotAnInteger(s.to_string()))?;
        Self::new(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("42", 42 ; "plain integer")]
    #[test_case(" 7 ", 7 ; "surrounding whitespace")]
    #[test_case("9223372036854775807", i64::MAX ; "max value")]
    fn test_parse_valid(input: &str, expected: i64) {
        let id: UserId = input.parse().unwrap();
        assert_eq!(id.as_i64(), expected);
    }

    #[test_case("0" ; "zero")]
    #[test_case("-3" ; "negative")]
    #[test_case("abc" ; "not a number")]
    #[test_case("4.2" ; "decimal")]
    #[test_case("" ; "empty")]
    fn test_parse_invalid(input: &str) {
        assert!(input.parse::<UserId>().is_err());
    }

    #[test]
    fn test_serde_rejects_non_positive() {
        assert!(serde_json::from_str::<UserId>("0").is_err());
        let id: UserId = serde_json::from_str("15").unwrap();
        assert_eq!(id, UserId::new(15).unwrap());
        assert_eq!(serde_json::to_string(&id).unwrap(), "15");
    }
}
