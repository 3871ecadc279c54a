use std::fmt;

use chrono::DateTime;
use serde::Deserialize;
use serde::Serialize;

/// A block timestamp in unix seconds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Timestamp(u64);

impl Timestamp {
    pub fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    pub fn as_secs(&self) -> u64 {
        self.0
    }

    /// Human-readable UTC form, e.g. `2023-05-02 03:20:00 UTC`.
    ///
    /// Falls back to the raw seconds if the value is outside chrono's
    /// representable range.
    pub fn standard_format(&self) -> String {
        match DateTime::from_timestamp(self.0 as i64, 0) {
            Some(datetime) => datetime.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            None => self.0.to_string(),
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.standard_format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_format_is_utc() {
        assert_eq!(
            Timestamp::from_secs(1_683_000_000).standard_format(),
            "2023-05-02 04:00:00 UTC"
        );
    }

    #[test]
    fn epoch_formats_cleanly() {
        assert_eq!(
            Timestamp::from_secs(0).standard_format(),
            "1970-01-01 00:00:00 UTC"
        );
    }
}
