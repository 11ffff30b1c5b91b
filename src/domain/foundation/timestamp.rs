//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Creates a new timestamp by subtracting the given number of seconds.
    pub fn minus_secs(&self, secs: i64) -> Self {
        Self(self.0 - chrono::Duration::seconds(secs))
    }

    /// Milliseconds since the Unix epoch.
    pub fn as_unix_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now();
        let ts = Timestamp::now();
        let after = Utc::now();

        assert!(ts.as_datetime() >= &before);
        assert!(ts.as_datetime() <= &after);
    }

    #[test]
    fn minus_secs_orders_before_original() {
        let ts = Timestamp::now();
        assert!(ts.minus_secs(100) < ts);
        assert_eq!(
            ts.as_unix_millis() - ts.minus_secs(100).as_unix_millis(),
            100_000
        );
    }

    #[test]
    fn timestamp_serializes_as_rfc3339() {
        let dt = DateTime::parse_from_rfc3339("2024-01-15T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let json = serde_json::to_string(&Timestamp::from_datetime(dt)).unwrap();
        assert!(json.contains("2024-01-15T10:30:00"));
    }
}
