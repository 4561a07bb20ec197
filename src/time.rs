use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};

/// The span of valid times covered by a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeRange {
    /// Returns the smallest range containing all `times`, or `None` if there
    /// are none.
    pub fn spanning<I>(times: I) -> Option<Self>
    where
        I: IntoIterator<Item = DateTime<Utc>>,
    {
        times.into_iter().fold(None, |range, time| match range {
            None => Some(Self {
                start: time,
                end: time,
            }),
            Some(Self { start, end }) => Some(Self {
                start: start.min(time),
                end: end.max(time),
            }),
        })
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", format_time(&self.start), format_time(&self.end))
    }
}

/// Formats a time as RFC 3339 with seconds and a `Z` suffix.
pub fn format_time(time: &DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}
