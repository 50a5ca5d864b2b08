//! Recency window for "new release" detection.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// One average month (30.4375 days), in seconds.
pub const DEFAULT_RECENCY_SECS: i64 = 2_629_800;

/// The span after a release date during which a shoe counts as new.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecencyWindow {
    secs: i64,
}

impl RecencyWindow {
    /// Create a window spanning `secs` seconds.
    pub fn from_secs(secs: i64) -> Self {
        Self { secs }
    }

    /// Create a window spanning whole days.
    pub fn from_days(days: i64) -> Self {
        Self::from_secs(days.saturating_mul(24 * 60 * 60))
    }

    /// Length of the window in seconds.
    pub fn as_secs(&self) -> i64 {
        self.secs
    }

    /// Length of the window as a chrono duration.
    ///
    /// `None` when the window is too long for a duration to hold. An
    /// oversized positive window never closes and an oversized negative one
    /// never opens.
    pub fn span(&self) -> Option<Duration> {
        Duration::try_seconds(self.secs)
    }

    /// Check whether `release_date` falls inside the window ending at `now`.
    ///
    /// Future release dates are inside the window.
    pub fn contains(&self, release_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match self.span() {
            Some(span) => now.signed_duration_since(release_date) < span,
            None => self.secs > 0,
        }
    }
}

impl Default for RecencyWindow {
    fn default() -> Self {
        Self::from_secs(DEFAULT_RECENCY_SECS)
    }
}

/// Check whether a shoe released at `release_date` is a new release at `now`,
/// using the default window.
pub fn is_new_release(release_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    RecencyWindow::default().contains(release_date, now)
}
