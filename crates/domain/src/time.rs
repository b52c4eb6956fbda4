//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp recorded when the asset directories were scanned.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}
