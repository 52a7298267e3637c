use std::{fmt, sync::Arc, time::SystemTime};

use chrono::{DateTime, FixedOffset, TimeZone, Utc};

/// An opaque timestamp.
///
/// Temporal values are atomic: the sanitizer never looks inside them and never
/// copies the timestamp. Cloning a `Temporal` clones the handle, so the pruned
/// output shares the exact allocation the input pointed at. Use
/// [`Temporal::ptr_eq`] to check that.
#[derive(Clone)]
pub struct Temporal(Arc<DateTime<Utc>>);

impl Temporal {
    #[must_use]
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(Arc::new(instant))
    }

    /// The current time.
    #[must_use]
    pub fn now() -> Self {
        Self::new(Utc::now())
    }

    pub fn instant(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Returns `true` when both handles point to the same timestamp allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// RFC 3339 rendering, used when serializing.
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339()
    }
}

impl PartialEq for Temporal {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.0 == other.0
    }
}

impl fmt::Debug for Temporal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Temporal").field(&*self.0).finish()
    }
}

impl fmt::Display for Temporal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

impl From<DateTime<Utc>> for Temporal {
    fn from(instant: DateTime<Utc>) -> Self {
        Self::new(instant)
    }
}

impl From<DateTime<FixedOffset>> for Temporal {
    fn from(instant: DateTime<FixedOffset>) -> Self {
        Self::new(instant.with_timezone(&Utc))
    }
}

impl From<SystemTime> for Temporal {
    fn from(instant: SystemTime) -> Self {
        Self::new(DateTime::<Utc>::from(instant))
    }
}

impl From<Arc<DateTime<Utc>>> for Temporal {
    fn from(instant: Arc<DateTime<Utc>>) -> Self {
        Self(instant)
    }
}

/// Converts any timezone-aware chrono timestamp.
pub(crate) fn from_datetime<Tz: TimeZone>(instant: &DateTime<Tz>) -> Temporal {
    Temporal::new(instant.with_timezone(&Utc))
}
