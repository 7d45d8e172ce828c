//! Exact points on a timeline.

use std::fmt;

use crate::cal::arith::MS_PER_SECOND;


/// An **instant** is an exact point on the timeline, irrespective of time
/// zone or calendar format, with millisecond precision.
///
/// Internally, this is represented by a 64-bit integer of seconds, and a
/// 16-bit integer of milliseconds that is always between 0 and 999, so an
/// instant just before the epoch is -1 seconds and 999 milliseconds.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct Instant {
    seconds: i64,
    milliseconds: i16,
}

impl Instant {

    /// Creates a new Instant set to the number of seconds since the Unix
    /// epoch, and zero milliseconds.
    pub fn at(seconds: i64) -> Self {
        Self { seconds, milliseconds: 0 }
    }

    /// Creates a new Instant set to the number of seconds since the
    /// Unix epoch, along with the number of milliseconds so far this
    /// second. Milliseconds outside 0 to 999 carry into the seconds.
    pub fn at_ms(seconds: i64, milliseconds: i16) -> Self {
        let milliseconds = i64::from(milliseconds);
        Self {
            seconds:      seconds + milliseconds.div_euclid(MS_PER_SECOND),
            milliseconds: milliseconds.rem_euclid(MS_PER_SECOND) as i16,
        }
    }

    /// Creates a new Instant from a number of milliseconds since the Unix
    /// epoch.
    pub fn from_epoch_millis(millis: i64) -> Self {
        Self {
            seconds:      millis.div_euclid(MS_PER_SECOND),
            milliseconds: millis.rem_euclid(MS_PER_SECOND) as i16,
        }
    }

    /// Creates a new Instant set to the Unix epoch.
    pub fn at_epoch() -> Self {
        Self::at(0)
    }

    /// Returns the number of seconds at this instant
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Returns the number of milliseconds at this instant
    pub fn milliseconds(&self) -> i16 {
        self.milliseconds
    }

    /// Returns the whole instant as milliseconds since the Unix epoch.
    pub fn epoch_millis(&self) -> i64 {
        self.seconds * MS_PER_SECOND + i64::from(self.milliseconds)
    }
}

impl fmt::Debug for Instant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Instant({}s/{}ms)", self.seconds, self.milliseconds)
    }
}
