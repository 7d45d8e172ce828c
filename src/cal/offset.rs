//! Fixed offsets from UTC.

use std::fmt;

use crate::cal::fmt::ISO;
use crate::cal::zone::TimeZone;
use crate::util::RangeExt;


/// A fixed offset from UTC, in seconds, that never changes.
///
/// `Offset::utc()` is the zero offset that reads as `Z`; an explicit
/// offset of zero seconds behaves identically but reads as `+00:00`.
#[derive(PartialEq, Eq, Copy, Clone, Hash)]
pub struct Offset {
    offset_seconds: Option<i32>,
}

impl Offset {

    pub fn utc() -> Self {
        Self { offset_seconds: None }
    }

    pub fn of_seconds(seconds: i32) -> Result<Self, Error> {
        if seconds.is_within(-86400..86401) {
            Ok(Self { offset_seconds: Some(seconds) })
        }
        else {
            Err(Error::OutOfRange)
        }
    }

    pub fn of_hours_and_minutes(hours: i8, minutes: i8) -> Result<Self, Error> {
        if (hours.is_positive() && minutes.is_negative())
        || (hours.is_negative() && minutes.is_positive()) {
            Err(Error::SignMismatch)
        }
        else if hours <= -24 || hours >= 24 || minutes <= -60 || minutes >= 60 {
            Err(Error::OutOfRange)
        }
        else {
            let hours = i32::from(hours);
            let minutes = i32::from(minutes);
            Self::of_seconds(hours * (60 * 60) + minutes * 60)
        }
    }

    pub fn is_utc(self) -> bool {
        self.offset_seconds.is_none()
    }

    pub fn is_negative(self) -> bool {
        self.total_seconds().is_negative()
    }

    /// The whole offset, in seconds east of UTC.
    pub fn total_seconds(self) -> i32 {
        self.offset_seconds.unwrap_or(0)
    }

    pub fn hours(self) -> i8 {
        (self.total_seconds() / 60 / 60) as i8
    }

    pub fn minutes(self) -> i8 {
        (self.total_seconds() / 60 % 60) as i8
    }

    pub fn seconds(self) -> i8 {
        (self.total_seconds() % 60) as i8
    }
}

impl TimeZone for Offset {
    fn offset_at(&self, _time: i64) -> i64 {
        i64::from(self.total_seconds())
    }

    fn offset_at_local(&self, _local: i64) -> i64 {
        i64::from(self.total_seconds())
    }
}

impl fmt::Debug for Offset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Offset({})", self.iso())
    }
}


/// The reasons an offset can fail to be built.
#[derive(PartialEq, Eq, Debug, Copy, Clone, thiserror::Error)]
pub enum Error {

    /// The offset is a day or more away from UTC, or one of its
    /// components is out of its usual range.
    #[error("offset field out of range")]
    OutOfRange,

    /// The hours and minutes point in different directions.
    #[error("sign mismatch")]
    SignMismatch,
}
