//! Calendar calculations: turning year, month, and day fields into day
//! numbers and back again, following the platform date type’s rules.

pub(crate) mod arith;
pub(crate) mod datetime;
pub(crate) mod fmt;
pub(crate) mod offset;
pub mod zone;

pub use self::datetime::{DateFields, Month, Weekday, Year};
pub use self::offset::{Error, Offset};
pub use self::zone::{SystemTimeZone, TimeZone};


/// The **date piece** trait is used for date and time values that have
/// date components of years, months, and days.
pub trait DatePiece {

    /// The year, in absolute terms.
    /// This is in human-readable format, so the year 2014 actually has a
    /// year value of 2014, rather than 14 or 114 or anything like that.
    fn year(&self) -> i64;

    /// The month of the year.
    fn month(&self) -> Month;

    /// The day of the month, from 1 to 31.
    fn day(&self) -> i8;

    /// The day of the year, from 1 to 366.
    fn yearday(&self) -> i16;

    /// The day of the week.
    fn weekday(&self) -> Weekday;
}


/// The **time piece** trait is used for date and time values that have
/// time components of hours, minutes, and seconds.
pub trait TimePiece {

    /// The hour of the day.
    fn hour(&self) -> i8;

    /// The minute of the hour.
    fn minute(&self) -> i8;

    /// The second of the minute.
    fn second(&self) -> i8;

    /// The millisecond of the second.
    fn millisecond(&self) -> i16;
}
