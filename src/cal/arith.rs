//! Day and time arithmetic on unbounded fields.
//!
//! Every function here accepts any value for any field and carries the
//! excess into the next unit up, so the 32nd of January is the 1st of
//! February and month 13 is February of the following year. Nothing is
//! rejected: values that land outside the range of a time value are only
//! dropped by `time_clip`, right at the end.
//!
//! Intermediate results are kept as `i128`, which is wide enough that no
//! combination of `i64` fields can overflow before the clip.

use crate::util::RangeExt;


pub(crate) const MS_PER_SECOND: i64 = 1000;
pub(crate) const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
pub(crate) const MS_PER_HOUR:   i64 = 60 * MS_PER_MINUTE;
pub(crate) const MS_PER_DAY:    i64 = 24 * MS_PER_HOUR;

/// The furthest a time value may be from the Unix epoch, in either
/// direction: exactly 100,000,000 days.
pub(crate) const MAX_TIME_VALUE: i64 = 100_000_000 * MS_PER_DAY;

/// Days elapsed in a common year before the first of each month.
const DAYS_BEFORE_MONTH: [i128; 12] =
    [  0,  31,  59,  90, 120, 151,
     181, 212, 243, 273, 304, 334];


/// Applies the two-digit-year convention: years from 0 to 99 are taken to
/// mean 1900 to 1999. Every other year is left alone.
pub(crate) fn full_year(year: i64) -> i64 {
    if year.is_within(0..100) { year + 1900 }
                         else { year }
}

/// Gregorian leap year rule, valid for negative years too.
pub(crate) fn is_leap_year(year: i128) -> bool {
    year % 400 == 0 || (year % 100 != 0 && year % 4 == 0)
}

/// The day number of the first of January of the given year, counting
/// the 1st of January 1970 as day zero.
fn day_from_year(year: i128) -> i128 {
    365 * (year - 1970)
        + (year - 1969).div_euclid(4)
        - (year - 1901).div_euclid(100)
        + (year - 1601).div_euclid(400)
}

/// Computes the day number of the given year, 0-based month, and 1-based
/// day of the month.
///
/// The month is carried into the year first, then the day is added on
/// without any checks, so both roll over freely.
pub(crate) fn make_day(year: i64, month: i64, day: i64) -> i128 {
    let month = i128::from(month);
    let year = i128::from(year) + month.div_euclid(12);

    // rem_euclid keeps this in 0..12
    let month = month.rem_euclid(12) as usize;
    let leap_day = if month >= 2 && is_leap_year(year) { 1 } else { 0 };

    day_from_year(year) + DAYS_BEFORE_MONTH[month] + leap_day + i128::from(day) - 1
}

/// Computes the number of milliseconds described by the given time
/// fields. Negative and oversized fields are fine.
pub(crate) fn make_time(hour: i64, minute: i64, second: i64, millisecond: i64) -> i128 {
    i128::from(hour)   * i128::from(MS_PER_HOUR)
  + i128::from(minute) * i128::from(MS_PER_MINUTE)
  + i128::from(second) * i128::from(MS_PER_SECOND)
  + i128::from(millisecond)
}

/// Combines a day number and a time within that day into milliseconds
/// since the epoch.
pub(crate) fn make_date(day: i128, time: i128) -> i128 {
    day * i128::from(MS_PER_DAY) + time
}

/// Narrows a computed time to a time value, or `None` if it lies outside
/// the representable range.
pub(crate) fn time_clip(time: i128) -> Option<i64> {
    i64::try_from(time)
        .ok()
        .filter(|t| t.is_within(-MAX_TIME_VALUE .. MAX_TIME_VALUE + 1))
}
