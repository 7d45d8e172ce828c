//! Years, months, weekdays, and the breakdown of a time value into its
//! calendar fields.

use std::fmt;

use crate::cal::{DatePiece, TimePiece};
use crate::cal::arith::{self, MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND};
use crate::cal::fmt::ISO;

use self::Month::*;
use self::Weekday::*;


/// A single year.
///
/// This is just a wrapper around `i64` that performs year-related tests.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Year(pub i64);

impl Year {

    /// Returns whether this year is a leap year.
    ///
    /// ### Examples
    ///
    /// ```
    /// use dateop::Year;
    ///
    /// assert_eq!(Year(2000).is_leap_year(), true);
    /// assert_eq!(Year(1900).is_leap_year(), false);
    /// ```
    pub fn is_leap_year(self) -> bool {
        arith::is_leap_year(i128::from(self.0))
    }
}


/// Number of days guaranteed to be in four years.
const DAYS_IN_4Y:   i64 = 365 *   4 +  1;

/// Number of days guaranteed to be in a hundred years.
const DAYS_IN_100Y: i64 = 365 * 100 + 24;

/// Number of days guaranteed to be in four hundred years.
const DAYS_IN_400Y: i64 = 365 * 400 + 97;

/// Number of days between **1st January, 1970** and **1st March, 2000**.
///
/// Counting from just after a possible leap day, at the start of a
/// 400-year cycle, reduces the breakdown below to plain division.
const EPOCH_DIFFERENCE: i64 = 30 * 365   // 30 years between 2000 and 1970...
                            + 7          // plus seven days for leap years...
                            + 31 + 29;   // plus all the days in January and February in 2000.

/// Days elapsed at the end of each month, starting at the beginning of
/// March (the first month after the EPOCH above), going backwards,
/// ignoring February.
const TIME_TRIANGLE: &[i64; 11] =
    &[31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30 + 31 + 31,  // January
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30 + 31,  // December
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30,  // November
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31,  // October
      31 + 30 + 31 + 30 + 31 + 31 + 30,  // September
      31 + 30 + 31 + 30 + 31 + 31,  // August
      31 + 30 + 31 + 30 + 31,  // July
      31 + 30 + 31 + 30,  // June
      31 + 30 + 31,  // May
      31 + 30,  // April
      31]; // March

static MONTHS: &[Month] = &[
    January,  February,  March,
    April,    May,       June,
    July,     August,    September,
    October,  November,  December,
];

static WEEKDAYS: &[Weekday] = &[
    Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday,
];


/// The calendar fields of a single instant, as read in some time zone.
///
/// Unlike the fields a date is built from, these are always in range: the
/// month is a `Month`, the day is valid for it, and the time is within a
/// single day.
#[derive(PartialEq, Eq, Clone, Copy)]
pub struct DateFields {
    year:        i64,
    month:       Month,
    day:         i8,
    yearday:     i16,
    weekday:     Weekday,
    hour:        i8,
    minute:      i8,
    second:      i8,
    millisecond: i16,
}

impl DateFields {

    /// Breaks a number of milliseconds since **midnight, 1st January,
    /// 1970** into calendar fields.
    ///
    /// No time zone is involved here: to read local fields, add the
    /// zone’s offset to the time value first.
    ///
    /// ### Examples
    ///
    /// ```
    /// use dateop::{DateFields, Month, DatePiece, TimePiece};
    ///
    /// let fields = DateFields::from_epoch_millis(1_234_567_890_123);
    /// assert_eq!(fields.year(), 2009);
    /// assert_eq!(fields.month(), Month::February);
    /// assert_eq!(fields.day(), 13);
    /// assert_eq!(fields.hour(), 23);
    /// assert_eq!(fields.millisecond(), 123);
    /// ```
    pub fn from_epoch_millis(millis: i64) -> Self {
        let (days, ms) = split_cycles(millis, MS_PER_DAY);
        let mut fields = Self::from_days_since_epoch(days - EPOCH_DIFFERENCE);

        // split_cycles keeps `ms` within a single day, so every one of
        // these fits its narrower type.
        fields.hour        = (ms / MS_PER_HOUR) as i8;
        fields.minute      = (ms / MS_PER_MINUTE % 60) as i8;
        fields.second      = (ms / MS_PER_SECOND % 60) as i8;
        fields.millisecond = (ms % MS_PER_SECOND) as i16;
        fields
    }

    /// Computes the date fields given the number of days that have passed
    /// since the EPOCH, leaving the time at midnight.
    fn from_days_since_epoch(days: i64) -> Self {

        // The Gregorian calendar works in 400-year cycles, which repeat
        // themselves ever after.
        let (num_400y_cycles, mut remainder) = split_cycles(days, DAYS_IN_400Y);

        let num_100y_cycles = remainder / DAYS_IN_100Y;
        remainder -= num_100y_cycles * DAYS_IN_100Y;  // days left in this 100-year cycle

        let num_4y_cycles = remainder / DAYS_IN_4Y;
        remainder -= num_4y_cycles * DAYS_IN_4Y;  // days left in this 4-year cycle

        let mut years = std::cmp::min(remainder / 365, 3);
        remainder -= years * 365;  // days left in this year

        // The leap day sits at the very end of each cycle, so a cycle’s
        // first year is the only one that can contain a 29th of February
        // counting from January, except where a 100-year cycle begins
        // without a 400-year one.
        let days_this_year =
            if years == 0 && !(num_4y_cycles == 0 && num_100y_cycles != 0) { 366 }
                                                                      else { 365 };

        // 306 is the number of days in a year excluding January and
        // February, which come at the end when counting from March.
        let mut day_of_year = remainder + days_this_year - 306;
        if day_of_year >= days_this_year {
            day_of_year -= days_this_year;
        }

        years +=   4 * num_4y_cycles
               + 100 * num_100y_cycles
               + 400 * num_400y_cycles;

        // It’s “11 - index” below because the triangle goes backwards.
        let result = TIME_TRIANGLE.iter()
                                  .enumerate()
                                  .find(|&(_, days)| *days <= remainder);

        let (mut month, month_days) = match result {
            Some((index, days)) => (11 - index, remainder - *days),
            None => (0, remainder),  // No month found? Then it’s February.
        };

        // Counting started in March.
        month += 2;

        if month >= 12 {
            years += 1;
            month -= 12;
        }

        Self {
            year:        years + 2000,
            month:       MONTHS[month],
            day:         (month_days + 1) as i8,
            yearday:     (day_of_year + 1) as i16,
            weekday:     days_to_weekday(days),
            hour:        0,
            minute:      0,
            second:      0,
            millisecond: 0,
        }
    }

    /// The number of milliseconds since midnight.
    pub(crate) fn time_within_day(&self) -> i64 {
        i64::from(self.hour)   * MS_PER_HOUR
      + i64::from(self.minute) * MS_PER_MINUTE
      + i64::from(self.second) * MS_PER_SECOND
      + i64::from(self.millisecond)
    }
}

impl DatePiece for DateFields {
    fn year(&self) -> i64 { self.year }
    fn month(&self) -> Month { self.month }
    fn day(&self) -> i8 { self.day }
    fn yearday(&self) -> i16 { self.yearday }
    fn weekday(&self) -> Weekday { self.weekday }
}

impl TimePiece for DateFields {
    fn hour(&self) -> i8 { self.hour }
    fn minute(&self) -> i8 { self.minute }
    fn second(&self) -> i8 { self.second }
    fn millisecond(&self) -> i16 { self.millisecond }
}

impl fmt::Debug for DateFields {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "DateFields({})", self.iso())
    }
}


/// Computes the weekday, given the number of days that have passed
/// since the EPOCH.
fn days_to_weekday(days: i64) -> Weekday {
    // March 1st, 2000 was a Wednesday, so add 3 to the number of days.
    WEEKDAYS[(days + 3).rem_euclid(7) as usize]
}

/// Split a number of periods into a number of whole cycles, and the
/// number of periods left over that don’t fit into a cycle.
///
/// This is essentially a division operation with the result and the
/// remainder, with the difference that a negative value gets ‘wrapped
/// around’ to be a positive value, owing to the way the modulo operator
/// works for negative values.
fn split_cycles(number_of_periods: i64, cycle_length: i64) -> (i64, i64) {
    let mut cycles    = number_of_periods / cycle_length;
    let mut remainder = number_of_periods % cycle_length;

    if remainder < 0 {
        remainder += cycle_length;
        cycles    -= 1;
    }

    (cycles, remainder)
}


/// A month of the year, starting with January, and ending with December.
///
/// This is stored as an enum instead of just a number to prevent
/// off-by-one errors: is month 2 February (1-indexed) or March (0-indexed)?
/// In this case, it’s 1-indexed, to have January become 1 when you use
/// `as i32` in code. The constructors in this crate take 0-indexed month
/// numbers, so use `months_from_january` to get one of those.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash)]
pub enum Month {
    January =  1, February =  2, March     =  3,
    April   =  4, May      =  5, June      =  6,
    July    =  7, August   =  8, September =  9,
    October = 10, November = 11, December  = 12,
}

impl Month {

    /// The 0-based month number, with January as **Month 0**.
    pub fn months_from_january(self) -> usize {
        self as usize - 1
    }

    /// Returns the month based on a number, with January as **Month 0**,
    /// February as **Month 1**, and so on.
    ///
    /// ```rust
    /// use dateop::Month;
    /// assert_eq!(Month::from_zero(5), Some(Month::June));
    /// assert!(Month::from_zero(12).is_none());
    /// ```
    pub fn from_zero(month: i8) -> Option<Self> {
        usize::try_from(month).ok().and_then(|m| MONTHS.get(m)).copied()
    }
}


/// A named day of the week.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum Weekday {
    Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday,
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::cal::arith::{make_date, make_day, make_time};

    fn millis(year: i64, month: i64, day: i64) -> i64 {
        make_date(make_day(year, month, day), 0) as i64
    }

    #[test]
    fn epoch() {
        let fields = DateFields::from_epoch_millis(0);
        assert_eq!(fields.year(), 1970);
        assert_eq!(fields.month(), January);
        assert_eq!(fields.day(), 1);
        assert_eq!(fields.weekday(), Thursday);
        assert_eq!(fields.yearday(), 1);
    }

    #[test]
    fn one_millisecond_before_the_epoch() {
        let fields = DateFields::from_epoch_millis(-1);
        assert_eq!(fields.year(), 1969);
        assert_eq!(fields.month(), December);
        assert_eq!(fields.day(), 31);
        assert_eq!(fields.hour(), 23);
        assert_eq!(fields.minute(), 59);
        assert_eq!(fields.second(), 59);
        assert_eq!(fields.millisecond(), 999);
    }

    #[test]
    fn breakdown_matches_make_day() {
        for &(y, m, d) in &[(1970, 0, 1), (1, 0, 1), (0, 1, 29), (-753, 11, 1),
                            (1989, 10, 10), (2000, 1, 29), (2100, 1, 28), (275760, 8, 13)] {
            let fields = DateFields::from_epoch_millis(millis(y, m, d));
            assert_eq!(fields.year(), y);
            assert_eq!(fields.month().months_from_january() as i64, m);
            assert_eq!(i64::from(fields.day()), d);
        }
    }

    #[test]
    fn yearday_in_leap_year() {
        let fields = DateFields::from_epoch_millis(millis(2016, 11, 31));
        assert_eq!(fields.yearday(), 366);
    }

    #[test]
    fn time_within_day() {
        let ms = make_date(make_day(2009, 1, 13), make_time(23, 31, 30, 5)) as i64;
        let fields = DateFields::from_epoch_millis(ms);
        assert_eq!(fields.time_within_day(), make_time(23, 31, 30, 5) as i64);
    }

    #[test]
    fn month_numbers() {
        assert_eq!(Month::from_zero(0), Some(January));
        assert_eq!(Month::from_zero(11), Some(December));
        assert_eq!(Month::from_zero(-1), None);
        assert_eq!(December.months_from_january(), 11);
    }

    #[test]
    fn debug() {
        let fields = DateFields::from_epoch_millis(millis(-753, 11, 1));
        assert_eq!(format!("{:?}", fields), "DateFields(-0753-12-01T00:00:00.000)");
    }
}
