//! Building date values out of calendar fields.
//!
//! A `Moment` is the seven raw fields a date gets built from, and a
//! `DateValue` is the instant they turn out to name. Construction follows
//! the classic platform date type: months count from zero, and any field
//! that is out of range spills over into its neighbours rather than being
//! rejected.
//!
//! The same platform type reads years from 0 to 99 as 1900 to 1999. The
//! local constructor undoes that, so year 5 means the year 5; the UTC
//! constructor, for compatibility, does not unless asked to with
//! `YearStyle::Literal`.

use std::fmt;

use crate::cal::{DateFields, TimeZone};
use crate::cal::arith::{self, MS_PER_DAY};
use crate::cal::fmt::ISO;
use crate::cal::zone::SystemTimeZone;
use crate::cal::{DatePiece, Offset};
use crate::instant::Instant;
use crate::util::RangeExt;


/// The seven fields a date value is built from.
///
/// None of them are checked. `month` counts from 0 for January, `day`
/// counts from 1, and every field rolls over into the next larger one when
/// it goes past its usual range, in either direction.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default, Hash)]
pub struct Moment {
    pub year:        i64,
    pub month:       i64,
    pub day:         i64,
    pub hour:        i64,
    pub minute:      i64,
    pub second:      i64,
    pub millisecond: i64,
}

impl Moment {

    /// Bundles up the seven fields, in the order they are always given.
    #[allow(clippy::too_many_arguments)]
    pub fn new(year: i64, month: i64, day: i64, hour: i64, minute: i64, second: i64, millisecond: i64) -> Self {
        Self { year, month, day, hour, minute, second, millisecond }
    }

    /// A moment at midnight at the start of the given day.
    pub fn ymd(year: i64, month: i64, day: i64) -> Self {
        Self::new(year, month, day, 0, 0, 0, 0)
    }

    /// Counts these fields up into milliseconds, reading the year through
    /// the two-digit-year convention. No time zone is involved yet.
    fn to_unzoned_millis(self) -> i128 {
        let day  = arith::make_day(arith::full_year(self.year), self.month, self.day);
        let time = arith::make_time(self.hour, self.minute, self.second, self.millisecond);
        arith::make_date(day, time)
    }

    /// Whether the year is one the two-digit-year convention would
    /// rewrite.
    fn has_two_digit_year(self) -> bool {
        self.year.is_within(0..100)
    }
}

impl From<DateFields> for Moment {
    fn from(fields: DateFields) -> Self {
        use crate::cal::TimePiece;

        Self {
            year:        fields.year(),
            month:       fields.month().months_from_january() as i64,
            day:         i64::from(fields.day()),
            hour:        i64::from(fields.hour()),
            minute:      i64::from(fields.minute()),
            second:      i64::from(fields.second()),
            millisecond: i64::from(fields.millisecond()),
        }
    }
}


/// How a constructor treats years from 0 to 99.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum YearStyle {

    /// Leave the platform’s reading alone: 0 to 99 mean 1900 to 1999.
    Legacy,

    /// Overwrite the year with the literal value once everything else has
    /// rolled over, so year 5 stays year 5.
    Literal,
}


/// An exact instant, built from calendar fields.
///
/// Like the platform date type it imitates, a value can be *invalid*: if
/// the fields describe an instant further than 100,000,000 days from the
/// epoch, the value is kept but has no instant and no fields.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct DateValue {
    time: Option<i64>,
}

impl DateValue {

    /// Builds a date value from fields in the system’s local time zone.
    ///
    /// Years from 0 to 99 are taken literally.
    ///
    /// ### Examples
    ///
    /// ```
    /// use dateop::{DateValue, Moment, DatePiece};
    ///
    /// let date = DateValue::local(Moment::ymd(5, 0, 1));
    /// assert_eq!(date.fields_local().unwrap().year(), 5);
    /// ```
    pub fn local(moment: Moment) -> Self {
        Self::local_in(&SystemTimeZone, moment)
    }

    /// Builds a date value from fields in the given time zone, taking
    /// years from 0 to 99 literally.
    pub fn local_in<Z: TimeZone + ?Sized>(zone: &Z, moment: Moment) -> Self {
        Self::construct(zone, moment, YearStyle::Literal)
    }

    /// Builds a date value from fields read as UTC.
    ///
    /// This keeps the platform’s two-digit-year reading, so year 5 comes
    /// out as 1905. Use `utc_with` and `YearStyle::Literal` to avoid it.
    ///
    /// ### Examples
    ///
    /// ```
    /// use dateop::{DateValue, Moment};
    ///
    /// let date = DateValue::utc(Moment::new(2009, 1, 13, 23, 31, 30, 0));
    /// assert_eq!(date.epoch_millis(), Some(1_234_567_890_000));
    /// ```
    pub fn utc(moment: Moment) -> Self {
        Self::utc_with(moment, YearStyle::Legacy)
    }

    /// Builds a date value from fields read as UTC, with the given
    /// treatment of years from 0 to 99.
    pub fn utc_with(moment: Moment, style: YearStyle) -> Self {
        Self::construct(&Offset::utc(), moment, style)
    }

    fn construct<Z: TimeZone + ?Sized>(zone: &Z, moment: Moment, style: YearStyle) -> Self {
        let date = Self { time: to_time_value(zone, moment.to_unzoned_millis()) };

        if style == YearStyle::Literal && moment.has_two_digit_year() {
            date.with_full_year(zone, moment.year)
        }
        else {
            date
        }
    }

    /// Replaces the year as read in the given zone, keeping the month, day,
    /// and time of day, and rolling over if that day doesn’t exist in the
    /// new year.
    ///
    /// An invalid value is treated as midnight on the 1st of January, so
    /// this always produces a date in the new year if it can.
    fn with_full_year<Z: TimeZone + ?Sized>(self, zone: &Z, year: i64) -> Self {
        let (month, day, time_within_day) = match self.time.and_then(|time| local_millis(zone, time)) {
            Some(local) => {
                let fields = DateFields::from_epoch_millis(local);
                (fields.month().months_from_january() as i64, i64::from(fields.day()), fields.time_within_day())
            }
            None => (0, 1, 0),
        };

        let day = arith::make_day(year, month, day);
        let local = arith::make_date(day, i128::from(time_within_day));
        Self { time: to_time_value(zone, local) }
    }

    /// Creates a date value directly from milliseconds since the Unix
    /// epoch. It is invalid if that is out of range.
    pub fn from_epoch_millis(millis: i64) -> Self {
        Self { time: arith::time_clip(i128::from(millis)) }
    }

    /// Creates a date value at the given instant.
    pub fn from_instant(instant: Instant) -> Self {
        Self::from_epoch_millis(instant.epoch_millis())
    }

    /// Creates an invalid date value.
    pub fn invalid() -> Self {
        Self { time: None }
    }

    /// Whether this value names an instant at all.
    pub fn is_valid(&self) -> bool {
        self.time.is_some()
    }

    /// Milliseconds since the Unix epoch, if valid.
    pub fn epoch_millis(&self) -> Option<i64> {
        self.time
    }

    pub fn to_instant(&self) -> Option<Instant> {
        self.time.map(Instant::from_epoch_millis)
    }

    /// The calendar fields of this value in UTC.
    pub fn fields_utc(&self) -> Option<DateFields> {
        self.time.map(DateFields::from_epoch_millis)
    }

    /// The calendar fields of this value in the system’s local time zone.
    pub fn fields_local(&self) -> Option<DateFields> {
        self.fields_in(&SystemTimeZone)
    }

    /// The calendar fields of this value in the given time zone.
    ///
    /// Returns `None` if the value is invalid, or if the zone’s offset
    /// moves it so far that it can’t be read as calendar fields.
    pub fn fields_in<Z: TimeZone + ?Sized>(&self, zone: &Z) -> Option<DateFields> {
        self.time.and_then(|time| local_millis(zone, time)).map(DateFields::from_epoch_millis)
    }

    /// The fields of this value in the given zone, in a form that can be
    /// passed straight back into a constructor.
    pub fn to_moment_in<Z: TimeZone + ?Sized>(&self, zone: &Z) -> Option<Moment> {
        self.fields_in(zone).map(Moment::from)
    }
}

impl fmt::Debug for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.fields_utc() {
            Some(fields) => write!(f, "DateValue({}Z)", fields.iso()),
            None         => write!(f, "DateValue(Invalid)"),
        }
    }
}


/// Shifts a time value into the zone’s wall-clock time, if the result is
/// still within a day of the time-value range.
fn local_millis<Z: TimeZone + ?Sized>(zone: &Z, time: i64) -> Option<i64> {
    let local = i128::from(time) + i128::from(zone.offset_at(time)) * 1000;
    let limit = local_limit();

    if local.is_within(-limit .. limit + 1) {
        i64::try_from(local).ok()
    }
    else {
        None
    }
}

/// How far from the epoch a local time value can be and still name an
/// instant. No sensible zone is more than a day away from UTC.
fn local_limit() -> i128 {
    i128::from(arith::MAX_TIME_VALUE + MS_PER_DAY)
}

/// Turns a local time in the given zone into a time value, if it can be
/// represented.
fn to_time_value<Z: TimeZone + ?Sized>(zone: &Z, local: i128) -> Option<i64> {
    // Anything further out than this can never clip back into range.
    let limit = local_limit();
    if !local.is_within(-limit .. limit + 1) {
        return None;
    }

    let local = i64::try_from(local).ok()?;
    let offset = zone.offset_at_local(local);
    arith::time_clip(i128::from(local) - i128::from(offset) * 1000)
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::cal::{Month, TimePiece};
    use crate::cal::zone::StaticTimeZone;

    fn plus_five_thirty() -> Offset {
        Offset::of_hours_and_minutes(5, 30).unwrap()
    }

    #[test]
    fn utc_epoch() {
        assert_eq!(DateValue::utc(Moment::ymd(1970, 0, 1)).epoch_millis(), Some(0));
    }

    #[test]
    fn local_in_fixed_offset() {
        let date = DateValue::local_in(&plus_five_thirty(), Moment::ymd(1970, 0, 1));
        assert_eq!(date.epoch_millis(), Some(-19_800_000));
    }

    #[test]
    fn local_and_utc_differ_by_offset() {
        let moment = Moment::new(1995, 5, 15, 10, 30, 0, 0);
        let local = DateValue::local_in(&plus_five_thirty(), moment).epoch_millis().unwrap();
        let utc = DateValue::utc(moment).epoch_millis().unwrap();
        assert_eq!(utc - local, 19_800_000);
    }

    #[test]
    fn two_digit_year_after_rollover() {
        let date = DateValue::local_in(&Offset::utc(), Moment::ymd(5, 13, 1));
        let fields = date.fields_utc().unwrap();
        assert_eq!(fields.year(), 5);
        assert_eq!(fields.month(), Month::February);
        assert_eq!(fields.day(), 1);
    }

    #[test]
    fn two_digit_year_leap_day_rolls_in_1900s() {
        // 1901 has no 29th of February, so the rollover happens first.
        let date = DateValue::local_in(&Offset::utc(), Moment::ymd(1, 1, 29));
        let fields = date.fields_utc().unwrap();
        assert_eq!(fields.year(), 1);
        assert_eq!(fields.month(), Month::March);
        assert_eq!(fields.day(), 1);
    }

    #[test]
    fn two_digit_year_keeps_time_of_day() {
        let date = DateValue::local_in(&plus_five_thirty(), Moment::new(42, 6, 4, 13, 14, 15, 16));
        let fields = date.fields_in(&plus_five_thirty()).unwrap();
        assert_eq!(fields.year(), 42);
        assert_eq!(fields.hour(), 13);
        assert_eq!(fields.minute(), 14);
        assert_eq!(fields.second(), 15);
        assert_eq!(fields.millisecond(), 16);
    }

    #[test]
    fn utc_keeps_legacy_years() {
        let date = DateValue::utc(Moment::ymd(5, 0, 1));
        assert_eq!(date.fields_utc().unwrap().year(), 1905);
    }

    #[test]
    fn utc_with_literal_years() {
        let date = DateValue::utc_with(Moment::ymd(5, 0, 1), YearStyle::Literal);
        assert_eq!(date.fields_utc().unwrap().year(), 5);
    }

    #[test]
    fn out_of_range_is_invalid() {
        let date = DateValue::utc(Moment::ymd(275_760, 8, 14));
        assert!(!date.is_valid());
        assert_eq!(date.fields_utc(), None);
        assert_eq!(format!("{:?}", date), "DateValue(Invalid)");
    }

    #[test]
    fn last_valid_day() {
        let date = DateValue::utc(Moment::ymd(275_760, 8, 13));
        assert_eq!(date.epoch_millis(), Some(arith::MAX_TIME_VALUE));
    }

    #[test]
    fn invalid_two_digit_year_starts_from_new_year() {
        let date = DateValue::local_in(&Offset::utc(), Moment::new(5, i64::MAX, 1, 0, 0, 0, 0));
        assert_eq!(format!("{:?}", date), "DateValue(0005-01-01T00:00:00.000Z)");
    }

    #[test]
    fn moment_round_trip() {
        let zone = plus_five_thirty();
        let date = DateValue::local_in(&zone, Moment::new(2020, 13, 35, 25, 61, 61, 1001));
        let moment = date.to_moment_in(&zone).unwrap();
        assert_eq!(DateValue::local_in(&zone, moment), date);
    }

    const FAR_AWAY: StaticTimeZone<'static> = StaticTimeZone {
        initial_offset: i64::MAX / 100,
        transitions: &[],
    };

    #[test]
    fn readouts_in_a_far_away_zone() {
        let date = DateValue::from_epoch_millis(0);
        assert_eq!(date.fields_in(&FAR_AWAY), None);
        assert_eq!(date.to_moment_in(&FAR_AWAY), None);
        assert!(date.fields_utc().is_some());
    }

    #[test]
    fn construction_in_a_far_away_zone() {
        assert!(!DateValue::local_in(&FAR_AWAY, Moment::ymd(5, 0, 1)).is_valid());
        assert!(!DateValue::local_in(&FAR_AWAY, Moment::ymd(2015, 0, 1)).is_valid());
    }

    #[test]
    fn readouts_just_past_the_edge() {
        let ahead = Offset::of_hours_and_minutes(14, 0).unwrap();
        let date = DateValue::from_epoch_millis(arith::MAX_TIME_VALUE);
        assert_eq!(date.fields_in(&ahead).unwrap().year(), 275_760);
    }

    #[test]
    fn debug() {
        let date = DateValue::from_epoch_millis(1_234_567_890_000);
        assert_eq!(format!("{:?}", date), "DateValue(2009-02-13T23:31:30.000Z)");
    }
}
