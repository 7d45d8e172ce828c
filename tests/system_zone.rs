use dateop::{from_local_moment, from_moment, DateValue, DatePiece, Month, Moment, SystemTimeZone, TimePiece, TimeZone};


#[test]
fn reads_back_the_same_fields() {
    let fields = from_moment(1995, 5, 15, 10, 30, 0, 0).fields_local().unwrap();

    assert_eq!(fields.year(),        1995);
    assert_eq!(fields.month(),       Month::June);
    assert_eq!(fields.day(),         15);
    assert_eq!(fields.hour(),        10);
    assert_eq!(fields.minute(),      30);
    assert_eq!(fields.second(),      0);
    assert_eq!(fields.millisecond(), 0);
}

#[test]
fn the_year_five_is_not_1905() {
    let fields = from_moment(5, 0, 1, 0, 0, 0, 0).fields_local().unwrap();
    assert_eq!(fields.year(), 5);
}

#[test]
fn local_and_utc_differ_by_the_local_offset() {
    let local = from_moment(1995, 5, 15, 10, 30, 0, 0).epoch_millis().unwrap();
    let utc = from_local_moment(1995, 5, 15, 10, 30, 0, 0).epoch_millis().unwrap();

    let offset = SystemTimeZone.offset_at(local);
    assert_eq!(utc - local, offset * 1000);
}

#[test]
fn month_thirteen_rolls_over() {
    assert_eq!(from_moment(2020, 13, 1, 0, 0, 0, 0), from_moment(2021, 1, 1, 0, 0, 0, 0));
}

#[test]
fn round_trip_through_fields() {
    let date = from_moment(2009, 1, 13, 23, 31, 30, 250);
    let moment = date.to_moment_in(&SystemTimeZone).unwrap();
    assert_eq!(DateValue::local(moment), date);
}

#[test]
fn default_constructor_is_the_system_zone() {
    let moment = Moment::new(1984, 3, 1, 12, 0, 0, 0);
    assert_eq!(DateValue::local(moment), DateValue::local_in(&SystemTimeZone, moment));
}
