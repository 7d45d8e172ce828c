//! ISO-8601 rendering, used by the `Debug` implementations.

use crate::cal::{DateFields, DatePiece, Offset, TimePiece};
use crate::util::RangeExt;


/// Values that have an ISO-8601 representation.
pub(crate) trait ISO {
    fn iso(&self) -> String;
}

impl ISO for DateFields {
    fn iso(&self) -> String {
        let year = self.year();
        let date = if year.is_within(0 .. 10000) {
            format!("{:04}-{:02}-{:02}", year, self.month() as usize, self.day())
        }
        else {
            format!("{:+05}-{:02}-{:02}", year, self.month() as usize, self.day())
        };

        format!("{}T{:02}:{:02}:{:02}.{:03}",
                date, self.hour(), self.minute(), self.second(), self.millisecond())
    }
}

impl ISO for Offset {
    fn iso(&self) -> String {
        if self.is_utc() {
            return "Z".to_owned();
        }

        let sign = if self.is_negative() { '-' } else { '+' };
        let (hours, minutes, seconds) = (self.hours().abs(), self.minutes().abs(), self.seconds().abs());

        if seconds == 0 {
            format!("{}{:02}:{:02}", sign, hours, minutes)
        }
        else {
            format!("{}{:02}:{:02}:{:02}", sign, hours, minutes, seconds)
        }
    }
}
