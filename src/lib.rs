#![crate_name = "dateop"]
#![crate_type = "rlib"]

#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]

#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused_qualifications)]
#![warn(unused_results)]

//! Building dates out of year, month, day, hour, minute, second, and
//! millisecond fields, the way the classic platform date type does it.
//!
//! Months count from zero, nothing is ever rejected (month 13 is February
//! of the next year), and the date can be read either in local time or
//! in UTC.
//!
//! # Examples
//!
//! ```
//! use dateop::{from_moment, from_local_moment, Month, DatePiece};
//!
//! let date = from_moment(1995, 5, 15, 10, 30, 0, 0);
//! let fields = date.fields_local().unwrap();
//! assert_eq!(fields.year(), 1995);
//! assert_eq!(fields.month(), Month::June);
//!
//! let date = from_local_moment(1970, 0, 1, 0, 0, 0, 0);
//! assert_eq!(date.epoch_millis(), Some(0));
//! ```

pub mod cal;
pub mod exports;
pub mod instant;
pub mod moment;
mod system;
mod util;

pub use crate::cal::{DateFields, DatePiece, TimePiece, Month, Weekday, Year};
pub use crate::cal::{Offset, SystemTimeZone, TimeZone};
pub use crate::cal::zone::StaticTimeZone;
pub use crate::exports::{exports_for, forget_runtime, from_local_moment, from_moment, Exports, RuntimeId};
pub use crate::instant::Instant;
pub use crate::moment::{DateValue, Moment, YearStyle};
