//! Time zones: the rules that say how far local wall-clock time is from
//! UTC at any given moment.

use std::sync::Once;

use log::warn;

use crate::cal::arith::{MS_PER_DAY, MS_PER_SECOND};
use crate::system::{sys_timezone, sys_utc_offset};


/// A source of UTC offsets.
///
/// Implementors only need to say what the offset is at a given UTC time
/// value. Interpreting a *local* wall-clock time is harder, because a
/// transition can make a local time happen twice or not at all; the
/// default `offset_at_local` handles that.
pub trait TimeZone {

    /// Returns the offset from UTC, in seconds east, that is in effect at
    /// the given time value (milliseconds since the Unix epoch).
    fn offset_at(&self, time: i64) -> i64;

    /// Returns the offset, in seconds, to subtract from the given local
    /// time value (wall-clock fields counted as though they were UTC) to
    /// get to the instant it names.
    ///
    /// A local time repeated by a backwards transition is read with the
    /// offset from before the transition, which is the earlier of the two
    /// instants. A local time skipped by a forwards transition also uses
    /// the offset from before it, which lands after the gap.
    fn offset_at_local(&self, local: i64) -> i64 {
        let candidates = [
            self.offset_at(local.saturating_sub(MS_PER_DAY)),
            self.offset_at(local),
            self.offset_at(local.saturating_add(MS_PER_DAY)),
        ];

        let fits = |offset: &i64| {
            self.offset_at(local.saturating_sub(offset.saturating_mul(MS_PER_SECOND))) == *offset
        };

        // More than one fits when a backwards transition repeats this
        // wall time, and none do when a forwards one skips it.
        candidates.iter().copied().filter(fits).max()
            .unwrap_or_else(|| candidates[0].min(candidates[1]).min(candidates[2]))
    }
}

impl<'a, Z: TimeZone + ?Sized> TimeZone for &'a Z {
    fn offset_at(&self, time: i64) -> i64 {
        (**self).offset_at(time)
    }

    fn offset_at_local(&self, local: i64) -> i64 {
        (**self).offset_at_local(local)
    }
}


/// The time zone the host system is configured with, read through the
/// operating system’s own local-time conversion.
///
/// If the system can’t tell us an offset, UTC is used instead.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default)]
pub struct SystemTimeZone;

impl SystemTimeZone {

    /// Attempts to determine the zoneinfo name of the system’s zone, such
    /// as “Europe/London”.
    pub fn name(&self) -> Option<String> {
        sys_timezone()
    }
}

impl TimeZone for SystemTimeZone {
    fn offset_at(&self, time: i64) -> i64 {
        static WARNED: Once = Once::new();

        sys_utc_offset(time.div_euclid(MS_PER_SECOND)).unwrap_or_else(|| {
            WARNED.call_once(|| warn!("Could not read the system time zone offset; using UTC"));
            0
        })
    }
}


/// A time zone given as a list of transitions: an offset that holds until
/// the first transition, then the offset each transition switches to.
///
/// This lets a caller hand over a zone’s rules directly, with no time
/// zone database involved. Offsets are in seconds east of UTC, and the
/// transition instants are Unix timestamps in seconds, in ascending order.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct StaticTimeZone<'a> {

    /// The offset in effect before the first transition.
    pub initial_offset: i64,

    /// Each transition instant, paired with the offset that takes over at
    /// exactly that instant.
    pub transitions: &'a [ (i64, i64) ],
}

impl<'a> TimeZone for StaticTimeZone<'a> {
    fn offset_at(&self, time: i64) -> i64 {
        let seconds = time.div_euclid(MS_PER_SECOND);

        match self.transitions.iter().take_while(|t| t.0 <= seconds).last() {
            None                => self.initial_offset,
            Some(&(_, offset))  => offset,
        }
    }
}
