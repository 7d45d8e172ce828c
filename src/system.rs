//! System-dependent functions, or anything that this library is unable to
//! do without help from the OS.

use std::ffi::OsStr;
use std::path::Path;


/// Returns the offset from UTC, in seconds east, that the system’s local
/// time zone has at the given number of seconds since the Unix epoch.
///
/// Returns `None` if the system can’t convert that time.
#[cfg(any(target_os = "linux", target_os = "android", target_os = "macos", target_os = "ios",
          target_os = "freebsd", target_os = "netbsd", target_os = "openbsd", target_os = "dragonfly"))]
pub(crate) fn sys_utc_offset(seconds: i64) -> Option<i64> {
    use std::mem;

    let time = libc::time_t::try_from(seconds).ok()?;
    let mut tm: libc::tm = unsafe { mem::zeroed() };

    let result = unsafe { libc::localtime_r(&time, &mut tm) };
    if result.is_null() {
        return None;
    }

    Some(i64::from(tm.tm_gmtoff))
}

/// Returns the offset from UTC, in seconds east, that the system’s local
/// time zone has *now*. Windows only reports the current bias, so the time
/// passed in is ignored.
#[cfg(windows)]
pub(crate) fn sys_utc_offset(_seconds: i64) -> Option<i64> {
    use std::mem;
    use winapi::um::timezoneapi::{GetTimeZoneInformation, TIME_ZONE_ID_INVALID, TIME_ZONE_INFORMATION};

    const TIME_ZONE_ID_DAYLIGHT: u32 = 2;

    let mut info: TIME_ZONE_INFORMATION = unsafe { mem::zeroed() };
    let id = unsafe { GetTimeZoneInformation(&mut info) };

    let bias_minutes = match id {
        TIME_ZONE_ID_INVALID  => return None,
        TIME_ZONE_ID_DAYLIGHT => info.Bias + info.DaylightBias,
        _                     => info.Bias + info.StandardBias,
    };

    // The bias is how far UTC is from local time, in minutes.
    Some(-i64::from(bias_minutes) * 60)
}

/// Everywhere else there’s no portable way to ask, so the caller falls
/// back to UTC.
#[cfg(not(any(windows, target_os = "linux", target_os = "android", target_os = "macos", target_os = "ios",
              target_os = "freebsd", target_os = "netbsd", target_os = "openbsd", target_os = "dragonfly")))]
pub(crate) fn sys_utc_offset(_seconds: i64) -> Option<i64> {
    None
}

/// Attempts to determine the system’s current time zone. There’s no
/// guaranteed way to do this, so this function returns `None` if no
/// timezone could be found.
pub fn sys_timezone() -> Option<String> {
    use std::fs::read_link;

    let link = read_link("/etc/localtime").ok()?;

    extract_timezone(&link).filter(|tz| !tz.is_empty())
}

/// Given a path, returns whether a valid zoneinfo timezone name can be
/// detected at the end of that path.
fn extract_timezone(path: &Path) -> Option<String> {
    let mut bits = Vec::new();

    for pathlet in path.iter().rev().take_while(|c| is_tz_component(c)) {
        bits.insert(0, pathlet.to_str()?);
    }

    Some(bits.join("/"))
}

/// Returns whether the input string could be used as a component of a
/// zoneinfo timezone name, which in this case is whether its first
/// character is a capital letter.
fn is_tz_component(component: &OsStr) -> bool {
    component.to_str()
             .and_then(|s| s.chars().next())
             .map_or(false, char::is_uppercase)
}
