//! The two constructors as a host runtime sees them.
//!
//! A host calls `from_moment` and `from_local_moment` with seven plain
//! numbers. Each runtime instance asks for the table of exported functions
//! once, through `exports_for`, and gets the same table back every time
//! after that.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use lazy_static::lazy_static;
use log::debug;

use crate::moment::{DateValue, Moment};


/// The shape every exported constructor has: year, 0-based month, day,
/// hour, minute, second, and millisecond.
pub type Constructor = fn(i64, i64, i64, i64, i64, i64, i64) -> DateValue;

/// Builds a date value from fields in the system’s local time zone.
///
/// Years from 0 to 99 are taken literally.
#[allow(clippy::too_many_arguments)]
pub fn from_moment(year: i64, month: i64, day: i64, hour: i64, minute: i64, second: i64, millisecond: i64) -> DateValue {
    DateValue::local(Moment::new(year, month, day, hour, minute, second, millisecond))
}

/// Builds a date value from fields read as **UTC**, despite the name,
/// which has been kept for existing callers.
///
/// Years from 0 to 99 are read as 1900 to 1999 here.
#[allow(clippy::too_many_arguments)]
pub fn from_local_moment(year: i64, month: i64, day: i64, hour: i64, minute: i64, second: i64, millisecond: i64) -> DateValue {
    DateValue::utc(Moment::new(year, month, day, hour, minute, second, millisecond))
}


/// Identifies one instance of a host runtime.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash)]
pub struct RuntimeId(pub u64);

/// The table of functions exported to a host runtime.
#[derive(Debug, Clone, Copy)]
pub struct Exports {
    pub from_moment: Constructor,
    pub from_local_moment: Constructor,
}

impl Exports {

    /// The names the functions are exported under, in the host’s own
    /// naming style.
    pub const NAMES: &'static [&'static str] = &["fromMoment", "fromLocalMoment"];

    fn build() -> Self {
        Self {
            from_moment,
            from_local_moment,
        }
    }

    /// Looks up an exported function by its host name. The Rust-style
    /// snake case names work too.
    pub fn get(&self, name: &str) -> Option<Constructor> {
        match name {
            "fromMoment"      | "from_moment"       => Some(self.from_moment),
            "fromLocalMoment" | "from_local_moment" => Some(self.from_local_moment),
            _                                       => None,
        }
    }
}


lazy_static! {
    static ref REGISTRY: Mutex<HashMap<RuntimeId, Arc<Exports>>> = Mutex::new(HashMap::new());
}

/// Returns the export table for the given runtime, building it the first
/// time that runtime asks.
pub fn exports_for(runtime: RuntimeId) -> Arc<Exports> {
    let mut registry = REGISTRY.lock().unwrap_or_else(PoisonError::into_inner);

    let exports = registry.entry(runtime).or_insert_with(|| {
        debug!("Building export table for runtime {:?}", runtime);
        Arc::new(Exports::build())
    });

    Arc::clone(exports)
}

/// Drops the export table for a runtime that has gone away. Returns
/// whether there was one.
///
/// Anyone still holding the old table can keep using it; the runtime
/// gets a fresh one if it asks again.
pub fn forget_runtime(runtime: RuntimeId) -> bool {
    let mut registry = REGISTRY.lock().unwrap_or_else(PoisonError::into_inner);
    let removed = registry.remove(&runtime).is_some();

    if removed {
        debug!("Forgot export table for runtime {:?}", runtime);
    }

    removed
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn lookup_by_name() {
        let exports = Exports::build();
        for name in Exports::NAMES {
            assert!(exports.get(name).is_some(), "{} should be exported", name);
        }
        assert!(exports.get("from_local_moment").is_some());
        assert!(exports.get("toMoment").is_none());
    }

    #[test]
    fn exported_local_moment_is_utc() {
        let construct = Exports::build().get("fromLocalMoment").unwrap();
        assert_eq!(construct(1970, 0, 1, 0, 0, 0, 1).epoch_millis(), Some(1));
    }
}
