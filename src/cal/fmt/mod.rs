//! Rendering of calendar values.

mod iso;

pub(crate) use self::iso::ISO;
