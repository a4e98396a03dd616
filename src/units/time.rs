//! Time units: second (base), minute, hour.

use std::sync::OnceLock;

use crate::cache::CanonicalStore;
use crate::dimension::Time;
use crate::identity::UnitId;
use crate::unit::{Quantity, Unit};

use super::constants::{SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

/// Identity of the second.
pub const SECOND: UnitId = UnitId::new("time", "s", "s");
/// Identity of the minute.
pub const MINUTE: UnitId = UnitId::new("time", "s", "min");
/// Identity of the hour.
pub const HOUR: UnitId = UnitId::new("time", "s", "h");

/// Second, the base unit of time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Second;

impl Unit for Second {
    type Dim = Time;
    type Base = Second;

    const ID: UnitId = SECOND;
    const SYMBOL: &'static str = "s";
    const NAME: &'static str = "second";
    const SCALE: f64 = 1.0;

    fn convert_direct(from: UnitId, scalar: f64) -> Option<f64> {
        if from == MINUTE {
            Some(scalar * SECONDS_PER_MINUTE)
        } else if from == HOUR {
            Some(scalar * SECONDS_PER_HOUR)
        } else {
            None
        }
    }

    fn store() -> &'static CanonicalStore<Self> {
        static STORE: OnceLock<CanonicalStore<Second>> = OnceLock::new();
        STORE.get_or_init(CanonicalStore::new)
    }
}

/// Minute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Minute;

impl Unit for Minute {
    type Dim = Time;
    type Base = Second;

    const ID: UnitId = MINUTE;
    const SYMBOL: &'static str = "min";
    const NAME: &'static str = "minute";
    const SCALE: f64 = SECONDS_PER_MINUTE;

    fn store() -> &'static CanonicalStore<Self> {
        static STORE: OnceLock<CanonicalStore<Minute>> = OnceLock::new();
        STORE.get_or_init(CanonicalStore::new)
    }
}

/// Hour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Hour;

impl Unit for Hour {
    type Dim = Time;
    type Base = Second;

    const ID: UnitId = HOUR;
    const SYMBOL: &'static str = "h";
    const NAME: &'static str = "hour";
    const SCALE: f64 = SECONDS_PER_HOUR;

    fn convert_direct(from: UnitId, scalar: f64) -> Option<f64> {
        if from == MINUTE {
            Some(scalar / SECONDS_PER_MINUTE)
        } else {
            None
        }
    }

    fn store() -> &'static CanonicalStore<Self> {
        static STORE: OnceLock<CanonicalStore<Hour>> = OnceLock::new();
        STORE.get_or_init(CanonicalStore::new)
    }
}

/// Canonical second value.
pub fn second(scalar: f64) -> Quantity<Second> {
    Quantity::of(scalar)
}

/// Canonical minute value.
pub fn minute(scalar: f64) -> Quantity<Minute> {
    Quantity::of(scalar)
}

/// Canonical hour value.
pub fn hour(scalar: f64) -> Quantity<Hour> {
    Quantity::of(scalar)
}
