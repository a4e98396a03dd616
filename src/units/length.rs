//! Length units: meter (base), yard, mile.

use std::sync::OnceLock;

use crate::cache::CanonicalStore;
use crate::dimension::Length;
use crate::identity::UnitId;
use crate::unit::{Quantity, Unit};

use super::constants::{METER_PER_MILE, METER_PER_YARD};

/// Identity of the meter.
pub const METER: UnitId = UnitId::new("length", "m", "m");
/// Identity of the yard.
pub const YARD: UnitId = UnitId::new("length", "m", "yd");
/// Identity of the mile.
pub const MILE: UnitId = UnitId::new("length", "m", "mi");

/// Meter, the base unit of length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Meter;

impl Unit for Meter {
    type Dim = Length;
    type Base = Meter;

    const ID: UnitId = METER;
    const SYMBOL: &'static str = "m";
    const NAME: &'static str = "meter";
    const SCALE: f64 = 1.0;

    fn convert_direct(from: UnitId, scalar: f64) -> Option<f64> {
        if from == YARD {
            Some(scalar * METER_PER_YARD)
        } else if from == MILE {
            Some(scalar * METER_PER_MILE)
        } else {
            None
        }
    }

    fn store() -> &'static CanonicalStore<Self> {
        static STORE: OnceLock<CanonicalStore<Meter>> = OnceLock::new();
        STORE.get_or_init(CanonicalStore::new)
    }
}

/// Yard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Yard;

impl Unit for Yard {
    type Dim = Length;
    type Base = Meter;

    const ID: UnitId = YARD;
    const SYMBOL: &'static str = "yd";
    const NAME: &'static str = "yard";
    const SCALE: f64 = METER_PER_YARD;

    fn convert_direct(from: UnitId, scalar: f64) -> Option<f64> {
        if from == METER {
            Some(scalar / METER_PER_YARD)
        } else {
            None
        }
    }

    fn store() -> &'static CanonicalStore<Self> {
        static STORE: OnceLock<CanonicalStore<Yard>> = OnceLock::new();
        STORE.get_or_init(CanonicalStore::new)
    }
}

/// Statute mile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Mile;

impl Unit for Mile {
    type Dim = Length;
    type Base = Meter;

    const ID: UnitId = MILE;
    const SYMBOL: &'static str = "mi";
    const NAME: &'static str = "mile";
    const SCALE: f64 = METER_PER_MILE;

    fn convert_direct(from: UnitId, scalar: f64) -> Option<f64> {
        if from == METER {
            Some(scalar / METER_PER_MILE)
        } else {
            None
        }
    }

    fn store() -> &'static CanonicalStore<Self> {
        static STORE: OnceLock<CanonicalStore<Mile>> = OnceLock::new();
        STORE.get_or_init(CanonicalStore::new)
    }
}

/// Canonical meter value.
pub fn meter(scalar: f64) -> Quantity<Meter> {
    Quantity::of(scalar)
}

/// Canonical yard value.
pub fn yard(scalar: f64) -> Quantity<Yard> {
    Quantity::of(scalar)
}

/// Canonical mile value.
pub fn mile(scalar: f64) -> Quantity<Mile> {
    Quantity::of(scalar)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn yard_to_base() {
        assert!((yard(1.0).to_base_unit().scalar() - 0.9144).abs() < EPS);
    }

    #[test]
    fn mile_to_base() {
        assert!((mile(1.0).to_base_unit().scalar() - 1609.344).abs() < EPS);
    }

    #[test]
    fn mile_is_1760_yards() {
        let yd = yard(0.0).convert(&mile(1.0));
        assert!((yd.scalar() - 1760.0).abs() < EPS);
    }

    #[test]
    fn identities_are_distinct() {
        assert_ne!(METER, YARD);
        assert_ne!(YARD, MILE);
        assert!(METER.is_base());
        assert!(!YARD.is_base());
    }
}
