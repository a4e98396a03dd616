//! Temperature units: kelvin (base), Celsius, Fahrenheit.
//!
//! Celsius and Kelvin special-case each other with the exact 273.15
//! offset; Fahrenheit relies on the affine pivot transform.

use std::sync::OnceLock;

use crate::cache::CanonicalStore;
use crate::dimension::Temperature;
use crate::identity::UnitId;
use crate::unit::{Quantity, Unit};

use super::constants::{CELSIUS_KELVIN_OFFSET, FAHRENHEIT_KELVIN_OFFSET, KELVIN_PER_FAHRENHEIT};

/// Identity of the kelvin.
pub const KELVIN: UnitId = UnitId::new("temperature", "K", "K");
/// Identity of the degree Celsius.
pub const CELSIUS: UnitId = UnitId::new("temperature", "K", "°C");
/// Identity of the degree Fahrenheit.
pub const FAHRENHEIT: UnitId = UnitId::new("temperature", "K", "°F");

/// Kelvin, the base unit of temperature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Kelvin;

impl Unit for Kelvin {
    type Dim = Temperature;
    type Base = Kelvin;

    const ID: UnitId = KELVIN;
    const SYMBOL: &'static str = "K";
    const NAME: &'static str = "kelvin";
    const SCALE: f64 = 1.0;

    fn convert_direct(from: UnitId, scalar: f64) -> Option<f64> {
        if from == CELSIUS {
            Some(scalar + CELSIUS_KELVIN_OFFSET)
        } else {
            None
        }
    }

    fn store() -> &'static CanonicalStore<Self> {
        static STORE: OnceLock<CanonicalStore<Kelvin>> = OnceLock::new();
        STORE.get_or_init(CanonicalStore::new)
    }
}

/// Degree Celsius.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Celsius;

impl Unit for Celsius {
    type Dim = Temperature;
    type Base = Kelvin;

    const ID: UnitId = CELSIUS;
    const SYMBOL: &'static str = "°C";
    const NAME: &'static str = "celsius";
    const SCALE: f64 = 1.0;
    const OFFSET: f64 = CELSIUS_KELVIN_OFFSET;

    fn convert_direct(from: UnitId, scalar: f64) -> Option<f64> {
        if from == KELVIN {
            Some(scalar - CELSIUS_KELVIN_OFFSET)
        } else {
            None
        }
    }

    fn store() -> &'static CanonicalStore<Self> {
        static STORE: OnceLock<CanonicalStore<Celsius>> = OnceLock::new();
        STORE.get_or_init(CanonicalStore::new)
    }
}

/// Degree Fahrenheit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Fahrenheit;

impl Unit for Fahrenheit {
    type Dim = Temperature;
    type Base = Kelvin;

    const ID: UnitId = FAHRENHEIT;
    const SYMBOL: &'static str = "°F";
    const NAME: &'static str = "fahrenheit";
    const SCALE: f64 = KELVIN_PER_FAHRENHEIT;
    const OFFSET: f64 = FAHRENHEIT_KELVIN_OFFSET;

    fn store() -> &'static CanonicalStore<Self> {
        static STORE: OnceLock<CanonicalStore<Fahrenheit>> = OnceLock::new();
        STORE.get_or_init(CanonicalStore::new)
    }
}

/// Canonical kelvin value.
pub fn kelvin(scalar: f64) -> Quantity<Kelvin> {
    Quantity::of(scalar)
}

/// Canonical Celsius value.
pub fn celsius(scalar: f64) -> Quantity<Celsius> {
    Quantity::of(scalar)
}

/// Canonical Fahrenheit value.
pub fn fahrenheit(scalar: f64) -> Quantity<Fahrenheit> {
    Quantity::of(scalar)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn celsius_to_kelvin_is_the_exact_offset() {
        let k = celsius(0.0).to_base_unit();
        assert_eq!(k.scalar(), 273.15);
        let k = celsius(100.0).to_base_unit();
        assert_eq!(k.scalar(), 373.15);
    }

    #[test]
    fn kelvin_to_celsius_shortcut_matches_pivot() {
        let via_shortcut = celsius(0.0).convert(&kelvin(300.0));
        let via_pivot = crate::convert::pivot::<Celsius, Kelvin>(&kelvin(300.0));
        assert!((via_shortcut.scalar() - via_pivot.scalar()).abs() < EPS);
        assert!((via_shortcut.scalar() - 26.85).abs() < EPS);
    }

    #[test]
    fn fahrenheit_fixed_points() {
        let f = fahrenheit(32.0).to_base_unit();
        assert!((f.scalar() - 273.15).abs() < EPS);
        let f = fahrenheit(212.0).to_base_unit();
        assert!((f.scalar() - 373.15).abs() < EPS);
    }

    #[test]
    fn repeated_conversion_does_not_drift() {
        let mut c = celsius(100.0);
        for _ in 0..1000 {
            let k = c.to_base_unit();
            c = celsius(0.0).convert(&k);
        }
        assert!((c.scalar() - 100.0).abs() < EPS);
    }
}
