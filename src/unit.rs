//! The unit contract and the immutable quantity value
//!
//! [`Unit`] is the capability trait every concrete unit type implements:
//! it names the owning dimension, the dimension's base unit, the affine
//! transform to and from that base, and the canonical store the type owns.
//! [`Quantity<U>`] is the immutable (dimension, scalar, identity) value
//! built on top of it.
//!
//! Equality of quantities follows the bit pattern of the scalar
//! (`f64::to_bits`), not `==`: NaN compares equal to itself and `0.0`
//! stays distinct from `-0.0`, so equality is reflexive and canonical
//! lookups stay consistent for every input.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::sync::Arc;

use crate::cache::CanonicalStore;
use crate::dimension::Dimension;
use crate::identity::UnitId;

/// Capability trait for concrete unit types.
///
/// The associated types tie every unit to its dimension and to the
/// dimension's single base unit; the bound `Base: Unit<Dim = Self::Dim,
/// Base = Self::Base>` pins the base unit to itself, so each dimension has
/// exactly one pivot. Conversions between units of different dimensions do
/// not type-check.
pub trait Unit: Copy + Default + fmt::Debug + Send + Sync + 'static {
    /// The owning dimension.
    type Dim: Dimension;
    /// The dimension's designated base unit.
    type Base: Unit<Dim = Self::Dim, Base = Self::Base>;

    /// Identity used for conversion dispatch.
    const ID: UnitId;
    /// Unit symbol, e.g. `"yd"`.
    const SYMBOL: &'static str;
    /// Unit name, e.g. `"yard"`; also the prefix of the preference keys
    /// that size this unit's canonical store.
    const NAME: &'static str;

    /// Scale of the affine transform to the base unit.
    const SCALE: f64;
    /// Offset of the affine transform to the base unit. Zero for all
    /// linear units; the base unit has `SCALE = 1.0, OFFSET = 0.0`, i.e.
    /// the identity transform.
    const OFFSET: f64 = 0.0;

    /// Express `scalar` in the base unit.
    fn to_base(scalar: f64) -> f64 {
        scalar * Self::SCALE + Self::OFFSET
    }

    /// Interpret a base-unit `scalar` in this unit.
    fn from_base(scalar: f64) -> f64 {
        (scalar - Self::OFFSET) / Self::SCALE
    }

    /// Direct conversion from a specific sibling unit, bypassing the
    /// pivot. An optimization only: the result must agree numerically
    /// with the pivot path.
    fn convert_direct(from: UnitId, scalar: f64) -> Option<f64> {
        let _ = (from, scalar);
        None
    }

    /// Canonical store owned by this unit type. Implementations back this
    /// with a process-wide `OnceLock`, so the store is built lazily on
    /// first use and lives for the process lifetime.
    fn store() -> &'static CanonicalStore<Self>;
}

/// An immutable quantity: a scalar bound to a unit type.
///
/// The payload is shared; cloning and canonical cache hits hand out the
/// same allocation. All "mutation" returns a new or reused instance.
pub struct Quantity<U: Unit> {
    repr: Arc<f64>,
    _unit: PhantomData<U>,
}

impl<U: Unit> Quantity<U> {
    /// Fresh, non-canonical allocation. Only the canonical store builds
    /// quantities this way.
    pub(crate) fn alloc(scalar: f64) -> Self {
        Self {
            repr: Arc::new(scalar),
            _unit: PhantomData,
        }
    }

    /// Canonicalizing constructor: resolves `scalar` through the unit's
    /// store.
    pub fn of(scalar: f64) -> Self {
        U::store().canonical(scalar)
    }

    /// The raw scalar.
    pub fn scalar(&self) -> f64 {
        *self.repr
    }

    /// The owning dimension's tag.
    pub fn dimension(&self) -> U::Dim {
        U::Dim::default()
    }

    /// Identity of this quantity's unit type.
    pub fn identifier(&self) -> UnitId {
        U::ID
    }

    /// A quantity of the same unit type carrying `scalar`.
    ///
    /// Reference-stable fast path when the bits already match, then the
    /// canonical store.
    pub fn value_of(&self, scalar: f64) -> Self {
        if self.scalar().to_bits() == scalar.to_bits() {
            return self.clone();
        }
        U::store().canonical(scalar)
    }

    /// This quantity expressed in the dimension's base unit. Exact for
    /// the base unit itself (identity transform).
    pub fn to_base_unit(&self) -> Quantity<U::Base> {
        Quantity::of(U::to_base(self.scalar()))
    }

    /// Convert `other` into this quantity's unit type.
    ///
    /// Identity conversions carry the scalar over exactly; a direct
    /// neighbor formula is used when the unit defines one; everything
    /// else routes through the base-unit pivot.
    pub fn convert<O>(&self, other: &Quantity<O>) -> Quantity<U>
    where
        O: Unit<Dim = U::Dim, Base = U::Base>,
    {
        if O::ID == U::ID {
            return self.value_of(other.scalar());
        }
        if let Some(scalar) = U::convert_direct(O::ID, other.scalar()) {
            return self.value_of(scalar);
        }
        crate::convert::pivot::<U, O>(other)
    }

    /// Whether two quantities share one canonical allocation.
    pub fn same_instance(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.repr, &other.repr)
    }
}

impl<U: Unit> Clone for Quantity<U> {
    fn clone(&self) -> Self {
        Self {
            repr: Arc::clone(&self.repr),
            _unit: PhantomData,
        }
    }
}

impl<U: Unit> PartialEq for Quantity<U> {
    fn eq(&self, other: &Self) -> bool {
        self.scalar().to_bits() == other.scalar().to_bits()
    }
}

impl<U: Unit> Eq for Quantity<U> {}

impl<U: Unit> Hash for Quantity<U> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.scalar().to_bits());
    }
}

// =============================================================================
// Same-unit arithmetic
// =============================================================================

impl<U: Unit> Add for Quantity<U> {
    type Output = Quantity<U>;

    fn add(self, rhs: Self) -> Self::Output {
        self.value_of(self.scalar() + rhs.scalar())
    }
}

impl<U: Unit> Sub for Quantity<U> {
    type Output = Quantity<U>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.value_of(self.scalar() - rhs.scalar())
    }
}

impl<U: Unit> Neg for Quantity<U> {
    type Output = Quantity<U>;

    fn neg(self) -> Self::Output {
        self.value_of(-self.scalar())
    }
}

impl<U: Unit> Mul<f64> for Quantity<U> {
    type Output = Quantity<U>;

    fn mul(self, rhs: f64) -> Self::Output {
        self.value_of(self.scalar() * rhs)
    }
}

impl<U: Unit> Div<f64> for Quantity<U> {
    type Output = Quantity<U>;

    fn div(self, rhs: f64) -> Self::Output {
        self.value_of(self.scalar() / rhs)
    }
}

// =============================================================================
// Display and Debug
// =============================================================================

impl<U: Unit> fmt::Display for Quantity<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.scalar(), U::SYMBOL)
    }
}

impl<U: Unit> fmt::Debug for Quantity<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quantity")
            .field("unit", &U::NAME)
            .field("scalar", &self.scalar())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::units::length::{Meter, Yard, meter, yard};
    use crate::units::temperature::{celsius, kelvin};

    use super::*;

    #[test]
    fn value_of_is_reference_stable_for_equal_bits() {
        let five = meter(5.0);
        let again = five.value_of(5.0);
        assert!(five.same_instance(&again));
    }

    #[test]
    fn value_of_never_changes_unit_type() {
        let q: Quantity<Yard> = yard(3.0).value_of(7.5);
        assert_eq!(q.identifier(), Yard::ID);
        assert_eq!(q.scalar(), 7.5);
    }

    #[test]
    fn bit_pattern_equality() {
        let nan = meter(f64::NAN);
        assert_eq!(nan, nan.clone());
        assert_ne!(meter(0.0), meter(-0.0));
        assert_eq!(meter(2.0), meter(2.0));
    }

    #[test]
    fn identity_conversion_is_exact() {
        let m = meter(0.1 + 0.2);
        let converted = meter(0.0).convert(&m);
        assert_eq!(converted.scalar().to_bits(), m.scalar().to_bits());
    }

    #[test]
    fn neighbor_shortcut_is_used_for_yard_to_meter() {
        let m = meter(0.0).convert(&yard(1.0));
        assert_eq!(m.scalar(), 0.9144);
    }

    #[test]
    fn base_unit_round_trip_is_identity() {
        let m = meter(12.0);
        let base = m.to_base_unit();
        assert_eq!(base.scalar(), 12.0);
        assert_eq!(base.identifier(), Meter::ID);
    }

    #[test]
    fn affine_to_base() {
        let k = celsius(0.0).to_base_unit();
        assert_eq!(k.scalar(), 273.15);
        assert_eq!(k.identifier(), kelvin(0.0).identifier());
    }

    #[test]
    fn same_unit_operators() {
        let sum = meter(2.0) + meter(3.0);
        assert_eq!(sum.scalar(), 5.0);
        let diff = meter(2.0) - meter(3.0);
        assert_eq!(diff.scalar(), -1.0);
        let scaled = meter(2.0) * 4.0;
        assert_eq!(scaled.scalar(), 8.0);
        let halved = meter(2.0) / 2.0;
        assert_eq!(halved.scalar(), 1.0);
        let negated = -meter(2.0);
        assert_eq!(negated.scalar(), -2.0);
    }

    #[test]
    fn division_by_zero_follows_ieee() {
        assert_eq!((meter(1.0) / 0.0).scalar(), f64::INFINITY);
        assert!((meter(0.0) / 0.0).scalar().is_nan());
    }

    #[test]
    fn display_and_debug() {
        assert_eq!(meter(5.0).to_string(), "5 m");
        let dbg = format!("{:?}", yard(2.0));
        assert!(dbg.contains("yard"));
        assert!(dbg.contains("2.0"));
    }
}
