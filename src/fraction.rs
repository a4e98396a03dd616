//! Fraction units
//!
//! A [`Fraction<N, D>`] is a derived quantity over two component
//! dimensions, e.g. length per time for a speed. It pairs two
//! already-canonical component values and carries no cache of its own.
//! Multiplying a fraction by a quantity of the denominator's dimension
//! collapses it back to the numerator's dimension (rate × duration →
//! distance); see [`ops::mul_fraction`](crate::ops::mul_fraction).

use std::fmt;

use crate::identity::UnitId;
use crate::unit::{Quantity, Unit};

/// Composite of a numerator and a denominator component value.
pub struct Fraction<N: Unit, D: Unit> {
    numerator: Quantity<N>,
    denominator: Quantity<D>,
}

impl<N: Unit, D: Unit> Fraction<N, D> {
    /// Pair two component values.
    ///
    /// A zero denominator is not rejected; [`scalar`](Self::scalar)
    /// follows IEEE-754 and yields an infinity or NaN.
    pub fn new(numerator: Quantity<N>, denominator: Quantity<D>) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Canonicalizing shorthand: `Fraction::per(10.0, 1.0)` is ten
    /// numerator units per denominator unit.
    pub fn per(numerator: f64, denominator: f64) -> Self {
        Self::new(Quantity::of(numerator), Quantity::of(denominator))
    }

    /// The numerator component value.
    pub fn numerator(&self) -> &Quantity<N> {
        &self.numerator
    }

    /// The denominator component value.
    pub fn denominator(&self) -> &Quantity<D> {
        &self.denominator
    }

    /// Value of the fraction: numerator scalar over denominator scalar.
    pub fn scalar(&self) -> f64 {
        self.numerator.scalar() / self.denominator.scalar()
    }

    /// Identities of the two component unit types, numerator first.
    pub fn identifier(&self) -> (UnitId, UnitId) {
        (N::ID, D::ID)
    }
}

impl<N: Unit, D: Unit> Clone for Fraction<N, D> {
    fn clone(&self) -> Self {
        Self {
            numerator: self.numerator.clone(),
            denominator: self.denominator.clone(),
        }
    }
}

impl<N: Unit, D: Unit> PartialEq for Fraction<N, D> {
    fn eq(&self, other: &Self) -> bool {
        self.numerator == other.numerator && self.denominator == other.denominator
    }
}

impl<N: Unit, D: Unit> Eq for Fraction<N, D> {}

impl<N: Unit, D: Unit> fmt::Display for Fraction<N, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}/{}", self.scalar(), N::SYMBOL, D::SYMBOL)
    }
}

impl<N: Unit, D: Unit> fmt::Debug for Fraction<N, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fraction")
            .field("numerator", &self.numerator)
            .field("denominator", &self.denominator)
            .finish()
    }
}
