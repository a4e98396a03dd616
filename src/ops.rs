//! Operation layer
//!
//! Generic arithmetic over heterogeneous units of one dimension, built
//! entirely on the public [`Quantity`] contract. Every function is pure:
//! no instance is mutated, and results are canonical or freshly built
//! immutable values.
//!
//! Binary operations take their result type from the *first* operand:
//! `add(meters, yards)` is meters, `add(yards, meters)` is yards. The
//! asymmetry is deliberate and changes only the result's unit, never the
//! physical quantity it denotes.

use std::marker::PhantomData;

use crate::fraction::Fraction;
use crate::unit::{Quantity, Unit};

/// Convert `op` into the target unit `CU`.
pub fn convert<CU, OP>(op: &Quantity<OP>) -> Quantity<CU>
where
    CU: Unit,
    OP: Unit<Dim = CU::Dim, Base = CU::Base>,
{
    crate::convert::pivot::<CU, OP>(op)
}

/// Sum of two quantities, in the first operand's unit.
pub fn add<U1, U2>(op1: &Quantity<U1>, op2: &Quantity<U2>) -> Quantity<U1>
where
    U1: Unit,
    U2: Unit<Dim = U1::Dim, Base = U1::Base>,
{
    op1.value_of(op1.scalar() + op1.convert(op2).scalar())
}

/// Sum of three quantities, in the first operand's unit.
pub fn add3<U1, U2, U3>(
    op1: &Quantity<U1>,
    op2: &Quantity<U2>,
    op3: &Quantity<U3>,
) -> Quantity<U1>
where
    U1: Unit,
    U2: Unit<Dim = U1::Dim, Base = U1::Base>,
    U3: Unit<Dim = U1::Dim, Base = U1::Base>,
{
    op1.value_of(op1.scalar() + op1.convert(op2).scalar() + op1.convert(op3).scalar())
}

/// Difference of two quantities, in the first operand's unit.
pub fn sub<U1, U2>(op1: &Quantity<U1>, op2: &Quantity<U2>) -> Quantity<U1>
where
    U1: Unit,
    U2: Unit<Dim = U1::Dim, Base = U1::Base>,
{
    op1.value_of(op1.scalar() - op1.convert(op2).scalar())
}

/// Scalar multiplication.
pub fn mul<U: Unit>(op: &Quantity<U>, scalar: f64) -> Quantity<U> {
    op.value_of(op.scalar() * scalar)
}

/// Scalar division. Division by zero follows IEEE-754 and yields an
/// infinity or NaN rather than an error.
pub fn div<U: Unit>(op: &Quantity<U>, scalar: f64) -> Quantity<U> {
    op.value_of(op.scalar() / scalar)
}

/// Collapse a fraction: multiply a quantity of the denominator's
/// dimension into it and return a value of the numerator's type.
///
/// `op` is converted into the fraction's denominator component unit, so
/// a 10 m/s speed times half an hour is 18000 m.
pub fn mul_fraction<N, D, OP>(fraction: &Fraction<N, D>, op: &Quantity<OP>) -> Quantity<N>
where
    N: Unit,
    D: Unit,
    OP: Unit<Dim = D::Dim, Base = D::Base>,
{
    let factor = fraction.denominator().convert(op).scalar();
    fraction.numerator().value_of(fraction.scalar() * factor)
}

/// Accumulator behind the variadic `add` form: the result unit is chosen
/// up front and every operand is converted and folded in call order.
///
/// Summation order can affect floating-point rounding but not the defined
/// semantics.
///
/// ```
/// use dimensional::ops::Adder;
/// use dimensional::units::length::{Meter, meter, mile, yard};
///
/// let total = Adder::<Meter>::of(&meter(2.0))
///     .op(&yard(1.0))
///     .op(&mile(1.0))
///     .apply();
/// assert!((total.scalar() - (2.0 + 0.9144 + 1609.344)).abs() < 1e-9);
/// ```
pub struct Adder<CU: Unit> {
    total: f64,
    _unit: PhantomData<CU>,
}

impl<CU: Unit> Adder<CU> {
    /// Seed the accumulator with a first operand.
    pub fn of<OP>(op: &Quantity<OP>) -> Self
    where
        OP: Unit<Dim = CU::Dim, Base = CU::Base>,
    {
        Self {
            total: convert::<CU, OP>(op).scalar(),
            _unit: PhantomData,
        }
    }

    /// Fold one more operand into the sum.
    pub fn op<OP>(mut self, op: &Quantity<OP>) -> Self
    where
        OP: Unit<Dim = CU::Dim, Base = CU::Base>,
    {
        self.total += convert::<CU, OP>(op).scalar();
        self
    }

    /// The accumulated value, canonicalized in the target unit.
    pub fn apply(self) -> Quantity<CU> {
        Quantity::of(self.total)
    }
}

#[cfg(test)]
mod tests {
    use crate::units::length::{Meter, Yard, meter, mile, yard};
    use crate::units::temperature::{celsius, kelvin};
    use crate::units::time::{hour, second};

    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn add_takes_the_first_operands_unit() {
        let m = add(&meter(2.0), &yard(1.0));
        assert_eq!(m.identifier(), Meter::ID);
        assert!((m.scalar() - 2.9144).abs() < EPS);

        let yd = add(&yard(1.0), &meter(2.0));
        assert_eq!(yd.identifier(), Yard::ID);
        assert!((yd.scalar() - (1.0 + 2.0 / 0.9144)).abs() < EPS);
    }

    #[test]
    fn add3_folds_both_tails() {
        let m = add3(&meter(1.0), &yard(1.0), &mile(1.0));
        assert!((m.scalar() - (1.0 + 0.9144 + 1609.344)).abs() < EPS);
    }

    #[test]
    fn sub_converts_like_add() {
        let m = sub(&meter(2.0), &yard(1.0));
        assert!((m.scalar() - (2.0 - 0.9144)).abs() < EPS);
    }

    #[test]
    fn scalar_scaling() {
        assert_eq!(mul(&meter(2.0), 3.0).scalar(), 6.0);
        assert_eq!(div(&meter(6.0), 3.0).scalar(), 2.0);
        assert_eq!(div(&meter(1.0), 0.0).scalar(), f64::INFINITY);
    }

    #[test]
    fn adder_folds_in_call_order() {
        let total = Adder::<Meter>::of(&yard(1.0)).op(&meter(1.0)).apply();
        assert!((total.scalar() - 1.9144).abs() < EPS);
        assert_eq!(total.identifier(), Meter::ID);
    }

    #[test]
    fn adder_over_affine_units() {
        // (0 °C) + (273.15 K as °C = 0 °C) = 0 °C
        let total = Adder::<crate::units::temperature::Celsius>::of(&celsius(0.0))
            .op(&kelvin(273.15))
            .apply();
        assert!(total.scalar().abs() < EPS);
    }

    #[test]
    fn fraction_collapse() {
        let speed = crate::Fraction::<Meter, crate::units::time::Second>::per(10.0, 1.0);
        let distance = mul_fraction(&speed, &second(5.0));
        assert_eq!(distance.identifier(), Meter::ID);
        assert!((distance.scalar() - 50.0).abs() < EPS);

        let distance = mul_fraction(&speed, &hour(0.5));
        assert!((distance.scalar() - 18000.0).abs() < EPS);
    }
}
