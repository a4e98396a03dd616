//! Star-topology conversion engine
//!
//! Every dimension designates one base unit as its pivot. Converting
//! between two arbitrary units routes through that pivot, so a dimension
//! with n units needs n transform definitions instead of n² pairwise
//! formulas. Direct neighbor shortcuts defined by individual unit types
//! (see [`Unit::convert_direct`]) must agree with this path within
//! floating-point rounding; that equivalence is an invariant, not an
//! accident, and the tests pin it.
//!
//! Cross-dimension input is unrepresentable here: the `OP: Unit<Dim =
//! CU::Dim, Base = CU::Base>` bound rejects it at compile time, so the
//! engine itself performs no dimension check.

use crate::unit::{Quantity, Unit};

/// Convert `op` into the target unit `CU` via the base-unit pivot.
///
/// Identity conversions short-circuit and carry the scalar over exactly.
pub fn pivot<CU, OP>(op: &Quantity<OP>) -> Quantity<CU>
where
    CU: Unit,
    OP: Unit<Dim = CU::Dim, Base = CU::Base>,
{
    if OP::ID == CU::ID {
        return Quantity::of(op.scalar());
    }
    let base = op.to_base_unit();
    Quantity::of(CU::from_base(base.scalar()))
}
