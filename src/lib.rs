//! Dimensional unit algebra with canonical instance caching
//!
//! Immutable physical-quantity values that convert between units of the
//! same dimension, combine arithmetically, and compose into derived
//! fraction units. Dimensional safety is a compile-time property: the
//! trait bounds on [`Unit`] make cross-dimension operations fail to
//! type-check, so the runtime core never checks dimensions.
//!
//! # Key pieces
//!
//! - **Star-topology conversion**: every dimension pivots on one base
//!   unit, so n units need n transforms, not n². Unit types may
//!   special-case direct neighbor formulas; those must agree with the
//!   pivot path.
//! - **Canonical caching**: each unit type owns a two-tier store (a
//!   preallocated integer range plus a bounded LRU tier), so repeated
//!   values share one immutable allocation.
//! - **Heterogeneous arithmetic**: [`ops`] adds, subtracts, and scales
//!   across unit types of one dimension; the result takes the first
//!   operand's unit.
//!
//! # Example
//!
//! ```
//! use dimensional::ops;
//! use dimensional::units::length::{meter, yard};
//!
//! let total = ops::add(&meter(2.0), &yard(1.0));
//! assert!((total.scalar() - 2.9144).abs() < 1e-9);
//!
//! // Same physical sum, but the first operand picks the result unit.
//! let in_yards = ops::add(&yard(1.0), &meter(2.0));
//! assert!((in_yards.scalar() - (1.0 + 2.0 / 0.9144)).abs() < 1e-9);
//! ```

pub mod cache;
pub mod convert;
pub mod dimension;
pub mod fraction;
pub mod identity;
pub mod ops;
pub mod prefs;
pub mod unit;
pub mod units;

// Re-exports
pub use cache::{CacheConfig, CanonicalStore};
pub use dimension::{Dimension, Length, Temperature, Time};
pub use fraction::Fraction;
pub use identity::UnitId;
pub use ops::Adder;
pub use unit::{Quantity, Unit};

/// Prelude for common imports
pub mod prelude {
    pub use super::dimension::{Dimension, Length, Temperature, Time};
    pub use super::fraction::Fraction;
    pub use super::identity::UnitId;
    pub use super::ops::{self, Adder};
    pub use super::unit::{Quantity, Unit};

    pub use super::units::length::{Meter, Mile, Yard, meter, mile, yard};
    pub use super::units::temperature::{
        Celsius, Fahrenheit, Kelvin, celsius, fahrenheit, kelvin,
    };
    pub use super::units::time::{Hour, Minute, Second, hour, minute, second};
}
