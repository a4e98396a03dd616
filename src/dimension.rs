//! Dimension tags
//!
//! Every unit belongs to exactly one physical dimension (length,
//! temperature, time). A dimension is a zero-sized singleton tag compared
//! by type identity; the associated-type bounds on
//! [`Unit`](crate::unit::Unit) use these tags to make cross-dimension
//! arithmetic unrepresentable at compile time.

use std::fmt;

/// Marker trait for physical dimensions.
///
/// Implementors are empty singleton types that live for the process
/// lifetime. Two quantities are convertible exactly when their unit types
/// share a `Dimension`.
pub trait Dimension: Copy + Default + fmt::Debug + Send + Sync + 'static {
    /// Human-readable dimension name.
    const NAME: &'static str;
}

/// Length [L].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Length;

impl Dimension for Length {
    const NAME: &'static str = "length";
}

/// Thermodynamic temperature [Θ].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Temperature;

impl Dimension for Temperature {
    const NAME: &'static str = "temperature";
}

/// Time [T].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Time;

impl Dimension for Time {
    const NAME: &'static str = "time";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        assert_eq!(Length::NAME, "length");
        assert_eq!(Temperature::NAME, "temperature");
        assert_eq!(Time::NAME, "time");
    }
}
