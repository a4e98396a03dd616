//! Unit identities
//!
//! A [`UnitId`] names a concrete unit type within its dimension, together
//! with the dimension's designated base unit. The conversion machinery
//! dispatches on identities instead of inspecting types at runtime: a unit
//! that knows a direct formula for a specific sibling recognizes that
//! sibling by comparing identities.

use std::fmt;

/// Immutable identity of a concrete unit type.
///
/// Two identities are equal iff dimension, base unit, and unit all match.
/// One instance exists per unit type, built in `const` context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnitId {
    dimension: &'static str,
    base: &'static str,
    unit: &'static str,
}

impl UnitId {
    /// Build an identity from the dimension name, the base unit symbol,
    /// and the unit's own symbol.
    pub const fn new(dimension: &'static str, base: &'static str, unit: &'static str) -> Self {
        Self {
            dimension,
            base,
            unit,
        }
    }

    /// Name of the owning dimension.
    pub const fn dimension(&self) -> &'static str {
        self.dimension
    }

    /// Symbol of the dimension's base unit.
    pub const fn base(&self) -> &'static str {
        self.base
    }

    /// Symbol of the unit itself.
    pub const fn unit(&self) -> &'static str {
        self.unit
    }

    /// Whether this identity designates its dimension's base unit.
    pub const fn is_base(&self) -> bool {
        // Symbols are unique within a dimension, so comparing them is
        // equivalent to comparing the unit types.
        str_eq(self.base, self.unit)
    }
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.dimension, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_requires_all_three_components() {
        let yard = UnitId::new("length", "m", "yd");
        assert_eq!(yard, UnitId::new("length", "m", "yd"));
        assert_ne!(yard, UnitId::new("length", "m", "mi"));
        assert_ne!(yard, UnitId::new("length", "yd", "yd"));
        assert_ne!(yard, UnitId::new("time", "m", "yd"));
    }

    #[test]
    fn base_detection() {
        assert!(UnitId::new("length", "m", "m").is_base());
        assert!(!UnitId::new("length", "m", "yd").is_base());
    }

    #[test]
    fn display() {
        assert_eq!(UnitId::new("length", "m", "yd").to_string(), "length:yd");
    }
}
