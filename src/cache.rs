//! Canonical instance caching
//!
//! Each unit type owns one [`CanonicalStore`] for its process lifetime,
//! holding two tiers:
//!
//! - Static range: a preallocated array covering a contiguous integer
//!   range `[low, low + size - 1]`, built once on first use and immutable
//!   afterwards (the Integer-cache pattern).
//! - Dynamic tier: a bounded LRU map from the scalar's bit pattern to its
//!   canonical instance, used for non-integral and out-of-range values.
//!
//! The store never grows past its configured bounds and is safe under
//! concurrent lookups and inserts; lookup and insert happen under one
//! mutex section, so a given bit pattern always resolves to one canonical
//! instance.

use std::num::NonZeroUsize;
use std::sync::Mutex;

use lru::LruCache;

use crate::prefs;
use crate::unit::{Quantity, Unit};

/// Cache geometry for one unit type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Lowest integer covered by the static range.
    pub static_low: i64,
    /// Number of consecutive integers in the static range.
    pub static_size: usize,
    /// Capacity of the dynamic tier.
    pub dynamic_size: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            static_low: 0,
            static_size: 128,
            dynamic_size: 128,
        }
    }
}

impl CacheConfig {
    /// Load the geometry for a unit from preferences, e.g.
    /// `meter.cache.static.low`. Sizes are taken by absolute value; a
    /// missing or malformed setting falls back to the default.
    pub fn for_unit(name: &str) -> Self {
        let defaults = Self::default();
        let static_low = prefs::load_int(&format!("{name}.cache.static.low"), defaults.static_low);
        let static_size = prefs::load_int(
            &format!("{name}.cache.static.size"),
            defaults.static_size as i64,
        )
        .unsigned_abs() as usize;
        let dynamic_size = prefs::load_int(
            &format!("{name}.cache.dynamic.size"),
            defaults.dynamic_size as i64,
        )
        .unsigned_abs() as usize;
        Self {
            static_low,
            static_size,
            dynamic_size,
        }
    }
}

/// Two-tier canonical store for one unit type.
pub struct CanonicalStore<U: Unit> {
    low: i64,
    statics: Box<[Quantity<U>]>,
    dynamic: Mutex<LruCache<u64, Quantity<U>>>,
}

impl<U: Unit> CanonicalStore<U> {
    /// Build a store with geometry loaded from preferences.
    pub fn new() -> Self {
        Self::with_config(CacheConfig::for_unit(U::NAME))
    }

    /// Build a store with explicit geometry.
    pub fn with_config(config: CacheConfig) -> Self {
        let statics: Box<[Quantity<U>]> = (0..config.static_size)
            .map(|k| Quantity::alloc(config.static_low.wrapping_add(k as i64) as f64))
            .collect();
        tracing::debug!(
            "built static canonical range for {} (low={}, size={})",
            U::NAME,
            config.static_low,
            statics.len()
        );
        let capacity =
            NonZeroUsize::new(config.dynamic_size.max(1)).unwrap_or(NonZeroUsize::MIN);
        Self {
            low: config.static_low,
            statics,
            dynamic: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Canonical instance carrying `scalar`.
    ///
    /// In-range integers resolve through the static tier; everything else,
    /// including NaN and infinities, goes through the bounded dynamic tier
    /// keyed by bit pattern.
    pub fn canonical(&self, scalar: f64) -> Quantity<U> {
        if let Some(hit) = self.static_lookup(scalar) {
            return hit;
        }
        let key = scalar.to_bits();
        let mut dynamic = match self.dynamic.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(hit) = dynamic.get(&key) {
            return hit.clone();
        }
        let fresh = Quantity::alloc(scalar);
        dynamic.put(key, fresh.clone());
        fresh
    }

    fn static_lookup(&self, scalar: f64) -> Option<Quantity<U>> {
        if !scalar.is_finite() || scalar != scalar.floor() {
            return None;
        }
        // Negative zero would alias the +0.0 slot and come back with the
        // wrong bit pattern.
        if scalar == 0.0 && scalar.is_sign_negative() {
            return None;
        }
        // `as` saturates for out-of-range floats; the range check below
        // rejects those.
        let index = (scalar as i64).checked_sub(self.low)?;
        if (0..self.statics.len() as i64).contains(&index) {
            Some(self.statics[index as usize].clone())
        } else {
            None
        }
    }

    /// Lowest integer in the static range.
    pub fn static_low(&self) -> i64 {
        self.low
    }

    /// Size of the static range.
    pub fn static_len(&self) -> usize {
        self.statics.len()
    }

    /// Current number of entries in the dynamic tier.
    pub fn dynamic_len(&self) -> usize {
        match self.dynamic.lock() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    /// Configured capacity of the dynamic tier.
    pub fn dynamic_capacity(&self) -> usize {
        match self.dynamic.lock() {
            Ok(guard) => guard.cap().get(),
            Err(poisoned) => poisoned.into_inner().cap().get(),
        }
    }
}

impl<U: Unit> Default for CanonicalStore<U> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::length::Meter;

    fn store(low: i64, static_size: usize, dynamic_size: usize) -> CanonicalStore<Meter> {
        CanonicalStore::with_config(CacheConfig {
            static_low: low,
            static_size,
            dynamic_size,
        })
    }

    #[test]
    fn for_unit_uses_defaults_when_nothing_is_configured() {
        assert_eq!(CacheConfig::for_unit("parsec"), CacheConfig::default());
    }

    #[test]
    fn for_unit_reads_env_overrides_and_clamps_negative_sizes() {
        // Keys are unique to this test; no other lookup touches them.
        unsafe {
            std::env::set_var("FURLONG_CACHE_STATIC_LOW", "-4");
            std::env::set_var("FURLONG_CACHE_STATIC_SIZE", "-16");
            std::env::set_var("FURLONG_CACHE_DYNAMIC_SIZE", "not-a-number");
        }
        let config = CacheConfig::for_unit("furlong");
        assert_eq!(config.static_low, -4);
        assert_eq!(config.static_size, 16);
        assert_eq!(config.dynamic_size, CacheConfig::default().dynamic_size);
    }

    #[test]
    fn integers_in_range_are_reference_stable() {
        let store = store(0, 16, 4);
        let a = store.canonical(5.0);
        let b = store.canonical(5.0);
        assert!(a.same_instance(&b));
        assert_eq!(a.scalar(), 5.0);
    }

    #[test]
    fn negative_low_shifts_the_range() {
        let store = store(-8, 16, 4);
        let a = store.canonical(-8.0);
        let b = store.canonical(-8.0);
        assert!(a.same_instance(&b));
        assert_eq!(a.scalar(), -8.0);
        assert_eq!(store.static_low(), -8);
        assert_eq!(store.static_len(), 16);
    }

    #[test]
    fn dynamic_tier_is_bounded() {
        let store = store(0, 4, 8);
        for k in 0..100 {
            store.canonical(0.5 + k as f64);
        }
        assert!(store.dynamic_len() <= store.dynamic_capacity());
        assert_eq!(store.dynamic_capacity(), 8);
    }

    #[test]
    fn dynamic_hits_are_reference_stable_while_cached() {
        let store = store(0, 0, 8);
        let a = store.canonical(2.5);
        let b = store.canonical(2.5);
        assert!(a.same_instance(&b));
    }

    #[test]
    fn non_finite_scalars_skip_the_static_range() {
        let store = store(0, 16, 4);
        let nan = store.canonical(f64::NAN);
        assert!(nan.scalar().is_nan());
        let again = store.canonical(f64::NAN);
        assert!(nan.same_instance(&again));

        let inf = store.canonical(f64::INFINITY);
        assert_eq!(inf.scalar(), f64::INFINITY);
    }

    #[test]
    fn negative_zero_keeps_its_bit_pattern() {
        let store = store(0, 16, 4);
        let neg = store.canonical(-0.0);
        assert!(neg.scalar().is_sign_negative());
        let pos = store.canonical(0.0);
        assert!(!pos.scalar().is_sign_negative());
        assert!(!neg.same_instance(&pos));
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let store = store(0, 0, 0);
        assert_eq!(store.dynamic_capacity(), 1);
        store.canonical(1.5);
        assert!(store.dynamic_len() <= 1);
    }

    #[test]
    fn huge_integral_scalars_fall_through_to_the_dynamic_tier() {
        let store = store(0, 16, 4);
        let big = store.canonical(1e300);
        assert_eq!(big.scalar(), 1e300);
        assert_eq!(store.dynamic_len(), 1);
    }
}
