//! Concrete unit catalog
//!
//! Example unit families exercising the core: lengths pivot on the meter,
//! temperatures on the kelvin, times on the second. Each unit type owns
//! its canonical store and may special-case direct neighbor conversions.

pub mod constants;
pub mod length;
pub mod temperature;
pub mod time;
