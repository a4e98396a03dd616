//! Conversion constants shared by the unit catalog.

/// Meters per yard, exact by the international yard definition.
pub const METER_PER_YARD: f64 = 0.9144;

/// Meters per statute mile (1760 yards), exact.
pub const METER_PER_MILE: f64 = 1609.344;

/// Kelvin offset of the Celsius scale, exact.
pub const CELSIUS_KELVIN_OFFSET: f64 = 273.15;

/// Kelvin per degree Fahrenheit.
pub const KELVIN_PER_FAHRENHEIT: f64 = 5.0 / 9.0;

/// Kelvin value of 0 °F.
pub const FAHRENHEIT_KELVIN_OFFSET: f64 = CELSIUS_KELVIN_OFFSET - 32.0 * KELVIN_PER_FAHRENHEIT;

/// Seconds per minute.
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Seconds per hour.
pub const SECONDS_PER_HOUR: f64 = 3600.0;
