use crate::Num;

/// Gravitational constant, in m³ kg⁻¹ s⁻²
pub const G: Num = 6.67430e-11;

/// Mass of the Sun in kg
pub const SOLAR_MASS: Num = 1.989e30;

/// Astronomical unit in meters
pub const AU: Num = 1.495_978_707e11;

pub const SECONDS_PER_DAY: Num = 60.0 * 60.0 * 24.0;

#[cfg(feature = "f64")]
pub use std::f64::consts::PI;
#[cfg(all(feature = "f32", not(feature = "f64")))]
pub use std::f32::consts::PI;

pub const TWO_PI: Num = 2.0 * PI;
