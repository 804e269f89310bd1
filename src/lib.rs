//! Closed-form two-body orbital quantities for a body orbiting a much larger
//! central mass.
//!
//! The entry point is [`OrbitingBody`], which derives its period, apsides,
//! apsis speeds and circumference once at construction:
//!
//! ```
//! use solar_system_cartography::OrbitingBody;
//!
//! let earth = OrbitingBody::new("Earth", 5.972e24, 1.0, 0.0, 0.0167).unwrap();
//! assert!((earth.orbital_period() - 365.25).abs() < 1.0);
//! ```

#[cfg(not(any(feature = "f32", feature = "f64")))]
compile_error!("Either the `f32` or the `f64` feature must be enabled");

pub mod astro;
pub mod constants;
mod error;
mod orbiting_body;
pub mod presets;
pub mod units;

pub use self::constants::*;
pub use self::error::OrbitError;
pub use self::orbiting_body::{CircumferenceFormula, OrbitConfig, OrbitingBody};

#[cfg(feature = "f64")]
pub type Num = f64;
#[cfg(feature = "f64")]
pub use glam::{DMat3 as Mat3, DVec3 as Vec3};

#[cfg(all(feature = "f32", not(feature = "f64")))]
pub type Num = f32;
#[cfg(all(feature = "f32", not(feature = "f64")))]
pub use glam::{Mat3, Vec3};
