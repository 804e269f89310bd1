#![allow(non_snake_case)]

//! Closed-form two-body relations.
//!
//! Unless stated otherwise distances are in meters, masses in kilograms and
//! times in seconds.

use crate::constants::{G, PI, TWO_PI};
use crate::Num;

/// https://en.wikipedia.org/wiki/Standard_gravitational_parameter
#[inline]
pub fn standard_gravitational_parameter(mass: Num) -> Num {
    G * mass
}

/// Kepler's third law, the central mass dominating.
///
/// https://en.wikipedia.org/wiki/Orbital_period
pub fn period(a: Num, mass: Num) -> Num {
    TWO_PI * (a.powi(3) / standard_gravitational_parameter(mass)).sqrt()
}

/// Orbital speed at distance `r` on an orbit of semi-major axis `a`.
///
/// https://en.wikipedia.org/wiki/Vis-viva_equation
pub fn vis_viva(μ: Num, r: Num, a: Num) -> Num {
    (μ * (2.0 / r - 1.0 / a)).sqrt()
}

/// Works in whatever unit `a` is given in.
pub fn semi_minor_axis(a: Num, e: Num) -> Num {
    a * (1.0 - e.powi(2)).sqrt()
}

pub fn perihelion_distance(a: Num, e: Num) -> Num {
    a * (1.0 - e)
}

pub fn aphelion_distance(a: Num, e: Num) -> Num {
    a * (1.0 + e)
}

/// https://en.wikipedia.org/wiki/Reduced_mass
pub fn reduced_mass(m1: Num, m2: Num) -> Num {
    // m1 * m2 / (m1 + m2), without forming the product
    m2 / (1.0 + m2 / m1)
}

/// Perimeter of an ellipse with semi-axes `a` and `b`.
///
/// Ramanujan's second approximation, exact for circles and within a few parts
/// per billion for planetary eccentricities.
///
/// https://en.wikipedia.org/wiki/Ellipse#Circumference
pub fn ellipse_perimeter(a: Num, b: Num) -> Num {
    let h = ((a - b) / (a + b)).powi(2);

    PI * (a + b) * (1.0 + (3.0 * h) / (10.0 + (4.0 - 3.0 * h).sqrt()))
}

/// Argument of perihelion (ω) in degrees, for an orbit whose inclination and
/// longitude of the ascending node are given in degrees:
/// ω = atan2(-cos(i) * sin(Ω), cos(Ω))
pub fn argument_of_perihelion(inclination: Num, longitude_of_ascending_node: Num) -> Num {
    let i = inclination.to_radians();
    let Ω = longitude_of_ascending_node.to_radians();

    (-i.cos() * Ω.sin()).atan2(Ω.cos()).to_degrees()
}
