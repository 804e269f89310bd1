//! The planets of the Solar System, built from their J2000 mean orbital
//! elements.
//!
//! https://ssd.jpl.nasa.gov/planets/approx_pos.html

use crate::{Num, OrbitConfig, OrbitingBody};

fn planet(
    name: &str,
    mass: Num,
    semi_major_axis: Num,
    inclination: Num,
    eccentricity: Num,
) -> OrbitingBody {
    // Known-good elements, nothing to validate
    OrbitingBody::derive(
        name.to_string(),
        mass,
        semi_major_axis,
        inclination,
        eccentricity,
        OrbitConfig::default(),
    )
}

pub fn mercury() -> OrbitingBody {
    planet("Mercury", 3.3011e23, 0.387_098_93, 7.004_87, 0.205_630_69)
}

pub fn venus() -> OrbitingBody {
    planet("Venus", 4.8675e24, 0.723_331_99, 3.394_71, 0.006_773_23)
}

pub fn earth() -> OrbitingBody {
    planet("Earth", 5.9722e24, 1.000_000_11, 0.000_05, 0.016_710_22)
}

pub fn mars() -> OrbitingBody {
    planet("Mars", 6.4171e23, 1.523_662_31, 1.850_61, 0.093_412_33)
}

pub fn jupiter() -> OrbitingBody {
    planet("Jupiter", 1.898_19e27, 5.203_363_01, 1.305_30, 0.048_392_66)
}

pub fn saturn() -> OrbitingBody {
    planet("Saturn", 5.6834e26, 9.537_070_32, 2.484_46, 0.054_150_60)
}

pub fn uranus() -> OrbitingBody {
    planet("Uranus", 8.6813e25, 19.191_263_93, 0.769_86, 0.047_167_71)
}

pub fn neptune() -> OrbitingBody {
    planet("Neptune", 1.024_13e26, 30.068_963_48, 1.769_17, 0.008_585_87)
}

/// All eight planets, ordered outwards from the Sun.
pub fn planets() -> Vec<OrbitingBody> {
    vec![
        mercury(),
        venus(),
        earth(),
        mars(),
        jupiter(),
        saturn(),
        uranus(),
        neptune(),
    ]
}
