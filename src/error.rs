use crate::Num;

/// Reasons an [`OrbitingBody`](crate::OrbitingBody) can't be derived from its inputs.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum OrbitError {
    #[error("body name must not be empty")]
    EmptyName,
    #[error("body mass must be positive and finite, got {0} kg")]
    NonPositiveMass(Num),
    #[error("central mass must be positive and finite, got {0} kg")]
    NonPositiveCentralMass(Num),
    #[error("semi-major axis must be positive and finite, got {0} AU")]
    NonPositiveSemiMajorAxis(Num),
    /// Only closed (elliptic or circular) orbits have a period and an aphelion.
    #[error("eccentricity must be in [0, 1) for a bound orbit, got {0}")]
    UnboundEccentricity(Num),
    #[error("inclination must be finite, got {0}°")]
    NonFiniteInclination(Num),
    /// The inputs are individually valid but a derived quantity overflowed or
    /// underflowed.
    #[error("{quantity} must be positive and finite, derived {value}")]
    DegenerateOrbit { quantity: &'static str, value: Num },
}
