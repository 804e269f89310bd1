use std::fmt;

use tracing::{debug, trace};

use crate::astro::{self, standard_gravitational_parameter};
use crate::units::{convert_au_to_meters, convert_seconds_to_days};
use crate::{Mat3, Num, OrbitError, Vec3, SOLAR_MASS, TWO_PI};

/// How [`OrbitingBody::orbital_circumference`] is derived.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CircumferenceFormula {
    /// `2π·a`, treating the semi-major axis as the radius of the orbit.
    #[default]
    MeanRadius,
    /// The perimeter of the actual ellipse, see [`astro::ellipse_perimeter`].
    Ramanujan,
}

/// Per-body derivation settings.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrbitConfig {
    /// Mass of the body being orbited, in kg
    pub central_mass: Num,
    pub circumference_formula: CircumferenceFormula,
}

impl OrbitConfig {
    pub fn around(central_mass: Num) -> Self {
        Self {
            central_mass,
            ..Self::default()
        }
    }
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            central_mass: SOLAR_MASS,
            circumference_formula: CircumferenceFormula::default(),
        }
    }
}

/// A body on a bound orbit around a much heavier central mass.
///
/// Every derived quantity is computed once, when the body is built, and the
/// body can't be modified afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OrbitingBody {
    name: String,
    /// kg
    mass: Num,
    /// AU
    semi_major_axis: Num,
    /// degrees
    inclination: Num,
    eccentricity: Num,
    config: OrbitConfig,

    /// AU
    semi_minor_axis: Num,
    /// days
    orbital_period: Num,
    /// m
    orbital_circumference: Num,
    /// AU
    perihelion_distance: Num,
    /// m/s
    perihelion_velocity: Num,
    /// AU
    aphelion_distance: Num,
    /// m/s
    aphelion_velocity: Num,
}

impl OrbitingBody {
    /// Builds a body orbiting the Sun.
    ///
    /// `mass` is in kg, `semi_major_axis` in AU and `inclination` in degrees.
    pub fn new(
        name: impl Into<String>,
        mass: Num,
        semi_major_axis: Num,
        inclination: Num,
        eccentricity: Num,
    ) -> Result<Self, OrbitError> {
        Self::with_config(
            name,
            mass,
            semi_major_axis,
            inclination,
            eccentricity,
            OrbitConfig::default(),
        )
    }

    pub fn with_config(
        name: impl Into<String>,
        mass: Num,
        semi_major_axis: Num,
        inclination: Num,
        eccentricity: Num,
        config: OrbitConfig,
    ) -> Result<Self, OrbitError> {
        let name = name.into();

        validate(&name, mass, semi_major_axis, inclination, eccentricity, &config)?;

        let body = Self::derive(
            name,
            mass,
            semi_major_axis,
            inclination,
            eccentricity,
            config,
        );
        body.check_derived()?;

        Ok(body)
    }

    /// Derives all quantities without checking the inputs.
    pub(crate) fn derive(
        name: String,
        mass: Num,
        semi_major_axis: Num,
        inclination: Num,
        eccentricity: Num,
        config: OrbitConfig,
    ) -> Self {
        let a = semi_major_axis;
        let e = eccentricity;
        let a_m = convert_au_to_meters(a);

        let semi_minor_axis = astro::semi_minor_axis(a, e);
        let orbital_period = convert_seconds_to_days(astro::period(a_m, config.central_mass));

        let orbital_circumference = match config.circumference_formula {
            CircumferenceFormula::MeanRadius => TWO_PI * a_m,
            CircumferenceFormula::Ramanujan => {
                astro::ellipse_perimeter(a_m, convert_au_to_meters(semi_minor_axis))
            }
        };

        let perihelion_distance = astro::perihelion_distance(a, e);
        let aphelion_distance = astro::aphelion_distance(a, e);

        // The orbiting body's own mass is kept in the vis-viva speeds
        let μ = standard_gravitational_parameter(config.central_mass + mass);
        let perihelion_velocity =
            astro::vis_viva(μ, convert_au_to_meters(perihelion_distance), a_m);
        let aphelion_velocity = astro::vis_viva(μ, convert_au_to_meters(aphelion_distance), a_m);

        debug!(
            body = %name,
            orbital_period,
            perihelion_velocity,
            aphelion_velocity,
            "derived orbit"
        );

        Self {
            name,
            mass,
            semi_major_axis,
            inclination,
            eccentricity,
            config,
            semi_minor_axis,
            orbital_period,
            orbital_circumference,
            perihelion_distance,
            perihelion_velocity,
            aphelion_distance,
            aphelion_velocity,
        }
    }

    /// Extreme but finite inputs can still overflow or underflow once
    /// converted to meters and cubed.
    fn check_derived(&self) -> Result<(), OrbitError> {
        let derived = [
            ("semi-minor axis", self.semi_minor_axis),
            ("orbital period", self.orbital_period),
            ("orbital circumference", self.orbital_circumference),
            ("perihelion distance", self.perihelion_distance),
            ("perihelion velocity", self.perihelion_velocity),
            ("aphelion distance", self.aphelion_distance),
            ("aphelion velocity", self.aphelion_velocity),
        ];

        match derived
            .into_iter()
            .find(|&(_, value)| !(value.is_finite() && value > 0.0))
        {
            Some((quantity, value)) => Err(OrbitError::DegenerateOrbit { quantity, value }),
            None => Ok(()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mass(&self) -> Num {
        self.mass
    }

    pub fn semi_major_axis(&self) -> Num {
        self.semi_major_axis
    }

    pub fn inclination(&self) -> Num {
        self.inclination
    }

    pub fn eccentricity(&self) -> Num {
        self.eccentricity
    }

    pub fn config(&self) -> &OrbitConfig {
        &self.config
    }

    pub fn central_mass(&self) -> Num {
        self.config.central_mass
    }

    pub fn reduced_mass(&self) -> Num {
        astro::reduced_mass(self.config.central_mass, self.mass)
    }

    pub fn semi_minor_axis(&self) -> Num {
        self.semi_minor_axis
    }

    /// Orbital period in days
    pub fn orbital_period(&self) -> Num {
        self.orbital_period
    }

    /// Orbital circumference in meters
    pub fn orbital_circumference(&self) -> Num {
        self.orbital_circumference
    }

    pub fn perihelion_distance(&self) -> Num {
        self.perihelion_distance
    }

    pub fn perihelion_velocity(&self) -> Num {
        self.perihelion_velocity
    }

    pub fn aphelion_distance(&self) -> Num {
        self.aphelion_distance
    }

    pub fn aphelion_velocity(&self) -> Num {
        self.aphelion_velocity
    }

    /// Percentage of the orbital circumference covered in `time` days when
    /// moving at the angular rate of a circle of `radius` AU.
    ///
    /// The speed is held constant over the whole window, so this is only
    /// meaningful over short spans. A full period at `radius` equal to the
    /// semi-major axis covers exactly 100 % with
    /// [`CircumferenceFormula::MeanRadius`]; with the shorter Ramanujan
    /// perimeter the same window overshoots. Degenerate inputs are not
    /// rejected and yield negative or non-finite results.
    pub fn circumference_percentage(&self, radius: Num, time: Num) -> Num {
        // m/day
        let orbital_speed = TWO_PI * convert_au_to_meters(radius) / self.orbital_period;
        let covered = orbital_speed * time;

        trace!(body = %self.name, radius, time, covered, "circumference coverage");

        covered / self.orbital_circumference * 100.0
    }

    /// Position in meters at `true_anomaly` degrees past perihelion.
    ///
    /// The orbital plane is tilted about the X axis by the inclination, with
    /// the perihelion lying on the ascending node.
    pub fn position_at_true_anomaly(&self, true_anomaly: Num) -> Vec3 {
        let v = true_anomaly.to_radians();
        let e = self.eccentricity;
        let p = convert_au_to_meters(self.semi_major_axis) * (1.0 - e.powi(2));

        let r = p / (1.0 + e * v.cos());

        self.perifocal_to_reference(Vec3::new(r * v.cos(), r * v.sin(), 0.0))
    }

    pub fn perihelion_position(&self) -> Vec3 {
        self.position_at_true_anomaly(0.0)
    }

    pub fn aphelion_position(&self) -> Vec3 {
        self.position_at_true_anomaly(180.0)
    }

    /// Unit vector normal to the orbital plane.
    pub fn normal(&self) -> Vec3 {
        self.perifocal_to_reference(Vec3::Z)
    }

    #[inline]
    fn perifocal_to_reference(&self, perifocal: Vec3) -> Vec3 {
        Mat3::from_rotation_x(self.inclination.to_radians()).mul_vec3(perifocal)
    }
}

fn validate(
    name: &str,
    mass: Num,
    semi_major_axis: Num,
    inclination: Num,
    eccentricity: Num,
    config: &OrbitConfig,
) -> Result<(), OrbitError> {
    fn positive(x: Num) -> bool {
        x.is_finite() && x > 0.0
    }

    if name.trim().is_empty() {
        return Err(OrbitError::EmptyName);
    }
    if !positive(mass) {
        return Err(OrbitError::NonPositiveMass(mass));
    }
    if !positive(config.central_mass) {
        return Err(OrbitError::NonPositiveCentralMass(config.central_mass));
    }
    if !positive(semi_major_axis) {
        return Err(OrbitError::NonPositiveSemiMajorAxis(semi_major_axis));
    }
    if !(0.0..1.0).contains(&eccentricity) {
        return Err(OrbitError::UnboundEccentricity(eccentricity));
    }
    if !inclination.is_finite() {
        return Err(OrbitError::NonFiniteInclination(inclination));
    }

    Ok(())
}

impl fmt::Display for OrbitingBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "################")?;
        writeln!(f, "OrbitingBody : {}", self.name)?;
        writeln!(f, "################")?;
        writeln!(f)?;
        writeln!(f, "# ORBITAL CHARACTERISTICS")?;
        writeln!(f, "semi major axis : {} AU", self.semi_major_axis)?;
        writeln!(f, "semi minor axis : {} AU", self.semi_minor_axis)?;
        writeln!(f, "inclination : {}°", self.inclination)?;
        writeln!(f, "eccentricity : {}", self.eccentricity)?;
        writeln!(f, "period : {} days", self.orbital_period)?;
        writeln!(f, "circumference : {} m", self.orbital_circumference)?;
        writeln!(f, "distance at perihelion : {} AU", self.perihelion_distance)?;
        writeln!(f, "velocity at perihelion : {} m/s", self.perihelion_velocity)?;
        writeln!(f, "distance at aphelion : {} AU", self.aphelion_distance)?;
        writeln!(f, "velocity at aphelion : {} m/s", self.aphelion_velocity)?;
        writeln!(f)?;
        writeln!(f, "# PHYSICAL CHARACTERISTICS")?;
        write!(f, "mass : {} kg", self.mass)
    }
}
