//! Body model: identity, role, physical size and orbit of a simulated body.

use std::fmt;

use crate::orbit::OrbitalElements;

/// Unique identifier (name) of a body.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(String);

impl BodyId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BodyId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for BodyId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// What a body is, for classification purposes.
///
/// The role never changes how a body moves; it only decides how a
/// close approach involving it is classified.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BodyRole {
    /// A planet (Earth-like planets enable surface/atmosphere classification)
    Planet,
    /// A catalogued near-Earth object
    #[default]
    NearEarthObject,
    /// A hypothetical impactor
    Impactor,
}

/// Reasons a body definition is rejected at construction time.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ElementsError {
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("eccentricity {0} outside [0, 1); only elliptical orbits are supported")]
    Eccentricity(f64),

    #[error("semi-major axis must be positive, got {0} km")]
    SemiMajorAxis(f64),

    #[error("orbital period must be positive, got {0} days")]
    OrbitalPeriod(f64),

    #[error("gravitational parameter must be positive, got {0} km³/s²")]
    GravitationalParameter(f64),

    #[error("radius must be non-negative, got {0} km")]
    Radius(f64),

    #[error("body id must not be empty")]
    EmptyId,
}

/// A body moving on a fixed Keplerian orbit.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    /// Unique name
    pub id: BodyId,
    /// Orbit around the central mass
    pub elements: OrbitalElements,
    /// Physical radius in km
    pub radius_km: f64,
    /// Pinned to the origin (e.g. the focus planet of an Earth-centred frame)
    pub is_stationary: bool,
    /// Classification role
    pub role: BodyRole,
}

impl Body {
    /// Create an orbiting body, validating its elements.
    pub fn new(
        id: impl Into<BodyId>,
        role: BodyRole,
        elements: OrbitalElements,
        radius_km: f64,
    ) -> Result<Self, ElementsError> {
        let body = Self {
            id: id.into(),
            elements,
            radius_km,
            is_stationary: false,
            role,
        };
        body.validate()?;
        Ok(body)
    }

    /// Create a body pinned at the origin.
    pub fn stationary(
        id: impl Into<BodyId>,
        role: BodyRole,
        radius_km: f64,
    ) -> Result<Self, ElementsError> {
        let body = Self {
            id: id.into(),
            elements: OrbitalElements::default(),
            radius_km,
            is_stationary: true,
            role,
        };
        body.validate()?;
        Ok(body)
    }

    /// Check that the body can be propagated without producing NaNs.
    ///
    /// The propagator itself never validates; bodies built by hand and
    /// handed straight to it skip this check.
    pub fn validate(&self) -> Result<(), ElementsError> {
        if self.id.as_str().is_empty() {
            return Err(ElementsError::EmptyId);
        }
        finite("radius_km", self.radius_km)?;
        if self.radius_km < 0.0 {
            return Err(ElementsError::Radius(self.radius_km));
        }
        if self.is_stationary {
            return Ok(());
        }

        let el = &self.elements;
        finite("semi_major_axis_km", el.semi_major_axis_km)?;
        finite("eccentricity", el.eccentricity)?;
        finite("inclination_deg", el.inclination_deg)?;
        finite("argument_of_periapsis_deg", el.argument_of_periapsis_deg)?;
        finite("longitude_of_ascending_node_deg", el.longitude_of_ascending_node_deg)?;
        finite("mean_anomaly_at_epoch_deg", el.mean_anomaly_at_epoch_deg)?;
        finite("orbital_period_days", el.orbital_period_days)?;
        finite("gravitational_parameter", el.gravitational_parameter)?;

        if !(0.0..1.0).contains(&el.eccentricity) {
            return Err(ElementsError::Eccentricity(el.eccentricity));
        }
        if el.semi_major_axis_km <= 0.0 {
            return Err(ElementsError::SemiMajorAxis(el.semi_major_axis_km));
        }
        if el.orbital_period_days <= 0.0 {
            return Err(ElementsError::OrbitalPeriod(el.orbital_period_days));
        }
        if el.gravitational_parameter <= 0.0 {
            return Err(ElementsError::GravitationalParameter(el.gravitational_parameter));
        }
        Ok(())
    }

    /// Whether this is a planet with Earth's radius (within `tolerance_km`).
    pub fn is_earth_like(&self, earth_radius_km: f64, tolerance_km: f64) -> bool {
        self.role == BodyRole::Planet && (self.radius_km - earth_radius_km).abs() <= tolerance_km
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ElementsError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ElementsError::NonFinite { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AU_KM, EARTH_RADIUS_KM};

    fn elements() -> OrbitalElements {
        OrbitalElements::new(AU_KM, 0.1, 5.0, 10.0, 20.0, 30.0, 365.25)
    }

    #[test]
    fn test_new_accepts_valid_orbit() {
        let body = Body::new("rock", BodyRole::NearEarthObject, elements(), 0.5).unwrap();
        assert!(!body.is_stationary);
        assert_eq!(body.id.as_str(), "rock");
    }

    #[test]
    fn test_new_rejects_unbound_eccentricity() {
        let mut el = elements();
        el.eccentricity = 1.0;
        assert_eq!(
            Body::new("rock", BodyRole::Impactor, el, 1.0),
            Err(ElementsError::Eccentricity(1.0))
        );
    }

    #[test]
    fn test_new_rejects_non_positive_period_and_axis() {
        let mut el = elements();
        el.orbital_period_days = 0.0;
        assert_eq!(
            Body::new("rock", BodyRole::Impactor, el, 1.0),
            Err(ElementsError::OrbitalPeriod(0.0))
        );

        let mut el = elements();
        el.semi_major_axis_km = -5.0;
        assert_eq!(
            Body::new("rock", BodyRole::Impactor, el, 1.0),
            Err(ElementsError::SemiMajorAxis(-5.0))
        );
    }

    #[test]
    fn test_new_rejects_nan_angle() {
        let mut el = elements();
        el.inclination_deg = f64::NAN;
        assert!(matches!(
            Body::new("rock", BodyRole::Impactor, el, 1.0),
            Err(ElementsError::NonFinite { field: "inclination_deg", .. })
        ));
    }

    #[test]
    fn test_rejects_negative_radius_and_empty_id() {
        assert_eq!(
            Body::new("rock", BodyRole::Impactor, elements(), -1.0),
            Err(ElementsError::Radius(-1.0))
        );
        assert_eq!(
            Body::stationary("", BodyRole::Planet, 1.0),
            Err(ElementsError::EmptyId)
        );
    }

    #[test]
    fn test_stationary_skips_orbit_checks() {
        let earth = Body::stationary("Earth", BodyRole::Planet, EARTH_RADIUS_KM).unwrap();
        assert!(earth.is_stationary);
        assert_eq!(earth.elements.semi_major_axis_km, 0.0);
    }

    #[test]
    fn test_earth_like_requires_planet_role_and_radius() {
        let earth = Body::stationary("Earth", BodyRole::Planet, 6371.6).unwrap();
        assert!(earth.is_earth_like(EARTH_RADIUS_KM, 1.0));

        let mars = Body::stationary("Mars", BodyRole::Planet, 3389.5).unwrap();
        assert!(!mars.is_earth_like(EARTH_RADIUS_KM, 1.0));

        let big_rock = Body::stationary("Rock", BodyRole::Impactor, EARTH_RADIUS_KM).unwrap();
        assert!(!big_rock.is_earth_like(EARTH_RADIUS_KM, 1.0));
    }

    #[test]
    fn test_body_id_ordering_and_display() {
        assert!(BodyId::from("Apophis") < BodyId::from("Earth"));
        assert_eq!(BodyId::new(String::from("Earth")).to_string(), "Earth");
    }
}
