//! Classical orbital elements and boundary validation

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::{EARTH_RADIUS_KM, KM_TO_SCENE};

/// Errors raised when constructing orbital elements from raw values
///
/// Validation happens once, at the boundary where elements are built from
/// external data. The propagation functions themselves trust their inputs
/// and raise no errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ElementsError {
    #[error("orbital period must be positive and finite, got {0} min")]
    InvalidPeriod(f64),

    #[error("inclination must be within [0, 180] degrees, got {0}")]
    InvalidInclination(f64),

    #[error("apogee/perigee altitudes must be finite and non-negative, got {apogee_km}/{perigee_km} km")]
    InvalidAltitude { apogee_km: f64, perigee_km: f64 },

    #[error("apogee ({apogee_km} km) must not be below perigee ({perigee_km} km)")]
    ApogeeBelowPerigee { apogee_km: f64, perigee_km: f64 },
}

/// Classical orbital elements describing one satellite's orbit
///
/// Immutable per propagation call. The owning consumer keeps one of these
/// per tracked object and hands it to [`propagate`](super::propagate) every
/// animation tick; the kernel never retains a reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    /// Orbital period in minutes (> 0)
    pub period_min: f64,

    /// Orbital inclination in degrees, [0, 180]
    pub inclination_deg: f64,

    /// Apogee altitude above Earth's surface in km
    pub apogee_km: f64,

    /// Perigee altitude above Earth's surface in km
    pub perigee_km: f64,

    /// Reference time from which elapsed orbital phase is measured
    ///
    /// Semantically an epoch; the catalog feed supplies the launch date.
    pub epoch: DateTime<Utc>,

    /// Right ascension of the ascending node in degrees
    pub ascending_node_deg: f64,

    /// Argument of perigee in degrees
    pub argument_of_perigee_deg: f64,

    /// Unit conversion applied to the final position (km -> scene units)
    pub length_scale: f64,
}

impl OrbitalElements {
    /// Validate and construct an element set
    ///
    /// This is the single validation boundary: a record with a non-positive
    /// period, an out-of-range inclination, or inconsistent altitudes is
    /// rejected here and never reaches the propagator. Optional angles
    /// default to zero and the length scale to [`KM_TO_SCENE`].
    pub fn new(
        period_min: f64,
        inclination_deg: f64,
        apogee_km: f64,
        perigee_km: f64,
        epoch: DateTime<Utc>,
    ) -> Result<Self, ElementsError> {
        if !period_min.is_finite() || period_min <= 0.0 {
            return Err(ElementsError::InvalidPeriod(period_min));
        }
        if !inclination_deg.is_finite() || !(0.0..=180.0).contains(&inclination_deg) {
            return Err(ElementsError::InvalidInclination(inclination_deg));
        }
        if !apogee_km.is_finite() || !perigee_km.is_finite() || apogee_km < 0.0 || perigee_km < 0.0
        {
            return Err(ElementsError::InvalidAltitude {
                apogee_km,
                perigee_km,
            });
        }
        if apogee_km < perigee_km {
            return Err(ElementsError::ApogeeBelowPerigee {
                apogee_km,
                perigee_km,
            });
        }

        Ok(Self {
            period_min,
            inclination_deg,
            apogee_km,
            perigee_km,
            epoch,
            ascending_node_deg: 0.0,
            argument_of_perigee_deg: 0.0,
            length_scale: KM_TO_SCENE,
        })
    }

    /// Set the right ascension of the ascending node in degrees
    pub fn with_ascending_node(mut self, deg: f64) -> Self {
        self.ascending_node_deg = deg;
        self
    }

    /// Set the argument of perigee in degrees
    pub fn with_argument_of_perigee(mut self, deg: f64) -> Self {
        self.argument_of_perigee_deg = deg;
        self
    }

    /// Set the km-to-scene-units conversion factor
    pub fn with_length_scale(mut self, scale: f64) -> Self {
        self.length_scale = scale;
        self
    }

    /// Semi-major axis in km, measured from Earth's center
    pub fn semi_major_axis_km(&self) -> f64 {
        EARTH_RADIUS_KM + (self.apogee_km + self.perigee_km) / 2.0
    }

    /// Orbital eccentricity derived from the apogee/perigee altitudes
    pub fn eccentricity(&self) -> f64 {
        (self.apogee_km - self.perigee_km)
            / (self.apogee_km + self.perigee_km + 2.0 * EARTH_RADIUS_KM)
    }

    /// The ISS reference element set (period 92.9 min, inclination 51.634°,
    /// apogee 421 km, perigee 416 km)
    pub fn iss() -> Self {
        let epoch = Utc.with_ymd_and_hms(1998, 11, 20, 0, 0, 0).unwrap();
        Self::new(92.9, 51.634, 421.0, 416.0, epoch)
            .expect("ISS reference elements are valid")
    }
}
