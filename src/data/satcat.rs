//! Satellite catalog record structures matching the Space-Track feed schema
//!
//! The feed merges SATCAT metadata with the latest TLE-derived orbital
//! fields. Space-Track serves every value as a string, so all orbital
//! fields are optional strings here and get parsed at the boundary.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::propagation::OrbitalElements;

/// Root structure of the catalog feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SatCatResponse {
    pub satcat_data: Vec<SatCatRecord>,
}

/// A single raw catalog record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SatCatRecord {
    #[serde(rename = "NORAD_CAT_ID")]
    pub norad_cat_id: Option<String>,

    #[serde(rename = "OBJECT_NAME")]
    pub object_name: Option<String>,

    #[serde(rename = "OBJECT_TYPE")]
    pub object_type: Option<String>,

    #[serde(rename = "COUNTRY")]
    pub country: Option<String>,

    #[serde(rename = "RCS_SIZE")]
    pub rcs_size: Option<String>,

    #[serde(rename = "LAUNCH")]
    pub launch: Option<String>,

    #[serde(rename = "PERIOD")]
    pub period: Option<String>,

    #[serde(rename = "INCLINATION")]
    pub inclination: Option<String>,

    #[serde(rename = "APOGEE")]
    pub apogee: Option<String>,

    #[serde(rename = "PERIGEE")]
    pub perigee: Option<String>,
}

impl SatCatRecord {
    /// Display name (falls back to the NORAD ID if unnamed)
    pub fn display_name(&self) -> String {
        self.object_name
            .clone()
            .unwrap_or_else(|| format!("NORAD {}", self.norad_cat_id.as_deref().unwrap_or("?")))
    }

    /// NORAD catalog number, if present and numeric
    pub fn norad_id(&self) -> Option<u32> {
        self.norad_cat_id.as_deref()?.trim().parse().ok()
    }

    /// Launch date parsed as a UTC midnight epoch
    pub fn launch_epoch(&self) -> Option<DateTime<Utc>> {
        let date = NaiveDate::parse_from_str(self.launch.as_deref()?.trim(), "%Y-%m-%d").ok()?;
        Some(date.and_hms_opt(0, 0, 0)?.and_utc())
    }

    /// Build validated orbital elements from this record
    ///
    /// A field that is missing, unparsable, or parses to zero counts as
    /// absent; a record lacking any of period, inclination, apogee, or
    /// perigee (or a usable launch date) is dropped rather than defaulted.
    pub fn orbital_elements(&self) -> Option<OrbitalElements> {
        let period = parse_orbital_field(self.period.as_deref())?;
        let inclination = parse_orbital_field(self.inclination.as_deref())?;
        let apogee = parse_orbital_field(self.apogee.as_deref())?;
        let perigee = parse_orbital_field(self.perigee.as_deref())?;
        let epoch = self.launch_epoch()?;

        OrbitalElements::new(period, inclination, apogee, perigee, epoch).ok()
    }
}

/// Parse a numeric catalog field, treating zero the same as missing
///
/// The feed uses "0" (and occasionally empty strings) for unknown values,
/// so a zero never reaches element validation.
fn parse_orbital_field(raw: Option<&str>) -> Option<f64> {
    let value: f64 = raw?.trim().parse().ok()?;
    if value.is_finite() && value != 0.0 {
        Some(value)
    } else {
        None
    }
}
