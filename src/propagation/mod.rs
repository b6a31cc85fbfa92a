//! Orbital propagation module
//!
//! This module provides two pure functions over classical orbital elements:
//!
//! ## State propagation
//!
//! The `propagator` submodule computes a satellite's instantaneous position
//! and telemetry for any timestamp. It uses a first-order true-anomaly
//! approximation (a single Kepler correction, not an iterative solver),
//! which is accurate enough for visualization and keeps the per-frame path
//! branch-free and allocation-free.
//!
//! ## Orbit track generation
//!
//! The `orbit_track` submodule traces a static ring at the orbit's mean
//! radius for display. It is evaluated once per satellite, not per frame.
//!
//! Both functions are stateless and side-effect-free; they can be called
//! from any number of threads with no locking.

mod elements;
mod orbit_track;
mod propagator;

pub use elements::{ElementsError, OrbitalElements};
pub use orbit_track::generate_orbit_track;
pub use propagator::{propagate, PropagationResult};

// Physical constants shared by the propagator and the track generator.

/// Earth's mean radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Earth's standard gravitational parameter (GM) in km³/s²
pub const MU_EARTH_KM3_S2: f64 = 398600.4418;

/// Length of the sidereal day in minutes
pub const SIDEREAL_DAY_MIN: f64 = 23.9344696 * 60.0;

/// Earth's rotation rate in degrees per minute
pub const EARTH_ROTATION_DEG_PER_MIN: f64 = 360.0 / SIDEREAL_DAY_MIN;

/// Default kilometers-to-scene-units conversion factor
pub const KM_TO_SCENE: f64 = 0.001;
