//! OrbitView - Satellite Orbit Propagation Kernel
//!
//! A small, pure propagation core for satellite catalog visualization.
//! Given a set of classical orbital elements and a timestamp, it computes
//! the satellite's instantaneous Cartesian position in scene units plus
//! derived telemetry (altitude, speed, orbit completion). A companion
//! generator traces a static orbit ring for display.
//!
//! The rendering layer is an external consumer: it calls [`propagate`]
//! once per satellite per animation tick and applies the returned position
//! to its own scene graph. The kernel holds no state between calls.

pub mod data;
pub mod propagation;

pub use data::{load_catalog, parse_catalog, CatalogStats, TrackedSatellite};
pub use propagation::{
    generate_orbit_track, propagate, ElementsError, OrbitalElements, PropagationResult,
    EARTH_RADIUS_KM, MU_EARTH_KM3_S2,
};
