//! Static orbit track generation
//!
//! Builds the visual ring drawn behind a satellite. The track is a circle
//! at the orbit's mean radius: argument of perigee and the elliptical foci
//! offset are intentionally ignored, which keeps the geometry a fixed
//! closed loop that is generated once per satellite rather than per frame.

use glam::DVec3;

use super::{OrbitalElements, EARTH_RADIUS_KM};

/// Generate a closed orbit track as an ordered point sequence
///
/// Returns `segments + 1` points in scene units; the first and last point
/// coincide (angles 0 and 2π), so the track can be drawn as a line strip
/// without a separate closing segment. `segments` must be at least 1.
///
/// Each point starts in the unrotated orbital plane, then gets the
/// inclination rotation about the X axis followed by the ascending-node
/// rotation about the Z axis. The order is load-bearing: the two rotations
/// do not commute.
pub fn generate_orbit_track(elements: &OrbitalElements, segments: u32) -> Vec<DVec3> {
    let scaled_radius = (EARTH_RADIUS_KM + (elements.apogee_km + elements.perigee_km) / 2.0)
        * elements.length_scale;

    let (sin_inc, cos_inc) = elements.inclination_deg.to_radians().sin_cos();
    let (sin_node, cos_node) = elements.ascending_node_deg.to_radians().sin_cos();

    let mut points = Vec::with_capacity(segments as usize + 1);

    for i in 0..=segments {
        let angle = (i as f64 / segments as f64) * std::f64::consts::TAU;

        let x = angle.cos() * scaled_radius;
        let y = 0.0;
        let z = angle.sin() * scaled_radius;

        // Inclination about X.
        let y_inc = y * cos_inc - z * sin_inc;
        let z_inc = y * sin_inc + z * cos_inc;

        // Ascending node about Z.
        let x_node = x * cos_node - y_inc * sin_node;
        let y_node = x * sin_node + y_inc * cos_node;

        points.push(DVec3::new(x_node, y_node, z_inc));
    }

    points
}
