//! Satellite state propagation from classical orbital elements
//!
//! The position solver uses a circular-orbit shortcut for near-circular
//! orbits and a single first-order Kepler correction otherwise. This is a
//! deliberate visualization tradeoff: per-frame evaluation over thousands
//! of satellites matters more than sub-kilometer accuracy.

use chrono::{DateTime, Utc};
use glam::DVec3;

use super::{OrbitalElements, EARTH_RADIUS_KM, EARTH_ROTATION_DEG_PER_MIN, MU_EARTH_KM3_S2};

/// Eccentricity below which the true anomaly equals the mean anomaly
const CIRCULAR_ECCENTRICITY_LIMIT: f64 = 0.01;

/// Propagation result for a single satellite at a single instant
///
/// A transient value type: constructed, consumed, and discarded every
/// invocation. Carries the scene-space position plus the telemetry the
/// display layer shows alongside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropagationResult {
    /// Position in scene units (km scaled by the element set's length scale)
    pub position: DVec3,

    /// Altitude above Earth's surface (km)
    pub altitude_km: f64,

    /// Instantaneous orbital speed (km/s)
    pub velocity_km_s: f64,

    /// Whole revolutions completed since epoch (negative before epoch)
    pub orbits_completed: i64,

    /// Percentage of the current revolution elapsed, [0, 100)
    pub percent_complete: f64,

    /// Resolved angular position along the orbit (degrees)
    pub true_anomaly_deg: f64,

    /// Distance from Earth's center (km)
    pub radius_km: f64,
}

/// Compute a satellite's position and telemetry at `now`
///
/// Pure and total over the precondition domain enforced by
/// [`OrbitalElements::new`]: no I/O, no shared state, safe to call
/// concurrently for different satellites. A `now` before the epoch is not
/// special-cased; the orbit simply runs backward, with the mean anomaly
/// still normalized into [0, 360).
pub fn propagate(elements: &OrbitalElements, now: DateTime<Utc>) -> PropagationResult {
    let elapsed_min = (now - elements.epoch).num_milliseconds() as f64 / 60_000.0;

    let semi_major_axis = elements.semi_major_axis_km();
    let eccentricity = elements.eccentricity();

    // rem_euclid keeps the phase in [0, 1) for negative elapsed time too,
    // so floor + frac always reconstructs the raw orbit count.
    let orbits = elapsed_min / elements.period_min;
    let frac = orbits.rem_euclid(1.0);
    let mean_anomaly_deg = frac * 360.0;

    let true_anomaly_deg = if eccentricity > CIRCULAR_ECCENTRICITY_LIMIT {
        // Single first-order Kepler correction, all trig in radians.
        let mean_anomaly = mean_anomaly_deg.to_radians();
        let eccentric_anomaly = mean_anomaly + eccentricity * mean_anomaly.sin();
        let true_anomaly = 2.0
            * f64::atan2(
                (1.0 + eccentricity).sqrt() * (eccentric_anomaly / 2.0).sin(),
                (1.0 - eccentricity).sqrt() * (eccentric_anomaly / 2.0).cos(),
            );
        true_anomaly.to_degrees()
    } else {
        mean_anomaly_deg
    };

    let radius_km = semi_major_axis * (1.0 - eccentricity * eccentricity)
        / (1.0 + eccentricity * true_anomaly_deg.to_radians().cos());

    let inclination = elements.inclination_deg.to_radians();
    let arg_of_latitude =
        (elements.argument_of_perigee_deg + true_anomaly_deg).to_radians();

    // Linear sidereal-rate node advance approximating Earth's rotation.
    let earth_rotation_deg = EARTH_ROTATION_DEG_PER_MIN * elapsed_min;
    let node = (elements.ascending_node_deg + earth_rotation_deg).to_radians();

    // Rz(node) * Rx(inclination) * Rz(arg of latitude) applied to the
    // radius vector.
    let (sin_node, cos_node) = node.sin_cos();
    let (sin_u, cos_u) = arg_of_latitude.sin_cos();
    let (sin_inc, cos_inc) = inclination.sin_cos();

    let x = radius_km * (cos_node * cos_u - sin_node * sin_u * cos_inc);
    let y = radius_km * (sin_node * cos_u + cos_node * sin_u * cos_inc);
    let z = radius_km * sin_u * sin_inc;

    PropagationResult {
        position: DVec3::new(x, y, z) * elements.length_scale,
        altitude_km: radius_km - EARTH_RADIUS_KM,
        velocity_km_s: (MU_EARTH_KM3_S2 / radius_km).sqrt(),
        orbits_completed: orbits.floor() as i64,
        percent_complete: frac * 100.0,
        true_anomaly_deg,
        radius_km,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::propagation::SIDEREAL_DAY_MIN;
    use chrono::{Duration, TimeZone};

    fn epoch() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()
    }

    fn minutes(m: f64) -> Duration {
        Duration::milliseconds((m * 60_000.0).round() as i64)
    }

    #[test]
    fn test_iss_at_epoch() {
        let iss = OrbitalElements::iss();
        let state = propagate(&iss, iss.epoch);

        assert_eq!(state.orbits_completed, 0);
        assert_eq!(state.percent_complete, 0.0);
        assert!(state.true_anomaly_deg.abs() < 1e-9);
        // Near-circular: radius within a few km of the mean radius.
        assert!((state.radius_km - (EARTH_RADIUS_KM + 418.5)).abs() < 5.0);
        assert!((state.altitude_km - 418.5).abs() < 5.0);
        assert!((state.velocity_km_s - 7.66).abs() < 0.05);
    }

    #[test]
    fn test_iss_after_one_period() {
        let iss = OrbitalElements::iss();
        let state = propagate(&iss, iss.epoch + minutes(92.9));

        assert_eq!(state.orbits_completed, 1);
        assert!(state.percent_complete < 1e-6);
        assert!(state.true_anomaly_deg.abs() < 1e-6);
    }

    #[test]
    fn test_periodicity() {
        // Period chosen so k whole periods divide out exactly in f64.
        let elements =
            OrbitalElements::new(90.0, 51.6, 421.0, 416.0, epoch()).unwrap();
        let at_epoch = propagate(&elements, epoch());

        for k in 1..6 {
            let state = propagate(&elements, epoch() + minutes(90.0 * k as f64));
            assert_eq!(state.orbits_completed, k);
            assert!((state.true_anomaly_deg - at_epoch.true_anomaly_deg).abs() < 1e-6);
            assert!((state.radius_km - at_epoch.radius_km).abs() < 1e-6);
            // Position is NOT periodic: the node advances with Earth's
            // rotation between revolutions.
        }
    }

    #[test]
    fn test_circular_orbit() {
        let elements =
            OrbitalElements::new(100.0, 51.6, 500.0, 500.0, epoch()).unwrap();

        for i in 0..40 {
            let state = propagate(&elements, epoch() + minutes(i as f64 * 7.3));
            let expected_mean = ((i as f64 * 7.3 / 100.0).rem_euclid(1.0)) * 360.0;

            assert!((state.true_anomaly_deg - expected_mean).abs() < 1e-9);
            assert!((state.radius_km - (EARTH_RADIUS_KM + 500.0)).abs() < 1e-9);
            assert!(state.percent_complete >= 0.0 && state.percent_complete < 100.0);
            assert!(state.orbits_completed >= 0);
        }
    }

    #[test]
    fn test_backward_propagation() {
        let elements =
            OrbitalElements::new(100.0, 51.6, 500.0, 500.0, epoch()).unwrap();
        let state = propagate(&elements, epoch() - minutes(25.0));

        // A quarter period before epoch: three quarters into the previous
        // revolution.
        assert_eq!(state.orbits_completed, -1);
        assert!((state.percent_complete - 75.0).abs() < 1e-9);
        assert!((state.true_anomaly_deg - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_eccentric_orbit_at_perigee() {
        // Molniya-like: clearly above the circular shortcut threshold.
        let elements =
            OrbitalElements::new(717.8, 63.4, 39_873.0, 600.0, epoch()).unwrap();
        let e = elements.eccentricity();
        assert!(e > 0.01);

        // At epoch the mean anomaly is zero, so the first-order correction
        // resolves to the perigee: r = a * (1 - e).
        let state = propagate(&elements, epoch());
        let expected = elements.semi_major_axis_km() * (1.0 - e);
        assert!((state.radius_km - expected).abs() < 1e-6);
        assert!((state.radius_km - (EARTH_RADIUS_KM + 600.0)).abs() < 1e-6);
    }

    #[test]
    fn test_velocity_decreases_with_radius() {
        let low = OrbitalElements::new(92.9, 0.0, 420.0, 420.0, epoch()).unwrap();
        let mid = OrbitalElements::new(718.0, 0.0, 20_000.0, 20_000.0, epoch()).unwrap();
        let geo = OrbitalElements::new(1436.0, 0.0, 35_786.0, 35_786.0, epoch()).unwrap();

        let v_low = propagate(&low, epoch()).velocity_km_s;
        let v_mid = propagate(&mid, epoch()).velocity_km_s;
        let v_geo = propagate(&geo, epoch()).velocity_km_s;

        assert!(v_low > v_mid);
        assert!(v_mid > v_geo);
        // Vis-viva for the circular model: v = sqrt(GM / r).
        let r_low = propagate(&low, epoch()).radius_km;
        assert!((v_low - (MU_EARTH_KM3_S2 / r_low).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_equatorial_orbit_stays_in_plane() {
        let elements =
            OrbitalElements::new(100.0, 0.0, 500.0, 500.0, epoch()).unwrap();

        for i in 0..10 {
            let state = propagate(&elements, epoch() + minutes(i as f64 * 11.0));
            assert!(state.position.z.abs() < 1e-12);
            // Scene-space distance matches the scaled radius.
            assert!(
                (state.position.length() - state.radius_km * elements.length_scale).abs() < 1e-9
            );
        }
    }

    #[test]
    fn test_polar_orbit_reaches_pole() {
        // 90 degree inclination, evaluated at epoch with a 90 degree
        // argument of perigee: the full radius vector points along +Z.
        let elements = OrbitalElements::new(100.0, 90.0, 500.0, 500.0, epoch())
            .unwrap()
            .with_argument_of_perigee(90.0);
        let state = propagate(&elements, epoch());

        let scaled_radius = state.radius_km * elements.length_scale;
        assert!((state.position.z - scaled_radius).abs() < 1e-9);
        assert!(state.position.x.abs() < 1e-9);
        assert!(state.position.y.abs() < 1e-9);
    }

    #[test]
    fn test_node_advances_with_elapsed_time() {
        // One sidereal day after epoch the node advance is a full turn, so
        // the position matches the epoch position for a 1-day period orbit.
        let elements =
            OrbitalElements::new(SIDEREAL_DAY_MIN, 51.6, 500.0, 500.0, epoch()).unwrap();

        let at_epoch = propagate(&elements, epoch());
        let after_day = propagate(&elements, epoch() + minutes(SIDEREAL_DAY_MIN));

        assert!((at_epoch.position - after_day.position).length() < 1e-5);
        // Half a revolution in, the node has advanced by 180 degrees and
        // the position must differ from the plain half-orbit point.
        let half = propagate(&elements, epoch() + minutes(SIDEREAL_DAY_MIN / 2.0));
        assert!((half.position + at_epoch.position).length() > 1e-3);
    }
}
