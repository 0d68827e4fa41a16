//! Kepler equation solver using Newton's method.

use std::f64::consts::PI;

use crate::types::normalize_radians;

/// Convergence threshold on the Newton step, in radians.
pub const KEPLER_TOLERANCE: f64 = 1e-6;

/// Hard cap on Newton iterations.
pub const KEPLER_MAX_ITERATIONS: u32 = 50;

/// Eccentricity above which the iteration starts from π instead of M.
const HIGH_ECCENTRICITY: f64 = 0.8;

/// Result of a Kepler solve, including convergence diagnostics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeplerSolution {
    /// Eccentric anomaly E in radians
    pub eccentric_anomaly: f64,
    /// Newton iterations performed
    pub iterations: u32,
    /// Whether the last step fell below [`KEPLER_TOLERANCE`]
    pub converged: bool,
}

/// Solve Kepler's equation M = E - e*sin(E) for eccentric anomaly E.
///
/// # Arguments
/// * `mean_anomaly` - Mean anomaly M in radians (wrapped into `[0, 2π)`)
/// * `eccentricity` - Orbital eccentricity in `[0, 1)`
///
/// # Precision
/// Iteration stops once `|ΔE| < 1e-6` or after 50 iterations. Hitting the
/// cap is not an error: the best available estimate is returned, which is
/// accurate enough for visualization-grade orbits.
pub fn solve_kepler(mean_anomaly: f64, eccentricity: f64) -> KeplerSolution {
    let m = normalize_radians(mean_anomaly);

    // Starting from M oscillates for e close to 1; π converges for every M
    let mut e_anomaly = if eccentricity < HIGH_ECCENTRICITY { m } else { PI };

    let mut iterations = 0;
    let mut converged = false;
    while iterations < KEPLER_MAX_ITERATIONS {
        iterations += 1;

        // f(E) = E - e*sin(E) - M
        let f = e_anomaly - eccentricity * e_anomaly.sin() - m;
        // f'(E) = 1 - e*cos(E)
        let f_prime = 1.0 - eccentricity * e_anomaly.cos();

        let delta = f / f_prime;
        e_anomaly -= delta;

        if delta.abs() < KEPLER_TOLERANCE {
            converged = true;
            break;
        }
    }

    KeplerSolution {
        eccentric_anomaly: e_anomaly,
        iterations,
        converged,
    }
}

/// Solve Kepler's equation and return only the eccentric anomaly.
///
/// See [`solve_kepler`] for the precision contract.
pub fn solve_eccentric_anomaly(mean_anomaly: f64, eccentricity: f64) -> f64 {
    solve_kepler(mean_anomaly, eccentricity).eccentric_anomaly
}

/// Compute true anomaly from eccentric anomaly.
///
/// Uses atan2 for full quadrant coverage:
/// ν = 2 * atan2(sqrt(1+e) * sin(E/2), sqrt(1-e) * cos(E/2))
pub fn true_anomaly(eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    let half_e = eccentric_anomaly / 2.0;
    let y = (1.0 + eccentricity).sqrt() * half_e.sin();
    let x = (1.0 - eccentricity).sqrt() * half_e.cos();
    2.0 * y.atan2(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    fn residual(e_anom: f64, eccentricity: f64, m: f64) -> f64 {
        (e_anom - eccentricity * e_anom.sin() - m.rem_euclid(TAU)).abs()
    }

    #[test]
    fn test_kepler_solver_circular() {
        // For circular orbit, E = M
        let m = 1.0;
        let solution = solve_kepler(m, 0.0);
        assert!((solution.eccentric_anomaly - m).abs() < 1e-10);
        assert!(solution.converged);
        assert!(solution.iterations <= 2);
    }

    #[test]
    fn test_kepler_solver_elliptical() {
        // Mercury-like eccentricity
        let m = 1.5;
        let e_anom = solve_eccentric_anomaly(m, 0.2056);
        assert!(
            residual(e_anom, 0.2056, m) < 1e-9,
            "Kepler equation not satisfied: residual {}",
            residual(e_anom, 0.2056, m)
        );
    }

    #[test]
    fn test_kepler_solver_high_eccentricity() {
        for m in [0.001, 0.1, 0.5, 1.0, 2.0, 3.0, 5.0, 6.28] {
            for e in [0.9, 0.95, 0.99] {
                let solution = solve_kepler(m, e);
                assert!(solution.converged, "no convergence for M={m}, e={e}");
                assert!(
                    residual(solution.eccentric_anomaly, e, m) < 1e-6,
                    "High eccentricity: Kepler equation not satisfied for M={m}, e={e}"
                );
            }
        }
    }

    #[test]
    fn test_kepler_solver_wraps_mean_anomaly() {
        let wrapped = solve_eccentric_anomaly(1.0, 0.3);
        let unwrapped = solve_eccentric_anomaly(1.0 + 3.0 * TAU, 0.3);
        assert!((wrapped - unwrapped).abs() < 1e-9);

        let negative = solve_eccentric_anomaly(-1.0, 0.3);
        assert!(residual(negative, 0.3, -1.0) < 1e-9);
    }

    #[test]
    fn test_kepler_solver_iteration_cap_returns_estimate() {
        // A NaN eccentricity never converges; the solver must still terminate
        let solution = solve_kepler(1.0, f64::NAN);
        assert_eq!(solution.iterations, KEPLER_MAX_ITERATIONS);
        assert!(!solution.converged);
    }

    #[test]
    fn test_true_anomaly_circular_equals_eccentric() {
        for e_anom in [0.0, 0.5, 1.0, 2.0, 3.0] {
            assert!((true_anomaly(e_anom, 0.0) - e_anom).abs() < 1e-12);
        }
    }

    #[test]
    fn test_true_anomaly_at_apsides() {
        // Periapsis and apoapsis coincide for all anomalies
        assert!(true_anomaly(0.0, 0.6).abs() < 1e-12);
        assert!((true_anomaly(PI, 0.6).abs() - PI).abs() < 1e-9);
    }

    #[test]
    fn test_true_anomaly_leads_eccentric_anomaly() {
        // On the outbound half of an ellipse the body runs ahead of E
        let e_anom = 1.0;
        let nu = true_anomaly(e_anom, 0.5);
        assert!(nu > e_anom, "ν={nu} should exceed E={e_anom}");
    }

    #[test]
    fn test_true_anomaly_full_orbit_finite() {
        for e_deg in [0.0, 45.0, 90.0, 135.0, 179.0, 180.0, 181.0, 270.0, 359.0] {
            let nu = true_anomaly(e_deg * PI / 180.0, 0.5);
            assert!(nu.is_finite(), "True anomaly should be finite for E = {e_deg} deg");
        }
    }
}
