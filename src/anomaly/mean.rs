use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{angle_wrapper, EccentricAnomaly, TrueAnomaly};
use crate::solvers::solve_keplers_equation;
use crate::{Anomaly, KeplerSolution, OrbitElements};

/// The mean anomaly of a body, in radians.
///
/// The mean anomaly grows at a constant rate over time, which makes it the
/// natural input for anything driven by a clock. Turning it into a position
/// requires solving Kepler's equation first, so every conversion on this
/// type goes through [`get_eccentric_anomaly`][Anomaly::get_eccentric_anomaly].
///
/// Wikipedia: <https://en.wikipedia.org/wiki/Mean_anomaly>
///
/// # Performance
/// Each conversion runs the Kepler solver, which takes up to
/// [`KEPLER_MAX_ITERATIONS`][crate::KEPLER_MAX_ITERATIONS] Newton steps.
/// If you need several values for the same instant, convert to an
/// [`EccentricAnomaly`] once and reuse it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeanAnomaly {
    angle: f64,
}

angle_wrapper!(MeanAnomaly);

impl MeanAnomaly {
    /// Solves Kepler's equation for this mean anomaly, keeping the
    /// solver's diagnostics.
    ///
    /// [`get_eccentric_anomaly`][Anomaly::get_eccentric_anomaly] returns the
    /// same estimate, without the iteration count and the final residual.
    ///
    /// # Algorithm
    /// Newton's method starting from `E = M`, with every step clamped to
    /// half the eccentricity. It returns early once the residual is below
    /// [`KEPLER_TOLERANCE`][crate::KEPLER_TOLERANCE], otherwise it stops
    /// after [`KEPLER_MAX_ITERATIONS`][crate::KEPLER_MAX_ITERATIONS] steps.
    ///
    /// # Example
    /// ```
    /// use keplerian_anomaly::{MeanAnomaly, OrbitElements, KEPLER_MAX_ITERATIONS};
    ///
    /// // Kepler's equation is only meant for elliptic orbits
    /// let orbit = OrbitElements::new(1.0, 1.5, 0.0, false);
    /// let solution = MeanAnomaly::new(0.3).solve(&orbit);
    ///
    /// assert_eq!(solution.iterations, KEPLER_MAX_ITERATIONS);
    /// assert!(!solution.converged());
    /// ```
    pub fn solve(&self, orbit: &OrbitElements) -> KeplerSolution {
        solve_keplers_equation(orbit.get_eccentricity(), self.angle)
    }
}

impl Anomaly for MeanAnomaly {
    fn get_angle(&self) -> f64 {
        self.angle
    }

    fn set_angle(&mut self, angle: f64) {
        self.angle = angle;
    }

    fn get_radius(&self, orbit: &OrbitElements) -> f64 {
        self.get_eccentric_anomaly(orbit).get_radius(orbit)
    }

    fn get_point(&self, orbit: &OrbitElements) -> DVec2 {
        self.get_eccentric_anomaly(orbit).get_point(orbit)
    }

    fn get_true_anomaly(&self, orbit: &OrbitElements) -> TrueAnomaly {
        self.get_eccentric_anomaly(orbit).get_true_anomaly(orbit)
    }

    /// Converts the mean anomaly into an eccentric anomaly by solving
    /// Kepler's equation.
    ///
    /// The solver never reports failure here; if it runs out of iterations,
    /// its last estimate is returned. Use [`MeanAnomaly::solve`] to inspect
    /// the convergence.
    fn get_eccentric_anomaly(&self, orbit: &OrbitElements) -> EccentricAnomaly {
        self.solve(orbit).into()
    }

    fn get_mean_anomaly(&self, _orbit: &OrbitElements) -> MeanAnomaly {
        *self
    }
}
