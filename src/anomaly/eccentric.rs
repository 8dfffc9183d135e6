use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{angle_wrapper, MeanAnomaly, TrueAnomaly};
use crate::math::{atan2, cos, sin};
use crate::{Anomaly, KeplerSolution, OrbitElements};

/// The eccentric anomaly of a body, in radians.
///
/// Picture the circle that touches the ellipse at both apsides. Project the
/// body onto that circle, perpendicular to the major axis; the eccentric
/// anomaly is the angle of that projection as seen from the ellipse's center.
///
/// Wikipedia: <https://en.wikipedia.org/wiki/Eccentric_anomaly>
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EccentricAnomaly {
    angle: f64,
}

angle_wrapper!(EccentricAnomaly);

impl From<KeplerSolution> for EccentricAnomaly {
    fn from(solution: KeplerSolution) -> Self {
        Self::new(solution.eccentric_anomaly)
    }
}

impl Anomaly for EccentricAnomaly {
    fn get_angle(&self) -> f64 {
        self.angle
    }

    fn set_angle(&mut self, angle: f64) {
        self.angle = angle;
    }

    /// Gets the distance between the focus and the body.
    ///
    /// This is the length of [`get_point`][Self::get_point], and should agree
    /// with [`TrueAnomaly::get_radius`] for the same position.
    fn get_radius(&self, orbit: &OrbitElements) -> f64 {
        self.get_point(orbit).length()
    }

    /// Gets the position of the body relative to the focus:
    ///
    /// ```text
    /// (a cos(E) - f, b sin(E))
    /// ```
    fn get_point(&self, orbit: &OrbitElements) -> DVec2 {
        DVec2::new(
            orbit.get_semi_major_axis() * cos(self.angle) - orbit.get_focal_distance(),
            orbit.get_semi_minor_axis() * sin(self.angle),
        )
    }

    /// Converts the eccentric anomaly into a true anomaly, by taking the
    /// angle of [`get_point`][Self::get_point].
    ///
    /// The result lies in `(-π, π]`.
    fn get_true_anomaly(&self, orbit: &OrbitElements) -> TrueAnomaly {
        let point = self.get_point(orbit);

        TrueAnomaly::new(atan2(point.y, point.x))
    }

    fn get_eccentric_anomaly(&self, _orbit: &OrbitElements) -> EccentricAnomaly {
        *self
    }

    /// Converts the eccentric anomaly into a mean anomaly using Kepler's
    /// equation:
    ///
    /// ```text
    /// M = E - e sin(E)
    /// ```
    ///
    /// # Example
    /// ```
    /// use keplerian_anomaly::{Anomaly, EccentricAnomaly, OrbitElements};
    ///
    /// let orbit = OrbitElements::new(1.0, 0.5, 0.0, false);
    /// let mean = EccentricAnomaly::new(core::f64::consts::FRAC_PI_2)
    ///     .get_mean_anomaly(&orbit);
    ///
    /// assert_eq!(mean.get_angle(), core::f64::consts::FRAC_PI_2 - 0.5);
    /// ```
    fn get_mean_anomaly(&self, orbit: &OrbitElements) -> MeanAnomaly {
        MeanAnomaly::new(self.angle - orbit.get_eccentricity() * sin(self.angle))
    }
}
