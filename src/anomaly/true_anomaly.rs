use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{angle_wrapper, EccentricAnomaly, MeanAnomaly};
use crate::math::{atan2, cos, sin};
use crate::{Anomaly, OrbitElements};

/// The true anomaly of a body, in radians.
///
/// This is the angle between the periapsis and the body, measured at the
/// focus the orbit revolves around.
///
/// Wikipedia: <https://en.wikipedia.org/wiki/True_anomaly>
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrueAnomaly {
    angle: f64,
}

angle_wrapper!(TrueAnomaly);

impl TrueAnomaly {
    /// Gets the position of the body relative to the focus, with the
    /// periapsis on the positive X axis and no argument of periapsis
    /// applied.
    fn get_perifocal_point(&self, orbit: &OrbitElements) -> DVec2 {
        let radius = self.get_radius(orbit);

        DVec2::new(radius * cos(self.angle), radius * sin(self.angle))
    }
}

impl Anomaly for TrueAnomaly {
    fn get_angle(&self) -> f64 {
        self.angle
    }

    fn set_angle(&mut self, angle: f64) {
        self.angle = angle;
    }

    /// Gets the distance between the focus and the body, using the conic
    /// equation:
    ///
    /// ```text
    /// r = a(1 - e^2) / (1 + e cos(ν))
    /// ```
    ///
    /// # Unchecked Operation
    /// This does not check that the orbit is elliptic. For eccentricities
    /// of one or more the denominator can reach zero, and the radius becomes
    /// infinite, negative or NaN.
    fn get_radius(&self, orbit: &OrbitElements) -> f64 {
        orbit.get_semi_latus_rectum() / (1.0 + orbit.get_eccentricity() * cos(self.angle))
    }

    /// Gets the position of the body with the argument of periapsis folded
    /// into the angle:
    ///
    /// ```text
    /// (r cos(ν + ω), r sin(ν + ω))
    /// ```
    ///
    /// Note that [`EccentricAnomaly::get_point`] does not apply ω, so the two
    /// only agree on orbits with an argument of periapsis of zero.
    fn get_point(&self, orbit: &OrbitElements) -> DVec2 {
        let radius = self.get_radius(orbit);
        let angle = self.angle + orbit.get_arg_pe();

        DVec2::new(radius * cos(angle), radius * sin(angle))
    }

    fn get_true_anomaly(&self, _orbit: &OrbitElements) -> TrueAnomaly {
        *self
    }

    /// Converts the true anomaly into an eccentric anomaly.
    ///
    /// The position on the ellipse is scaled back onto its circumscribed
    /// circle:
    ///
    /// ```text
    /// E = atan2(y / b, (x + f) / a)
    /// ```
    ///
    /// where `(x, y)` is the position relative to the focus, `b` is the
    /// semi-minor axis and `f` is the focal distance.
    ///
    /// The result lies in `(-π, π]`.
    ///
    /// # Example
    /// ```
    /// use keplerian_anomaly::{Anomaly, OrbitElements, TrueAnomaly};
    ///
    /// let orbit = OrbitElements::new(1.0, 0.5, 0.0, false);
    /// let eccentric = TrueAnomaly::new(core::f64::consts::FRAC_PI_2)
    ///     .get_eccentric_anomaly(&orbit);
    ///
    /// // cos(E) = e at a true anomaly of 90 degrees
    /// assert!((eccentric.get_angle().cos() - 0.5).abs() < 1e-12);
    /// ```
    fn get_eccentric_anomaly(&self, orbit: &OrbitElements) -> EccentricAnomaly {
        let point = self.get_perifocal_point(orbit);

        let y = point.y / orbit.get_semi_minor_axis();
        let x = (point.x + orbit.get_focal_distance()) / orbit.get_semi_major_axis();

        EccentricAnomaly::new(atan2(y, x))
    }

    fn get_mean_anomaly(&self, orbit: &OrbitElements) -> MeanAnomaly {
        self.get_eccentric_anomaly(orbit).get_mean_anomaly(orbit)
    }
}
