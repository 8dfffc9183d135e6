//! # Keplerian Anomalies
//! This library crate converts between the three ways of describing where a
//! body is along a 2D elliptic (Keplerian) orbit:
//!
//! - the **true anomaly**, the actual angle between the periapsis and the body
//!   as seen from the focus the orbit revolves around;
//! - the **eccentric anomaly**, the same position projected onto the circle
//!   that circumscribes the ellipse;
//! - the **mean anomaly**, an angle that grows linearly with time.
//!
//! Converting from true to eccentric anomaly and back is closed-form, as is
//! going from eccentric to mean anomaly. Going from mean to eccentric anomaly
//! means solving Kepler's equation, which is done with a short, bounded
//! Newton iteration.
//!
//! The typical consumer is an animation loop: it turns the elapsed time
//! into a mean anomaly, wraps it in a [`MeanAnomaly`], and asks for a point
//! to draw.
//!
//! ## Getting started
//! This crate provides these main items:
//! - [`OrbitElements`]: The shape, orientation and winding direction of an
//!   ellipse. Every conversion needs one.
//! - [`TrueAnomaly`], [`EccentricAnomaly`] and [`MeanAnomaly`]: Angle
//!   wrappers, one per parameterization.
//! - [`Anomaly`]: A trait shared by all three anomaly types, holding the
//!   conversions and the position getters.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec2;
//!
//! use keplerian_anomaly::{Anomaly, MeanAnomaly, OrbitElements};
//!
//! # fn main() {
//! let orbit = OrbitElements::new(1.0, 0.5, 0.0, false);
//!
//! // At a mean anomaly of zero, the body sits at periapsis
//! let point = MeanAnomaly::new(0.0).get_point(&orbit);
//! assert_eq!(point, DVec2::new(orbit.get_periapsis(), 0.0));
//! # }
//! ```

#![warn(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]

mod anomaly;
mod elements;
mod math;
mod solvers;

use glam::DVec2;

pub use anomaly::{EccentricAnomaly, MeanAnomaly, TrueAnomaly};
pub use elements::{InvalidOrbitError, OrbitElements};
pub use solvers::KeplerSolution;

/// The maximum number of Newton steps used to solve Kepler's equation.
///
/// When the budget runs out, the last estimate is returned as-is.
/// Use [`MeanAnomaly::solve`] to find out whether that happened.
pub const KEPLER_MAX_ITERATIONS: u32 = 10;

/// The residual below which Kepler's equation counts as solved, in radians.
///
/// This is 0.00001 degrees.
pub const KEPLER_TOLERANCE: f64 = 0.00001 * (core::f64::consts::PI / 180.0);

/// A trait that defines the methods shared by the three anomaly types.
///
/// Each implementor wraps a single angle, in radians, and can only be
/// turned into a position or another anomaly together with the
/// [`OrbitElements`] it refers to.
///
/// # Example
/// ```
/// use keplerian_anomaly::{Anomaly, EccentricAnomaly, MeanAnomaly, OrbitElements, TrueAnomaly};
///
/// fn describe(anomaly: &impl Anomaly, orbit: &OrbitElements) -> (f64, f64) {
///     (anomaly.get_radius(orbit), anomaly.get_true_anomaly(orbit).get_angle())
/// }
///
/// let orbit = OrbitElements::new(2.0, 0.0, 0.0, false);
///
/// assert_eq!(describe(&TrueAnomaly::new(0.5), &orbit), (2.0, 0.5));
///
/// // On a circle, all three parameterizations agree
/// for (radius, angle) in [
///     describe(&EccentricAnomaly::new(0.5), &orbit),
///     describe(&MeanAnomaly::new(0.5), &orbit),
/// ] {
///     assert!((radius - 2.0).abs() < 1e-12);
///     assert!((angle - 0.5).abs() < 1e-12);
/// }
/// ```
pub trait Anomaly: Copy {
    /// Gets the wrapped angle, in radians.
    fn get_angle(&self) -> f64;

    /// Sets the wrapped angle, in radians.
    fn set_angle(&mut self, angle: f64);

    /// Gets the wrapped angle, in degrees.
    fn get_degrees(&self) -> f64 {
        self.get_angle().to_degrees()
    }

    /// Sets the wrapped angle from a value in degrees.
    ///
    /// The angle is still stored in radians.
    ///
    /// # Example
    /// ```
    /// use keplerian_anomaly::{Anomaly, TrueAnomaly};
    ///
    /// let mut anomaly = TrueAnomaly::default();
    /// anomaly.set_degrees(180.0);
    ///
    /// assert_eq!(anomaly.get_angle(), core::f64::consts::PI);
    /// ```
    fn set_degrees(&mut self, degrees: f64) {
        self.set_angle(degrees.to_radians());
    }

    /// Gets the distance between the focus and the body.
    fn get_radius(&self, orbit: &OrbitElements) -> f64;

    /// Gets the position of the body in the orbit's own frame, with the
    /// focus at the origin.
    fn get_point(&self, orbit: &OrbitElements) -> DVec2;

    /// Gets the position of the body in the local frame.
    ///
    /// This is [`get_point`][Anomaly::get_point] passed through
    /// [`OrbitElements::rotate_point`].
    fn get_point_2d(&self, orbit: &OrbitElements) -> DVec2 {
        orbit.rotate_point(self.get_point(orbit))
    }

    /// Converts this anomaly into a true anomaly.
    fn get_true_anomaly(&self, orbit: &OrbitElements) -> TrueAnomaly;

    /// Converts this anomaly into an eccentric anomaly.
    fn get_eccentric_anomaly(&self, orbit: &OrbitElements) -> EccentricAnomaly;

    /// Converts this anomaly into a mean anomaly.
    fn get_mean_anomaly(&self, orbit: &OrbitElements) -> MeanAnomaly;
}


#[inline]
fn keplers_equation(mean_anomaly: f64, eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    eccentric_anomaly - (eccentricity * math::sin(eccentric_anomaly)) - mean_anomaly
}
#[inline]
fn keplers_equation_derivative(eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    1.0 - (eccentricity * math::cos(eccentric_anomaly))
}
