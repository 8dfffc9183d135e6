use core::{error::Error, fmt};

use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::math::{abs, cos, sin, sqrt};

/// The geometric elements of a 2D elliptic orbit.
///
/// An [`OrbitElements`] instance describes the shape of an ellipse,
/// how it is turned inside its plane, and in which direction bodies
/// travel along it. It has no notion of time or of the parent body's
/// mass; those are left to whatever drives the orbit.
///
/// The anomaly types ([`TrueAnomaly`][crate::TrueAnomaly],
/// [`EccentricAnomaly`][crate::EccentricAnomaly] and
/// [`MeanAnomaly`][crate::MeanAnomaly]) are meaningless on their own and
/// take a reference to one of these for every conversion.
///
/// # Example
/// ```
/// use keplerian_anomaly::OrbitElements;
///
/// let orbit = OrbitElements::new(
///     // Semi-major axis
///     1.0,
///
///     // Eccentricity
///     0.5,
///
///     // Argument of periapsis
///     0.0,
///
///     // Clockwise
///     false,
/// );
///
/// assert_eq!(orbit.get_periapsis(), 0.5);
/// assert_eq!(orbit.get_apoapsis(), 1.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrbitElements {
    semi_major_axis: f64,
    eccentricity: f64,
    arg_pe: f64,
    clockwise: bool,
}

impl OrbitElements {
    /// Creates a new [`OrbitElements`] instance with the given parameters.
    ///
    /// Negative values for the semi-major axis and the eccentricity are
    /// not rejected. Their absolute values are used instead.
    /// Eccentricities of one or more are accepted as well, but the
    /// anomaly conversions are only meaningful for elliptic orbits and may
    /// return non-finite values for anything else.
    /// Use [`OrbitElements::try_new`] if you want these cases rejected.
    ///
    /// # Parameters
    /// - `semi_major_axis`: Half of the longest diameter of the ellipse.
    /// - `eccentricity`: The shape of the ellipse. 0 is a circle.
    /// - `arg_pe`: The argument of periapsis, in radians.
    /// - `clockwise`: Whether the orbit winds clockwise in the local frame.
    ///
    /// # Example
    /// ```
    /// use keplerian_anomaly::OrbitElements;
    ///
    /// let orbit = OrbitElements::new(-2.0, -0.25, 0.3, true);
    ///
    /// assert_eq!(orbit.get_semi_major_axis(), 2.0);
    /// assert_eq!(orbit.get_eccentricity(), 0.25);
    /// assert_eq!(orbit.get_arg_pe(), 0.3);
    /// assert!(orbit.is_clockwise());
    /// ```
    pub fn new(semi_major_axis: f64, eccentricity: f64, arg_pe: f64, clockwise: bool) -> Self {
        Self {
            semi_major_axis: abs(semi_major_axis),
            eccentricity: abs(eccentricity),
            arg_pe,
            clockwise,
        }
    }

    /// Creates a counter-clockwise circular orbit with the given radius.
    pub fn circular(radius: f64) -> Self {
        Self::new(radius, 0.0, 0.0, false)
    }

    /// Creates a new [`OrbitElements`] instance, rejecting parameters that
    /// [`OrbitElements::new`] would silently accept.
    ///
    /// Unlike [`OrbitElements::new`], no normalization takes place:
    /// negative lengths and non-elliptic eccentricities are errors.
    ///
    /// # Example
    /// ```
    /// use keplerian_anomaly::{InvalidOrbitError, OrbitElements};
    ///
    /// assert!(OrbitElements::try_new(1.0, 0.5, 0.0, false).is_ok());
    /// assert_eq!(
    ///     OrbitElements::try_new(1.0, 1.2, 0.0, false),
    ///     Err(InvalidOrbitError::UnboundEccentricity),
    /// );
    /// ```
    pub fn try_new(
        semi_major_axis: f64,
        eccentricity: f64,
        arg_pe: f64,
        clockwise: bool,
    ) -> Result<Self, InvalidOrbitError> {
        let error = if !semi_major_axis.is_finite()
            || !eccentricity.is_finite()
            || !arg_pe.is_finite()
        {
            Some(InvalidOrbitError::NonFiniteElement)
        } else if semi_major_axis < 0.0 {
            Some(InvalidOrbitError::NegativeSemiMajorAxis)
        } else if eccentricity < 0.0 {
            Some(InvalidOrbitError::NegativeEccentricity)
        } else if eccentricity >= 1.0 {
            Some(InvalidOrbitError::UnboundEccentricity)
        } else {
            None
        };

        match error {
            Some(error) => {
                tracing::debug!(
                    semi_major_axis,
                    eccentricity,
                    arg_pe,
                    %error,
                    "rejected orbit elements"
                );
                Err(error)
            }
            None => Ok(Self {
                semi_major_axis,
                eccentricity,
                arg_pe,
                clockwise,
            }),
        }
    }

    /// Gets the semi-major axis of the orbit.
    pub fn get_semi_major_axis(&self) -> f64 {
        self.semi_major_axis
    }

    /// Gets the eccentricity of the orbit.
    pub fn get_eccentricity(&self) -> f64 {
        self.eccentricity
    }

    /// Gets the argument of periapsis of the orbit, in radians.
    pub fn get_arg_pe(&self) -> f64 {
        self.arg_pe
    }

    /// Whether the orbit winds clockwise in the local frame.
    pub fn is_clockwise(&self) -> bool {
        self.clockwise
    }

    /// Whether the orbit is a closed ellipse (e < 1).
    pub fn is_elliptic(&self) -> bool {
        self.eccentricity < 1.0
    }

    /// Gets the semi-minor axis of the orbit.
    ///
    /// Returns NaN for eccentricities above one.
    pub fn get_semi_minor_axis(&self) -> f64 {
        self.semi_major_axis * sqrt(1.0 - self.eccentricity * self.eccentricity)
    }

    /// Gets the distance between the center of the ellipse and the focus
    /// the orbit revolves around.
    ///
    /// This is also known as the linear eccentricity.
    pub fn get_focal_distance(&self) -> f64 {
        self.eccentricity * self.semi_major_axis
    }

    /// Gets the distance between the focus and the closest point of the orbit.
    pub fn get_periapsis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    /// Gets the distance between the focus and the farthest point of the orbit.
    pub fn get_apoapsis(&self) -> f64 {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }

    /// Gets the semi-latus rectum of the orbit.
    ///
    /// This is the numerator of the conic equation used by
    /// [`TrueAnomaly::get_radius`][crate::TrueAnomaly::get_radius].
    ///
    /// Learn more: <https://en.wikipedia.org/wiki/Ellipse#Semi-latus_rectum>
    pub fn get_semi_latus_rectum(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity * self.eccentricity)
    }

    /// Rotates a point from the orbit's own frame (focus at the origin,
    /// periapsis on the positive X axis) into the local frame.
    ///
    /// Clockwise orbits have the Y axis mirrored first. The rotation then
    /// uses the local frame's convention:
    ///
    /// ```text
    /// x' = x cos(ω) + y sin(ω)
    /// y' = y cos(ω) - x sin(ω)
    /// ```
    ///
    /// which turns positive angles the opposite way from a right-handed
    /// rotation matrix.
    ///
    /// # Example
    /// ```
    /// use glam::DVec2;
    /// use keplerian_anomaly::OrbitElements;
    ///
    /// let ccw = OrbitElements::new(1.0, 0.0, 0.0, false);
    /// let cw = OrbitElements::new(1.0, 0.0, 0.0, true);
    ///
    /// assert_eq!(ccw.rotate_point(DVec2::new(1.0, 1.0)), DVec2::new(1.0, 1.0));
    /// assert_eq!(cw.rotate_point(DVec2::new(1.0, 1.0)), DVec2::new(1.0, -1.0));
    /// ```
    pub fn rotate_point(&self, point: DVec2) -> DVec2 {
        let y = if self.clockwise { -point.y } else { point.y };
        let x = point.x;

        let (s, c) = (sin(self.arg_pe), cos(self.arg_pe));

        DVec2::new(x * c + y * s, y * c - x * s)
    }
}

impl Default for OrbitElements {
    /// Creates a counter-clockwise unit circle.
    fn default() -> Self {
        Self::circular(1.0)
    }
}

/// An error to describe why [`OrbitElements::try_new`] rejected its input.
#[non_exhaustive]
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum InvalidOrbitError {
    /// ### One of the elements is NaN or infinite.
    NonFiniteElement,

    /// ### The semi-major axis is negative.
    /// The semi-major axis is a length, so it can't be less than zero.
    NegativeSemiMajorAxis,

    /// ### The eccentricity is negative.
    /// Eccentricity is defined as a ratio of two distances and can't be
    /// less than zero.
    NegativeEccentricity,

    /// ### The eccentricity is one or more.
    /// Parabolic and hyperbolic trajectories are open curves, and the
    /// anomaly conversions only describe closed ellipses.
    UnboundEccentricity,
}

impl InvalidOrbitError {
    const NON_FINITE: &'static str = "orbit elements must be finite";
    const NEGATIVE_SEMI_MAJOR_AXIS: &'static str = "semi-major axis must not be negative";
    const NEGATIVE_ECCENTRICITY: &'static str = "eccentricity must not be negative";
    const UNBOUND_ECCENTRICITY: &'static str = "eccentricity must be less than one";
}

impl fmt::Display for InvalidOrbitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::NonFiniteElement => Self::NON_FINITE,
            Self::NegativeSemiMajorAxis => Self::NEGATIVE_SEMI_MAJOR_AXIS,
            Self::NegativeEccentricity => Self::NEGATIVE_ECCENTRICITY,
            Self::UnboundEccentricity => Self::UNBOUND_ECCENTRICITY,
        };

        write!(f, "invalid orbit: {message}")
    }
}

impl Error for InvalidOrbitError {}
