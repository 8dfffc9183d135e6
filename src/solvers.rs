#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::math::abs;
use crate::{
    keplers_equation, keplers_equation_derivative, KEPLER_MAX_ITERATIONS, KEPLER_TOLERANCE,
};

/// The outcome of inverting Kepler's equation for one mean anomaly.
///
/// Besides the eccentric anomaly itself, this keeps track of how the
/// solver got there, so callers can tell an early convergence apart from
/// a run that used up its whole iteration budget.
///
/// # Example
/// ```
/// use keplerian_anomaly::{MeanAnomaly, OrbitElements, KEPLER_MAX_ITERATIONS};
///
/// let orbit = OrbitElements::new(1.0, 0.3, 0.0, false);
/// let solution = MeanAnomaly::new(1.0).solve(&orbit);
///
/// assert!(solution.converged());
/// assert!(solution.iterations <= KEPLER_MAX_ITERATIONS);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeplerSolution {
    /// The last estimate of the eccentric anomaly, in radians.
    pub eccentric_anomaly: f64,

    /// The number of Newton steps taken, between 1 and
    /// [`KEPLER_MAX_ITERATIONS`].
    pub iterations: u32,

    /// The value of `E - e sin(E) - M` at the returned estimate.
    pub residual: f64,
}

impl KeplerSolution {
    /// Whether the residual dropped below [`KEPLER_TOLERANCE`].
    ///
    /// A `false` here means the solver ran out of iterations and
    /// [`eccentric_anomaly`][Self::eccentric_anomaly] is only its best guess.
    pub fn converged(&self) -> bool {
        abs(self.residual) < KEPLER_TOLERANCE
    }
}

/// Solves Kepler's equation `M = E - e sin(E)` for the eccentric anomaly.
///
/// # Algorithm
/// Newton's method, starting from `E_0 = M`:
///
/// ```text
/// f(E)  = E - e sin(E) - M
/// f'(E) = 1 - e cos(E)
/// Δ     = clamp(f(E) / f'(E), -e/2, e/2)
/// E     = E - Δ
/// ```
///
/// The loop returns as soon as `|f(E)|` is below [`KEPLER_TOLERANCE`], and
/// gives up after [`KEPLER_MAX_ITERATIONS`] steps, returning whatever the
/// last estimate was.
///
/// # Unchecked Operation
/// This function does not check whether the eccentricity is elliptic.
/// For eccentricities of one or more the result may be meaningless or NaN.
pub(crate) fn solve_keplers_equation(eccentricity: f64, mean_anomaly: f64) -> KeplerSolution {
    let max_step = eccentricity * 0.5;

    let mut eccentric_anomaly = mean_anomaly;
    let mut residual = keplers_equation(mean_anomaly, eccentric_anomaly, eccentricity);
    let mut iterations = 0;

    while iterations < KEPLER_MAX_ITERATIONS {
        iterations += 1;

        let derivative = keplers_equation_derivative(eccentric_anomaly, eccentricity);

        // NaN steps pass through unclamped
        let step = residual / derivative;
        let delta = if step > max_step {
            max_step
        } else if step < -max_step {
            -max_step
        } else {
            step
        };
        eccentric_anomaly -= delta;

        residual = keplers_equation(mean_anomaly, eccentric_anomaly, eccentricity);

        if abs(residual) < KEPLER_TOLERANCE {
            tracing::trace!(
                eccentricity,
                mean_anomaly,
                eccentric_anomaly,
                iterations,
                residual,
                "Kepler's equation converged"
            );
            return KeplerSolution {
                eccentric_anomaly,
                iterations,
                residual,
            };
        }
    }

    tracing::debug!(
        eccentricity,
        mean_anomaly,
        eccentric_anomaly,
        iterations,
        residual,
        "Kepler's equation did not converge within the iteration budget"
    );

    KeplerSolution {
        eccentric_anomaly,
        iterations,
        residual,
    }
}
