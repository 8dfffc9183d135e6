//! Drives a few bodies around their orbits with a simulated clock and
//! prints where they would be drawn.
//!
//! Run with `RUST_LOG=debug` to see the solver's diagnostics as well.

use std::f64::consts::{PI, TAU};
use std::io::{self, Write};

use keplerian_anomaly::{Anomaly, MeanAnomaly, OrbitElements};

const SIMULATION_TICKS: u32 = 48;
const TIME_STEP: f64 = 0.25;

struct Body {
    name: &'static str,
    orbit: OrbitElements,
    /// Seconds per revolution.
    period: f64,
}

impl Body {
    /// Maps the simulated time onto a mean anomaly in `[-π, π)`.
    fn mean_anomaly_at(&self, time: f64) -> MeanAnomaly {
        let mean_motion = TAU / self.period;
        MeanAnomaly::new((mean_motion * time + PI).rem_euclid(TAU) - PI)
    }
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt::init();

    let bodies = [
        Body {
            name: "circle",
            orbit: OrbitElements::circular(100.0),
            period: 6.0,
        },
        Body {
            name: "ellipse",
            orbit: OrbitElements::new(150.0, 0.6, PI / 4.0, false),
            period: 9.0,
        },
        Body {
            name: "retrograde",
            orbit: OrbitElements::new(80.0, 0.3, -PI / 3.0, true),
            period: 4.0,
        },
    ];

    for body in &bodies {
        tracing::info!(
            body = body.name,
            periapsis = body.orbit.get_periapsis(),
            apoapsis = body.orbit.get_apoapsis(),
            "registered orbit"
        );
    }

    let mut lock = io::stdout().lock();

    for tick in 0..SIMULATION_TICKS {
        let time = tick as f64 * TIME_STEP;
        writeln!(&mut lock, "=== t = {time:.2} s ===")?;

        for body in &bodies {
            let mean = body.mean_anomaly_at(time);
            let solution = mean.solve(&body.orbit);
            if !solution.converged() {
                tracing::warn!(body = body.name, ?solution, "position is approximate");
            }

            let point = mean.get_point_2d(&body.orbit);
            let true_anomaly = mean.get_true_anomaly(&body.orbit);

            writeln!(
                &mut lock,
                "{:>10}: ({:>9.3}, {:>9.3})  r = {:>8.3}  ν = {:>8.3}°",
                body.name,
                point.x,
                point.y,
                mean.get_radius(&body.orbit),
                true_anomaly.get_degrees(),
            )?;
        }
    }

    Ok(())
}
