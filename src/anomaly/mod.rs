/// Implements the constructors of a single-field angle wrapper.
macro_rules! angle_wrapper {
    ($name:ident) => {
        impl $name {
            #[doc = concat!("Creates a new [`", stringify!($name), "`] from an angle in radians.")]
            pub const fn new(angle: f64) -> Self {
                Self { angle }
            }

            #[doc = concat!("Creates a new [`", stringify!($name), "`] from an angle in degrees.")]
            pub fn from_degrees(degrees: f64) -> Self {
                Self::new(degrees.to_radians())
            }
        }

        impl From<f64> for $name {
            fn from(angle: f64) -> Self {
                Self::new(angle)
            }
        }
    };
}

pub(crate) use angle_wrapper;

mod eccentric;
mod mean;
mod true_anomaly;

pub use eccentric::EccentricAnomaly;
pub use mean::MeanAnomaly;
pub use true_anomaly::TrueAnomaly;
