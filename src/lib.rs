pub mod rotating_body;
pub mod spin;

pub mod prelude {
    pub use crate::rotating_body::{AxisSupport, RotatingBody, DEFAULT_ANGULAR_SPEED};
    pub use crate::spin::{spin_bodies, RotatingBodyPlugin, SpinSet};
}
