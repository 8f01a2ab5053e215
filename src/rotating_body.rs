use bevy::prelude::*;

/// Angular speed a freshly attached [`RotatingBody`] spins at, in degrees per second.
pub const DEFAULT_ANGULAR_SPEED: f32 = 30.0;

/// Outcome of [`RotatingBody::set_axis`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AxisSupport {
    /// The request was ignored; the body keeps spinning about its local up-axis.
    Unsupported,
}

/// Spins the owning entity's [`Transform`] about its own local up-axis (+Y).
///
/// The speed is signed and given in degrees per second. A speed of exactly
/// zero leaves the transform untouched. Values are stored as-is, so negative
/// speeds spin the other way and non-finite speeds produce a non-finite
/// rotation.
#[derive(Component, Reflect, Debug, Copy, Clone, PartialEq)]
#[reflect(Component, Default)]
pub struct RotatingBody {
    angular_speed: f32, // degrees per second
}

impl Default for RotatingBody {
    fn default() -> Self {
        Self::new(DEFAULT_ANGULAR_SPEED)
    }
}

impl RotatingBody {
    pub fn new(angular_speed: f32) -> Self {
        Self { angular_speed }
    }

    pub fn speed(&self) -> f32 {
        self.angular_speed
    }

    pub fn set_speed(&mut self, value: f32) {
        if !value.is_finite() {
            warn!("RotatingBody speed set to non-finite value {value}");
        }
        self.angular_speed = value;
    }

    /// Same as [`set_speed`](Self::set_speed), reads better where rotation is (re)activated.
    pub fn start(&mut self, speed: f32) {
        self.set_speed(speed);
    }

    pub fn stop(&mut self) {
        self.set_speed(0.0);
    }

    /// Placeholder for a configurable axis. The body always spins about its
    /// local up-axis; `axis` is ignored.
    pub fn set_axis(&mut self, axis: Vec3) -> AxisSupport {
        debug!("RotatingBody::set_axis({axis}) ignored, axis stays local +Y");
        AxisSupport::Unsupported
    }

    pub fn is_spinning(&self) -> bool {
        self.angular_speed != 0.0
    }

    /// Applies one frame of rotation, composed in the transform's local frame.
    /// Called by the host loop (see [`spin_bodies`](crate::spin::spin_bodies)).
    pub fn on_frame_tick(&self, transform: &mut Transform, elapsed_secs: f32) {
        if !self.is_spinning() {
            return;
        }
        transform.rotate_local_y(self.angular_speed.to_radians() * elapsed_secs);
    }
}
