use bevy::prelude::*;

use crate::rotating_body::RotatingBody;

/// System set `spin_bodies` runs in, for ordering app systems around it.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct SpinSet;

/// Adds per-frame spinning for every entity with a [`RotatingBody`].
#[derive(Default)]
pub struct RotatingBodyPlugin;

impl Plugin for RotatingBodyPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<RotatingBody>()
            .add_systems(Update, spin_bodies.in_set(SpinSet));
        debug!("RotatingBodyPlugin added spin_bodies to Update");
    }
}

// one frame tick per body, elapsed time from the host clock
pub fn spin_bodies(mut query: Query<(&mut Transform, &RotatingBody)>, time: Res<Time>) {
    let dt = time.delta_secs();
    for (mut transform, body) in &mut query {
        // stopped bodies must not mark their Transform as changed
        if !body.is_spinning() {
            continue;
        }
        body.on_frame_tick(&mut transform, dt);
    }
}
