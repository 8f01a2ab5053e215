use bevy::prelude::*;
use bevy_rotating_body::prelude::*;

const SPEED_STEP: f32 = 15.0; // degrees per second per key press

#[derive(Component)]
struct Controlled;

// remembers the speed to resume at after a stop
#[derive(Resource)]
struct ResumeSpeed(f32);

fn main() {
    App::new()
        .add_plugins((DefaultPlugins, RotatingBodyPlugin))
        .insert_resource(ResumeSpeed(DEFAULT_ANGULAR_SPEED))
        .add_systems(Startup, setup)
        .add_systems(Update, speed_control.before(SpinSet))
        .run();
}

// setup a sample 3d Scene
fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // circular base
    commands.spawn((
        Mesh3d(meshes.add(Circle::new(4.0))),
        MeshMaterial3d(materials.add(Color::WHITE)),
        Transform::from_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2)),
    ));

    // cube, keyboard controlled
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(1.0, 1.0, 1.0))),
        MeshMaterial3d(materials.add(Color::srgb_u8(124, 144, 255))),
        Transform::from_xyz(0.0, 0.5, 0.0),
        RotatingBody::default(),
        Controlled,
    ));

    // tilted cube, shows the spin happens about its own up-axis
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(0.5, 1.0, 0.5))),
        MeshMaterial3d(materials.add(Color::srgb_u8(255, 144, 124))),
        Transform::from_xyz(2.0, 1.0, 0.0).with_rotation(Quat::from_rotation_z(0.6)),
        RotatingBody::new(-90.0),
    ));

    // light
    commands.spawn((
        PointLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 8.0, 4.0),
    ));

    // camera
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(-2.5, 4.5, 9.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    info!("Space: stop/start, Up/Down: change speed, R: reverse");
}

fn speed_control(
    keys: Res<ButtonInput<KeyCode>>,
    mut resume: ResMut<ResumeSpeed>,
    mut query: Query<&mut RotatingBody, With<Controlled>>,
) {
    for mut body in &mut query {
        let before = body.speed();

        if keys.just_pressed(KeyCode::Space) {
            if body.is_spinning() {
                resume.0 = body.speed();
                body.stop();
            } else {
                body.start(resume.0);
            }
        }
        if keys.just_pressed(KeyCode::ArrowUp) {
            let speed = body.speed() + SPEED_STEP;
            body.set_speed(speed);
        }
        if keys.just_pressed(KeyCode::ArrowDown) {
            let speed = body.speed() - SPEED_STEP;
            body.set_speed(speed);
        }
        if keys.just_pressed(KeyCode::KeyR) {
            let speed = -body.speed();
            body.set_speed(speed);
        }

        if body.speed() != before {
            info!("cube speed {:.1} -> {:.1} deg/s", before, body.speed());
        }
    }
}
