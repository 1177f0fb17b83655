use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;

use crate::input::BuildMode;

const MOVE_SPEED: f32 = 25.0;
const LOOK_SENSITIVITY: f32 = 0.003; // radians per pixel
const MIN_PITCH: f32 = -80.0 * std::f32::consts::PI / 180.0;
const MAX_PITCH: f32 = 80.0 * std::f32::consts::PI / 180.0;

/// Free camera model: a position plus yaw/pitch, applied to the camera
/// transform each frame. Frozen while build mode is on.
#[derive(Resource)]
pub struct FreeCamera {
    pub position: Vec3,
    /// Horizontal rotation in radians.
    pub yaw: f32,
    /// Elevation angle in radians, clamped between MIN_PITCH and MAX_PITCH.
    pub pitch: f32,
}

impl Default for FreeCamera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 30.0, 60.0),
            yaw: 0.0,
            pitch: -0.45,
        }
    }
}

pub fn setup_camera(mut commands: Commands) {
    let cam = FreeCamera::default();
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(cam.position)
            .with_rotation(Quat::from_euler(EulerRot::YXZ, cam.yaw, cam.pitch, 0.0)),
    ));
    commands.insert_resource(cam);
}

/// WASD/Arrow keys: translate on the ground plane, relative to current yaw.
pub fn camera_move(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mode: Res<BuildMode>,
    mut cam: ResMut<FreeCamera>,
) {
    if mode.enabled {
        return;
    }

    let mut dir = Vec3::ZERO;
    if keys.pressed(KeyCode::KeyW) || keys.pressed(KeyCode::ArrowUp) {
        dir.z -= 1.0;
    }
    if keys.pressed(KeyCode::KeyS) || keys.pressed(KeyCode::ArrowDown) {
        dir.z += 1.0;
    }
    if keys.pressed(KeyCode::KeyA) || keys.pressed(KeyCode::ArrowLeft) {
        dir.x -= 1.0;
    }
    if keys.pressed(KeyCode::KeyD) || keys.pressed(KeyCode::ArrowRight) {
        dir.x += 1.0;
    }
    if dir == Vec3::ZERO {
        return;
    }

    let delta = Quat::from_rotation_y(cam.yaw) * dir.normalize() * MOVE_SPEED * time.delta_secs();
    // Stay level: movement never changes altitude.
    cam.position.x += delta.x;
    cam.position.z += delta.z;
}

/// Right-mouse held: accumulated mouse motion drives yaw and pitch.
pub fn camera_look(
    buttons: Res<ButtonInput<MouseButton>>,
    mut motion: EventReader<MouseMotion>,
    mode: Res<BuildMode>,
    mut cam: ResMut<FreeCamera>,
) {
    if mode.enabled || !buttons.pressed(MouseButton::Right) {
        motion.clear();
        return;
    }
    let mut delta = Vec2::ZERO;
    for ev in motion.read() {
        delta += ev.delta;
    }
    if delta == Vec2::ZERO {
        return;
    }
    cam.yaw -= delta.x * LOOK_SENSITIVITY;
    cam.pitch = (cam.pitch - delta.y * LOOK_SENSITIVITY).clamp(MIN_PITCH, MAX_PITCH);
}

/// Apply FreeCamera state to the actual camera transform each frame.
pub fn apply_free_camera(
    cam: Res<FreeCamera>,
    mut query: Query<&mut Transform, With<Camera3d>>,
) {
    if !cam.is_changed() {
        return;
    }
    let Ok(mut transform) = query.get_single_mut() else {
        return;
    };
    *transform = Transform::from_translation(cam.position)
        .with_rotation(Quat::from_euler(EulerRot::YXZ, cam.yaw, cam.pitch, 0.0));
}
