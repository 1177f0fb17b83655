use bevy::prelude::*;

use simulation::config::GROUND_HALF_EXTENT;

use super::types::CursorGround;

/// Intersect a ray with the Y=0 placement plane. Returns `None` for
/// near-parallel rays and hits behind the ray origin.
pub(crate) fn ray_ground_hit(origin: Vec3, direction: Vec3) -> Option<Vec3> {
    if direction.y.abs() <= 1e-3 {
        return None;
    }
    let t = -origin.y / direction.y;
    if t <= 0.0 {
        return None;
    }
    Some(origin + direction * t)
}

/// Whether a plane hit falls on the finite ground slab.
pub(crate) fn within_ground(hit: Vec3) -> bool {
    hit.x.abs() <= GROUND_HALF_EXTENT && hit.z.abs() <= GROUND_HALF_EXTENT
}

/// Each frame, cast a ray from the camera through the cursor and record the
/// ground-plane intersection for the hologram and placement systems.
pub fn update_cursor_ground(
    windows: Query<&Window>,
    camera_q: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    mut cursor: ResMut<CursorGround>,
) {
    cursor.hit = false;
    cursor.on_ground = false;

    let Ok(window) = windows.get_single() else {
        return;
    };
    let Ok((camera, cam_transform)) = camera_q.get_single() else {
        return;
    };
    let Some(screen_pos) = window.cursor_position() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(cam_transform, screen_pos) else {
        return;
    };

    if let Some(hit) = ray_ground_hit(ray.origin, *ray.direction) {
        cursor.world_pos = hit;
        cursor.hit = true;
        cursor.on_ground = within_ground(hit);
    }
}
