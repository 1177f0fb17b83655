use bevy::prelude::*;

use crate::input::{BuildMode, CursorGround, Selection};

const HOLOGRAM_ALPHA: f32 = 0.35;

/// Marker for the single translucent preview entity.
#[derive(Component, Debug)]
pub struct Hologram {
    /// Display name of the def this preview stands in for.
    pub name: String,
    /// Vertical offset resting the preview on the ground plane.
    pub half_height: f32,
}

/// Keep the preview entity in step with the selection: despawn the old one
/// synchronously, then spawn a fresh one from the selected def's template.
/// Invariant: a hologram exists iff the selection is non-empty.
pub fn sync_hologram_selection(
    mut commands: Commands,
    selection: Res<Selection>,
    existing: Query<Entity, With<Hologram>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !selection.is_changed() {
        return;
    }

    for entity in &existing {
        commands.entity(entity).despawn();
    }

    let Some(active) = selection.active() else {
        return;
    };
    let def = &active.def;
    let dims = def.dimensions();
    let mesh = meshes.add(Cuboid::new(dims.x, dims.y, dims.z));
    let material = materials.add(StandardMaterial {
        base_color: Color::srgba(def.color[0], def.color[1], def.color[2], HOLOGRAM_ALPHA),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });

    commands.spawn((
        Hologram {
            name: def.name.clone(),
            half_height: def.half_height(),
        },
        Mesh3d(mesh),
        MeshMaterial3d(material),
        Transform {
            translation: Vec3::Y * def.half_height(),
            rotation: def.rotation(),
            ..default()
        },
        Visibility::Hidden,
    ));
}

/// Track the cursor each frame: on a plane hit, move the preview there and
/// show it; on a miss (or with build mode off) hide it. Recomputed
/// unconditionally, no caching or smoothing.
pub fn update_hologram(
    mode: Res<BuildMode>,
    cursor: Res<CursorGround>,
    mut query: Query<(&Hologram, &mut Transform, &mut Visibility)>,
) {
    let Ok((hologram, mut transform, mut vis)) = query.get_single_mut() else {
        return;
    };
    if !mode.enabled || !cursor.hit {
        *vis = Visibility::Hidden;
        return;
    }
    transform.translation = cursor.world_pos + Vec3::Y * hologram.half_height;
    *vis = Visibility::Visible;
}
