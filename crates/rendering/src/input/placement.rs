use bevy::prelude::*;

use simulation::events::ObjectPlaced;

use crate::egui_input_guard::EguiBlocksPointer;

use super::types::{BuildMode, CursorGround, PlacedObject, PlacementRoot, Selection};

/// Commit the selection on a left-click edge: spawn a permanent opaque copy
/// at this frame's ray-plane intersection, then clear the selection.
///
/// The intersection comes from the cursor raycast that runs earlier in the
/// same frame. A ray miss drops the click; a click with no selection is a
/// no-op. Clicks claimed by egui never reach this system.
pub fn handle_placement_click(
    mut commands: Commands,
    buttons: Res<ButtonInput<MouseButton>>,
    mode: Res<BuildMode>,
    cursor: Res<CursorGround>,
    egui_guard: Res<EguiBlocksPointer>,
    root: Res<PlacementRoot>,
    mut selection: ResMut<Selection>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut placed_events: EventWriter<ObjectPlaced>,
) {
    if !mode.enabled || !buttons.just_pressed(MouseButton::Left) || egui_guard.0 {
        return;
    }
    let Some(active) = selection.active() else {
        return;
    };
    if !cursor.hit {
        debug!("placement click missed the ground plane");
        return;
    }

    let def = active.def.clone();
    let dims = def.dimensions();
    let mesh = meshes.add(Cuboid::new(dims.x, dims.y, dims.z));
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(def.color[0], def.color[1], def.color[2]),
        ..default()
    });

    commands
        .spawn((
            PlacedObject {
                name: def.name.clone(),
                kind: def.kind,
            },
            Mesh3d(mesh),
            MeshMaterial3d(material),
            Transform {
                translation: cursor.world_pos + Vec3::Y * def.half_height(),
                rotation: def.rotation(),
                ..default()
            },
        ))
        .set_parent(root.0);

    info!("placed '{}' at {:?}", def.name, cursor.world_pos);
    placed_events.send(ObjectPlaced {
        name: def.name,
        kind: def.kind,
        position: cursor.world_pos,
        on_ground: cursor.on_ground,
    });
    selection.clear();
}
