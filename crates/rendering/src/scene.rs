use bevy::prelude::*;

use simulation::config::{GROUND_HALF_EXTENT, GROUND_Y};

use crate::input::PlacementRoot;

/// Marker for the ground slab entity.
#[derive(Component)]
pub struct GroundSlab;

/// Spawn the ground slab and the empty root that parents placed objects.
pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let extent = GROUND_HALF_EXTENT * 2.0;
    commands.spawn((
        GroundSlab,
        Mesh3d(meshes.add(Cuboid::new(extent, 0.1, extent))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.35, 0.5, 0.3),
            perceptual_roughness: 1.0,
            ..default()
        })),
        // Top face sits flush with the placement plane.
        Transform::from_xyz(0.0, GROUND_Y - 0.05, 0.0),
    ));

    let root = commands
        .spawn((Name::new("placed_objects"), Transform::default(), Visibility::default()))
        .id();
    commands.insert_resource(PlacementRoot(root));
}

pub fn setup_lighting(mut commands: Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.9, 0.9, 1.0),
        brightness: 300.0,
    });

    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::XYZ,
            -std::f32::consts::FRAC_PI_4,
            std::f32::consts::FRAC_PI_6,
            0.0,
        )),
    ));
}
