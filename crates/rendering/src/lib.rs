use bevy::prelude::*;

pub mod camera;
pub mod egui_input_guard;
pub mod hologram;
pub mod input;
pub mod scene;

#[cfg(test)]
mod interaction_tests;

use egui_input_guard::EguiBlocksPointer;
use input::{BuildMode, CursorGround, Selection};

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BuildMode>()
            .init_resource::<Selection>()
            .init_resource::<CursorGround>()
            .init_resource::<EguiBlocksPointer>()
            .add_systems(
                Startup,
                (camera::setup_camera, scene::setup_lighting, scene::setup_scene),
            )
            .add_systems(
                Update,
                (camera::camera_move, camera::camera_look, camera::apply_free_camera).chain(),
            )
            .add_systems(
                Update,
                (
                    egui_input_guard::update_egui_pointer_guard,
                    input::toggle_build_mode,
                    input::apply_cursor_grab,
                    input::update_cursor_ground,
                    input::apply_selection_events,
                    input::handle_placement_click,
                    hologram::sync_hologram_selection,
                    hologram::update_hologram,
                )
                    .chain(),
            );
    }
}
