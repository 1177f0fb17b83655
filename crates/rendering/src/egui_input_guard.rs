//! Egui input guard: prevents click-through from UI elements to the world.
//!
//! When egui (palette, tutorial panel) is handling pointer input, the
//! placement committer must skip the click to avoid placing an object
//! underneath the button that was just pressed.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

/// True while egui wants the pointer — the cursor is over an egui area or
/// egui is handling a click/drag. Refreshed each frame before placement runs.
#[derive(Resource, Default)]
pub struct EguiBlocksPointer(pub bool);

pub fn update_egui_pointer_guard(
    mut guard: ResMut<EguiBlocksPointer>,
    mut contexts: EguiContexts,
) {
    let ctx = contexts.ctx_mut();
    guard.0 = ctx.wants_pointer_input() || ctx.is_pointer_over_area();
}
