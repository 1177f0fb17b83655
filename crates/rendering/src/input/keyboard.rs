use bevy::prelude::*;
use bevy::window::CursorGrabMode;

use super::types::{BuildMode, Selection};

/// `E` toggles build mode. Leaving the mode clears the selection; the
/// hologram despawn follows from the selection sync, so repeated off-toggles
/// are no-ops.
pub fn toggle_build_mode(
    keys: Res<ButtonInput<KeyCode>>,
    mut mode: ResMut<BuildMode>,
    mut selection: ResMut<Selection>,
) {
    if !keys.just_pressed(KeyCode::KeyE) {
        return;
    }
    mode.toggle();
    if !mode.enabled {
        selection.clear();
    }
    info!("build mode: {}", mode.enabled);
}

/// Pointer capture tracks the mode inversely: freed for the palette while
/// building, grabbed and hidden for camera look otherwise.
pub fn apply_cursor_grab(mode: Res<BuildMode>, mut windows: Query<&mut Window>) {
    if !mode.is_changed() {
        return;
    }
    let Ok(mut window) = windows.get_single_mut() else {
        return;
    };
    if mode.enabled {
        window.cursor_options.grab_mode = CursorGrabMode::None;
        window.cursor_options.visible = true;
    } else {
        window.cursor_options.grab_mode = CursorGrabMode::Locked;
        window.cursor_options.visible = false;
    }
}
