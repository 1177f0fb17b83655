use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod palette;
pub mod tutorial_panel;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<palette::OpenCategory>()
            .add_systems(
                Update,
                (palette::palette_ui, tutorial_panel::tutorial_panel_ui),
            );
    }
}
