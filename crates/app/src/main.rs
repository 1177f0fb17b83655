use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use simulation::tutorial::{TutorialCourse, TutorialState};

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Minicity".to_string(),
            resolution: (1280.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    })
    .add_plugins((
        simulation::SimulationPlugin,
        rendering::RenderingPlugin,
        ui::UiPlugin,
    ));

    // MINICITY_TUTORIAL=guided runs the longer category-first course;
    // MINICITY_TUTORIAL=off starts with the banner dismissed.
    match std::env::var("MINICITY_TUTORIAL").as_deref() {
        Ok("guided") => {
            app.insert_resource(TutorialState::with_course(TutorialCourse::Guided));
        }
        Ok("off") => {
            let mut tutorial = TutorialState::default();
            tutorial.dismiss();
            app.insert_resource(tutorial);
        }
        _ => {}
    }

    app.run();
}
