//! # TestScene — headless harness for interaction tests
//!
//! Wraps `bevy::app::App` + `SimulationPlugin` with `MinimalPlugins` so
//! tutorial and event flows can be driven without a window or renderer.
//! `MinimalPlugins` carries no input plugin, so key state is fed and reset
//! by hand around each update.

use bevy::app::App;
use bevy::input::ButtonInput;
use bevy::prelude::*;

use crate::catalog::PlaceableKind;
use crate::events::{CategoryChosen, ObjectPlaced, SelectPlaceable};
use crate::tutorial::{TutorialCourse, TutorialState};
use crate::SimulationPlugin;

pub struct TestScene {
    app: App,
}

impl Default for TestScene {
    fn default() -> Self {
        Self::new()
    }
}

impl TestScene {
    pub fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.init_resource::<ButtonInput<KeyCode>>();
        app.add_plugins(SimulationPlugin);
        // Run one update so Startup systems execute.
        app.update();
        Self { app }
    }

    pub fn with_course(course: TutorialCourse) -> Self {
        let mut scene = Self::new();
        scene
            .app
            .world_mut()
            .insert_resource(TutorialState::with_course(course));
        scene
    }

    // -----------------------------------------------------------------------
    // Driving
    // -----------------------------------------------------------------------

    pub fn tick(&mut self) {
        self.app.update();
    }

    /// Press a key for exactly one frame so edge detection fires once.
    pub fn press_key(&mut self, key: KeyCode) {
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(key);
        self.app.update();
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .reset(key);
        self.app.update();
    }

    /// Simulate the palette opening a category.
    pub fn choose_category(&mut self, category: usize) {
        self.app.world_mut().send_event(CategoryChosen { category });
        self.app.update();
    }

    /// Simulate the palette selecting an item.
    pub fn select_item(&mut self, category: usize, index: usize) {
        self.app
            .world_mut()
            .send_event(SelectPlaceable { category, index });
        self.app.update();
    }

    /// Simulate the placement committer reporting a placed object.
    pub fn report_placement(&mut self, on_ground: bool) {
        self.app.world_mut().send_event(ObjectPlaced {
            name: "House".to_string(),
            kind: PlaceableKind::Building,
            position: Vec3::ZERO,
            on_ground,
        });
        self.app.update();
    }

    // -----------------------------------------------------------------------
    // Inspection
    // -----------------------------------------------------------------------

    pub fn tutorial(&self) -> &TutorialState {
        self.app.world().resource::<TutorialState>()
    }

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }
}
