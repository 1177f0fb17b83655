use bevy::prelude::*;

pub mod catalog;
pub mod config;
pub mod events;
pub mod test_harness;
pub mod tutorial;

#[cfg(test)]
mod integration_tests;

use catalog::PlaceableCatalog;
use events::{CategoryChosen, ObjectPlaced, SelectPlaceable};
use tutorial::TutorialState;

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlaceableCatalog>()
            .init_resource::<TutorialState>()
            .add_event::<CategoryChosen>()
            .add_event::<SelectPlaceable>()
            .add_event::<ObjectPlaced>()
            .add_systems(
                Update,
                (tutorial::advance_tutorial, tutorial::tick_tutorial_hide).chain(),
            );
    }
}
