use bevy::prelude::*;

use simulation::catalog::{PlaceableDef, PlaceableKind};

/// Build-mode gate. Off: the camera roams freely and the pointer is grabbed.
/// On: the palette is shown and the hologram/placement systems run.
#[derive(Resource, Debug, Default)]
pub struct BuildMode {
    pub enabled: bool,
}

impl BuildMode {
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }
}

/// The currently chosen catalog entry. At most one selection is live; the
/// hologram sync system keeps the single preview entity in step with it.
#[derive(Resource, Debug, Default)]
pub struct Selection {
    active: Option<ActiveSelection>,
}

#[derive(Debug, Clone)]
pub struct ActiveSelection {
    pub category: usize,
    pub index: usize,
    pub def: PlaceableDef,
}

impl Selection {
    /// Replace the current selection. The prior hologram is despawned by the
    /// sync system before the new one spawns.
    pub fn select(&mut self, category: usize, index: usize, def: PlaceableDef) {
        self.active = Some(ActiveSelection {
            category,
            index,
            def,
        });
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    pub fn active(&self) -> Option<&ActiveSelection> {
        self.active.as_ref()
    }
}

/// Per-frame cursor ray vs. placement plane intersection, recomputed
/// unconditionally every frame with no caching or smoothing.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct CursorGround {
    pub world_pos: Vec3,
    /// The ray intersected the plane in front of the camera.
    pub hit: bool,
    /// The hit point lies on the finite ground slab.
    pub on_ground: bool,
}

/// Root entity that parents every placed copy.
#[derive(Resource)]
pub struct PlacementRoot(pub Entity);

/// Marker for permanently placed copies.
#[derive(Component, Debug)]
pub struct PlacedObject {
    pub name: String,
    pub kind: PlaceableKind,
}
