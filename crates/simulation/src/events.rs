use bevy::prelude::*;

use crate::catalog::PlaceableKind;

/// Sent by the palette when a category button is clicked.
#[derive(Event, Debug, Clone, Copy)]
pub struct CategoryChosen {
    pub category: usize,
}

/// Sent by the palette when an item button is clicked.
///
/// Carries catalog indices rather than borrowed defs so handlers stay
/// decoupled from the UI code that generated the button.
#[derive(Event, Debug, Clone, Copy)]
pub struct SelectPlaceable {
    pub category: usize,
    pub index: usize,
}

/// Sent by the placement committer after a permanent copy is spawned.
#[derive(Event, Debug, Clone)]
pub struct ObjectPlaced {
    pub name: String,
    pub kind: PlaceableKind,
    pub position: Vec3,
    /// Whether the hit point fell on the ground slab. The tutorial's
    /// placement step rejects off-slab placements with a corrective message.
    pub on_ground: bool,
}
