use bevy::prelude::*;
use serde::Deserialize;

/// Orientation class of a catalog entry.
///
/// Assets are always placed upright with identity rotation; buildings keep
/// the facing they were authored with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum PlaceableKind {
    Asset,
    Building,
}

/// One spawnable item from the catalog. Immutable configuration data: the
/// mesh stand-in dimensions double as the hologram template.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceableDef {
    pub name: String,
    pub kind: PlaceableKind,
    /// Cuboid dimensions (x, y, z) in world units.
    pub size: [f32; 3],
    /// Base color (linear RGB).
    pub color: [f32; 3],
    /// Authored facing in degrees around Y. Ignored for `Asset` entries.
    #[serde(default)]
    pub yaw_degrees: f32,
}

impl PlaceableDef {
    pub fn dimensions(&self) -> Vec3 {
        Vec3::from_array(self.size)
    }

    /// Vertical offset that rests the cuboid on the ground plane.
    pub fn half_height(&self) -> f32 {
        self.size[1] * 0.5
    }

    /// Rotation applied to both the hologram and the placed copy.
    pub fn rotation(&self) -> Quat {
        match self.kind {
            PlaceableKind::Asset => Quat::IDENTITY,
            PlaceableKind::Building => Quat::from_rotation_y(self.yaw_degrees.to_radians()),
        }
    }
}

/// A named group of placeables shown as one palette list.
#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub name: String,
    pub items: Vec<PlaceableDef>,
}

/// The full catalog of placeable items, grouped by category.
///
/// Palette buttons are generated from this resource and selection events
/// carry indices back into it, so indices arriving from the UI are trusted;
/// an out-of-range index is a configuration error, not a runtime condition.
#[derive(Resource, Debug, Clone, Deserialize)]
pub struct PlaceableCatalog {
    pub categories: Vec<Category>,
}

const DEFAULT_CATALOG: &str = include_str!("default_catalog.json");

impl Default for PlaceableCatalog {
    fn default() -> Self {
        // The default catalog ships inside the binary; a parse failure is a
        // build configuration error.
        serde_json::from_str(DEFAULT_CATALOG).expect("default catalog JSON is malformed")
    }
}

impl PlaceableCatalog {
    pub fn get(&self, category: usize, index: usize) -> Option<&PlaceableDef> {
        self.categories.get(category)?.items.get(index)
    }
}
