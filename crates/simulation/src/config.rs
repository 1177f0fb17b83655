/// Half extent of the ground slab in world units. The placement plane itself
/// is infinite; hits beyond this distance count as off-ground for the
/// tutorial's placement check.
pub const GROUND_HALF_EXTENT: f32 = 160.0;

/// World-space Y of the placement plane.
pub const GROUND_Y: f32 = 0.0;

/// Seconds the tutorial panel stays visible after the final step.
pub const TUTORIAL_HIDE_DELAY: f32 = 2.0;
