//! Input handling for build-mode interaction.
//!
//! Split into sub-modules by concern:
//! - `types`: Resource types (BuildMode, Selection, CursorGround, ...)
//! - `cursor`: Cursor ray vs. ground-plane intersection
//! - `keyboard`: Build-mode toggle and pointer capture
//! - `selection`: Palette selection events -> selection registry
//! - `placement`: Click-to-place commit

mod cursor;
mod keyboard;
mod placement;
mod selection;
mod types;

#[cfg(test)]
mod tests;

pub use types::{ActiveSelection, BuildMode, CursorGround, PlacedObject, PlacementRoot, Selection};

pub use cursor::update_cursor_ground;
pub use keyboard::{apply_cursor_grab, toggle_build_mode};
pub use placement::handle_placement_click;
pub use selection::apply_selection_events;
