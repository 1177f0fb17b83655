use bevy::prelude::*;

use simulation::catalog::PlaceableCatalog;
use simulation::events::SelectPlaceable;

use super::types::Selection;

/// Apply palette selection events to the selection registry.
///
/// Indices are trusted: the palette generates its buttons from the same
/// catalog, so an out-of-range index is a configuration error and panics.
/// Selecting while build mode is off is legal; the hologram stays hidden
/// until the mode is re-enabled.
pub fn apply_selection_events(
    mut events: EventReader<SelectPlaceable>,
    catalog: Res<PlaceableCatalog>,
    mut selection: ResMut<Selection>,
) {
    for ev in events.read() {
        let def = catalog.categories[ev.category].items[ev.index].clone();
        info!("selected {:?} '{}'", def.kind, def.name);
        selection.select(ev.category, ev.index, def);
    }
}
