use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::catalog::PlaceableCatalog;
use simulation::events::{CategoryChosen, SelectPlaceable};

use rendering::input::{BuildMode, Selection};

/// Which catalog category's item list is expanded, if any.
#[derive(Resource, Default)]
pub struct OpenCategory(pub Option<usize>);

/// Build-mode palette: a category window on the left edge, plus an item
/// window for the open category. Hidden entirely while build mode is off.
pub fn palette_ui(
    mut contexts: EguiContexts,
    mode: Res<BuildMode>,
    catalog: Res<PlaceableCatalog>,
    selection: Res<Selection>,
    mut open_cat: ResMut<OpenCategory>,
    mut categories_chosen: EventWriter<CategoryChosen>,
    mut selections: EventWriter<SelectPlaceable>,
) {
    if !mode.enabled {
        open_cat.0 = None;
        return;
    }

    let ctx = contexts.ctx_mut();

    egui::Window::new("Categories")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::LEFT_CENTER, [12.0, 0.0])
        .show(ctx, |ui| {
            for (idx, cat) in catalog.categories.iter().enumerate() {
                let is_open = open_cat.0 == Some(idx);
                let btn = ui.selectable_label(is_open, egui::RichText::new(&cat.name).strong());
                if btn.clicked() {
                    if is_open {
                        open_cat.0 = None;
                    } else {
                        open_cat.0 = Some(idx);
                        categories_chosen.send(CategoryChosen { category: idx });
                    }
                }
            }
        });

    let Some(cat_idx) = open_cat.0 else {
        return;
    };
    let Some(cat) = catalog.categories.get(cat_idx) else {
        open_cat.0 = None;
        return;
    };

    // Stable id: the window keeps its position when the category changes.
    egui::Window::new(&cat.name)
        .id(egui::Id::new("palette_items"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::LEFT_CENTER, [140.0, 0.0])
        .show(ctx, |ui| {
            for (idx, item) in cat.items.iter().enumerate() {
                let is_active = selection
                    .active()
                    .is_some_and(|a| a.category == cat_idx && a.index == idx);
                if ui.selectable_label(is_active, &item.name).clicked() {
                    selections.send(SelectPlaceable {
                        category: cat_idx,
                        index: idx,
                    });
                }
            }
        });
}
