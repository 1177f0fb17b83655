use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::tutorial::TutorialState;

/// Renders the tutorial prompt banner while the tutorial is visible.
pub fn tutorial_panel_ui(mut contexts: EguiContexts, mut tutorial: ResMut<TutorialState>) {
    if !tutorial.visible {
        return;
    }

    let ctx = contexts.ctx_mut();

    egui::Window::new("Tutorial")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_TOP, [0.0, 24.0])
        .default_width(420.0)
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(&tutorial.text)
                    .size(16.0)
                    .color(egui::Color32::from_rgb(220, 220, 220)),
            );

            if !tutorial.completed() {
                ui.add_space(8.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button(
                            egui::RichText::new("Skip Tutorial")
                                .color(egui::Color32::from_rgb(180, 180, 180)),
                        )
                        .clicked()
                    {
                        tutorial.dismiss();
                    }
                });
            }
        });
}
