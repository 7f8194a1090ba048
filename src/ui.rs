/*
 * UI Module
 *
 * This module builds the control panel with nannou_egui: a population slider,
 * a reset button, a pause checkbox and the live statistics from DebugInfo.
 * Change detection is handled by the SimulationParams struct.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::SimulationParams;

// Update the UI and return whether the population should be reseeded and whether any UI value changed
pub fn update_ui(
    egui: &mut Egui,
    params: &mut SimulationParams,
    debug_info: &DebugInfo,
) -> (bool, bool) {
    let mut should_reset = false;

    // Take a snapshot of current values for change detection
    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Cell Absorption")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Population", |ui| {
                ui.add(
                    egui::Slider::new(
                        &mut params.population,
                        SimulationParams::get_population_range(),
                    )
                    .text("Cells"),
                );

                if ui.button("Reset population").clicked() {
                    should_reset = true;
                }
            });

            ui.collapsing("Stats", |ui| {
                for line in debug_info.lines() {
                    ui.label(line);
                }
            });

            ui.checkbox(&mut params.pause_simulation, "Pause Simulation");
        });

    let (population_changed, ui_changed) = params.detect_changes();

    (should_reset || population_changed, ui_changed)
}
