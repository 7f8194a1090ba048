/*
 * Application Module
 *
 * This module defines the nannou application model for the cell simulation.
 * It handles initialization, the fixed-timestep update and UI events.
 *
 * The simulation advances in fixed ticks of the pacing interval: wall time
 * is accumulated every frame and one tick is run for each whole interval
 * that has elapsed, up to MAX_TICKS_PER_FRAME.
 */

use std::sync::OnceLock;
use std::time::{Duration, Instant};

use nannou::prelude::*;
use nannou::winit::event::WindowEvent;
use nannou_egui::Egui;
use tracing::{info, warn};

use crate::canvas::RetainedCanvas;
use crate::debug::DebugInfo;
use crate::driver::Driver;
use crate::params::SimulationParams;
use crate::renderer::view;
use crate::simulation::Simulation;
use crate::{ui, MAX_TICKS_PER_FRAME};

static LAUNCH_PARAMS: OnceLock<SimulationParams> = OnceLock::new();

// Main model for the application
pub struct Model {
    pub driver: Driver<RetainedCanvas>,
    pub params: SimulationParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    // Fixed timestep variables
    pub tick_accumulator: Duration,
    pub last_update_time: Instant,
}

/// Open the window and run the simulation until the window is closed.
/// `params` must already be validated.
pub fn run(params: SimulationParams) {
    if LAUNCH_PARAMS.set(params).is_err() {
        warn!("simulation parameters were already set; keeping the first ones");
    }
    nannou::app(model).update(update).run();
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let params = LAUNCH_PARAMS.get().cloned().unwrap_or_default();

    let window_id = app
        .new_window()
        .title("Cell Absorption")
        .size(params.width as u32, params.height as u32)
        .resizable(false)
        .view(view)
        .raw_event(raw_window_event)
        .build()
        .expect("failed to build the simulation window");

    let window = app
        .window(window_id)
        .expect("window disappeared right after it was built");
    let egui = Egui::from_window(&window);

    let simulation =
        Simulation::new(params.clone()).expect("simulation parameters are validated before launch");
    let canvas = RetainedCanvas::new(params.width, params.height);
    let driver = Driver::new(simulation, canvas);

    Model {
        driver,
        params,
        egui,
        debug_info: DebugInfo::default(),
        tick_accumulator: Duration::ZERO,
        last_update_time: Instant::now(),
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;
    model.egui.set_elapsed_time(update.since_start);

    let (should_reset, _ui_changed) =
        ui::update_ui(&mut model.egui, &mut model.params, &model.debug_info);

    if should_reset {
        let population = model.params.population;
        model.driver.reset_with(population, RetainedCanvas::clear);
        model.tick_accumulator = Duration::ZERO;
        info!(population, "Population reset from the control panel");
    }

    let now = Instant::now();
    let frame_time = now.duration_since(model.last_update_time);
    model.last_update_time = now;

    model.debug_info.ticks_per_frame = if model.params.pause_simulation {
        model.tick_accumulator = Duration::ZERO;
        0
    } else {
        model.tick_accumulator += frame_time;
        run_due_ticks(model)
    };

    let simulation = model.driver.simulation();
    model.debug_info.tick = simulation.ticks();
    model.debug_info.population = simulation.stats();
}

// Run one tick per elapsed pacing interval and return how many ran
fn run_due_ticks(model: &mut Model) -> usize {
    let interval = model.params.pacing_interval;
    let mut ticks = 0;

    while model.tick_accumulator >= interval {
        model.tick_accumulator -= interval;
        if ticks == MAX_TICKS_PER_FRAME {
            // Drop the backlog rather than stall the window catching up
            model.tick_accumulator = Duration::ZERO;
            break;
        }
        model.driver.step();
        ticks += 1;
    }

    ticks
}

// Forward raw window events to egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &WindowEvent) {
    model.egui.handle_raw_event(event);
}
