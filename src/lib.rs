/*
 * Cell Absorption Simulation - Module Definitions
 *
 * This file defines the module structure for the cell absorption simulation.
 * The simulation core (cell, simulation, driver, canvas) runs without a
 * window; the remaining modules are the nannou front end.
 */

use std::time::Duration;

// Re-export key components for easier access
pub use app::Model;
pub use canvas::{Canvas, Circle, RetainedCanvas, ShapeHandle};
pub use cell::{absorbed_radii, normalize_radians, Cell, Interaction};
pub use debug::DebugInfo;
pub use driver::Driver;
pub use params::{ParamsError, SimulationParams};
pub use simulation::{PopulationStats, Simulation};

// Define modules
pub mod app;
pub mod canvas;
pub mod cell;
pub mod debug;
pub mod driver;
pub mod params;
pub mod renderer;
pub mod simulation;
pub mod ui;

// Constants
pub const POPULATION: usize = 200;
pub const CANVAS_WIDTH: f32 = 800.0;
pub const CANVAS_HEIGHT: f32 = 800.0;
pub const GROWTH_PER_TICK: f32 = 0.02;
pub const MIN_SEED_RADIUS: f32 = 2.0;
pub const MAX_SEED_RADIUS: f32 = 6.0;
pub const PACING_INTERVAL: Duration = Duration::from_millis(10);

// Maximum random turn per step, in radians
pub const WIGGLINESS: f32 = 0.2;
// Distance at which the pull toward the center of gravity starts to matter
pub const WANDER_SCALE: f32 = 60000.0;

pub const MAX_TICKS_PER_FRAME: usize = 10;
pub const STATS_LOG_INTERVAL: u64 = 500;
