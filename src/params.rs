/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains the
 * parameters of the cell simulation. Population size and canvas dimensions
 * come from the command line; the population can also be changed from the UI.
 * It also provides validation and change detection for the UI.
 */

use std::ops::RangeInclusive;
use std::time::Duration;

use thiserror::Error;

use crate::{
    CANVAS_HEIGHT, CANVAS_WIDTH, GROWTH_PER_TICK, MAX_SEED_RADIUS, MIN_SEED_RADIUS,
    PACING_INTERVAL, POPULATION,
};

#[derive(Debug, Error, PartialEq)]
pub enum ParamsError {
    #[error("canvas dimensions must be finite, got {width}x{height}")]
    NonFiniteBounds { width: f32, height: f32 },
    #[error("canvas {width}x{height} cannot hold a cell of diameter {diameter}")]
    BoundsTooSmall {
        width: f32,
        height: f32,
        diameter: f32,
    },
    #[error("seed radius range {min}..={max} must be positive and non-empty")]
    InvalidRadiusRange { min: f32, max: f32 },
    #[error("growth per tick must be positive and finite, got {0}")]
    InvalidGrowth(f32),
    #[error("pacing interval must be non-zero")]
    ZeroPacing,
}

// Parameters for the simulation
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationParams {
    pub population: usize,
    pub width: f32,
    pub height: f32,
    pub growth_per_tick: f32,
    pub min_seed_radius: f32,
    pub max_seed_radius: f32,
    pub pacing_interval: Duration,
    pub pause_simulation: bool,

    // Internal state for tracking changes
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of UI-editable values used for change detection
#[derive(Clone, Debug, PartialEq)]
struct ParamSnapshot {
    population: usize,
    pause_simulation: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            population: POPULATION,
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            growth_per_tick: GROWTH_PER_TICK,
            min_seed_radius: MIN_SEED_RADIUS,
            max_seed_radius: MAX_SEED_RADIUS,
            pacing_interval: PACING_INTERVAL,
            pause_simulation: false,
            previous_values: None,
        }
    }
}

impl SimulationParams {
    pub fn with_canvas(population: usize, width: f32, height: f32) -> Self {
        Self {
            population,
            width,
            height,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(ParamsError::NonFiniteBounds {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.min_seed_radius > 0.0 && self.min_seed_radius <= self.max_seed_radius)
            || !self.max_seed_radius.is_finite()
        {
            return Err(ParamsError::InvalidRadiusRange {
                min: self.min_seed_radius,
                max: self.max_seed_radius,
            });
        }
        let diameter = self.max_seed_radius * 2.0;
        if self.width < diameter || self.height < diameter {
            return Err(ParamsError::BoundsTooSmall {
                width: self.width,
                height: self.height,
                diameter,
            });
        }
        if !(self.growth_per_tick > 0.0 && self.growth_per_tick.is_finite()) {
            return Err(ParamsError::InvalidGrowth(self.growth_per_tick));
        }
        if self.pacing_interval.is_zero() {
            return Err(ParamsError::ZeroPacing);
        }
        Ok(())
    }

    // Take a snapshot of current UI-editable values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(ParamSnapshot {
            population: self.population,
            pause_simulation: self.pause_simulation,
        });
    }

    // Check if any values have changed since the last snapshot
    // Returns a tuple of (population_changed, any_ui_changed)
    pub fn detect_changes(&self) -> (bool, bool) {
        let Some(prev) = &self.previous_values else {
            return (false, false);
        };

        let population_changed = self.population != prev.population;
        let ui_changed = population_changed || self.pause_simulation != prev.pause_simulation;
        (population_changed, ui_changed)
    }

    // Range for the population slider
    pub fn get_population_range() -> RangeInclusive<usize> {
        0..=2000
    }
}
