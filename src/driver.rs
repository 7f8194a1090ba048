/*
 * Driver Module
 *
 * This module ties a Simulation to a Canvas. Each step runs one tick, copies
 * every cell's center and diameter onto its shape and presents the frame.
 * The blocking loop in `run` also yields for the pacing interval between
 * ticks and stops as soon as its stop flag is raised.
 */

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::info;

use crate::canvas::{Canvas, ShapeHandle};
use crate::simulation::Simulation;

pub struct Driver<C: Canvas> {
    simulation: Simulation,
    canvas: C,
    shapes: Vec<ShapeHandle>,
}

impl<C: Canvas> Driver<C> {
    pub fn new(simulation: Simulation, canvas: C) -> Self {
        let mut driver = Self {
            simulation,
            canvas,
            shapes: Vec::new(),
        };
        driver.create_shapes();
        driver
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    // One shape per cell, in population order
    fn create_shapes(&mut self) {
        self.shapes = self
            .simulation
            .cells()
            .iter()
            .map(|cell| {
                self.canvas
                    .create_shape(cell.position, cell.diameter(), cell.color)
            })
            .collect();
    }

    /// Reseed the population and hand out fresh shapes. `clear` lets the
    /// caller drop the old shapes from its canvas first.
    pub fn reset_with(&mut self, population: usize, clear: impl FnOnce(&mut C)) {
        self.simulation.reset(population);
        clear(&mut self.canvas);
        self.create_shapes();
    }

    // Push the current geometry of every cell to its shape
    pub fn sync_shapes(&mut self) {
        for (cell, &shape) in self.simulation.cells().iter().zip(&self.shapes) {
            self.canvas.set_shape_center(shape, cell.position);
            self.canvas.set_shape_size(shape, cell.diameter());
        }
    }

    /// Run one tick and present the result.
    pub fn step(&mut self) {
        self.simulation.tick();
        self.sync_shapes();
        self.canvas.present();
    }

    /// Step and pause until `stop` is raised. The flag is checked between
    /// ticks, never in the middle of one.
    pub fn run(&mut self, stop: &AtomicBool) {
        let interval = self.simulation.params().pacing_interval;
        while !stop.load(Ordering::Relaxed) {
            self.step();
            self.canvas.pause_for(interval);
        }
        info!(ticks = self.simulation.ticks(), "Simulation loop stopped");
    }
}
