/*
 * Simulation Module
 *
 * This module owns the cell population and advances it one tick at a time:
 * every live cell wanders toward the center of gravity and grows, then every
 * unordered pair of cells gets a chance to interact.
 *
 * Pair resolution is a plain all-pairs sweep in insertion order. Absorbed
 * cells keep their slot with a zero radius so indices stay stable for the
 * renderer.
 */

use nannou::color::hsv;
use nannou::geom::{vec2, Vec2};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;
use tracing::{debug, info, trace};

use crate::cell::{Cell, Interaction};
use crate::params::{ParamsError, SimulationParams};
use crate::STATS_LOG_INTERVAL;

pub struct Simulation {
    cells: Vec<Cell>,
    params: SimulationParams,
    rng: SmallRng,
    ticks: u64,
}

/// Summary of the population, used by the UI panel and the logs.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PopulationStats {
    pub live: usize,
    pub inert: usize,
    pub total_area: f32,
    pub largest_radius: f32,
}

impl Simulation {
    // Seed a new population using an entropy-seeded generator
    pub fn new(params: SimulationParams) -> Result<Self, ParamsError> {
        Self::with_rng(params, SmallRng::from_entropy())
    }

    // Seed a new population reproducibly
    pub fn with_seed(params: SimulationParams, seed: u64) -> Result<Self, ParamsError> {
        Self::with_rng(params, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(params: SimulationParams, rng: SmallRng) -> Result<Self, ParamsError> {
        params.validate()?;
        let mut simulation = Self {
            cells: Vec::new(),
            params,
            rng,
            ticks: 0,
        };
        simulation.populate();
        Ok(simulation)
    }

    /// Build a simulation around an existing population. Used to set up exact
    /// scenarios; the cells are taken in the given order.
    pub fn from_cells(
        params: SimulationParams,
        cells: Vec<Cell>,
        seed: u64,
    ) -> Result<Self, ParamsError> {
        params.validate()?;
        Ok(Self {
            cells,
            params,
            rng: SmallRng::seed_from_u64(seed),
            ticks: 0,
        })
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    pub fn bounds(&self) -> Vec2 {
        vec2(self.params.width, self.params.height)
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    // The midpoint of the bounds, not the centroid of the live cells
    pub fn center_of_gravity(&self) -> Vec2 {
        self.bounds() / 2.0
    }

    /// Replace the whole population with `population` freshly seeded cells.
    pub fn reset(&mut self, population: usize) {
        self.params.population = population;
        self.populate();
    }

    fn populate(&mut self) {
        let population = self.params.population;
        let min_radius = self.params.min_seed_radius;
        let radius_steps = (self.params.max_seed_radius - min_radius).floor() as u32;
        let (width, height) = (self.params.width, self.params.height);

        self.cells.clear();
        self.cells.reserve(population);
        for _ in 0..population {
            // Whole-unit steps up from the minimum: 2, 3, 4, 5 or 6 by default
            let radius = min_radius + self.rng.gen_range(0..=radius_steps) as f32;
            // Keep the whole circle inside the canvas
            let x = self.rng.gen_range(radius..=width - radius);
            let y = self.rng.gen_range(radius..=height - radius);
            let heading = self.rng.gen_range(0.0..TAU);
            let color = hsv(
                self.rng.gen::<f32>(),
                self.rng.gen::<f32>() * 0.5 + 0.1,
                1.0,
            );
            self.cells.push(Cell::new(vec2(x, y), radius, heading, color));
        }
        self.ticks = 0;

        info!(population, width, height, "Seeded cell population");
    }

    /// Advance the simulation by one tick.
    pub fn tick(&mut self) {
        let center = self.center_of_gravity();
        let growth = self.params.growth_per_tick;

        for cell in self.cells.iter_mut().filter(|cell| !cell.is_inert()) {
            cell.move_toward(center, &mut self.rng);
            cell.grow(growth);
        }

        self.resolve_interactions();
        self.ticks += 1;

        if self.ticks % STATS_LOG_INTERVAL == 0 {
            let stats = self.stats();
            debug!(
                tick = self.ticks,
                live = stats.live,
                inert = stats.inert,
                total_area = stats.total_area,
                largest_radius = stats.largest_radius,
                "Population stats",
            );
        }
    }

    /// Let every unordered pair `(i, j)` with `i < j` interact exactly once.
    /// Returns the number of absorptions that happened.
    pub fn resolve_interactions(&mut self) -> usize {
        let mut absorptions = 0;
        for i in 0..self.cells.len() {
            let (head, tail) = self.cells.split_at_mut(i + 1);
            let first = &mut head[i];
            for (offset, second) in tail.iter_mut().enumerate() {
                let outcome = first.interact_with(second);
                if outcome == Interaction::None {
                    continue;
                }
                absorptions += 1;
                if first.is_inert() || second.is_inert() {
                    let j = i + 1 + offset;
                    let (winner, loser) = match outcome {
                        Interaction::AbsorbedOther => (i, j),
                        _ => (j, i),
                    };
                    trace!(winner, loser, tick = self.ticks, "Cell fully absorbed");
                }
            }
        }
        absorptions
    }

    pub fn stats(&self) -> PopulationStats {
        self.cells
            .iter()
            .fold(PopulationStats::default(), |mut stats, cell| {
                if cell.is_inert() {
                    stats.inert += 1;
                } else {
                    stats.live += 1;
                    stats.total_area += cell.area();
                    stats.largest_radius = stats.largest_radius.max(cell.radius());
                }
                stats
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::absorbed_radii;

    fn params(population: usize) -> SimulationParams {
        SimulationParams::with_canvas(population, 800.0, 600.0)
    }

    fn cell_at(x: f32, y: f32, radius: f32) -> Cell {
        Cell::new(vec2(x, y), radius, 0.0, hsv(0.1, 0.4, 1.0))
    }

    #[test]
    fn seeding_keeps_cells_inside_the_bounds() {
        let simulation = Simulation::with_seed(params(200), 42).unwrap();
        assert_eq!(simulation.cells().len(), 200);

        for cell in simulation.cells() {
            let r = cell.radius();
            assert!((2.0..=6.0).contains(&r));
            assert_eq!(r.fract(), 0.0);
            assert!(cell.position.x - r >= 0.0 && cell.position.x + r <= 800.0);
            assert!(cell.position.y - r >= 0.0 && cell.position.y + r <= 600.0);
            assert!(cell.color.saturation >= 0.1 && cell.color.saturation < 0.6);
            assert_eq!(cell.color.value, 1.0);
        }
    }

    #[test]
    fn same_seed_gives_the_same_run() {
        let mut first = Simulation::with_seed(params(50), 9).unwrap();
        let mut second = Simulation::with_seed(params(50), 9).unwrap();
        for _ in 0..100 {
            first.tick();
            second.tick();
        }
        assert_eq!(first.cells(), second.cells());
    }

    #[test]
    fn center_of_gravity_is_the_bounds_midpoint() {
        let simulation = Simulation::with_seed(params(3), 1).unwrap();
        assert_eq!(simulation.center_of_gravity(), vec2(400.0, 300.0));
    }

    #[test]
    fn tick_moves_and_grows_live_cells() {
        let cells = vec![cell_at(100.0, 100.0, 3.0), cell_at(500.0, 400.0, 4.0)];
        let mut simulation = Simulation::from_cells(params(2), cells, 3).unwrap();
        simulation.tick();

        let moved = &simulation.cells()[0];
        assert!((moved.position.distance(vec2(100.0, 100.0)) - 1.0).abs() < 1e-4);
        assert!((moved.radius() - 3.02).abs() < 1e-5);
        assert!((simulation.cells()[1].radius() - 4.02).abs() < 1e-5);
        assert_eq!(simulation.ticks(), 1);
    }

    #[test]
    fn inert_cells_are_neither_moved_nor_grown() {
        let cells = vec![cell_at(100.0, 100.0, 0.0), cell_at(500.0, 400.0, 4.0)];
        let mut simulation = Simulation::from_cells(params(2), cells, 3).unwrap();
        for _ in 0..10 {
            simulation.tick();
        }

        let inert = &simulation.cells()[0];
        assert_eq!(inert.position, vec2(100.0, 100.0));
        assert_eq!(inert.radius(), 0.0);
    }

    #[test]
    fn resolve_visits_pairs_in_index_order_once() {
        // (0, 1) must run before (0, 2): only after swallowing cell 1 is
        // cell 0 big enough to reach cell 2.
        let cells = vec![
            cell_at(100.0, 100.0, 4.0),
            cell_at(105.0, 100.0, 3.0),
            cell_at(91.5, 100.0, 4.0),
        ];
        let mut simulation = Simulation::from_cells(params(3), cells, 3).unwrap();

        assert_eq!(simulation.resolve_interactions(), 2);

        let (expected_absorber, expected_absorbed) = absorbed_radii(5.0, 4.0, 8.5);
        let radii: Vec<f32> = simulation.cells().iter().map(Cell::radius).collect();
        assert!((radii[0] - expected_absorber).abs() < 1e-4);
        assert!((radii[0] - 5.81125).abs() < 1e-3);
        assert_eq!(radii[1], 0.0);
        assert!((radii[2] - expected_absorbed).abs() < 1e-4);
        assert!((radii[2] - 2.68875).abs() < 1e-3);
        assert_eq!(simulation.cells().len(), 3);
    }

    #[test]
    fn pair_order_decides_the_outcome() {
        // Same cells with the last two swapped: cell 0 now meets the distant
        // cell first, misses it, and only then absorbs its neighbour.
        let cells = vec![
            cell_at(100.0, 100.0, 4.0),
            cell_at(91.5, 100.0, 4.0),
            cell_at(105.0, 100.0, 3.0),
        ];
        let mut simulation = Simulation::from_cells(params(3), cells, 3).unwrap();

        assert_eq!(simulation.resolve_interactions(), 1);

        let radii: Vec<f32> = simulation.cells().iter().map(Cell::radius).collect();
        assert!((radii[0] - 5.0).abs() < 1e-4);
        assert_eq!(radii[1], 4.0);
        assert_eq!(radii[2], 0.0);
    }

    #[test]
    fn full_absorption_keeps_the_slot() {
        let cells = vec![cell_at(0.0, 0.0, 3.0), cell_at(5.0, 0.0, 4.0)];
        let mut simulation = Simulation::from_cells(params(2), cells, 3).unwrap();

        assert_eq!(simulation.resolve_interactions(), 1);
        assert_eq!(simulation.cells()[0].radius(), 0.0);
        assert!((simulation.cells()[1].radius() - 5.0).abs() < 1e-4);

        let stats = simulation.stats();
        assert_eq!((stats.live, stats.inert), (1, 1));
    }

    #[test]
    fn absorption_never_adds_area() {
        let mut simulation = Simulation::with_seed(params(200), 11).unwrap();
        for _ in 0..200 {
            let before = simulation.stats();
            simulation.tick();
            let after = simulation.stats();
            let growth_bound: f32 = simulation
                .cells()
                .iter()
                .map(|cell| 2.0 * std::f32::consts::PI * cell.radius() * 0.02 + 0.01)
                .sum();
            assert!(after.total_area <= before.total_area + growth_bound + 1.0);
            assert!(simulation.cells().iter().all(|cell| cell.radius() >= 0.0));
        }
    }

    #[test]
    fn reset_reseeds_and_restarts_the_clock() {
        let mut simulation = Simulation::with_seed(params(20), 5).unwrap();
        simulation.tick();
        simulation.reset(35);

        assert_eq!(simulation.cells().len(), 35);
        assert_eq!(simulation.params().population, 35);
        assert_eq!(simulation.ticks(), 0);
    }

    #[test]
    fn invalid_params_are_rejected() {
        let result = Simulation::with_seed(SimulationParams::with_canvas(5, 4.0, 4.0), 1);
        assert!(matches!(result, Err(ParamsError::BoundsTooSmall { .. })));
    }
}
