use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use cell_absorption::{Canvas, Driver, ShapeHandle, Simulation, SimulationParams};
use nannou::color::Hsv;
use nannou::geom::Vec2;

// Records every call and raises the stop flag after a fixed number of pauses
struct RecordingCanvas {
    centers: Vec<Vec2>,
    diameters: Vec<f32>,
    presents: usize,
    pauses: Vec<Duration>,
    stop_after: usize,
    stop: Arc<AtomicBool>,
}

impl RecordingCanvas {
    fn new(stop_after: usize, stop: Arc<AtomicBool>) -> Self {
        Self {
            centers: Vec::new(),
            diameters: Vec::new(),
            presents: 0,
            pauses: Vec::new(),
            stop_after,
            stop,
        }
    }
}

impl Canvas for RecordingCanvas {
    fn width(&self) -> f32 {
        600.0
    }

    fn height(&self) -> f32 {
        600.0
    }

    fn create_shape(&mut self, center: Vec2, diameter: f32, _color: Hsv) -> ShapeHandle {
        self.centers.push(center);
        self.diameters.push(diameter);
        ShapeHandle(self.centers.len() - 1)
    }

    fn set_shape_center(&mut self, shape: ShapeHandle, center: Vec2) {
        self.centers[shape.0] = center;
    }

    fn set_shape_size(&mut self, shape: ShapeHandle, diameter: f32) {
        self.diameters[shape.0] = diameter;
    }

    fn present(&mut self) {
        self.presents += 1;
    }

    fn pause_for(&mut self, interval: Duration) {
        self.pauses.push(interval);
        if self.pauses.len() >= self.stop_after {
            self.stop.store(true, Ordering::Relaxed);
        }
    }
}

fn driver(population: usize, stop_after: usize) -> (Driver<RecordingCanvas>, Arc<AtomicBool>) {
    let stop = Arc::new(AtomicBool::new(false));
    let params = SimulationParams::with_canvas(population, 600.0, 600.0);
    let simulation = Simulation::with_seed(params, 1234).unwrap();
    let canvas = RecordingCanvas::new(stop_after, Arc::clone(&stop));
    (Driver::new(simulation, canvas), stop)
}

#[test]
fn loop_stops_between_ticks_when_flagged() {
    let (mut driver, stop) = driver(200, 25);
    driver.run(&stop);

    assert_eq!(driver.simulation().ticks(), 25);
    assert_eq!(driver.canvas().presents, 25);
    assert_eq!(driver.canvas().pauses.len(), 25);
    assert!(driver
        .canvas()
        .pauses
        .iter()
        .all(|&pause| pause == Duration::from_millis(10)));
}

#[test]
fn renderer_sees_the_final_geometry() {
    let (mut driver, stop) = driver(120, 300);
    driver.run(&stop);

    let canvas = driver.canvas();
    let cells = driver.simulation().cells();
    assert_eq!(canvas.centers.len(), cells.len());
    for (i, cell) in cells.iter().enumerate() {
        assert_eq!(canvas.centers[i], cell.position);
        assert_eq!(canvas.diameters[i], cell.diameter());
        assert!(canvas.diameters[i] >= 0.0);
    }
}

#[test]
fn population_only_merges_over_time() {
    let (mut driver, stop) = driver(200, 1000);
    let initial = driver.simulation().stats();
    driver.run(&stop);
    let after = driver.simulation().stats();

    assert_eq!(driver.simulation().cells().len(), 200);
    assert_eq!(after.live + after.inert, 200);
    assert!(after.live <= initial.live);
    assert!(driver.simulation().cells().iter().all(|cell| cell.radius() >= 0.0));
    // Absorbed cells never come back
    for cell in driver.simulation().cells().iter().filter(|cell| cell.is_inert()) {
        assert_eq!(cell.radius(), 0.0);
    }
}
