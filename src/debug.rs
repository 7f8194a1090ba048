/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains performance metrics
 * and population statistics to be displayed in the UI.
 *
 * Includes metrics for:
 * - FPS (frames per second)
 * - Frame time
 * - Ticks run during the last frame
 * - Live and inert cell counts, total area and largest radius
 */

use std::time::Duration;

use crate::simulation::PopulationStats;

// Debug information to display
#[derive(Clone, Debug, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub ticks_per_frame: usize,
    pub tick: u64,
    pub population: PopulationStats,
}

impl DebugInfo {
    // Lines shown in the stats section of the control panel
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("FPS: {:.1}", self.fps),
            format!("Frame time: {:.2} ms", self.frame_time.as_secs_f64() * 1000.0),
            format!("Ticks this frame: {}", self.ticks_per_frame),
            format!("Tick: {}", self.tick),
            format!("Live cells: {}", self.population.live),
            format!("Absorbed cells: {}", self.population.inert),
            format!("Total area: {:.0}", self.population.total_area),
            format!("Largest radius: {:.1}", self.population.largest_radius),
        ]
    }
}
