/*
 * Renderer Module
 *
 * This module draws the retained cell shapes. Shapes are kept in world
 * coordinates (origin at the top-left corner, y pointing down) and mapped to
 * nannou's centered, y-up window coordinates here.
 */

use nannou::prelude::*;
use tracing::warn;

use crate::app::Model;
use crate::canvas::Canvas;

// Map a world point to window coordinates for a canvas of the given size
pub fn world_to_screen(point: Vec2, width: f32, height: f32) -> Vec2 {
    vec2(point.x - width / 2.0, height / 2.0 - point.y)
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(WHITE);

    let canvas = model.driver.canvas();
    let (width, height) = (canvas.width(), canvas.height());

    // Inert cells keep their shape at zero size; skip them
    for shape in canvas.shapes().iter().filter(|shape| shape.diameter > 0.0) {
        draw.ellipse()
            .xy(world_to_screen(shape.center, width, height))
            .w_h(shape.diameter, shape.diameter)
            .color(shape.color);
    }

    if let Err(err) = draw.to_frame(app, &frame) {
        warn!(?err, "failed to draw cells");
    }

    // Draw the egui UI
    if let Err(err) = model.egui.draw_to_frame(&frame) {
        warn!(?err, "failed to draw control panel");
    }
}
