/*
 * Canvas Module
 *
 * This module defines the contract between the simulation and whatever draws
 * it. The simulation never holds drawing objects; the driver keeps one shape
 * handle per cell, in population order, and pushes geometry through the
 * Canvas trait after each tick.
 *
 * RetainedCanvas is the canvas the nannou front end draws from: it remembers
 * the latest geometry of every shape and lets the view read it back.
 */

use std::time::Duration;

use nannou::color::Hsv;
use nannou::geom::Vec2;

/// Opaque handle to a shape created on a [`Canvas`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ShapeHandle(pub usize);

pub trait Canvas {
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    fn create_shape(&mut self, center: Vec2, diameter: f32, color: Hsv) -> ShapeHandle;
    fn set_shape_center(&mut self, shape: ShapeHandle, center: Vec2);
    fn set_shape_size(&mut self, shape: ShapeHandle, diameter: f32);

    // Flush one frame
    fn present(&mut self);

    // Cooperative yield between ticks
    fn pause_for(&mut self, interval: Duration);
}

// A circle as last reported by the driver
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub diameter: f32,
    pub color: Hsv,
}

pub struct RetainedCanvas {
    width: f32,
    height: f32,
    shapes: Vec<Circle>,
    frames_presented: u64,
}

impl RetainedCanvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            shapes: Vec::new(),
            frames_presented: 0,
        }
    }

    pub fn shapes(&self) -> &[Circle] {
        &self.shapes
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    // Forget every shape, e.g. before the population is reseeded
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    fn shape_mut(&mut self, shape: ShapeHandle) -> Option<&mut Circle> {
        self.shapes.get_mut(shape.0)
    }
}

impl Canvas for RetainedCanvas {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn create_shape(&mut self, center: Vec2, diameter: f32, color: Hsv) -> ShapeHandle {
        self.shapes.push(Circle {
            center,
            diameter,
            color,
        });
        ShapeHandle(self.shapes.len() - 1)
    }

    fn set_shape_center(&mut self, shape: ShapeHandle, center: Vec2) {
        if let Some(circle) = self.shape_mut(shape) {
            circle.center = center;
        }
    }

    fn set_shape_size(&mut self, shape: ShapeHandle, diameter: f32) {
        if let Some(circle) = self.shape_mut(shape) {
            circle.diameter = diameter;
        }
    }

    fn present(&mut self) {
        self.frames_presented += 1;
    }

    // nannou's event loop owns the frame timing
    fn pause_for(&mut self, _interval: Duration) {}
}
