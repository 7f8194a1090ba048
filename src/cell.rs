/*
 * Cell Module
 *
 * This module defines the Cell struct and its behavior.
 * Each cell follows two rules:
 * 1. Wander: take a unit step along its heading, then turn by a small random
 *    wiggle plus a weak pull toward the center of gravity
 * 2. Absorb: when two live cells touch, the larger one takes area from the
 *    smaller one so that the two end up tangent with their area conserved
 */

use std::f32::consts::{PI, TAU};

use nannou::color::Hsv;
use nannou::geom::{vec2, Vec2};
use rand::Rng;

use crate::{WANDER_SCALE, WIGGLINESS};

#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub position: Vec2,
    pub heading: f32,
    pub color: Hsv,
    radius: f32,
}

/// Outcome of a call to [`Cell::interact_with`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interaction {
    /// At least one cell was inert, or the circles do not touch.
    None,
    /// The cell the method was called on absorbed the other one.
    AbsorbedOther,
    /// The other cell absorbed the cell the method was called on.
    AbsorbedByOther,
}

impl Cell {
    pub fn new(position: Vec2, radius: f32, heading: f32, color: Hsv) -> Self {
        let mut cell = Self {
            position,
            heading: normalize_radians(heading),
            color,
            radius: 0.0,
        };
        cell.set_radius(radius);
        cell
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn diameter(&self) -> f32 {
        self.radius * 2.0
    }

    pub fn area(&self) -> f32 {
        PI * self.radius * self.radius
    }

    // A fully absorbed cell stays in the population but takes no further part
    pub fn is_inert(&self) -> bool {
        self.radius == 0.0
    }

    // Every radius change goes through here so a negative radius never leaks
    // into rendering or the absorption math. The center is left untouched.
    fn set_radius(&mut self, radius: f32) {
        self.radius = if radius > 0.0 { radius } else { 0.0 };
    }

    pub fn grow(&mut self, amount: f32) {
        self.set_radius(self.radius + amount);
    }

    /// Wander one step, drawing the heading wiggle from `rng`.
    pub fn move_toward<R: Rng>(&mut self, center_of_gravity: Vec2, rng: &mut R) {
        let half = WIGGLINESS / 2.0;
        let wiggle = rng.gen_range(-half..=half);
        self.move_with_wiggle(center_of_gravity, wiggle);
    }

    /// Deterministic core of [`Cell::move_toward`]: step one unit along the
    /// heading, then turn by `wiggle` plus a pull toward `center_of_gravity`
    /// that grows with distance as `tanh(distance / WANDER_SCALE)`.
    pub fn move_with_wiggle(&mut self, center_of_gravity: Vec2, wiggle: f32) {
        self.position += vec2(self.heading.cos(), self.heading.sin());

        let to_center = center_of_gravity - self.position;
        let distance_to_center = to_center.length();
        let angle_to_center = if distance_to_center > 0.0 {
            to_center.y.atan2(to_center.x)
        } else {
            0.0
        };
        let turn_bias = normalize_radians(angle_to_center - self.heading);

        self.heading = normalize_radians(
            self.heading + wiggle + turn_bias * (distance_to_center / WANDER_SCALE).tanh(),
        );
    }

    // Positive when the circles overlap, zero when tangent
    pub fn overlap_amount(&self, other: &Cell) -> f32 {
        self.radius + other.radius - self.position.distance(other.position)
    }

    /// Let two touching live cells interact. The strictly larger cell absorbs
    /// the other; on a tie `other` absorbs `self`.
    pub fn interact_with(&mut self, other: &mut Cell) -> Interaction {
        if self.is_inert() || other.is_inert() {
            return Interaction::None;
        }
        if self.overlap_amount(other) < 0.0 {
            return Interaction::None;
        }

        if self.radius > other.radius {
            self.absorb(other);
            Interaction::AbsorbedOther
        } else {
            other.absorb(self);
            Interaction::AbsorbedByOther
        }
    }

    fn absorb(&mut self, other: &mut Cell) {
        let d = self.position.distance(other.position);
        let (new_radius, remainder) = absorbed_radii(self.radius, other.radius, d);
        self.set_radius(new_radius);
        other.set_radius(remainder);
    }
}

/// Radii after an absorption of a circle of radius `r2` by one of radius `r1`
/// whose centers are `d` apart, as `(absorber, absorbed)`.
///
/// Solves `x + y = d` with `x² + y² = r1² + r2²`, so the two circles end up
/// tangent with their combined area unchanged. When the overlap is deep
/// (`d² < r1² + r2²`) the absorbed radius comes out negative; the radius
/// setter clamps it to zero and the absorbed cell goes inert.
pub fn absorbed_radii(r1: f32, r2: f32, d: f32) -> (f32, f32) {
    let a = r1 * r1 + r2 * r2;
    // 2a - d² >= (r1 - r2)² whenever the circles touch; rounding at
    // tangency can still push it a hair below zero.
    let new_radius = (d + (2.0 * a - d * d).max(0.0).sqrt()) / 2.0;
    (new_radius, d - new_radius)
}

/// Wrap any angle into (−π, π]. Angles already in range are returned as-is.
pub fn normalize_radians(theta: f32) -> f32 {
    if theta > -PI && theta <= PI {
        return theta;
    }
    if !theta.is_finite() {
        return 0.0;
    }
    let wrapped = PI - (PI - theta).rem_euclid(TAU);
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}
