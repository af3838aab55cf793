//! Hexadrop - a ball bouncing inside a rotating hexagon
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, physics, collisions)
//! - `renderer`: WebGPU rendering pipeline

pub mod renderer;
pub mod sim;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Canvas is a fixed square (pixels)
    pub const CANVAS_SIZE: f32 = 600.0;

    /// Hexagon circumscribed radius, centered in the canvas
    pub const HEX_RADIUS: f32 = 250.0;
    pub const HEX_SIDES: usize = 6;
    /// Rotation per frame (radians)
    pub const ROTATION_SPEED: f32 = 0.05;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 15.0;
    pub const BALL_START_VEL: Vec2 = Vec2::new(3.0, 0.0);

    /// Downward acceleration per frame (canvas y grows downward)
    pub const GRAVITY: f32 = 0.5;
    /// Multiplicative velocity damping per frame
    pub const FRICTION: f32 = 0.99;
    /// Fraction of speed retained after a wall bounce
    pub const BOUNCE_FACTOR: f32 = 0.7;

    /// Click position to launch velocity factor
    pub const IMPULSE_SCALE: f32 = 0.1;

    /// Canvas center, where both the hexagon and the ball start
    pub const CENTER: Vec2 = Vec2::new(CANVAS_SIZE / 2.0, CANVAS_SIZE / 2.0);
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
