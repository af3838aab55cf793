//! World state: the ball and the rotating container
//!
//! Owned by the drive loop; the click handler mutates ball velocity
//! directly (single-threaded, callbacks never overlap a frame tick).

use glam::Vec2;

use super::hexagon::Hexagon;
use crate::consts::*;

/// The bouncing ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Constant for the process lifetime
    pub radius: f32,
}

impl Ball {
    /// Ball starts at the canvas center with a small horizontal drift
    pub fn new() -> Self {
        Self {
            pos: CENTER,
            vel: BALL_START_VEL,
            radius: BALL_RADIUS,
        }
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct World {
    pub ball: Ball,
    pub hexagon: Hexagon,
}

impl World {
    pub fn new() -> Self {
        Self {
            ball: Ball::new(),
            hexagon: Hexagon::new(CENTER),
        }
    }

    /// Re-launch the ball toward a canvas-space point (click handler).
    ///
    /// Overwrites the current velocity, proportional to the offset from
    /// the ball. Takes effect immediately, independent of frame cadence.
    pub fn kick_toward(&mut self, target: Vec2) {
        self.ball.vel = (target - self.ball.pos) * IMPULSE_SCALE;
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_starts_at_center() {
        let world = World::new();
        assert_eq!(world.ball.pos, Vec2::new(300.0, 300.0));
        assert_eq!(world.ball.radius, BALL_RADIUS);
    }

    #[test]
    fn test_kick_sets_velocity_from_click_offset() {
        let mut world = World::new();
        world.ball.pos = Vec2::new(300.0, 300.0);
        world.ball.vel = Vec2::new(-5.0, 2.0);
        world.kick_toward(Vec2::new(400.0, 300.0));
        // 100 px offset * 0.1 impulse scale; overwrite, not additive
        assert_eq!(world.ball.vel, Vec2::new(10.0, 0.0));
    }
}
