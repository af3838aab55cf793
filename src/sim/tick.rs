//! Per-frame physics step
//!
//! Advances the ball one frame. Sub-step order is load-bearing for
//! reproducibility: gravity, then friction, then integration, then
//! collision resolution against every wall in index order.

use glam::Vec2;

use super::collision::{ball_segment_collision, reflect_velocity};
use super::state::Ball;
use crate::consts::*;

/// Advance the ball one frame against the given wall vertices.
///
/// All six walls are tested unconditionally, so simultaneous near-corner
/// contacts each perturb velocity and position sequentially within the
/// same frame. This is an accepted approximation, not a simultaneous
/// contact solver.
pub fn step(ball: &mut Ball, vertices: &[Vec2; 6]) {
    // Gravity
    ball.vel.y += GRAVITY;

    // Friction (applied to the post-gravity velocity, every frame)
    ball.vel *= FRICTION;

    // Integrate position
    ball.pos += ball.vel;

    // Resolve wall collisions
    for i in 0..vertices.len() {
        let p1 = vertices[i];
        let p2 = vertices[(i + 1) % vertices.len()];

        let result = ball_segment_collision(ball.pos, ball.radius, p1, p2);
        if result.hit {
            ball.vel = reflect_velocity(ball.vel, result.normal) * BOUNCE_FACTOR;
            // Push the ball back to exact tangency with the wall
            ball.pos = result.point + result.normal * ball.radius;
        }
    }
}
