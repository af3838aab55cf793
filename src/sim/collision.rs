//! Collision detection and response against the hexagon walls
//!
//! Each wall is a finite segment between adjacent vertices. The ball is
//! tested against a wall by projecting its center onto the segment and
//! comparing the distance to the closest point against the ball radius.

use glam::Vec2;

/// Result of a collision check
#[derive(Debug, Clone, Copy)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Closest point on the wall (if hit)
    pub point: Vec2,
    /// Unit normal pointing from the wall toward the ball center
    pub normal: Vec2,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            point: Vec2::ZERO,
            normal: Vec2::ZERO,
        }
    }
}

/// Closest point on the finite segment [p1, p2] to `point`, via clamped
/// scalar projection. Returns `None` for a degenerate segment.
pub fn closest_point_on_segment(point: Vec2, p1: Vec2, p2: Vec2) -> Option<Vec2> {
    let seg = p2 - p1;
    let len_sq = seg.length_squared();
    if len_sq < 1e-4 {
        return None;
    }
    let t = ((point - p1).dot(seg) / len_sq).clamp(0.0, 1.0);
    Some(p1 + seg * t)
}

/// Check collision between the ball and one wall segment.
///
/// Penetration requires the distance to be strictly below the radius: a
/// ball resting exactly tangent to a wall is not a hit. A center lying
/// exactly on the segment has no defined normal and is treated as a miss
/// rather than letting a zero division poison the velocity with NaN.
pub fn ball_segment_collision(
    ball_pos: Vec2,
    ball_radius: f32,
    p1: Vec2,
    p2: Vec2,
) -> CollisionResult {
    let Some(closest) = closest_point_on_segment(ball_pos, p1, p2) else {
        return CollisionResult::miss();
    };

    let offset = ball_pos - closest;
    let distance = offset.length();

    if distance >= ball_radius || distance == 0.0 {
        return CollisionResult::miss();
    }

    CollisionResult {
        hit: true,
        point: closest,
        normal: offset / distance,
    }
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_closest_point_interior() {
        let p = closest_point_on_segment(Vec2::new(5.0, 3.0), Vec2::ZERO, Vec2::new(10.0, 0.0));
        assert_eq!(p, Some(Vec2::new(5.0, 0.0)));
    }

    #[test]
    fn test_closest_point_clamps_to_endpoints() {
        let p1 = Vec2::ZERO;
        let p2 = Vec2::new(10.0, 0.0);
        assert_eq!(
            closest_point_on_segment(Vec2::new(-4.0, 2.0), p1, p2),
            Some(p1)
        );
        assert_eq!(
            closest_point_on_segment(Vec2::new(14.0, 2.0), p1, p2),
            Some(p2)
        );
    }

    #[test]
    fn test_degenerate_segment_is_skipped() {
        let p = Vec2::new(3.0, 3.0);
        assert!(closest_point_on_segment(Vec2::ZERO, p, p).is_none());
    }

    #[test]
    fn test_penetrating_ball_hits() {
        // Horizontal wall at y=0, ball center 10 above, radius 15
        let result = ball_segment_collision(
            Vec2::new(50.0, -10.0),
            15.0,
            Vec2::ZERO,
            Vec2::new(100.0, 0.0),
        );
        assert!(result.hit);
        assert_eq!(result.point, Vec2::new(50.0, 0.0));
        assert!((result.normal - Vec2::new(0.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn test_tangent_ball_is_not_a_hit() {
        // Resting exactly at distance == radius: strict comparison, no hit
        let result = ball_segment_collision(
            Vec2::new(50.0, -15.0),
            15.0,
            Vec2::ZERO,
            Vec2::new(100.0, 0.0),
        );
        assert!(!result.hit);
    }

    #[test]
    fn test_center_on_segment_is_a_miss() {
        // Zero distance: normal undefined, must not produce NaN
        let result = ball_segment_collision(
            Vec2::new(50.0, 0.0),
            15.0,
            Vec2::ZERO,
            Vec2::new(100.0, 0.0),
        );
        assert!(!result.hit);
        assert!(result.normal.is_finite());
    }

    #[test]
    fn test_reflect_velocity() {
        // Ball moving right, hits vertical wall (normal pointing left)
        let velocity = Vec2::new(100.0, 0.0);
        let normal = Vec2::new(-1.0, 0.0);

        let reflected = reflect_velocity(velocity, normal);
        assert!((reflected.x - (-100.0)).abs() < 0.001);
        assert!(reflected.y.abs() < 0.001);
    }

    proptest! {
        #[test]
        fn prop_reflection_preserves_speed(
            vx in -500.0f32..500.0,
            vy in -500.0f32..500.0,
            theta in 0.0f32..std::f32::consts::TAU,
        ) {
            let v = Vec2::new(vx, vy);
            let n = Vec2::new(theta.cos(), theta.sin());
            let r = reflect_velocity(v, n);
            prop_assert!((r.length() - v.length()).abs() < 1e-2);
        }
    }
}
