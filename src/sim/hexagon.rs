//! Regular hexagon geometry
//!
//! The container is a regular hexagon centered in the canvas, rotated by an
//! angle that advances a fixed amount each frame. Vertices are a pure
//! function of that angle and are recomputed every frame - they are never
//! cached across frames.

use glam::Vec2;
use std::f32::consts::TAU;

use crate::consts::{HEX_RADIUS, HEX_SIDES, ROTATION_SPEED};
use crate::{normalize_angle, polar_to_cartesian};

/// Compute the vertex ring of a regular hexagon.
///
/// Vertex i sits at angle `i * (2π/6) - π/2 + rotation`, so vertex 0 is at
/// the top when rotation is zero. Consecutive indices are adjacent edge
/// endpoints; index 5 closes back to index 0.
pub fn hexagon_vertices(center: Vec2, radius: f32, rotation: f32) -> [Vec2; 6] {
    std::array::from_fn(|i| {
        let theta = i as f32 * TAU / HEX_SIDES as f32 - TAU / 4.0 + rotation;
        center + polar_to_cartesian(radius, theta)
    })
}

/// The rotating container
#[derive(Debug, Clone, Copy)]
pub struct Hexagon {
    /// Fixed center (canvas center)
    pub center: Vec2,
    /// Circumscribed radius
    pub radius: f32,
    /// Current rotation (radians, normalized to [-π, π))
    pub rotation: f32,
}

impl Hexagon {
    pub fn new(center: Vec2) -> Self {
        Self {
            center,
            radius: HEX_RADIUS,
            rotation: 0.0,
        }
    }

    /// Advance rotation by one frame, keeping the angle normalized so it
    /// stays numerically stable over arbitrarily long runtimes.
    pub fn rotate(&mut self) {
        self.rotation = normalize_angle(self.rotation + ROTATION_SPEED);
    }

    /// Current vertex ring. Must be called with the frame's rotation
    /// already applied.
    pub fn vertices(&self) -> [Vec2; 6] {
        hexagon_vertices(self.center, self.radius, self.rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::CENTER;
    use proptest::prelude::*;
    use std::f32::consts::PI;

    #[test]
    fn test_first_vertex_at_top() {
        let verts = hexagon_vertices(CENTER, 250.0, 0.0);
        // -π/2 offset: vertex 0 straight up from center (canvas y down)
        assert!((verts[0].x - CENTER.x).abs() < 1e-3);
        assert!((verts[0].y - (CENTER.y - 250.0)).abs() < 1e-3);
    }

    #[test]
    fn test_full_turn_is_periodic() {
        let a = hexagon_vertices(CENTER, 250.0, 0.3);
        let b = hexagon_vertices(CENTER, 250.0, 0.3 + TAU);
        for (va, vb) in a.iter().zip(b.iter()) {
            assert!(va.distance(*vb) < 1e-2);
        }
    }

    #[test]
    fn test_rotate_stays_normalized() {
        let mut hex = Hexagon::new(CENTER);
        for _ in 0..100_000 {
            hex.rotate();
            assert!(hex.rotation >= -PI && hex.rotation < PI);
        }
    }

    proptest! {
        #[test]
        fn prop_six_vertices_on_circle(rotation in -10.0f32..10.0) {
            let verts = hexagon_vertices(CENTER, 250.0, rotation);
            prop_assert_eq!(verts.len(), 6);
            for v in verts {
                let d = v.distance(CENTER);
                prop_assert!((d - 250.0).abs() < 1e-2);
            }
        }

        #[test]
        fn prop_edges_equal_length(rotation in -10.0f32..10.0) {
            // Regular hexagon: every edge has length == radius
            let verts = hexagon_vertices(CENTER, 250.0, rotation);
            for i in 0..6 {
                let edge = verts[i].distance(verts[(i + 1) % 6]);
                prop_assert!((edge - 250.0).abs() < 1e-2);
            }
        }
    }
}
