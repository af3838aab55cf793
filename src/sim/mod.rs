//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - One step per frame, fixed per-frame constants
//! - Stable edge iteration order (by vertex index)
//! - No rendering or platform dependencies

pub mod collision;
pub mod hexagon;
pub mod state;
pub mod tick;

pub use collision::{CollisionResult, ball_segment_collision, reflect_velocity};
pub use hexagon::{Hexagon, hexagon_vertices};
pub use state::{Ball, World};
pub use tick::step;
