//! WebGPU rendering module
//!
//! Frame geometry is built on the CPU as a flat triangle list (hexagon
//! outline quads plus a ball disc fan) and uploaded each frame.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::Vertex;
