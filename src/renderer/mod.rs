//! Rendering support
//!
//! Turns the simulation's draw list into a flat triangle list the GPU
//! collaborator can upload as-is.

pub mod shapes;
pub mod vertex;

pub use vertex::Vertex;

use crate::sim::Primitive;

/// Expand primitives into a triangle list, preserving draw order
pub fn build_vertices(primitives: &[Primitive]) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for primitive in primitives {
        match *primitive {
            Primitive::Rect { center, size, color } => vertices.extend(shapes::rect(center, size, color)),
            Primitive::Disc {
                center,
                radius,
                color,
                segments,
            } => vertices.extend(shapes::circle(center, radius, color, segments)),
        }
    }
    vertices
}
