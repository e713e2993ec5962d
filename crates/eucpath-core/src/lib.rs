//! **eucpath-core**: positions and vertex descriptions.
//!
//! This crate provides the value types shared across the *eucpath*
//! workspace: identified points in n-dimensional space ([`Position`]) and
//! the declarative node descriptions ([`VertexSpec`]) a graph is built
//! from. The shortest-path engine itself lives in the `eucpath` crate.

pub mod position;
pub mod vertex;

pub use position::{DimensionMismatch, Key, Position, check_dimensions, euclidean};
pub use vertex::VertexSpec;
