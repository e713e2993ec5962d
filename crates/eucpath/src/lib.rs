//! Shortest paths over graphs embedded in n-dimensional space.
//!
//! Every node of a [`Graph`] has a location and a list of directed
//! connections; an edge is as long as the distance between the two
//! locations it joins. Queries run Dijkstra from a start node until the
//! finish node is settled, then walk back to produce a [`Path`].
//!
//! ```
//! use eucpath::{Graph, Key, VertexSpec, compute_path_by_key};
//!
//! let mut graph = Graph::new(vec![
//!     VertexSpec::at(0, [0.0, 0.0], [1]),
//!     VertexSpec::at(1, [3.0, 4.0], [2]),
//!     VertexSpec::at(2, [3.0, 5.0], Vec::<Key>::new()),
//! ])?;
//! let path = compute_path_by_key(&mut graph, 0, 2)?;
//! assert_eq!(path.total_distance, 6.0);
//! assert_eq!(path.keys().collect::<Vec<_>>(), vec![0, 1, 2]);
//! # Ok::<(), eucpath::PathError>(())
//! ```
//!
//! # Trait seams
//!
//! | Trait | Role |
//! |---|---|
//! | [`Vertex`] | key, location and connections of a node |
//! | [`Metric`] | edge length between two locations |
//!
//! [`VertexSpec`](eucpath_core::VertexSpec) with [`Euclidean`] is the
//! default pairing; [`Manhattan`] and [`Chebyshev`] are also provided.

mod dijkstra;
mod error;
mod graph;
mod metric;
mod path;
mod traits;

pub use eucpath_core::{Key, Position, VertexSpec};
pub use error::PathError;
pub use graph::Graph;
pub use metric::{Chebyshev, Euclidean, Manhattan, chebyshev, euclidean, manhattan};
pub use path::{Path, Step};
pub use traits::{Metric, Vertex};

/// Shortest path between the nodes carrying `start` and `finish`.
///
/// Same as [`Graph::path_by_key`].
pub fn compute_path_by_key<V, M>(
    graph: &mut Graph<V, M>,
    start: Key,
    finish: Key,
) -> Result<Path, PathError>
where
    V: Vertex,
    M: Metric<V::Location>,
{
    graph.path_by_key(start, finish)
}

/// Shortest path between the first nodes located exactly at `start` and
/// `finish`.
///
/// Same as [`Graph::path_by_position`].
pub fn compute_path_by_position<V, M>(
    graph: &mut Graph<V, M>,
    start: &V::Location,
    finish: &V::Location,
) -> Result<Path, PathError>
where
    V: Vertex,
    M: Metric<V::Location>,
{
    graph.path_by_position(start, finish)
}
