//! Random geometric graphs for trying the engine out.
//!
//! Points are drawn uniformly in a cube; each point links to its `degree`
//! nearest other points, optionally in both directions.

use eucpath::{Key, VertexSpec};
use rand::Rng;

use crate::graph_file::GraphFile;

#[derive(Debug, Clone, Copy)]
pub struct GenerateParams {
    pub nodes: usize,
    pub dims: usize,
    pub degree: usize,
    /// Side length of the cube points are drawn from.
    pub extent: f64,
    pub bidirectional: bool,
}

impl Default for GenerateParams {
    fn default() -> Self {
        Self {
            nodes: 100,
            dims: 2,
            degree: 3,
            extent: 100.0,
            bidirectional: true,
        }
    }
}

fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}

/// Draw a graph with keys `0..nodes`.
pub fn random_graph(params: &GenerateParams, rng: &mut impl Rng) -> GraphFile {
    let points: Vec<Vec<f64>> = (0..params.nodes)
        .map(|_| {
            (0..params.dims)
                .map(|_| rng.random_range(0.0..params.extent))
                .collect()
        })
        .collect();

    let mut links: Vec<Vec<Key>> = vec![Vec::new(); params.nodes];
    let mut order: Vec<usize> = Vec::with_capacity(params.nodes);
    for (i, p) in points.iter().enumerate() {
        order.clear();
        order.extend((0..params.nodes).filter(|&j| j != i));
        order.sort_by(|&a, &b| {
            squared_distance(p, &points[a]).total_cmp(&squared_distance(p, &points[b]))
        });
        for &j in order.iter().take(params.degree) {
            links[i].push(j as Key);
            if params.bidirectional {
                links[j].push(i as Key);
            }
        }
    }

    let vertices = points
        .into_iter()
        .zip(links)
        .enumerate()
        .map(|(i, (coords, mut connections))| {
            connections.sort_unstable();
            connections.dedup();
            VertexSpec::at(i as Key, coords, connections)
        })
        .collect();
    GraphFile { vertices }
}
