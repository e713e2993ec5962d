use std::cmp::Ordering;
use std::collections::BinaryHeap;

use eucpath_core::Key;
use log::{debug, trace};

use crate::error::PathError;
use crate::graph::Graph;
use crate::path::{Path, Step};
use crate::traits::{Metric, Vertex};

/// Frontier entry, ordered so that `BinaryHeap` pops the smallest distance
/// first.
#[derive(Clone, Copy, Debug)]
struct NodeRef {
    idx: usize,
    dist: f64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        other.dist.total_cmp(&self.dist)
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NodeRef {}

impl<V, M> Graph<V, M>
where
    V: Vertex,
    M: Metric<V::Location>,
{
    /// Shortest path between the nodes carrying `start` and `finish`.
    pub fn path_by_key(&mut self, start: Key, finish: Key) -> Result<Path, PathError> {
        let (st, fin) = self.locate_by_key(start, finish)?;
        self.shortest_path(st, fin)
    }

    /// Shortest path between the first nodes located exactly at `start` and
    /// `finish`.
    ///
    /// When several nodes share a location the first one in construction
    /// order is used; use [`path_by_key`](Graph::path_by_key) to pick a
    /// specific one.
    pub fn path_by_position(
        &mut self,
        start: &V::Location,
        finish: &V::Location,
    ) -> Result<Path, PathError> {
        let (st, fin) = self.locate_by_location(start, finish)?;
        self.shortest_path(st, fin)
    }

    fn shortest_path(&mut self, st: usize, fin: usize) -> Result<Path, PathError> {
        self.run.reset();
        self.run.set_best(st, 0.0);

        let coincident = st == fin
            || self.nodes[st]
                .neighbors
                .iter()
                .any(|e| e.node == fin && e.weight == 0.0);
        if coincident {
            self.run.settle(st);
            debug!("path {} -> {}: coincident, distance 0", self.key(st), self.key(fin));
            return Ok(Path::default());
        }

        let total_distance = self.relax(st, fin)?;
        let steps = self.backtrack(st, fin)?;
        debug!(
            "path {} -> {}: {} steps, distance {}",
            self.key(st),
            self.key(fin),
            steps.len(),
            total_distance
        );
        Ok(Path {
            steps,
            total_distance,
        })
    }

    /// Settle nodes in order of distance from `st` until `fin` is settled.
    ///
    /// Returns the distance of `fin`, or [`PathError::NoPath`] once no
    /// frontier node is reachable.
    fn relax(&mut self, st: usize, fin: usize) -> Result<f64, PathError> {
        let mut open = BinaryHeap::new();
        open.push(NodeRef { idx: st, dist: 0.0 });

        while let Some(current) = open.pop() {
            let ci = current.idx;
            // Skip stale entries.
            if self.run.is_settled(ci) || current.dist > self.run.best(ci) {
                continue;
            }
            self.run.settle(ci);
            trace!("settled {} at {}", self.key(ci), current.dist);

            if ci == fin {
                return Ok(current.dist);
            }

            for e in &self.nodes[ci].neighbors {
                if self.run.is_settled(e.node) {
                    continue;
                }
                let candidate = current.dist + e.weight;
                if candidate < self.run.best(e.node) {
                    self.run.set_best(e.node, candidate);
                    open.push(NodeRef {
                        idx: e.node,
                        dist: candidate,
                    });
                }
            }
        }

        Err(PathError::NoPath {
            start: self.key(st),
            finish: self.key(fin),
        })
    }

    /// Walk back from `fin` to `st` over incoming edges.
    ///
    /// At each node the predecessor is the one, among those settled before
    /// it, minimizing `best(p) + w(p, node)`. That sum equals the node's own
    /// best distance, so the step weights add up to the total exactly.
    fn backtrack(&self, st: usize, fin: usize) -> Result<Vec<Step>, PathError> {
        let mut steps = Vec::new();
        let mut ci = fin;
        while ci != st {
            let order = self.run.settle_order(ci).unwrap_or(0);
            let mut chosen: Option<(usize, f64)> = None;
            for e in &self.nodes[ci].predecessors {
                if !self.run.settle_order(e.node).is_some_and(|o| o < order) {
                    continue;
                }
                let through = self.run.best(e.node) + e.weight;
                if chosen.is_none_or(|(_, d)| through < d) {
                    chosen = Some((e.node, through));
                }
            }
            // Only reachable if `fin` was never settled.
            let Some((pi, _)) = chosen else {
                return Err(PathError::NoPath {
                    start: self.key(st),
                    finish: self.key(fin),
                });
            };
            steps.push(Step {
                parent: self.key(pi),
                node: self.key(ci),
            });
            ci = pi;
        }
        steps.reverse();
        Ok(steps)
    }
}
