use std::collections::{HashMap, HashSet};

use eucpath_core::Key;
use log::debug;

use crate::error::PathError;
use crate::metric::Euclidean;
use crate::traits::{Metric, Vertex};

// ---------------------------------------------------------------------------
// Arena nodes
// ---------------------------------------------------------------------------

/// Directed link to another node of the arena, with its measured length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Edge {
    pub(crate) node: usize,
    pub(crate) weight: f64,
}

#[derive(Debug, Clone)]
pub(crate) struct GraphNode<V> {
    pub(crate) vertex: V,
    /// Outgoing links, one per distinct connection target.
    pub(crate) neighbors: Vec<Edge>,
    /// Incoming links, in construction order of their source node.
    pub(crate) predecessors: Vec<Edge>,
}

// ---------------------------------------------------------------------------
// Per-run relaxation state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Slot {
    best: f64,
    generation: u32,
    settled: bool,
    order: u32,
}

/// Best-known distances and frontier membership for one shortest-path run.
///
/// A slot whose generation differs from the current one reads as
/// "distance +∞, still in the frontier", so resetting is a counter bump.
#[derive(Debug, Clone)]
pub(crate) struct RunState {
    slots: Vec<Slot>,
    generation: u32,
    settled_count: u32,
}

impl RunState {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            slots: vec![Slot::default(); len],
            generation: 1,
            settled_count: 0,
        }
    }

    /// Forget every distance and put every node back in the frontier.
    pub(crate) fn reset(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: old stamps could alias the new generation.
            self.slots.fill(Slot::default());
            self.generation = 1;
        }
        self.settled_count = 0;
    }

    #[inline]
    fn current(&self, idx: usize) -> Option<&Slot> {
        let slot = &self.slots[idx];
        (slot.generation == self.generation).then_some(slot)
    }

    #[inline]
    pub(crate) fn best(&self, idx: usize) -> f64 {
        self.current(idx).map_or(f64::INFINITY, |s| s.best)
    }

    #[inline]
    pub(crate) fn is_settled(&self, idx: usize) -> bool {
        self.current(idx).is_some_and(|s| s.settled)
    }

    /// Position of `idx` in the settling sequence of this run.
    #[inline]
    pub(crate) fn settle_order(&self, idx: usize) -> Option<u32> {
        self.current(idx).filter(|s| s.settled).map(|s| s.order)
    }

    pub(crate) fn set_best(&mut self, idx: usize, best: f64) {
        let generation = self.generation;
        let slot = &mut self.slots[idx];
        if slot.generation != generation {
            *slot = Slot {
                generation,
                ..Slot::default()
            };
        }
        slot.best = best;
    }

    /// Finalize `idx`, removing it from the frontier.
    pub(crate) fn settle(&mut self, idx: usize) {
        if self.current(idx).is_none() {
            self.set_best(idx, f64::INFINITY);
        }
        let order = self.settled_count;
        self.settled_count += 1;
        let slot = &mut self.slots[idx];
        slot.settled = true;
        slot.order = order;
    }
}

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// A directed graph of vertices embedded in space, ready for shortest-path
/// queries.
///
/// The graph owns every vertex in one arena; links between them are arena
/// indices, and edge lengths are measured once by the metric `M` at
/// construction.
///
/// # Reuse
///
/// A query leaves the distances it settled in the graph, readable through
/// [`best_distance`](Graph::best_distance) and
/// [`is_settled`](Graph::is_settled), until [`reset`](Graph::reset) or the
/// next query. Every query starts by resetting that state itself, so
/// consecutive queries never see each other's distances.
#[derive(Debug, Clone)]
pub struct Graph<V, M = Euclidean> {
    pub(crate) nodes: Vec<GraphNode<V>>,
    pub(crate) index: HashMap<Key, usize>,
    pub(crate) metric: M,
    pub(crate) run: RunState,
    edge_count: usize,
}

impl<V> Graph<V, Euclidean>
where
    V: Vertex,
    Euclidean: Metric<V::Location>,
{
    /// Build a graph measuring edges with straight-line distance.
    pub fn new<I: IntoIterator<Item = V>>(vertices: I) -> Result<Self, PathError> {
        Self::with_metric(vertices, Euclidean)
    }
}

impl<V, M> Graph<V, M>
where
    V: Vertex,
    M: Metric<V::Location>,
{
    /// Build a graph measuring edges with `metric`.
    ///
    /// Fails with [`PathError::DuplicateKey`] if two vertices share a key,
    /// [`PathError::UnknownConnectionTarget`] if a connection names a key no
    /// vertex carries, and [`PathError::DimensionMismatch`] if an edge joins
    /// locations the metric cannot compare. Repeated connections to the same
    /// target collapse into one edge.
    pub fn with_metric<I: IntoIterator<Item = V>>(
        vertices: I,
        metric: M,
    ) -> Result<Self, PathError> {
        let vertices: Vec<V> = vertices.into_iter().collect();

        let mut index = HashMap::with_capacity(vertices.len());
        for (i, v) in vertices.iter().enumerate() {
            if index.insert(v.key(), i).is_some() {
                return Err(PathError::DuplicateKey(v.key()));
            }
        }

        let mut links = Vec::new();
        let mut seen = HashSet::new();
        for (from, v) in vertices.iter().enumerate() {
            seen.clear();
            for &to_key in v.connections() {
                let Some(&to) = index.get(&to_key) else {
                    return Err(PathError::UnknownConnectionTarget {
                        from: v.key(),
                        to: to_key,
                    });
                };
                if !seen.insert(to) {
                    continue;
                }
                let weight = metric.distance(v.location(), vertices[to].location())?;
                links.push((from, to, weight));
            }
        }

        let mut nodes: Vec<GraphNode<V>> = vertices
            .into_iter()
            .map(|vertex| GraphNode {
                vertex,
                neighbors: Vec::new(),
                predecessors: Vec::new(),
            })
            .collect();
        for &(from, to, weight) in &links {
            nodes[from].neighbors.push(Edge { node: to, weight });
            nodes[to].predecessors.push(Edge { node: from, weight });
        }

        debug!("graph built: {} nodes, {} edges", nodes.len(), links.len());

        let run = RunState::new(nodes.len());
        Ok(Self {
            nodes,
            index,
            metric,
            run,
            edge_count: links.len(),
        })
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of distinct directed edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[inline]
    pub fn contains(&self, key: Key) -> bool {
        self.index.contains_key(&key)
    }

    #[inline]
    pub fn metric(&self) -> &M {
        &self.metric
    }

    /// The vertex carrying `key`.
    pub fn vertex(&self, key: Key) -> Option<&V> {
        self.idx(key).map(|i| &self.nodes[i].vertex)
    }

    /// All vertices, in construction order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.nodes.iter().map(|n| &n.vertex)
    }

    /// Keys and edge lengths of the nodes `key` links to, or `None` for an
    /// unknown key.
    pub fn neighbors(&self, key: Key) -> Option<impl Iterator<Item = (Key, f64)> + '_> {
        let i = self.idx(key)?;
        Some(
            self.nodes[i]
                .neighbors
                .iter()
                .map(|e| (self.key(e.node), e.weight)),
        )
    }

    /// Best distance from the start of the last query to `key`.
    ///
    /// Returns `None` for an unknown key and `f64::INFINITY` for a node the
    /// last query never reached (or after [`reset`](Graph::reset)).
    pub fn best_distance(&self, key: Key) -> Option<f64> {
        self.idx(key).map(|i| self.run.best(i))
    }

    /// Whether the last query finalized `key`.
    pub fn is_settled(&self, key: Key) -> bool {
        self.idx(key).is_some_and(|i| self.run.is_settled(i))
    }

    /// Discard the distances left by the last query.
    pub fn reset(&mut self) {
        self.run.reset();
    }

    // -----------------------------------------------------------------------
    // Lookup helpers
    // -----------------------------------------------------------------------

    #[inline]
    pub(crate) fn idx(&self, key: Key) -> Option<usize> {
        self.index.get(&key).copied()
    }

    #[inline]
    pub(crate) fn key(&self, idx: usize) -> Key {
        self.nodes[idx].vertex.key()
    }

    /// Resolve start and finish by key.
    pub(crate) fn locate_by_key(
        &self,
        start: Key,
        finish: Key,
    ) -> Result<(usize, usize), PathError> {
        let st = self.idx(start).ok_or(PathError::StartNotFound)?;
        let fin = self.idx(finish).ok_or(PathError::FinishNotFound)?;
        Ok((st, fin))
    }

    /// Resolve start and finish as the first nodes, in construction order,
    /// at zero distance from the given locations.
    pub(crate) fn locate_by_location(
        &self,
        start: &V::Location,
        finish: &V::Location,
    ) -> Result<(usize, usize), PathError> {
        let st = self.find_at(start)?.ok_or(PathError::StartNotFound)?;
        let fin = self.find_at(finish)?.ok_or(PathError::FinishNotFound)?;
        Ok((st, fin))
    }

    /// Nodes of another dimension never match. The mismatch is reported
    /// only when no node shares the dimension of `location`.
    fn find_at(&self, location: &V::Location) -> Result<Option<usize>, PathError> {
        let mut mismatch = None;
        let mut comparable = false;
        for (i, n) in self.nodes.iter().enumerate() {
            match self.metric.distance(n.vertex.location(), location) {
                Ok(d) if d == 0.0 => return Ok(Some(i)),
                Ok(_) => comparable = true,
                Err(e) => {
                    mismatch.get_or_insert(e);
                }
            }
        }
        match mismatch {
            Some(e) if !comparable => Err(e.into()),
            _ => Ok(None),
        }
    }
}
