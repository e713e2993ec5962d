use eucpath_core::Key;

/// One hop of a [`Path`]: from `parent` to `node`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    pub parent: Key,
    pub node: Key,
}

/// A shortest path, ordered from start to finish.
///
/// `steps[0].parent` is the start and the last step's `node` is the finish.
/// No steps and a zero total means start and finish coincide (same node,
/// or joined by a zero-length edge).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    pub steps: Vec<Step>,
    pub total_distance: f64,
}

impl Path {
    /// Number of hops.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Key of the first node, if the path has any steps.
    pub fn start(&self) -> Option<Key> {
        self.steps.first().map(|s| s.parent)
    }

    /// Key of the last node, if the path has any steps.
    pub fn finish(&self) -> Option<Key> {
        self.steps.last().map(|s| s.node)
    }

    /// Every node on the path, start first. Empty for an empty path.
    pub fn keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.start()
            .into_iter()
            .chain(self.steps.iter().map(|s| s.node))
    }
}
