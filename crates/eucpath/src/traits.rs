use eucpath_core::{DimensionMismatch, Key, Position, VertexSpec};

/// Anything that can stand as a graph node: it has a key, a location, and
/// outgoing connections by key.
///
/// The engine never looks inside `Location`; it only hands pairs of them to
/// a [`Metric`].
pub trait Vertex {
    type Location: ?Sized;

    /// Unique identifier of this vertex.
    fn key(&self) -> Key;

    /// Where the vertex sits.
    fn location(&self) -> &Self::Location;

    /// Keys of the vertices this one links to (directed).
    fn connections(&self) -> &[Key];
}

/// Distance between two locations. Must be non-negative and symmetric.
pub trait Metric<L: ?Sized> {
    fn distance(&self, a: &L, b: &L) -> Result<f64, DimensionMismatch>;
}

impl Vertex for VertexSpec {
    type Location = Position;

    #[inline]
    fn key(&self) -> Key {
        VertexSpec::key(self)
    }

    #[inline]
    fn location(&self) -> &Position {
        self.position()
    }

    #[inline]
    fn connections(&self) -> &[Key] {
        VertexSpec::connections(self)
    }
}

impl<T: Vertex + ?Sized> Vertex for &T {
    type Location = T::Location;

    #[inline]
    fn key(&self) -> Key {
        (**self).key()
    }

    #[inline]
    fn location(&self) -> &Self::Location {
        (**self).location()
    }

    #[inline]
    fn connections(&self) -> &[Key] {
        (**self).connections()
    }
}
