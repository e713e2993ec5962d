use crate::position::{Key, Position};

/// Declarative description of one graph node: where it is and which nodes
/// it links to.
///
/// Connections are directed. An edge from A to B says nothing about B to A;
/// a two-way link needs both specs to list each other.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexSpec {
    position: Position,
    #[cfg_attr(feature = "serde", serde(default))]
    connections: Vec<Key>,
}

impl VertexSpec {
    /// Create a vertex at `position` linking to `connections`, in order.
    pub fn new(position: Position, connections: impl Into<Vec<Key>>) -> Self {
        Self {
            position,
            connections: connections.into(),
        }
    }

    /// Shorthand for `VertexSpec::new(Position::new(key, coordinates), connections)`.
    pub fn at(
        key: Key,
        coordinates: impl Into<Vec<f64>>,
        connections: impl Into<Vec<Key>>,
    ) -> Self {
        Self::new(Position::new(key, coordinates), connections)
    }

    #[inline]
    pub fn key(&self) -> Key {
        self.position.key()
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    pub fn connections(&self) -> &[Key] {
        &self.connections
    }

    /// Find the position carrying `key` in a list of specs.
    ///
    /// Linear scan; returns the first match.
    pub fn position_by_key(specs: &[VertexSpec], key: Key) -> Option<&Position> {
        specs
            .iter()
            .map(|v| &v.position)
            .find(|p| p.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> Vec<VertexSpec> {
        vec![
            VertexSpec::at(5, [5.0, 0.0], [4]),
            VertexSpec::at(0, [0.0, 0.0], [1]),
            VertexSpec::at(1, [1.0, 0.0], [0, 2]),
            VertexSpec::at(2, [2.0, 0.0], [1, 3]),
            VertexSpec::at(4, [4.0, 0.0], [3, 5]),
            VertexSpec::at(3, [3.0, 0.0], [2, 4]),
        ]
    }

    #[test]
    fn accessors() {
        let v = VertexSpec::at(2, [2.0, 0.0], [1, 3]);
        assert_eq!(v.key(), 2);
        assert_eq!(v.position().coordinates(), &[2.0, 0.0]);
        assert_eq!(v.connections(), &[1, 3]);
    }

    #[test]
    fn position_lookup_in_shuffled_list() {
        let specs = line();
        assert_eq!(
            VertexSpec::position_by_key(&specs, 0),
            Some(&Position::new(0, [0.0, 0.0]))
        );
        assert_eq!(
            VertexSpec::position_by_key(&specs, 5),
            Some(&Position::new(5, [5.0, 0.0]))
        );
        assert_eq!(VertexSpec::position_by_key(&specs, 42), None);
    }
}
