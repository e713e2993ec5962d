//! Points in n-dimensional real space: [`Position`] and its Euclidean
//! distance.

use std::fmt;

/// Identifier shared by a [`Position`] and the graph node built from it.
pub type Key = i64;

// ---------------------------------------------------------------------------
// DimensionMismatch
// ---------------------------------------------------------------------------

/// Two coordinate vectors of different lengths were compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionMismatch {
    pub left: usize,
    pub right: usize,
}

impl fmt::Display for DimensionMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "dimension mismatch: {} coordinates against {}",
            self.left, self.right
        )
    }
}

impl std::error::Error for DimensionMismatch {}

/// Fail unless `a` and `b` have the same length.
#[inline]
pub fn check_dimensions(a: &[f64], b: &[f64]) -> Result<(), DimensionMismatch> {
    if a.len() != b.len() {
        return Err(DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}

/// Euclidean (L2) distance between two coordinate vectors.
#[inline]
pub fn euclidean(a: &[f64], b: &[f64]) -> Result<f64, DimensionMismatch> {
    check_dimensions(a, b)?;
    Ok(a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt())
}

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// An identified point in n-dimensional real space.
///
/// Positions are immutable: the key and coordinates are fixed at
/// construction. Two distinct keys may share the same coordinates.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    key: Key,
    coordinates: Vec<f64>,
}

impl Position {
    /// Create a new position.
    pub fn new(key: Key, coordinates: impl Into<Vec<f64>>) -> Self {
        Self {
            key,
            coordinates: coordinates.into(),
        }
    }

    #[inline]
    pub fn key(&self) -> Key {
        self.key
    }

    #[inline]
    pub fn coordinates(&self) -> &[f64] {
        &self.coordinates
    }

    /// Number of coordinates.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.coordinates.len()
    }

    /// Euclidean (L2) distance to `other`.
    ///
    /// Keys are ignored: only coordinates take part. Fails when the two
    /// positions have a different number of coordinates.
    pub fn distance(&self, other: &Position) -> Result<f64, DimensionMismatch> {
        euclidean(&self.coordinates, &other.coordinates)
    }

    /// Whether `other` sits at exactly the same coordinates.
    pub fn coincides_with(&self, other: &Position) -> Result<bool, DimensionMismatch> {
        Ok(self.distance(other)? == 0.0)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} (", self.key)?;
        for (i, c) in self.coordinates.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist(a: &[f64], b: &[f64]) -> f64 {
        Position::new(1, a).distance(&Position::new(2, b)).unwrap()
    }

    #[test]
    fn distances_in_two_dimensions() {
        assert_eq!(dist(&[1.0, 1.0], &[2.0, 2.0]), 1.4142135623730951);
        assert_eq!(dist(&[0.0, 1.0], &[0.0, 2.0]), 1.0);
        assert_eq!(dist(&[1.0, 0.0], &[0.0, 2.0]), 2.23606797749979);
        assert_eq!(dist(&[1.0, 0.0], &[1.0, 0.0]), 0.0);
        assert_eq!(dist(&[0.0, 8.0], &[15.0, 0.0]), 17.0);
    }

    #[test]
    fn three_four_five_triangle() {
        assert_eq!(dist(&[0.0, 0.0], &[3.0, 4.0]), 5.0);
        assert_eq!(dist(&[3.0, 0.0], &[0.0, 4.0]), 5.0);
    }

    #[test]
    fn distances_in_higher_dimensions() {
        assert_eq!(dist(&[0.0, 0.0, 0.0], &[1.0, 1.0, 1.0]), 1.7320508075688772);
        assert_eq!(dist(&[2.0, 3.0, 6.0], &[0.0, 0.0, 0.0]), 7.0);
        assert_eq!(dist(&[2.0, 3.0, 6.0, 0.0], &[0.0; 4]), 7.0);
        assert_eq!(dist(&[1.0; 4], &[2.0; 4]), 2.0);
    }

    #[test]
    fn mismatched_dimensions_fail() {
        let a = Position::new(0, [0.0, 0.0]);
        let b = Position::new(1, [0.0, 0.0, 0.0]);
        assert_eq!(a.distance(&b), Err(DimensionMismatch { left: 2, right: 3 }));
        assert_eq!(b.distance(&a), Err(DimensionMismatch { left: 3, right: 2 }));
    }

    #[test]
    fn coincidence_ignores_keys() {
        let a = Position::new(0, [4.0, 2.0]);
        let b = Position::new(9, [4.0, 2.0]);
        assert_eq!(a.coincides_with(&b), Ok(true));
        assert_eq!(a.coincides_with(&Position::new(0, [4.0, 2.5])), Ok(false));
    }

    #[test]
    fn display() {
        assert_eq!(Position::new(3, [1.0, 2.5]).to_string(), "#3 (1, 2.5)");
        assert_eq!(
            DimensionMismatch { left: 2, right: 3 }.to_string(),
            "dimension mismatch: 2 coordinates against 3"
        );
    }

    mod props {
        use super::super::*;
        use proptest::prelude::*;

        fn coords(dim: usize) -> impl Strategy<Value = Vec<f64>> {
            proptest::collection::vec(-1.0e6..1.0e6f64, dim)
        }

        fn pair() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
            (1usize..6).prop_flat_map(|d| (coords(d), coords(d)))
        }

        proptest! {
            #[test]
            fn symmetric((a, b) in pair()) {
                let p = Position::new(0, a);
                let q = Position::new(1, b);
                prop_assert_eq!(p.distance(&q).unwrap(), q.distance(&p).unwrap());
            }

            #[test]
            fn zero_to_itself(a in (1usize..6).prop_flat_map(coords)) {
                let p = Position::new(0, a);
                prop_assert_eq!(p.distance(&p).unwrap(), 0.0);
            }

            #[test]
            fn non_negative((a, b) in pair()) {
                let d = Position::new(0, a).distance(&Position::new(1, b)).unwrap();
                prop_assert!(d >= 0.0);
            }

            #[test]
            fn rejects_other_dimensions(a in coords(2), b in coords(3)) {
                let err = Position::new(0, a).distance(&Position::new(1, b));
                prop_assert_eq!(err, Err(DimensionMismatch { left: 2, right: 3 }));
            }
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn position_round_trip() {
        let p = Position::new(7, [1.5, -2.0, 3.25]);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"key":7,"coordinates":[1.5,-2.0,3.25]}"#);
        let back: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
