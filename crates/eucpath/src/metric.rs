pub use eucpath_core::euclidean;
use eucpath_core::{DimensionMismatch, Position, check_dimensions};

use crate::traits::Metric;

/// Manhattan (L1) distance between two coordinate vectors.
#[inline]
pub fn manhattan(a: &[f64], b: &[f64]) -> Result<f64, DimensionMismatch> {
    check_dimensions(a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum())
}

/// Chebyshev (L∞) distance between two coordinate vectors.
#[inline]
pub fn chebyshev(a: &[f64], b: &[f64]) -> Result<f64, DimensionMismatch> {
    check_dimensions(a, b)?;
    Ok(a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max))
}

/// Straight-line distance. The default metric of a [`Graph`](crate::Graph).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Euclidean;

/// Sum of absolute coordinate differences.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Manhattan;

/// Largest absolute coordinate difference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Chebyshev;

impl Metric<Position> for Euclidean {
    #[inline]
    fn distance(&self, a: &Position, b: &Position) -> Result<f64, DimensionMismatch> {
        a.distance(b)
    }
}

impl Metric<[f64]> for Euclidean {
    #[inline]
    fn distance(&self, a: &[f64], b: &[f64]) -> Result<f64, DimensionMismatch> {
        euclidean(a, b)
    }
}

impl Metric<Position> for Manhattan {
    #[inline]
    fn distance(&self, a: &Position, b: &Position) -> Result<f64, DimensionMismatch> {
        manhattan(a.coordinates(), b.coordinates())
    }
}

impl Metric<[f64]> for Manhattan {
    #[inline]
    fn distance(&self, a: &[f64], b: &[f64]) -> Result<f64, DimensionMismatch> {
        manhattan(a, b)
    }
}

impl Metric<Position> for Chebyshev {
    #[inline]
    fn distance(&self, a: &Position, b: &Position) -> Result<f64, DimensionMismatch> {
        chebyshev(a.coordinates(), b.coordinates())
    }
}

impl Metric<[f64]> for Chebyshev {
    #[inline]
    fn distance(&self, a: &[f64], b: &[f64]) -> Result<f64, DimensionMismatch> {
        chebyshev(a, b)
    }
}
