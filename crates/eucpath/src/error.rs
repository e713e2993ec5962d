use std::fmt;

use eucpath_core::{DimensionMismatch, Key};

/// Errors from building a [`Graph`](crate::Graph) or querying a path.
///
/// None of them are transient: retrying the same call on the same input
/// fails the same way.
#[derive(Debug, Clone, PartialEq)]
pub enum PathError {
    /// Two positions with different coordinate counts were measured.
    DimensionMismatch(DimensionMismatch),
    /// A vertex lists a connection to a key no vertex carries.
    UnknownConnectionTarget { from: Key, to: Key },
    /// Two vertices share the same key.
    DuplicateKey(Key),
    /// No node matches the requested start.
    StartNotFound,
    /// No node matches the requested finish.
    FinishNotFound,
    /// Every reachable node was settled without reaching the finish.
    NoPath { start: Key, finish: Key },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch(e) => write!(f, "{e}"),
            Self::UnknownConnectionTarget { from, to } => {
                write!(f, "vertex {from} connects to unknown vertex {to}")
            }
            Self::DuplicateKey(key) => write!(f, "vertex key {key} is used more than once"),
            Self::StartNotFound => write!(f, "cannot find start node"),
            Self::FinishNotFound => write!(f, "cannot find finish node"),
            Self::NoPath { start, finish } => {
                write!(f, "there is no connection between nodes {start} and {finish}")
            }
        }
    }
}

impl std::error::Error for PathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DimensionMismatch(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DimensionMismatch> for PathError {
    fn from(e: DimensionMismatch) -> Self {
        Self::DimensionMismatch(e)
    }
}
