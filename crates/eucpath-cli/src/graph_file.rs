//! JSON graph files: a list of vertices, each with a position and its
//! outgoing connections.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use eucpath::VertexSpec;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphFile {
    pub vertices: Vec<VertexSpec>,
}

impl GraphFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let file: GraphFile =
            serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
        tracing::debug!(
            path = %path.display(),
            vertices = file.vertices.len(),
            "graph file loaded"
        );
        Ok(file)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    /// Distinct coordinate counts across all vertices, ascending.
    pub fn dimensions(&self) -> Vec<usize> {
        let dims: BTreeSet<usize> = self
            .vertices
            .iter()
            .map(|v| v.position().dimension())
            .collect();
        dims.into_iter().collect()
    }
}
