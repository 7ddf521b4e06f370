use serde::{Deserialize, Serialize};

/// Chunk sizes present in a table, in whole KB.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChunkProfile {
    Single { chunk_size_kb: u64 },
    Multiple { tested_kb: Vec<u64>, best_kb: u64 },
}

impl ChunkProfile {
    pub fn is_multiple(&self) -> bool {
        matches!(self, ChunkProfile::Multiple { .. })
    }

    /// Text used in chart titles for single chunk runs, e.g. `8KB chunks`.
    pub fn title_suffix(&self) -> Option<String> {
        match self {
            ChunkProfile::Single { chunk_size_kb } => Some(format!("{chunk_size_kb}KB chunks")),
            ChunkProfile::Multiple { .. } => None,
        }
    }
}
