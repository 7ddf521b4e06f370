use serde::{Deserialize, Serialize};

pub const BYTES_PER_KB: u64 = 1024;
pub const BYTES_PER_MB: u64 = 1024 * 1024;

/// One measured transfer run as written by the TLS benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, derive_new::new)]
pub struct BenchmarkRow {
    pub file_size_bytes: u64,
    pub throughput_mbps: f64,
    pub duration_ms: f64,
    #[serde(default)]
    pub chunk_size_bytes: Option<u64>,
}

impl BenchmarkRow {
    pub fn file_size_mb(&self) -> f64 {
        self.file_size_bytes as f64 / BYTES_PER_MB as f64
    }

    pub fn chunk_size_kb(&self) -> Option<f64> {
        self.chunk_size_bytes
            .map(|bytes| bytes as f64 / BYTES_PER_KB as f64)
    }

    /// Throughput per KB of chunk size, `None` for rows without a usable chunk size.
    pub fn efficiency(&self) -> Option<f64> {
        self.chunk_size_kb()
            .filter(|kb| *kb > 0.0)
            .map(|kb| self.throughput_mbps / kb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_derive_size_columns() {
        let row = BenchmarkRow::new(10 * BYTES_PER_MB, 800.0, 100.0, Some(16384));
        assert_eq!(row.file_size_mb(), 10.0);
        assert_eq!(row.chunk_size_kb(), Some(16.0));
        assert_eq!(row.efficiency(), Some(50.0));
    }

    #[test]
    fn efficiency_should_be_none_without_chunk_size() {
        let row = BenchmarkRow::new(BYTES_PER_MB, 800.0, 100.0, None);
        assert_eq!(row.chunk_size_kb(), None);
        assert_eq!(row.efficiency(), None);

        let zero_chunk = BenchmarkRow::new(BYTES_PER_MB, 800.0, 100.0, Some(0));
        assert_eq!(zero_chunk.efficiency(), None);
    }
}
