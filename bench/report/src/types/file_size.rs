use super::row::{BYTES_PER_KB, BYTES_PER_MB};

pub const BYTES_PER_GB: u64 = 1024 * BYTES_PER_MB;

/// File sizes compared between two benchmark runs: 1MB, 10MB, 100MB and 1GB.
pub const DEFAULT_COMPARISON_SIZES: [u64; 4] = [
    BYTES_PER_MB,
    10 * BYTES_PER_MB,
    100 * BYTES_PER_MB,
    BYTES_PER_GB,
];

/// Short label for a payload size, truncated to the largest whole unit.
pub fn size_label(size_bytes: u64) -> String {
    if size_bytes >= BYTES_PER_GB && size_bytes % BYTES_PER_GB == 0 {
        format!("{}GB", size_bytes / BYTES_PER_GB)
    } else if size_bytes >= BYTES_PER_MB {
        format!("{}MB", size_bytes / BYTES_PER_MB)
    } else if size_bytes >= BYTES_PER_KB {
        format!("{}KB", size_bytes / BYTES_PER_KB)
    } else {
        format!("{size_bytes}B")
    }
}
