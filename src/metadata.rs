use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{HuffmanError, Result};

pub fn file_size(path: &Path) -> Result<u64> {
    fs::metadata(path)
        .map(|meta| meta.len())
        .map_err(|source| HuffmanError::Stat {
            path: path.to_path_buf(),
            source,
        })
}

/// Sizes gathered after a compression run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressionReport {
    pub original_size: u64,
    pub compressed_size: u64,
    pub bit_count: u64,
    pub distinct_symbols: usize,
}

impl CompressionReport {
    /// `(original - compressed) / original * 100`. Negative when the output grew.
    pub fn reduction_percent(&self) -> Result<f64> {
        if self.original_size == 0 {
            return Err(HuffmanError::EmptyInput);
        }
        let original = self.original_size as f64;
        let compressed = self.compressed_size as f64;
        Ok((original - compressed) / original * 100.0)
    }
}

impl fmt::Display for CompressionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Original File Size: {} bytes", self.original_size)?;
        writeln!(f, "Compressed File Size: {} bytes", self.compressed_size)?;
        match self.reduction_percent() {
            Ok(pct) => write!(f, "Compression Reduction: {:.2}%", pct),
            Err(_) => write!(f, "Compression Reduction: n/a"),
        }
    }
}
