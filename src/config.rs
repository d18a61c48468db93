use std::path::PathBuf;

pub const DEFAULT_BIN_OUTPUT: &str = "compressed.bin";
pub const DEFAULT_TEXT_OUTPUT: &str = "compressed.txt";

/// Where a compression run writes its artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressConfig {
    /// Packed bitstream.
    pub bin_output: PathBuf,
    /// Same bitstream as ASCII `0`/`1`, skipped when `None`.
    pub text_output: Option<PathBuf>,
}

impl Default for CompressConfig {
    fn default() -> Self {
        CompressConfig {
            bin_output: PathBuf::from(DEFAULT_BIN_OUTPUT),
            text_output: Some(PathBuf::from(DEFAULT_TEXT_OUTPUT)),
        }
    }
}
