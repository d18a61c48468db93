//! # huffpack
//!
//! Static Huffman compression of a single byte stream.
//!
//! The input is counted, a Huffman tree is built from the byte frequencies,
//! each byte gets a prefix-free code, and the input is re-read and written
//! out as a packed bitstream (zero-padded to a whole byte).
//!
//! ```rust
//! use huffpack::pipeline::compress_bytes;
//!
//! let (table, packed, summary) = compress_bytes(b"aaab")?;
//! assert_eq!(table.get(b'a').unwrap().to_string(), "1");
//! assert_eq!(packed, vec![0xE0]);
//! assert_eq!(summary.bit_count, 4);
//! # Ok::<(), huffpack::HuffmanError>(())
//! ```

pub mod code_table;
pub mod config;
pub mod encoder;
pub mod error;
pub mod frequency;
pub mod hufftree;
pub mod metadata;
pub mod pipeline;

// Internal modules - not part of public API
mod bit_writer;
mod min_heap;

pub use bit_writer::BitWriter;
pub use code_table::{Code, CodeTable, MAX_CODE_LEN};
pub use config::CompressConfig;
pub use encoder::{EncodeSummary, HuffmanEncoder};
pub use error::HuffmanError;
pub use frequency::FrequencyTable;
pub use hufftree::{HuffNode, HuffmanTree};
pub use metadata::CompressionReport;
pub use min_heap::{HeapErr, MinHeap, Weighted};
pub use pipeline::{compress_bytes, compress_file};
