use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::min_heap::HeapErr;

#[derive(Debug, Error)]
pub enum HuffmanError {
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read size of {}: {source}", .path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("input is empty, no Huffman tree can be built")]
    EmptyInput,

    #[error("code length {length} exceeds the {max}-bit maximum")]
    CodeTooLong { length: usize, max: usize },

    #[error("byte {0:#04x} has no code in the table")]
    MissingCode(u8),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Heap(#[from] HeapErr),
}

pub type Result<T> = std::result::Result<T, HuffmanError>;
