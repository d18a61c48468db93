use std::io::{self, Read, Write};

use tracing::debug;

use crate::bit_writer::BitWriter;
use crate::code_table::CodeTable;
use crate::error::{HuffmanError, Result};
use crate::hufftree::HuffmanTree;

/// What a single encoding pass produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeSummary {
    pub input_bytes: u64,
    /// Code bits emitted, excluding the zero padding of the last byte.
    pub bit_count: u64,
    pub output_bytes: u64,
}

impl EncodeSummary {
    /// Padding bits in the final output byte, 0..=7.
    pub fn padding_bits(&self) -> u64 {
        self.output_bytes * 8 - self.bit_count
    }
}

pub struct HuffmanEncoder {
    table: CodeTable,
}

impl HuffmanEncoder {
    pub fn new(table: CodeTable) -> Self {
        HuffmanEncoder { table }
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let tree = HuffmanTree::from_bytes(data)?;
        Ok(Self::new(CodeTable::from_tree(&tree)?))
    }

    pub fn table(&self) -> &CodeTable {
        &self.table
    }

    pub fn into_table(self) -> CodeTable {
        self.table
    }

    /// Streams `input` through the code table into `bin`, and optionally
    /// mirrors every code bit as an ASCII `0`/`1` into `text`.
    ///
    /// Output already written is left in place if an error occurs part way.
    pub fn encode<R: Read, W: Write>(
        &self,
        mut input: R,
        bin: W,
        mut text: Option<&mut dyn Write>,
    ) -> Result<EncodeSummary> {
        let mut writer = BitWriter::new(bin);
        let mut buf = [0u8; 8192];
        let mut input_bytes = 0u64;

        loop {
            let n = match input.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            for &byte in &buf[..n] {
                let code = self.table.get(byte).ok_or(HuffmanError::MissingCode(byte))?;
                writer.push_code(code)?;
                if let Some(text) = text.as_mut() {
                    for bit in code.bits() {
                        text.write_all(if bit { b"1" } else { b"0" })?;
                    }
                }
            }
            input_bytes += n as u64;
        }

        let bit_count = writer.bits_written();
        let (_, output_bytes) = writer.finish()?;
        if let Some(text) = text.as_mut() {
            text.flush()?;
        }

        let summary = EncodeSummary {
            input_bytes,
            bit_count,
            output_bytes,
        };
        debug!(?summary, "encoded input");
        Ok(summary)
    }

    pub fn encode_bytes(&self, data: &[u8]) -> Result<(Vec<u8>, EncodeSummary)> {
        let mut out = Vec::new();
        let summary = self.encode(data, &mut out, None)?;
        Ok((out, summary))
    }
}
