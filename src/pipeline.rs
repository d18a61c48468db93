use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::{info, instrument};

use crate::code_table::CodeTable;
use crate::config::CompressConfig;
use crate::encoder::{EncodeSummary, HuffmanEncoder};
use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;
use crate::hufftree::HuffmanTree;
use crate::metadata::{file_size, CompressionReport};

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| HuffmanError::Open {
        path: path.to_path_buf(),
        source,
    })
}

fn create(path: &Path) -> Result<File> {
    File::create(path).map_err(|source| HuffmanError::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Refuses an output path that names the input file, since creating the
/// output would truncate the input before it is re-read.
fn check_distinct(input: &Path, output: &Path) -> Result<()> {
    let input_path = input.canonicalize().map_err(|source| HuffmanError::Open {
        path: input.to_path_buf(),
        source,
    })?;
    match output.canonicalize() {
        Ok(output_path) if output_path == input_path => Err(HuffmanError::Open {
            path: output.to_path_buf(),
            source: io::Error::new(
                io::ErrorKind::InvalidInput,
                "output path is the same file as the input",
            ),
        }),
        _ => Ok(()),
    }
}

/// Compresses `input` into the files named by `config`.
///
/// The input is read twice: once to count frequencies and once to encode.
#[instrument(skip_all, fields(input = %input.display()))]
pub fn compress_file(input: &Path, config: &CompressConfig) -> Result<CompressionReport> {
    check_distinct(input, &config.bin_output)?;
    if let Some(text_output) = &config.text_output {
        check_distinct(input, text_output)?;
    }

    let frequencies = FrequencyTable::count(open(input)?)?;
    let tree = HuffmanTree::from_frequencies(&frequencies)?;
    let table = CodeTable::from_tree(&tree)?;
    drop(tree);
    let encoder = HuffmanEncoder::new(table);

    let source = open(input)?;
    let bin = BufWriter::new(create(&config.bin_output)?);
    let mut text = match &config.text_output {
        Some(path) => Some(BufWriter::new(create(path)?)),
        None => None,
    };
    let summary = encoder.encode(
        source,
        bin,
        text.as_mut().map(|w| w as &mut dyn Write),
    )?;

    let report = CompressionReport {
        original_size: file_size(input)?,
        compressed_size: file_size(&config.bin_output)?,
        bit_count: summary.bit_count,
        distinct_symbols: frequencies.distinct(),
    };
    info!(
        original = report.original_size,
        compressed = report.compressed_size,
        bits = report.bit_count,
        "compression finished"
    );
    Ok(report)
}

/// In-memory variant of [`compress_file`]; returns the table alongside the
/// packed bytes since nothing else records it.
pub fn compress_bytes(data: &[u8]) -> Result<(CodeTable, Vec<u8>, EncodeSummary)> {
    let frequencies = FrequencyTable::from_bytes(data);
    let tree = HuffmanTree::from_frequencies(&frequencies)?;
    let encoder = HuffmanEncoder::new(CodeTable::from_tree(&tree)?);
    let (packed, summary) = encoder.encode_bytes(data)?;
    Ok((encoder.into_table(), packed, summary))
}
