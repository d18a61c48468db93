use std::io::{self, Write};

use crate::code_table::Code;

/// Packs bits MSB-first into bytes, emitting each byte as soon as it fills.
pub struct BitWriter<W: Write> {
    out: W,
    buffer: u8,
    bit_count: u8,
    bits_written: u64,
    bytes_written: u64,
}

impl<W: Write> BitWriter<W> {
    pub fn new(out: W) -> Self {
        BitWriter {
            out,
            buffer: 0,
            bit_count: 0,
            bits_written: 0,
            bytes_written: 0,
        }
    }

    pub fn push_bit(&mut self, bit: bool) -> io::Result<()> {
        self.buffer = (self.buffer << 1) | bit as u8;
        self.bit_count += 1;
        self.bits_written += 1;

        if self.bit_count == 8 {
            self.out.write_all(&[self.buffer])?;
            self.bytes_written += 1;
            self.buffer = 0;
            self.bit_count = 0;
        }
        Ok(())
    }

    pub fn push_code(&mut self, code: &Code) -> io::Result<()> {
        for bit in code.bits() {
            self.push_bit(bit)?;
        }
        Ok(())
    }

    /// Bits pushed so far, not counting padding.
    pub fn bits_written(&self) -> u64 {
        self.bits_written
    }

    /// Whole bytes handed to the underlying writer so far.
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Bits held in the accumulator, always 0..=7.
    pub fn pending_bits(&self) -> u8 {
        self.bit_count
    }

    /// Zero-pads and emits any partial byte, flushes, and returns the writer.
    pub fn finish(mut self) -> io::Result<(W, u64)> {
        if self.bit_count > 0 {
            let padded = self.buffer << (8 - self.bit_count);
            self.out.write_all(&[padded])?;
            self.bytes_written += 1;
            self.buffer = 0;
            self.bit_count = 0;
        }
        self.out.flush()?;
        Ok((self.out, self.bytes_written))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_full_byte_is_emitted_immediately() {
        let mut writer = BitWriter::new(Vec::new());
        writer.push_code(&Code::from("1010101")).unwrap();
        assert_eq!(writer.bytes_written(), 0);
        assert_eq!(writer.pending_bits(), 7);
        writer.push_bit(true).unwrap();
        assert_eq!(writer.bytes_written(), 1);
        assert_eq!(writer.pending_bits(), 0);
        let (out, n) = writer.finish().unwrap();
        assert_eq!(out, vec![0b1010_1011]);
        assert_eq!(n, 1);
    }

    #[test]
    fn test_partial_byte_is_zero_padded() {
        let mut writer = BitWriter::new(Vec::new());
        writer.push_code(&Code::from("1110")).unwrap();
        assert_eq!(writer.bits_written(), 4);
        let (out, n) = writer.finish().unwrap();
        assert_eq!(out, vec![0xE0]);
        assert_eq!(n, 1);
    }

    #[test]
    fn test_spans_bytes() {
        let mut writer = BitWriter::new(Vec::new());
        writer.push_code(&Code::from("111111111")).unwrap();
        let (out, _) = writer.finish().unwrap();
        assert_eq!(out, vec![0xFF, 0x80]);
    }

    #[test]
    fn test_nothing_written() {
        let writer = BitWriter::new(Vec::new());
        let (out, n) = writer.finish().unwrap();
        assert!(out.is_empty());
        assert_eq!(n, 0);
    }
}
