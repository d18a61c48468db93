use std::io::{self, Read};

use tracing::debug;

/// Occurrence count for every possible byte value, indexed by the byte itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; 256],
}

impl FrequencyTable {
    pub fn new() -> Self {
        FrequencyTable { counts: [0; 256] }
    }

    /// Reads `reader` to the end, counting each byte.
    pub fn count<R: Read>(mut reader: R) -> io::Result<Self> {
        let mut table = FrequencyTable::new();
        let mut buf = [0u8; 8192];
        loop {
            let n = match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            table.add(&buf[..n]);
        }
        debug!(
            total = table.total(),
            distinct = table.distinct(),
            "counted byte frequencies"
        );
        Ok(table)
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut table = FrequencyTable::new();
        table.add(bytes);
        table
    }

    fn add(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.counts[byte as usize] += 1;
        }
    }

    pub fn get(&self, byte: u8) -> u64 {
        self.counts[byte as usize]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Bytes with a non-zero count, in ascending byte order.
    pub fn present(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(byte, &count)| (byte as u8, count))
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_counts_bytes() {
        let table = FrequencyTable::from_bytes(b"aaab");
        assert_eq!(table.get(b'a'), 3);
        assert_eq!(table.get(b'b'), 1);
        assert_eq!(table.get(b'c'), 0);
        assert_eq!(table.total(), 4);
        assert_eq!(table.distinct(), 2);
    }

    #[test]
    fn test_high_bytes_are_not_sign_extended() {
        let table = FrequencyTable::from_bytes(&[0xff, 0x80, 0xff]);
        assert_eq!(table.get(0xff), 2);
        assert_eq!(table.get(0x80), 1);
        assert_eq!(table.present().collect::<Vec<_>>(), vec![(0x80, 1), (0xff, 2)]);
    }

    #[test]
    fn test_count_from_reader_matches_slice() {
        let data: Vec<u8> = (0..50_000u32).map(|i| (i * 7 % 251) as u8).collect();
        let from_reader = FrequencyTable::count(Cursor::new(&data)).unwrap();
        assert_eq!(from_reader, FrequencyTable::from_bytes(&data));
        assert_eq!(from_reader.total(), data.len() as u64);
    }

    #[test]
    fn test_empty() {
        let table = FrequencyTable::count(Cursor::new(Vec::new())).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.present().count(), 0);
    }
}
