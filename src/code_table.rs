use std::fmt;

use bitvec::prelude::*;
use tracing::{debug, trace};

use crate::error::{HuffmanError, Result};
use crate::hufftree::{HuffNode, HuffmanTree};

/// Longest code any tree over 256 symbols can produce.
pub const MAX_CODE_LEN: usize = 255;

/// A single codeword, most significant (first emitted) bit first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Code {
    bits: BitVec<u8, Msb0>,
}

impl Code {
    pub fn new() -> Self {
        Code {
            bits: BitVec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().by_vals()
    }

    pub fn starts_with(&self, other: &Code) -> bool {
        self.bits.starts_with(other.bits.as_bitslice())
    }

    fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    fn pop(&mut self) {
        self.bits.pop();
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.bits() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl From<&str> for Code {
    fn from(s: &str) -> Self {
        let mut code = Code::new();
        for c in s.chars() {
            code.push(c == '1');
        }
        code
    }
}

/// Byte value -> codeword, for every byte that appears in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: Vec<Option<Code>>,
}

impl CodeTable {
    /// Walks the tree assigning `0` to left branches and `1` to right ones.
    ///
    /// A tree that is a single leaf has no branches, so its byte gets the
    /// one-bit code `0` instead of an empty one.
    pub fn from_tree(tree: &HuffmanTree) -> Result<Self> {
        let mut table = CodeTable {
            codes: vec![None; 256],
        };

        match &tree.root {
            HuffNode::Leaf { byte, .. } => {
                table.codes[*byte as usize] = Some(Code::from("0"));
            }
            root => {
                let mut path = Code::new();
                table.generate(root, &mut path)?;
            }
        }

        debug!(
            symbols = table.len(),
            max_code_len = table.max_code_len(),
            "generated code table"
        );
        for (byte, code) in table.iter() {
            trace!(byte, %code, "code");
        }
        Ok(table)
    }

    fn generate(&mut self, node: &HuffNode, path: &mut Code) -> Result<()> {
        match node {
            HuffNode::Leaf { byte, .. } => {
                self.codes[*byte as usize] = Some(path.clone());
            }
            HuffNode::Internal { left, right, .. } => {
                if path.len() >= MAX_CODE_LEN {
                    return Err(HuffmanError::CodeTooLong {
                        length: path.len() + 1,
                        max: MAX_CODE_LEN,
                    });
                }
                path.push(false);
                self.generate(left, path)?;
                path.pop();

                path.push(true);
                self.generate(right, path)?;
                path.pop();
            }
        }
        Ok(())
    }

    pub fn get(&self, byte: u8) -> Option<&Code> {
        self.codes[byte as usize].as_ref()
    }

    /// Number of bytes that have a code.
    pub fn len(&self) -> usize {
        self.codes.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(byte, code)` pairs in ascending byte order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Code)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(byte, code)| code.as_ref().map(|c| (byte as u8, c)))
    }

    pub fn max_code_len(&self) -> usize {
        self.iter().map(|(_, c)| c.len()).max().unwrap_or(0)
    }

    pub fn is_prefix_free(&self) -> bool {
        let codes: Vec<&Code> = self.iter().map(|(_, c)| c).collect();
        codes.iter().enumerate().all(|(i, a)| {
            codes
                .iter()
                .enumerate()
                .all(|(j, b)| i == j || !b.starts_with(a))
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_two_symbol_codes() {
        let tree = HuffmanTree::from_bytes(b"aaab").unwrap();
        let table = CodeTable::from_tree(&tree).unwrap();
        assert_eq!(table.get(b'b').unwrap().to_string(), "0");
        assert_eq!(table.get(b'a').unwrap().to_string(), "1");
        assert_eq!(table.get(b'c'), None);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_single_symbol_gets_one_bit() {
        let tree = HuffmanTree::from_bytes(b"aaaa").unwrap();
        let table = CodeTable::from_tree(&tree).unwrap();
        let code = table.get(b'a').unwrap();
        assert_eq!(code.len(), 1);
        assert_eq!(code.to_string(), "0");
    }

    #[test]
    fn test_prefix_free_and_bounded() {
        let data = b"the quick brown fox jumps over the lazy dog, again and again";
        let tree = HuffmanTree::from_bytes(data).unwrap();
        let table = CodeTable::from_tree(&tree).unwrap();
        assert!(table.is_prefix_free());
        assert_eq!(table.max_code_len(), tree.depth());
        let distinct = table.len();
        for (_, code) in table.iter() {
            assert!(code.len() >= 1);
            assert!(code.len() <= distinct - 1);
        }
    }

    #[test]
    fn test_frequent_bytes_get_shorter_codes() {
        let mut data = vec![b'e'; 100];
        data.extend_from_slice(b"xyz");
        let table = CodeTable::from_tree(&HuffmanTree::from_bytes(&data).unwrap()).unwrap();
        let e = table.get(b'e').unwrap().len();
        for b in [b'x', b'y', b'z'] {
            assert!(table.get(b).unwrap().len() >= e);
        }
    }

    #[test]
    fn test_all_bytes_equal_weight() {
        let data: Vec<u8> = (0..=255u8).collect();
        let table = CodeTable::from_tree(&HuffmanTree::from_bytes(&data).unwrap()).unwrap();
        assert_eq!(table.len(), 256);
        assert!(table.iter().all(|(_, c)| c.len() == 8));
    }

    /// Right-leaning chain with `merges` internal nodes; the deepest leaves
    /// sit `merges` branches below the root.
    fn chain_tree(merges: usize) -> HuffmanTree {
        let mut root = HuffNode::new(0, 1);
        for i in 1..=merges {
            root = HuffNode::merge(HuffNode::new((i % 256) as u8, 1), root);
        }
        HuffmanTree { root }
    }

    #[test]
    fn test_deepest_allowed_chain() {
        let tree = chain_tree(MAX_CODE_LEN);
        assert_eq!(tree.depth(), MAX_CODE_LEN);
        let table = CodeTable::from_tree(&tree).unwrap();
        assert_eq!(table.max_code_len(), MAX_CODE_LEN);
        assert_eq!(table.len(), 256);
        assert!(table.is_prefix_free());
    }

    #[test]
    fn test_chain_past_limit_is_error() {
        let tree = chain_tree(MAX_CODE_LEN + 1);
        let err = CodeTable::from_tree(&tree).unwrap_err();
        assert!(matches!(
            err,
            HuffmanError::CodeTooLong {
                length: 256,
                max: 255
            }
        ));
    }

    #[test]
    fn test_prefix_check_detects_overlap() {
        let mut table = CodeTable {
            codes: vec![None; 256],
        };
        table.codes[0] = Some(Code::from("0"));
        table.codes[1] = Some(Code::from("01"));
        assert!(!table.is_prefix_free());
    }

    #[test]
    fn test_code_display_roundtrip() {
        let code = Code::from("10110");
        assert_eq!(code.to_string(), "10110");
        assert_eq!(code.bits().collect::<Vec<_>>(), vec![true, false, true, true, false]);
    }
}
