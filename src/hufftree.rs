use std::fmt::Write as _;

use tracing::{debug, trace};

use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;
use crate::min_heap::{MinHeap, Weighted};

#[derive(Debug, Clone)]
pub struct HuffmanTree {
    pub root: HuffNode,
}

impl HuffmanTree {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        HuffmanTree::from_frequencies(&FrequencyTable::from_bytes(bytes))
    }

    /// Builds the tree by repeatedly merging the two lightest nodes.
    ///
    /// Leaves enter the heap in ascending byte order, and the first node
    /// extracted in each round becomes the left child, so identical tables
    /// always produce identical trees.
    pub fn from_frequencies(frequencies: &FrequencyTable) -> Result<Self> {
        let mut heap = MinHeap::with_capacity(frequencies.distinct());
        for (byte, count) in frequencies.present() {
            heap.insert(HuffNode::new(byte, count))?;
        }
        if heap.is_empty() {
            return Err(HuffmanError::EmptyInput);
        }

        while heap.heap_size() > 1 {
            let x = heap.extract_min()?;
            let y = heap.extract_min()?;
            heap.insert(HuffNode::merge(x, y))?;
        }
        let root = heap.extract_min()?;

        let tree = HuffmanTree { root };
        debug!(
            leaves = tree.leaf_count(),
            depth = tree.depth(),
            weight = tree.root.weight(),
            "built huffman tree"
        );
        trace!("\n{}", tree.render());
        Ok(tree)
    }

    /// Length of the longest root-to-leaf path. A lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Indented dump of the tree structure, one node per line.
    pub fn render(&self) -> String {
        let mut out = String::from("Huffman Tree Structure:\n");
        render_node(&self.root, 0, "root", &mut out);
        out
    }
}

fn render_node(node: &HuffNode, depth: usize, label: &str, out: &mut String) {
    let indent = "  ".repeat(depth);
    match node {
        HuffNode::Leaf { byte, weight } => {
            let _ = writeln!(
                out,
                "{}{}-> Leaf: {:?} ({}) [weight: {}]",
                indent, label, *byte as char, byte, weight
            );
        }
        HuffNode::Internal {
            weight,
            left,
            right,
        } => {
            let _ = writeln!(out, "{}{}-> Internal [weight: {}]", indent, label, weight);
            render_node(left, depth + 1, "L", out);
            render_node(right, depth + 1, "R", out);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffNode {
    Leaf {
        weight: u64,
        byte: u8,
    },
    Internal {
        weight: u64,
        left: Box<HuffNode>,
        right: Box<HuffNode>,
    },
}

impl HuffNode {
    pub fn new(b: u8, f: u64) -> Self {
        HuffNode::Leaf { weight: f, byte: b }
    }

    pub fn weight(&self) -> u64 {
        match self {
            HuffNode::Leaf { weight, .. } => *weight,
            HuffNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn merge(a: Self, b: Self) -> Self {
        let weight = a.weight() + b.weight();
        HuffNode::Internal {
            weight,
            left: Box::new(a),
            right: Box::new(b),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffNode::Leaf { .. })
    }

    fn depth(&self) -> usize {
        match self {
            HuffNode::Leaf { .. } => 0,
            HuffNode::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    fn leaf_count(&self) -> usize {
        match self {
            HuffNode::Leaf { .. } => 1,
            HuffNode::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }
}

impl Weighted for HuffNode {
    fn weight(&self) -> u64 {
        HuffNode::weight(self)
    }
}
