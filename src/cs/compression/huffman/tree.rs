use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::Write;

use super::{FrequencyMap, Symbol};
use crate::cs::compression::Result;
use crate::cs::error::Error;

/// Represents a node in the Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode {
    /// A leaf node contains a symbol and its frequency.
    Leaf { symbol: Symbol, freq: usize },
    /// An internal node with left and right children and combined frequency.
    Internal {
        freq: usize,
        left: Box<HuffmanNode>,
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    /// Returns the frequency of the node.
    pub fn freq(&self) -> usize {
        match self {
            HuffmanNode::Leaf { freq, .. } => *freq,
            HuffmanNode::Internal { freq, .. } => *freq,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }

    /// Join two nodes under a new parent. `None` if the summed weight
    /// does not fit in a `usize`.
    fn merge(left: HuffmanNode, right: HuffmanNode) -> Option<Self> {
        let freq = left.freq().checked_add(right.freq())?;
        Some(HuffmanNode::Internal {
            freq,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    fn leaf_count(&self) -> usize {
        match self {
            HuffmanNode::Leaf { .. } => 1,
            HuffmanNode::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    fn height(&self) -> usize {
        match self {
            HuffmanNode::Leaf { .. } => 0,
            HuffmanNode::Internal { left, right, .. } => 1 + left.height().max(right.height()),
        }
    }
}

/// A queued node tagged with the order it entered the queue.
///
/// `BinaryHeap` is a max-heap, so the ordering is reversed: the lowest
/// frequency wins, and among equal frequencies the earliest entry wins.
#[derive(Debug)]
struct NodeWrapper {
    node: HuffmanNode,
    seq: usize,
}

impl Ord for NodeWrapper {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .node
            .freq()
            .cmp(&self.node.freq())
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeWrapper {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NodeWrapper {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NodeWrapper {}

/// A complete Huffman tree.
///
/// When the input holds a single distinct symbol the root is that lone leaf.
/// It is then treated as the left child of an implicit root, so the symbol's
/// code is `"0"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: HuffmanNode,
}

impl HuffmanTree {
    pub fn root(&self) -> &HuffmanNode {
        &self.root
    }

    /// Total frequency, equal to the length of the input the tree was built from.
    pub fn weight(&self) -> usize {
        self.root.freq()
    }

    /// Number of distinct symbols.
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    pub fn is_single_symbol(&self) -> bool {
        self.root.is_leaf()
    }

    /// Length of the longest code the tree assigns.
    pub fn depth(&self) -> usize {
        self.root.height().max(1)
    }

    /// Indented dump of the structure, one node per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        render_node(&self.root, 0, "root", &mut out);
        out
    }
}

fn render_node(node: &HuffmanNode, depth: usize, label: &str, out: &mut String) {
    let indent = "  ".repeat(depth);
    // Writing into a String cannot fail.
    let _ = match node {
        HuffmanNode::Leaf { symbol, freq } => {
            writeln!(out, "{indent}{label}-> Leaf: '{symbol}' [weight: {freq}]")
        }
        HuffmanNode::Internal { freq, .. } => {
            writeln!(out, "{indent}{label}-> Internal [weight: {freq}]")
        }
    };
    if let HuffmanNode::Internal { left, right, .. } = node {
        render_node(left, depth + 1, "L", out);
        render_node(right, depth + 1, "R", out);
    }
}

/// Build the Huffman tree given a frequency table.
///
/// The two lowest-frequency nodes are merged until one remains; the first
/// node taken becomes the left child. Ties go to the node queued first,
/// leaves being queued in ascending symbol order, so the result is fully
/// determined by the table.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if the frequency table is empty or its
/// counts add up to more than `usize::MAX`.
///
/// # Example
///
/// ```
/// use huffcode::cs::compression::huffman::{build_frequency_table, build_huffman_tree};
///
/// let freq = build_frequency_table("abracadabra");
/// let tree = build_huffman_tree(&freq).unwrap();
/// assert_eq!(tree.weight(), 11);
/// assert_eq!(tree.leaf_count(), 5);
/// ```
pub fn build_huffman_tree(freq_table: &FrequencyMap) -> Result<HuffmanTree> {
    if freq_table.is_empty() {
        return Err(Error::InvalidInput(
            "cannot build a Huffman tree from an empty frequency table".to_string(),
        ));
    }

    let mut heap: BinaryHeap<NodeWrapper> = freq_table
        .iter()
        .enumerate()
        .map(|(seq, (symbol, freq))| NodeWrapper {
            node: HuffmanNode::Leaf { symbol, freq },
            seq,
        })
        .collect();
    let mut next_seq = heap.len();

    loop {
        let Some(left) = heap.pop() else {
            return Err(Error::InvalidInput(
                "priority queue drained without producing a root".to_string(),
            ));
        };
        let Some(right) = heap.pop() else {
            let tree = HuffmanTree { root: left.node };
            log::trace!("Huffman tree:\n{}", tree.render());
            return Ok(tree);
        };
        let node = HuffmanNode::merge(left.node, right.node).ok_or_else(|| {
            Error::InvalidInput("symbol frequencies overflow the total weight".to_string())
        })?;
        heap.push(NodeWrapper {
            node,
            seq: next_seq,
        });
        next_seq += 1;
    }
}
