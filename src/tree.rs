//! Huffman tree construction.
//!
//! Nodes are owned bottom-up: every internal node holds its two children in
//! boxes and no node points back at its parent.
//!
//! ## Tie-break
//!
//! The merge queue is keyed by `(weight, sequence)`. Leaves are seeded in
//! ascending symbol order with sequence `0..n`, and every merged node takes the
//! next sequence number. Among equal weights the lower sequence is drawn first,
//! so identical input always yields an identical tree. The first node drawn
//! becomes the left (`0`) child and the second the right (`1`) child.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

use tracing::debug;

use crate::frequency::FrequencyTable;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum HuffNode {
    Leaf {
        symbol: char,
        weight: usize,
    },
    Internal {
        weight: usize,
        left: Box<HuffNode>,
        right: Box<HuffNode>,
    },
}

impl HuffNode {
    pub fn leaf(symbol: char, weight: usize) -> Self {
        HuffNode::Leaf { symbol, weight }
    }

    /// Join two subtrees; `left` is the one drawn first from the queue.
    pub fn merge(left: Self, right: Self) -> Self {
        HuffNode::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn weight(&self) -> usize {
        match self {
            HuffNode::Leaf { weight, .. } => *weight,
            HuffNode::Internal { weight, .. } => *weight,
        }
    }

    /// The symbol held by a leaf, `None` for internal nodes.
    pub fn symbol(&self) -> Option<char> {
        match self {
            HuffNode::Leaf { symbol, .. } => Some(*symbol),
            HuffNode::Internal { .. } => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffNode::Leaf { .. })
    }

    /// Follow one edge: `false` is the left (`0`) child, `true` the right
    /// (`1`) child. Leaves have no children.
    pub fn child(&self, bit: bool) -> Option<&HuffNode> {
        match self {
            HuffNode::Leaf { .. } => None,
            HuffNode::Internal { left, right, .. } => Some(if bit { right } else { left }),
        }
    }

    fn count(&self, leaves: &mut usize, internals: &mut usize) {
        match self {
            HuffNode::Leaf { .. } => *leaves += 1,
            HuffNode::Internal { left, right, .. } => {
                *internals += 1;
                left.count(leaves, internals);
                right.count(leaves, internals);
            }
        }
    }

    fn collect_leaves(&self, out: &mut Vec<(char, usize)>) {
        match self {
            HuffNode::Leaf { symbol, weight } => out.push((*symbol, *weight)),
            HuffNode::Internal { left, right, .. } => {
                left.collect_leaves(out);
                right.collect_leaves(out);
            }
        }
    }

    fn render(&self, f: &mut fmt::Formatter<'_>, depth: usize, label: &str) -> fmt::Result {
        let indent = "  ".repeat(depth);
        match self {
            HuffNode::Leaf { symbol, weight } => {
                writeln!(f, "{indent}{label} -> {symbol:?} [weight {weight}]")
            }
            HuffNode::Internal {
                weight,
                left,
                right,
            } => {
                writeln!(f, "{indent}{label} -> internal [weight {weight}]")?;
                left.render(f, depth + 1, "0")?;
                right.render(f, depth + 1, "1")
            }
        }
    }
}

/// Queue entry for the greedy merge.
#[derive(Debug)]
struct Pending {
    sequence: usize,
    node: HuffNode,
}

impl Pending {
    fn key(&self) -> (usize, usize) {
        (self.node.weight(), self.sequence)
    }
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Pending {}

impl Ord for Pending {
    // reversed so the max-heap pops the lowest (weight, sequence)
    fn cmp(&self, other: &Self) -> Ordering {
        other.key().cmp(&self.key())
    }
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A Huffman tree; `root` is `None` for an empty alphabet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HuffmanTree {
    root: Option<HuffNode>,
}

impl HuffmanTree {
    /// Build the tree by repeatedly merging the two lightest nodes.
    pub fn build(frequencies: &FrequencyTable) -> Self {
        let mut queue = BinaryHeap::with_capacity(frequencies.len());
        let mut sequence = 0;
        for (symbol, count) in frequencies.iter() {
            queue.push(Pending {
                sequence,
                node: HuffNode::leaf(symbol, count),
            });
            sequence += 1;
        }

        let root = loop {
            let Some(left) = queue.pop() else {
                break None;
            };
            let Some(right) = queue.pop() else {
                break Some(left.node);
            };
            queue.push(Pending {
                sequence,
                node: HuffNode::merge(left.node, right.node),
            });
            sequence += 1;
        };

        let tree = HuffmanTree { root };
        debug!(
            symbols = frequencies.len(),
            weight = tree.weight(),
            "built huffman tree"
        );
        tree
    }

    pub fn root(&self) -> Option<&HuffNode> {
        self.root.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Root weight, i.e. the length of the constructing text.
    pub fn weight(&self) -> usize {
        self.root.as_ref().map_or(0, HuffNode::weight)
    }

    /// `(leaves, internal nodes)`
    pub fn node_counts(&self) -> (usize, usize) {
        let (mut leaves, mut internals) = (0, 0);
        if let Some(root) = &self.root {
            root.count(&mut leaves, &mut internals);
        }
        (leaves, internals)
    }

    /// Leaves in left-to-right order with their weights.
    pub fn leaves(&self) -> Vec<(char, usize)> {
        let mut out = Vec::new();
        if let Some(root) = &self.root {
            root.collect_leaves(&mut out);
        }
        out
    }
}

impl fmt::Display for HuffmanTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.root {
            Some(root) => root.render(f, 0, "root"),
            None => writeln!(f, "root -> (empty)"),
        }
    }
}
