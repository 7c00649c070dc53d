//! Huffman tree construction.
//!
//! The tree is stored as an arena: a flat `Vec` of nodes addressed by
//! index, children always at lower indices than their parent. This removes
//! ownership ambiguity from the recursive structure and makes serialization
//! and traversal trivial.
//!
//! Construction is the classic greedy merge: repeatedly take the two
//! lowest-weight roots from the forest and join them under a fresh internal
//! node. Ties are broken by creation order (leaves enter in ascending
//! symbol order, merged nodes after), so the same frequency table always
//! produces a structurally identical tree.

use huffkit_core::{Error, Result};

use crate::frequency::FrequencyTable;

/// Index of a node within the tree arena.
pub type NodeId = usize;

/// A leaf carrying a symbol, or an internal node joining two subtrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Terminal node holding one input symbol.
    Leaf { symbol: u8 },
    /// Strictly binary join of two subtrees.
    Internal { left: NodeId, right: NodeId },
}

/// One arena node with its subtree weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    /// Sum of leaf frequencies in this subtree.
    pub weight: u64,
    pub kind: NodeKind,
}

/// An immutable Huffman code tree.
///
/// Every internal node has exactly two children. The one exception to
/// "leaves correspond to distinct symbols at depth >= 1" is a single-symbol
/// input, where the root itself is a bare leaf.
///
/// Equality is structural: two trees are equal when shape, symbols, and
/// weights match from the roots down. The arena layout is a storage
/// detail — deserialization rebuilds nodes in post-order, which need not
/// match construction order — so it does not participate in comparison.
#[derive(Debug, Clone)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl PartialEq for HuffmanTree {
    fn eq(&self, other: &Self) -> bool {
        fn subtree_eq(a: &HuffmanTree, a_id: NodeId, b: &HuffmanTree, b_id: NodeId) -> bool {
            let (an, bn) = (a.node(a_id), b.node(b_id));
            if an.weight != bn.weight {
                return false;
            }
            match (an.kind, bn.kind) {
                (NodeKind::Leaf { symbol: s }, NodeKind::Leaf { symbol: t }) => s == t,
                (
                    NodeKind::Internal { left: al, right: ar },
                    NodeKind::Internal { left: bl, right: br },
                ) => subtree_eq(a, al, b, bl) && subtree_eq(a, ar, b, br),
                _ => false,
            }
        }
        subtree_eq(self, self.root, other, other.root)
    }
}

impl Eq for HuffmanTree {}

impl HuffmanTree {
    /// Build a tree from a frequency table by greedy two-minimum merging.
    ///
    /// Fails with [`Error::EmptyInput`] when the table has no entries.
    pub fn build(table: &FrequencyTable) -> Result<Self> {
        let mut nodes: Vec<Node> = table
            .iter()
            .map(|(symbol, count)| Node {
                weight: count,
                kind: NodeKind::Leaf { symbol },
            })
            .collect();

        if nodes.is_empty() {
            return Err(Error::EmptyInput);
        }

        // Forest of current roots, kept in creation order so that the
        // left-to-right minimum scan breaks weight ties toward the
        // earliest-created node.
        let mut forest: Vec<NodeId> = (0..nodes.len()).collect();

        while forest.len() > 1 {
            let first = take_min(&mut forest, &nodes);
            let second = take_min(&mut forest, &nodes);

            let merged = Node {
                weight: nodes[first].weight + nodes[second].weight,
                kind: NodeKind::Internal {
                    left: first,
                    right: second,
                },
            };
            nodes.push(merged);
            forest.push(nodes.len() - 1);
        }

        let root = forest[0];
        Ok(Self { nodes, root })
    }

    /// Reassemble a tree from raw arena parts, validating structure.
    ///
    /// Used by tree deserialization. Children must sit at lower indices
    /// than their parent (which also rules out cycles).
    pub(crate) fn from_parts(nodes: Vec<Node>, root: NodeId) -> Result<Self> {
        if nodes.is_empty() {
            return Err(Error::corrupt_tree("tree has no nodes"));
        }
        if root >= nodes.len() {
            return Err(Error::corrupt_tree(format!(
                "root index {} out of range ({} nodes)",
                root,
                nodes.len()
            )));
        }
        for (id, node) in nodes.iter().enumerate() {
            if let NodeKind::Internal { left, right } = node.kind {
                if left >= id || right >= id {
                    return Err(Error::corrupt_tree(format!(
                        "node {id} references children {left}/{right} at or above itself"
                    )));
                }
            }
        }
        Ok(Self { nodes, root })
    }

    /// Root node index.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Access a node by index.
    ///
    /// Indices obtained from this tree are always valid.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Total node count (leaves plus internal nodes).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: both construction paths reject an empty arena.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of leaves, which equals the number of distinct symbols.
    pub fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| matches!(node.kind, NodeKind::Leaf { .. }))
            .count()
    }

    /// True for the single-symbol degenerate tree.
    pub fn root_is_leaf(&self) -> bool {
        matches!(self.nodes[self.root].kind, NodeKind::Leaf { .. })
    }
}

/// Remove and return the lowest-weight root from the forest.
///
/// Scans left to right with a strict comparison, so among equal weights the
/// earliest-created node wins.
fn take_min(forest: &mut Vec<NodeId>, nodes: &[Node]) -> NodeId {
    let mut min_pos = 0;
    for (pos, &id) in forest.iter().enumerate().skip(1) {
        if nodes[id].weight < nodes[forest[min_pos]].weight {
            min_pos = pos;
        }
    }
    forest.remove(min_pos)
}
