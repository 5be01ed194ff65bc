use std::fmt::Debug;
use std::hash::Hash;

/// Anything that can be coded: a char, a byte, a token id. Symbols are only ever compared for equality
/// and hashed.
pub trait Symbol: Copy + Eq + Hash + Debug {}

impl<T: Copy + Eq + Hash + Debug> Symbol for T {}

/// A node of the huffman tree. Each node owns its children outright.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum Node<S> {
    Leaf {
        weight: u64,
        symbol: S,
    },
    Internal {
        weight: u64,
        left: Box<Node<S>>,
        right: Box<Node<S>>,
    },
}

impl<S: Symbol> Node<S> {
    /// Create a new leaf
    pub fn leaf(symbol: S, weight: u64) -> Self {
        Node::Leaf { weight, symbol }
    }

    /// Join two nodes under a new parent. The parent weighs as much as both children together.
    /// Returns None if that sum does not fit in a u64.
    pub fn merge(left: Node<S>, right: Node<S>) -> Option<Self> {
        let weight = left.weight().checked_add(right.weight())?;
        Some(Node::Internal {
            weight,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Number of leaves below (and including) this node.
    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                Node::Leaf { .. } => count += 1,
                Node::Internal { left, right, .. } => {
                    stack.push(left);
                    stack.push(right);
                }
            }
        }
        count
    }

    /// Length of the longest root-to-leaf path. A lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 0_usize)];
        while let Some((node, depth)) = stack.pop() {
            match node {
                Node::Leaf { .. } => deepest = deepest.max(depth),
                Node::Internal { left, right, .. } => {
                    stack.push((left, depth + 1));
                    stack.push((right, depth + 1));
                }
            }
        }
        deepest
    }
}
