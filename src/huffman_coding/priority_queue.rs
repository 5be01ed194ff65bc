//! A small ordered queue for building huffman trees.
//!
//! Entries are kept sorted by ascending weight. Insertion is a linear scan, which is fine for alphabets
//! of a few hundred symbols. (A binary heap would be the upgrade for alphabets in the tens of thousands,
//! but it would also need its own tie-break to stay reproducible.)
//!
//! Among entries of equal weight the most recently inserted one sits first and is extracted first.
//! Codebooks are only reproducible between runs because this rule never changes.
//!

use std::collections::VecDeque;

use super::error::HuffmanError;
use super::node::{Node, Symbol};

/// A weight and the node it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueEntry<S> {
    pub weight: u64,
    pub node: Node<S>,
}

#[derive(Debug, Clone)]
pub struct PriorityQueue<S> {
    entries: VecDeque<QueueEntry<S>>,
}

impl<S: Symbol> PriorityQueue<S> {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Place the entry in front of the first entry that weighs the same or more.
    pub fn insert(&mut self, weight: u64, node: Node<S>) {
        let idx = self
            .entries
            .iter()
            .position(|entry| weight <= entry.weight)
            .unwrap_or(self.entries.len());
        self.entries.insert(idx, QueueEntry { weight, node });
    }

    /// Remove and return the lightest entry.
    pub fn extract_min(&mut self) -> Result<QueueEntry<S>, HuffmanError> {
        self.entries.pop_front().ok_or(HuffmanError::EmptyQueue)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Symbol> Default for PriorityQueue<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::PriorityQueue;
    use crate::huffman_coding::error::HuffmanError;
    use crate::huffman_coding::node::Node;

    fn symbol_of(node: &Node<char>) -> char {
        match node {
            Node::Leaf { symbol, .. } => *symbol,
            Node::Internal { .. } => panic!("expected a leaf"),
        }
    }

    #[test]
    fn ascending_order_test() {
        let mut pq = PriorityQueue::new();
        pq.insert(4, Node::leaf('a', 4));
        pq.insert(1, Node::leaf('c', 1));
        pq.insert(9, Node::leaf('z', 9));
        pq.insert(3, Node::leaf('b', 3));
        let order: Vec<char> = (0..4)
            .map(|_| symbol_of(&pq.extract_min().unwrap().node))
            .collect();
        assert_eq!(order, vec!['c', 'b', 'a', 'z']);
        assert!(pq.is_empty());
    }

    #[test]
    fn last_inserted_first_test() {
        let mut pq = PriorityQueue::new();
        pq.insert(2, Node::leaf('x', 2));
        pq.insert(2, Node::leaf('y', 2));
        pq.insert(2, Node::leaf('z', 2));
        assert_eq!(pq.len(), 3);
        assert_eq!(symbol_of(&pq.extract_min().unwrap().node), 'z');
        assert_eq!(symbol_of(&pq.extract_min().unwrap().node), 'y');
        assert_eq!(symbol_of(&pq.extract_min().unwrap().node), 'x');
    }

    #[test]
    fn equal_weight_goes_before_heavier_test() {
        let mut pq = PriorityQueue::new();
        pq.insert(1, Node::leaf('a', 1));
        pq.insert(5, Node::leaf('b', 5));
        pq.insert(5, Node::leaf('c', 5));
        pq.extract_min().unwrap();
        assert_eq!(symbol_of(&pq.extract_min().unwrap().node), 'c');
    }

    #[test]
    fn empty_queue_test() {
        let mut pq: PriorityQueue<u8> = PriorityQueue::default();
        assert_eq!(pq.extract_min(), Err(HuffmanError::EmptyQueue));
    }
}
