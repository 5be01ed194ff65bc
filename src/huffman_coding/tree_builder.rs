//! Builds the huffman tree from a list of weighted symbols.
//!
//! Every symbol goes into the priority queue as a leaf, in list order. Then the two lightest entries are
//! pulled off, joined under a new internal node and put back, until only the root is left. The first
//! entry extracted becomes the left child.
//!

use log::{debug, trace};
use rustc_hash::FxHashSet;

use super::error::HuffmanError;
use super::node::{Node, Symbol};
use super::priority_queue::PriorityQueue;

/// Build a huffman tree and return its root. A single symbol produces a lone leaf.
pub fn build_tree<S: Symbol>(weighted: &[(S, u64)]) -> Result<Node<S>, HuffmanError> {
    if weighted.is_empty() {
        return Err(HuffmanError::InvalidInput(
            "cannot build a tree from an empty symbol list".to_string(),
        ));
    }

    let mut seen = FxHashSet::default();
    let mut pq = PriorityQueue::with_capacity(weighted.len());
    for &(symbol, weight) in weighted {
        if !seen.insert(symbol) {
            return Err(HuffmanError::InvalidInput(format!(
                "symbol {:?} is listed more than once",
                symbol
            )));
        }
        pq.insert(weight, Node::leaf(symbol, weight));
    }
    debug!("Building tree from {} symbols", pq.len());

    while pq.len() > 1 {
        let i = pq.extract_min()?;
        let j = pq.extract_min()?;
        let parent = Node::merge(i.node, j.node).ok_or_else(|| {
            HuffmanError::InvalidInput("total symbol weight overflows a u64".to_string())
        })?;
        trace!(
            "Merged weights {} + {} -> {}",
            i.weight,
            j.weight,
            parent.weight()
        );
        pq.insert(parent.weight(), parent);
    }

    let root = pq.extract_min()?.node;
    debug!(
        "Tree built: weight {}, depth {}",
        root.weight(),
        root.depth()
    );
    Ok(root)
}
