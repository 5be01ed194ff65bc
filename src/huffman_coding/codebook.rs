//! Turns a huffman tree into a codebook.
//!
//! Branch convention, used everywhere in this crate: taking the left branch adds a 1, taking the right
//! branch adds a 0. A tree that is a single leaf gives its symbol the code "0", since an empty code
//! could never be decoded.
//!
//! The tree is walked with an explicit stack rather than recursion. Skewed weight distributions (the
//! Fibonacci sequence is the classic case) produce a tree as deep as the alphabet is large, and that
//! depth must not land on the call stack.
//!

use log::{debug, trace};
use rustc_hash::{FxHashMap, FxHashSet};

use super::error::HuffmanError;
use super::node::{Node, Symbol};
use super::tree_builder::build_tree;
use crate::bitstream::BitSeq;

/// Mapping from symbol to code. Entries keep the order they were added in (tree order, left branch
/// first, for generated codebooks) so two codebooks built from the same weights compare and serialize
/// identically. Every codebook is prefix-free: the only ways to build one enforce it.
#[derive(Debug, Clone)]
pub struct Codebook<S> {
    entries: Vec<(S, BitSeq)>,
    index: FxHashMap<S, usize>,
}

impl<S: Symbol> Codebook<S> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Build a codebook from explicit (symbol, code) pairs, e.g. ones loaded from disk.
    /// Rejects empty codes, repeated symbols, and code sets that are not prefix-free.
    pub fn from_entries(entries: Vec<(S, BitSeq)>) -> Result<Self, HuffmanError> {
        let mut codebook = Self::with_capacity(entries.len());
        for (symbol, code) in entries {
            if code.is_empty() {
                return Err(HuffmanError::InvalidInput(format!(
                    "symbol {:?} has an empty code",
                    symbol
                )));
            }
            if codebook.contains(&symbol) {
                return Err(HuffmanError::InvalidInput(format!(
                    "symbol {:?} appears more than once",
                    symbol
                )));
            }
            codebook.push(symbol, code);
        }
        if !codebook.is_prefix_free() {
            return Err(HuffmanError::InvalidInput(
                "codes are not prefix-free".to_string(),
            ));
        }
        Ok(codebook)
    }

    fn push(&mut self, symbol: S, code: BitSeq) {
        self.index.insert(symbol, self.entries.len());
        self.entries.push((symbol, code));
    }

    pub fn get(&self, symbol: &S) -> Option<&BitSeq> {
        self.index.get(symbol).map(|&idx| &self.entries[idx].1)
    }

    pub fn contains(&self, symbol: &S) -> bool {
        self.index.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// (symbol, code) pairs in codebook order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &BitSeq)> + '_ {
        self.entries.iter().map(|(symbol, code)| (symbol, code))
    }

    /// Length of the longest code, 0 for an empty codebook.
    pub fn max_code_len(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, code)| code.len())
            .max()
            .unwrap_or(0)
    }

    /// True if no code is a prefix of another (or equal to another).
    pub fn is_prefix_free(&self) -> bool {
        // Once sorted, a code that prefixes any other code also prefixes its direct successor.
        let mut codes: Vec<&BitSeq> = self.entries.iter().map(|(_, code)| code).collect();
        codes.sort_unstable();
        codes.windows(2).all(|pair| !pair[1].starts_with(pair[0]))
    }

    /// Total encoded length in bits for the given weights: the sum of weight * code length.
    /// Returns None if a weighted symbol has no code or the total does not fit in a u64.
    pub fn weighted_length(&self, weighted: &[(S, u64)]) -> Option<u64> {
        weighted.iter().try_fold(0_u64, |acc, (symbol, weight)| {
            let bits = weight.checked_mul(self.get(symbol)?.len() as u64)?;
            acc.checked_add(bits)
        })
    }
}

impl<S: Symbol> Default for Codebook<S> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<S: Symbol> PartialEq for Codebook<S> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<S: Symbol> Eq for Codebook<S> {}

/// Walk the tree from `root` and assign a code to every leaf. The leaves must hold exactly the symbols
/// of `alphabet`, each once.
pub fn generate<S: Symbol>(root: &Node<S>, alphabet: &[S]) -> Result<Codebook<S>, HuffmanError> {
    let wanted: FxHashSet<S> = alphabet.iter().copied().collect();
    let mut codebook = Codebook::with_capacity(wanted.len());
    let mut unexpected = 0;

    let mut stack: Vec<(&Node<S>, BitSeq)> = vec![(root, BitSeq::new())];
    while let Some((node, path)) = stack.pop() {
        match node {
            Node::Leaf { symbol, .. } => {
                let code = if path.is_empty() {
                    BitSeq::from(vec![false])
                } else {
                    path
                };
                if wanted.contains(symbol) && !codebook.contains(symbol) {
                    trace!("{:?} -> {}", symbol, code);
                    codebook.push(*symbol, code);
                } else {
                    unexpected += 1;
                }
            }
            Node::Internal { left, right, .. } => {
                // Right goes on the stack first so the left subtree is coded first.
                stack.push((right, path.with_bit(false)));
                stack.push((left, path.with_bit(true)));
            }
        }
    }

    if codebook.len() != wanted.len() || unexpected > 0 {
        return Err(HuffmanError::IncompleteTraversal {
            expected: wanted.len(),
            assigned: codebook.len(),
            unexpected,
        });
    }
    debug!(
        "Generated {} codes, longest is {} bits",
        codebook.len(),
        codebook.max_code_len()
    );
    Ok(codebook)
}

/// Build the huffman codebook for a list of (symbol, weight) pairs. An empty list gives an empty
/// codebook. The result depends only on the list (including its order), never on earlier calls.
pub fn build_codebook<S: Symbol>(weighted: &[(S, u64)]) -> Result<Codebook<S>, HuffmanError> {
    if weighted.is_empty() {
        debug!("No symbols, returning an empty codebook");
        return Ok(Codebook::default());
    }
    let root = build_tree(weighted)?;
    let alphabet: Vec<S> = weighted.iter().map(|&(symbol, _)| symbol).collect();
    generate(&root, &alphabet)
}

#[cfg(test)]
mod test {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::{build_codebook, generate, Codebook};
    use crate::bitstream::BitSeq;
    use crate::huffman_coding::error::HuffmanError;
    use crate::huffman_coding::node::Node;

    fn book(pairs: &[(char, &str)]) -> Codebook<char> {
        Codebook::from_entries(
            pairs
                .iter()
                .map(|&(s, c)| (s, c.parse::<BitSeq>().unwrap()))
                .collect(),
        )
        .unwrap()
    }

    /// Smallest possible sum of weight * code length, found by trying every merge order. Every full
    /// binary tree comes out of some merge order, and its cost is the sum of its internal node weights.
    fn brute_force_cost(weights: &[u64]) -> u64 {
        if weights.len() <= 1 {
            return 0;
        }
        let mut best = u64::MAX;
        for i in 0..weights.len() {
            for j in (i + 1)..weights.len() {
                let merged = weights[i] + weights[j];
                let mut rest: Vec<u64> = weights
                    .iter()
                    .enumerate()
                    .filter(|&(k, _)| k != i && k != j)
                    .map(|(_, &w)| w)
                    .collect();
                rest.push(merged);
                best = best.min(merged + brute_force_cost(&rest));
            }
        }
        best
    }

    fn random_weights(rng: &mut StdRng, size: usize) -> Vec<(u16, u64)> {
        (0..size as u16).map(|s| (s, rng.gen_range(0..50))).collect()
    }

    #[test]
    fn reference_codebook_test() {
        let cb = build_codebook(&[('a', 4), ('b', 3), ('c', 1)]).unwrap();
        assert_eq!(cb.get(&'a').unwrap().to_string(), "0");
        assert_eq!(cb.get(&'b').unwrap().to_string(), "10");
        assert_eq!(cb.get(&'c').unwrap().to_string(), "11");
        assert_eq!(cb.len(), 3);
    }

    #[test]
    fn single_symbol_gets_one_bit_test() {
        let cb = build_codebook(&[('x', 9)]).unwrap();
        assert_eq!(cb.len(), 1);
        assert_eq!(cb.get(&'x').unwrap().to_string(), "0");
    }

    #[test]
    fn empty_list_test() {
        let weighted: [(char, u64); 0] = [];
        assert!(build_codebook(&weighted).unwrap().is_empty());
    }

    #[test]
    fn prefix_free_test() {
        let mut rng = StdRng::seed_from_u64(7);
        for size in 1..80 {
            let weighted = random_weights(&mut rng, size);
            let cb = build_codebook(&weighted).unwrap();
            assert_eq!(cb.len(), size);
            assert!(cb.is_prefix_free(), "not prefix-free for {:?}", weighted);
            assert!(cb.iter().all(|(_, code)| !code.is_empty()));
        }
    }

    #[test]
    fn optimal_against_brute_force_test() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let size = rng.gen_range(2..=5);
            let weighted = random_weights(&mut rng, size);
            let weights: Vec<u64> = weighted.iter().map(|w| w.1).collect();
            let cb = build_codebook(&weighted).unwrap();
            assert_eq!(
                cb.weighted_length(&weighted),
                Some(brute_force_cost(&weights)),
                "suboptimal code for {:?}",
                weighted
            );
        }
    }

    #[test]
    fn deterministic_test() {
        let mut rng = StdRng::seed_from_u64(3);
        let weighted = random_weights(&mut rng, 64);
        let first = build_codebook(&weighted).unwrap();
        let second = build_codebook(&weighted).unwrap();
        assert_eq!(first, second);
        assert!(first.iter().eq(second.iter()));
    }

    #[test]
    fn calls_do_not_share_state_test() {
        let big = build_codebook(&[('a', 1), ('b', 2), ('c', 3), ('d', 4)]).unwrap();
        let small = build_codebook(&[('e', 1), ('f', 1)]).unwrap();
        assert_eq!(big.len(), 4);
        assert_eq!(small.len(), 2);
        assert!(!small.contains(&'a'));
    }

    #[test]
    fn deep_tree_test() {
        let mut fib = vec![1_u64, 1];
        while fib.len() < 90 {
            let n = fib[fib.len() - 1] + fib[fib.len() - 2];
            fib.push(n);
        }
        let weighted: Vec<(u32, u64)> = fib.iter().enumerate().map(|(i, &w)| (i as u32, w)).collect();
        let cb = build_codebook(&weighted).unwrap();
        assert_eq!(cb.max_code_len(), 89);
        assert!(cb.is_prefix_free());
    }

    #[test]
    fn missing_leaf_test() {
        let root = Node::merge(Node::leaf('a', 1), Node::leaf('b', 1)).unwrap();
        assert_eq!(
            generate(&root, &['a', 'b', 'c']),
            Err(HuffmanError::IncompleteTraversal {
                expected: 3,
                assigned: 2,
                unexpected: 0
            })
        );
    }

    #[test]
    fn unexpected_leaf_test() {
        let root = Node::merge(Node::leaf('a', 1), Node::leaf('a', 1)).unwrap();
        assert_eq!(
            generate(&root, &['a']),
            Err(HuffmanError::IncompleteTraversal {
                expected: 1,
                assigned: 1,
                unexpected: 1
            })
        );
    }

    #[test]
    fn from_entries_validation_test() {
        let prefixed = vec![
            ('a', "0".parse().unwrap()),
            ('b', "01".parse().unwrap()),
        ];
        assert!(Codebook::from_entries(prefixed).is_err());

        let repeated = vec![
            ('a', "0".parse().unwrap()),
            ('b', "0".parse().unwrap()),
        ];
        assert!(Codebook::from_entries(repeated).is_err());

        let empty_code = vec![('a', BitSeq::new())];
        assert!(Codebook::from_entries(empty_code).is_err());

        let twice = vec![
            ('a', "0".parse().unwrap()),
            ('a', "1".parse().unwrap()),
        ];
        assert!(Codebook::from_entries(twice).is_err());
    }

    #[test]
    fn weighted_length_test() {
        let cb = book(&[('a', "0"), ('b', "10"), ('c', "11")]);
        assert_eq!(cb.weighted_length(&[('a', 4), ('b', 3), ('c', 1)]), Some(12));
        assert_eq!(cb.weighted_length(&[('z', 1)]), None);
        assert_eq!(cb.max_code_len(), 2);
    }

    #[test]
    fn weighted_length_overflow_test() {
        let cb = book(&[('a', "0"), ('b', "10"), ('c', "11")]);
        assert_eq!(cb.weighted_length(&[('b', u64::MAX)]), None);
        assert_eq!(cb.weighted_length(&[('a', u64::MAX), ('a', 1)]), None);
        assert_eq!(cb.weighted_length(&[('a', u64::MAX)]), Some(u64::MAX));
    }
}
