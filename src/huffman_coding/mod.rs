//! The huffman_coding module is the coding engine: it builds an optimal prefix code for the symbols of
//! a sequence and uses it to turn the sequence into bits and back.
//!
//! The pieces, in the order the data flows through them:
//! - priority_queue: weight-ordered queue with a fixed tie-break (last inserted comes out first).
//! - tree_builder: merges the two lightest entries until one root is left.
//! - codebook: walks the tree and assigns a code to each symbol (left = 1, right = 0).
//! - encode: concatenates the codes of a sequence.
//! - decode: matches bits against the codes to get the sequence back.
//!
//! Frequencies are counted by `tools::freq_count`. Everything here is synchronous and free of I/O.
//! Every structure lives only as long as the call that built it.
//!

pub mod codebook;
pub mod decode;
pub mod encode;
pub mod error;
pub mod node;
pub mod priority_queue;
pub mod tree_builder;
