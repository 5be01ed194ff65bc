//! The tools module provides the helpers that sit around the huffman coding engine.
//!
//! The engine itself never touches files or the command line. The tools do:
//! - cli: Command line interface for the huffman tool.
//! - codebook_store: Save and load codebooks as JSON.
//! - files: Read inputs, write outputs, and optionally remove consumed files.
//! - freq_count: Frequency count of the symbols in a sequence.
//! - normalize: Optional text clean-up (lower case, joined lines) before encoding.
//!
pub mod cli;
pub mod codebook_store;
pub mod files;
pub mod freq_count;
pub mod normalize;
