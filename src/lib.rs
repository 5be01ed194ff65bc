//! Huffman coding of symbol sequences.
//!
//! Version 0.1.0
//!
//! Builds an optimal prefix code for the symbols of a sequence, encodes the sequence as a sequence of
//! bits, and decodes it back. Codebooks are deterministic: the same weights always give the same codes,
//! because ties between equal weights are always broken the same way (the entry inserted last is taken
//! first).
//!
//! Basic usage of the library:
//!
//! ```
//! use huffman::{decode, huffman_encode};
//!
//! let text: Vec<char> = "aaaabbbc".chars().collect();
//! let (codebook, bits) = huffman_encode(&text)?;
//! assert_eq!(bits.to_string(), "000010101011");
//! assert_eq!(decode(&bits, &codebook)?, text);
//! # Ok::<(), huffman::HuffmanError>(())
//! ```
//!
//! Basic usage of the command line tool:
//!
//! `$> huffman -z poem.txt`
//!
//! This writes poem.txt.huff (the bits, as text) and poem.txt.book (the codebook, as JSON).
//! `$> huffman -d poem.txt.huff` restores poem.txt.
//!
pub mod bitstream;
pub mod huffman_coding;
pub mod tools;

pub use bitstream::BitSeq;
pub use huffman_coding::codebook::{build_codebook, Codebook};
pub use huffman_coding::decode::decode;
pub use huffman_coding::encode::{encode, huffman_encode};
pub use huffman_coding::error::HuffmanError;
pub use tools::freq_count::frequencies;
