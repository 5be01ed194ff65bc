//! The bitstream module holds the bit-level types used by the huffman coder.
//!
//! Huffman output here is a logical sequence of bits, not a byte-packed stream. A `BitSeq` is used both
//! for the individual codes in a codebook and for the concatenated output of the encoder. The `BitReader`
//! walks a `BitSeq` one bit at a time and keeps track of where it is, so that decode errors can say
//! exactly which bit they failed on.
//!
//! When bits have to leave the program (a file, stdout) they are written as text, one '0' or '1'
//! character per bit.
//!
pub mod bitreader;
pub mod bitseq;

pub use bitreader::BitReader;
pub use bitseq::BitSeq;
