//! Decodes a bit sequence with a codebook.
//!
//! Bits are gathered one at a time. After each bit the gathered bits are looked up among the codes;
//! because the codebook is prefix-free, the first time they equal a code that is the only code they can
//! ever equal, so the symbol is emitted and gathering starts over. Gathering more bits than the longest
//! code, or running out of bits part way through a code, means the input is corrupt or belongs to a
//! different codebook.
//!

use log::{debug, trace};
use rustc_hash::FxHashMap;

use super::codebook::Codebook;
use super::error::HuffmanError;
use super::node::Symbol;
use crate::bitstream::{BitReader, BitSeq};

/// Recover the symbol sequence from `bits`.
pub fn decode<S: Symbol>(bits: &BitSeq, codebook: &Codebook<S>) -> Result<Vec<S>, HuffmanError> {
    let lookup: FxHashMap<&BitSeq, S> = codebook.iter().map(|(s, code)| (code, *s)).collect();
    let max_len = codebook.max_code_len();

    let mut out = Vec::new();
    let mut reader = BitReader::new(bits);
    let mut chunk = BitSeq::with_capacity(max_len);
    let mut chunk_start = 0;

    while let Some(bit) = reader.bit() {
        chunk.push(bit);
        if let Some(&symbol) = lookup.get(&chunk) {
            out.push(symbol);
            chunk.clear();
            chunk_start = reader.position();
        } else if chunk.len() >= max_len {
            trace!("No code matches {} at {}", chunk, reader.loc());
            return Err(HuffmanError::MalformedInput {
                position: chunk_start,
                reason: "bits do not match any code",
            });
        }
    }

    if !chunk.is_empty() {
        return Err(HuffmanError::MalformedInput {
            position: chunk_start,
            reason: "input ends in the middle of a code",
        });
    }
    debug!("Decoded {} bits into {} symbols", bits.len(), out.len());
    Ok(out)
}
